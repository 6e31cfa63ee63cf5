//! Unicode word tokenizer implementation.
//!
//! Splits text using Unicode word boundary rules (UAX #29), which handle
//! accented Portuguese letters natively, and keeps only segments that carry
//! at least one alphanumeric character.
//!
//! # Examples
//!
//! ```
//! use ptstem::analysis::tokenizer::Tokenizer;
//! use ptstem::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Não há ação!").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "Não");
//! assert_eq!(tokens[1].text, "há");
//! assert_eq!(tokens[2].text, "ação");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .split_word_bounds()
            // Only keep actual words (not whitespace or punctuation)
            .filter(|word| word.chars().any(|c| c.is_alphanumeric()))
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_word_tokenizer() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("olá, mundo!").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "olá");
        assert_eq!(tokens[1].text, "mundo");
        assert_eq!(tokens[1].position, 1);
    }

    #[test]
    fn test_apostrophe_joins_and_hyphen_splits() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("guarda-chuva d'água").unwrap().collect();

        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["guarda", "chuva", "d'água"]);
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_tokenize_all_is_flat_and_ordered() {
        let tokenizer = UnicodeWordTokenizer::new();
        let texts = vec!["eu vou".to_string(), String::new(), "tu vais".to_string()];
        let tokens = tokenizer.tokenize_all(&texts).unwrap();

        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["eu", "vou", "tu", "vais"]);
        assert_eq!(tokens[3].position, 3);
    }

    #[test]
    fn test_deterministic() {
        let tokenizer = UnicodeWordTokenizer::new();
        let a: Vec<Token> = tokenizer.tokenize("Coração, razão.").unwrap().collect();
        let b: Vec<Token> = tokenizer.tokenize("Coração, razão.").unwrap().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(UnicodeWordTokenizer::new().name(), "unicode_word");
    }
}
