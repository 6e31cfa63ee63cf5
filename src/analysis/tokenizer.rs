//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first stage of the stemming pipeline: they split raw
//! text into word tokens. Punctuation and whitespace are boundaries, never
//! tokens.
//!
//! # Examples
//!
//! ```
//! use ptstem::analysis::tokenizer::Tokenizer;
//! use ptstem::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Eu gosto, tu gostas.").unwrap().collect();
//! assert_eq!(tokens.len(), 4);
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a single tokenizer can serve
/// concurrent pipeline invocations.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Tokenize a sequence of texts into one flat, ordered token list.
    ///
    /// Positions are renumbered across the whole sequence.
    fn tokenize_all(&self, texts: &[String]) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        for text in texts {
            for token in self.tokenize(text)? {
                let position = tokens.len();
                tokens.push(token.with_position(position));
            }
        }
        Ok(tokens)
    }
}

pub mod unicode_word;

pub use unicode_word::UnicodeWordTokenizer;
