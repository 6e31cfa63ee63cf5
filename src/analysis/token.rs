//! Token types for text analysis.
//!
//! A [`Token`] is one word extracted from a source text. Its identity is the
//! exact character sequence in `text` (case-sensitive).
//!
//! # Examples
//!
//! ```
//! use ptstem::analysis::token::Token;
//!
//! let token = Token::new("ação", 1);
//! assert_eq!(token.text, "ação");
//! assert_eq!(token.char_len(), 4);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single word token produced by a tokenizer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }

    /// Number of characters (Unicode scalar values) in the token text.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Clone this token with updated position.
    pub fn with_position(&self, position: usize) -> Self {
        let mut token = self.clone();
        token.position = position;
        token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
