//! Token filter implementations.
//!
//! Filters decide which tokens reach the stemmer. They run in sequence after
//! the tokenizer and drop tokens from the stream rather than rewriting them.

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Apply this filter to an already collected token list.
    fn filter_vec(&self, tokens: Vec<Token>) -> Result<Vec<Token>> {
        Ok(self.filter(Box::new(tokens.into_iter()))?.collect())
    }
}

pub mod ignore;
pub mod length;

pub use ignore::{IgnoreFilter, IgnoreRule};
pub use length::MinLengthFilter;
