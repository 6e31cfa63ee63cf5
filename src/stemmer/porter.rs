//! Porter stemmer for Portuguese.
//!
//! Wraps the Snowball Portuguese algorithm, the Portuguese adaptation of
//! Porter's suffix-stripping approach, from the `rust-stemmers` crate.
//!
//! # Examples
//!
//! ```
//! use ptstem::stemmer::Stemmer;
//! use ptstem::stemmer::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//! assert_eq!(stemmer.stem_word("Gatos"), stemmer.stem_word("gatos"));
//! ```

use std::fmt;

use rust_stemmers::{Algorithm as SnowballAlgorithm, Stemmer as SnowballStemmer};

use super::Stemmer;

/// Snowball Portuguese stemmer. Lowercases before stemming.
pub struct PorterStemmer {
    inner: SnowballStemmer,
}

impl fmt::Debug for PorterStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PorterStemmer")
            .field("language", &"portuguese")
            .finish()
    }
}

impl PorterStemmer {
    /// Create a new Portuguese Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer {
            inner: SnowballStemmer::create(SnowballAlgorithm::Portuguese),
        }
    }
}

impl Default for PorterStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for PorterStemmer {
    fn stem_word(&self, word: &str) -> Option<String> {
        Some(self.inner.stem(&word.to_lowercase()).into_owned())
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
