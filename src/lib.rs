//! # ptstem
//!
//! Stemming and corpus-faithful normalization of Portuguese text.
//!
//! ## Features
//!
//! - Four interchangeable backends: dictionary lookup (hunspell style), a
//!   modified dictionary lookup, RSLP suffix stripping and Snowball's
//!   Portuguese Porter stemmer
//! - Completion: replace each stem by the word of its group seen most often
//! - Whole-word, single-pass rewriting of texts
//! - Literal and regular expression ignore rules
//! - Sharded parallel text stemming with merged word frequencies
//!
//! ## Example
//!
//! ```
//! use ptstem::prelude::*;
//!
//! let texts = vec!["Gostei do filme. Gosto muito de filmes e gostou dele.".to_string()];
//! let stemmed = stem_text(&texts, &StemConfig::default(), &StemOptions::default()).unwrap();
//!
//! assert_eq!(
//!     stemmed,
//!     vec!["Gostei do filme. Gostei muito de filme e Gostei dele.".to_string()]
//! );
//! ```

pub mod analysis;
pub mod completion;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod rewrite;
pub mod stemmer;

pub mod prelude {
    pub use crate::config::{IgnoreSetting, StemConfig};
    pub use crate::error::{PtstemError, Result};
    pub use crate::pipeline::{stem_text, stem_text_parallel, stem_words};
    pub use crate::stemmer::{Algorithm, Dictionary, StemOptions, Stemmer};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
