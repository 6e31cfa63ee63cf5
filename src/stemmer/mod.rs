//! Stemming backends and dispatch.
//!
//! Every backend implements [`Stemmer`], a word → stem capability that may
//! report `None` when it cannot stem a word. [`Algorithm`] is the closed set
//! of backends the pipeline knows about; [`Algorithm::build`] turns a tag and
//! its [`StemOptions`] into a ready backend, and [`stem`] routes a batch of
//! words to it.
//!
//! Backends own the decision to complete their output: the provided
//! [`Stemmer::stem_words`] runs the frequency vote from
//! [`crate::completion`] when asked to.
//!
//! # Examples
//!
//! ```
//! use ptstem::stemmer::{stem, Algorithm, StemOptions};
//!
//! let words: Vec<String> = ["gatos", "gato", "gato"].iter().map(|w| w.to_string()).collect();
//! let stems = stem(&words, Algorithm::Rslp, true, &StemOptions::default()).unwrap();
//!
//! assert_eq!(stems, vec![Some("gato".to_string()); 3]);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::completion;
use crate::error::{PtstemError, Result};

pub mod dictionary;
pub mod porter;
pub mod rslp;

pub use dictionary::{Dictionary, DictionaryStemmer, ModifiedDictionaryStemmer};
pub use porter::PorterStemmer;
pub use rslp::RslpStemmer;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word, or return `None` when the backend has no stem for it.
    fn stem_word(&self, word: &str) -> Option<String>;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;

    /// Stem every word, one output per input, in input order.
    ///
    /// Each distinct word is stemmed once.
    fn stem_all(&self, words: &[String]) -> Vec<Option<String>> {
        let mut cache: AHashMap<&str, Option<String>> = AHashMap::new();
        words
            .iter()
            .map(|word| {
                cache
                    .entry(word.as_str())
                    .or_insert_with(|| self.stem_word(word))
                    .clone()
            })
            .collect()
    }

    /// Stem a batch of words, optionally completing the stems.
    ///
    /// With `complete`, every stem is replaced by the most frequent word of
    /// its group within `words`.
    fn stem_words(&self, words: &[String], complete: bool) -> Result<Vec<Option<String>>> {
        let stems = self.stem_all(words);
        trace!(
            backend = self.name(),
            words = words.len(),
            absent = stems.iter().filter(|s| s.is_none()).count(),
            "stemmed batch"
        );

        if complete {
            completion::complete_stems(words, &stems)
        } else {
            Ok(stems)
        }
    }
}

/// Options forwarded to the selected backend.
///
/// Each backend validates the options it needs when it is built.
#[derive(Clone, Debug, Default)]
pub struct StemOptions {
    /// Word list used by the dictionary-based backends.
    pub dictionary: Option<Arc<Dictionary>>,
}

impl StemOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a dictionary for the dictionary-based backends.
    pub fn with_dictionary(mut self, dictionary: Dictionary) -> Self {
        self.dictionary = Some(Arc::new(dictionary));
        self
    }

    fn require_dictionary(&self, algorithm: Algorithm) -> Result<Arc<Dictionary>> {
        self.dictionary.clone().ok_or_else(|| {
            PtstemError::configuration(format!(
                "Algorithm '{algorithm}' requires a dictionary in the stem options"
            ))
        })
    }
}

/// The stemming algorithms the pipeline can dispatch to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Dictionary lookup (hunspell style).
    Hunspell,
    /// Removal of Suffixes for the Portuguese Language.
    #[default]
    Rslp,
    /// Snowball's Portuguese variant of Porter's algorithm.
    Porter,
    /// Dictionary lookup preferring the shortest stem, never absent.
    ModifiedHunspell,
}

impl Algorithm {
    /// All known algorithms.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Hunspell,
        Algorithm::Rslp,
        Algorithm::Porter,
        Algorithm::ModifiedHunspell,
    ];

    /// The configuration name of this algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Hunspell => "hunspell",
            Algorithm::Rslp => "rslp",
            Algorithm::Porter => "porter",
            Algorithm::ModifiedHunspell => "modified-hunspell",
        }
    }

    /// Build the backend for this algorithm.
    pub fn build(&self, options: &StemOptions) -> Result<Box<dyn Stemmer>> {
        let stemmer: Box<dyn Stemmer> = match self {
            Algorithm::Hunspell => Box::new(DictionaryStemmer::new(
                options.require_dictionary(*self)?,
            )),
            Algorithm::Rslp => Box::new(RslpStemmer::new()),
            Algorithm::Porter => Box::new(PorterStemmer::new()),
            Algorithm::ModifiedHunspell => Box::new(ModifiedDictionaryStemmer::new(
                options.require_dictionary(*self)?,
            )),
        };
        Ok(stemmer)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = PtstemError;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == s)
            .ok_or_else(|| {
                PtstemError::configuration(format!(
                    "Unknown algorithm '{s}', expected one of: hunspell, rslp, porter, modified-hunspell"
                ))
            })
    }
}

/// Stem `words` with the selected algorithm.
///
/// The backend is built (and its options validated) before any word is
/// processed. Returns one entry per input word, in order.
pub fn stem(
    words: &[String],
    algorithm: Algorithm,
    complete: bool,
    options: &StemOptions,
) -> Result<Vec<Option<String>>> {
    let stemmer = algorithm.build(options)?;
    stemmer.stem_words(words, complete)
}
