//! Configuration for stemming calls.
//!
//! A [`StemConfig`] selects the backend and tunes the text pipeline. It can
//! be assembled in code with the `with_*` builders or loaded from JSON with
//! [`StemConfig::from_json`]. Loading is strict: `"complete": 1` is rejected
//! rather than coerced, and unknown algorithm names or fields fail.
//!
//! The ignore list distinguishes "not given" from "given but undefined":
//!
//! | JSON                  | [`IgnoreSetting`]   |
//! |-----------------------|---------------------|
//! | field absent          | `Omitted`           |
//! | `"ignore": null`      | `Undefined` (error) |
//! | `"ignore": [null]`    | `Undefined` (error) |
//! | `"ignore": ["a", ".*ção$"]` | `Rules`       |
//!
//! # Examples
//!
//! ```
//! use ptstem::config::StemConfig;
//! use ptstem::stemmer::Algorithm;
//!
//! let config = StemConfig::from_json(r#"{"algorithm": "porter", "min_word_length": 4}"#).unwrap();
//! assert_eq!(config.algorithm, Algorithm::Porter);
//! assert!(config.complete);
//!
//! assert!(StemConfig::from_json(r#"{"complete": 1}"#).is_err());
//! assert!(StemConfig::from_json(r#"{"ignore": [null]}"#).is_err());
//! ```

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::IgnoreFilter;
use crate::error::{PtstemError, Result};
use crate::stemmer::Algorithm;

/// Default minimum length of a word eligible for stemming in texts.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// The ignore list of a call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum IgnoreSetting {
    /// No ignore list was given.
    #[default]
    Omitted,
    /// An ignore list was given but holds an undefined value.
    Undefined,
    /// Literal words and regular expressions to exclude.
    Rules(Vec<String>),
}

impl IgnoreSetting {
    /// Check if no ignore list was given.
    pub fn is_omitted(&self) -> bool {
        matches!(self, IgnoreSetting::Omitted)
    }

    /// Build the filter for this setting.
    pub fn to_filter(&self) -> Result<IgnoreFilter> {
        match self {
            IgnoreSetting::Omitted => Ok(IgnoreFilter::new()),
            IgnoreSetting::Undefined => Err(PtstemError::configuration(
                "Ignore list is undefined; omit it or pass a list of words and patterns",
            )),
            IgnoreSetting::Rules(entries) => IgnoreFilter::from_entries(entries),
        }
    }
}

impl<S: Into<String>> From<Vec<S>> for IgnoreSetting {
    fn from(entries: Vec<S>) -> Self {
        IgnoreSetting::Rules(entries.into_iter().map(Into::into).collect())
    }
}

impl<'de> Deserialize<'de> for IgnoreSetting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
        Ok(match raw {
            None => IgnoreSetting::Undefined,
            Some(entries) if entries.iter().any(Option::is_none) => IgnoreSetting::Undefined,
            Some(entries) => IgnoreSetting::Rules(entries.into_iter().flatten().collect()),
        })
    }
}

impl Serialize for IgnoreSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            IgnoreSetting::Omitted | IgnoreSetting::Undefined => serializer.serialize_none(),
            IgnoreSetting::Rules(entries) => entries.serialize(serializer),
        }
    }
}

/// Options of a `stem_words` or `stem_text` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StemConfig {
    /// Backend used to stem words.
    pub algorithm: Algorithm,

    /// Replace stems by the most frequent word of their group.
    pub complete: bool,

    /// Words shorter than this (in characters) are not stemmed in texts.
    pub min_word_length: usize,

    /// Words and patterns excluded from stemming in texts.
    #[serde(skip_serializing_if = "IgnoreSetting::is_omitted")]
    pub ignore: IgnoreSetting,
}

impl Default for StemConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            complete: true,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            ignore: IgnoreSetting::Omitted,
        }
    }
}

impl StemConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: StemConfig = serde_json::from_str(json).map_err(|e| {
            PtstemError::configuration(format!("Invalid stem configuration: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize this configuration to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Set the stemming algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Enable or disable completion.
    pub fn with_complete(mut self, complete: bool) -> Self {
        self.complete = complete;
        self
    }

    /// Set the minimum word length for text stemming.
    pub fn with_min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = min_word_length;
        self
    }

    /// Set the ignore list.
    pub fn with_ignore<I: Into<IgnoreSetting>>(mut self, ignore: I) -> Self {
        self.ignore = ignore.into();
        self
    }

    /// Check the configuration and compile its ignore rules.
    pub fn validate(&self) -> Result<()> {
        self.ignore.to_filter().map(|_| ())
    }
}
