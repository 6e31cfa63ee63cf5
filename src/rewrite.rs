//! Whole-word text rewriting.
//!
//! [`TextRewriter`] substitutes every whole-word occurrence of the keys of a
//! [`ReplacementMap`] in one pass. All keys are compiled into a single
//! alternation anchored on word boundaries, `\b(?:k1|k2|...)\b`, so a
//! replacement written by one key is never revisited by another, and a key
//! never matches inside a longer word.
//!
//! # Examples
//!
//! ```
//! use ptstem::rewrite::{ReplacementMap, TextRewriter};
//!
//! let mut map = ReplacementMap::new();
//! map.insert("gostei", "gosto");
//! map.insert("gosto", "gost");
//!
//! let rewriter = TextRewriter::new(&map).unwrap();
//! assert_eq!(
//!     rewriter.rewrite("Eu gostei, gostosamente."),
//!     "Eu gosto, gostosamente."
//! );
//! ```

use ahash::AHashMap;
use regex::{Captures, Regex, RegexBuilder};

use crate::error::{PtstemError, Result};

/// Upper bound for the compiled alternation of a large vocabulary.
const PATTERN_SIZE_LIMIT: usize = 1 << 30;

/// Mapping from original word to the text that replaces it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplacementMap {
    entries: AHashMap<String, String>,
}

impl ReplacementMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from parallel word and replacement sequences.
    ///
    /// Words without a replacement are left out, so they are never rewritten.
    /// When a word repeats, its first replacement is kept.
    pub fn from_pairs(words: &[String], replacements: &[Option<String>]) -> Result<Self> {
        if words.len() != replacements.len() {
            return Err(PtstemError::analysis(format!(
                "Replacement map needs one entry per word, got {} words and {} replacements",
                words.len(),
                replacements.len()
            )));
        }

        let mut map = ReplacementMap::new();
        for (word, replacement) in words.iter().zip(replacements) {
            if let Some(replacement) = replacement {
                map.insert(word.as_str(), replacement.as_str());
            }
        }
        Ok(map)
    }

    /// Add a replacement unless the word already has one.
    ///
    /// Returns `true` if the entry was added.
    pub fn insert<W: Into<String>, R: Into<String>>(&mut self, word: W, replacement: R) -> bool {
        let word = word.into();
        if self.entries.contains_key(&word) {
            return false;
        }
        self.entries.insert(word, replacement.into());
        true
    }

    /// Get the replacement of a word.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(|s| s.as_str())
    }

    /// Number of words with a replacement.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(word, replacement)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Rewrites texts according to a replacement map.
#[derive(Clone, Debug)]
pub struct TextRewriter {
    /// `None` when there is nothing to replace.
    pattern: Option<Regex>,
    replacements: AHashMap<String, String>,
}

impl TextRewriter {
    /// Compile a rewriter for the given map.
    pub fn new(map: &ReplacementMap) -> Result<Self> {
        if map.is_empty() {
            return Ok(TextRewriter {
                pattern: None,
                replacements: AHashMap::new(),
            });
        }

        // Longest keys first; sorted for a deterministic pattern.
        let mut keys: Vec<&str> = map.entries.keys().map(|k| k.as_str()).collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let alternation = keys
            .iter()
            .map(|key| regex::escape(key))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
            .size_limit(PATTERN_SIZE_LIMIT)
            .dfa_size_limit(PATTERN_SIZE_LIMIT)
            .build()
            .map_err(|e| PtstemError::analysis(format!("Failed to compile replacements: {e}")))?;

        Ok(TextRewriter {
            pattern: Some(pattern),
            replacements: map.entries.clone(),
        })
    }

    /// Rewrite one text; unmatched text is copied verbatim.
    pub fn rewrite(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return text.to_string();
        };

        pattern
            .replace_all(text, |caps: &Captures| {
                let word = &caps[0];
                self.replacements
                    .get(word)
                    .cloned()
                    .unwrap_or_else(|| word.to_string())
            })
            .into_owned()
    }

    /// Rewrite every text, preserving order.
    pub fn rewrite_all(&self, texts: &[String]) -> Vec<String> {
        texts.iter().map(|text| self.rewrite(text)).collect()
    }
}
