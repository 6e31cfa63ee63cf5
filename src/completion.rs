//! Stem completion by frequency vote.
//!
//! Completion replaces every word sharing a stem with the surface form of
//! that stem group observed most often in the corpus, so the normalized text
//! only ever contains attested words instead of stem fragments.
//!
//! The computation is a two-pass aggregation:
//!
//! 1. count occurrences of each distinct word, remembering the order in
//!    which words were first seen;
//! 2. for each stem, keep the word with the highest count, breaking ties by
//!    first-seen order.
//!
//! Counts must cover the whole corpus. When a corpus is processed in shards,
//! build one [`FrequencyTable`] per shard and [`merge`](FrequencyTable::merge)
//! them in corpus order before asking for representatives.
//!
//! # Examples
//!
//! ```
//! use ptstem::completion::complete;
//!
//! let words = ["gostei", "gosto", "gosto", "gostou"];
//! let stems = [Some("gost"), Some("gost"), Some("gost"), Some("gost")];
//! let representatives = complete(&words, &stems).unwrap();
//!
//! assert_eq!(representatives["gost"], "gosto");
//! ```

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{PtstemError, Result};

/// Occurrence statistics of one distinct word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    /// The surface form as it appeared in the corpus.
    pub word: String,
    /// The stem the backend produced for it.
    pub stem: String,
    /// How many times the word occurred.
    pub count: usize,
}

/// Word frequencies of a corpus, kept in first-seen order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FrequencyTable {
    entries: Vec<WordFrequency>,
    #[serde(skip)]
    index: AHashMap<String, usize>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from parallel word and stem sequences.
    ///
    /// Words whose stem is `None` are not counted.
    pub fn from_pairs<W, S>(words: &[W], stems: &[Option<S>]) -> Result<Self>
    where
        W: AsRef<str>,
        S: AsRef<str>,
    {
        if words.len() != stems.len() {
            return Err(PtstemError::analysis(format!(
                "Completion needs one stem per word, got {} words and {} stems",
                words.len(),
                stems.len()
            )));
        }

        let mut table = FrequencyTable::new();
        for (word, stem) in words.iter().zip(stems) {
            if let Some(stem) = stem {
                table.observe(word.as_ref(), stem.as_ref());
            }
        }
        Ok(table)
    }

    /// Record one occurrence of `word` with the given stem.
    pub fn observe(&mut self, word: &str, stem: &str) {
        self.add(word, stem, 1);
    }

    fn add(&mut self, word: &str, stem: &str, count: usize) {
        if self.index.len() != self.entries.len() {
            self.rebuild_index();
        }
        match self.index.get(word) {
            Some(&slot) => self.entries[slot].count += count,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push(WordFrequency {
                    word: word.to_string(),
                    stem: stem.to_string(),
                    count,
                });
            }
        }
    }

    // A deserialized table arrives without its lookup index.
    fn rebuild_index(&mut self) {
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(slot, entry)| (entry.word.clone(), slot))
            .collect();
    }

    /// Fold the counts of a later shard into this table.
    ///
    /// Words new to this table are appended after every word already seen,
    /// so merging shards in corpus order reproduces the first-seen order of
    /// the whole corpus.
    pub fn merge(&mut self, other: FrequencyTable) {
        for entry in other.entries {
            self.add(&entry.word, &entry.stem, entry.count);
        }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no word has been observed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Occurrence count of a word, zero when unseen.
    pub fn count(&self, word: &str) -> usize {
        let slot = if self.index.len() == self.entries.len() {
            self.index.get(word).copied()
        } else {
            self.entries.iter().position(|entry| entry.word == word)
        };
        slot.map_or(0, |slot| self.entries[slot].count)
    }

    /// Iterate over the distinct words in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &WordFrequency> {
        self.entries.iter()
    }

    /// Map every stem to its representative word.
    ///
    /// The representative is the most frequent word of the stem group; among
    /// equally frequent words the one seen first wins.
    pub fn representatives(&self) -> AHashMap<String, String> {
        let mut best: AHashMap<&str, &WordFrequency> = AHashMap::new();
        for entry in &self.entries {
            best.entry(entry.stem.as_str())
                .and_modify(|current| {
                    if entry.count > current.count {
                        *current = entry;
                    }
                })
                .or_insert(entry);
        }

        best.into_iter()
            .map(|(stem, entry)| (stem.to_string(), entry.word.clone()))
            .collect()
    }
}

/// Compute the representative word of every stem.
///
/// `words` and `stems` are parallel: the i-th stem belongs to the i-th word.
/// Words without a stem take no part in the vote.
pub fn complete<W, S>(words: &[W], stems: &[Option<S>]) -> Result<AHashMap<String, String>>
where
    W: AsRef<str>,
    S: AsRef<str>,
{
    Ok(FrequencyTable::from_pairs(words, stems)?.representatives())
}

/// Replace each stem by the representative of its group.
///
/// Returns one entry per input word, `None` where the stem was absent.
pub fn complete_stems<W, S>(words: &[W], stems: &[Option<S>]) -> Result<Vec<Option<String>>>
where
    W: AsRef<str>,
    S: AsRef<str>,
{
    let representatives = complete(words, stems)?;
    Ok(apply_representatives(stems, &representatives))
}

/// Look up the representative of each stem in a precomputed table.
pub fn apply_representatives<S: AsRef<str>>(
    stems: &[Option<S>],
    representatives: &AHashMap<String, String>,
) -> Vec<Option<String>> {
    stems
        .iter()
        .map(|stem| {
            stem.as_ref()
                .and_then(|stem| representatives.get(stem.as_ref()).cloned())
        })
        .collect()
}
