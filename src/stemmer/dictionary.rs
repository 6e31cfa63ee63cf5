//! Dictionary-based stemmers.
//!
//! A [`Dictionary`] maps surface words to one or more candidate stems, the
//! way a hunspell word list does after affix expansion. Building the
//! dictionary is up to the caller; it can be filled in code or deserialized
//! from JSON.
//!
//! Two backends read it:
//!
//! - [`DictionaryStemmer`] returns the last candidate listed for a word and
//!   reports `None` for words the dictionary does not know.
//! - [`ModifiedDictionaryStemmer`] returns the shortest candidate and falls
//!   back to the lowercased word itself, so it never reports `None`.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use ptstem::stemmer::Stemmer;
//! use ptstem::stemmer::dictionary::{Dictionary, DictionaryStemmer};
//!
//! let dictionary = Dictionary::from_pairs([("gatos", "gato"), ("gatas", "gato")]);
//! let stemmer = DictionaryStemmer::new(Arc::new(dictionary));
//!
//! assert_eq!(stemmer.stem_word("gatos"), Some("gato".to_string()));
//! assert_eq!(stemmer.stem_word("cachorro"), None);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Stemmer;

/// Word list mapping surface forms to candidate stems.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    entries: HashMap<String, Vec<String>>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from `(word, stem)` pairs.
    ///
    /// A word listed several times collects every distinct stem, in order.
    pub fn from_pairs<I, W, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (W, S)>,
        W: Into<String>,
        S: Into<String>,
    {
        let mut dictionary = Dictionary::new();
        for (word, stem) in pairs {
            dictionary.insert(word, stem);
        }
        dictionary
    }

    /// Add a candidate stem for a word.
    pub fn insert<W: Into<String>, S: Into<String>>(&mut self, word: W, stem: S) {
        let stem = stem.into();
        let candidates = self.entries.entry(word.into()).or_default();
        if !candidates.contains(&stem) {
            candidates.push(stem);
        }
    }

    /// Candidate stems of a word.
    ///
    /// Looks the word up as written first, then lowercased, so sentence
    /// initial capitals still hit the entry.
    pub fn candidates(&self, word: &str) -> Option<&[String]> {
        let known = |key: &str| {
            self.entries
                .get(key)
                .map(|candidates| candidates.as_slice())
                .filter(|candidates| !candidates.is_empty())
        };
        known(word).or_else(|| known(word.to_lowercase().as_str()))
    }

    /// Check if the dictionary knows a word.
    pub fn contains(&self, word: &str) -> bool {
        self.candidates(word).is_some()
    }

    /// Number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Plain dictionary lookup.
#[derive(Clone, Debug)]
pub struct DictionaryStemmer {
    dictionary: Arc<Dictionary>,
}

impl DictionaryStemmer {
    /// Create a stemmer over the given dictionary.
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        DictionaryStemmer { dictionary }
    }
}

impl Stemmer for DictionaryStemmer {
    fn stem_word(&self, word: &str) -> Option<String> {
        self.dictionary
            .candidates(word)
            .and_then(|candidates| candidates.last().cloned())
    }

    fn name(&self) -> &'static str {
        "hunspell"
    }
}

/// Dictionary lookup that prefers the most reduced stem.
#[derive(Clone, Debug)]
pub struct ModifiedDictionaryStemmer {
    dictionary: Arc<Dictionary>,
}

impl ModifiedDictionaryStemmer {
    /// Create a stemmer over the given dictionary.
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        ModifiedDictionaryStemmer { dictionary }
    }
}

impl Stemmer for ModifiedDictionaryStemmer {
    fn stem_word(&self, word: &str) -> Option<String> {
        let shortest = self.dictionary.candidates(word).and_then(|candidates| {
            candidates
                .iter()
                .min_by_key(|candidate| candidate.chars().count())
                .cloned()
        });
        Some(shortest.unwrap_or_else(|| word.to_lowercase()))
    }

    fn name(&self) -> &'static str {
        "modified-hunspell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Arc<Dictionary> {
        Arc::new(Dictionary::from_pairs([
            ("gostei", "gostar"),
            ("gosto", "gosto"),
            ("gosto", "gostar"),
            ("casas", "casa"),
            ("casas", "casar"),
        ]))
    }

    #[test]
    fn test_insert_keeps_distinct_candidates_in_order() {
        let mut dictionary = Dictionary::new();
        dictionary.insert("casas", "casa");
        dictionary.insert("casas", "casar");
        dictionary.insert("casas", "casa");

        assert_eq!(
            dictionary.candidates("casas").unwrap(),
            &["casa".to_string(), "casar".to_string()]
        );
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn test_lookup_falls_back_to_lowercase() {
        let dictionary = dictionary();
        assert!(dictionary.contains("Casas"));
        assert!(!dictionary.contains("casinha"));
    }

    #[test]
    fn test_empty_exact_entry_falls_back_to_lowercase() {
        let dictionary: Dictionary = serde_json::from_str(
            r#"{"entries": {"Casas": [], "casas": ["casa"], "Nada": []}}"#,
        )
        .unwrap();

        assert_eq!(dictionary.candidates("Casas").unwrap(), &["casa".to_string()]);
        assert!(!dictionary.contains("Nada"));

        let stemmer = DictionaryStemmer::new(Arc::new(dictionary));
        assert_eq!(stemmer.stem_word("Casas"), Some("casa".to_string()));
        assert_eq!(stemmer.stem_word("Nada"), None);
    }

    #[test]
    fn test_dictionary_stemmer_takes_last_candidate() {
        let stemmer = DictionaryStemmer::new(dictionary());

        assert_eq!(stemmer.stem_word("gosto"), Some("gostar".to_string()));
        assert_eq!(stemmer.stem_word("casas"), Some("casar".to_string()));
        assert_eq!(stemmer.stem_word("gostosamente"), None);
        assert_eq!(stemmer.name(), "hunspell");
    }

    #[test]
    fn test_modified_stemmer_takes_shortest_candidate() {
        let stemmer = ModifiedDictionaryStemmer::new(dictionary());

        assert_eq!(stemmer.stem_word("gosto"), Some("gosto".to_string()));
        assert_eq!(stemmer.stem_word("casas"), Some("casa".to_string()));
        assert_eq!(stemmer.name(), "modified-hunspell");
    }

    #[test]
    fn test_modified_stemmer_never_absent() {
        let stemmer = ModifiedDictionaryStemmer::new(dictionary());
        assert_eq!(stemmer.stem_word("Desconhecida"), Some("desconhecida".to_string()));
    }

    #[test]
    fn test_dictionary_json() {
        let dictionary = Dictionary::from_pairs([("gatos", "gato")]);
        let json = serde_json::to_string(&dictionary).unwrap();
        let restored: Dictionary = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, dictionary);
    }
}
