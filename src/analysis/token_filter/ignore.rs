//! Ignore filter implementation.
//!
//! Excludes words from stemming according to user supplied rules. Each rule
//! is classified once, when the filter is built:
//!
//! - an entry without any punctuation character is a literal word, compared
//!   verbatim against the whole token;
//! - an entry containing at least one punctuation character is a regular
//!   expression, searched for anywhere in the token.
//!
//! Punctuation presence is the only discriminator, so `"não."` is a pattern.
//! Punctuation covers ASCII `[:punct:]` (which includes regex operators such
//! as `^`, `$` and `|`) and the Unicode punctuation categories, so `"não…"`
//! and `"«sim»"` are patterns too.
//!
//! # Examples
//!
//! ```
//! use ptstem::analysis::token::Token;
//! use ptstem::analysis::token_filter::Filter;
//! use ptstem::analysis::token_filter::ignore::IgnoreFilter;
//!
//! let filter = IgnoreFilter::from_entries(&["ana", "^d.*"]).unwrap();
//! let tokens = vec![Token::new("ana", 0), Token::new("banana", 1), Token::new("diana", 2)];
//! let kept = filter.filter_vec(tokens).unwrap();
//!
//! assert_eq!(kept.len(), 1);
//! assert_eq!(kept[0].text, "banana");
//! ```

use std::sync::LazyLock;

use ahash::AHashSet;
use regex::Regex;

use super::Filter;

use crate::analysis::token::{Token, TokenStream};
use crate::error::{PtstemError, Result};

/// ASCII punctuation or any Unicode punctuation character.
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[[:punct:]\p{P}]").expect("valid punctuation class"));

/// A single ignore rule.
#[derive(Clone, Debug)]
pub enum IgnoreRule {
    /// A literal word matched verbatim.
    Literal(String),
    /// A regular expression matched anywhere inside the word.
    Pattern(Regex),
}

impl IgnoreRule {
    /// Classify and compile an ignore entry.
    pub fn parse(entry: &str) -> Result<Self> {
        if PUNCTUATION.is_match(entry) {
            let regex = Regex::new(entry).map_err(|e| {
                PtstemError::configuration(format!("Invalid ignore pattern '{entry}': {e}"))
            })?;
            Ok(IgnoreRule::Pattern(regex))
        } else {
            Ok(IgnoreRule::Literal(entry.to_string()))
        }
    }

    /// Whether this rule was classified as a regular expression.
    pub fn is_pattern(&self) -> bool {
        matches!(self, IgnoreRule::Pattern(_))
    }
}

/// A filter that removes tokens matching any ignore rule.
#[derive(Clone, Debug, Default)]
pub struct IgnoreFilter {
    literals: AHashSet<String>,
    patterns: Vec<Regex>,
}

impl IgnoreFilter {
    /// Create an empty filter that ignores nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from raw ignore entries.
    pub fn from_entries<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        let rules = entries
            .iter()
            .map(|entry| IgnoreRule::parse(entry.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_rules(rules))
    }

    /// Build a filter from already classified rules.
    pub fn from_rules(rules: Vec<IgnoreRule>) -> Self {
        let mut filter = IgnoreFilter::new();
        for rule in rules {
            match rule {
                IgnoreRule::Literal(word) => {
                    filter.literals.insert(word);
                }
                IgnoreRule::Pattern(regex) => filter.patterns.push(regex),
            }
        }
        filter
    }

    /// Check whether a word is excluded by any rule.
    pub fn is_ignored(&self, word: &str) -> bool {
        self.literals.contains(word) || self.patterns.iter().any(|p| p.is_match(word))
    }

    /// Number of literal rules.
    pub fn literal_count(&self) -> usize {
        self.literals.len()
    }

    /// Number of pattern rules.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Check if the filter has no rules.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty() && self.patterns.is_empty()
    }
}

impl Filter for IgnoreFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let kept: Vec<Token> = tokens.filter(|t| !self.is_ignored(&t.text)).collect();
        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "ignore"
    }
}
