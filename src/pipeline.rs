//! Word-level and text-level stemming entry points.
//!
//! ```text
//! texts ─► tokenizer ─► min length ─► ignore ─► stemmer (+ completion)
//!                                                   │
//!                  rewritten texts ◄─ rewriter ◄─ replacement map
//! ```
//!
//! [`stem_words`] stops after the stemmer. [`stem_text`] runs the whole
//! pipeline. [`stem_text_parallel`] splits the texts into shards that are
//! analyzed and stemmed on the rayon pool; word frequencies of all shards
//! are merged before completion, so its output matches [`stem_text`].
//!
//! Every call validates its configuration and builds its backend before
//! touching any input. Calls share no state and may run concurrently.
//!
//! # Examples
//!
//! ```
//! use ptstem::config::StemConfig;
//! use ptstem::pipeline::stem_text;
//! use ptstem::stemmer::StemOptions;
//!
//! let texts = vec!["Eu gosto de gatos. O gato gostou.".to_string()];
//! let config = StemConfig::new().with_complete(false);
//! let stemmed = stem_text(&texts, &config, &StemOptions::default()).unwrap();
//!
//! assert_eq!(stemmed, vec!["Eu gost de gat. O gat gost.".to_string()]);
//! ```

use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug;

use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::token_filter::MinLengthFilter;
use crate::analysis::tokenizer::UnicodeWordTokenizer;
use crate::completion::{self, FrequencyTable};
use crate::config::StemConfig;
use crate::error::{PtstemError, Result};
use crate::rewrite::{ReplacementMap, TextRewriter};
use crate::stemmer::{StemOptions, Stemmer};

/// Stem every word.
///
/// Only the algorithm and completion settings of `config` apply; words are
/// neither length-filtered nor checked against the ignore list. Returns one
/// entry per input word in order, `None` where the backend had no stem.
pub fn stem_words(
    words: &[String],
    config: &StemConfig,
    options: &StemOptions,
) -> Result<Vec<Option<String>>> {
    config.validate()?;
    let stemmer = config.algorithm.build(options)?;

    debug!(
        algorithm = %config.algorithm,
        complete = config.complete,
        words = words.len(),
        "stemming words"
    );
    stemmer.stem_words(words, config.complete)
}

/// Stem every eligible word of the texts and rewrite the texts.
///
/// Returns one text per input text, in order. Words that the backend could
/// not stem keep their original form; if no word survives filtering the
/// texts are returned unchanged.
pub fn stem_text(
    texts: &[String],
    config: &StemConfig,
    options: &StemOptions,
) -> Result<Vec<String>> {
    let (analyzer, stemmer) = prepare(config, options)?;

    let words = analyzer.words(texts)?;
    debug!(
        algorithm = %config.algorithm,
        texts = texts.len(),
        words = words.len(),
        "analyzed texts"
    );
    if words.is_empty() {
        debug!("no word left to stem, returning texts unchanged");
        return Ok(texts.to_vec());
    }

    let replacements = stemmer.stem_words(&words, config.complete)?;
    let map = ReplacementMap::from_pairs(&words, &replacements)?;
    debug!(replacements = map.len(), "built replacement map");

    let rewriter = TextRewriter::new(&map)?;
    Ok(rewriter.rewrite_all(texts))
}

/// Parallel variant of [`stem_text`].
///
/// Texts are split into at most `shards` contiguous shards. Analysis,
/// stemming and rewriting run per shard on the rayon pool; completion uses
/// frequency tables merged across all shards in text order.
pub fn stem_text_parallel(
    texts: &[String],
    config: &StemConfig,
    options: &StemOptions,
    shards: usize,
) -> Result<Vec<String>> {
    if shards == 0 {
        return Err(PtstemError::invalid_argument("shards must be at least 1"));
    }
    let (analyzer, stemmer) = prepare(config, options)?;
    if texts.is_empty() {
        return Ok(Vec::new());
    }

    let shard_len = texts.len().div_ceil(shards);
    let stemmed: Vec<(Vec<String>, Vec<Option<String>>)> = texts
        .par_chunks(shard_len)
        .map(|shard| -> Result<(Vec<String>, Vec<Option<String>>)> {
            let words = analyzer.words(shard)?;
            let stems = stemmer.stem_all(&words);
            Ok((words, stems))
        })
        .collect::<Result<_>>()?;

    let total_words: usize = stemmed.iter().map(|(words, _)| words.len()).sum();
    debug!(
        algorithm = %config.algorithm,
        texts = texts.len(),
        shards = stemmed.len(),
        words = total_words,
        "analyzed shards"
    );
    if total_words == 0 {
        debug!("no word left to stem, returning texts unchanged");
        return Ok(texts.to_vec());
    }

    let representatives = if config.complete {
        let tables = stemmed
            .par_iter()
            .map(|(words, stems)| FrequencyTable::from_pairs(words, stems))
            .collect::<Result<Vec<_>>>()?;
        let mut merged = FrequencyTable::new();
        for table in tables {
            merged.merge(table);
        }
        Some(merged.representatives())
    } else {
        None
    };

    let mut map = ReplacementMap::new();
    for (words, stems) in &stemmed {
        let replacements = match &representatives {
            Some(representatives) => completion::apply_representatives(stems, representatives),
            None => stems.clone(),
        };
        for (word, replacement) in words.iter().zip(replacements) {
            if let Some(replacement) = replacement {
                map.insert(word.as_str(), replacement);
            }
        }
    }
    debug!(replacements = map.len(), "built replacement map");

    let rewriter = TextRewriter::new(&map)?;
    Ok(texts.par_iter().map(|text| rewriter.rewrite(text)).collect())
}

/// Validate the configuration and build the analyzer and backend.
fn prepare(
    config: &StemConfig,
    options: &StemOptions,
) -> Result<(PipelineAnalyzer, Box<dyn Stemmer>)> {
    let ignore = config.ignore.to_filter()?;
    let stemmer = config.algorithm.build(options)?;

    let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
        .add_filter(Arc::new(MinLengthFilter::new(config.min_word_length)))
        .add_filter(Arc::new(ignore));

    Ok((analyzer, stemmer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IgnoreSetting;
    use crate::stemmer::{Algorithm, Dictionary};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_stem_words_one_output_per_input() {
        let words = strings(&["gosto", "gostei", "gostou", "gosto"]);
        let stems = stem_words(&words, &StemConfig::new(), &StemOptions::default()).unwrap();

        assert_eq!(stems, vec![Some("gosto".to_string()); 4]);
    }

    #[test]
    fn test_stem_words_ignores_text_filters() {
        let words = strings(&["eu", "ana"]);
        let config = StemConfig::new()
            .with_complete(false)
            .with_min_word_length(10)
            .with_ignore(vec!["ana"]);

        let stems = stem_words(&words, &config, &StemOptions::default()).unwrap();
        assert_eq!(stems, vec![Some("eu".to_string()), Some("ana".to_string())]);
    }

    #[test]
    fn test_stem_text_completion() {
        let texts = strings(&["gosto disso", "gostei e gosto", "ele gostou"]);
        let stemmed = stem_text(&texts, &StemConfig::new(), &StemOptions::default()).unwrap();

        assert_eq!(stemmed, strings(&["gosto disso", "gosto e gosto", "ele gosto"]));
    }

    #[test]
    fn test_stem_text_min_length() {
        let texts = strings(&["eu vou gostar"]);
        let config = StemConfig::new().with_min_word_length(5).with_complete(false);
        let stemmed = stem_text(&texts, &config, &StemOptions::default()).unwrap();

        assert_eq!(stemmed, strings(&["eu vou gost"]));
    }

    #[test]
    fn test_stem_text_returns_input_when_nothing_survives() {
        let texts = strings(&["eu vou", "", "tu"]);
        let config = StemConfig::new().with_min_word_length(5);
        let stemmed = stem_text(&texts, &config, &StemOptions::default()).unwrap();

        assert_eq!(stemmed, texts);
    }

    #[test]
    fn test_absent_stems_leave_text_untouched() {
        let options =
            StemOptions::new().with_dictionary(Dictionary::from_pairs([("gatos", "gato")]));
        let texts = strings(&["gatos e cachorros"]);
        let config = StemConfig::new()
            .with_algorithm(Algorithm::Hunspell)
            .with_complete(false);

        let stemmed = stem_text(&texts, &config, &options).unwrap();
        assert_eq!(stemmed, strings(&["gato e cachorros"]));
    }

    #[test]
    fn test_configuration_errors_before_work() {
        let texts = strings(&["qualquer texto"]);

        let config = StemConfig::new().with_ignore(IgnoreSetting::Undefined);
        assert!(
            stem_text(&texts, &config, &StemOptions::default())
                .unwrap_err()
                .is_configuration()
        );

        // Missing dictionary fails even when no word would be stemmed.
        let config = StemConfig::new()
            .with_algorithm(Algorithm::Hunspell)
            .with_min_word_length(100);
        assert!(
            stem_text(&texts, &config, &StemOptions::default())
                .unwrap_err()
                .is_configuration()
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let texts = strings(&[
            "gostei muito",
            "gostei de novo",
            "gosto",
            "gosto, gosto!",
            "gostou",
            "gostei",
            "os gatos e o gato",
        ]);

        for complete in [true, false] {
            let config = StemConfig::new().with_complete(complete);
            let sequential = stem_text(&texts, &config, &StemOptions::default()).unwrap();
            for shards in [1, 2, 3, 7, 20] {
                let parallel =
                    stem_text_parallel(&texts, &config, &StemOptions::default(), shards).unwrap();
                assert_eq!(parallel, sequential, "shards={shards} complete={complete}");
            }
        }
    }

    #[test]
    fn test_parallel_rejects_zero_shards() {
        let texts = strings(&["gosto"]);
        let err = stem_text_parallel(&texts, &StemConfig::new(), &StemOptions::default(), 0)
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_parallel_empty_input() {
        let stemmed =
            stem_text_parallel(&[], &StemConfig::new(), &StemOptions::default(), 4).unwrap();
        assert!(stemmed.is_empty());
    }
}
