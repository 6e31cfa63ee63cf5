//! Pipeline analyzer that combines a tokenizer with filters.
//!
//! The analyzer applies processing in this order:
//! 1. Tokenizer: splits text into word tokens
//! 2. Filters: applied sequentially in the order they were added
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use ptstem::analysis::analyzer::PipelineAnalyzer;
//! use ptstem::analysis::token_filter::{IgnoreFilter, MinLengthFilter};
//! use ptstem::analysis::tokenizer::UnicodeWordTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
//!     .add_filter(Arc::new(MinLengthFilter::new(3)))
//!     .add_filter(Arc::new(IgnoreFilter::from_entries(&["casa"]).unwrap()));
//!
//! let words = analyzer.words(&["Eu vou para casa.".to_string()]).unwrap();
//! assert_eq!(words, vec!["vou", "para"]);
//! ```

use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Analyze a single text.
    pub fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }
        Ok(tokens)
    }

    /// Analyze a sequence of texts into one flat token list.
    pub fn analyze_all(&self, texts: &[String]) -> Result<Vec<Token>> {
        let mut tokens = self.tokenizer.tokenize_all(texts)?;
        for filter in &self.filters {
            tokens = filter.filter_vec(tokens)?;
        }
        Ok(tokens)
    }

    /// The surviving words of a sequence of texts, in order, repeats included.
    pub fn words(&self, texts: &[String]) -> Result<Vec<String>> {
        Ok(self
            .analyze_all(texts)?
            .into_iter()
            .map(|token| token.text)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::{IgnoreFilter, MinLengthFilter};
    use crate::analysis::tokenizer::UnicodeWordTokenizer;

    #[test]
    fn test_pipeline_analyzer() {
        let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(MinLengthFilter::new(5)));

        let tokens: Vec<Token> = analyzer.analyze("eu vou viajar amanhã").unwrap().collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "viajar");
        assert_eq!(tokens[1].text, "amanhã");
    }

    #[test]
    fn test_filters_apply_in_order() {
        let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(MinLengthFilter::new(3)))
            .add_filter(Arc::new(IgnoreFilter::from_entries(&["ana"]).unwrap()));

        let texts = vec!["ana e banana".to_string(), "diana".to_string()];
        assert_eq!(analyzer.words(&texts).unwrap(), vec!["banana", "diana"]);
        assert_eq!(analyzer.filters().len(), 2);
    }

    #[test]
    fn test_words_keep_repeats() {
        let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()));
        let texts = vec!["gosto, gosto".to_string()];
        assert_eq!(analyzer.words(&texts).unwrap(), vec!["gosto", "gosto"]);
    }

    #[test]
    fn test_debug_lists_stage_names() {
        let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(MinLengthFilter::new(3)));
        let debug = format!("{analyzer:?}");
        assert!(debug.contains("unicode_word"));
        assert!(debug.contains("min_length"));
    }
}
