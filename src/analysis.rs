//! Text analysis for the stemming pipeline.
//!
//! This module turns raw texts into the words that are eligible for
//! stemming: a tokenizer splits texts into word tokens, then filters drop
//! short words and words matched by ignore rules.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
