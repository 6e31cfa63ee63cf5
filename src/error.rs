//! Error types for the ptstem library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`PtstemError`] enum. Configuration problems (unknown algorithm, malformed
//! ignore list, missing dictionary) are reported before any text is touched.
//! A backend that cannot stem a single word does not produce an error; that
//! word simply maps to `None`.
//!
//! # Examples
//!
//! ```
//! use ptstem::error::{PtstemError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PtstemError::configuration("unknown algorithm 'snowball'"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for ptstem operations.
#[derive(Error, Debug)]
pub enum PtstemError {
    /// Invalid call configuration, raised before any processing starts
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with PtstemError.
pub type Result<T> = std::result::Result<T, PtstemError>;

impl PtstemError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        PtstemError::Configuration(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        PtstemError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        PtstemError::Configuration(format!("Invalid argument: {}", msg.into()))
    }

    /// Whether this error was raised by configuration validation.
    pub fn is_configuration(&self) -> bool {
        matches!(self, PtstemError::Configuration(_))
    }
}
