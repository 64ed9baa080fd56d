//! Error types for spellsuggest.
//!
//! Only start-up (loading the word list, reading configuration) and CLI
//! plumbing can fail. Computing a distance or a suggestion list never does:
//! "no suggestions" is an ordinary empty result.
//!
//! # Examples
//!
//! ```
//! use spellsuggest::error::{Result, SuggestError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SuggestError::invalid_argument("max_suggestions must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for spellsuggest operations.
#[derive(Error, Debug)]
pub enum SuggestError {
    /// I/O errors while reading a word list or configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The word list backing the dictionary does not exist.
    #[error("Dictionary file not found: {}", .0.display())]
    DictionaryNotFound(PathBuf),

    /// Invalid configuration values.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument supplied by a caller.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SuggestError.
pub type Result<T> = std::result::Result<T, SuggestError>;

impl SuggestError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SuggestError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SuggestError::InvalidArgument(msg.into())
    }

    /// Whether this error means the dictionary could not be loaded at all.
    pub fn is_initialization_error(&self) -> bool {
        matches!(self, SuggestError::DictionaryNotFound(_) | SuggestError::Io(_))
    }
}
