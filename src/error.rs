//! Error types for the Thesaurus library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`ThesaurusError`] enum. The registry itself only ever produces
//! [`ThesaurusError::NullInput`] and [`ThesaurusError::InvalidInput`]; the
//! remaining variants belong to the console front end and configuration.
//!
//! # Examples
//!
//! ```
//! use thesaurus::error::{ThesaurusError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ThesaurusError::invalid_input("fewer than two elements"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Thesaurus operations.
#[derive(Error, Debug)]
pub enum ThesaurusError {
    /// The argument itself (a group, or a single word) was absent.
    #[error("Value cannot be null: {0}")]
    NullInput(String),

    /// The group was present but structurally invalid.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid registry configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O errors (console, groups files, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with ThesaurusError.
pub type Result<T> = std::result::Result<T, ThesaurusError>;

impl ThesaurusError {
    /// Create a new null input error naming the absent argument.
    pub fn null_input<S: Into<String>>(argument: S) -> Self {
        ThesaurusError::NullInput(argument.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        ThesaurusError::InvalidInput(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        ThesaurusError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ThesaurusError::Other(msg.into())
    }

    pub fn is_null_input(&self) -> bool {
        matches!(self, ThesaurusError::NullInput(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ThesaurusError::InvalidInput(_))
    }
}
