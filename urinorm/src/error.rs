//! Error types for the urinorm library.
//!
//! This module provides the error hierarchy for every operation in the
//! library, using `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::uri::ParseError;

/// Result type alias for operations that may fail with a urinorm error.
///
/// # Examples
///
/// ```
/// use urinorm::{Result, Uri};
///
/// fn example_operation() -> Result<Uri> {
///     Ok(Uri::parse("http://example.com/")?)
/// }
/// # assert!(example_operation().is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the urinorm library.
#[derive(Debug, Error)]
pub enum Error {
    /// A required URI or string argument was not supplied.
    #[error("missing argument: {name}")]
    MissingArgument {
        /// The name of the missing argument.
        name: &'static str,
    },

    /// A string could not be parsed as a URI reference.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A replacement path was rejected.
    #[error("invalid path {path:?}: {reason}")]
    InvalidPath {
        /// The rejected path.
        path: String,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// Configuration could not be deserialized.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),
}

impl Error {
    /// Check if the error reports a missing argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use urinorm::{normalize_uri, Error};
    ///
    /// let err = normalize_uri(None::<&str>).unwrap_err();
    /// assert!(err.is_missing_argument());
    /// ```
    #[must_use]
    pub fn is_missing_argument(&self) -> bool {
        matches!(self, Self::MissingArgument { .. })
    }

    /// Check if the error came from parsing a URI string.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}
