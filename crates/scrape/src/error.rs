//! Scrape Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A scrape error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for scrape operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A structurally required element is absent from the page.
    #[display("missing required element: {_0}")]
    MissingElement(#[error(not(source))] &'static str),
    /// An element was found but its text could not be parsed.
    #[display("failed to parse field '{field}', found value: {value}")]
    ParseError {
        /// The field that failed to parse.
        field: &'static str,
        /// Details about the parsing failure.
        value: String,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // There are no retryable errors in this crate, the markup is
        // either parseable or its not.
        false
    }
}
