//! Client Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use webmanrc_scrape::error::{Error as ScrapeError, ErrorKind as ScrapeErrorKind};

/// A client error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The console could not be reached at all.
    #[display("connection error: {_0}")]
    Connection(#[error(not(source))] String),
    /// The console answered with a non-success status.
    #[display("unexpected HTTP status: {status}")]
    Http {
        /// The status code the console answered with.
        status: u16,
    },
    /// The console answered, but the markup could not be scraped.
    #[display("scrape error: {_0}")]
    Scrape(ScrapeErrorKind),
    /// A record is missing the data needed for this operation.
    #[display("missing required element: {_0}")]
    MissingElement(#[error(not(source))] &'static str),
}

impl ErrorKind {
    /// Convert a scrape error into a client error, preserving the scrape
    /// crate's `Exn` frame (error tree) as a child in its own error tree.
    #[track_caller]
    pub fn scrape(err: ScrapeError) -> Error {
        let inner = (*err).clone();
        err.raise(ErrorKind::Scrape(inner))
    }

    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Http { .. })
    }
}
