//! Error types for the billing engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while producing a statement.

use thiserror::Error;

/// The main error type for the billing engine.
///
/// Statement computation fails on the first error it meets; no partial
/// statement is ever returned.
///
/// # Example
///
/// ```
/// use theater_billing::error::BillingError;
///
/// let error = BillingError::UnknownGenre {
///     genre: "farce".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown genre: farce");
/// ```
#[derive(Debug, Error)]
pub enum BillingError {
    /// A play's `type` is outside the recognized genres.
    #[error("Unknown genre: {genre}")]
    UnknownGenre {
        /// The genre string that was not recognized.
        genre: String,
    },

    /// A performance references a play that is not in the catalog.
    #[error("Play not found: {play_id}")]
    PlayNotFound {
        /// The play identifier that did not resolve.
        play_id: String,
    },

    /// A data file was not found or could not be read.
    #[error("Data file not found: {path}")]
    DataNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A data file could not be parsed.
    #[error("Failed to parse data file '{path}': {message}")]
    DataParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return BillingError.
pub type BillingResult<T> = Result<T, BillingError>;
