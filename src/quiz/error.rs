//! Error types for the quiz model and its submit flow.

use thiserror::Error;

/// Errors produced when building ratings from untrusted input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    /// The value lies outside the 1..=10 scale.
    #[error("rating {0} is out of range (expected 1..=10)")]
    OutOfRange(i64),

    /// The identifier does not name one of the eight categories.
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    /// A rating set was given without a value for this category.
    #[error("missing rating for category '{0}'")]
    MissingCategory(&'static str),

    /// A rating set named the same category twice.
    #[error("duplicate rating for category '{0}'")]
    DuplicateCategory(&'static str),
}

/// Why a submission did not reach the submitted state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The request never produced an HTTP response.
    #[error("could not reach the server: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("server rejected the submission ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The server answered but the acknowledgment could not be read.
    #[error("invalid acknowledgment from server: {0}")]
    InvalidResponse(String),
}
