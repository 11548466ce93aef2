//! Unified error type for the life-quiz library.
//!
//! Wraps the module-specific errors so application code can use a single
//! [`Error`] type end to end.

use thiserror::Error;

use crate::quiz::{RatingError, SubmitError};

/// Unified error type for all life-quiz operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid rating or category.
    #[error(transparent)]
    Rating(#[from] RatingError),

    /// A submission did not complete.
    #[error(transparent)]
    Submit(#[from] SubmitError),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if this is a rating validation error.
    pub fn is_rating(&self) -> bool {
        matches!(self, Self::Rating(_))
    }

    /// Returns `true` if this is a submission error.
    pub fn is_submit(&self) -> bool {
        matches!(self, Self::Submit(_))
    }
}
