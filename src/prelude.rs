//! Convenient re-exports for common usage patterns.
//!
//! ```ignore
//! use life_quiz::prelude::*;
//!
//! let store = SubmissionStore::new();
//! let record = store.create(RatingSet::new());
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Quiz model
pub use crate::quiz::{
    Category, Mood, Phase, QuizSession, QuizState, Rating, RatingError, RatingSet, SubmitError,
    SubmitOutcome, Submitter, format_score,
};

// Submissions
pub use crate::store::SubmissionStore;
pub use crate::submission::{SubmissionRecord, SubmitResponse};

// HTTP client (requires "client" feature)
#[cfg(feature = "client")]
pub use crate::client::HttpSubmitter;
