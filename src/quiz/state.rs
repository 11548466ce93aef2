//! Client-side quiz state and its submit lifecycle.

use crate::logging::debug;
use crate::submission::SubmissionRecord;

use super::category::Category;
use super::error::SubmitError;
use super::rating::{Mood, Rating, RatingSet};

/// Where the quiz is in its submit lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Ratings are being edited.
    #[default]
    Idle,
    /// A submission is in flight.
    Submitting,
    /// The server acknowledged the submission.
    Submitted,
}

/// Result of asking a quiz to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The server stored the ratings and returned this record.
    Accepted(SubmissionRecord),
    /// The submission failed; the quiz is editable again.
    Failed(SubmitError),
    /// The quiz was not idle, so nothing was sent.
    Ignored,
}

/// Ratings for one quiz attempt plus the submit state machine.
///
/// ```text
/// Idle --begin_submit--> Submitting --finish_submit(Ok)--> Submitted --reset--> Idle
///                        Submitting --finish_submit(Err)--> Idle (last_error set)
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuizState {
    ratings: RatingSet,
    phase: Phase,
    last_error: Option<SubmitError>,
}

impl QuizState {
    /// A fresh quiz with every category at the neutral midpoint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing ratings.
    pub fn with_ratings(ratings: RatingSet) -> Self {
        Self {
            ratings,
            ..Self::default()
        }
    }

    pub fn ratings(&self) -> &RatingSet {
        &self.ratings
    }

    pub fn rating(&self, category: Category) -> Rating {
        self.ratings.get(category)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Failure from the most recent submit attempt, if it failed.
    pub fn last_error(&self) -> Option<&SubmitError> {
        self.last_error.as_ref()
    }

    /// Set one category's rating. Values off the scale are clamped.
    ///
    /// Ignored once submitted; call [`QuizState::reset`] to edit again.
    pub fn set_rating(&mut self, category: Category, value: i64) {
        if self.phase == Phase::Submitted {
            debug!(%category, value, "rating change ignored after submission");
            return;
        }
        self.ratings.set(category, Rating::saturating(value));
    }

    /// Mean of the current ratings.
    pub fn aggregate(&self) -> f64 {
        self.ratings.aggregate()
    }

    pub fn mood(&self) -> Mood {
        Mood::from_score(self.aggregate())
    }

    /// Enter `Submitting` and return the ratings to send.
    ///
    /// Returns `None` unless the quiz is idle.
    pub fn begin_submit(&mut self) -> Option<RatingSet> {
        if self.phase != Phase::Idle {
            debug!(phase = ?self.phase, "submit ignored");
            return None;
        }
        self.phase = Phase::Submitting;
        self.last_error = None;
        Some(self.ratings)
    }

    /// Apply the result of the in-flight submission.
    ///
    /// Has no effect unless the quiz is submitting.
    pub fn finish_submit(&mut self, result: &Result<SubmissionRecord, SubmitError>) {
        if self.phase != Phase::Submitting {
            return;
        }
        match result {
            Ok(_) => {
                self.phase = Phase::Submitted;
                self.last_error = None;
            }
            Err(err) => {
                self.phase = Phase::Idle;
                self.last_error = Some(err.clone());
            }
        }
    }

    /// Go back to editing after a submission, keeping the ratings.
    ///
    /// Returns `false` (and does nothing) unless the quiz was submitted.
    pub fn reset(&mut self) -> bool {
        if self.phase != Phase::Submitted {
            return false;
        }
        self.phase = Phase::Idle;
        true
    }
}
