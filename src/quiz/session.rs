//! Async driver that connects a [`QuizState`] to a submission backend.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::logging::{info, warn};
use crate::submission::SubmissionRecord;

use super::category::Category;
use super::error::SubmitError;
use super::rating::{Rating, RatingSet};
use super::state::{Phase, QuizState, SubmitOutcome};

/// Sends a rating set to wherever submissions are collected.
pub trait Submitter: Send + Sync {
    fn submit(
        &self,
        ratings: RatingSet,
    ) -> impl Future<Output = Result<SubmissionRecord, SubmitError>> + Send;
}

impl<T: Submitter> Submitter for std::sync::Arc<T> {
    fn submit(
        &self,
        ratings: RatingSet,
    ) -> impl Future<Output = Result<SubmissionRecord, SubmitError>> + Send {
        (**self).submit(ratings)
    }
}

/// A quiz attempt shared between the input surface and the submit task.
///
/// The `Submitting` phase is the only guard against double submission: a
/// second [`QuizSession::submit`] while one is in flight returns
/// [`SubmitOutcome::Ignored`] without calling the submitter.
pub struct QuizSession<S> {
    state: Mutex<QuizState>,
    submitter: S,
}

impl<S: Submitter> QuizSession<S> {
    pub fn new(submitter: S) -> Self {
        Self::with_state(QuizState::new(), submitter)
    }

    pub fn with_state(state: QuizState, submitter: S) -> Self {
        Self {
            state: Mutex::new(state),
            submitter,
        }
    }

    fn lock(&self) -> MutexGuard<'_, QuizState> {
        lock_state(&self.state)
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> QuizState {
        self.lock().clone()
    }

    pub fn phase(&self) -> Phase {
        self.lock().phase()
    }

    pub fn ratings(&self) -> RatingSet {
        *self.lock().ratings()
    }

    pub fn rating(&self, category: Category) -> Rating {
        self.lock().rating(category)
    }

    pub fn set_rating(&self, category: Category, value: i64) {
        self.lock().set_rating(category, value);
    }

    pub fn aggregate(&self) -> f64 {
        self.lock().aggregate()
    }

    pub fn last_error(&self) -> Option<SubmitError> {
        self.lock().last_error().cloned()
    }

    pub fn reset(&self) -> bool {
        self.lock().reset()
    }

    /// Submit the current ratings and wait for the acknowledgment.
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(ratings) = self.lock().begin_submit() else {
            return SubmitOutcome::Ignored;
        };

        let in_flight = InFlight { state: Some(&self.state) };
        let result = self.submitter.submit(ratings).await;
        in_flight.complete(&result);

        match result {
            Ok(record) => {
                info!(timestamp = record.timestamp(), aggregate = record.aggregate(), "submission accepted");
                SubmitOutcome::Accepted(record)
            }
            Err(err) => {
                warn!(error = %err, "submission failed");
                SubmitOutcome::Failed(err)
            }
        }
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }
}

// Every mutation is a single assignment, so a poisoned state is still consistent.
fn lock_state(state: &Mutex<QuizState>) -> MutexGuard<'_, QuizState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Reason recorded when a submit future is dropped before the submitter answers.
pub const SUBMIT_CANCELLED: &str = "submission cancelled";

/// Holds a session in `Submitting` for the lifetime of one submitter call.
///
/// Dropping it without [`InFlight::complete`] fails the submission, so a
/// timed-out or aborted submit never leaves the quiz stuck.
struct InFlight<'a> {
    state: Option<&'a Mutex<QuizState>>,
}

impl InFlight<'_> {
    fn complete(mut self, result: &Result<SubmissionRecord, SubmitError>) {
        if let Some(state) = self.state.take() {
            lock_state(state).finish_submit(result);
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(state) = self.state.take() {
            warn!("submission dropped before completion");
            let cancelled = Err(SubmitError::Transport(SUBMIT_CANCELLED.to_string()));
            lock_state(state).finish_submit(&cancelled);
        }
    }
}
