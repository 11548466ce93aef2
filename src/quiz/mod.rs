//! Client-side quiz model.
//!
//! A [`RatingSet`] holds one [`Rating`] per [`Category`]; a [`QuizState`]
//! wraps it with the submit lifecycle, and a [`QuizSession`] drives that
//! lifecycle against any [`Submitter`].

mod category;
mod error;
pub(crate) mod rating;
mod session;
mod state;

pub use category::Category;
pub use error::{RatingError, SubmitError};
pub use rating::{format_score, Mood, Rating, RatingSet};
pub use session::{QuizSession, Submitter};
pub use state::{Phase, QuizState, SubmitOutcome};
