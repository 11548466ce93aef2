//! Life satisfaction quiz: the rating model, its submit flow, and the
//! server that collects submissions.
//!
//! # Quick Start
//!
//! ```ignore
//! use life_quiz::prelude::*;
//!
//! let session = QuizSession::new(HttpSubmitter::new("http://localhost:3500"));
//! session.set_rating(Category::Health, 8);
//! session.set_rating(Category::Career, 3);
//!
//! match session.submit().await {
//!     SubmitOutcome::Accepted(record) => println!("stored at {}", record.timestamp()),
//!     SubmitOutcome::Failed(err) => eprintln!("{err}"),
//!     SubmitOutcome::Ignored => {}
//! }
//! println!("{} {}", format_score(session.aggregate()), Mood::from_score(session.aggregate()));
//! ```
//!
//! # Modules
//!
//! - [`quiz`] - Categories, ratings, the quiz state machine and session (always available)
//! - [`submission`] - Wire records shared by client and server (always available)
//! - [`store`] - In-memory append-only submission store (always available)
//! - [`client`] - reqwest-backed submitter (requires `client` feature)
//! - [`server`] - axum HTTP API (requires `server` feature)
//!
//! # Feature Flags
//!
//! - `client` - Enable the HTTP submitter (enabled by default)
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `cli` - Enable the command-line client binary
//! - `server` - Enable the HTTP API server
//! - `full` - Enable all features

#[cfg(feature = "client")]
pub mod client;
mod logging;
pub mod prelude;
pub mod quiz;
#[cfg(feature = "server")]
pub mod server;
pub mod store;
pub mod submission;

mod error;

// Re-export the unified error type
pub use error::{Error, Result};

// Re-export model types at crate root for convenience
pub use quiz::{
    Category, Mood, Phase, QuizSession, QuizState, Rating, RatingError, RatingSet, SubmitError,
    SubmitOutcome, Submitter, format_score,
};
pub use store::SubmissionStore;
pub use submission::{SubmissionRecord, SubmitResponse};

#[cfg(feature = "client")]
pub use client::HttpSubmitter;
