//! HTTP API server for life-quiz.
//!
//! Exposes the [`SubmissionStore`](crate::store::SubmissionStore) over axum:
//! `POST /api/submit-scores` stores a rating set, `GET /api/submissions`
//! lists everything stored, and `GET /` answers a greeting.

mod config;
mod content;
mod cors;
mod error;
mod logging;
mod routes;
mod state;

pub use config::{Config, ConfigError, CorsConfig, LogFormat, LoggingConfig, ServerConfig, DEFAULT_PORT};
pub use content::JsonContent;
pub use cors::build_cors_layer;
pub use error::ApiError;
pub use logging::{init as init_logging, LoggingError};
pub use routes::{router, Message, HELLO};
pub use state::AppState;
