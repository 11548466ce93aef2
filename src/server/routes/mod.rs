//! API routes and handlers.

mod submissions;

use axum::{Json, Router, routing::{get, post}};
use serde::{Deserialize, Serialize};

use super::state::AppState;

/// Greeting served at `/`.
pub const HELLO: &str = "Hello World!";

/// Single-message JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/api/submissions", get(submissions::list_submissions))
        .route("/api/submit-scores", post(submissions::submit_scores))
        .with_state(state)
}

/// Sanity check endpoint.
async fn hello() -> Json<Message> {
    Json(Message {
        message: HELLO.to_string(),
    })
}
