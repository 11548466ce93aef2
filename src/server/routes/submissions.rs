//! Submission handlers.

use axum::{Json, body::Bytes, extract::State};

use crate::quiz::RatingSet;
use crate::submission::{SubmissionRecord, SubmitResponse};

use super::super::{content::JsonContent, error::ApiError, state::AppState};

/// List every stored submission in insertion order.
pub async fn list_submissions(State(state): State<AppState>) -> Json<Vec<SubmissionRecord>> {
    Json(state.store().list())
}

/// Validate a rating set, stamp it, and store it.
pub async fn submit_scores(
    State(state): State<AppState>,
    _: JsonContent,
    body: Bytes,
) -> Result<Json<SubmitResponse>, ApiError> {
    tracing::debug!(body = %String::from_utf8_lossy(&body), "received scores");

    let ratings: RatingSet = serde_json::from_slice(&body).inspect_err(|e| {
        tracing::warn!(error = %e, "rejected submission");
    })?;

    let record = state.store().create(ratings);
    Ok(Json(SubmitResponse::received(record)))
}
