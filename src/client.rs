//! HTTP client for the submission server.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::Deserialize;

use crate::logging::{debug, warn};
use crate::quiz::{RatingSet, SubmitError, Submitter};
use crate::submission::{SubmissionRecord, SubmitResponse};

/// Path accepting new submissions.
pub const SUBMIT_PATH: &str = "/api/submit-scores";

/// Path listing stored submissions.
pub const SUBMISSIONS_PATH: &str = "/api/submissions";

/// Server address used when none is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3500";

/// Upper bound on a whole request, so a silent server fails the submission.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// [`Submitter`] that posts ratings to a submission server over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    client: Client,
    base_url: String,
}

impl HttpSubmitter {
    /// Create a submitter for the server at `base_url` (e.g. `http://localhost:3500`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Create a submitter whose requests fail after `timeout`.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder().timeout(timeout).build().unwrap_or_else(|e| {
            warn!(error = %e, "failed to build HTTP client, using defaults");
            Client::new()
        });
        Self::with_client(client, base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Post `ratings` and return the stored record.
    pub async fn submit_scores(&self, ratings: &RatingSet) -> Result<SubmissionRecord, SubmitError> {
        let url = self.url(SUBMIT_PATH);
        debug!(%url, "posting scores");

        let response = self
            .client
            .post(&url)
            .json(ratings)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let ack: SubmitResponse = read_json(response).await?;
        Ok(ack.submission)
    }

    /// Fetch every stored submission in insertion order.
    pub async fn list_submissions(&self) -> Result<Vec<SubmissionRecord>, SubmitError> {
        let url = self.url(SUBMISSIONS_PATH);
        debug!(%url, "listing submissions");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        read_json(response).await
    }
}

impl Submitter for HttpSubmitter {
    async fn submit(&self, ratings: RatingSet) -> Result<SubmissionRecord, SubmitError> {
        self.submit_scores(&ratings).await
    }
}

/// Decode a success body, or turn an error status into [`SubmitError::Rejected`].
async fn read_json<T: for<'de> Deserialize<'de>>(response: Response) -> Result<T, SubmitError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    if !status.is_success() {
        return Err(SubmitError::Rejected {
            status: status.as_u16(),
            message: error_message(&body),
        });
    }

    serde_json::from_str(&body).map_err(|e| SubmitError::InvalidResponse(e.to_string()))
}

/// Pull `error.message` out of a JSON error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.pointer("/error/message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let submitter = HttpSubmitter::new("http://localhost:3500/");
        assert_eq!(submitter.url(SUBMIT_PATH), "http://localhost:3500/api/submit-scores");
    }

    #[test]
    fn test_error_message_prefers_structured_body() {
        let body = r#"{"error":{"code":"INVALID_RATINGS","message":"missing rating"}}"#;
        assert_eq!(error_message(body), "missing rating");
        assert_eq!(error_message("Bad Gateway\n"), "Bad Gateway");
    }
}
