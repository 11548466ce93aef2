//! Common test utilities and fixtures.
//!
//! Shared payloads and a router-backed test application for the server tests.

#![cfg(feature = "server")]
#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use life_quiz::server::{AppState, CorsConfig, build_cors_layer, router};
use life_quiz::store::SubmissionStore;

// =============================================================================
// Payloads
// =============================================================================

/// A complete, valid rating set.
pub const SAMPLE_SCORES: &str = r#"{"health":8,"career":3,"finances":5,"relationships":9,"growth":6,"fun":7,"spirituality":4,"environment":5}"#;

/// Valid JSON missing the `environment` rating.
pub const MISSING_CATEGORY: &str = r#"{"health":8,"career":3,"finances":5,"relationships":9,"growth":6,"fun":7,"spirituality":4}"#;

/// Parse [`SAMPLE_SCORES`] as a JSON value.
pub fn sample_scores() -> serde_json::Value {
    serde_json::from_str(SAMPLE_SCORES).unwrap_or_default()
}

/// A valid rating set with every category at `value`.
pub fn uniform_scores(value: u8) -> serde_json::Value {
    serde_json::json!({
        "health": value,
        "career": value,
        "finances": value,
        "relationships": value,
        "growth": value,
        "fun": value,
        "spirituality": value,
        "environment": value,
    })
}

// =============================================================================
// Test Application
// =============================================================================

/// Build the full application (routes + default CORS) around `store`.
pub fn app(store: SubmissionStore) -> Router {
    router(AppState::new(store)).layer(build_cors_layer(&CorsConfig::default()))
}

/// Test application with a fresh in-memory store.
pub struct TestApp {
    pub server: TestServer,
    pub store: SubmissionStore,
}

impl TestApp {
    pub fn new() -> anyhow::Result<Self> {
        let store = SubmissionStore::new();
        let server = TestServer::new(app(store.clone()))?;
        Ok(Self { server, store })
    }

    /// Post a JSON payload and return the stored submission.
    pub async fn submit(&self, scores: &serde_json::Value) -> anyhow::Result<serde_json::Value> {
        let response = self.server.post("/api/submit-scores").json(scores).await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        body.get("submission")
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no submission in response: {}", body))
    }

    /// Fetch the submission list.
    pub async fn list(&self) -> Vec<serde_json::Value> {
        let response = self.server.get("/api/submissions").await;
        response.assert_status_ok();
        response.json()
    }
}
