//! End-to-end tests for the HTTP submitter.
//!
//! The happy path runs against the real router served on an ephemeral port;
//! failure responses come from httpmock.

#![cfg(all(feature = "client", feature = "server"))]

mod common;

use std::time::Duration;

use httpmock::prelude::*;
use life_quiz::store::SubmissionStore;
use life_quiz::{
    Category, HttpSubmitter, Phase, QuizSession, SubmitError, SubmitOutcome,
};

/// Serve the application on 127.0.0.1 and return its base URL.
async fn spawn_server(store: SubmissionStore) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, common::app(store)).await;
    });
    Ok(format!("http://{}", addr))
}

#[tokio::test]
async fn test_session_submits_to_live_server() -> anyhow::Result<()> {
    let store = SubmissionStore::new();
    let base_url = spawn_server(store.clone()).await?;

    let session = QuizSession::new(HttpSubmitter::new(&base_url));
    session.set_rating(Category::Health, 8);
    session.set_rating(Category::Career, 3);

    let record = match session.submit().await {
        SubmitOutcome::Accepted(record) => record,
        other => anyhow::bail!("expected acceptance, got {:?}", other),
    };
    assert_eq!(record.ratings().get(Category::Health).get(), 8);
    assert_eq!(record.ratings().get(Category::Career).get(), 3);
    assert_eq!(session.phase(), Phase::Submitted);
    assert_eq!(store.list(), vec![record.clone()]);

    let listed = session.submitter().list_submissions().await?;
    assert_eq!(listed, vec![record]);

    Ok(())
}

#[tokio::test]
async fn test_resubmit_after_reset_appends() -> anyhow::Result<()> {
    let store = SubmissionStore::new();
    let session = QuizSession::new(HttpSubmitter::new(spawn_server(store.clone()).await?));

    assert!(matches!(session.submit().await, SubmitOutcome::Accepted(_)));
    assert!(session.reset());
    session.set_rating(Category::Fun, 10);
    assert!(matches!(session.submit().await, SubmitOutcome::Accepted(_)));

    let records = store.list();
    assert_eq!(records.len(), 2);
    assert_eq!(records.last().map(|r| r.ratings().get(Category::Fun).get()), Some(10));

    Ok(())
}

#[tokio::test]
async fn test_unreachable_server_fails_back_to_idle() -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let session = QuizSession::new(HttpSubmitter::new(format!("http://{}", addr)));

    let outcome = session.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Failed(SubmitError::Transport(_))));
    assert_eq!(session.phase(), Phase::Idle);
    assert!(matches!(session.last_error(), Some(SubmitError::Transport(_))));

    Ok(())
}

#[tokio::test]
async fn test_server_error_is_rejection() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/submit-scores");
            then.status(500).json_body(serde_json::json!({
                "error": { "code": "INTERNAL_ERROR", "message": "store unavailable" }
            }));
        })
        .await;

    let session = QuizSession::new(HttpSubmitter::new(server.base_url()));
    let outcome = session.submit().await;

    mock.assert_async().await;
    assert_eq!(
        outcome,
        SubmitOutcome::Failed(SubmitError::Rejected {
            status: 500,
            message: "store unavailable".into(),
        })
    );
    assert_eq!(session.phase(), Phase::Idle);

    Ok(())
}

#[tokio::test]
async fn test_silent_server_times_out() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/submit-scores");
            then.status(200).delay(Duration::from_secs(5));
        })
        .await;

    let submitter = HttpSubmitter::with_timeout(server.base_url(), Duration::from_millis(100));
    let session = QuizSession::new(submitter);

    assert!(matches!(
        session.submit().await,
        SubmitOutcome::Failed(SubmitError::Transport(_))
    ));
    assert_eq!(session.phase(), Phase::Idle);

    Ok(())
}

#[tokio::test]
async fn test_unreadable_acknowledgment() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/submit-scores");
            then.status(200).json_body(serde_json::json!({ "message": "ok" }));
        })
        .await;

    let session = QuizSession::new(HttpSubmitter::new(server.base_url()));

    assert!(matches!(
        session.submit().await,
        SubmitOutcome::Failed(SubmitError::InvalidResponse(_))
    ));

    Ok(())
}

#[tokio::test]
async fn test_posted_body_is_flat_rating_set() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/submit-scores")
                .header("content-type", "application/json")
                .json_body(common::uniform_scores(5));
            then.status(200).json_body(serde_json::json!({
                "message": "Scores received by backend!",
                "submission": {
                    "health": 5, "career": 5, "finances": 5, "relationships": 5,
                    "growth": 5, "fun": 5, "spirituality": 5, "environment": 5,
                    "timestamp": "2024-05-01T12:30:00.000Z"
                }
            }));
        })
        .await;

    let session = QuizSession::new(HttpSubmitter::new(server.base_url()));
    let outcome = session.submit().await;

    mock.assert_async().await;
    assert!(matches!(outcome, SubmitOutcome::Accepted(ref r) if r.timestamp() == "2024-05-01T12:30:00.000Z"));

    Ok(())
}
