//! Unit tests for [`maestro_bot::UpdateHandler`].
//!
//! Covers the two dispatch branches: "/start" (registration + greeting) and
//! freeform text (completion passthrough / apology fallback), against a
//! temp-file database and mock completion backends.

mod common;

use std::sync::Arc;

use common::{message_from_42, test_repo, FailingCompletion, FixedCompletion};
use maestro_bot::{UpdateHandler, APOLOGY, GREETING};
use maestro_core::IncomingMessage;
use storage::UserRole;

/// **Test: "/start" from an unseen identifier creates exactly one row with
/// the default role and returns the greeting.**
#[tokio::test]
async fn test_start_creates_user_and_greets() {
    let (repo, _db) = test_repo().await;
    let handler = UpdateHandler::new(
        repo.clone(),
        Arc::new(FixedCompletion("unused".to_string())),
    );

    let reply = handler.handle(&message_from_42("/start")).await;
    assert_eq!(reply, GREETING);

    let user = repo
        .find_by_telegram_id(42)
        .await
        .expect("query failed")
        .expect("user row missing");
    assert_eq!(user.role, UserRole::User);
    assert_eq!(user.username.as_deref(), Some("alice"));
    assert_eq!(repo.all_telegram_ids().await.unwrap().len(), 1);
}

/// **Test: "/start" from a known identifier creates no additional row and
/// still greets.**
#[tokio::test]
async fn test_start_is_idempotent() {
    let (repo, _db) = test_repo().await;
    let handler = UpdateHandler::new(
        repo.clone(),
        Arc::new(FixedCompletion("unused".to_string())),
    );

    assert_eq!(handler.handle(&message_from_42("/start")).await, GREETING);
    assert_eq!(handler.handle(&message_from_42("/start")).await, GREETING);

    assert_eq!(repo.all_telegram_ids().await.unwrap(), vec![42]);
}

/// **Test: freeform text returns the first choice's text unmodified and
/// does not register the user.**
#[tokio::test]
async fn test_freeform_returns_completion_verbatim() {
    let (repo, _db) = test_repo().await;
    let handler = UpdateHandler::new(
        repo.clone(),
        Arc::new(FixedCompletion("hi there".to_string())),
    );

    let reply = handler.handle(&message_from_42("hello")).await;
    assert_eq!(reply, "hi there");

    assert!(repo.find_by_telegram_id(42).await.unwrap().is_none());
}

/// **Test: a failing completion backend yields the fixed apology and no panic.**
#[tokio::test]
async fn test_freeform_failure_returns_apology() {
    let (repo, _db) = test_repo().await;
    let handler = UpdateHandler::new(repo, Arc::new(FailingCompletion));

    let reply = handler.handle(&message_from_42("hello")).await;
    assert_eq!(reply, APOLOGY);
}

/// **Test: a "/start" without a sender still greets and stores nothing.**
#[tokio::test]
async fn test_start_without_sender() {
    let (repo, _db) = test_repo().await;
    let handler = UpdateHandler::new(
        repo.clone(),
        Arc::new(FixedCompletion("unused".to_string())),
    );

    let message = IncomingMessage {
        message_id: None,
        from: None,
        chat: Some(maestro_core::ChatRef { id: 7 }),
        text: Some("/start".to_string()),
    };

    assert_eq!(handler.handle(&message).await, GREETING);
    assert!(repo.all_telegram_ids().await.unwrap().is_empty());
}
