//! Shared test doubles: mock completion backends and a recording bot.
//! No test in this crate talks to Telegram or to the completion API.
#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use completion_client::{CompletionClient, CompletionError};
use maestro_core::{Bot, IncomingMessage, Result as CoreResult, Sender};
use storage::UserRepository;

/// Completion backend that always answers with the same text.
pub struct FixedCompletion(pub String);

#[async_trait]
impl CompletionClient for FixedCompletion {
    async fn complete(&self, _prompt: &str) -> Result<String, CompletionError> {
        Ok(self.0.clone())
    }
}

/// Completion backend that always fails, exercising the apology path.
pub struct FailingCompletion;

#[async_trait]
impl CompletionClient for FailingCompletion {
    async fn complete(&self, _prompt: &str) -> Result<String, CompletionError> {
        Err(CompletionError::NoChoices)
    }
}

/// Bot that records outgoing sends instead of calling Telegram.
#[derive(Default)]
pub struct RecordingBot {
    pub sent: Mutex<Vec<(i64, String)>>,
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat_id: i64, text: &str) -> CoreResult<()> {
        self.sent.lock().unwrap().push((chat_id, text.to_string()));
        Ok(())
    }
}

/// Repository backed by a fresh temp-file database; the file handle must
/// outlive the repository.
pub async fn test_repo() -> (UserRepository, tempfile::NamedTempFile) {
    let db_file = tempfile::NamedTempFile::new().expect("temp db file");
    let database_url = format!("sqlite:{}", db_file.path().display());
    let repo = UserRepository::new(&database_url)
        .await
        .expect("Failed to create repository");
    (repo, db_file)
}

/// A private-chat text message from user 42 (as in the platform's payloads
/// that omit the chat member).
pub fn message_from_42(text: &str) -> IncomingMessage {
    IncomingMessage {
        message_id: None,
        from: Some(Sender {
            id: 42,
            username: Some("alice".to_string()),
            first_name: Some("Alice".to_string()),
        }),
        chat: None,
        text: Some(text.to_string()),
    }
}
