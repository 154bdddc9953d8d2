//! Wire types for one inbound Telegram update envelope.
//!
//! Deliberately partial: only the fields the webhook flow reads. Every field
//! is optional so that a payload the platform sends with more (or fewer)
//! members still deserializes; the endpoint decides what to do with the rest.

use serde::Deserialize;

/// One inbound event pushed by Telegram to the webhook.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: Option<i64>,
    /// Present for new-message updates; other update kinds leave it empty.
    pub message: Option<IncomingMessage>,
}

/// A new text message inside an [`Update`].
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    pub message_id: Option<i64>,
    pub from: Option<Sender>,
    pub chat: Option<ChatRef>,
    pub text: Option<String>,
}

/// The account the message originates from.
#[derive(Debug, Clone, Deserialize)]
pub struct Sender {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

/// The chat the message was posted in.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRef {
    pub id: i64,
}

impl IncomingMessage {
    /// Chat identifier to answer to. Private chats share the sender's id,
    /// so a payload without an explicit `chat` member still gets a reply.
    pub fn chat_id(&self) -> Option<i64> {
        self.chat
            .as_ref()
            .map(|chat| chat.id)
            .or_else(|| self.from.as_ref().map(|from| from.id))
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
