//! The update handler: a two-branch dispatch over the incoming text.
//!
//! "/start" registers the user and greets; anything else goes to the
//! completion client. An upstream failure never escapes this module: the
//! caller always gets reply text, so the webhook is always acknowledged.

use std::sync::Arc;

use completion_client::CompletionClient;
use maestro_core::IncomingMessage;
use storage::UserRepository;
use tracing::{error, info};

pub const START_COMMAND: &str = "/start";

pub const GREETING: &str = "Привет! Я твой Telegram-бот MaestroAI.";

/// Fixed user-facing fallback for any upstream completion failure.
pub const APOLOGY: &str = "Извините, сейчас я не могу ответить. Попробуйте позже.";

/// Handles one inbound message and produces the outgoing reply text.
/// Dependencies are injected so tests can use a temp database and a mock
/// completion backend.
pub struct UpdateHandler {
    users: UserRepository,
    completion: Arc<dyn CompletionClient>,
}

impl UpdateHandler {
    pub fn new(users: UserRepository, completion: Arc<dyn CompletionClient>) -> Self {
        Self { users, completion }
    }

    /// Returns the reply for the same chat the message came from.
    ///
    /// A persistence failure on first contact is logged but does not
    /// suppress the greeting; an upstream completion failure becomes the
    /// fixed apology.
    pub async fn handle(&self, message: &IncomingMessage) -> String {
        let text = message.text().unwrap_or_default();

        if text == START_COMMAND {
            if let Some(from) = &message.from {
                match self.users.ensure_user(from.id, from.username.as_deref()).await {
                    Ok(user) => {
                        info!(telegram_id = user.telegram_id, "Handled /start");
                    }
                    Err(err) => {
                        error!(error = %err, telegram_id = from.id, "Failed to persist user");
                    }
                }
            }
            return GREETING.to_string();
        }

        match self.completion.complete(text).await {
            Ok(reply) => reply,
            Err(err) => {
                error!(error = %err, "Completion request failed");
                APOLOGY.to_string()
            }
        }
    }
}
