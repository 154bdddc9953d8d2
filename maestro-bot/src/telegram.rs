//! Wraps teloxide::Bot and implements [`maestro_core::Bot`]. Production code
//! sends messages via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use maestro_core::{Bot as CoreBot, BotError, Result};
use teloxide::prelude::*;
use teloxide::types::ChatId;

/// Thin wrapper around teloxide::Bot that implements the core Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Creates an adapter from a bot token.
    pub fn from_token(token: &str) -> Self {
        Self::new(teloxide::Bot::new(token))
    }

    /// Registers the externally reachable webhook URL with Telegram, so the
    /// platform starts pushing updates to our endpoint.
    pub async fn register_webhook(&self, url: &url::Url) -> Result<()> {
        self.bot
            .set_webhook(url.clone())
            .await
            .map_err(|e| BotError::Telegram(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat_id), text.to_string())
            .await
            .map_err(|e| BotError::Telegram(e.to_string()))?;
        Ok(())
    }
}
