//! Service configuration, loaded from environment variables.
//!
//! Required values fail fast with a descriptive error before the service
//! starts serving; everything else has a sensible default.

use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct Config {
    /// BOT_TOKEN (or the CLI `--token` override).
    pub bot_token: String,
    /// WEBHOOK_URL: the externally reachable URL Telegram pushes updates to.
    pub webhook_url: url::Url,
    /// DATABASE_URL, e.g. `sqlite:maestro.db`.
    pub database_url: String,
    /// OPENAI_API_KEY for the completion API.
    pub openai_api_key: String,
    /// OPENAI_BASE_URL; defaults to the hosted API.
    pub openai_base_url: String,
    /// MODEL identifier used for every completion request.
    pub model: String,
    /// PORT the webhook server binds to (hosting platforms inject this).
    pub port: u16,
    /// LOG_FILE path for the tracing tee.
    pub log_file: String,
}

impl Config {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN is not set")?,
        };

        let webhook_url = env::var("WEBHOOK_URL").context("WEBHOOK_URL is not set")?;
        let webhook_url = url::Url::parse(&webhook_url)
            .with_context(|| format!("WEBHOOK_URL is not a valid URL: {}", webhook_url))?;

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let openai_api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY is not set")?;

        let openai_base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let model = env::var("MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/maestro-bot.log".to_string());

        Ok(Self {
            bot_token,
            webhook_url,
            database_url,
            openai_api_key,
            openai_base_url,
            model,
            port,
            log_file,
        })
    }
}
