//! Startup sequencer: schema, webhook registration, resume broadcast, serve.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use completion_client::{CompletionClient, OpenAiCompletionClient};
use maestro_core::Bot;
use storage::UserRepository;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::handler::UpdateHandler;
use crate::telegram::TelegramBotAdapter;
use crate::webhook::{router, AppState};

/// Sent to every known user once the service is back up. Failures are
/// per-user: a blocked bot or a deleted account must not stop the rest.
pub const RESUMED_MESSAGE: &str = "Бот в работе";

/// Brings the service up and serves the webhook endpoint until the process
/// is stopped.
pub async fn run(config: Config) -> Result<()> {
    let users = UserRepository::new(&config.database_url)
        .await
        .context("Failed to initialize the database")?;

    let completion: Arc<dyn CompletionClient> = Arc::new(
        OpenAiCompletionClient::with_base_url(
            config.openai_api_key.clone(),
            config.openai_base_url.clone(),
        )
        .with_model(config.model.clone()),
    );

    let adapter = TelegramBotAdapter::from_token(&config.bot_token);
    adapter
        .register_webhook(&config.webhook_url)
        .await
        .context("Failed to register the webhook URL with Telegram")?;
    info!(url = %config.webhook_url, "Webhook registered");

    broadcast_resumed(&adapter, &users).await;

    let state = AppState {
        handler: Arc::new(UpdateHandler::new(users, completion)),
        bot: Arc::new(adapter),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(%addr, "Starting webhook server");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, router(state))
        .await
        .context("Webhook server failed")?;

    Ok(())
}

/// Best-effort "service resumed" notification to previously known users.
async fn broadcast_resumed(bot: &dyn Bot, users: &UserRepository) {
    let chat_ids = match users.all_telegram_ids().await {
        Ok(ids) => ids,
        Err(err) => {
            error!(error = %err, "Failed to list users for the resume broadcast");
            return;
        }
    };

    for chat_id in chat_ids {
        if let Err(err) = bot.send_message(chat_id, RESUMED_MESSAGE).await {
            error!(error = %err, chat_id, "Failed to notify user");
        }
    }
}
