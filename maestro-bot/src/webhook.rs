//! Webhook endpoint: the HTTP surface Telegram pushes updates to.
//!
//! `POST /` acknowledges with `{"ok": true}` no matter what happened inside:
//! the platform only needs a fast 2xx to stop redelivery. The actual
//! handling (LLM round trip, reply send) runs on a spawned task so the
//! acknowledgement never waits for it.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use maestro_core::{Bot, Update};
use serde_json::{json, Value};
use tracing::{error, warn};

use crate::handler::UpdateHandler;

/// Dependencies the endpoint hands to each request, constructed once at
/// process start (no process-wide singletons).
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<UpdateHandler>,
    pub bot: Arc<dyn Bot>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check).post(process_webhook))
        .with_state(state)
}

/// GET / — liveness probe.
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "Bot is running" }))
}

/// POST / — one update envelope per call.
async fn process_webhook(
    State(state): State<AppState>,
    body: Result<Json<Update>, JsonRejection>,
) -> Json<Value> {
    let update = match body {
        Ok(Json(update)) => update,
        Err(rejection) => {
            warn!(error = %rejection, "Discarding malformed update payload");
            return ack();
        }
    };

    let Some(message) = update.message else {
        // Edited messages, callback queries etc. are not handled.
        return ack();
    };

    if message.text.is_none() {
        return ack();
    }

    let Some(chat_id) = message.chat_id() else {
        warn!(update_id = update.update_id, "Message update without a chat to answer");
        return ack();
    };

    tokio::spawn(async move {
        let reply = state.handler.handle(&message).await;
        if let Err(err) = state.bot.send_message(chat_id, &reply).await {
            error!(error = %err, chat_id, "Failed to send reply");
        }
    });

    ack()
}

fn ack() -> Json<Value> {
    Json(json!({ "ok": true }))
}
