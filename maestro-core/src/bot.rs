//! Send-side abstraction for the messaging platform.
//!
//! Handlers and the startup sequencer talk to a [`Bot`] rather than to
//! teloxide directly, so tests can substitute a recording mock.

use crate::error::Result;
use async_trait::async_trait;

/// Abstraction for sending messages. Implementations map to a transport
/// (the production one wraps teloxide, see `maestro-bot`).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()>;
}
