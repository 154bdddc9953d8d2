//! # maestro-core
//!
//! Core types and traits for the MaestroAI Telegram bot: the wire [`Update`]
//! envelope, the [`Bot`] send-side trait, error types, and tracing
//! initialization. Transport-agnostic; used by `storage`, `completion-client`
//! and `maestro-bot`.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{ChatRef, IncomingMessage, Sender, Update};
