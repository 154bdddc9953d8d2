//! # maestro-bot
//!
//! MaestroAI Telegram bot service: receives webhook updates over HTTP,
//! registers users lazily, forwards freeform messages to the completion API
//! and replies in the same chat.
//!
//! ## Modules
//!
//! - [`cli`] – clap command line
//! - [`config`] – env configuration (fail fast on missing required vars)
//! - [`handler`] – the two-branch update handler
//! - [`telegram`] – teloxide adapter behind the core `Bot` trait
//! - [`webhook`] – axum router: `POST /` updates, `GET /` health
//! - [`startup`] – startup sequencer and serve loop

pub mod cli;
pub mod config;
pub mod handler;
pub mod startup;
pub mod telegram;
pub mod webhook;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use handler::{UpdateHandler, APOLOGY, GREETING};
pub use startup::run;
pub use telegram::TelegramBotAdapter;
pub use webhook::{router, AppState};
