//! Storage crate: user persistence for the MaestroAI bot.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – User, UserRole, ConnectedService, Task
//! - [`user_repo`] – UserRepository (SQLite via sqlx)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod models;
mod sqlite_pool;
mod user_repo;

pub use error::StorageError;
pub use models::{ConnectedService, Task, User, UserRole};
pub use sqlite_pool::SqlitePoolManager;
pub use user_repo::UserRepository;
