//! Row types for the `users`, `connected_services` and `tasks` tables.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a registered user. Stored as lowercase TEXT.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Manager,
    Owner,
}

/// One registered Telegram user. At most one row per `telegram_id`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub telegram_id: i64,
    pub username: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// An external service linked to a user. Rows are created when an OAuth
/// flow (outside this crate) completes; the token is stored opaque.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ConnectedService {
    pub id: i64,
    pub user_id: i64,
    pub service: String,
    pub token: String,
}

/// A task belonging to a user.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub done: bool,
}
