//! User repository: lazy registration and queries for users and their
//! connected services and tasks.
//!
//! `ensure_user` is the hot path: it must never create a duplicate row even
//! when the platform delivers several updates for the same unseen identifier
//! concurrently. The `UNIQUE` constraint on `users.telegram_id` plus an
//! `ON CONFLICT DO NOTHING` insert guarantees that without any locking.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::StorageError;
use crate::models::{ConnectedService, Task, User, UserRole};
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct UserRepository {
    pool_manager: SqlitePoolManager,
}

impl UserRepository {
    /// Connects to the database and applies the schema idempotently.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    /// Creates missing tables. Not a migration system: the schema is applied
    /// as-is on every start and existing tables are left untouched.
    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating database tables if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                telegram_id BIGINT NOT NULL UNIQUE,
                username TEXT,
                role TEXT NOT NULL DEFAULT 'user',
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS connected_services (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL REFERENCES users(id),
                service TEXT NOT NULL,
                token TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL REFERENCES users(id),
                title TEXT NOT NULL,
                description TEXT,
                deadline TEXT,
                done INTEGER NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(pool)
        .await?;

        info!("Database tables created successfully");
        Ok(())
    }

    /// Looks up the user by Telegram chat identifier, inserting a fresh row
    /// with the default role on first contact. One write transaction on
    /// first contact per identifier, zero writes thereafter.
    pub async fn ensure_user(
        &self,
        telegram_id: i64,
        username: Option<&str>,
    ) -> Result<User, StorageError> {
        let pool = self.pool_manager.pool();

        let inserted = sqlx::query(
            r#"
            INSERT INTO users (telegram_id, username, role, created_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(telegram_id) DO NOTHING
            "#,
        )
        .bind(telegram_id)
        .bind(username)
        .bind(UserRole::default())
        .bind(Utc::now())
        .execute(pool)
        .await?;

        if inserted.rows_affected() == 1 {
            info!(telegram_id, "Registered new user");
        }

        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE telegram_id = ?")
            .bind(telegram_id)
            .fetch_one(pool)
            .await?;

        Ok(user)
    }

    pub async fn find_by_telegram_id(&self, telegram_id: i64) -> Result<Option<User>, StorageError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE telegram_id = ?")
            .bind(telegram_id)
            .fetch_optional(self.pool_manager.pool())
            .await?;
        Ok(user)
    }

    /// Chat identifiers of every registered user, for the startup broadcast.
    pub async fn all_telegram_ids(&self) -> Result<Vec<i64>, StorageError> {
        let ids = sqlx::query_scalar::<_, i64>("SELECT telegram_id FROM users ORDER BY id")
            .fetch_all(self.pool_manager.pool())
            .await?;
        Ok(ids)
    }

    pub async fn set_role(&self, telegram_id: i64, role: UserRole) -> Result<User, StorageError> {
        let updated = sqlx::query("UPDATE users SET role = ? WHERE telegram_id = ?")
            .bind(role)
            .bind(telegram_id)
            .execute(self.pool_manager.pool())
            .await?;

        if updated.rows_affected() == 0 {
            return Err(StorageError::NotFound(format!(
                "no user with telegram_id {}",
                telegram_id
            )));
        }

        self.find_by_telegram_id(telegram_id)
            .await?
            .ok_or_else(|| StorageError::NotFound(format!("no user with telegram_id {}", telegram_id)))
    }

    /// Records an external service authorization for the user. The token is
    /// opaque to this crate; the OAuth exchange that produced it lives elsewhere.
    pub async fn link_service(
        &self,
        user_id: i64,
        service: &str,
        token: &str,
    ) -> Result<ConnectedService, StorageError> {
        let pool = self.pool_manager.pool();

        let result = sqlx::query(
            "INSERT INTO connected_services (user_id, service, token) VALUES (?, ?, ?)",
        )
        .bind(user_id)
        .bind(service)
        .bind(token)
        .execute(pool)
        .await?;

        let row = sqlx::query_as::<_, ConnectedService>(
            "SELECT * FROM connected_services WHERE id = ?",
        )
        .bind(result.last_insert_rowid())
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    pub async fn services_for_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<ConnectedService>, StorageError> {
        let rows = sqlx::query_as::<_, ConnectedService>(
            "SELECT * FROM connected_services WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(self.pool_manager.pool())
        .await?;
        Ok(rows)
    }

    pub async fn add_task(
        &self,
        user_id: i64,
        title: &str,
        description: Option<&str>,
        deadline: Option<DateTime<Utc>>,
    ) -> Result<Task, StorageError> {
        let pool = self.pool_manager.pool();

        let result = sqlx::query(
            "INSERT INTO tasks (user_id, title, description, deadline, done) VALUES (?, ?, ?, ?, 0)",
        )
        .bind(user_id)
        .bind(title)
        .bind(description)
        .bind(deadline)
        .execute(pool)
        .await?;

        let task = sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = ?")
            .bind(result.last_insert_rowid())
            .fetch_one(pool)
            .await?;

        Ok(task)
    }

    pub async fn tasks_for_user(&self, user_id: i64) -> Result<Vec<Task>, StorageError> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT * FROM tasks WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(self.pool_manager.pool())
        .await?;
        Ok(tasks)
    }

    /// Marks a task done. Returns false when no task has that id.
    pub async fn complete_task(&self, task_id: i64) -> Result<bool, StorageError> {
        let updated = sqlx::query("UPDATE tasks SET done = 1 WHERE id = ?")
            .bind(task_id)
            .execute(self.pool_manager.pool())
            .await?;
        Ok(updated.rows_affected() > 0)
    }
}
