use std::sync::Arc;

use anyhow::Context;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        // A single connection: every store call runs to completion before
        // the next begins, and SQLite serializes writers regardless.
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;
        Ok(Self { db, config })
    }
}

/// Fresh in-memory store with the schema applied. Each call returns an
/// isolated database.
#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory database");
    crate::auth::repo::ensure_schema(&db)
        .await
        .expect("create users table");
    db
}
