use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::fs;

use crate::config::Config;
use crate::error::TrackerError;

pub type DbPool = SqlitePool;

/// Application state holding the database connection pool.
/// Built once at startup and handed to every command.
pub struct AppState {
  pub db: DbPool,
}

impl AppState {
  pub fn new(db: DbPool) -> Self {
    Self { db }
  }
}

/// Initialize the database connection pool and run migrations
pub async fn initialize_db(config: &Config) -> Result<DbPool, TrackerError> {
  // Create the parent directory if it doesn't exist
  if let Some(parent) = config.database_path.parent() {
    if !parent.as_os_str().is_empty() {
      fs::create_dir_all(parent).map_err(|e| {
        TrackerError::Config(format!("Failed to create {}: {}", parent.display(), e))
      })?;
    }
  }

  tracing::debug!(path = %config.database_path.display(), "Initializing database");

  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect(&config.database_url())
    .await?;

  sqlx::migrate!("./migrations").run(&pool).await?;

  tracing::debug!("Database initialized successfully");

  Ok(pool)
}
