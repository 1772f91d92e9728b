use serde::Serialize;

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

/// Errors from the store, configuration and command entry points.
/// Scoring itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("Migration failed: {0}")]
  Migration(#[from] sqlx::migrate::MigrateError),

  #[error("Serialization error: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error("Invalid date '{0}': expected YYYY-MM-DD")]
  InvalidDate(String),

  #[error("Invalid activity input: {0}")]
  InvalidActivity(String),

  #[error("No log for {0}")]
  NotFound(String),

  #[error("Configuration error: {0}")]
  Config(String),
}

impl Serialize for TrackerError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}
