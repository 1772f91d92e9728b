//! Runtime configuration read from the environment.
//!
//! `.env` is loaded once in `run()` before this is read.

use std::env;
use std::path::PathBuf;

use crate::error::TrackerError;

const DB_PATH_VAR: &str = "ACTIVITY_TRACKER_DB";
const LOG_FORMAT_VAR: &str = "ACTIVITY_TRACKER_LOG_FORMAT";
const LOG_FILTER_VAR: &str = "RUST_LOG";

const DEFAULT_DB_PATH: &str = "activity-tracker.db";
const DEFAULT_LOG_FILTER: &str = "activity_tracker_lib=info,activity_tracker=info,warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
  #[default]
  Pretty,
  Json,
}

impl std::str::FromStr for LogFormat {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "pretty" | "text" => Ok(Self::Pretty),
      "json" => Ok(Self::Json),
      other => Err(format!("Unknown log format: {}", other)),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// SQLite file holding day logs
  pub database_path: PathBuf,
  pub log_format: LogFormat,
  /// `EnvFilter` directives
  pub log_filter: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      database_path: PathBuf::from(DEFAULT_DB_PATH),
      log_format: LogFormat::default(),
      log_filter: DEFAULT_LOG_FILTER.to_string(),
    }
  }
}

impl Config {
  pub fn from_env() -> Result<Self, TrackerError> {
    let defaults = Self::default();

    let log_format = match env::var(LOG_FORMAT_VAR) {
      Ok(v) => v.parse().map_err(TrackerError::Config)?,
      Err(_) => defaults.log_format,
    };

    Ok(Self {
      database_path: env::var(DB_PATH_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or(defaults.database_path),
      log_format,
      log_filter: env::var(LOG_FILTER_VAR).unwrap_or(defaults.log_filter),
    })
  }

  pub fn with_database_path(mut self, path: Option<PathBuf>) -> Self {
    if let Some(path) = path {
      self.database_path = path;
    }
    self
  }

  pub fn database_url(&self) -> String {
    format!("sqlite://{}?mode=rwc", self.database_path.display())
  }
}
