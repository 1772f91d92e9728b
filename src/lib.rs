//! Daily activity scoring
//!
//! Days are logged as a set of completed activities plus counts for
//! repeatable ones. Scores, ratings, streaks and deload weeks are always
//! derived from those logs:
//!
//! - [`activities`]: the catalog and its point values
//! - [`scoring`]: one day to [`scoring::DayScores`]
//! - [`weekly`]: week buckets to [`weekly::WeeklySummary`], streaks
//!
//! The store, commands and CLI wire a local SQLite file to that core.

pub mod activities;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod ratings;
pub mod scoring;
pub mod store;
pub mod week;
pub mod weekly;

#[cfg(test)]
mod test_utils;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use config::{Config, LogFormat};
pub use error::TrackerError;
pub use models::{ActivityCategory, ActivityDefinition, DayLog, NewDayLog, Readiness};
pub use scoring::{DayScores, LifestyleRating, ScoringOptions, TrainingRating};
pub use weekly::{
  compute_week_deload, consistency_streak_weeks, summarize_weeks, win_streak_days,
  DeloadEvaluation, DeloadReason, Streaks, WeekBucket, WeeklyRating, WeeklySummary,
};

use cli::Cli;
use db::AppState;

/// Install the global subscriber. Logs go to stderr so `--json` output on
/// stdout stays machine-readable. Only the first call has any effect.
fn init_logging(config: &Config) {
  let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
  let registry = tracing_subscriber::registry().with(filter);

  let result = match config.log_format {
    LogFormat::Json => registry
      .with(
        tracing_subscriber::fmt::layer()
          .json()
          .with_target(false)
          .flatten_event(true)
          .with_writer(std::io::stderr),
      )
      .try_init(),
    LogFormat::Pretty => registry
      .with(
        tracing_subscriber::fmt::layer()
          .with_target(false)
          .with_writer(std::io::stderr),
      )
      .try_init(),
  };

  if result.is_err() {
    tracing::debug!("Logging already initialized");
  }
}

pub async fn run() -> Result<(), TrackerError> {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  let cli = Cli::parse();
  let config = Config::from_env()?.with_database_path(cli.db.clone());
  init_logging(&config);

  let pool = db::initialize_db(&config).await?;
  let state = AppState::new(pool);
  tracing::debug!(path = %config.database_path.display(), "Database ready");

  let result = cli::execute(cli.command, &state, cli.json).await;
  state.db.close().await;
  result
}
