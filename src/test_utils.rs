//! Test utilities and helpers for unit and store tests
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Day log factories

use crate::activities::{CONDITIONING_EASY, MOBILITY_LOWER_BODY, STRENGTH_LEGS, STRENGTH_PUSH};
use crate::models::{DayLog, NewDayLog, Readiness};
use chrono::{NaiveDate, TimeZone, Utc};
use sqlx::SqlitePool;

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// ---------------------------------------------------------------------------
/// Day Log Factories
/// ---------------------------------------------------------------------------

pub fn date(s: &str) -> NaiveDate {
  NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test dates are ISO formatted")
}

/// Upsert input with the given completions and counts
pub fn new_day_log(date_str: &str, completed: &[&str], counts: &[(&str, f64)]) -> NewDayLog {
  NewDayLog {
    date: date(date_str),
    readiness: Readiness::Normal,
    completed: completed.iter().map(|k| (k.to_string(), true)).collect(),
    counts: counts.iter().map(|(k, n)| (k.to_string(), *n)).collect(),
    notes: None,
  }
}

/// A stored-looking day log with fixed timestamps
pub fn day_log(date_str: &str, completed: &[&str], counts: &[(&str, f64)]) -> DayLog {
  let at = Utc
    .with_ymd_and_hms(2026, 1, 1, 12, 0, 0)
    .single()
    .expect("valid timestamp");
  new_day_log(date_str, completed, counts).into_day_log(at, at)
}

/// Meets MED in a normal week with 25 training points
pub fn winning_day(date_str: &str) -> DayLog {
  day_log(
    date_str,
    &[MOBILITY_LOWER_BODY, STRENGTH_PUSH, STRENGTH_LEGS],
    &[(CONDITIONING_EASY, 1.0)],
  )
}

/// Mobility only: 3 training points, MED not met
pub fn losing_day(date_str: &str) -> DayLog {
  day_log(date_str, &[MOBILITY_LOWER_BODY], &[])
}

pub fn fatigued_day(date_str: &str) -> DayLog {
  let mut day = day_log(date_str, &[], &[]);
  day.readiness = Readiness::Fatigued;
  day
}
