//! Day log store
//!
//! A single SQLite table keyed by date. Rows are upserted in place; scores
//! are never stored, they are recomputed from the logs on every read.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::collections::BTreeMap;

use crate::error::TrackerError;
use crate::models::{DayLog, NewDayLog, Readiness};
use crate::week::{format_iso_date, parse_iso_date};

pub const DEFAULT_RECENT_LIMIT: i64 = 200;

const SELECT_COLUMNS: &str = "SELECT date, readiness, completed_json, counts_json, notes, \
  created_at, updated_at FROM day_logs";

/// ---------------------------------------------------------------------------
/// Row Conversion
/// ---------------------------------------------------------------------------

fn format_timestamp(at: DateTime<Utc>) -> String {
  // Fixed width so that text ordering matches time ordering
  at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .ok()
}

/// Stored timestamps keep millisecond precision
fn now_millis() -> DateTime<Utc> {
  let now = Utc::now();
  DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

/// A stored JSON column that isn't an object reads back as empty
fn json_map(json: &str, column: &str, date: &str) -> BTreeMap<String, serde_json::Value> {
  serde_json::from_str(json).unwrap_or_else(|e| {
    tracing::warn!(date, column, error = %e, "Ignoring unreadable day log column");
    BTreeMap::new()
  })
}

/// Loose truthiness for stored flags: 0, "", null and false are not done
fn is_truthy(value: &serde_json::Value) -> bool {
  match value {
    serde_json::Value::Null => false,
    serde_json::Value::Bool(b) => *b,
    serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
    serde_json::Value::String(s) => !s.is_empty(),
    serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
  }
}

fn completed_from_json(json: &str, date: &str) -> BTreeMap<String, bool> {
  json_map(json, "completed_json", date)
    .into_iter()
    .map(|(key, value)| (key, is_truthy(&value)))
    .collect()
}

/// Counts that aren't numbers read back as 0
fn counts_from_json(json: &str, date: &str) -> BTreeMap<String, f64> {
  json_map(json, "counts_json", date)
    .into_iter()
    .map(|(key, value)| (key, value.as_f64().unwrap_or(0.0)))
    .collect()
}

/// `None` for rows whose date can't be parsed; those are skipped, not fatal
fn day_log_from_row(row: &SqliteRow) -> Result<Option<DayLog>, TrackerError> {
  let date_str: String = row.try_get("date")?;
  let Ok(date) = parse_iso_date(&date_str) else {
    tracing::warn!(date = %date_str, "Skipping day log with unreadable date");
    return Ok(None);
  };

  let readiness_str: String = row.try_get("readiness")?;
  let readiness: Readiness = readiness_str.parse().unwrap_or_default();

  let completed_json: String = row.try_get("completed_json")?;
  let counts_json: String = row.try_get("counts_json")?;
  let created_at: String = row.try_get("created_at")?;
  let updated_at: String = row.try_get("updated_at")?;

  // Unix epoch when neither timestamp parses
  let created_at = parse_timestamp(&created_at)
    .or_else(|| parse_timestamp(&updated_at))
    .unwrap_or_default();
  let updated_at = parse_timestamp(&updated_at).unwrap_or(created_at);

  Ok(Some(DayLog {
    date,
    readiness,
    completed: completed_from_json(&completed_json, &date_str),
    counts: counts_from_json(&counts_json, &date_str),
    notes: row.try_get("notes")?,
    created_at,
    updated_at,
  }))
}

fn day_logs_from_rows(rows: &[SqliteRow]) -> Result<Vec<DayLog>, TrackerError> {
  let mut days = Vec::with_capacity(rows.len());
  for row in rows {
    if let Some(day) = day_log_from_row(row)? {
      days.push(day);
    }
  }
  Ok(days)
}

/// ---------------------------------------------------------------------------
/// Database Operations
/// ---------------------------------------------------------------------------

/// Insert or replace the log for `input.date`.
/// `created_at` survives edits; `updated_at` is bumped on every save.
pub async fn upsert_day_log(pool: &SqlitePool, input: NewDayLog) -> Result<DayLog, TrackerError> {
  let now = now_millis();
  let created_at = get_day_log(pool, input.date)
    .await?
    .map(|existing| existing.created_at)
    .unwrap_or(now);

  let day = input.into_day_log(created_at, now);

  sqlx::query(
    r#"
    INSERT INTO day_logs (
      date, readiness, completed_json, counts_json, notes, created_at, updated_at
    )
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
    ON CONFLICT(date) DO UPDATE SET
      readiness = excluded.readiness,
      completed_json = excluded.completed_json,
      counts_json = excluded.counts_json,
      notes = excluded.notes,
      updated_at = excluded.updated_at
    "#,
  )
  .bind(format_iso_date(day.date))
  .bind(day.readiness.to_string())
  .bind(serde_json::to_string(&day.completed)?)
  .bind(serde_json::to_string(&day.counts)?)
  .bind(&day.notes)
  .bind(format_timestamp(day.created_at))
  .bind(format_timestamp(day.updated_at))
  .execute(pool)
  .await?;

  tracing::debug!(date = %day.date, "Saved day log");

  Ok(day)
}

pub async fn get_day_log(
  pool: &SqlitePool,
  date: NaiveDate,
) -> Result<Option<DayLog>, TrackerError> {
  let row = sqlx::query(&format!("{} WHERE date = ?1", SELECT_COLUMNS))
    .bind(format_iso_date(date))
    .fetch_optional(pool)
    .await?;

  Ok(row.as_ref().map(day_log_from_row).transpose()?.flatten())
}

/// Most recently edited logs first
pub async fn list_day_logs_by_updated_at_desc(
  pool: &SqlitePool,
  limit: i64,
) -> Result<Vec<DayLog>, TrackerError> {
  let rows = sqlx::query(&format!(
    "{} ORDER BY updated_at DESC, date DESC LIMIT ?1",
    SELECT_COLUMNS
  ))
  .bind(limit)
  .fetch_all(pool)
  .await?;

  day_logs_from_rows(&rows)
}

/// Logs dated between `start` and `end`, both inclusive, oldest first
pub async fn list_day_logs_in_range(
  pool: &SqlitePool,
  start: NaiveDate,
  end: NaiveDate,
) -> Result<Vec<DayLog>, TrackerError> {
  let rows = sqlx::query(&format!(
    "{} WHERE date >= ?1 AND date <= ?2 ORDER BY date",
    SELECT_COLUMNS
  ))
  .bind(format_iso_date(start))
  .bind(format_iso_date(end))
  .fetch_all(pool)
  .await?;

  day_logs_from_rows(&rows)
}

/// Every known log, oldest first
pub async fn list_all_day_logs(pool: &SqlitePool) -> Result<Vec<DayLog>, TrackerError> {
  let rows = sqlx::query(&format!("{} ORDER BY date", SELECT_COLUMNS))
    .fetch_all(pool)
    .await?;

  day_logs_from_rows(&rows)
}

/// Returns whether a log existed for `date`
pub async fn delete_day_log(pool: &SqlitePool, date: NaiveDate) -> Result<bool, TrackerError> {
  let result = sqlx::query("DELETE FROM day_logs WHERE date = ?1")
    .bind(format_iso_date(date))
    .execute(pool)
    .await?;

  tracing::debug!(date = %date, deleted = result.rows_affected(), "Deleted day log");

  Ok(result.rows_affected() > 0)
}
