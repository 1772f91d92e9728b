//! Day-level commands: log, show, list and delete

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::activities;
use crate::commands::load_history;
use crate::db::AppState;
use crate::error::TrackerError;
use crate::models::{DayLog, NewDayLog};
use crate::store::{
  delete_day_log, list_day_logs_by_updated_at_desc, list_day_logs_in_range, upsert_day_log,
};
use crate::week::{format_iso_date, sunday_week_range, sunday_week_start};
use crate::weekly::{DeloadReason, ScoredDay, WeeklySummary};

/// A day with its scores, evaluated in the context of its week
#[derive(Debug, Clone, Serialize)]
pub struct DayView {
  pub week_start: NaiveDate,
  pub deload: bool,
  pub deload_reasons: BTreeSet<DeloadReason>,
  #[serde(flatten)]
  pub scored: ScoredDay,
}

/// ---------------------------------------------------------------------------
/// Input Validation
/// ---------------------------------------------------------------------------

fn require_known(key: &str) -> Result<(), TrackerError> {
  if activities::definition(key).is_none() {
    return Err(TrackerError::InvalidActivity(format!("unknown activity '{}'", key)));
  }
  Ok(())
}

/// Reject keys the catalog doesn't know and keys logged in the wrong
/// namespace. Stored logs are never validated, only new input.
pub fn validate_new_day_log(input: &NewDayLog) -> Result<(), TrackerError> {
  for key in input.completed.keys() {
    require_known(key)?;
    if activities::is_repeatable(key) {
      return Err(TrackerError::InvalidActivity(format!(
        "'{}' is repeatable, log it with a count",
        key
      )));
    }
  }

  for (key, count) in &input.counts {
    require_known(key)?;
    if !activities::is_repeatable(key) {
      return Err(TrackerError::InvalidActivity(format!(
        "'{}' is not repeatable, mark it as done instead",
        key
      )));
    }
    if !count.is_finite() || *count < 0.0 || count.fract() != 0.0 {
      return Err(TrackerError::InvalidActivity(format!(
        "count for '{}' must be a whole number >= 0, got {}",
        key, count
      )));
    }
  }

  Ok(())
}

/// ---------------------------------------------------------------------------
/// Commands
/// ---------------------------------------------------------------------------

/// Save (or replace) the log for a date and return it scored
pub async fn log_day(state: &AppState, input: NewDayLog) -> Result<DayView, TrackerError> {
  validate_new_day_log(&input)?;

  let day = upsert_day_log(&state.db, input).await?;
  tracing::info!(
    date = %day.date,
    completed = day.completed.values().filter(|done| **done).count(),
    "Logged day"
  );

  show_day(state, day.date).await
}

/// Load one day and score it with its week's deload status
pub async fn show_day(state: &AppState, date: NaiveDate) -> Result<DayView, TrackerError> {
  let week_start = sunday_week_start(date);
  let history = load_history(state).await?;

  history
    .into_iter()
    .find(|w| w.week_start == week_start)
    .and_then(|week| {
      let deload = week.deload;
      let deload_reasons = week.deload_reasons;
      week
        .days
        .into_iter()
        .find(|d| d.day.date == date)
        .map(|scored| DayView {
          week_start,
          deload,
          deload_reasons,
          scored,
        })
    })
    .ok_or_else(|| TrackerError::NotFound(format_iso_date(date)))
}

/// Look each day up in the scored history, keeping the order of `days`
fn views_for(days: &[DayLog], history: &[WeeklySummary]) -> Vec<DayView> {
  days
    .iter()
    .filter_map(|day| {
      let week_start = sunday_week_start(day.date);
      let week = history.iter().find(|w| w.week_start == week_start)?;
      let scored = week.days.iter().find(|d| d.day.date == day.date)?;
      Some(DayView {
        week_start,
        deload: week.deload,
        deload_reasons: week.deload_reasons.clone(),
        scored: scored.clone(),
      })
    })
    .collect()
}

/// Most recently edited days, scored
pub async fn recent_days(state: &AppState, limit: i64) -> Result<Vec<DayView>, TrackerError> {
  let recent = list_day_logs_by_updated_at_desc(&state.db, limit).await?;
  let history = load_history(state).await?;
  Ok(views_for(&recent, &history))
}

/// Logged days from `start` to `end` inclusive, oldest first
pub async fn days_in_range(
  state: &AppState,
  start: NaiveDate,
  end: NaiveDate,
) -> Result<Vec<DayView>, TrackerError> {
  if start > end {
    return Err(TrackerError::InvalidDate(format!(
      "{} is after {}",
      format_iso_date(start),
      format_iso_date(end)
    )));
  }

  let days = list_day_logs_in_range(&state.db, start, end).await?;
  let history = load_history(state).await?;
  Ok(views_for(&days, &history))
}

/// Logged days of the Sunday to Saturday week containing `date`
pub async fn week_days(state: &AppState, date: NaiveDate) -> Result<Vec<DayView>, TrackerError> {
  let (start, end) = sunday_week_range(date);
  days_in_range(state, start, end).await
}

pub async fn delete_day(state: &AppState, date: NaiveDate) -> Result<(), TrackerError> {
  if !delete_day_log(&state.db, date).await? {
    return Err(TrackerError::NotFound(format_iso_date(date)));
  }
  tracing::info!(date = %date, "Deleted day");
  Ok(())
}
