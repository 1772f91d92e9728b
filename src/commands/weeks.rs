//! Weekly rollups and streaks

use serde::Serialize;

use crate::commands::load_history;
use crate::db::AppState;
use crate::error::TrackerError;
use crate::models::DayLog;
use crate::weekly::{Streaks, WeeklySummary};

#[derive(Debug, Clone, Serialize)]
pub struct WeeklyReport {
  /// Newest first
  pub weeks: Vec<WeeklySummary>,
  pub streaks: Streaks,
}

fn streaks_for(weeks: &[WeeklySummary]) -> Streaks {
  let days: Vec<DayLog> = weeks
    .iter()
    .flat_map(|w| w.days.iter().map(|d| d.day.clone()))
    .collect();
  Streaks::compute(&days, weeks)
}

/// Weekly summaries for all logged weeks, optionally only the newest `limit`.
/// Streaks always consider the full history.
pub async fn weekly_report(
  state: &AppState,
  limit: Option<usize>,
) -> Result<WeeklyReport, TrackerError> {
  let mut weeks = load_history(state).await?;
  let streaks = streaks_for(&weeks);

  if let Some(limit) = limit {
    weeks.truncate(limit);
  }

  tracing::info!(
    weeks = weeks.len(),
    win_streak_days = streaks.win_streak_days,
    consistency_streak_weeks = streaks.consistency_streak_weeks,
    "Built weekly report"
  );

  Ok(WeeklyReport { weeks, streaks })
}

pub async fn current_streaks(state: &AppState) -> Result<Streaks, TrackerError> {
  let weeks = load_history(state).await?;
  Ok(streaks_for(&weeks))
}
