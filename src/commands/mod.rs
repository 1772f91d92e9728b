pub mod days;
pub mod weeks;

use crate::activities;
use crate::db::AppState;
use crate::error::TrackerError;
use crate::models::ActivityDefinition;
use crate::store::list_all_day_logs;
use crate::week::group_by_week;
use crate::weekly::{summarize_weeks, WeeklySummary};

/// The activity catalog in display order
pub fn list_activities() -> &'static [ActivityDefinition] {
  activities::definitions()
}

/// Every stored day, bucketed into weeks and summarized newest week first.
/// Scores are always recomputed here, never read from storage.
pub(crate) async fn load_history(state: &AppState) -> Result<Vec<WeeklySummary>, TrackerError> {
  let days = list_all_day_logs(&state.db).await?;
  tracing::debug!(days = days.len(), "Loaded day logs");
  Ok(summarize_weeks(group_by_week(days)))
}
