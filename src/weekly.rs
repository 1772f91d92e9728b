//! Weekly aggregation
//!
//! Weeks are evaluated oldest to newest as an explicit fold: whether a week
//! is a deload week depends on the resolved deload flags and training points
//! of every week before it, so no week can be summarized in isolation.
//!
//! A week deloads when any of these hold:
//! - three or more non-deload weeks in a row precede it (scheduled)
//! - four or more of its own days were logged as fatigued
//! - the previous three weeks averaged more than 350 training points
//!
//! Deload weeks relax the MED gate for their days and halve the weekly
//! rating thresholds.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::DayLog;
use crate::scoring::{DayScores, ScoringOptions, TrainingRating};

/// ---------------------------------------------------------------------------
/// Thresholds
/// ---------------------------------------------------------------------------

/// Consecutive non-deload weeks after which a deload is scheduled
pub const SCHEDULED_DELOAD_AFTER_WEEKS: usize = 3;

/// Fatigued days within a week that force a deload
pub const FATIGUED_DAYS_FOR_DELOAD: usize = 4;

/// Trailing window and average for the high-load trigger
pub const HIGH_AVERAGE_WINDOW_WEEKS: usize = 3;
pub const HIGH_AVERAGE_TRAINING_POINTS: f64 = 350.0;

/// A week keeps the consistency streak alive at or above this many points...
pub const CONSISTENCY_MIN_TRAINING_POINTS: u32 = 175;
/// ...with fewer missed days than this
pub const CONSISTENCY_MAX_MISSED_DAYS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklyThresholds {
  pub minimum: f64,
  pub solid: f64,
  pub great: f64,
  pub amazing: f64,
  pub above: f64,
}

/// Full-week targets; deload weeks use half of each
pub const WEEKLY_THRESHOLDS: WeeklyThresholds = WeeklyThresholds {
  minimum: 175.0,
  solid: 259.0,
  great: 329.0,
  amazing: 371.0,
  above: 420.0,
};

impl WeeklyThresholds {
  pub fn for_week(deload: bool) -> Self {
    if deload {
      WEEKLY_THRESHOLDS.scaled(0.5)
    } else {
      WEEKLY_THRESHOLDS
    }
  }

  fn scaled(&self, factor: f64) -> Self {
    Self {
      minimum: self.minimum * factor,
      solid: self.solid * factor,
      great: self.great * factor,
      amazing: self.amazing * factor,
      above: self.above * factor,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Weekly Rating
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeeklyRating {
  NeedsImprovement,
  Minimum,
  Solid,
  Great,
  Amazing,
  AboveAndBeyond,
}

impl WeeklyRating {
  pub fn from_points(training_points: u32, deload: bool) -> Self {
    let t = WeeklyThresholds::for_week(deload);
    let points = training_points as f64;

    if points >= t.above {
      WeeklyRating::AboveAndBeyond
    } else if points >= t.amazing {
      WeeklyRating::Amazing
    } else if points >= t.great {
      WeeklyRating::Great
    } else if points >= t.solid {
      WeeklyRating::Solid
    } else if points >= t.minimum {
      WeeklyRating::Minimum
    } else {
      WeeklyRating::NeedsImprovement
    }
  }
}

/// ---------------------------------------------------------------------------
/// Deload Determination
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeloadReason {
  Scheduled,
  FatiguedDays,
  HighAverage,
}

impl DeloadReason {
  pub fn as_str(&self) -> &'static str {
    match self {
      DeloadReason::Scheduled => "scheduled",
      DeloadReason::FatiguedDays => "fatigued_days",
      DeloadReason::HighAverage => "high_average",
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeloadEvaluation {
  pub deload: bool,
  pub reasons: BTreeSet<DeloadReason>,
}

impl DeloadEvaluation {
  pub fn from_reasons(reasons: BTreeSet<DeloadReason>) -> Self {
    Self {
      deload: !reasons.is_empty(),
      reasons,
    }
  }
}

/// The resolved state of an earlier week, as seen by later weeks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorWeek {
  pub week_start: NaiveDate,
  pub deload: bool,
  pub training_points: u32,
}

impl From<&WeeklySummary> for PriorWeek {
  fn from(summary: &WeeklySummary) -> Self {
    Self {
      week_start: summary.week_start,
      deload: summary.deload,
      training_points: summary.training_points,
    }
  }
}

fn average(values: &[u32]) -> f64 {
  if values.is_empty() {
    return 0.0;
  }
  values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}

/// Decide whether the week holding `days` is a deload week, given the
/// already-resolved weeks before it (any order).
pub fn compute_week_deload(days: &[DayLog], prior_weeks: &[PriorWeek]) -> DeloadEvaluation {
  let mut prior: Vec<&PriorWeek> = prior_weeks.iter().collect();
  prior.sort_by_key(|w| w.week_start);

  let mut reasons = BTreeSet::new();

  let non_deload_streak = prior
    .iter()
    .fold(0usize, |streak, w| if w.deload { 0 } else { streak + 1 });
  if non_deload_streak >= SCHEDULED_DELOAD_AFTER_WEEKS {
    reasons.insert(DeloadReason::Scheduled);
  }

  let fatigued_days = days.iter().filter(|d| d.is_fatigued()).count();
  if fatigued_days >= FATIGUED_DAYS_FOR_DELOAD {
    reasons.insert(DeloadReason::FatiguedDays);
  }

  let window_start = prior.len().saturating_sub(HIGH_AVERAGE_WINDOW_WEEKS);
  let recent: Vec<u32> = prior[window_start..].iter().map(|w| w.training_points).collect();
  if recent.len() >= HIGH_AVERAGE_WINDOW_WEEKS && average(&recent) > HIGH_AVERAGE_TRAINING_POINTS {
    reasons.insert(DeloadReason::HighAverage);
  }

  DeloadEvaluation::from_reasons(reasons)
}

/// ---------------------------------------------------------------------------
/// Weekly Summary
/// ---------------------------------------------------------------------------

/// Days of one week, keyed by the week's start date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekBucket {
  pub week_start: NaiveDate,
  pub days: Vec<DayLog>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDay {
  pub day: DayLog,
  pub scores: DayScores,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
  pub week_start: NaiveDate,
  pub deload: bool,
  pub deload_reasons: BTreeSet<DeloadReason>,

  /// Sum of each day's capped training points
  pub training_points: u32,
  pub weekly_rating: WeeklyRating,

  pub wins: u32,
  pub missed_days: u32,
  pub fatigued_days: u32,

  /// Newest first
  pub days: Vec<ScoredDay>,
}

impl WeeklySummary {
  pub fn compute(week_start: NaiveDate, days: Vec<DayLog>, deload: DeloadEvaluation) -> Self {
    let options = ScoringOptions::deload(deload.deload);

    let mut scored: Vec<ScoredDay> = days
      .into_iter()
      .map(|day| {
        let scores = DayScores::compute(&day, options);
        ScoredDay { day, scores }
      })
      .collect();
    scored.sort_by(|a, b| b.day.date.cmp(&a.day.date));

    let training_points = scored
      .iter()
      .fold(0u32, |acc, d| acc.saturating_add(d.scores.capped_training_points));
    let wins = scored.iter().filter(|d| d.scores.daily_win).count() as u32;
    let missed_days = scored
      .iter()
      .filter(|d| d.scores.training_rating == TrainingRating::Missed)
      .count() as u32;
    let fatigued_days = scored.iter().filter(|d| d.day.is_fatigued()).count() as u32;

    Self {
      week_start,
      deload: deload.deload,
      deload_reasons: deload.reasons,
      training_points,
      weekly_rating: WeeklyRating::from_points(training_points, deload.deload),
      wins,
      missed_days,
      fatigued_days,
      days: scored,
    }
  }

  /// Keeps the consistency streak going
  pub fn is_consistent(&self) -> bool {
    self.training_points >= CONSISTENCY_MIN_TRAINING_POINTS
      && self.missed_days < CONSISTENCY_MAX_MISSED_DAYS
  }
}

/// Summarize every week, newest first.
///
/// Input order is ignored; weeks are folded oldest to newest so each deload
/// decision sees the resolved state of all earlier weeks.
pub fn summarize_weeks(mut weeks: Vec<WeekBucket>) -> Vec<WeeklySummary> {
  weeks.sort_by_key(|w| w.week_start);

  let (_, mut summaries) = weeks.into_iter().fold(
    (Vec::<PriorWeek>::new(), Vec::<WeeklySummary>::new()),
    |(mut prior, mut summaries), week| {
      let evaluation = compute_week_deload(&week.days, &prior);
      if evaluation.deload {
        tracing::debug!(
          week_start = %week.week_start,
          reasons = ?evaluation.reasons,
          "Deload week"
        );
      }

      let summary = WeeklySummary::compute(week.week_start, week.days, evaluation);
      prior.push(PriorWeek::from(&summary));
      summaries.push(summary);
      (prior, summaries)
    },
  );

  summaries.sort_by(|a, b| b.week_start.cmp(&a.week_start));
  summaries
}

/// ---------------------------------------------------------------------------
/// Streaks
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streaks {
  pub win_streak_days: u32,
  pub consistency_streak_weeks: u32,
}

impl Streaks {
  pub fn compute(days: &[DayLog], weeks: &[WeeklySummary]) -> Self {
    Self {
      win_streak_days: win_streak_days(days),
      consistency_streak_weeks: consistency_streak_weeks(weeks),
    }
  }
}

/// Consecutive winning days counted back from the most recent logged day.
/// Gaps between dates are not special; only a non-winning day ends the run.
pub fn win_streak_days(days: &[DayLog]) -> u32 {
  let mut sorted: Vec<&DayLog> = days.iter().collect();
  sorted.sort_by_key(|d| d.date);

  sorted
    .iter()
    .rev()
    .take_while(|d| DayScores::compute(d, ScoringOptions::default()).daily_win)
    .count() as u32
}

/// Consecutive consistent weeks counted back from the most recent week
pub fn consistency_streak_weeks(weeks: &[WeeklySummary]) -> u32 {
  let mut sorted: Vec<&WeeklySummary> = weeks.iter().collect();
  sorted.sort_by_key(|w| w.week_start);

  sorted.iter().rev().take_while(|w| w.is_consistent()).count() as u32
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::activities::{
    CONDITIONING_EASY, CONDITIONING_HARD, MOBILITY_LOWER_BODY, STRENGTH_LEGS, STRENGTH_PUSH,
  };
  use crate::models::Readiness;
  use crate::test_utils::{date, day_log, fatigued_day, losing_day, winning_day};
  use chrono::Duration;

  fn prior(week_start: &str, deload: bool, training_points: u32) -> PriorWeek {
    PriorWeek {
      week_start: date(week_start),
      deload,
      training_points,
    }
  }

  fn empty_week(week_start: &str) -> WeekBucket {
    WeekBucket {
      week_start: date(week_start),
      days: Vec::new(),
    }
  }

  /// ---------------------------------------------------------------------------
  /// Deload determination
  /// ---------------------------------------------------------------------------

  #[test]
  fn test_scheduled_after_three_normal_weeks() {
    let priors = [
      prior("2026-03-01", false, 100),
      prior("2026-03-08", false, 100),
      prior("2026-03-15", false, 100),
    ];
    let eval = compute_week_deload(&[], &priors);
    assert!(eval.deload);
    assert!(eval.reasons.contains(&DeloadReason::Scheduled));
    assert_eq!(eval.reasons.len(), 1);
  }

  #[test]
  fn test_scheduled_streak_resets_at_deload() {
    let priors = [
      prior("2026-03-01", false, 100),
      prior("2026-03-08", false, 100),
      prior("2026-03-15", true, 100),
      prior("2026-03-22", false, 100),
      prior("2026-03-29", false, 100),
    ];
    let eval = compute_week_deload(&[], &priors);
    assert!(!eval.deload);
    assert!(eval.reasons.is_empty());
  }

  #[test]
  fn test_prior_weeks_are_sorted_before_walking() {
    // Deload week listed last but chronologically first
    let priors = [
      prior("2026-03-08", false, 100),
      prior("2026-03-15", false, 100),
      prior("2026-03-22", false, 100),
      prior("2026-03-01", true, 100),
    ];
    let eval = compute_week_deload(&[], &priors);
    assert!(eval.reasons.contains(&DeloadReason::Scheduled));
  }

  #[test]
  fn test_fatigued_days_trigger() {
    let mut days: Vec<DayLog> = (2..6).map(|d| fatigued_day(&format!("2026-03-0{}", d))).collect();
    let eval = compute_week_deload(&days, &[]);
    assert_eq!(
      eval.reasons.iter().copied().collect::<Vec<_>>(),
      vec![DeloadReason::FatiguedDays]
    );

    days.pop();
    assert!(!compute_week_deload(&days, &[]).deload);
  }

  #[test]
  fn test_high_average_trigger() {
    let priors = [
      prior("2026-03-01", true, 300),
      prior("2026-03-08", false, 380),
      prior("2026-03-15", true, 360),
      prior("2026-03-22", false, 340),
    ];
    // Last three average 360
    let eval = compute_week_deload(&[], &priors);
    assert_eq!(
      eval.reasons.iter().copied().collect::<Vec<_>>(),
      vec![DeloadReason::HighAverage]
    );
  }

  #[test]
  fn test_high_average_must_exceed_350() {
    let priors = [
      prior("2026-03-01", true, 350),
      prior("2026-03-08", false, 350),
      prior("2026-03-15", true, 350),
    ];
    assert!(!compute_week_deload(&[], &priors).deload);
  }

  #[test]
  fn test_high_average_needs_three_prior_weeks() {
    let priors = [prior("2026-03-01", false, 441), prior("2026-03-08", false, 441)];
    assert!(!compute_week_deload(&[], &priors).deload);
  }

  #[test]
  fn test_all_reasons_recorded() {
    let priors = [
      prior("2026-03-01", false, 400),
      prior("2026-03-08", false, 400),
      prior("2026-03-15", false, 400),
    ];
    let days: Vec<DayLog> = (22..=25).map(|d| fatigued_day(&format!("2026-03-{}", d))).collect();
    let eval = compute_week_deload(&days, &priors);
    assert!(eval.deload);
    assert_eq!(
      eval.reasons.iter().copied().collect::<Vec<_>>(),
      vec![
        DeloadReason::Scheduled,
        DeloadReason::FatiguedDays,
        DeloadReason::HighAverage
      ]
    );
  }

  /// ---------------------------------------------------------------------------
  /// Weekly rating
  /// ---------------------------------------------------------------------------

  #[test]
  fn test_weekly_rating_normal_week() {
    assert_eq!(WeeklyRating::from_points(0, false), WeeklyRating::NeedsImprovement);
    assert_eq!(WeeklyRating::from_points(174, false), WeeklyRating::NeedsImprovement);
    assert_eq!(WeeklyRating::from_points(175, false), WeeklyRating::Minimum);
    assert_eq!(WeeklyRating::from_points(259, false), WeeklyRating::Solid);
    assert_eq!(WeeklyRating::from_points(329, false), WeeklyRating::Great);
    assert_eq!(WeeklyRating::from_points(371, false), WeeklyRating::Amazing);
    assert_eq!(WeeklyRating::from_points(420, false), WeeklyRating::AboveAndBeyond);
  }

  #[test]
  fn test_weekly_rating_deload_halves_thresholds() {
    assert_eq!(WeeklyRating::from_points(90, true), WeeklyRating::Minimum);
    assert_eq!(WeeklyRating::from_points(90, false), WeeklyRating::NeedsImprovement);
    assert_eq!(WeeklyRating::from_points(87, true), WeeklyRating::NeedsImprovement);
    assert_eq!(WeeklyRating::from_points(130, true), WeeklyRating::Solid);
    assert_eq!(WeeklyRating::from_points(210, true), WeeklyRating::AboveAndBeyond);

    let full = WeeklyThresholds::for_week(false);
    let half = WeeklyThresholds::for_week(true);
    assert_eq!(half.minimum * 2.0, full.minimum);
    assert_eq!(half.above * 2.0, full.above);
  }

  /// ---------------------------------------------------------------------------
  /// Weekly summary
  /// ---------------------------------------------------------------------------

  #[test]
  fn test_summary_counts() {
    let mut tired_win = winning_day("2026-03-03");
    tired_win.readiness = Readiness::Fatigued;
    let days = vec![
      winning_day("2026-03-02"),
      tired_win,
      losing_day("2026-03-04"),
    ];
    let summary = WeeklySummary::compute(date("2026-03-01"), days, DeloadEvaluation::default());

    // winning_day scores 25 capped training points, losing_day scores 3
    assert_eq!(summary.training_points, 53);
    assert_eq!(summary.wins, 2);
    assert_eq!(summary.missed_days, 1);
    assert_eq!(summary.fatigued_days, 1);
    assert_eq!(summary.weekly_rating, WeeklyRating::NeedsImprovement);
    assert!(!summary.deload);

    let dates: Vec<NaiveDate> = summary.days.iter().map(|d| d.day.date).collect();
    assert_eq!(dates, vec![date("2026-03-04"), date("2026-03-03"), date("2026-03-02")]);
  }

  #[test]
  fn test_summary_scores_days_with_deload_rules() {
    // Legs only: a miss normally, a win in a deload week
    let day = day_log(
      "2026-03-02",
      &[MOBILITY_LOWER_BODY, STRENGTH_LEGS],
      &[(CONDITIONING_EASY, 1.0)],
    );

    let normal = WeeklySummary::compute(
      date("2026-03-01"),
      vec![day.clone()],
      DeloadEvaluation::default(),
    );
    assert_eq!(normal.wins, 0);
    assert_eq!(normal.missed_days, 1);

    let reasons = BTreeSet::from([DeloadReason::Scheduled]);
    let deload = WeeklySummary::compute(
      date("2026-03-01"),
      vec![day],
      DeloadEvaluation::from_reasons(reasons),
    );
    assert!(deload.deload);
    assert_eq!(deload.wins, 1);
    assert_eq!(deload.missed_days, 0);
  }

  #[test]
  fn test_empty_week() {
    let summary =
      WeeklySummary::compute(date("2026-03-01"), Vec::new(), DeloadEvaluation::default());
    assert_eq!(summary.training_points, 0);
    assert_eq!(summary.weekly_rating, WeeklyRating::NeedsImprovement);
    assert_eq!(summary.wins, 0);
    assert!(summary.days.is_empty());
  }

  /// ---------------------------------------------------------------------------
  /// Sequential fold
  /// ---------------------------------------------------------------------------

  #[test]
  fn test_summarize_schedules_every_fourth_week() {
    let start = date("2026-01-04");
    let weeks: Vec<WeekBucket> = (0..8)
      .map(|i| WeekBucket {
        week_start: start + Duration::weeks(i),
        days: Vec::new(),
      })
      .collect();

    let summaries = summarize_weeks(weeks);
    let flags: Vec<bool> = summaries.iter().rev().map(|s| s.deload).collect();
    assert_eq!(flags, vec![false, false, false, true, false, false, false, true]);
  }

  #[test]
  fn test_summarize_ignores_input_order_and_returns_newest_first() {
    let weeks = vec![
      empty_week("2026-03-15"),
      empty_week("2026-03-01"),
      empty_week("2026-03-22"),
      empty_week("2026-03-08"),
    ];
    let summaries = summarize_weeks(weeks);

    let starts: Vec<NaiveDate> = summaries.iter().map(|s| s.week_start).collect();
    assert_eq!(
      starts,
      vec![date("2026-03-22"), date("2026-03-15"), date("2026-03-08"), date("2026-03-01")]
    );
    assert!(summaries[0].deload);
    assert!(summaries[0].deload_reasons.contains(&DeloadReason::Scheduled));
    assert!(summaries[1..].iter().all(|s| !s.deload));
  }

  #[test]
  fn test_fatigue_deload_restarts_schedule() {
    // Week two deloads on fatigue, so the schedule counts from week three
    let fatigued: Vec<DayLog> = (9..=12)
      .map(|d| fatigued_day(&format!("2026-03-{:02}", d)))
      .collect();
    let weeks = vec![
      empty_week("2026-03-01"),
      WeekBucket {
        week_start: date("2026-03-08"),
        days: fatigued,
      },
      empty_week("2026-03-15"),
      empty_week("2026-03-22"),
      empty_week("2026-03-29"),
      empty_week("2026-04-05"),
    ];
    let summaries = summarize_weeks(weeks);
    let flags: Vec<bool> = summaries.iter().rev().map(|s| s.deload).collect();
    assert_eq!(flags, vec![false, true, false, false, false, true]);

    let week_two = &summaries[4];
    assert_eq!(week_two.fatigued_days, 4);
    assert_eq!(
      week_two.deload_reasons.iter().copied().collect::<Vec<_>>(),
      vec![DeloadReason::FatiguedDays]
    );
  }

  #[test]
  fn test_summarize_empty() {
    assert!(summarize_weeks(Vec::new()).is_empty());
  }

  /// ---------------------------------------------------------------------------
  /// Streaks
  /// ---------------------------------------------------------------------------

  #[test]
  fn test_win_streak_empty() {
    assert_eq!(win_streak_days(&[]), 0);
  }

  #[test]
  fn test_win_streak_stops_at_first_loss() {
    let days = vec![
      winning_day("2026-03-06"),
      winning_day("2026-03-02"),
      losing_day("2026-03-04"),
      winning_day("2026-03-05"),
      winning_day("2026-03-03"),
    ];
    assert_eq!(win_streak_days(&days), 2);
  }

  #[test]
  fn test_win_streak_ignores_date_gaps() {
    let days = vec![winning_day("2026-03-01"), winning_day("2026-03-20")];
    assert_eq!(win_streak_days(&days), 2);
  }

  #[test]
  fn test_win_streak_latest_day_lost() {
    let days = vec![winning_day("2026-03-01"), losing_day("2026-03-02")];
    assert_eq!(win_streak_days(&days), 0);
  }

  #[test]
  fn test_win_streak_uses_normal_week_rules() {
    let hard_only = day_log(
      "2026-03-02",
      &[MOBILITY_LOWER_BODY, STRENGTH_PUSH, STRENGTH_LEGS],
      &[(CONDITIONING_HARD, 1.0)],
    );
    assert_eq!(win_streak_days(&[hard_only]), 1);
  }

  fn summary_with(week_start: &str, training_points: u32, missed_days: u32) -> WeeklySummary {
    WeeklySummary {
      week_start: date(week_start),
      deload: false,
      deload_reasons: BTreeSet::new(),
      training_points,
      weekly_rating: WeeklyRating::from_points(training_points, false),
      wins: 0,
      missed_days,
      fatigued_days: 0,
      days: Vec::new(),
    }
  }

  #[test]
  fn test_consistency_streak() {
    let weeks = vec![
      summary_with("2026-03-22", 200, 1),
      summary_with("2026-03-01", 300, 0),
      summary_with("2026-03-15", 175, 0),
      summary_with("2026-03-08", 174, 0),
    ];
    assert_eq!(consistency_streak_weeks(&weeks), 2);
  }

  #[test]
  fn test_consistency_streak_broken_by_missed_days() {
    let weeks = vec![
      summary_with("2026-03-01", 300, 0),
      summary_with("2026-03-08", 400, 2),
    ];
    assert_eq!(consistency_streak_weeks(&weeks), 0);
    assert_eq!(consistency_streak_weeks(&[]), 0);
  }

  #[test]
  fn test_streaks_bundle() {
    let days = vec![winning_day("2026-03-02"), winning_day("2026-03-03")];
    let weeks = vec![summary_with("2026-03-01", 180, 0)];
    assert_eq!(
      Streaks::compute(&days, &weeks),
      Streaks {
        win_streak_days: 2,
        consistency_streak_weeks: 1
      }
    );
  }
}
