//! Day scorer
//!
//! Turns one day's completions and counts into category sums, capped
//! training/lifestyle totals, the minimum-effective-dose gate and ratings.
//! Pure and deterministic: unknown keys score zero and malformed counts are
//! normalized, nothing here can fail.

use serde::{Deserialize, Serialize};

use crate::activities::{
  self, CONDITIONING_EASY, CONDITIONING_HARD, CONDITIONING_MEDIUM, LIFESTYLE_CAP_POINTS,
  MOBILITY_LOWER_BODY, MOBILITY_UPPER_BODY, STRENGTH_LEGS, STRENGTH_PULL, STRENGTH_PUSH,
  TRAINING_CAP_POINTS,
};
use crate::models::{sanitize_count, ActivityCategory, DayLog};

/// ---------------------------------------------------------------------------
/// Ratings
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingRating {
  Missed,
  Okay,
  Solid,
  Great,
  Amazing,
  AboveAndBeyond,
}

impl TrainingRating {
  /// Missing the minimum effective dose is a miss no matter the points
  pub fn from_points(capped_training_points: u32, med_met: bool) -> Self {
    if !med_met {
      return TrainingRating::Missed;
    }
    match capped_training_points {
      p if p < 37 => TrainingRating::Okay,
      p if p < 47 => TrainingRating::Solid,
      p if p < 53 => TrainingRating::Great,
      p if p < 60 => TrainingRating::Amazing,
      _ => TrainingRating::AboveAndBeyond,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifestyleRating {
  Missed,
  Okay,
  Solid,
  Great,
}

impl LifestyleRating {
  pub fn from_points(capped_lifestyle_points: u32) -> Self {
    match capped_lifestyle_points {
      p if p < 12 => LifestyleRating::Missed,
      p if p < 22 => LifestyleRating::Okay,
      p if p < 32 => LifestyleRating::Solid,
      _ => LifestyleRating::Great,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Category sums
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPoints {
  pub mobility: u32,
  pub conditioning: u32,
  pub strength: u32,
  pub nutrition: u32,
  pub miscellaneous: u32,
}

impl CategoryPoints {
  pub fn get(&self, category: ActivityCategory) -> u32 {
    match category {
      ActivityCategory::Mobility => self.mobility,
      ActivityCategory::Conditioning => self.conditioning,
      ActivityCategory::Strength => self.strength,
      ActivityCategory::Nutrition => self.nutrition,
      ActivityCategory::Miscellaneous => self.miscellaneous,
    }
  }

  fn add(&mut self, category: ActivityCategory, points: u32) {
    let slot = match category {
      ActivityCategory::Mobility => &mut self.mobility,
      ActivityCategory::Conditioning => &mut self.conditioning,
      ActivityCategory::Strength => &mut self.strength,
      ActivityCategory::Nutrition => &mut self.nutrition,
      ActivityCategory::Miscellaneous => &mut self.miscellaneous,
    };
    *slot = slot.saturating_add(points);
  }

  /// Sum one day's completions and counts per category
  pub fn from_day(day: &DayLog) -> Self {
    let mut sums = Self::default();

    for (key, done) in &day.completed {
      if !*done {
        continue;
      }
      if let Some(definition) = activities::definition(key) {
        sums.add(definition.category, definition.points);
      }
    }

    for (key, raw) in &day.counts {
      let count = sanitize_count(*raw);
      if count == 0 {
        continue;
      }
      if let Some(definition) = activities::definition(key) {
        sums.add(definition.category, definition.points.saturating_mul(count));
      }
    }

    sums
  }

  fn sum_where(&self, include: fn(&ActivityCategory) -> bool) -> u32 {
    ActivityCategory::ALL
      .iter()
      .filter(|category| include(category))
      .fold(0, |sum, category| sum.saturating_add(self.get(*category)))
  }

  pub fn raw_training(&self) -> u32 {
    self.sum_where(ActivityCategory::is_training)
  }

  pub fn raw_lifestyle(&self) -> u32 {
    self.sum_where(ActivityCategory::is_lifestyle)
  }
}

/// ---------------------------------------------------------------------------
/// Day Scores
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringOptions {
  /// Relaxes the strength and conditioning parts of the MED gate
  pub deload: bool,
}

impl ScoringOptions {
  pub fn deload(deload: bool) -> Self {
    Self { deload }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayScores {
  pub raw_by_category: CategoryPoints,
  pub capped_training_points: u32,
  pub capped_lifestyle_points: u32,
  pub total_points: u32,

  pub med_met: bool,
  /// Same as `med_met` today, kept as its own field
  pub daily_win: bool,

  pub training_rating: TrainingRating,
  pub lifestyle_rating: LifestyleRating,
}

impl DayScores {
  pub fn compute(day: &DayLog, options: ScoringOptions) -> Self {
    let raw_by_category = CategoryPoints::from_day(day);

    let capped_training_points = raw_by_category.raw_training().min(TRAINING_CAP_POINTS);
    let capped_lifestyle_points = raw_by_category.raw_lifestyle().min(LIFESTYLE_CAP_POINTS);
    let total_points = capped_training_points + capped_lifestyle_points;

    let med_met = med_met(day, options);
    let daily_win = med_met;

    Self {
      raw_by_category,
      capped_training_points,
      capped_lifestyle_points,
      total_points,
      med_met,
      daily_win,
      training_rating: TrainingRating::from_points(capped_training_points, med_met),
      lifestyle_rating: LifestyleRating::from_points(capped_lifestyle_points),
    }
  }
}

/// Minimum effective dose: mobility, strength and conditioning all touched.
///
/// Normal weeks need (push or pull) and legs, plus any conditioning tier.
/// Deload weeks accept any single strength session, but only easy
/// conditioning counts.
pub fn med_met(day: &DayLog, options: ScoringOptions) -> bool {
  let mobility_met = day.is_completed(MOBILITY_LOWER_BODY) || day.is_completed(MOBILITY_UPPER_BODY);

  let push_or_pull = day.is_completed(STRENGTH_PUSH) || day.is_completed(STRENGTH_PULL);
  let legs = day.is_completed(STRENGTH_LEGS);
  let strength_met = if options.deload {
    push_or_pull || legs
  } else {
    push_or_pull && legs
  };

  // Raw counts here, not the floored ones used for points
  let logged = |key: &str| day.counts.get(key).is_some_and(|count| *count > 0.0);
  let easy = logged(CONDITIONING_EASY);
  let conditioning_met = if options.deload {
    easy
  } else {
    easy || logged(CONDITIONING_MEDIUM) || logged(CONDITIONING_HARD)
  };

  mobility_met && strength_met && conditioning_met
}
