//! Display labels for ratings and readiness

use serde::Serialize;

use crate::models::Readiness;
use crate::scoring::{LifestyleRating, TrainingRating};
use crate::weekly::WeeklyRating;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingLabel {
  pub emoji: &'static str,
  pub label: &'static str,
}

impl std::fmt::Display for RatingLabel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} {}", self.emoji, self.label)
  }
}

const fn label(emoji: &'static str, label: &'static str) -> RatingLabel {
  RatingLabel { emoji, label }
}

impl TrainingRating {
  pub fn label(&self) -> RatingLabel {
    match self {
      TrainingRating::Missed => label("❌", "Missed"),
      TrainingRating::Okay => label("👍", "Okay"),
      TrainingRating::Solid => label("✅", "Solid"),
      TrainingRating::Great => label("🌟", "Great"),
      TrainingRating::Amazing => label("🔥", "Amazing"),
      TrainingRating::AboveAndBeyond => label("🚀", "Above & Beyond"),
    }
  }
}

impl LifestyleRating {
  pub fn label(&self) -> RatingLabel {
    match self {
      LifestyleRating::Missed => label("❌", "Missed"),
      LifestyleRating::Okay => label("👍", "Okay"),
      LifestyleRating::Solid => label("✅", "Solid"),
      LifestyleRating::Great => label("⭐", "Great"),
    }
  }
}

impl WeeklyRating {
  pub fn label(&self) -> RatingLabel {
    match self {
      WeeklyRating::NeedsImprovement => label("❌", "Needs improvement"),
      WeeklyRating::Minimum => label("👍", "Minimum"),
      WeeklyRating::Solid => label("✅", "Solid"),
      WeeklyRating::Great => label("🌟", "Great"),
      WeeklyRating::Amazing => label("🔥", "Amazing"),
      WeeklyRating::AboveAndBeyond => label("🚀", "Above & Beyond"),
    }
  }
}

impl Readiness {
  pub fn label(&self) -> RatingLabel {
    match self {
      Readiness::Fatigued => label("🔴", "Fatigued"),
      Readiness::Normal => label("🟡", "Normal"),
      Readiness::Good => label("🟢", "Good"),
    }
  }
}
