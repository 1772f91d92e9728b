//! Activity catalog
//!
//! The fixed list of scoreable activities. Point values here are the single
//! source of truth: scores are always recomputed from day logs, so changing a
//! value retroactively changes historical scores.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::models::ActivityCategory::{Conditioning, Miscellaneous, Mobility, Nutrition, Strength};
use crate::models::{ActivityCategory, ActivityDefinition};

/// ---------------------------------------------------------------------------
/// Caps
/// ---------------------------------------------------------------------------

/// Ceiling for mobility + conditioning + strength points in one day
pub const TRAINING_CAP_POINTS: u32 = 63;

/// Ceiling for nutrition + miscellaneous points in one day
pub const LIFESTYLE_CAP_POINTS: u32 = 45;

/// ---------------------------------------------------------------------------
/// Keys referenced by scoring rules
/// ---------------------------------------------------------------------------

pub const MOBILITY_LOWER_BODY: &str = "mobility_lower_body_limber_11";
pub const MOBILITY_UPPER_BODY: &str = "mobility_upper_body_simple_6";
pub const CONDITIONING_EASY: &str = "conditioning_easy";
pub const CONDITIONING_MEDIUM: &str = "conditioning_medium";
pub const CONDITIONING_HARD: &str = "conditioning_hard";
pub const STRENGTH_PUSH: &str = "strength_push";
pub const STRENGTH_PULL: &str = "strength_pull";
pub const STRENGTH_LEGS: &str = "strength_legs";

const fn activity(
  key: &'static str,
  label: &'static str,
  category: ActivityCategory,
  points: u32,
  group: &'static str,
) -> ActivityDefinition {
  ActivityDefinition {
    key,
    label,
    category,
    points,
    group,
    repeatable: false,
    duration_minutes: None,
  }
}

const fn repeatable(
  key: &'static str,
  label: &'static str,
  category: ActivityCategory,
  points: u32,
  group: &'static str,
  duration_minutes: u32,
) -> ActivityDefinition {
  ActivityDefinition {
    key,
    label,
    category,
    points,
    group,
    repeatable: true,
    duration_minutes: Some(duration_minutes),
  }
}

pub static ACTIVITY_DEFINITIONS: [ActivityDefinition; 20] = [
  activity(MOBILITY_LOWER_BODY, "Lower body mobility (Limber 11)", Mobility, 3, "Mobility"),
  activity(MOBILITY_UPPER_BODY, "Upper body mobility (Simple 6)", Mobility, 3, "Mobility"),
  activity("mobility_lower_back_stretches", "Lower back stretches", Mobility, 2, "Mobility"),
  activity("conditioning_jumps_throws", "Jumps & throws", Conditioning, 3, "Conditioning"),
  repeatable(CONDITIONING_EASY, "Easy conditioning", Conditioning, 5, "Conditioning", 15),
  repeatable(CONDITIONING_MEDIUM, "Medium conditioning", Conditioning, 7, "Conditioning", 10),
  repeatable(CONDITIONING_HARD, "Hard conditioning", Conditioning, 8, "Conditioning", 5),
  activity(STRENGTH_PUSH, "Push", Strength, 7, "Strength"),
  activity(STRENGTH_PULL, "Pull", Strength, 7, "Strength"),
  activity(STRENGTH_LEGS, "Legs", Strength, 10, "Strength"),
  activity("strength_abs", "Abs", Strength, 5, "Strength"),
  activity("strength_compression", "Compression", Strength, 3, "Strength"),
  activity("nutrition_omad", "OMAD", Nutrition, 8, "Nutrition"),
  activity("nutrition_no_carbs", "No carbs", Nutrition, 10, "Nutrition"),
  activity("nutrition_protein_goal", "Protein goal", Nutrition, 3, "Nutrition"),
  activity("nutrition_fat_goal", "Fat goal", Nutrition, 5, "Nutrition"),
  activity("nutrition_water_goal", "Water goal", Nutrition, 2, "Nutrition"),
  activity("misc_wake_up_early", "Wake up early", Miscellaneous, 8, "Miscellaneous"),
  activity(
    "misc_exercise_immediately",
    "Exercise immediately after waking up",
    Miscellaneous,
    6,
    "Miscellaneous",
  ),
  activity("misc_cold_shower", "Cold shower for one minute", Miscellaneous, 3, "Miscellaneous"),
];

/// ---------------------------------------------------------------------------
/// Lookups
/// ---------------------------------------------------------------------------

fn by_key() -> &'static HashMap<&'static str, &'static ActivityDefinition> {
  static INDEX: OnceLock<HashMap<&'static str, &'static ActivityDefinition>> = OnceLock::new();
  INDEX.get_or_init(|| ACTIVITY_DEFINITIONS.iter().map(|a| (a.key, a)).collect())
}

/// All activities in catalog order
pub fn definitions() -> &'static [ActivityDefinition] {
  &ACTIVITY_DEFINITIONS
}

pub fn definition(key: &str) -> Option<&'static ActivityDefinition> {
  by_key().get(key).copied()
}

/// Points for an activity, 0 for keys the catalog doesn't know
pub fn points(key: &str) -> u32 {
  definition(key).map(|a| a.points).unwrap_or(0)
}

pub fn category(key: &str) -> Option<ActivityCategory> {
  definition(key).map(|a| a.category)
}

pub fn is_repeatable(key: &str) -> bool {
  definition(key).is_some_and(|a| a.repeatable)
}
