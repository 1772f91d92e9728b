use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
  Mobility,
  Conditioning,
  Strength,
  Nutrition,
  Miscellaneous,
}

impl ActivityCategory {
  pub const ALL: [ActivityCategory; 5] = [
    ActivityCategory::Mobility,
    ActivityCategory::Conditioning,
    ActivityCategory::Strength,
    ActivityCategory::Nutrition,
    ActivityCategory::Miscellaneous,
  ];

  /// Mobility, conditioning and strength count toward the training cap
  pub fn is_training(&self) -> bool {
    matches!(
      self,
      ActivityCategory::Mobility | ActivityCategory::Conditioning | ActivityCategory::Strength
    )
  }

  pub fn is_lifestyle(&self) -> bool {
    !self.is_training()
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      ActivityCategory::Mobility => "mobility",
      ActivityCategory::Conditioning => "conditioning",
      ActivityCategory::Strength => "strength",
      ActivityCategory::Nutrition => "nutrition",
      ActivityCategory::Miscellaneous => "miscellaneous",
    }
  }
}

/// A scoreable activity from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityDefinition {
  pub key: &'static str,
  pub label: &'static str,
  pub category: ActivityCategory,
  pub points: u32,
  /// Display grouping only, scoring ignores it
  pub group: &'static str,
  pub repeatable: bool,
  pub duration_minutes: Option<u32>,
}
