use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
  Fatigued,
  #[default]
  Normal,
  Good,
}

impl std::fmt::Display for Readiness {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Fatigued => write!(f, "fatigued"),
      Self::Normal => write!(f, "normal"),
      Self::Good => write!(f, "good"),
    }
  }
}

impl std::str::FromStr for Readiness {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "fatigued" => Ok(Self::Fatigued),
      "normal" => Ok(Self::Normal),
      "good" => Ok(Self::Good),
      _ => Err(format!("Unknown readiness: {}", s)),
    }
  }
}

/// One recorded day. The date is the record's identity.
///
/// `completed` holds one-time activities, `counts` holds repeatable ones.
/// Counts are kept as raw numbers so that whatever was stored can be read
/// back and normalized at scoring time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayLog {
  pub date: NaiveDate,
  #[serde(default)]
  pub readiness: Readiness,
  #[serde(default)]
  pub completed: BTreeMap<String, bool>,
  #[serde(default)]
  pub counts: BTreeMap<String, f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notes: Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl DayLog {
  pub fn is_completed(&self, key: &str) -> bool {
    self.completed.get(key).copied().unwrap_or(false)
  }

  /// Sanitized count for a repeatable activity (absent = 0)
  pub fn count(&self, key: &str) -> u32 {
    self.counts.get(key).copied().map(sanitize_count).unwrap_or(0)
  }

  pub fn is_fatigued(&self) -> bool {
    self.readiness == Readiness::Fatigued
  }
}

/// For upserting day logs (timestamps are owned by the store)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDayLog {
  pub date: NaiveDate,
  #[serde(default)]
  pub readiness: Readiness,
  #[serde(default)]
  pub completed: BTreeMap<String, bool>,
  #[serde(default)]
  pub counts: BTreeMap<String, f64>,
  #[serde(default)]
  pub notes: Option<String>,
}

impl NewDayLog {
  pub fn into_day_log(self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> DayLog {
    DayLog {
      date: self.date,
      readiness: self.readiness,
      completed: self.completed,
      counts: self.counts,
      notes: self.notes,
      created_at,
      updated_at,
    }
  }
}

/// Normalize a stored count: non-finite and negative values become 0,
/// fractions are floored.
pub fn sanitize_count(raw: f64) -> u32 {
  if !raw.is_finite() || raw <= 0.0 {
    return 0;
  }
  // `as` saturates at u32::MAX
  raw.floor() as u32
}
