//! Sunday-anchored week helpers
//!
//! The aggregator never infers weeks on its own; callers bucket day logs
//! here first.

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

use crate::models::DayLog;
use crate::weekly::WeekBucket;

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_iso_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
  NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT)
}

pub fn format_iso_date(date: NaiveDate) -> String {
  date.format(ISO_DATE_FORMAT).to_string()
}

/// The Sunday on or before `date`
pub fn sunday_week_start(date: NaiveDate) -> NaiveDate {
  date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Inclusive (Sunday, Saturday) range of the week containing `date`
pub fn sunday_week_range(date: NaiveDate) -> (NaiveDate, NaiveDate) {
  let start = sunday_week_start(date);
  (start, start + Duration::days(6))
}

/// Group day logs into week buckets, oldest week first
pub fn group_by_week(days: impl IntoIterator<Item = DayLog>) -> Vec<WeekBucket> {
  let mut weeks: BTreeMap<NaiveDate, Vec<DayLog>> = BTreeMap::new();
  for day in days {
    weeks.entry(sunday_week_start(day.date)).or_default().push(day);
  }
  weeks
    .into_iter()
    .map(|(week_start, days)| WeekBucket { week_start, days })
    .collect()
}
