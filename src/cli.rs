//! Command-line front end: argument parsing, dispatch and output

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use crate::activities::{LIFESTYLE_CAP_POINTS, TRAINING_CAP_POINTS};
use crate::commands::days::{
  days_in_range, delete_day, log_day, recent_days, show_day, week_days, DayView,
};
use crate::commands::weeks::{current_streaks, weekly_report, WeeklyReport};
use crate::commands::list_activities;
use crate::db::AppState;
use crate::error::TrackerError;
use crate::models::{NewDayLog, Readiness};
use crate::store::DEFAULT_RECENT_LIMIT;
use crate::week::{format_iso_date, parse_iso_date};
use crate::weekly::{Streaks, WeeklySummary};

#[derive(Parser, Debug)]
#[command(name = "activity-tracker")]
#[command(version, about = "Score daily activities, streaks and deload weeks")]
pub struct Cli {
  /// SQLite database file (overrides ACTIVITY_TRACKER_DB)
  #[arg(long, global = true)]
  pub db: Option<PathBuf>,

  /// Print JSON instead of text
  #[arg(long, global = true)]
  pub json: bool,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
  /// List the activity catalog
  Activities,

  /// Save the log for a date, replacing any earlier log for that date
  Log {
    /// YYYY-MM-DD or "today"
    date: String,

    /// fatigued, normal or good
    #[arg(short, long, default_value = "normal")]
    readiness: Readiness,

    /// One-time activity that was done; pass once per activity
    #[arg(long = "done", value_name = "KEY")]
    done: Vec<String>,

    /// Count for a repeatable activity; pass once per activity
    #[arg(long = "count", value_name = "KEY=N", value_parser = parse_count)]
    counts: Vec<(String, f64)>,

    #[arg(long)]
    notes: Option<String>,
  },

  /// Show a day's scores
  Show {
    /// YYYY-MM-DD or "today"
    date: String,
  },

  /// Delete the log for a date
  Delete {
    /// YYYY-MM-DD or "today"
    date: String,
  },

  /// Most recently edited days
  Recent {
    #[arg(short, long, default_value_t = DEFAULT_RECENT_LIMIT)]
    limit: i64,
  },

  /// Logged days between two dates, both inclusive
  Days {
    /// YYYY-MM-DD or "today"
    from: String,

    /// YYYY-MM-DD or "today"
    to: String,
  },

  /// Logged days of the week (Sunday to Saturday) containing a date
  Week {
    /// YYYY-MM-DD or "today"
    date: String,
  },

  /// Weekly summaries, newest first, with streaks
  Weeks {
    /// Only show the newest N weeks
    #[arg(short, long)]
    limit: Option<usize>,
  },

  /// Current win and consistency streaks
  Streaks,
}

/// ---------------------------------------------------------------------------
/// Argument Parsing
/// ---------------------------------------------------------------------------

pub fn parse_date_arg(s: &str) -> Result<NaiveDate, TrackerError> {
  if s.eq_ignore_ascii_case("today") {
    return Ok(Local::now().date_naive());
  }
  parse_iso_date(s).map_err(|_| TrackerError::InvalidDate(s.to_string()))
}

fn parse_count(s: &str) -> Result<(String, f64), String> {
  let (key, n) = s
    .split_once('=')
    .ok_or_else(|| format!("expected KEY=N, got '{}'", s))?;
  let n: f64 = n
    .trim()
    .parse()
    .map_err(|_| format!("count for '{}' is not a number", key))?;
  Ok((key.trim().to_string(), n))
}

/// ---------------------------------------------------------------------------
/// Dispatch
/// ---------------------------------------------------------------------------

pub async fn execute(command: Command, state: &AppState, json: bool) -> Result<(), TrackerError> {
  match command {
    Command::Activities => {
      let activities = list_activities();
      if json {
        return print_json(&activities);
      }
      for a in activities {
        let kind = if a.repeatable { "x count" } else { "" };
        println!(
          "{:<32} {:>2} pts {:<8} {:<14} {}",
          a.key,
          a.points,
          kind,
          a.category.as_str(),
          a.label
        );
      }
    }
    Command::Log {
      date,
      readiness,
      done,
      counts,
      notes,
    } => {
      let input = NewDayLog {
        date: parse_date_arg(&date)?,
        readiness,
        completed: done.into_iter().map(|key| (key, true)).collect(),
        counts: counts.into_iter().collect(),
        notes,
      };
      let view = log_day(state, input).await?;
      if json {
        return print_json(&view);
      }
      print_day(&view);
    }
    Command::Show { date } => {
      let view = show_day(state, parse_date_arg(&date)?).await?;
      if json {
        return print_json(&view);
      }
      print_day(&view);
    }
    Command::Delete { date } => {
      let date = parse_date_arg(&date)?;
      delete_day(state, date).await?;
      if !json {
        println!("Deleted {}", format_iso_date(date));
      }
    }
    Command::Recent { limit } => {
      let views = recent_days(state, limit).await?;
      if json {
        return print_json(&views);
      }
      for view in &views {
        print_day(view);
      }
    }
    Command::Days { from, to } => {
      let views = days_in_range(state, parse_date_arg(&from)?, parse_date_arg(&to)?).await?;
      if json {
        return print_json(&views);
      }
      for view in &views {
        print_day(view);
      }
    }
    Command::Week { date } => {
      let views = week_days(state, parse_date_arg(&date)?).await?;
      if json {
        return print_json(&views);
      }
      for view in &views {
        print_day(view);
      }
    }
    Command::Weeks { limit } => {
      let report = weekly_report(state, limit).await?;
      if json {
        return print_json(&report);
      }
      print_report(&report);
    }
    Command::Streaks => {
      let streaks = current_streaks(state).await?;
      if json {
        return print_json(&streaks);
      }
      print_streaks(&streaks);
    }
  }
  Ok(())
}

/// ---------------------------------------------------------------------------
/// Output
/// ---------------------------------------------------------------------------

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), TrackerError> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

fn print_day(view: &DayView) {
  let day = &view.scored.day;
  let scores = &view.scored.scores;

  println!(
    "{}  {}{}",
    format_iso_date(day.date),
    day.readiness.label(),
    if view.deload { "  (deload week)" } else { "" }
  );
  println!(
    "  training  {:>2}/{}  {}",
    scores.capped_training_points,
    TRAINING_CAP_POINTS,
    scores.training_rating.label()
  );
  println!(
    "  lifestyle {:>2}/{}  {}",
    scores.capped_lifestyle_points,
    LIFESTYLE_CAP_POINTS,
    scores.lifestyle_rating.label()
  );
  println!(
    "  total     {:>3}     MED {}",
    scores.total_points,
    if scores.med_met { "met" } else { "not met" }
  );
  if let Some(notes) = &day.notes {
    println!("  notes: {}", notes);
  }
}

fn print_week(week: &WeeklySummary) {
  let reasons: Vec<&str> = week.deload_reasons.iter().map(|r| r.as_str()).collect();
  println!(
    "Week of {}  {} pts  {}{}",
    format_iso_date(week.week_start),
    week.training_points,
    week.weekly_rating.label(),
    if week.deload {
      format!("  (deload: {})", reasons.join(", "))
    } else {
      String::new()
    }
  );
  println!(
    "  wins {}  missed {}  fatigued {}",
    week.wins, week.missed_days, week.fatigued_days
  );
  for scored in &week.days {
    println!(
      "    {}  {:>2} pts  {}",
      format_iso_date(scored.day.date),
      scored.scores.capped_training_points,
      scored.scores.training_rating.label()
    );
  }
}

fn print_streaks(streaks: &Streaks) {
  println!("Win streak: {} days", streaks.win_streak_days);
  println!("Consistency streak: {} weeks", streaks.consistency_streak_weeks);
}

fn print_report(report: &WeeklyReport) {
  print_streaks(&report.streaks);
  for week in &report.weeks {
    println!();
    print_week(week);
  }
}
