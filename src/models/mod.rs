pub mod activity;
pub mod day_log;

pub use activity::{ActivityCategory, ActivityDefinition};
pub use day_log::{sanitize_count, DayLog, NewDayLog, Readiness};
