//! Statistics module for FocusForge
//!
//! Derived numbers over the session log: day and trailing-week focus totals,
//! the streak/level update applied on focus completion, and the analytics
//! summary shown by `stats analytics`.

mod analytics;
mod streak;
mod totals;

pub use analytics::{
    average_focus_minutes, daily_breakdown, distraction_summary, most_productive_day, Analytics,
    DayTotal, DistractionSummary,
};
pub use streak::{next_streak, record_focus_completion};
pub use totals::{focus_minutes_on, focus_minutes_trailing_week, WEEK_WINDOW_DAYS};
