//! Focus totals reduced from the session log.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::model::PomodoroSession;
use crate::time::day_key;

/// Length of the trailing "this week" window in days. Not aligned to
/// calendar weeks.
pub const WEEK_WINDOW_DAYS: i64 = 7;

/// Focus minutes whose session ended on `day`.
pub fn focus_minutes_on(sessions: &[PomodoroSession], day: NaiveDate) -> u32 {
    sessions
        .iter()
        .filter(|s| s.is_focus() && day_key(s.end_time) == day)
        .map(|s| s.duration_minutes)
        .sum()
}

/// Focus minutes whose session ended strictly inside the trailing week
/// before `now`.
pub fn focus_minutes_trailing_week(sessions: &[PomodoroSession], now: DateTime<Utc>) -> u32 {
    let cutoff = now - Duration::days(WEEK_WINDOW_DAYS);
    sessions
        .iter()
        .filter(|s| s.is_focus() && s.end_time > cutoff)
        .map(|s| s.duration_minutes)
        .sum()
}
