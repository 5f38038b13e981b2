//! Time and identity helpers shared by the engine and the views.
//!
//! Calendar-day keys are UTC dates, so a session's day bucket does not move
//! when the machine changes time zone.

use std::cell::Cell;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// `MM:SS` rendering of a countdown. Minutes are not wrapped into hours.
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Calendar-day key of an instant.
pub fn day_key(at: DateTime<Utc>) -> NaiveDate {
    at.date_naive()
}

/// Whole calendar days between two day keys, ignoring direction.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days().abs()
}

/// Sunday that opens the calendar week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// Fresh identifier for tasks, notes, sessions, distractions and reviews.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Source of "now" for the engine. The reducer never reads the clock; the
/// engine stamps each dispatch with one reading.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock for tests and replays.
#[derive(Debug)]
pub struct FixedClock {
    now: Cell<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}
