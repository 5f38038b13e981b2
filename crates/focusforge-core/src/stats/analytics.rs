//! Read-only analytics over the snapshot: daily focus breakdown, session
//! averages and distraction counts.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::totals::focus_minutes_on;
use crate::model::{AppState, DistractionEvent, PomodoroSession};
use crate::time::day_key;
use crate::view::{task_summary, TaskSummary};

/// Focus minutes on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTotal {
    pub date: NaiveDate,
    /// Short weekday name ("Mon").
    pub weekday: String,
    pub minutes: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistractionSummary {
    pub total: usize,
    pub by_category: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    /// Oldest day first, ending today.
    pub daily: Vec<DayTotal>,
    pub most_productive_day: Option<DayTotal>,
    pub average_focus_minutes: u32,
    pub focus_sessions: usize,
    pub tasks: TaskSummary,
    pub distractions: DistractionSummary,
}

impl Analytics {
    pub fn compute(state: &AppState, now: DateTime<Utc>) -> Self {
        let daily = daily_breakdown(&state.sessions, day_key(now), 7);
        let most_productive_day = most_productive_day(&daily);
        Self {
            most_productive_day,
            daily,
            average_focus_minutes: average_focus_minutes(&state.sessions),
            focus_sessions: state.sessions.iter().filter(|s| s.is_focus()).count(),
            tasks: task_summary(&state.tasks),
            distractions: distraction_summary(&state.distractions),
        }
    }
}

/// One entry per calendar day for the `days` days ending on `today`.
pub fn daily_breakdown(sessions: &[PomodoroSession], today: NaiveDate, days: u32) -> Vec<DayTotal> {
    (0..i64::from(days))
        .rev()
        .map(|back| {
            let date = today - Duration::days(back);
            DayTotal {
                date,
                weekday: date.format("%a").to_string(),
                minutes: focus_minutes_on(sessions, date),
            }
        })
        .collect()
}

/// Day with the most focus minutes; later days win ties. `None` when no
/// day has any focus time.
pub fn most_productive_day(daily: &[DayTotal]) -> Option<DayTotal> {
    daily
        .iter()
        .filter(|d| d.minutes > 0)
        .fold(None::<&DayTotal>, |best, day| match best {
            Some(b) if b.minutes > day.minutes => Some(b),
            _ => Some(day),
        })
        .cloned()
}

/// Mean focus session length, rounded to whole minutes.
pub fn average_focus_minutes(sessions: &[PomodoroSession]) -> u32 {
    let (count, total) = sessions
        .iter()
        .filter(|s| s.is_focus())
        .fold((0u64, 0u64), |(n, sum), s| (n + 1, sum + u64::from(s.duration_minutes)));
    if count == 0 {
        return 0;
    }
    (total as f64 / count as f64).round() as u32
}

pub fn distraction_summary(events: &[DistractionEvent]) -> DistractionSummary {
    let mut by_category = BTreeMap::new();
    for event in events {
        *by_category.entry(event.category.clone()).or_insert(0) += 1;
    }
    DistractionSummary {
        total: events.len(),
        by_category,
    }
}
