use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::settings::TimerMode;
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Sort rank, most urgent first.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(ValidationError::unknown_variant(
                "priority",
                other,
                "high, medium, low",
            )),
        }
    }
}

/// Which tasks the task list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityFilter {
    All,
    High,
    Medium,
    Low,
}

impl PriorityFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityFilter::All => "all",
            PriorityFilter::High => "high",
            PriorityFilter::Medium => "medium",
            PriorityFilter::Low => "low",
        }
    }

    pub fn admits(&self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::High => priority == Priority::High,
            PriorityFilter::Medium => priority == Priority::Medium,
            PriorityFilter::Low => priority == Priority::Low,
        }
    }
}

impl Default for PriorityFilter {
    fn default() -> Self {
        PriorityFilter::All
    }
}

impl fmt::Display for PriorityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriorityFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(PriorityFilter::All),
            other => other.parse::<Priority>().map(PriorityFilter::from).map_err(|_| {
                ValidationError::unknown_variant("priority_filter", other, "all, high, medium, low")
            }),
        }
    }
}

impl From<Priority> for PriorityFilter {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::High => PriorityFilter::High,
            Priority::Medium => PriorityFilter::Medium,
            Priority::Low => PriorityFilter::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub is_completed: bool,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

/// One completed countdown. The session log is the system of record for
/// every derived time statistic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PomodoroSession {
    pub id: String,
    /// Mode that was running when the countdown completed.
    #[serde(rename = "type")]
    pub mode: TimerMode,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub end_time: DateTime<Utc>,
    pub duration_minutes: u32,
}

impl PomodoroSession {
    pub fn is_focus(&self) -> bool {
        self.mode == TimerMode::Focus
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistractionEvent {
    pub id: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// End-of-week reflection, unique per `week_start_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReview {
    pub id: String,
    pub week_start_date: NaiveDate,
    pub wins: String,
    pub distractions: String,
    pub what_worked: String,
    pub improvement_plan: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn session_wire_shape() {
        let end = Utc.with_ymd_and_hms(2026, 5, 1, 10, 0, 0).unwrap();
        let session = PomodoroSession {
            id: "s1".into(),
            mode: TimerMode::Focus,
            start_time: end - chrono::Duration::minutes(25),
            end_time: end,
            duration_minutes: 25,
        };
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["type"], "focus");
        assert_eq!(json["endTime"], end.timestamp_millis());
        assert_eq!(json["durationMinutes"], 25);
    }

    #[test]
    fn review_week_key_is_a_date_string() {
        let json = r#"{
            "id": "r1", "weekStartDate": "2026-10-18", "wins": "", "distractions": "",
            "whatWorked": "", "improvementPlan": "", "createdAt": 0
        }"#;
        let review: WeeklyReview = serde_json::from_str(json).unwrap();
        assert_eq!(review.week_start_date, NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
    }

    #[test]
    fn distraction_note_is_optional() {
        let json = r#"{"id": "d1", "timestamp": 1000, "category": "Phone"}"#;
        let event: DistractionEvent = serde_json::from_str(json).unwrap();
        assert!(event.note.is_none());
        assert!(!serde_json::to_string(&event).unwrap().contains("note"));
    }

    #[test]
    fn filter_parses_priorities_and_all() {
        assert_eq!("all".parse::<PriorityFilter>().unwrap(), PriorityFilter::All);
        assert_eq!("low".parse::<PriorityFilter>().unwrap(), PriorityFilter::Low);
        assert!("urgent".parse::<PriorityFilter>().is_err());
        assert!(PriorityFilter::High.admits(Priority::High));
        assert!(!PriorityFilter::High.admits(Priority::Low));
    }
}
