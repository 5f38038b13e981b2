use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::records::{DistractionEvent, Note, PomodoroSession, PriorityFilter, Task, WeeklyReview};
use super::settings::{Settings, TimerMode};
use crate::leveling::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived statistics. A cache over the session log, rebuilt by the
/// reconciler at startup; never authoritative on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStats {
    pub total_focus_minutes_today: u32,
    pub total_focus_minutes_this_week: u32,
    pub streak_days: u32,
    pub last_study_date: Option<NaiveDate>,
    pub current_level: Level,
    /// Carried through untouched; nothing in the engine awards xp.
    pub xp: u32,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            total_focus_minutes_today: 0,
            total_focus_minutes_this_week: 0,
            streak_days: 0,
            last_study_date: None,
            current_level: Level::Bronze,
            xp: 0,
        }
    }
}

/// The single root snapshot, owned by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub timer_mode: TimerMode,
    pub is_running: bool,
    pub remaining_seconds: u32,
    pub settings: Settings,
    pub tasks: Vec<Task>,
    /// Newest `updated_at` first.
    pub notes: Vec<Note>,
    /// Append-only.
    pub sessions: Vec<PomodoroSession>,
    /// Append-only.
    pub distractions: Vec<DistractionEvent>,
    pub reviews: Vec<WeeklyReview>,
    pub stats: UserStats,
    pub theme: Theme,
    pub task_priority_filter: PriorityFilter,
}

impl Default for AppState {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            timer_mode: TimerMode::Focus,
            is_running: false,
            remaining_seconds: settings.seconds_for(TimerMode::Focus),
            settings,
            tasks: Vec::new(),
            notes: Vec::new(),
            sessions: Vec::new(),
            distractions: Vec::new(),
            reviews: Vec::new(),
            stats: UserStats::default(),
            theme: Theme::Light,
            task_priority_filter: PriorityFilter::All,
        }
    }
}

impl AppState {
    /// Fresh state for a first launch. The theme follows the system
    /// light/dark preference.
    pub fn seeded(prefers_dark: bool) -> Self {
        Self {
            theme: if prefers_dark { Theme::Dark } else { Theme::Light },
            ..Self::default()
        }
    }

    /// Configured countdown for the active mode, in seconds.
    pub fn configured_seconds(&self) -> u32 {
        self.settings.seconds_for(self.timer_mode)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn note(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn review_for(&self, week_start: NaiveDate) -> Option<&WeeklyReview> {
        self.reviews.iter().find(|r| r.week_start_date == week_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_a_paused_focus_countdown() {
        let state = AppState::default();
        assert_eq!(state.timer_mode, TimerMode::Focus);
        assert!(!state.is_running);
        assert_eq!(state.remaining_seconds, 25 * 60);
        assert_eq!(state.stats.current_level, Level::Bronze);
        assert_eq!(state.theme, Theme::Light);
    }

    #[test]
    fn seeded_follows_dark_preference() {
        assert_eq!(AppState::seeded(true).theme, Theme::Dark);
        assert_eq!(AppState::seeded(false).theme, Theme::Light);
    }

    #[test]
    fn stats_serialize_null_last_study_date() {
        let json = serde_json::to_value(UserStats::default()).unwrap();
        assert!(json["lastStudyDate"].is_null());
        assert_eq!(json["currentLevel"], "Bronze");
    }
}
