use serde::{Deserialize, Serialize};

use crate::model::{AppState, Note, Priority, PriorityFilter, Settings, TimerMode, WeeklyReview};

/// Every state change in the system is requested by an Intent.
/// The presentation layer dispatches them; the timer scheduler is the only
/// autonomous producer (`Tick` and `CompleteSession`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    /// Wholesale replacement, issued once by the reconciler.
    InitState(Box<AppState>),
    Tick,
    ToggleTimer,
    ResetTimer,
    SetMode(TimerMode),
    UpdateSettings(Settings),
    AddTask(NewTask),
    ToggleTask(String),
    DeleteTask(String),
    SetTaskPriorityFilter(PriorityFilter),
    AddNote(NewNote),
    UpdateNote(Note),
    DeleteNote(String),
    LogDistraction(NewDistraction),
    SaveReview(WeeklyReview),
    /// `duration` is the configured minutes of `mode` at completion.
    CompleteSession { mode: TimerMode, duration: u32 },
    ToggleTheme,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDistraction {
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Intent {
    /// Wire name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::InitState(_) => "INIT_STATE",
            Intent::Tick => "TICK",
            Intent::ToggleTimer => "TOGGLE_TIMER",
            Intent::ResetTimer => "RESET_TIMER",
            Intent::SetMode(_) => "SET_MODE",
            Intent::UpdateSettings(_) => "UPDATE_SETTINGS",
            Intent::AddTask(_) => "ADD_TASK",
            Intent::ToggleTask(_) => "TOGGLE_TASK",
            Intent::DeleteTask(_) => "DELETE_TASK",
            Intent::SetTaskPriorityFilter(_) => "SET_TASK_PRIORITY_FILTER",
            Intent::AddNote(_) => "ADD_NOTE",
            Intent::UpdateNote(_) => "UPDATE_NOTE",
            Intent::DeleteNote(_) => "DELETE_NOTE",
            Intent::LogDistraction(_) => "LOG_DISTRACTION",
            Intent::SaveReview(_) => "SAVE_REVIEW",
            Intent::CompleteSession { .. } => "COMPLETE_SESSION",
            Intent::ToggleTheme => "TOGGLE_THEME",
        }
    }
}
