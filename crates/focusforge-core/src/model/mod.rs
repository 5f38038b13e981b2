//! Data model: the `AppState` snapshot and everything it holds.
//!
//! Field names serialize in camelCase and timestamps as epoch milliseconds,
//! which is the persisted snapshot shape.

mod records;
mod settings;
mod state;

pub use records::{
    DistractionEvent, Note, PomodoroSession, Priority, PriorityFilter, Task, WeeklyReview,
};
pub use settings::{
    BackgroundMusic, Settings, TimerMode, FOCUS_MINUTES, LONG_BREAK_MINUTES, MUSIC_VOLUME,
    SHORT_BREAK_MINUTES,
};
pub use state::{AppState, Theme, UserStats};
