//! # FocusForge Core Library
//!
//! This library provides the session/state engine for the FocusForge
//! productivity tracker: a Pomodoro-style focus timer, task list, notes,
//! distraction log, weekly reviews, and streak/level gamification.
//! The `focusforge` CLI is a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Reducer**: a pure function from `(state, intent, stamp)` to the next
//!   state. All mutation goes through it.
//! - **Engine**: owns the single `AppState`, stamps intents with the clock and
//!   publishes each transition to subscribed observers
//! - **Scheduler**: the only autonomous producer of intents (one `TICK` per
//!   second while running, `COMPLETE_SESSION` at zero)
//! - **Storage**: the snapshot codec, a SQLite key-value store and TOML
//!   configuration
//! - **Reconciler**: rebuilds derived totals from the session log on start
//!
//! ## Key Components
//!
//! - [`Engine`]: Single-threaded state owner
//! - [`Intent`]: The tagged set of state transitions
//! - [`AppState`]: The root snapshot
//! - [`Database`]: Snapshot persistence
//! - [`Config`]: Application configuration management

pub mod cues;
pub mod error;
pub mod intent;
pub mod leveling;
pub mod model;
pub mod reconcile;
pub mod stats;
pub mod storage;
pub mod time;
pub mod timer;
pub mod view;

pub use cues::{CueObserver, Cues, Severity};
pub use error::{ConfigError, CoreError, SnapshotError, StorageError, ValidationError};
pub use intent::{Intent, NewDistraction, NewNote, NewTask};
pub use leveling::{level_for, level_info, Level, LevelInfo};
pub use model::{
    AppState, BackgroundMusic, DistractionEvent, Note, PomodoroSession, Priority, PriorityFilter,
    Settings, Task, Theme, TimerMode, UserStats, WeeklyReview,
};
pub use stats::Analytics;
pub use storage::{Config, Database, MemoryStore, PersistObserver, SnapshotStore};
pub use time::{format_time, Clock, FixedClock, SystemClock};
pub use timer::{drive, Engine, Transition, TransitionObserver};
pub use view::{task_summary, visible_tasks, TaskSummary};
