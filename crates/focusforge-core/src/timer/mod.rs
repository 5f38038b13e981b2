mod engine;
mod reducer;
mod scheduler;

pub use engine::{Engine, Transition, TransitionObserver};
pub use reducer::{reduce, Stamp};
pub use scheduler::{
    completion_due, directive, drive, due_intent, Directive, DriveSummary, TimerPhase,
    TICK_PERIOD,
};
