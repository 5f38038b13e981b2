//! Engine shell around the reducer.
//!
//! The engine owns the single `AppState`, stamps every intent with one clock
//! reading and a fresh id, and publishes each transition to its observers.
//! Observers (persistence, audio/toast cues) react to `(prev, next)`; the
//! reducer itself stays free of side effects.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = Engine::new(AppState::default());
//! engine.subscribe(PersistObserver::new(db));
//! engine.dispatch(Intent::ToggleTimer);
//! ```

use std::mem;

use crate::intent::Intent;
use crate::model::AppState;
use crate::time::{new_id, Clock, SystemClock};

use super::reducer::{reduce, Stamp};

/// A state change, as seen by observers.
#[derive(Debug, Clone, Copy)]
pub struct Transition<'a> {
    pub intent: &'a Intent,
    pub prev: &'a AppState,
    pub next: &'a AppState,
}

impl Transition<'_> {
    pub fn mode_changed(&self) -> bool {
        self.prev.timer_mode != self.next.timer_mode
    }
}

/// Subscriber notified after every transition that changed the snapshot.
/// Implementations must not fail the transition; errors are theirs to log.
pub trait TransitionObserver {
    fn on_transition(&mut self, transition: &Transition<'_>);
}

/// Single-threaded owner of the application state.
pub struct Engine<C: Clock = SystemClock> {
    state: AppState,
    clock: C,
    observers: Vec<Box<dyn TransitionObserver>>,
}

impl Engine<SystemClock> {
    pub fn new(state: AppState) -> Self {
        Self::with_clock(state, SystemClock)
    }
}

impl<C: Clock> Engine<C> {
    pub fn with_clock(state: AppState, clock: C) -> Self {
        Self {
            state,
            clock,
            observers: Vec::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn subscribe(&mut self, observer: impl TransitionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Apply `intent`. Returns whether the snapshot changed; observers are
    /// only notified when it did.
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        let stamp = Stamp {
            now: self.clock.now(),
            id: new_id(),
        };
        let next = reduce(&self.state, &intent, &stamp);
        if next == self.state {
            tracing::trace!(intent = intent.name(), "intent left state unchanged");
            return false;
        }

        let prev = mem::replace(&mut self.state, next);
        tracing::debug!(
            intent = intent.name(),
            mode = %self.state.timer_mode,
            running = self.state.is_running,
            remaining = self.state.remaining_seconds,
            "intent applied"
        );

        let transition = Transition {
            intent: &intent,
            prev: &prev,
            next: &self.state,
        };
        for observer in &mut self.observers {
            observer.on_transition(&transition);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::NewTask;
    use crate::model::{Priority, TimerMode};
    use crate::time::FixedClock;
    use chrono::{TimeZone, Utc};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<(String, TimerMode, TimerMode)>>>);

    impl TransitionObserver for Recorder {
        fn on_transition(&mut self, t: &Transition<'_>) {
            self.0.borrow_mut().push((
                t.intent.name().to_string(),
                t.prev.timer_mode,
                t.next.timer_mode,
            ));
        }
    }

    fn engine() -> Engine<FixedClock> {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap());
        Engine::with_clock(AppState::default(), clock)
    }

    #[test]
    fn dispatch_stamps_with_clock_and_fresh_id() {
        let mut engine = engine();
        for _ in 0..2 {
            engine.dispatch(Intent::AddTask(NewTask {
                title: "Write report".into(),
                priority: Priority::High,
            }));
        }
        let tasks = &engine.state().tasks;
        assert_eq!(tasks[0].created_at, engine.clock().now());
        assert_ne!(tasks[0].id, tasks[1].id);
    }

    #[test]
    fn observers_see_prev_and_next() {
        let mut engine = engine();
        let recorder = Recorder::default();
        engine.subscribe(recorder.clone());

        assert!(engine.dispatch(Intent::SetMode(TimerMode::LongBreak)));
        let seen = recorder.0.borrow();
        assert_eq!(
            seen.as_slice(),
            &[(
                "SET_MODE".to_string(),
                TimerMode::Focus,
                TimerMode::LongBreak
            )]
        );
    }

    #[test]
    fn no_op_intents_are_not_published() {
        let mut engine = engine();
        let recorder = Recorder::default();
        engine.subscribe(recorder.clone());

        assert!(!engine.dispatch(Intent::ToggleTask("missing".into())));
        assert!(!engine.dispatch(Intent::ResetTimer));
        assert!(recorder.0.borrow().is_empty());
    }
}
