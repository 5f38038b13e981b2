//! Timer scheduler: the one autonomous producer of intents.
//!
//! While the engine reports `is_running`, the scheduler issues one `TICK`
//! per second, and a `COMPLETE_SESSION` as soon as a tick brings the
//! countdown to zero. It is cancelled whenever the timer stops and re-armed
//! (fresh one-second phase, current remaining time) when the timer starts,
//! the mode changes or the settings change.
//!
//! ## State Transitions
//!
//! ```text
//! Disarmed --(running)--> Armed --(paused)--> Disarmed
//!             Armed --(mode/settings change)--> Armed (re-armed)
//! ```

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use crate::intent::Intent;
use crate::model::{AppState, Settings, TimerMode};
use crate::time::Clock;

use super::engine::Engine;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// What the scheduler must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Start (or restart) the one-second ticker.
    Arm,
    /// Cancel the ticker.
    Disarm,
    /// Leave the ticker as it is.
    Keep,
}

/// The slice of state the scheduler reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerPhase {
    pub running: bool,
    pub mode: TimerMode,
    pub settings: Settings,
}

impl TimerPhase {
    pub fn of(state: &AppState) -> Self {
        Self {
            running: state.is_running,
            mode: state.timer_mode,
            settings: state.settings,
        }
    }
}

pub fn directive(prev: &TimerPhase, next: &TimerPhase) -> Directive {
    if !next.running {
        Directive::Disarm
    } else if !prev.running || prev.mode != next.mode || prev.settings != next.settings {
        Directive::Arm
    } else {
        Directive::Keep
    }
}

/// `COMPLETE_SESSION` for the active mode when a running countdown has hit
/// zero. The duration is the mode's configured minutes.
pub fn completion_due(state: &AppState) -> Option<Intent> {
    (state.is_running && state.remaining_seconds == 0).then(|| Intent::CompleteSession {
        mode: state.timer_mode,
        duration: state.settings.duration_for(state.timer_mode),
    })
}

/// Intent the scheduler issues when its ticker fires.
pub fn due_intent(state: &AppState) -> Option<Intent> {
    if !state.is_running {
        return None;
    }
    completion_due(state).or(Some(Intent::Tick))
}

/// Counters returned by [`drive`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveSummary {
    pub ticks: u64,
    pub completions: u32,
}

fn arm() -> Interval {
    let mut ticker = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Drive `engine` with a one-second ticker until `stop` resolves, the timer
/// is paused, or `max_completions` sessions have completed.
///
/// Runs on the caller's task; intents are applied strictly one at a time.
pub async fn drive<C, F>(
    engine: &mut Engine<C>,
    stop: F,
    max_completions: Option<u32>,
) -> DriveSummary
where
    C: Clock,
    F: Future<Output = ()>,
{
    tokio::pin!(stop);
    let mut summary = DriveSummary::default();
    let mut ticker = engine.state().is_running.then(arm);
    if ticker.is_some() {
        tracing::debug!("scheduler armed");
    }

    loop {
        if let Some(intent) = completion_due(engine.state()) {
            let mode = engine.state().timer_mode;
            let phase = TimerPhase::of(engine.state());
            engine.dispatch(intent);
            summary.completions += 1;
            tracing::info!(%mode, completions = summary.completions, "session completed");
            apply(&mut ticker, directive(&phase, &TimerPhase::of(engine.state())));
            if max_completions.is_some_and(|max| summary.completions >= max) {
                break;
            }
            continue;
        }

        let Some(active) = ticker.as_mut() else {
            break;
        };

        tokio::select! {
            _ = &mut stop => {
                tracing::debug!("scheduler stopped");
                break;
            }
            _ = active.tick() => {
                let phase = TimerPhase::of(engine.state());
                if let Some(intent) = due_intent(engine.state()) {
                    engine.dispatch(intent);
                    summary.ticks += 1;
                }
                apply(&mut ticker, directive(&phase, &TimerPhase::of(engine.state())));
            }
        }
    }

    summary
}

fn apply(ticker: &mut Option<Interval>, directive: Directive) {
    match directive {
        Directive::Arm => {
            *ticker = Some(arm());
            tracing::debug!("scheduler re-armed");
        }
        Directive::Disarm => {
            if ticker.take().is_some() {
                tracing::debug!("scheduler disarmed");
            }
        }
        Directive::Keep => {}
    }
}
