//! The state reducer.
//!
//! `reduce` is a pure function of `(state, intent, stamp)`: no I/O and no
//! clock reads. The `Stamp` carries the dispatch instant and a fresh id, so
//! replaying the same triple always yields the same snapshot.

use chrono::{DateTime, Duration, Utc};

use crate::intent::Intent;
use crate::model::{AppState, DistractionEvent, Note, PomodoroSession, Task, TimerMode};
use crate::stats::record_focus_completion;

/// Dispatch context supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub now: DateTime<Utc>,
    /// Id for whatever entity the intent creates. Unused otherwise.
    pub id: String,
}

pub fn reduce(state: &AppState, intent: &Intent, stamp: &Stamp) -> AppState {
    let mut next = state.clone();

    match intent {
        Intent::InitState(snapshot) => return (**snapshot).clone(),

        Intent::Tick => {
            // Reaching zero is handled by the scheduler's COMPLETE_SESSION.
            next.remaining_seconds = state.remaining_seconds.saturating_sub(1);
        }

        Intent::ToggleTimer => next.is_running = !state.is_running,

        Intent::ResetTimer => {
            next.is_running = false;
            next.remaining_seconds = state.configured_seconds();
        }

        Intent::SetMode(mode) => {
            next.timer_mode = *mode;
            next.is_running = false;
            next.remaining_seconds = state.settings.seconds_for(*mode);
        }

        // A running countdown keeps its remaining time.
        Intent::UpdateSettings(settings) => next.settings = *settings,

        Intent::AddTask(new) => next.tasks.push(Task {
            id: stamp.id.clone(),
            title: new.title.clone(),
            priority: new.priority,
            is_completed: false,
            created_at: stamp.now,
        }),

        Intent::ToggleTask(id) => {
            if let Some(task) = next.tasks.iter_mut().find(|t| &t.id == id) {
                task.is_completed = !task.is_completed;
            }
        }

        Intent::DeleteTask(id) => next.tasks.retain(|t| &t.id != id),

        Intent::SetTaskPriorityFilter(filter) => next.task_priority_filter = *filter,

        Intent::AddNote(new) => next.notes.insert(
            0,
            Note {
                id: stamp.id.clone(),
                title: new.title.clone(),
                content: new.content.clone(),
                created_at: stamp.now,
                updated_at: stamp.now,
            },
        ),

        Intent::UpdateNote(note) => {
            if let Some(existing) = next.notes.iter_mut().find(|n| n.id == note.id) {
                *existing = Note {
                    updated_at: stamp.now,
                    ..note.clone()
                };
            }
            next.notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        }

        Intent::DeleteNote(id) => next.notes.retain(|n| &n.id != id),

        Intent::LogDistraction(new) => next.distractions.push(DistractionEvent {
            id: stamp.id.clone(),
            timestamp: stamp.now,
            category: new.category.clone(),
            note: new.note.clone(),
        }),

        Intent::SaveReview(review) => {
            match next
                .reviews
                .iter_mut()
                .find(|r| r.week_start_date == review.week_start_date)
            {
                Some(existing) => *existing = review.clone(),
                None => next.reviews.push(review.clone()),
            }
        }

        Intent::CompleteSession { mode, duration } => {
            complete_session(&mut next, *mode, *duration, stamp)
        }

        Intent::ToggleTheme => next.theme = state.theme.toggled(),
    }

    next
}

/// Log the session, advance the mode and auto-start the next countdown.
/// Only focus completions touch the stats.
fn complete_session(next: &mut AppState, mode: TimerMode, duration: u32, stamp: &Stamp) {
    next.sessions.push(PomodoroSession {
        id: stamp.id.clone(),
        mode,
        start_time: stamp.now - Duration::minutes(i64::from(duration)),
        end_time: stamp.now,
        duration_minutes: duration,
    });

    // Long breaks are only ever chosen by hand.
    let following = if mode.is_break() {
        TimerMode::Focus
    } else {
        TimerMode::ShortBreak
    };
    next.timer_mode = following;
    next.remaining_seconds = next.settings.seconds_for(following);
    next.is_running = true;

    if mode == TimerMode::Focus {
        record_focus_completion(&mut next.stats, duration, stamp.now);
    }
}
