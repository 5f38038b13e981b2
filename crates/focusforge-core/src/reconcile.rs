//! Startup reconciliation of a persisted snapshot.
//!
//! Cached totals in a snapshot go stale as soon as wall-clock time crosses
//! a day or week boundary, so they are rebuilt from the session log before
//! the snapshot enters the engine. A countdown is never resumed across a
//! restart.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::intent::Intent;
use crate::leveling::level_for;
use crate::model::AppState;
use crate::stats::{focus_minutes_on, focus_minutes_trailing_week};
use crate::storage::{snapshot, PersistObserver, SnapshotStore};
use crate::time::{day_key, Clock};
use crate::timer::Engine;

/// Rebuild derived totals from the session log and stop the timer.
///
/// Streak, last study date and xp pass through untouched, as does every
/// other field.
pub fn reconcile(mut persisted: AppState, now: DateTime<Utc>) -> AppState {
    let today = focus_minutes_on(&persisted.sessions, day_key(now));
    let week = focus_minutes_trailing_week(&persisted.sessions, now);

    persisted.stats.total_focus_minutes_today = today;
    persisted.stats.total_focus_minutes_this_week = week;
    persisted.stats.current_level = level_for(week);
    persisted.is_running = false;
    persisted
}

/// State the engine starts from.
///
/// No snapshot seeds defaults (theme from `prefers_dark`). A snapshot that
/// fails to decode is logged and also falls back to defaults.
pub fn initial_state(raw: Option<&str>, now: DateTime<Utc>, prefers_dark: bool) -> AppState {
    let Some(raw) = raw else {
        tracing::debug!("no persisted snapshot, seeding defaults");
        return AppState::seeded(prefers_dark);
    };

    match snapshot::decode(raw) {
        Ok(persisted) => {
            let state = reconcile(persisted, now);
            tracing::info!(
                sessions = state.sessions.len(),
                today = state.stats.total_focus_minutes_today,
                week = state.stats.total_focus_minutes_this_week,
                "snapshot reconciled"
            );
            state
        }
        Err(err) => {
            tracing::warn!(error = %err, "discarding unreadable snapshot");
            AppState::seeded(prefers_dark)
        }
    }
}

/// Load the reconciled state into `engine` with a single `INIT_STATE`.
pub fn bootstrap<C: Clock>(engine: &mut Engine<C>, raw: Option<&str>, prefers_dark: bool) {
    let state = initial_state(raw, engine.clock().now(), prefers_dark);
    engine.dispatch(Intent::InitState(Box::new(state)));
}

/// Read the snapshot from `store`, then attach it for persistence and
/// bootstrap `engine`.
///
/// A store that cannot be read is an error, not an empty store: nothing is
/// subscribed and nothing is written, so the stored history survives.
pub fn restore<C, S>(engine: &mut Engine<C>, store: S, prefers_dark: bool) -> Result<()>
where
    C: Clock,
    S: SnapshotStore + 'static,
{
    let raw = store.load()?;
    engine.subscribe(PersistObserver::new(store));
    bootstrap(engine, raw.as_deref(), prefers_dark);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, StorageError};
    use crate::leveling::Level;
    use crate::model::{PomodoroSession, Theme, TimerMode};
    use crate::storage::MemoryStore;
    use crate::time::FixedClock;
    use chrono::{Duration, NaiveDate, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 15, 0, 0).unwrap()
    }

    fn focus(end: DateTime<Utc>, minutes: u32) -> PomodoroSession {
        PomodoroSession {
            id: format!("s-{}", end.timestamp()),
            mode: TimerMode::Focus,
            start_time: end - Duration::minutes(i64::from(minutes)),
            end_time: end,
            duration_minutes: minutes,
        }
    }

    #[test]
    fn yesterday_and_today_split_into_day_and_week() {
        let mut persisted = AppState::default();
        persisted.is_running = true;
        persisted.sessions = vec![
            focus(now() - Duration::days(1), 25),
            focus(now() - Duration::hours(1), 25),
        ];
        persisted.stats.total_focus_minutes_today = 999;
        persisted.stats.streak_days = 4;
        persisted.stats.last_study_date = NaiveDate::from_ymd_opt(2026, 10, 18);

        let state = reconcile(persisted, now());

        assert_eq!(state.stats.total_focus_minutes_today, 25);
        assert_eq!(state.stats.total_focus_minutes_this_week, 50);
        assert_eq!(state.stats.current_level, Level::Bronze);
        assert!(!state.is_running);
        assert_eq!(state.stats.streak_days, 4);
        assert_eq!(state.stats.last_study_date, NaiveDate::from_ymd_opt(2026, 10, 18));
    }

    #[test]
    fn stale_level_is_recomputed_downwards() {
        let mut persisted = AppState::default();
        persisted.stats.current_level = Level::Master;
        persisted.sessions = vec![focus(now() - Duration::days(8), 600)];

        let state = reconcile(persisted, now());
        assert_eq!(state.stats.total_focus_minutes_this_week, 0);
        assert_eq!(state.stats.current_level, Level::Bronze);
    }

    #[test]
    fn missing_snapshot_seeds_theme_from_preference() {
        assert_eq!(initial_state(None, now(), true).theme, Theme::Dark);
        assert_eq!(initial_state(None, now(), false), AppState::default());
    }

    #[test]
    fn corrupt_snapshot_falls_back_to_defaults() {
        let state = initial_state(Some("{not json"), now(), true);
        assert_eq!(state, AppState::seeded(true));

        let state = initial_state(Some(r#"{"sessions":42}"#), now(), false);
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn persisted_theme_wins_over_preference() {
        let state = initial_state(Some(r#"{"theme":"light"}"#), now(), true);
        assert_eq!(state.theme, Theme::Light);
    }

    /// Reads fail, writes land in a shared slot.
    struct UnreadableStore {
        slot: MemoryStore,
    }

    impl SnapshotStore for UnreadableStore {
        fn load(&self) -> std::result::Result<Option<String>, StorageError> {
            Err(StorageError::Locked)
        }

        fn save(&self, snapshot: &str) -> std::result::Result<(), StorageError> {
            self.slot.save(snapshot)
        }
    }

    #[test]
    fn restore_reconciles_and_persists_the_stored_snapshot() {
        let store = MemoryStore::with_snapshot(r#"{"theme":"dark","isRunning":true}"#);
        let mut engine = Engine::with_clock(AppState::default(), FixedClock::new(now()));

        restore(&mut engine, store.clone(), false).unwrap();
        assert_eq!(engine.state().theme, Theme::Dark);
        assert!(!engine.state().is_running);

        let saved = snapshot::decode(&store.contents().unwrap()).unwrap();
        assert_eq!(&saved, engine.state());
    }

    #[test]
    fn unreadable_store_is_an_error_and_keeps_history() {
        let kept = r#"{"tasks":[{"id":"t1","title":"keep me","isCompleted":false,"priority":"high"}]}"#;
        let slot = MemoryStore::with_snapshot(kept);
        let mut engine = Engine::with_clock(AppState::default(), FixedClock::new(now()));

        let err = restore(&mut engine, UnreadableStore { slot: slot.clone() }, true).unwrap_err();
        assert!(matches!(err, CoreError::Storage(StorageError::Locked)));
        assert_eq!(engine.state(), &AppState::default());

        engine.dispatch(Intent::ToggleTheme);
        assert_eq!(slot.contents().as_deref(), Some(kept));
    }
}
