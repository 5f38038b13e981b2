//! Audio and toast cues, driven by observing transitions.
//!
//! The engine never plays anything. `CueObserver` subscribes to transitions
//! and tells a [`Cues`] collaborator what to do. Collaborators are
//! fire-and-forget: they return nothing and swallow (and log) their own
//! failures.

use serde::{Deserialize, Serialize};

use crate::intent::Intent;
use crate::model::{AppState, BackgroundMusic, TimerMode};
use crate::timer::{Transition, TransitionObserver};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
}

/// Side-effecting collaborator for sounds and notifications.
pub trait Cues {
    fn play_chime(&mut self);
    fn show_toast(&mut self, message: &str, severity: Severity);
    /// Start `track` at `volume` (0-100), replacing whatever plays.
    fn play_background_track(&mut self, track: BackgroundMusic, volume: u8);
    fn stop_background_track(&mut self);
}

/// Track that should be playing for `state`: only while a focus countdown
/// runs, and never for `BackgroundMusic::None`.
pub fn wanted_track(state: &AppState) -> Option<(BackgroundMusic, u8)> {
    let settings = &state.settings;
    (state.timer_mode == TimerMode::Focus
        && state.is_running
        && settings.background_music != BackgroundMusic::None)
        .then_some((settings.background_music, settings.music_volume))
}

pub fn mode_toast(mode: TimerMode) -> (&'static str, Severity) {
    match mode {
        TimerMode::Focus => ("Focus Session Starts!", Severity::Success),
        TimerMode::ShortBreak | TimerMode::LongBreak => ("Take a Break", Severity::Info),
    }
}

/// Maps transitions onto cues.
pub struct CueObserver<K: Cues> {
    cues: K,
    playing: Option<(BackgroundMusic, u8)>,
}

impl<K: Cues> CueObserver<K> {
    pub fn new(cues: K) -> Self {
        Self {
            cues,
            playing: None,
        }
    }

    fn sync_track(&mut self, state: &AppState) {
        let wanted = wanted_track(state);
        if wanted == self.playing {
            return;
        }
        match wanted {
            Some((track, volume)) => self.cues.play_background_track(track, volume),
            None => self.cues.stop_background_track(),
        }
        self.playing = wanted;
    }
}

impl<K: Cues> TransitionObserver for CueObserver<K> {
    fn on_transition(&mut self, t: &Transition<'_>) {
        // Loading a snapshot is not a user-visible transition.
        if matches!(t.intent, Intent::InitState(_)) {
            self.playing = wanted_track(t.next);
            return;
        }

        if matches!(t.intent, Intent::ToggleTimer) {
            self.cues.play_chime();
        }

        if t.mode_changed() {
            self.cues.play_chime();
            let (message, severity) = mode_toast(t.next.timer_mode);
            self.cues.show_toast(message, severity);
        }

        self.sync_track(t.next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Settings;
    use crate::timer::Engine;
    use crate::time::FixedClock;
    use chrono::{TimeZone, Utc};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Chime,
        Toast(String, Severity),
        Play(BackgroundMusic, u8),
        Stop,
    }

    #[derive(Clone, Default)]
    struct Recording(Rc<RefCell<Vec<Call>>>);

    impl Cues for Recording {
        fn play_chime(&mut self) {
            self.0.borrow_mut().push(Call::Chime);
        }
        fn show_toast(&mut self, message: &str, severity: Severity) {
            self.0
                .borrow_mut()
                .push(Call::Toast(message.to_string(), severity));
        }
        fn play_background_track(&mut self, track: BackgroundMusic, volume: u8) {
            self.0.borrow_mut().push(Call::Play(track, volume));
        }
        fn stop_background_track(&mut self) {
            self.0.borrow_mut().push(Call::Stop);
        }
    }

    fn engine_with(settings: Settings) -> (Engine<FixedClock>, Recording) {
        let state = AppState {
            settings,
            ..AppState::default()
        };
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap());
        let mut engine = Engine::with_clock(state, clock);
        let recording = Recording::default();
        engine.subscribe(CueObserver::new(recording.clone()));
        (engine, recording)
    }

    fn lofi() -> Settings {
        Settings {
            background_music: BackgroundMusic::Lofi,
            music_volume: 40,
            ..Settings::default()
        }
    }

    #[test]
    fn toggle_chimes_and_starts_focus_music() {
        let (mut engine, calls) = engine_with(lofi());
        engine.dispatch(Intent::ToggleTimer);
        assert_eq!(
            *calls.0.borrow(),
            vec![Call::Chime, Call::Play(BackgroundMusic::Lofi, 40)]
        );

        engine.dispatch(Intent::ToggleTimer);
        assert_eq!(calls.0.borrow().last(), Some(&Call::Stop));
    }

    #[test]
    fn mode_change_chimes_toasts_and_stops_music() {
        let (mut engine, calls) = engine_with(lofi());
        engine.dispatch(Intent::ToggleTimer);
        calls.0.borrow_mut().clear();

        engine.dispatch(Intent::SetMode(TimerMode::ShortBreak));
        assert_eq!(
            *calls.0.borrow(),
            vec![
                Call::Chime,
                Call::Toast("Take a Break".into(), Severity::Info),
                Call::Stop
            ]
        );
    }

    #[test]
    fn ticks_do_not_retrigger_music() {
        let (mut engine, calls) = engine_with(lofi());
        engine.dispatch(Intent::ToggleTimer);
        engine.dispatch(Intent::Tick);
        engine.dispatch(Intent::Tick);
        let plays = calls
            .0
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Play(..)))
            .count();
        assert_eq!(plays, 1);
    }

    #[test]
    fn volume_change_while_playing_restarts_track() {
        let (mut engine, calls) = engine_with(lofi());
        engine.dispatch(Intent::ToggleTimer);
        let mut louder = lofi();
        louder.music_volume = 90;
        engine.dispatch(Intent::UpdateSettings(louder));
        assert_eq!(
            calls.0.borrow().last(),
            Some(&Call::Play(BackgroundMusic::Lofi, 90))
        );
    }

    #[test]
    fn silent_track_never_plays() {
        let (mut engine, calls) = engine_with(Settings::default());
        engine.dispatch(Intent::ToggleTimer);
        assert_eq!(*calls.0.borrow(), vec![Call::Chime]);
    }

    #[test]
    fn focus_completion_toasts_break() {
        let (mut engine, calls) = engine_with(Settings::default());
        engine.dispatch(Intent::CompleteSession {
            mode: TimerMode::Focus,
            duration: 25,
        });
        assert_eq!(
            *calls.0.borrow(),
            vec![
                Call::Chime,
                Call::Toast("Take a Break".into(), Severity::Info)
            ]
        );
    }

    #[test]
    fn init_state_is_silent() {
        let (mut engine, calls) = engine_with(Settings::default());
        let loaded = AppState {
            timer_mode: TimerMode::LongBreak,
            ..AppState::default()
        };
        engine.dispatch(Intent::InitState(Box::new(loaded)));
        assert!(calls.0.borrow().is_empty());
    }
}
