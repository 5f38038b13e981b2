//! Terminal rendition of the engine's cues.
//!
//! The chime is the terminal bell, toasts go to stderr, and the background
//! track is a handle that announces what would stream. Nothing here can
//! fail a command.

use std::io::Write;

use focusforge_core::storage::CuesConfig;
use focusforge_core::{BackgroundMusic, Cues, Severity};

/// A background track that is "playing" for as long as the handle lives.
struct TrackHandle {
    track: BackgroundMusic,
    volume: u8,
}

impl TrackHandle {
    fn start(track: BackgroundMusic, volume: u8) -> Option<Self> {
        let Some(source) = track.source() else {
            tracing::debug!(%track, "track has no source, nothing to play");
            return None;
        };
        eprintln!("♪ {track} at {volume}% ({source})");
        tracing::info!(%track, volume, "background track started");
        Some(Self { track, volume })
    }
}

impl Drop for TrackHandle {
    fn drop(&mut self) {
        tracing::info!(track = %self.track, volume = self.volume, "background track stopped");
    }
}

pub struct TerminalCues {
    enabled: CuesConfig,
    track: Option<TrackHandle>,
}

impl TerminalCues {
    pub fn new(enabled: CuesConfig) -> Self {
        Self {
            enabled,
            track: None,
        }
    }
}

impl Cues for TerminalCues {
    fn play_chime(&mut self) {
        if !self.enabled.chime {
            return;
        }
        let mut stderr = std::io::stderr();
        if let Err(err) = stderr.write_all(b"\x07").and_then(|()| stderr.flush()) {
            tracing::warn!(error = %err, "chime failed");
        }
    }

    fn show_toast(&mut self, message: &str, severity: Severity) {
        if !self.enabled.toasts {
            return;
        }
        let marker = match severity {
            Severity::Info => "i",
            Severity::Success => "✓",
            Severity::Warning => "!",
        };
        eprintln!("[{marker}] {message}");
    }

    fn play_background_track(&mut self, track: BackgroundMusic, volume: u8) {
        if !self.enabled.background_music {
            return;
        }
        self.track = TrackHandle::start(track, volume);
    }

    fn stop_background_track(&mut self) {
        self.track = None;
    }
}
