use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Which countdown is active. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerMode {
    Focus,
    ShortBreak,
    LongBreak,
}

impl TimerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerMode::Focus => "focus",
            TimerMode::ShortBreak => "short_break",
            TimerMode::LongBreak => "long_break",
        }
    }

    pub fn is_break(&self) -> bool {
        !matches!(self, TimerMode::Focus)
    }
}

impl Default for TimerMode {
    fn default() -> Self {
        TimerMode::Focus
    }
}

impl fmt::Display for TimerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimerMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "focus" => Ok(TimerMode::Focus),
            "short_break" => Ok(TimerMode::ShortBreak),
            "long_break" => Ok(TimerMode::LongBreak),
            other => Err(ValidationError::unknown_variant(
                "timer_mode",
                other,
                "focus, short_break, long_break",
            )),
        }
    }
}

/// Ambient track played while a focus countdown runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundMusic {
    None,
    Rainfall,
    Ambient,
    Deepfocus,
    Chill,
    Lofi,
}

impl BackgroundMusic {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackgroundMusic::None => "none",
            BackgroundMusic::Rainfall => "rainfall",
            BackgroundMusic::Ambient => "ambient",
            BackgroundMusic::Deepfocus => "deepfocus",
            BackgroundMusic::Chill => "chill",
            BackgroundMusic::Lofi => "lofi",
        }
    }

    /// Where the track is streamed from. `None` has no source.
    pub fn source(&self) -> Option<&'static str> {
        match self {
            BackgroundMusic::None => None,
            BackgroundMusic::Rainfall => {
                Some("https://assets.mixkit.co/active_storage/sfx/2392/2392-preview.mp3")
            }
            BackgroundMusic::Ambient => Some("audio/mixkit-european-forest-ambience-1213.wav"),
            BackgroundMusic::Deepfocus => Some(
                "https://commondatastorage.googleapis.com/codeskulptor-assets/Epoq-Lepidoptera.ogg",
            ),
            BackgroundMusic::Chill => {
                Some("https://www.soundhelix.com/examples/mp3/SoundHelix-Song-3.mp3")
            }
            BackgroundMusic::Lofi => Some("audio/focus-glow-lofi-269098.mp3"),
        }
    }
}

impl Default for BackgroundMusic {
    fn default() -> Self {
        BackgroundMusic::None
    }
}

impl fmt::Display for BackgroundMusic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackgroundMusic {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(BackgroundMusic::None),
            "rainfall" => Ok(BackgroundMusic::Rainfall),
            "ambient" => Ok(BackgroundMusic::Ambient),
            "deepfocus" => Ok(BackgroundMusic::Deepfocus),
            "chill" => Ok(BackgroundMusic::Chill),
            "lofi" => Ok(BackgroundMusic::Lofi),
            other => Err(ValidationError::unknown_variant(
                "background_music",
                other,
                "none, rainfall, ambient, deepfocus, chill, lofi",
            )),
        }
    }
}

pub const FOCUS_MINUTES: RangeInclusive<u32> = 1..=120;
pub const SHORT_BREAK_MINUTES: RangeInclusive<u32> = 1..=30;
pub const LONG_BREAK_MINUTES: RangeInclusive<u32> = 1..=60;
pub const MUSIC_VOLUME: RangeInclusive<u8> = 0..=100;

/// Timer settings. Durations are whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub focus_duration: u32,
    pub short_break_duration: u32,
    pub long_break_duration: u32,
    pub background_music: BackgroundMusic,
    /// 0-100
    pub music_volume: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            focus_duration: 25,
            short_break_duration: 5,
            long_break_duration: 15,
            background_music: BackgroundMusic::None,
            music_volume: 50,
        }
    }
}

impl Settings {
    /// Configured minutes for `mode`.
    pub fn duration_for(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Focus => self.focus_duration,
            TimerMode::ShortBreak => self.short_break_duration,
            TimerMode::LongBreak => self.long_break_duration,
        }
    }

    /// Configured countdown length for `mode`, in seconds.
    pub fn seconds_for(&self, mode: TimerMode) -> u32 {
        self.duration_for(mode).saturating_mul(60)
    }

    /// Pull every field into its valid range. Applied at the input boundary
    /// and when migrating persisted snapshots; the reducer never rejects.
    pub fn clamped(self) -> Self {
        Self {
            focus_duration: clamp(self.focus_duration, FOCUS_MINUTES),
            short_break_duration: clamp(self.short_break_duration, SHORT_BREAK_MINUTES),
            long_break_duration: clamp(self.long_break_duration, LONG_BREAK_MINUTES),
            background_music: self.background_music,
            music_volume: clamp(self.music_volume, MUSIC_VOLUME),
        }
    }
}

fn clamp<T: Ord + Copy>(value: T, range: RangeInclusive<T>) -> T {
    value.clamp(*range.start(), *range.end())
}
