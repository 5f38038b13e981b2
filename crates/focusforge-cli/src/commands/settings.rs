use clap::Subcommand;
use focusforge_core::model::MUSIC_VOLUME;
use focusforge_core::{BackgroundMusic, Config, Intent};

use crate::app::{self, print_json, CliResult};

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print the timer and music settings as JSON
    Show,
    /// Change settings; out-of-range values are clamped
    Set {
        /// Focus minutes (1-120)
        #[arg(long)]
        focus: Option<u32>,
        /// Short break minutes (1-30)
        #[arg(long)]
        short_break: Option<u32>,
        /// Long break minutes (1-60)
        #[arg(long)]
        long_break: Option<u32>,
        /// none, rainfall, ambient, deepfocus, chill or lofi
        #[arg(long)]
        music: Option<BackgroundMusic>,
        /// Music volume (0-100)
        #[arg(long)]
        volume: Option<u32>,
    },
}

pub fn run(action: SettingsAction, config: &Config) -> CliResult {
    let mut engine = app::open(config)?;

    if let SettingsAction::Set {
        focus,
        short_break,
        long_break,
        music,
        volume,
    } = action
    {
        let mut settings = engine.state().settings;
        if let Some(minutes) = focus {
            settings.focus_duration = minutes;
        }
        if let Some(minutes) = short_break {
            settings.short_break_duration = minutes;
        }
        if let Some(minutes) = long_break {
            settings.long_break_duration = minutes;
        }
        if let Some(track) = music {
            settings.background_music = track;
        }
        if let Some(volume) = volume {
            let max = *MUSIC_VOLUME.end();
            settings.music_volume = u8::try_from(volume).unwrap_or(max).min(max);
        }
        engine.dispatch(Intent::UpdateSettings(settings.clamped()));
    }

    print_json(&engine.state().settings)
}
