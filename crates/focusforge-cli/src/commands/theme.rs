use clap::Subcommand;
use focusforge_core::{Config, Intent};

use crate::app::{self, CliResult};

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Switch between light and dark
    Toggle,
    /// Print the current theme
    Show,
}

pub fn run(action: ThemeAction, config: &Config) -> CliResult {
    let mut engine = app::open(config)?;
    if let ThemeAction::Toggle = action {
        engine.dispatch(Intent::ToggleTheme);
    }
    println!("{}", engine.state().theme);
    Ok(())
}
