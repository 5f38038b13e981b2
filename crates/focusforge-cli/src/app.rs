//! Engine wiring shared by every command.

use focusforge_core::reconcile::restore;
use focusforge_core::{AppState, Config, CueObserver, Database, Engine};
use serde::Serialize;

use crate::cues::TerminalCues;

pub type CliResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Open the store, reconcile the persisted snapshot into a fresh engine and
/// attach persistence and terminal cues.
///
/// Persistence subscribes before `INIT_STATE` so a reconciled snapshot is
/// written back at once; cues subscribe after it. A snapshot that cannot be
/// read fails the command before anything is written.
pub fn open(config: &Config) -> CliResult<Engine> {
    let db = Database::open()?;
    let mut engine = Engine::new(AppState::default());
    restore(&mut engine, db, config.appearance.prefers_dark)?;
    engine.subscribe(CueObserver::new(TerminalCues::new(config.cues.clone())));
    Ok(engine)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
