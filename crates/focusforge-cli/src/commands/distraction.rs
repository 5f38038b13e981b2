use clap::Subcommand;
use focusforge_core::intent::NewDistraction;
use focusforge_core::{Config, Intent};

use crate::app::{self, print_json, CliResult};

#[derive(Subcommand)]
pub enum DistractionAction {
    /// Log a distraction that just happened
    Log {
        /// Free-form category, e.g. "phone"
        category: String,
        #[arg(long)]
        note: Option<String>,
    },
    /// Print the distraction log as JSON
    List,
}

pub fn run(action: DistractionAction, config: &Config) -> CliResult {
    let mut engine = app::open(config)?;

    match action {
        DistractionAction::Log { category, note } => {
            engine.dispatch(Intent::LogDistraction(NewDistraction { category, note }));
            if let Some(event) = engine.state().distractions.last() {
                print_json(event)?;
            }
        }
        DistractionAction::List => print_json(&engine.state().distractions)?,
    }
    Ok(())
}
