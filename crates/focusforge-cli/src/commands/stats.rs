use chrono::Utc;
use clap::Subcommand;
use focusforge_core::{level_info, Analytics, Config, LevelInfo, UserStats};
use serde::Serialize;

use crate::app::{self, print_json, CliResult};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Focus totals, streak and level progress
    Show,
    /// Seven-day breakdown, averages and distraction counts
    Analytics,
}

#[derive(Serialize)]
struct StatsReport<'a> {
    #[serde(flatten)]
    stats: &'a UserStats,
    level: LevelInfo,
}

pub fn run(action: StatsAction, config: &Config) -> CliResult {
    let engine = app::open(config)?;
    let state = engine.state();

    match action {
        StatsAction::Show => print_json(&StatsReport {
            stats: &state.stats,
            level: level_info(state.stats.total_focus_minutes_this_week),
        }),
        StatsAction::Analytics => print_json(&Analytics::compute(state, Utc::now())),
    }
}
