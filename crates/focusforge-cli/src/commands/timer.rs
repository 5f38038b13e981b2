use std::io::Write;

use clap::Subcommand;
use focusforge_core::time::format_time;
use focusforge_core::timer::{drive, DriveSummary};
use focusforge_core::{AppState, Config, Intent, TimerMode, Transition, TransitionObserver};
use serde::Serialize;

use crate::app::{self, print_json, CliResult};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Print current timer state as JSON
    Status,
    /// Start or pause the countdown
    Toggle,
    /// Reload the configured duration for the current mode and pause
    Reset,
    /// Switch mode (focus, short_break, long_break)
    Mode {
        mode: TimerMode,
    },
    /// Run the countdown in the foreground until Ctrl-C
    Run {
        /// Stop after this many completed sessions
        #[arg(long)]
        cycles: Option<u32>,
    },
}

#[derive(Serialize)]
struct TimerStatus {
    mode: TimerMode,
    running: bool,
    remaining_seconds: u32,
    display: String,
    configured_seconds: u32,
}

impl TimerStatus {
    fn of(state: &AppState) -> Self {
        Self {
            mode: state.timer_mode,
            running: state.is_running,
            remaining_seconds: state.remaining_seconds,
            display: format_time(state.remaining_seconds),
            configured_seconds: state.configured_seconds(),
        }
    }
}

#[derive(Serialize)]
struct RunReport {
    ticks: u64,
    completions: u32,
    timer: TimerStatus,
}

/// Redraws the countdown on stderr after each tick.
struct Countdown;

impl TransitionObserver for Countdown {
    fn on_transition(&mut self, t: &Transition<'_>) {
        if !matches!(t.intent, Intent::Tick) {
            return;
        }
        let mut stderr = std::io::stderr();
        let _ = write!(
            stderr,
            "\r{} {:<11}",
            format_time(t.next.remaining_seconds),
            t.next.timer_mode.as_str()
        );
        let _ = stderr.flush();
    }
}

pub fn run(action: TimerAction, config: &Config) -> CliResult {
    let mut engine = app::open(config)?;

    match action {
        TimerAction::Status => {}
        TimerAction::Toggle => {
            engine.dispatch(Intent::ToggleTimer);
        }
        TimerAction::Reset => {
            engine.dispatch(Intent::ResetTimer);
        }
        TimerAction::Mode { mode } => {
            engine.dispatch(Intent::SetMode(mode));
        }
        TimerAction::Run { cycles } => {
            if !engine.state().is_running {
                engine.dispatch(Intent::ToggleTimer);
            }
            engine.subscribe(Countdown);

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let stop = async {
                if let Err(err) = tokio::signal::ctrl_c().await {
                    tracing::warn!(error = %err, "cannot listen for Ctrl-C");
                    std::future::pending::<()>().await;
                }
            };
            let DriveSummary { ticks, completions } =
                runtime.block_on(drive(&mut engine, stop, cycles));
            eprintln!();

            if engine.state().is_running {
                engine.dispatch(Intent::ToggleTimer);
            }
            return print_json(&RunReport {
                ticks,
                completions,
                timer: TimerStatus::of(engine.state()),
            });
        }
    }

    print_json(&TimerStatus::of(engine.state()))
}
