use clap::{Parser, Subcommand};
use focusforge_core::Config;

mod app;
mod commands;
mod cues;
mod logging;

#[derive(Parser)]
#[command(name = "focusforge", version, about = "FocusForge CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Notes
    Note {
        #[command(subcommand)]
        action: commands::note::NoteAction,
    },
    /// Distraction log
    Distraction {
        #[command(subcommand)]
        action: commands::distraction::DistractionAction,
    },
    /// Weekly reviews
    Review {
        #[command(subcommand)]
        action: commands::review::ReviewAction,
    },
    /// Timer durations and background music
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Focus statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Light/dark theme
    Theme {
        #[command(subcommand)]
        action: commands::theme::ThemeAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load_or_default();
    logging::init(&config.logging.level);

    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action, &config),
        Commands::Task { action } => commands::task::run(action, &config),
        Commands::Note { action } => commands::note::run(action, &config),
        Commands::Distraction { action } => commands::distraction::run(action, &config),
        Commands::Review { action } => commands::review::run(action, &config),
        Commands::Settings { action } => commands::settings::run(action, &config),
        Commands::Stats { action } => commands::stats::run(action, &config),
        Commands::Theme { action } => commands::theme::run(action, &config),
        Commands::Config { action } => commands::config::run(action, config),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
