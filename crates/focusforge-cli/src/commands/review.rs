use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use focusforge_core::time::{day_key, new_id, week_start};
use focusforge_core::{Config, Intent, WeeklyReview};

use crate::app::{self, print_json, CliResult};

#[derive(Subcommand)]
pub enum ReviewAction {
    /// Save (or overwrite) the review for a week
    Save {
        /// Any date in the week (YYYY-MM-DD); defaults to this week
        #[arg(long)]
        week: Option<NaiveDate>,
        /// Fields left out keep the week's saved answers
        #[arg(long)]
        wins: Option<String>,
        #[arg(long)]
        distractions: Option<String>,
        #[arg(long)]
        what_worked: Option<String>,
        #[arg(long)]
        improvement_plan: Option<String>,
    },
    /// Print all reviews as JSON
    List,
}

pub fn run(action: ReviewAction, config: &Config) -> CliResult {
    let mut engine = app::open(config)?;

    match action {
        ReviewAction::Save {
            week,
            wins,
            distractions,
            what_worked,
            improvement_plan,
        } => {
            let now = Utc::now();
            let week_start_date = week_start(week.unwrap_or_else(|| day_key(now)));
            let base = engine
                .state()
                .review_for(week_start_date)
                .cloned()
                .unwrap_or_else(|| WeeklyReview {
                    id: new_id(),
                    week_start_date,
                    wins: String::new(),
                    distractions: String::new(),
                    what_worked: String::new(),
                    improvement_plan: String::new(),
                    created_at: now,
                });

            engine.dispatch(Intent::SaveReview(WeeklyReview {
                wins: wins.unwrap_or(base.wins),
                distractions: distractions.unwrap_or(base.distractions),
                what_worked: what_worked.unwrap_or(base.what_worked),
                improvement_plan: improvement_plan.unwrap_or(base.improvement_plan),
                created_at: now,
                ..base
            }));
            if let Some(review) = engine.state().review_for(week_start_date) {
                print_json(review)?;
            }
        }
        ReviewAction::List => print_json(&engine.state().reviews)?,
    }
    Ok(())
}
