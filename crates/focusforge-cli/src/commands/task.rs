//! Task management commands for CLI.

use clap::Subcommand;
use focusforge_core::intent::NewTask;
use focusforge_core::{visible_tasks, Config, Intent, Priority, PriorityFilter};

use crate::app::{self, print_json, CliResult};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task
    Add {
        /// Task title
        title: String,
        /// high, medium or low
        #[arg(long, default_value = "medium")]
        priority: Priority,
    },
    /// Flip a task between pending and completed
    Toggle {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
    /// Set the stored priority filter (all, high, medium, low)
    Filter { filter: PriorityFilter },
    /// List tasks through the priority filter, completed first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: TaskAction, config: &Config) -> CliResult {
    let mut engine = app::open(config)?;

    match action {
        TaskAction::Add { title, priority } => {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err("task title must not be empty".into());
            }
            engine.dispatch(Intent::AddTask(NewTask { title, priority }));
            if let Some(task) = engine.state().tasks.last() {
                print_json(task)?;
            }
        }
        TaskAction::Toggle { id } => {
            if engine.state().task(&id).is_none() {
                return Err(format!("task not found: {id}").into());
            }
            engine.dispatch(Intent::ToggleTask(id.clone()));
            if let Some(task) = engine.state().task(&id) {
                print_json(task)?;
            }
        }
        TaskAction::Delete { id } => {
            if !engine.dispatch(Intent::DeleteTask(id.clone())) {
                return Err(format!("task not found: {id}").into());
            }
            println!("Task deleted: {id}");
        }
        TaskAction::Filter { filter } => {
            engine.dispatch(Intent::SetTaskPriorityFilter(filter));
            println!("Task filter: {filter}");
        }
        TaskAction::List { json } => {
            let tasks = visible_tasks(engine.state());
            if json {
                print_json(&tasks)?;
            } else if tasks.is_empty() {
                println!("No tasks.");
            } else {
                for task in tasks {
                    let mark = if task.is_completed { 'x' } else { ' ' };
                    println!("[{mark}] {:<6} {}  ({})", task.priority.as_str(), task.title, task.id);
                }
            }
        }
    }
    Ok(())
}
