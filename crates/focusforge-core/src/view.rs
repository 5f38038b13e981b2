//! Read-only projections of the snapshot used by the presentation layer.

use serde::{Deserialize, Serialize};

use crate::model::{AppState, Task};

/// Tasks admitted by the stored priority filter, completed tasks first,
/// then by priority (high, medium, low). Creation order breaks ties.
pub fn visible_tasks(state: &AppState) -> Vec<&Task> {
    let mut tasks: Vec<&Task> = state
        .tasks
        .iter()
        .filter(|t| state.task_priority_filter.admits(t.priority))
        .collect();
    tasks.sort_by_key(|t| (!t.is_completed, t.priority.rank()));
    tasks
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    pub completed: usize,
    pub pending: usize,
    /// Rounded percentage, 0 when there are no tasks.
    pub completion_rate: u32,
}

pub fn task_summary(tasks: &[Task]) -> TaskSummary {
    let completed = tasks.iter().filter(|t| t.is_completed).count();
    let completion_rate = if tasks.is_empty() {
        0
    } else {
        (completed as f64 / tasks.len() as f64 * 100.0).round() as u32
    };
    TaskSummary {
        completed,
        pending: tasks.len() - completed,
        completion_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, PriorityFilter};
    use chrono::Utc;

    fn task(id: &str, priority: Priority, done: bool) -> Task {
        Task {
            id: id.into(),
            title: id.into(),
            priority,
            is_completed: done,
            created_at: Utc::now(),
        }
    }

    fn ids(tasks: Vec<&Task>) -> Vec<&str> {
        tasks.into_iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn completed_first_then_by_priority() {
        let state = AppState {
            tasks: vec![
                task("low", Priority::Low, false),
                task("high-open", Priority::High, false),
                task("medium-done", Priority::Medium, true),
                task("high-done", Priority::High, true),
                task("medium", Priority::Medium, false),
            ],
            ..AppState::default()
        };
        assert_eq!(
            ids(visible_tasks(&state)),
            vec!["high-done", "medium-done", "high-open", "medium", "low"]
        );
    }

    #[test]
    fn filter_hides_other_priorities() {
        let state = AppState {
            tasks: vec![
                task("a", Priority::Low, false),
                task("b", Priority::High, false),
                task("c", Priority::Low, true),
            ],
            task_priority_filter: PriorityFilter::Low,
            ..AppState::default()
        };
        assert_eq!(ids(visible_tasks(&state)), vec!["c", "a"]);
    }

    #[test]
    fn summary_rounds_rate() {
        let tasks = vec![
            task("a", Priority::Low, true),
            task("b", Priority::Low, false),
            task("c", Priority::Low, false),
        ];
        let summary = task_summary(&tasks);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.pending, 2);
        assert_eq!(summary.completion_rate, 33);
        assert_eq!(task_summary(&[]).completion_rate, 0);
    }
}
