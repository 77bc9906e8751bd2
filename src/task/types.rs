use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Priority levels, ordered highest (`P1`) to lowest (`P4`).
///
/// Every task carries exactly one level; `P3` is the default when no
/// keyword in the input decides otherwise. The derived `Ord` sorts `P1`
/// first, which is the display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Priority {
    /// Highest priority.
    P1,
    /// Medium priority.
    P2,
    /// Normal priority (default).
    #[default]
    P3,
    /// Lowest priority.
    P4,
}

impl Priority {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::P4 => "P4",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured task produced by the parser.
///
/// Constructed once, atomically, via [`Task::new`]; any later mutation
/// (completing, rescheduling) is the host application's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    /// Input text with the date phrase, priority keywords, and category
    /// tag removed. May be empty if removals consumed the whole line.
    pub title: String,
    pub completed: bool,
    pub priority: Priority,
    /// Present only when a date phrase was recognized in the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Present only when the recognized phrase stated an explicit hour.
    /// Implies `due_date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_time: Option<NaiveDateTime>,
    /// First `#word` tag in the input, marker stripped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Task {
    /// Create a new task with a fresh identifier, not yet completed.
    #[must_use]
    pub fn new(
        title: String,
        priority: Priority,
        due_date: Option<NaiveDate>,
        due_time: Option<NaiveDateTime>,
        category: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            completed: false,
            priority,
            due_date,
            due_time,
            category,
        }
    }
}

/// A named group of tasks suggested by an external model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskGroup {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Model-reported strength of the grouping, 0.0 to 1.0.
    pub confidence: f64,
    pub tasks: Vec<Task>,
}

/// A full set of group suggestions with its generation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSuggestion {
    pub groups: Vec<TaskGroup>,
    pub timestamp: DateTime<Utc>,
}

/// Order tasks for display: incomplete first, then by priority (`P1`
/// first), then by due date ascending. Tasks without dates keep their
/// relative order.
pub fn sort_tasks(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| {
        a.completed
            .cmp(&b.completed)
            .then_with(|| a.priority.cmp(&b.priority))
            .then_with(|| match (a.due_date, b.due_date) {
                (Some(x), Some(y)) => x.cmp(&y),
                _ => Ordering::Equal,
            })
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(title: &str, priority: Priority) -> Task {
        Task::new(title.to_string(), priority, None, None, None)
    }

    #[test]
    fn test_priority_default_is_p3() {
        assert_eq!(Priority::default(), Priority::P3);
    }

    #[test]
    fn test_priority_order() {
        assert!(Priority::P1 < Priority::P2);
        assert!(Priority::P2 < Priority::P3);
        assert!(Priority::P3 < Priority::P4);
    }

    #[test]
    fn test_priority_display() {
        assert_eq!(Priority::P1.to_string(), "P1");
        assert_eq!(Priority::P4.to_string(), "P4");
    }

    #[test]
    fn test_new_task_is_not_completed() {
        let task = make_task("buy milk", Priority::P3);
        assert!(!task.completed);
        assert!(!task.id.is_empty());
    }

    #[test]
    fn test_new_tasks_get_distinct_ids() {
        let a = make_task("one", Priority::P3);
        let b = make_task("two", Priority::P3);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_task_serializes_camel_case() {
        let mut task = make_task("review budget", Priority::P1);
        task.due_date = NaiveDate::from_ymd_opt(2026, 8, 7);
        task.category = Some("finance".to_string());

        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"dueDate\":\"2026-08-07\""));
        assert!(json.contains("\"priority\":\"P1\""));
        assert!(json.contains("\"category\":\"finance\""));
        assert!(json.contains("\"completed\":false"));
    }

    #[test]
    fn test_task_omits_absent_optionals() {
        let task = make_task("buy milk", Priority::P3);
        let json = serde_json::to_string(&task).unwrap();
        assert!(!json.contains("dueDate"));
        assert!(!json.contains("dueTime"));
        assert!(!json.contains("category"));
    }

    #[test]
    fn test_task_round_trips_through_json() {
        let mut task = make_task("ship release", Priority::P2);
        task.due_date = NaiveDate::from_ymd_opt(2026, 12, 15);

        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();

        assert_eq!(back.title, "ship release");
        assert_eq!(back.priority, Priority::P2);
        assert_eq!(back.due_date, task.due_date);
    }

    #[test]
    fn test_sort_tasks_priority_order() {
        let mut tasks = vec![
            make_task("low", Priority::P4),
            make_task("high", Priority::P1),
            make_task("normal", Priority::P3),
        ];
        sort_tasks(&mut tasks);

        let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["high", "normal", "low"]);
    }

    #[test]
    fn test_sort_tasks_completed_last() {
        let mut done = make_task("done", Priority::P1);
        done.completed = true;
        let mut tasks = vec![done, make_task("open", Priority::P4)];
        sort_tasks(&mut tasks);

        assert_eq!(tasks[0].title, "open");
        assert_eq!(tasks[1].title, "done");
    }

    #[test]
    fn test_sort_tasks_due_date_breaks_ties() {
        let mut later = make_task("later", Priority::P2);
        later.due_date = NaiveDate::from_ymd_opt(2026, 9, 1);
        let mut sooner = make_task("sooner", Priority::P2);
        sooner.due_date = NaiveDate::from_ymd_opt(2026, 8, 10);

        let mut tasks = vec![later, sooner];
        sort_tasks(&mut tasks);

        assert_eq!(tasks[0].title, "sooner");
        assert_eq!(tasks[1].title, "later");
    }
}
