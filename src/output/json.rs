//! JSON output formatting.

use serde::Serialize;
use serde_json::json;

use crate::error::TasklineError;
use crate::task::{GroupSuggestion, Task};

/// Format a single task as JSON.
///
/// # Errors
///
/// Returns `TasklineError::Json` if serialization fails.
pub fn format_task_json(task: &Task) -> Result<String, TasklineError> {
    Ok(serde_json::to_string_pretty(task)?)
}

/// Format tasks as a JSON envelope with a count.
///
/// # Errors
///
/// Returns `TasklineError::Json` if serialization fails.
pub fn format_tasks_json(tasks: &[Task]) -> Result<String, TasklineError> {
    let output = json!({
        "count": tasks.len(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a group suggestion as JSON.
///
/// # Errors
///
/// Returns `TasklineError::Json` if serialization fails.
pub fn format_groups_json(suggestion: &GroupSuggestion) -> Result<String, TasklineError> {
    Ok(serde_json::to_string_pretty(suggestion)?)
}

/// Generic JSON formatter for any serializable type.
///
/// # Errors
///
/// Returns `TasklineError::Json` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TasklineError> {
    Ok(serde_json::to_string_pretty(value)?)
}
