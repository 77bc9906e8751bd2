//! Output formatting for taskline.
//!
//! Every command renders either human-readable colored text or JSON,
//! selected by the global `--output` flag.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::TasklineError;
use crate::task::{GroupSuggestion, Task};

pub use json::*;
pub use pretty::*;

/// Format a single task based on output format.
///
/// # Errors
///
/// Returns `TasklineError::Json` if JSON serialization fails.
pub fn format_task(task: &Task, format: OutputFormat) -> Result<String, TasklineError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(task)),
        OutputFormat::Json => format_task_json(task),
    }
}

/// Format a list of tasks based on output format.
///
/// # Errors
///
/// Returns `TasklineError::Json` if JSON serialization fails.
pub fn format_tasks(tasks: &[Task], format: OutputFormat) -> Result<String, TasklineError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks)),
        OutputFormat::Json => format_tasks_json(tasks),
    }
}

/// Format a group suggestion based on output format.
///
/// # Errors
///
/// Returns `TasklineError::Json` if JSON serialization fails.
pub fn format_groups(
    suggestion: &GroupSuggestion,
    format: OutputFormat,
) -> Result<String, TasklineError> {
    match format {
        OutputFormat::Pretty => Ok(format_groups_pretty(suggestion)),
        OutputFormat::Json => format_groups_json(suggestion),
    }
}
