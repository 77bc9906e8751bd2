//! The `batch` command: one task per stdin line.

use std::io::{self, BufRead};

use crate::cli::args::{BatchArgs, OutputFormat};
use crate::error::TasklineError;
use crate::output::format_tasks;
use crate::parser::parse_task;
use crate::task::sort_tasks;

/// Execute the batch command, reading lines from standard input.
///
/// # Errors
///
/// Returns `TasklineError::Io` if reading stdin fails, or
/// `TasklineError::Json` if output formatting fails.
pub fn batch(args: &BatchArgs, format: OutputFormat) -> Result<String, TasklineError> {
    let stdin = io::stdin();
    let mut tasks = Vec::new();

    for line in stdin.lock().lines() {
        // Blank lines are skipped, not errors.
        if let Some(task) = parse_task(&line?) {
            tasks.push(task);
        }
    }

    if args.sort {
        sort_tasks(&mut tasks);
    }

    format_tasks(&tasks, format)
}
