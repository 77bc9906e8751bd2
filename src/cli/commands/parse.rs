//! The `parse` command: one line in, one task out.

use crate::cli::args::{OutputFormat, ParseArgs};
use crate::error::TasklineError;
use crate::output::format_task;
use crate::parser::parse_task;

/// Execute the parse command.
///
/// # Errors
///
/// Returns `TasklineError::EmptyInput` if the text is empty after
/// trimming, or `TasklineError::Json` if output formatting fails.
pub fn parse(args: &ParseArgs, format: OutputFormat) -> Result<String, TasklineError> {
    let text = args.text.join(" ");

    let task = parse_task(&text).ok_or(TasklineError::EmptyInput)?;
    format_task(&task, format)
}
