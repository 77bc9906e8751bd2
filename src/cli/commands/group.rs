//! The `prompt` and `groups` commands: the two halves of the external
//! model boundary.

use std::io::{self, Read};
use std::path::Path;

use crate::cli::args::{GroupsArgs, OutputFormat, PromptArgs};
use crate::config::Config;
use crate::error::TasklineError;
use crate::grouping::{build_grouping_prompt, parse_group_response};
use crate::output::format_groups;
use crate::task::Task;

/// Execute the prompt command.
///
/// # Errors
///
/// Returns `TasklineError::Io` if the task file or stdin cannot be read,
/// or `TasklineError::Json` if the task array does not decode.
pub fn prompt(args: &PromptArgs) -> Result<String, TasklineError> {
    let tasks = match &args.tasks {
        Some(path) => read_tasks_file(path)?,
        None => read_tasks_stdin()?,
    };

    Ok(build_grouping_prompt(&tasks))
}

/// Execute the groups command, reading the model response from stdin.
///
/// # Errors
///
/// Returns `TasklineError::Io` for unreadable inputs, `TasklineError::Json`
/// for undecodable JSON, and `TasklineError::Grouping` for responses that
/// reference tasks that do not exist.
pub fn groups(
    args: &GroupsArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<String, TasklineError> {
    let tasks = read_tasks_file(&args.tasks)?;

    let mut response = String::new();
    io::stdin().read_to_string(&mut response)?;

    let min_confidence = args
        .min_confidence
        .unwrap_or(config.grouping.min_confidence);
    let suggestion = parse_group_response(&tasks, &response, min_confidence)?;

    format_groups(&suggestion, format)
}

fn read_tasks_file(path: &Path) -> Result<Vec<Task>, TasklineError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn read_tasks_stdin() -> Result<Vec<Task>, TasklineError> {
    let mut contents = String::new();
    io::stdin().read_to_string(&mut contents)?;
    Ok(serde_json::from_str(&contents)?)
}
