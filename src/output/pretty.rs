//! Human-readable colored output.

use std::fmt::Write;

use colored::{ColoredString, Colorize};

use crate::task::{GroupSuggestion, Priority, Task};

/// Format a single task for the terminal.
#[must_use]
pub fn format_task_pretty(task: &Task) -> String {
    let mut output = format!("{} {}\n", priority_badge(task.priority), task.title.bold());

    if let Some(due) = task.due_date {
        writeln!(output, "  {} {}", "Due:".cyan(), due.format("%Y-%m-%d")).ok();
    }
    if let Some(time) = task.due_time {
        writeln!(output, "  {} {}", "Time:".cyan(), time.format("%H:%M")).ok();
    }
    if let Some(category) = &task.category {
        writeln!(output, "  {} #{category}", "Category:".yellow()).ok();
    }

    output
}

/// Format a task list for the terminal, one line per task.
#[must_use]
pub fn format_tasks_pretty(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return format!("{}\n", "No tasks.".dimmed());
    }

    let mut output = format!("{} ({})\n", "Tasks".bold(), tasks.len());
    for task in tasks {
        let check = if task.completed {
            "✓".green()
        } else {
            "○".normal()
        };
        let mut line = format!("  {} {} {}", check, priority_badge(task.priority), task.title);

        if let Some(due) = task.due_date {
            line.push_str(&format!("  {}", due.format("%Y-%m-%d").to_string().cyan()));
        }
        if let Some(category) = &task.category {
            line.push_str(&format!("  {}", format!("#{category}").yellow()));
        }

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format group suggestions for the terminal.
#[must_use]
pub fn format_groups_pretty(suggestion: &GroupSuggestion) -> String {
    if suggestion.groups.is_empty() {
        return format!("{}\n", "No groups suggested.".dimmed());
    }

    let mut output = String::new();
    for group in &suggestion.groups {
        let confidence = format!("{:.0}%", group.confidence * 100.0);
        writeln!(
            output,
            "{} {}",
            group.name.bold(),
            format!("({confidence})").dimmed()
        )
        .ok();

        if let Some(description) = &group.description {
            writeln!(output, "  {}", description.dimmed()).ok();
        }
        for task in &group.tasks {
            writeln!(output, "  {} {}", priority_badge(task.priority), task.title).ok();
        }
        output.push('\n');
    }

    writeln!(
        output,
        "{} {}",
        "Generated:".dimmed(),
        suggestion.timestamp.format("%Y-%m-%d %H:%M UTC")
    )
    .ok();

    output
}

// Badge colors follow the task list UI scale: red down to green.
fn priority_badge(priority: Priority) -> ColoredString {
    match priority {
        Priority::P1 => "P1".red().bold(),
        Priority::P2 => "P2".yellow().bold(),
        Priority::P3 => "P3".blue(),
        Priority::P4 => "P4".green(),
    }
}
