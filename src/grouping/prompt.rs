//! Prompt construction for the grouping model.

use std::fmt::Write;

use crate::task::Task;

/// Render the grouping prompt for a set of tasks.
///
/// The prompt carries the task inventory, the grouping rules, and the
/// required JSON response shape. It is model-agnostic.
#[must_use]
pub fn build_grouping_prompt(tasks: &[Task]) -> String {
    let mut inventory = String::new();
    for task in tasks {
        writeln!(
            inventory,
            "- {} (Priority: {}, Due: {}, Category: {})",
            task.title,
            task.priority,
            task.due_date
                .map_or_else(|| "No date".to_string(), |d| d.format("%Y-%m-%d").to_string()),
            task.category.as_deref().unwrap_or("None"),
        )
        .ok();
    }

    format!(
        "You are an intelligent task organization system. Analyze the tasks \
below and create meaningful, logical groups that help the user manage their \
work.

Tasks:
{inventory}
Grouping rules:
1. Priority-based groups: group tasks sharing a priority level, but only \
when more than one task has that level.
2. Time-based groups: group tasks due the same day, this week, or next \
week, only when more than one task carries a date.
3. Context-based groups: group tasks with similar themes (meetings, \
design, reviews, bugs, and so on).
4. A task may appear in several groups when the relationships are real; \
never force a grouping.
5. Confidence: 0.9-1.0 very strong, 0.8-0.9 strong, 0.7-0.8 moderate. Do \
not emit groups below 0.7.

Return ONLY a valid JSON object with this exact structure (no markdown, no \
code blocks):
{{
  \"groups\": [
    {{
      \"name\": \"group name\",
      \"description\": \"why these tasks belong together\",
      \"confidence\": 0.8,
      \"taskIndices\": [0, 1]
    }}
  ]
}}

Every group needs at least 2 tasks, a specific description, and \
taskIndices that are valid indices into the task list above."
    )
}
