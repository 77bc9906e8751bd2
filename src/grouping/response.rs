//! Decoding of the grouping model's response.

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::TasklineError;
use crate::task::{GroupSuggestion, Task, TaskGroup};

// Models often wrap JSON in Markdown fences despite instructions.
static FENCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"```json\n?|\n?```").unwrap_or_else(|e| panic!("Invalid fence regex: {e}"))
});

/// The wire shape the model is asked to produce.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSuggestion {
    groups: Vec<RawGroup>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGroup {
    name: String,
    #[serde(default)]
    description: Option<String>,
    confidence: f64,
    task_indices: Vec<usize>,
}

/// Decode a raw model response into a [`GroupSuggestion`].
///
/// Groups below `min_confidence` are dropped. A task index outside the
/// given slice is an error: silently misassembled groups are worse than a
/// failed decode.
///
/// # Errors
///
/// Returns `TasklineError::Json` when the response is not the requested
/// JSON shape, and `TasklineError::Grouping` for out-of-range indices.
pub fn parse_group_response(
    tasks: &[Task],
    raw: &str,
    min_confidence: f64,
) -> Result<GroupSuggestion, TasklineError> {
    let cleaned = FENCE_PATTERN.replace_all(raw, "");
    let parsed: RawSuggestion = serde_json::from_str(cleaned.trim())?;

    let mut groups = Vec::new();
    for raw_group in parsed.groups {
        if raw_group.confidence < min_confidence {
            continue;
        }

        let mut members = Vec::with_capacity(raw_group.task_indices.len());
        for index in raw_group.task_indices {
            let task = tasks.get(index).ok_or_else(|| {
                TasklineError::Grouping(format!(
                    "task index {index} out of range for {} tasks",
                    tasks.len()
                ))
            })?;
            members.push(task.clone());
        }

        groups.push(TaskGroup {
            id: Uuid::new_v4().to_string(),
            name: raw_group.name,
            description: raw_group.description,
            confidence: raw_group.confidence,
            tasks: members,
        });
    }

    Ok(GroupSuggestion {
        groups,
        timestamp: Utc::now(),
    })
}
