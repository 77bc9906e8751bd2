//! Task data model.
//!
//! This module defines the structured record the parser produces, the
//! priority scale, and the group types used at the external-model boundary.

mod types;

pub use types::{sort_tasks, GroupSuggestion, Priority, Task, TaskGroup};
