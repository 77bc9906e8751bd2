//! Natural language task parsing.
//!
//! This module turns one line of free text into a structured [`crate::Task`]:
//! - "urgent meeting with team #work" -> P1, category "work"
//! - "Submit report by tomorrow at 5pm" -> due date and time set
//! - "Buy groceries" -> P3, nothing else

mod engine;

pub use engine::{parse_task, parse_task_with, PRIORITY_KEYWORDS};
