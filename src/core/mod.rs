//! Core abstractions for taskline.
//!
//! This module provides the date phrase recognizer the parser delegates to.

mod datetime;

pub use datetime::{DateMatch, DateRecognizer, NaturalDateRecognizer};

#[cfg(test)]
pub use datetime::MockDateRecognizer;
