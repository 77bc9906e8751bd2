//! Command implementations for taskline.

mod batch;
mod completions;
mod group;
mod parse;

pub use batch::batch;
pub use completions::completions;
pub use group::{groups, prompt};
pub use parse::parse;
