//! Error types for taskline.

use thiserror::Error;

/// Errors surfaced by taskline operations.
///
/// The parser itself never fails: empty input is signaled by returning
/// `None`, and everything else degrades to a best-effort task. These
/// variants cover the surrounding CLI, config, and grouping surfaces.
#[derive(Error, Debug)]
pub enum TasklineError {
    /// The CLI was handed input with no content to parse.
    #[error("nothing to parse: input is empty")]
    EmptyInput,

    /// Configuration could not be read, parsed, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A grouping response from the external model could not be decoded.
    #[error("Grouping response error: {0}")]
    Grouping(String),
}
