//! Error types for todoc-core.
//!
//! Shell transitions themselves are total. These errors only appear at the
//! edges: strict parsing of untyped input, configuration loading and the
//! platform presentation layer.

use thiserror::Error;

/// Errors raised while interpreting input to the shell.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// A tab name outside home/record/chat/community
    #[error("Unknown tab: {0}")]
    UnknownTab(String),
    /// Configuration failed to parse or validate
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Errors raised by a [`Presentation`](crate::presentation::Presentation) backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresentationError {
    /// Failed to run the document-root script
    #[error("Presentation script failed: {0}")]
    Script(String),
}

impl From<ShellError> for String {
    fn from(err: ShellError) -> String {
        err.to_string()
    }
}

impl From<PresentationError> for String {
    fn from(err: PresentationError) -> String {
        err.to_string()
    }
}

impl From<serde_json::Error> for ShellError {
    fn from(err: serde_json::Error) -> Self {
        ShellError::InvalidConfig(err.to_string())
    }
}
