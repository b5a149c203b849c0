use thiserror::Error;

use crate::domain::refname::RefNameViolation;

/// Errors raised while turning a format string into a tag
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Malformed command at byte {position}: {reason}")]
    MalformedCommand { position: usize, reason: String },

    #[error("Unknown command: {{{0}}}")]
    UnknownCommand(String),

    #[error("Command {{{command}}} requires a date but none was supplied")]
    MissingDate { command: String },

    #[error("Invalid tag '{tag}': {}", join_violations(.violations))]
    InvalidTag {
        tag: String,
        violations: Vec<RefNameViolation>,
    },
}

fn join_violations(violations: &[RefNameViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl FormatError {
    pub(crate) fn malformed(position: usize, reason: impl Into<String>) -> Self {
        FormatError::MalformedCommand {
            position,
            reason: reason.into(),
        }
    }

    /// Violations carried by an `InvalidTag` error, empty for every other kind
    pub fn violations(&self) -> &[RefNameViolation] {
        match self {
            FormatError::InvalidTag { violations, .. } => violations,
            _ => &[],
        }
    }
}

/// Unified error type for tag-format operations
#[derive(Error, Debug)]
pub enum TagFormatError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Date parsing error: {0}")]
    Date(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in tag-format
pub type Result<T> = std::result::Result<T, TagFormatError>;

impl TagFormatError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TagFormatError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        TagFormatError::Version(msg.into())
    }

    /// Create a date error with context
    pub fn date(msg: impl Into<String>) -> Self {
        TagFormatError::Date(msg.into())
    }
}
