//! Error types for the core crate.

use crate::factory::TaskKind;

/// Result type for fallible core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur at the construction boundary.
///
/// Progress queries and setters never fail; they sanitize instead.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CoreError {
    /// A date string could not be parsed
    #[error(transparent)]
    Time(#[from] TimeParseError),

    /// A task could not be built from its arguments
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Date parsing error.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum TimeParseError {
    /// Input matched neither supported layout
    #[error("invalid date '{input}': use dd-mm-YYYY or dd-mm-YYYY HH:MM")]
    Invalid {
        /// The rejected input
        input: String,
    },
}

/// Task factory error.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum BuildError {
    /// No kind label was given
    #[error("task kind not provided")]
    MissingKind,

    /// The kind label is not one of the known task kinds
    #[error("unknown task kind '{0}': use reading, quiz, practice or project")]
    UnknownKind(String),

    /// A required argument for the kind is missing
    #[error("{kind} tasks require '{field}'")]
    MissingField {
        /// Kind being built
        kind: TaskKind,
        /// Name of the missing argument
        field: &'static str,
    },
}
