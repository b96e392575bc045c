//! Error types for collection import and configuration.

use thiserror::Error;

/// Why an imported card collection was refused.
///
/// Imports are all-or-nothing: when one of these is returned the session's
/// collection is exactly what it was before the call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RejectionReason {
    /// The payload could not be read or is not valid JSON.
    #[error("could not read collection payload: {message}")]
    ParseFailure { message: String },

    /// The payload is valid JSON but does not have the shape of a collection.
    #[error("collection payload is malformed: {0}")]
    MalformedStructure(StructureProblem),
}

impl RejectionReason {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Self::ParseFailure {
            message: message.into(),
        }
    }

    /// True for `ParseFailure`.
    #[must_use]
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Self::ParseFailure { .. })
    }

    /// True for `MalformedStructure`.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedStructure(_))
    }
}

impl From<StructureProblem> for RejectionReason {
    fn from(problem: StructureProblem) -> Self {
        Self::MalformedStructure(problem)
    }
}

/// Detail behind a `MalformedStructure` rejection.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StructureProblem {
    /// Top-level value is not an array.
    #[error("expected an array of cards")]
    NotAnArray,

    /// Array has no elements.
    #[error("the card array is empty")]
    EmptyArray,

    /// An element is not an object.
    #[error("card {index} is not an object")]
    NotAnObject { index: usize },

    /// An element lacks a required field, or the field is empty.
    #[error("card {index} has a missing or empty `{field}`")]
    MissingField { index: usize, field: &'static str },
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Seat index outside the two-player table.
    #[error("invalid seat {0}: only seats 0 and 1 exist")]
    InvalidSeat(u8),

    /// Configuration document is not valid JSON for `SessionConfig`.
    #[error("invalid session config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for collection import.
pub type ImportResult<T> = std::result::Result<T, RejectionReason>;
