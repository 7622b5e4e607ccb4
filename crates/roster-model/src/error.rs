//! Per-record error type.

use thiserror::Error;

/// Errors recovered at record scope.
///
/// A record that fails is logged with its identifier and skipped; the run
/// continues with the next record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A required column was absent.
    #[error("student {identifier} is missing {field}")]
    MissingField {
        field: &'static str,
        identifier: String,
    },

    /// A column held a value that could not be interpreted.
    #[error("student {identifier} has invalid {field} value {value:?}")]
    InvalidField {
        field: &'static str,
        value: String,
        identifier: String,
    },

    /// The secondary proficiency lookup failed.
    #[error("proficiency lookup failed: {message}")]
    Lookup { message: String },
}
