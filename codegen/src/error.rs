use error_stack::Report;
use itertools::Itertools;
use thiserror::Error;

// Error message prefixes
const MSG_INVALID_PREFIX: &str = "Invalid";
const MSG_FAILED_TO_PREFIX: &str = "Failed to";

/// Result type for the `buildable_codegen` library
pub type Result<T> = std::result::Result<T, error_stack::Report<Error>>;

/// Errors raised while parsing type expressions, modelling records, and emitting artifacts.
///
/// Precondition failures (not a record, no companion scope) are not errors: they are
/// reported as warning diagnostics and the candidate is skipped. An incomplete partial is
/// not an error either: `build` simply yields `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The text of a field type does not match the type-expression grammar.
    #[error("Malformed type expression '{text}' at offset {offset}")]
    MalformedTypeExpression {
        /// The full text that failed to parse
        text:   String,
        /// Byte offset at which parsing stopped
        offset: usize,
    },

    /// A field of a record could not be modelled; the underlying cause is attached below it.
    #[error("Invalid field `{field}` of record `{record}`")]
    InvalidField {
        /// Name of the owning record
        record: String,
        /// Name of the offending field
        field:  String,
    },

    /// A name derived from a descriptor is not a usable Rust identifier.
    #[error("{0}")]
    InvalidIdentifier(String),

    /// Input handed over by the host violates an assumption of the core.
    #[error("Invariant violated: {0}")]
    InvariantViolated(String),

    /// Writing a generated artifact failed.
    #[error("File operation failed: {0}")]
    FileOperation(String),
}

impl Error {
    /// Create a malformed type expression error
    pub fn malformed(text: &str, offset: usize) -> Self {
        Self::MalformedTypeExpression {
            text: text.to_string(),
            offset,
        }
    }

    /// Create an invalid field error
    pub fn invalid_field(record: &str, field: &str) -> Self {
        Self::InvalidField {
            record: record.to_string(),
            field:  field.to_string(),
        }
    }

    /// Create an "Invalid identifier" error
    pub fn invalid_identifier(what: &str, name: impl std::fmt::Display) -> Self {
        Self::InvalidIdentifier(format!("{MSG_INVALID_PREFIX} {what} identifier: `{name}`"))
    }

    /// Create an invariant violation
    pub fn invariant(details: impl std::fmt::Display) -> Self {
        Self::InvariantViolated(details.to_string())
    }

    /// Create error for IO operations
    pub fn io_failed(
        operation: &str,
        path: &std::path::Path,
        error: impl std::fmt::Display,
    ) -> Self {
        Self::FileOperation(format!(
            "{MSG_FAILED_TO_PREFIX} {operation} {}: {error}",
            path.display()
        ))
    }

    /// The field this error points at, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidField { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }
}

/// Every error in the report, outermost first, joined with `: `. Attachments are dropped.
pub fn describe(report: &Report<Error>) -> String {
    report
        .frames()
        .filter_map(|frame| frame.downcast_ref::<Error>())
        .map(ToString::to_string)
        .join(": ")
}
