//! Error types for the form model.

use thiserror::Error;

/// Result type for form model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the form model.
///
/// None of these reach end users. The validation and submission entry points
/// log them and fail closed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A field carries constraint attributes that cannot be interpreted.
    #[error("Malformed field '{field}': {reason}")]
    MalformedField {
        /// Field name.
        field: String,
        /// What is wrong with it.
        reason: String,
    },

    /// No field with the given name exists in the form.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A form reference was expected but none was provided.
    #[error("Form reference is missing")]
    MissingForm,

    /// The global log subscriber could not be installed.
    #[error("Logging initialization failed: {0}")]
    Logging(String),
}

impl Error {
    /// Create a malformed field error.
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let err = Error::malformed("age", "minlength 'abc' is not a number");
        assert_eq!(
            err.to_string(),
            "Malformed field 'age': minlength 'abc' is not a number"
        );
    }
}
