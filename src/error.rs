//! Error types.
//!
//! [`ValidationError`] describes why a field failed. It is carried inside
//! verdicts and never returned as `Err` by a validator.

use thiserror::Error;

use crate::types::FieldName;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} required")]
    Required(FieldName),
    #[error("{field} too short: at least {min} characters")]
    TooShort { field: FieldName, min: usize },
    #[error("{field} too long: at most {max} characters")]
    TooLong { field: FieldName, max: usize },
    #[error("{}", format_invalid_message(.0))]
    FormatInvalid(FieldName),
    #[error("passwords do not match")]
    Mismatch,
}

/// Fieldless classification of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Required,
    TooShort,
    TooLong,
    FormatInvalid,
    Mismatch,
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::Required(_) => ErrorKind::Required,
            ValidationError::TooShort { .. } => ErrorKind::TooShort,
            ValidationError::TooLong { .. } => ErrorKind::TooLong,
            ValidationError::FormatInvalid(_) => ErrorKind::FormatInvalid,
            ValidationError::Mismatch => ErrorKind::Mismatch,
        }
    }

    /// The field the error belongs to.
    pub fn field(&self) -> FieldName {
        match self {
            ValidationError::Required(field)
            | ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::FormatInvalid(field) => *field,
            ValidationError::Mismatch => FieldName::ConfirmPassword,
        }
    }
}

fn format_invalid_message(field: &FieldName) -> String {
    match field {
        FieldName::FullName => {
            "full name has invalid characters: only letters, spaces, hyphens and apostrophes are allowed"
                .to_string()
        }
        FieldName::Email => "email format invalid".to_string(),
        other => format!("{other} format invalid"),
    }
}

/// Errors raised when parsing names coming from outside the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),
    #[error("Unknown strength tier: {0}")]
    UnknownTier(String),
}
