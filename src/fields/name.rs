//! Full name validator.

use crate::error::ValidationError;
use crate::types::{FieldName, ValidationVerdict};

/// Counted in chars after trimming, not UTF-16 units as in JavaScript `length`.
pub const MIN_NAME_LENGTH: usize = 3;
/// Counted in chars after trimming, not UTF-16 units as in JavaScript `length`.
pub const MAX_NAME_LENGTH: usize = 100;

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, ' ' | '-' | '\'')
}

/// Validates a full name after trimming surrounding whitespace.
///
/// Checks run in priority order (required, too short, too long, invalid
/// characters) and the first failure is reported.
pub fn validate_full_name(name: &str) -> ValidationVerdict {
    let name = name.trim();
    let len = name.chars().count();

    let error = if name.is_empty() {
        ValidationError::Required(FieldName::FullName)
    } else if len < MIN_NAME_LENGTH {
        ValidationError::TooShort {
            field: FieldName::FullName,
            min: MIN_NAME_LENGTH,
        }
    } else if len > MAX_NAME_LENGTH {
        ValidationError::TooLong {
            field: FieldName::FullName,
            max: MAX_NAME_LENGTH,
        }
    } else if !name.chars().all(is_name_char) {
        ValidationError::FormatInvalid(FieldName::FullName)
    } else {
        return ValidationVerdict::valid();
    };

    ValidationVerdict::invalid(error)
}
