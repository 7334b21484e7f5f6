//! Email format validator.
//!
//! Accepted grammar, a subset of RFC 5321/5322 addresses:
//!
//! ```text
//! address = local "@" domain
//! local   = atom *("." atom)          ; 1..=64 chars
//! atom    = 1*atext                   ; A-Z a-z 0-9 ! # $ % & ' * + / = ? ^ _ ` { | } ~ -
//! domain  = label 1*("." label)       ; 1..=253 chars, at least two labels
//! label   = alnum [*61(alnum / "-") alnum]
//! ```
//!
//! Quoted local parts, IP literals and internationalized addresses are
//! rejected. Hyphens inside a label may repeat (`xn--p1ai`).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::types::{FieldName, ValidationVerdict};

pub const MAX_LOCAL_LENGTH: usize = 64;
pub const MAX_DOMAIN_LENGTH: usize = 253;
pub const MAX_LABEL_LENGTH: usize = 63;

static LOCAL_PART: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$")
        .unwrap()
});

static DOMAIN_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$").unwrap());

/// Returns whether the trimmed input is a well-formed address.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.len() > MAX_LOCAL_LENGTH || !LOCAL_PART.is_match(local) {
        return false;
    }

    if domain.len() > MAX_DOMAIN_LENGTH {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| DOMAIN_LABEL.is_match(label))
}

/// Validates the email field: empty after trimming is `Required`,
/// otherwise the address must satisfy [`is_valid_email`].
pub fn validate_email(email: &str) -> ValidationVerdict {
    if email.trim().is_empty() {
        return ValidationVerdict::invalid(ValidationError::Required(FieldName::Email));
    }

    if !is_valid_email(email) {
        return ValidationVerdict::invalid(ValidationError::FormatInvalid(FieldName::Email));
    }

    ValidationVerdict::valid()
}
