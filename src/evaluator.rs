//! Password validator - scoring and pass/fail verdict.

use secrecy::{ExposeSecret, SecretString};

use crate::error::ValidationError;
use crate::rules::{MIN_LENGTH, min_length_rule, total_score};
use crate::types::{FieldName, PasswordScore, ValidationVerdict};

/// Scores a password against every rule and derives its strength tier.
pub fn score_password(password: &SecretString) -> PasswordScore {
    PasswordScore::new(total_score(password))
}

/// Validates a password.
///
/// Only the length rule decides validity; the remaining rules feed the
/// score and strength, which are reported for valid and invalid passwords
/// alike.
///
/// # Returns
/// A `ValidationVerdict` with `strength` and `score` always set.
pub fn validate_password(password: &SecretString) -> ValidationVerdict {
    if password.expose_secret().is_empty() {
        return ValidationVerdict::invalid(ValidationError::Required(FieldName::Password))
            .with_score(PasswordScore::new(0));
    }

    let score = score_password(password);

    #[cfg(feature = "tracing")]
    tracing::debug!(score = score.score, strength = %score.strength, "password scored");

    let verdict = if min_length_rule(password) {
        ValidationVerdict::valid()
    } else {
        ValidationVerdict::invalid(ValidationError::TooShort {
            field: FieldName::Password,
            min: MIN_LENGTH,
        })
    };

    verdict.with_score(score)
}
