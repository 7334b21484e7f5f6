//! Password confirmation validator.

use secrecy::{ExposeSecret, SecretString};

use crate::error::ValidationError;
use crate::types::{FieldName, ValidationVerdict};

/// Case-sensitive equality; an empty value on either side never matches.
pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    !password.is_empty() && !confirmation.is_empty() && password == confirmation
}

/// Validates the confirmation against the current primary password.
///
/// An empty confirmation is reported as `Required` before any comparison.
pub fn validate_confirm_password(
    password: &SecretString,
    confirmation: &SecretString,
) -> ValidationVerdict {
    let confirmation = confirmation.expose_secret();

    if confirmation.is_empty() {
        return ValidationVerdict::invalid(ValidationError::Required(FieldName::ConfirmPassword));
    }

    if !passwords_match(password.expose_secret(), confirmation) {
        return ValidationVerdict::invalid(ValidationError::Mismatch);
    }

    ValidationVerdict::valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_passwords_match() {
        assert!(passwords_match("Secret123!", "Secret123!"));
        assert!(!passwords_match("Secret123!", "secret123!"));
        assert!(!passwords_match("", ""));
        assert!(!passwords_match("", "Secret123!"));
    }

    #[test]
    fn test_confirm_required_checked_first() {
        let verdict = validate_confirm_password(&secret(""), &secret(""));
        assert_eq!(
            verdict.errors,
            vec![ValidationError::Required(FieldName::ConfirmPassword)]
        );
    }

    #[test]
    fn test_confirm_mismatch() {
        let verdict = validate_confirm_password(&secret("Secret123!"), &secret("Secret123"));
        assert_eq!(verdict.errors, vec![ValidationError::Mismatch]);
    }

    #[test]
    fn test_confirm_against_empty_password() {
        let verdict = validate_confirm_password(&secret(""), &secret("Secret123!"));
        assert_eq!(verdict.errors, vec![ValidationError::Mismatch]);
    }

    #[test]
    fn test_confirm_match() {
        let verdict = validate_confirm_password(&secret("Secret123!"), &secret("Secret123!"));
        assert!(verdict.is_valid);
        assert!(verdict.strength.is_none());
        assert!(verdict.score.is_none());
    }

    #[test]
    fn test_confirm_is_not_trimmed() {
        let verdict = validate_confirm_password(&secret("Secret123!"), &secret("Secret123! "));
        assert!(!verdict.is_valid);
    }
}
