//! Length rule - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

/// Counted in chars, not UTF-16 units: JavaScript `length` counts an emoji as 2.
pub const MIN_LENGTH: usize = 8;

/// Satisfied when the password has at least [`MIN_LENGTH`] characters.
pub fn min_length_rule(password: &SecretString) -> bool {
    password.expose_secret().chars().count() >= MIN_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_rule_too_short() {
        let pwd = SecretString::new("Short1!".to_string().into());
        assert!(!min_length_rule(&pwd));
    }

    #[test]
    fn test_length_rule_exactly_minimum() {
        let pwd = SecretString::new("12345678".to_string().into());
        assert!(min_length_rule(&pwd));
    }

    #[test]
    fn test_length_rule_counts_chars_not_bytes() {
        // 7 chars, 14 bytes
        let pwd = SecretString::new("ééééééé".to_string().into());
        assert!(!min_length_rule(&pwd));
    }

    #[test]
    fn test_length_rule_emoji_count_once() {
        // 4 chars, 8 UTF-16 units
        let pwd = SecretString::new("😀😀😀😀".to_string().into());
        assert!(!min_length_rule(&pwd));
    }
}
