//! Character variety rules - uppercase, lowercase, digits, symbols.

use secrecy::{ExposeSecret, SecretString};

/// Punctuation counted by [`symbol_rule`].
pub const SYMBOLS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

pub fn uppercase_rule(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_uppercase())
}

pub fn lowercase_rule(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_lowercase())
}

pub fn digit_rule(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_digit())
}

/// Only characters from [`SYMBOLS`] count; other punctuation and
/// whitespace do not.
pub fn symbol_rule(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| SYMBOLS.contains(c))
}
