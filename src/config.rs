//! Form configuration
//!
//! Reads the settings of the form collaborator from the environment.

use std::time::Duration;

use thiserror::Error;

use crate::messages::Locale;

pub const DEBOUNCE_ENV: &str = "REGFORM_DEBOUNCE_MS";
pub const LOCALE_ENV: &str = "REGFORM_LOCALE";

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid debounce delay in REGFORM_DEBOUNCE_MS: {0}")]
    InvalidDebounce(String),
    #[error("Unsupported locale in REGFORM_LOCALE: {0}")]
    UnknownLocale(String),
}

/// Settings for the UI side of validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormConfig {
    /// Quiet period before re-validating a field the user is typing in.
    pub debounce: Duration,
    /// Language of error messages and strength labels.
    pub locale: Locale,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            locale: Locale::default(),
        }
    }
}

impl FormConfig {
    /// Loads the configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `REGFORM_DEBOUNCE_MS`: debounce delay in milliseconds (default `300`)
    /// - `REGFORM_LOCALE`: `id` or `en`, region tags accepted (default `id`)
    ///
    /// Unset variables fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set to a value that cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(DEBOUNCE_ENV) {
            let millis = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidDebounce(raw.clone()))?;
            config.debounce = Duration::from_millis(millis);
        }

        if let Ok(raw) = std::env::var(LOCALE_ENV) {
            config.locale = raw.trim().parse().map_err(ConfigError::UnknownLocale)?;
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            debounce_ms = config.debounce.as_millis() as u64,
            locale = %config.locale,
            "Form configuration loaded"
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: env-mutating tests are serialized
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: env-mutating tests are serialized
        unsafe { std::env::remove_var(key); }
    }

    fn clear_env() {
        remove_env(DEBOUNCE_ENV);
        remove_env(LOCALE_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = FormConfig::from_env().expect("defaults should load");
        assert_eq!(config, FormConfig::default());
        assert_eq!(config.debounce, Duration::from_millis(300));
        assert_eq!(config.locale, Locale::Indonesian);
    }

    #[test]
    #[serial]
    fn test_from_env_custom_values() {
        clear_env();
        set_env(DEBOUNCE_ENV, "150");
        set_env(LOCALE_ENV, "en-US");

        let config = FormConfig::from_env().expect("valid values should load");
        assert_eq!(config.debounce, Duration::from_millis(150));
        assert_eq!(config.locale, Locale::English);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_debounce() {
        clear_env();
        set_env(DEBOUNCE_ENV, "soon");

        let result = FormConfig::from_env();
        assert_eq!(result, Err(ConfigError::InvalidDebounce("soon".to_string())));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_unknown_locale() {
        clear_env();
        set_env(LOCALE_ENV, "fr");

        match FormConfig::from_env() {
            Err(ConfigError::UnknownLocale(value)) => assert_eq!(value, "fr"),
            other => panic!("Expected UnknownLocale error, got {other:?}"),
        }

        clear_env();
    }
}
