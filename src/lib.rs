//! Registration form validation library
//!
//! This library validates the fields of a user registration form (full
//! name, email, password and its confirmation), scores password strength
//! and tracks the visual state of each input.
//!
//! # Features
//!
//! - `async` (default): Enables debounced re-validation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `REGFORM_DEBOUNCE_MS`: Debounce delay for typing-triggered validation
//!   (default: `300`)
//! - `REGFORM_LOCALE`: Language of messages, `id` or `en` (default: `id`)
//!
//! # Example
//!
//! ```rust,no_run
//! use regform_validation::{FieldName, FieldSet, strength_label, validate};
//!
//! let fields = FieldSet::new()
//!     .with(FieldName::FullName, "Mary Jane O'Brien")
//!     .with(FieldName::Email, "mary@example.com")
//!     .with(FieldName::Password, "Secret123!")
//!     .with(FieldName::ConfirmPassword, "Secret123!");
//!
//! let report = validate(&fields);
//! assert!(report.is_valid());
//!
//! if let Some(tier) = report.get(FieldName::Password).and_then(|v| v.strength) {
//!     println!("Kekuatan Password: {}", strength_label(tier));
//! }
//! ```

// Internal modules
mod config;
mod engine;
mod error;
mod evaluator;
mod fields;
mod form;
mod messages;
mod rules;
mod types;

#[cfg(feature = "async")]
mod debounce;

// Public API
pub use config::{ConfigError, DEBOUNCE_ENV, DEFAULT_DEBOUNCE, FormConfig, LOCALE_ENV};
pub use engine::{FieldSet, ValidationReport, validate, validate_field};
pub use error::{ErrorKind, ParseError, ValidationError};
pub use evaluator::{score_password, validate_password};
pub use fields::{
    MAX_DOMAIN_LENGTH, MAX_LABEL_LENGTH, MAX_LOCAL_LENGTH, MAX_NAME_LENGTH, MIN_NAME_LENGTH,
    is_valid_email, passwords_match, validate_confirm_password, validate_email,
    validate_full_name,
};
pub use form::{FieldState, FormController, SubmitError};
pub use messages::{
    Locale, strength_indicator_text, strength_label, strength_label_for, strength_label_str,
};
pub use rules::{
    MIN_LENGTH as MIN_PASSWORD_LENGTH, RULES, RuleCheck, SYMBOLS, ScoringRule, satisfied_rules,
};
pub use types::{FieldName, PasswordScore, StrengthTier, ValidationVerdict};

#[cfg(feature = "async")]
pub use debounce::{Debouncer, FieldVerdict, validate_field_tx};
