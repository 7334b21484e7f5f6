//! Form state controller
//!
//! Turns verdicts into the visual state of each input and owns the rules
//! for when fields are validated again. Rendering is left to the caller.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::config::FormConfig;
use crate::engine::{FieldSet, ValidationReport, validate, validate_field};
use crate::error::ValidationError;
use crate::messages::{Locale, strength_indicator_text};
use crate::types::{FieldName, StrengthTier, ValidationVerdict};

static PRISTINE: FieldState = FieldState::Pristine;

/// Visual state of one input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldState {
    /// Not validated yet, or error cleared by typing.
    #[default]
    Pristine,
    /// Shows the first error of the last verdict.
    Invalid(ValidationError),
    Valid,
}

impl FieldState {
    pub fn apply(&mut self, verdict: &ValidationVerdict) {
        *self = match verdict.first_error() {
            Some(error) if !verdict.is_valid => FieldState::Invalid(error.clone()),
            _ => FieldState::Valid,
        };
    }

    /// Typing into an input with a visible error hides that error.
    pub fn on_input(&mut self) {
        if matches!(self, FieldState::Invalid(_)) {
            *self = FieldState::Pristine;
        }
    }

    pub fn reset(&mut self) {
        *self = FieldState::Pristine;
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            FieldState::Invalid(error) => Some(error),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("A submission is already in progress")]
    AlreadySubmitting,
    #[error("Form is invalid, first invalid field: {field}")]
    Invalid { field: FieldName },
}

/// Registration form state: current values, per-field state, the password
/// strength indicator and the submission guard.
#[derive(Debug, Clone)]
pub struct FormController {
    values: FieldSet,
    states: BTreeMap<FieldName, FieldState>,
    strength: Option<StrengthTier>,
    submitting: bool,
    locale: Locale,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl FormController {
    pub fn new(locale: Locale) -> Self {
        let mut form = Self {
            values: FieldSet::new(),
            states: BTreeMap::new(),
            strength: None,
            submitting: false,
            locale,
        };
        form.reset();
        form
    }

    pub fn from_config(config: &FormConfig) -> Self {
        Self::new(config.locale)
    }

    pub fn values(&self) -> &FieldSet {
        &self.values
    }

    pub fn state(&self, field: FieldName) -> &FieldState {
        self.states.get(&field).unwrap_or(&PRISTINE)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Records a keystroke. Does not validate; callers validate on blur or
    /// after their debounce delay.
    pub fn input(&mut self, field: FieldName, value: &str) {
        self.values.set(field, value);
        self.state_mut(field).on_input();
    }

    /// Validates one field and updates its state.
    ///
    /// Validating the password also refreshes the strength indicator and
    /// validates a non-empty confirmation again, since its verdict depends
    /// on the password.
    pub fn validate_field(&mut self, field: FieldName) -> ValidationVerdict {
        let verdict = validate_field(&self.values, field);
        self.state_mut(field).apply(&verdict);

        if field == FieldName::Password {
            self.strength = if self.values.has_value(FieldName::Password) {
                verdict.strength
            } else {
                None
            };

            if self.values.has_value(FieldName::ConfirmPassword) {
                self.validate_field(FieldName::ConfirmPassword);
            }
        }

        verdict
    }

    /// Validates every field, including empty ones.
    pub fn validate_all(&mut self) -> ValidationReport {
        let mut fields = self.values.clone();
        for field in FieldName::ALL {
            if !fields.contains(field) {
                fields.set(field, "");
            }
        }

        let report = validate(&fields);
        for (field, verdict) in report.iter() {
            self.state_mut(field).apply(verdict);
        }
        self.strength = if fields.has_value(FieldName::Password) {
            report.get(FieldName::Password).and_then(|v| v.strength)
        } else {
            None
        };

        report
    }

    /// Field that should receive focus after a failed submission.
    pub fn first_invalid_field(&self) -> Option<FieldName> {
        FieldName::ALL
            .into_iter()
            .find(|field| matches!(self.state(*field), FieldState::Invalid(_)))
    }

    /// Error text currently shown under a field.
    pub fn error_message(&self, field: FieldName) -> Option<String> {
        self.state(field)
            .error()
            .map(|error| error.localized(self.locale))
    }

    pub fn strength(&self) -> Option<StrengthTier> {
        self.strength
    }

    /// Text of the strength indicator, `None` while it is hidden.
    pub fn strength_indicator(&self) -> Option<String> {
        self.strength
            .map(|tier| strength_indicator_text(tier, self.locale))
    }

    /// Starts a submission.
    ///
    /// # Errors
    /// - `SubmitError::AlreadySubmitting` while a previous submission runs
    /// - `SubmitError::Invalid` naming the field to focus
    pub fn begin_submit(&mut self) -> Result<FieldSet, SubmitError> {
        if self.submitting {
            return Err(SubmitError::AlreadySubmitting);
        }

        let report = self.validate_all();
        if let Some(field) = report.first_invalid() {
            #[cfg(feature = "tracing")]
            tracing::debug!(field = field.as_str(), "submission blocked by invalid field");
            return Err(SubmitError::Invalid { field });
        }

        self.submitting = true;
        Ok(self.values.clone())
    }

    /// Ends the submission started by [`begin_submit`](Self::begin_submit).
    /// A successful submission clears the form.
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.submitting = false;
        if succeeded {
            self.reset();
        }
    }

    /// Empties every value and returns all fields to `Pristine`.
    pub fn reset(&mut self) {
        self.values.clear();
        self.states = FieldName::ALL
            .into_iter()
            .map(|field| (field, FieldState::Pristine))
            .collect();
        self.strength = None;
    }

    fn state_mut(&mut self, field: FieldName) -> &mut FieldState {
        self.states.entry(field).or_default()
    }
}
