//! Validation engine - runs the right validator for every submitted field.

use std::collections::BTreeMap;

use secrecy::{ExposeSecret, SecretString};

use crate::error::ParseError;
use crate::evaluator::validate_password;
use crate::fields::{validate_confirm_password, validate_email, validate_full_name};
use crate::types::{FieldName, ValidationVerdict};

fn secret(value: &str) -> SecretString {
    SecretString::new(value.to_string().into())
}

/// Raw field values submitted in one validation pass.
///
/// Only fields present in the set are validated. Values are held as
/// secrets so `Debug` output never contains user input.
#[derive(Debug, Default)]
pub struct FieldSet {
    values: BTreeMap<FieldName, SecretString>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a field value.
    pub fn with(mut self, field: FieldName, value: &str) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: FieldName, value: &str) {
        self.values.insert(field, secret(value));
    }

    /// Marks a field as present; a missing (null) value is stored as empty
    /// so it validates as `Required`.
    pub fn insert(&mut self, field: FieldName, value: Option<&str>) {
        self.set(field, value.unwrap_or_default());
    }

    /// Builds a set from wire-named pairs such as `("fullName", "Ada")`.
    ///
    /// # Errors
    /// Returns `ParseError::UnknownField` for a name outside the form.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let mut fields = Self::new();
        for (name, value) in pairs {
            fields.insert(name.parse()?, value);
        }
        Ok(fields)
    }

    pub fn get(&self, field: FieldName) -> Option<&SecretString> {
        self.values.get(&field)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.values.contains_key(&field)
    }

    /// Whether the field is present with a non-empty value.
    pub fn has_value(&self, field: FieldName) -> bool {
        self.get(field)
            .is_some_and(|value| !value.expose_secret().is_empty())
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.values.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl Clone for FieldSet {
    fn clone(&self) -> Self {
        let values = self
            .values
            .iter()
            .map(|(field, value)| (*field, secret(value.expose_secret())))
            .collect();
        Self { values }
    }
}

/// Per-field verdicts for one validation pass, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    verdicts: BTreeMap<FieldName, ValidationVerdict>,
}

impl ValidationReport {
    pub fn get(&self, field: FieldName) -> Option<&ValidationVerdict> {
        self.verdicts.get(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &ValidationVerdict)> {
        self.verdicts.iter().map(|(field, verdict)| (*field, verdict))
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    /// Form-level validity: every verdict must be valid.
    pub fn is_valid(&self) -> bool {
        self.verdicts.values().all(|verdict| verdict.is_valid)
    }

    /// First invalid field in form order.
    pub fn first_invalid(&self) -> Option<FieldName> {
        self.iter()
            .find(|(_, verdict)| !verdict.is_valid)
            .map(|(field, _)| field)
    }

    pub fn into_inner(self) -> BTreeMap<FieldName, ValidationVerdict> {
        self.verdicts
    }
}

/// Validates a single field of the set. An absent field is validated as
/// empty.
///
/// The confirmation is compared against the password currently in the
/// set. The engine does not track changes: after the password changes,
/// callers must validate the confirmation again.
pub fn validate_field(fields: &FieldSet, field: FieldName) -> ValidationVerdict {
    let empty = secret("");
    let value = fields.get(field).unwrap_or(&empty);

    match field {
        FieldName::FullName => validate_full_name(value.expose_secret()),
        FieldName::Email => validate_email(value.expose_secret()),
        FieldName::Password => validate_password(value),
        FieldName::ConfirmPassword => {
            let password = fields.get(FieldName::Password).unwrap_or(&empty);
            validate_confirm_password(password, value)
        }
    }
}

/// Validates every field present in the set.
pub fn validate(fields: &FieldSet) -> ValidationReport {
    let verdicts: BTreeMap<_, _> = fields
        .fields()
        .map(|field| (field, validate_field(fields, field)))
        .collect();

    let report = ValidationReport { verdicts };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        fields = report.len(),
        valid = report.is_valid(),
        first_invalid = ?report.first_invalid(),
        "field set validated"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ValidationError};
    use crate::types::StrengthTier;

    fn complete_form() -> FieldSet {
        FieldSet::new()
            .with(FieldName::FullName, "Mary Jane O'Brien")
            .with(FieldName::Email, "mary@example.com")
            .with(FieldName::Password, "Secret123!")
            .with(FieldName::ConfirmPassword, "Secret123!")
    }

    #[test]
    fn test_validate_complete_form() {
        let report = validate(&complete_form());

        assert_eq!(report.len(), 4);
        assert!(report.is_valid());
        assert_eq!(report.first_invalid(), None);

        let password = report.get(FieldName::Password).unwrap();
        assert_eq!(password.strength, Some(StrengthTier::Strong));
        assert_eq!(password.score, Some(100));
    }

    #[test]
    fn test_only_present_fields_are_validated() {
        let fields = FieldSet::new().with(FieldName::Email, "a@b.co");
        let report = validate(&fields);

        assert_eq!(report.len(), 1);
        assert!(report.get(FieldName::FullName).is_none());
        assert!(report.is_valid());
    }

    #[test]
    fn test_empty_field_set() {
        let report = validate(&FieldSet::new());
        assert!(report.is_empty());
        assert!(report.is_valid());
    }

    #[test]
    fn test_aggregate_validity_is_and() {
        let fields = complete_form().with(FieldName::ConfirmPassword, "Secret123?");
        let report = validate(&fields);

        assert!(!report.is_valid());
        assert_eq!(report.first_invalid(), Some(FieldName::ConfirmPassword));
        assert!(report.get(FieldName::Password).unwrap().is_valid);
    }

    #[test]
    fn test_first_invalid_follows_form_order() {
        let fields = complete_form()
            .with(FieldName::ConfirmPassword, "")
            .with(FieldName::Email, "broken");
        assert_eq!(validate(&fields).first_invalid(), Some(FieldName::Email));
    }

    #[test]
    fn test_confirm_without_password_field() {
        let fields = FieldSet::new().with(FieldName::ConfirmPassword, "Secret123!");
        let report = validate(&fields);

        assert_eq!(
            report.get(FieldName::ConfirmPassword).unwrap().errors,
            vec![ValidationError::Mismatch]
        );
    }

    #[test]
    fn test_null_value_is_required() {
        let fields = FieldSet::from_pairs([("fullName", None), ("email", Some("a@b.co"))])
            .expect("known fields");
        let report = validate(&fields);

        let name = report.get(FieldName::FullName).unwrap();
        assert_eq!(name.first_error().map(|e| e.kind()), Some(ErrorKind::Required));
        assert!(report.get(FieldName::Email).unwrap().is_valid);
    }

    #[test]
    fn test_from_pairs_unknown_field() {
        let result = FieldSet::from_pairs([("username", Some("ada"))]);
        assert_eq!(
            result.unwrap_err(),
            ParseError::UnknownField("username".to_string())
        );
    }

    #[test]
    fn test_validate_field_absent_is_empty() {
        let verdict = validate_field(&FieldSet::new(), FieldName::Password);
        assert_eq!(
            verdict.errors,
            vec![ValidationError::Required(FieldName::Password)]
        );
    }

    #[test]
    fn test_validation_is_idempotent() {
        let fields = complete_form().with(FieldName::FullName, "Jo");
        assert_eq!(validate(&fields), validate(&fields));
    }

    #[test]
    fn test_clone_keeps_values() {
        let fields = complete_form();
        let copy = fields.clone();
        assert_eq!(validate(&fields), validate(&copy));
        assert!(copy.has_value(FieldName::Password));
    }

    #[test]
    fn test_debug_does_not_leak_values() {
        let output = format!("{:?}", complete_form());
        assert!(!output.contains("Secret123!"));
        assert!(!output.contains("mary@example.com"));
    }
}
