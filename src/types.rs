//! Core data model shared by every validator.

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, ValidationError};

/// The four fields of the registration form.
///
/// Ordering follows the form layout, which is also the order fields are
/// reported and focused in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FullName,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    /// Wire name used by form payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FullName => "fullName",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldName::FullName => "full name",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "password confirmation",
        };
        f.write_str(label)
    }
}

impl FromStr for FieldName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ParseError::UnknownField(s.to_string()))
    }
}

/// Coarse password strength classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    pub const STRONG_THRESHOLD: u8 = 75;
    pub const MEDIUM_THRESHOLD: u8 = 50;

    /// Maps a score to its tier: `>= 75` strong, `50..75` medium, below 50 weak.
    pub fn from_score(score: u8) -> Self {
        if score >= Self::STRONG_THRESHOLD {
            StrengthTier::Strong
        } else if score >= Self::MEDIUM_THRESHOLD {
            StrengthTier::Medium
        } else {
            StrengthTier::Weak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthTier::Weak => "weak",
            StrengthTier::Medium => "medium",
            StrengthTier::Strong => "strong",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrengthTier {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weak" => Ok(StrengthTier::Weak),
            "medium" => Ok(StrengthTier::Medium),
            "strong" => Ok(StrengthTier::Strong),
            other => Err(ParseError::UnknownTier(other.to_string())),
        }
    }
}

/// Cumulative rule score together with the tier derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordScore {
    pub score: u8,
    pub strength: StrengthTier,
}

impl PasswordScore {
    pub fn new(score: u8) -> Self {
        Self {
            score,
            strength: StrengthTier::from_score(score),
        }
    }
}

/// Result of validating one field.
///
/// `errors` is empty exactly when `is_valid` is true. Password verdicts
/// always carry `strength` and `score`, valid or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationVerdict {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub strength: Option<StrengthTier>,
    pub score: Option<u8>,
}

impl ValidationVerdict {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            strength: None,
            score: None,
        }
    }

    pub fn invalid(error: ValidationError) -> Self {
        Self {
            is_valid: false,
            errors: vec![error],
            strength: None,
            score: None,
        }
    }

    pub(crate) fn with_score(mut self, score: PasswordScore) -> Self {
        self.score = Some(score.score);
        self.strength = Some(score.strength);
        self
    }

    /// The error a UI shows for this field, if any.
    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }
}
