//! User-facing labels and messages.
//!
//! The form ships in Indonesian; English mirrors the `Display` output of
//! the error types.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::{FieldName, StrengthTier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Indonesian,
    English,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Indonesian => "id",
            Locale::English => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    /// Accepts a bare language code or a region-tagged one (`id-ID`, `en_US`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "id" => Ok(Locale::Indonesian),
            "en" => Ok(Locale::English),
            _ => Err(s.to_string()),
        }
    }
}

/// Indonesian display label for a strength tier.
pub fn strength_label(tier: StrengthTier) -> &'static str {
    strength_label_for(tier, Locale::Indonesian)
}

/// Label lookup by raw tier name; unknown names yield an empty string.
pub fn strength_label_str(tier: &str) -> &'static str {
    tier.parse::<StrengthTier>()
        .map(strength_label)
        .unwrap_or("")
}

pub fn strength_label_for(tier: StrengthTier, locale: Locale) -> &'static str {
    match (locale, tier) {
        (Locale::Indonesian, StrengthTier::Weak) => "Lemah",
        (Locale::Indonesian, StrengthTier::Medium) => "Sedang",
        (Locale::Indonesian, StrengthTier::Strong) => "Kuat",
        (Locale::English, StrengthTier::Weak) => "Weak",
        (Locale::English, StrengthTier::Medium) => "Medium",
        (Locale::English, StrengthTier::Strong) => "Strong",
    }
}

/// Text of the strength indicator shown under the password input.
pub fn strength_indicator_text(tier: StrengthTier, locale: Locale) -> String {
    let label = strength_label_for(tier, locale);
    match locale {
        Locale::Indonesian => format!("Kekuatan Password: {label}"),
        Locale::English => format!("Password strength: {label}"),
    }
}

impl ValidationError {
    /// Message for display in the given locale.
    pub fn localized(&self, locale: Locale) -> String {
        match locale {
            Locale::English => self.to_string(),
            Locale::Indonesian => indonesian(self),
        }
    }
}

fn indonesian(error: &ValidationError) -> String {
    use FieldName::*;

    match error {
        ValidationError::Required(FullName) => "Nama lengkap tidak boleh kosong".to_string(),
        ValidationError::Required(Email) => "Email tidak boleh kosong".to_string(),
        ValidationError::Required(Password) => "Password tidak boleh kosong".to_string(),
        ValidationError::Required(ConfirmPassword) => {
            "Konfirmasi password tidak boleh kosong".to_string()
        }
        ValidationError::TooShort { field: FullName, min } => {
            format!("Nama lengkap minimal {min} karakter")
        }
        ValidationError::TooShort { field, min } => {
            format!("{} harus minimal {min} karakter", field_label_id(*field))
        }
        ValidationError::TooLong { field: FullName, max } => {
            format!("Nama lengkap maksimal {max} karakter")
        }
        ValidationError::TooLong { field, max } => {
            format!("{} maksimal {max} karakter", field_label_id(*field))
        }
        ValidationError::FormatInvalid(FullName) => {
            "Nama lengkap hanya boleh berisi huruf, spasi, tanda hubung, dan apostrof".to_string()
        }
        ValidationError::FormatInvalid(Email) => "Format email tidak valid".to_string(),
        ValidationError::FormatInvalid(field) => {
            format!("{} tidak valid", field_label_id(*field))
        }
        ValidationError::Mismatch => "Password tidak cocok".to_string(),
    }
}

fn field_label_id(field: FieldName) -> &'static str {
    match field {
        FieldName::FullName => "Nama lengkap",
        FieldName::Email => "Email",
        FieldName::Password => "Password",
        FieldName::ConfirmPassword => "Konfirmasi password",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_labels() {
        assert_eq!(strength_label(StrengthTier::Weak), "Lemah");
        assert_eq!(strength_label(StrengthTier::Medium), "Sedang");
        assert_eq!(strength_label(StrengthTier::Strong), "Kuat");
    }

    #[test]
    fn test_strength_label_unknown_tier_is_empty() {
        assert_eq!(strength_label_str("strong"), "Kuat");
        assert_eq!(strength_label_str("epic"), "");
        assert_eq!(strength_label_str(""), "");
    }

    #[test]
    fn test_indonesian_messages() {
        assert_eq!(
            ValidationError::TooShort {
                field: FieldName::Password,
                min: 8
            }
            .localized(Locale::Indonesian),
            "Password harus minimal 8 karakter"
        );
        assert_eq!(
            ValidationError::Mismatch.localized(Locale::Indonesian),
            "Password tidak cocok"
        );
        assert_eq!(
            ValidationError::TooShort {
                field: FieldName::FullName,
                min: 3
            }
            .localized(Locale::Indonesian),
            "Nama lengkap minimal 3 karakter"
        );
    }

    #[test]
    fn test_english_messages_follow_display() {
        let err = ValidationError::Required(FieldName::Email);
        assert_eq!(err.localized(Locale::English), err.to_string());
    }

    #[test]
    fn test_indicator_text() {
        assert_eq!(
            strength_indicator_text(StrengthTier::Medium, Locale::Indonesian),
            "Kekuatan Password: Sedang"
        );
        assert_eq!(
            strength_indicator_text(StrengthTier::Strong, Locale::English),
            "Password strength: Strong"
        );
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("id".parse::<Locale>(), Ok(Locale::Indonesian));
        assert_eq!("id-ID".parse::<Locale>(), Ok(Locale::Indonesian));
        assert_eq!("EN_us".parse::<Locale>(), Ok(Locale::English));
        assert!("fr".parse::<Locale>().is_err());
    }
}
