//! `[i18n]` section - locale declarations.
//!
//! # Example
//!
//! ```toml
//! [i18n]
//! default_locale = "en"
//! locales = ["en", "ko"]
//! ```

use crate::config::types::{ConfigDiagnostics, manifest_fields};
use serde::{Deserialize, Serialize};

/// Locales the site is published in.
///
/// Even a single-language site declares its locale; the engine uses it
/// for the `html lang` attribute and per-locale routing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct I18nConfig {
    /// Locale served at the site root.
    pub default_locale: String,

    /// All published locales. Must contain `default_locale`.
    pub locales: Vec<String>,
}

manifest_fields!(I18nConfig, "i18n", I18nFields {
    default_locale,
    locales,
});

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".into(),
            locales: vec!["en".into()],
        }
    }
}

impl I18nConfig {
    /// Validate locale declarations.
    ///
    /// # Checks
    /// - `locales` is non-empty
    /// - `default_locale` is a member of `locales`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.locales.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.locales,
                "at least one locale is required",
                "e.g.: locales = [\"en\"]",
            );
            return;
        }

        if !self.locales.contains(&self.default_locale) {
            diag.error_with_hint(
                Self::FIELDS.default_locale,
                format!(
                    "'{}' is not in {}",
                    self.default_locale,
                    Self::FIELDS.locales.as_str()
                ),
                format!("add '{}' to the locale list", self.default_locale),
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_manifest;

    #[test]
    fn test_i18n_defaults() {
        let manifest = test_parse_manifest("");
        assert_eq!(manifest.i18n.default_locale, "en");
        assert_eq!(manifest.i18n.locales, vec!["en".to_string()]);
    }

    #[test]
    fn test_default_locale_membership_holds() {
        let manifest = test_parse_manifest(
            "[i18n]\ndefault_locale = \"ko\"\nlocales = [\"en\", \"ko\", \"zh-Hans\"]",
        );
        let mut diag = ConfigDiagnostics::new();
        manifest.i18n.validate(&mut diag);
        assert!(!diag.has_errors());
        assert!(manifest.i18n.locales.contains(&manifest.i18n.default_locale));
    }

    #[test]
    fn test_default_locale_outside_set_rejected() {
        let manifest =
            test_parse_manifest("[i18n]\ndefault_locale = \"fr\"\nlocales = [\"en\", \"ko\"]");
        let mut diag = ConfigDiagnostics::new();
        manifest.i18n.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_empty_locales_rejected() {
        let manifest = test_parse_manifest("[i18n]\nlocales = []");
        let mut diag = ConfigDiagnostics::new();
        manifest.i18n.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
