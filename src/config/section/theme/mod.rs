//! `[theme]` section configuration.
//!
//! Covers everything the theming layer reads: the social preview card,
//! the navbar, the footer, and the syntax-highlight theme pair.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! card_image = "img/MangoBoost_Logo.png"
//!
//! [theme.highlight]
//! light = "github"
//! dark = "dracula"
//! ```

mod footer;
mod navbar;

pub use footer::{FooterConfig, FooterItem, FooterStyle, LinkGroup, YEAR_PLACEHOLDER};
pub use navbar::{LogoConfig, NavItem, NavPosition, NavbarConfig};

use crate::config::types::{ConfigDiagnostics, manifest_fields};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Theme section configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    /// Social preview image (link unfurls, `og:image`).
    pub card_image: PathBuf,

    /// Top navigation bar.
    pub navbar: NavbarConfig,

    /// Footer sections and copyright.
    pub footer: FooterConfig,

    /// Syntax-highlight theme pair.
    pub highlight: HighlightConfig,
}

manifest_fields!(ThemeConfig, "theme", ThemeFields { card_image });

impl ThemeConfig {
    /// Validate the theme declarations and all sub-sections.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.navbar.validate(diag);
        self.footer.validate(diag);
        self.highlight.validate(diag);
    }
}

/// Light/dark syntax-highlight theme pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HighlightConfig {
    /// Theme used in light color scheme.
    pub light: String,

    /// Theme used in dark color scheme.
    pub dark: String,
}

manifest_fields!(HighlightConfig, "theme.highlight", HighlightFields {
    light,
    dark,
});

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            light: "github".into(),
            dark: "dracula".into(),
        }
    }
}

impl HighlightConfig {
    /// Both halves of the pair must name a theme.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.light.is_empty() {
            diag.error(Self::FIELDS.light, "theme name is required");
        }
        if self.dark.is_empty() {
            diag.error(Self::FIELDS.dark, "theme name is required");
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
    fn test_theme_defaults() {
        let manifest = test_parse_manifest("");
        assert!(manifest.theme.card_image.as_os_str().is_empty());
        assert_eq!(manifest.theme.highlight.light, "github");
        assert_eq!(manifest.theme.highlight.dark, "dracula");
    }

    #[test]
    fn test_highlight_custom_pair() {
        let manifest =
            test_parse_manifest("[theme.highlight]\nlight = \"solarized\"\ndark = \"nord\"");
        assert_eq!(manifest.theme.highlight.light, "solarized");
        assert_eq!(manifest.theme.highlight.dark, "nord");
    }

    #[test]
    fn test_empty_highlight_theme_rejected() {
        let manifest = test_parse_manifest("[theme.highlight]\nlight = \"\"");
        let mut diag = ConfigDiagnostics::new();
        manifest.theme.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
