//! `[theme.navbar]` configuration.
//!
//! # Example
//!
//! ```toml
//! [theme.navbar]
//! title = "SDK"
//! logo = { alt = "MangoBoost Logo", src = "img/MangoBoost_Logo.png" }
//! items = [
//!     { to = "sdk", label = "SDK", position = "left" },
//! ]
//! ```

use crate::config::types::{ConfigDiagnostics, FieldPath, manifest_fields};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top navigation bar.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavbarConfig {
    /// Text shown next to the logo.
    pub title: String,

    /// Navbar logo.
    pub logo: LogoConfig,

    /// Ordered navigation entries.
    pub items: Vec<NavItem>,
}

manifest_fields!(NavbarConfig, "theme.navbar", NavbarFields {
    title,
    logo,
    items,
});

impl NavbarConfig {
    /// Validate navbar entries.
    ///
    /// # Checks
    /// - logo with a source carries alt text
    /// - every item has a label and a destination
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.logo.src.as_os_str().is_empty() && self.logo.alt.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.logo,
                "logo has a source but no alt text",
                "set logo.alt to the organization or project name",
            );
        }

        for (index, item) in self.items.iter().enumerate() {
            if item.label.is_empty() {
                diag.error(
                    FieldPath::indexed("theme.navbar.items", index, "label"),
                    "navigation label is required",
                );
            }
            if item.to.is_empty() {
                diag.error(
                    FieldPath::indexed("theme.navbar.items", index, "to"),
                    "navigation destination is required",
                );
            }
        }
    }
}

/// Navbar logo declaration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogoConfig {
    /// Alternative text for the logo image.
    pub alt: String,

    /// Logo image path (relative to the static asset root).
    pub src: PathBuf,
}

/// One navbar entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavItem {
    /// Route destination, relative to the site root.
    pub to: String,

    /// Visible text.
    pub label: String,

    /// Which side of the navbar the entry docks to.
    pub position: NavPosition,
}

impl Default for NavItem {
    fn default() -> Self {
        Self {
            to: String::new(),
            label: String::new(),
            position: NavPosition::Left,
        }
    }
}

/// Navbar docking side.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    #[default]
    Left,
    Right,
}

// ============================================================================
// Tests
// ============================================================================
