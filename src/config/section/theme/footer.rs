//! `[theme.footer]` configuration.
//!
//! # Example
//!
//! ```toml
//! [theme.footer]
//! style = "dark"
//! copyright = "Copyright © {year} MangoBoost, Inc."
//!
//! [[theme.footer.links]]
//! title = "Community"
//! items = [
//!     { label = "LinkedIn", href = "https://www.linkedin.com/company/mangoboost/" },
//! ]
//! ```
//!
//! `copyright` is a template; `{year}` is expanded to the current
//! calendar year when the site record is assembled.

use crate::config::types::{ConfigDiagnostics, FieldPath, manifest_fields};
use serde::{Deserialize, Serialize};

/// Placeholder expanded at assembly time.
pub const YEAR_PLACEHOLDER: &str = "{year}";

/// Footer declaration: style, grouped link sections, copyright template.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FooterConfig {
    /// Footer color scheme.
    pub style: FooterStyle,

    /// Ordered link sections.
    pub links: Vec<LinkGroup>,

    /// Copyright line template. `{year}` expands to the current year.
    pub copyright: String,
}

manifest_fields!(FooterConfig, "theme.footer", FooterFields {
    style,
    links,
    copyright,
});

impl FooterConfig {
    /// Copyright line with the `{year}` placeholder expanded.
    pub fn copyright_at(&self, year: u16) -> String {
        self.copyright
            .replace(YEAR_PLACEHOLDER, &year.to_string())
    }

    /// Validate footer sections.
    ///
    /// # Checks
    /// - every section has a title
    /// - every item has a label and exactly one of `href` / `to`
    /// - a non-empty copyright template mentions `{year}` (warning)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (group_index, group) in self.links.iter().enumerate() {
            if group.title.is_empty() {
                diag.error(
                    FieldPath::indexed("theme.footer.links", group_index, "title"),
                    "section title is required",
                );
            }

            for (item_index, item) in group.items.iter().enumerate() {
                let path = |field: &str| {
                    FieldPath::indexed(
                        "theme.footer.links",
                        group_index,
                        Box::leak(format!("items[{item_index}].{field}").into_boxed_str()),
                    )
                };

                if item.label.is_empty() {
                    diag.error(path("label"), "link label is required");
                }

                match (&item.href, &item.to) {
                    (None, None) => diag.error_with_hint(
                        path("href"),
                        "link has no target",
                        "set href for external links or to for site routes",
                    ),
                    (Some(_), Some(_)) => diag.error(
                        path("href"),
                        "href and to are mutually exclusive",
                    ),
                    (Some(href), None) if url::Url::parse(href).is_err() => {
                        diag.error(path("href"), format!("invalid URL: '{href}'"));
                    }
                    _ => {}
                }
            }
        }

        if !self.copyright.is_empty() && !self.copyright.contains(YEAR_PLACEHOLDER) {
            diag.warn(
                Self::FIELDS.copyright,
                format!("has no {YEAR_PLACEHOLDER} placeholder; the year will not be stamped"),
            );
        }
    }
}

/// Footer color scheme.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Light,
    Dark,
}

/// A titled group of footer links.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LinkGroup {
    /// Section heading.
    pub title: String,

    /// Ordered links in this section.
    pub items: Vec<FooterItem>,
}

/// One footer link: external (`href`) or a site route (`to`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FooterItem {
    /// Visible text.
    pub label: String,

    /// External link target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Site route target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl FooterItem {
    /// External link constructor.
    pub fn external(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            to: None,
        }
    }

    /// Site route constructor.
    pub fn route(label: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
            to: Some(to.into()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
