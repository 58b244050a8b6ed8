//! Assembly of the resolved site record.
//!
//! A [`SiteManifest`] is the declarative record as written on disk; a
//! [`Site`] is what the build engine actually consumes: the canonical
//! root URL joined from `site.url` + `site.base_path`, and the footer
//! copyright with its `{year}` placeholder stamped.

use crate::config::SiteManifest;
use crate::utils::date::current_year;
use anyhow::{Context, Result};
use serde_json::Value;
use url::Url;

/// The fully-resolved site record.
#[derive(Debug, Clone)]
pub struct Site {
    /// Canonical site root all links resolve against.
    pub root_url: Url,

    /// Footer copyright line with the year stamped.
    pub copyright: String,

    /// The declarative record the resolution started from.
    pub manifest: SiteManifest,
}

impl Site {
    /// Assemble the resolved record, stamping the current calendar year.
    pub fn assemble(manifest: &SiteManifest) -> Result<Self> {
        Self::assemble_at(manifest, current_year())
    }

    /// Assemble with an explicit copyright year.
    ///
    /// Same record in, same record out: assembly is deterministic for a
    /// fixed year.
    pub fn assemble_at(manifest: &SiteManifest, year: u16) -> Result<Self> {
        let root_url = manifest
            .site
            .site_root()
            .with_context(|| format!("'{}' is not a valid site root", manifest.site.url))?;

        Ok(Self {
            root_url,
            copyright: manifest.theme.footer.copyright_at(year),
            manifest: manifest.clone(),
        })
    }

    /// Build the output value for `docsite show`.
    ///
    /// The manifest is serialized as-is, then overlaid with the
    /// assembled fields: `site.root_url` and the stamped
    /// `theme.footer.copyright`.
    pub fn to_value(&self) -> Value {
        let mut value = serde_json::to_value(&self.manifest).unwrap_or_default();

        if let Value::Object(root) = &mut value {
            if let Some(Value::Object(site)) = root.get_mut("site") {
                site.insert(
                    "root_url".to_string(),
                    Value::String(self.root_url.to_string()),
                );
            }
            if let Some(Value::Object(theme)) = root.get_mut("theme")
                && let Some(Value::Object(footer)) = theme.get_mut("footer")
            {
                footer.insert(
                    "copyright".to_string(),
                    Value::String(self.copyright.clone()),
                );
            }
        }

        value
    }
}

// ============================================================================
// Tests
// ============================================================================
