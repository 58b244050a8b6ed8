//! `[site]` section - core site identity.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Mango Documentation"
//! tagline = "Ready-to-deploy full stack AI inferencing server."
//! favicon = "img/favicon.ico"
//! url = "https://sdk.docs.mangoboost.io"
//! base_path = "/"
//! organization = "MangoBoost, Inc."
//! project = "Mango Documentation"
//! ```
//!
//! `url` is the origin the site is published at; `base_path` is the
//! pathname it is served under (`/` for the domain root, `/<project>/`
//! for project pages). Joined together they form the canonical site
//! root used for link resolution.

use crate::config::types::{ConfigDiagnostics, manifest_fields};
use crate::config::util::extract_url_path;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Site identity and canonical location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteMetaConfig {
    /// Site title, shown in the browser tab and metadata.
    pub title: String,

    /// One-line site tagline.
    pub tagline: String,

    /// Favicon path (relative to the static asset root).
    pub favicon: PathBuf,

    /// Production origin, e.g. "https://docs.example.com".
    pub url: String,

    /// Pathname the site is served under. Must start and end with `/`.
    pub base_path: String,

    /// Owning organization. Informational only.
    pub organization: String,

    /// Project name. Informational only.
    pub project: String,
}

manifest_fields!(SiteMetaConfig, "site", SiteMetaFields {
    title,
    tagline,
    favicon,
    url,
    base_path,
    organization,
    project,
});

impl Default for SiteMetaConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: String::new(),
            favicon: PathBuf::new(),
            url: String::new(),
            base_path: "/".into(),
            organization: String::new(),
            project: String::new(),
        }
    }
}

impl SiteMetaConfig {
    /// Canonical site root: `url` joined with `base_path`.
    ///
    /// All generated links resolve against this URL.
    pub fn site_root(&self) -> Result<Url, url::ParseError> {
        let origin = Url::parse(&self.url)?;
        origin.join(&self.base_path)
    }

    /// Validate site identity.
    ///
    /// # Checks
    /// - `title`, `tagline` and `favicon` are set
    /// - `url` is a valid http(s) URL with a host and no path component
    /// - `base_path` is wrapped in `/` and joins into a valid site root
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, value) in [
            (Self::FIELDS.title, &self.title),
            (Self::FIELDS.tagline, &self.tagline),
        ] {
            if value.is_empty() {
                diag.error(field, "required field is empty");
            }
        }

        if self.favicon.as_os_str().is_empty() {
            diag.error(Self::FIELDS.favicon, "required field is empty");
        }

        self.validate_url(diag);
        self.validate_base_path(diag);
    }

    /// URL format check using the url crate for strict validation.
    fn validate_url(&self, diag: &mut ConfigDiagnostics) {
        if self.url.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.url,
                "required field is empty",
                "set the production origin, e.g.: \"https://docs.example.com\"",
            );
            return;
        }

        match Url::parse(&self.url) {
            Ok(parsed) => {
                // Must be http or https
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://docs.example.com",
                    );
                }
                // Must have a valid host
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://docs.example.com",
                    );
                }
                // The path segment belongs in base_path
                if let Some(path) = extract_url_path(&self.url)
                    && !path.is_empty()
                {
                    diag.warn(
                        Self::FIELDS.url,
                        format!(
                            "carries path '/{path}'; move it to {} for link resolution",
                            Self::FIELDS.base_path.as_str()
                        ),
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {e}"),
                    "use format like https://docs.example.com",
                );
            }
        }
    }

    fn validate_base_path(&self, diag: &mut ConfigDiagnostics) {
        if !self.base_path.starts_with('/') || !self.base_path.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base_path,
                format!("'{}' must start and end with '/'", self.base_path),
                "use \"/\" for the domain root, or \"/my-project/\"",
            );
            return;
        }

        // Only meaningful once url itself parses
        if Url::parse(&self.url).is_ok() && self.site_root().is_err() {
            diag.error(
                Self::FIELDS.base_path,
                format!("'{}' does not join into a valid site root", self.base_path),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_site() -> SiteMetaConfig {
        SiteMetaConfig {
            title: "Test".into(),
            tagline: "Test docs".into(),
            favicon: PathBuf::from("img/favicon.ico"),
            url: "https://test.example".into(),
            ..SiteMetaConfig::default()
        }
    }

    fn validate(site: &SiteMetaConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        diag
    }

    #[test]
    fn test_defaults() {
        let site = SiteMetaConfig::default();
        assert_eq!(site.base_path, "/");
        assert!(site.title.is_empty());
        assert!(site.organization.is_empty());
    }

    #[test]
    fn test_site_root_joins_url_and_base_path() {
        let root = valid_site().site_root().unwrap();
        assert_eq!(root.as_str(), "https://test.example/");
    }

    #[test]
    fn test_site_root_with_project_base_path() {
        let mut site = valid_site();
        site.base_path = "/mango/".into();
        assert_eq!(site.site_root().unwrap().as_str(), "https://test.example/mango/");
    }

    #[test]
    fn test_validate_accepts_wellformed_site() {
        let diag = validate(&valid_site());
        assert!(!diag.has_errors());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_validate_rejects_empty_required_fields() {
        let mut site = SiteMetaConfig::default();
        site.url = "https://test.example".into();
        // title, tagline, favicon
        assert_eq!(validate(&site).len(), 3);
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let mut site = valid_site();
        site.url = "ftp://docs.example.com".into();
        let diag = validate(&site);
        assert!(diag.has_errors());
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.message.contains("scheme 'ftp'"))
        );
    }

    #[test]
    fn test_validate_rejects_invalid_url() {
        let mut site = valid_site();
        site.url = "not a url".into();
        assert!(validate(&site).has_errors());
    }

    #[test]
    fn test_validate_rejects_unwrapped_base_path() {
        for bad in ["docs", "/docs", "docs/", ""] {
            let mut site = valid_site();
            site.base_path = bad.into();
            assert!(
                validate(&site).has_errors(),
                "base_path '{bad}' should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_warns_on_url_with_path() {
        let mut site = valid_site();
        site.url = "https://test.example/docs".into();
        let diag = validate(&site);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }
}
