//! `[docs]` section - the documentation content preset.
//!
//! Points the engine at a directory of documentation pages and the
//! sidebar-ordering file that arranges them.
//!
//! # Example
//!
//! ```toml
//! [docs]
//! path = "docs_sdk"
//! route_base = ""               # "" serves docs at the site root
//! sidebar = "sidebars.toml"
//! blog = false                  # or [docs.blog] with path/route_base
//! custom_css = "src/css/custom.css"
//! ```

use crate::config::types::{ConfigDiagnostics, FieldPath, manifest_fields};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Documentation content source and presentation hooks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DocsConfig {
    /// Content directory (relative to the site root).
    pub path: PathBuf,

    /// URL path segment the docs collection is served under.
    /// Empty string means the site root.
    pub route_base: String,

    /// Sidebar-ordering file, resolved by the engine at build time.
    pub sidebar: PathBuf,

    /// Blog section: `false` disables it, a table configures it.
    pub blog: BlogSetting,

    /// Stylesheet injected after the theme's own CSS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<PathBuf>,
}

manifest_fields!(DocsConfig, "docs", DocsFields {
    path,
    route_base,
    sidebar,
    blog,
    custom_css,
});

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("docs"),
            route_base: String::new(),
            sidebar: PathBuf::from("sidebars.toml"),
            blog: BlogSetting::default(),
            custom_css: None,
        }
    }
}

impl DocsConfig {
    /// Validate the docs preset.
    ///
    /// # Checks
    /// - `path` and `sidebar` are set
    /// - `route_base` has no leading `/` (route bases join under
    ///   `site.base_path`)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.path.as_os_str().is_empty() {
            diag.error(Self::FIELDS.path, "content directory is required");
        }

        if self.sidebar.as_os_str().is_empty() {
            diag.error(Self::FIELDS.sidebar, "sidebar-ordering file is required");
        }

        validate_route_base(&self.route_base, Self::FIELDS.route_base, diag);

        if let BlogSetting::Options(options) = &self.blog {
            if options.path.as_os_str().is_empty() {
                diag.error(Self::FIELDS.blog, "blog content directory is required");
            }
            validate_route_base(&options.route_base, Self::FIELDS.blog, diag);
        }
    }
}

/// Route bases are relative segments; a leading slash would escape
/// `site.base_path`.
pub(crate) fn validate_route_base(
    route_base: &str,
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    if route_base.starts_with('/') {
        diag.error_with_hint(
            field,
            format!("'{route_base}' must not start with '/'"),
            "route bases are joined under site.base_path",
        );
    }
}

// ============================================================================
// Blog Setting
// ============================================================================

/// Blog toggle: a bare boolean or a configuration table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum BlogSetting {
    /// `blog = true` enables the blog with default paths,
    /// `blog = false` disables it.
    Enabled(bool),
    /// Full blog configuration.
    Options(BlogOptions),
}

impl Default for BlogSetting {
    fn default() -> Self {
        Self::Enabled(false)
    }
}

impl BlogSetting {
    /// Check if the blog section is enabled.
    pub const fn is_enabled(&self) -> bool {
        match self {
            Self::Enabled(enabled) => *enabled,
            Self::Options(_) => true,
        }
    }
}

/// Blog settings used when the blog is declared as a table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BlogOptions {
    /// Blog content directory.
    pub path: PathBuf,

    /// URL path segment the blog is served under.
    pub route_base: String,
}

impl Default for BlogOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from("blog"),
            route_base: "blog".into(),
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
    fn test_docs_defaults() {
        let manifest = test_parse_manifest("");
        assert_eq!(manifest.docs.path, PathBuf::from("docs"));
        assert_eq!(manifest.docs.route_base, "");
        assert_eq!(manifest.docs.sidebar, PathBuf::from("sidebars.toml"));
        assert!(!manifest.docs.blog.is_enabled());
        assert!(manifest.docs.custom_css.is_none());
    }

    #[test]
    fn test_docs_custom() {
        let manifest = test_parse_manifest(
            r#"[docs]
path = "docs_sdk"
route_base = "sdk"
sidebar = "sidebars.toml"
custom_css = "src/css/custom.css""#,
        );
        assert_eq!(manifest.docs.path, PathBuf::from("docs_sdk"));
        assert_eq!(manifest.docs.route_base, "sdk");
        assert_eq!(
            manifest.docs.custom_css,
            Some(PathBuf::from("src/css/custom.css"))
        );
    }

    #[test]
    fn test_blog_as_bool() {
        let manifest = test_parse_manifest("[docs]\nblog = true");
        assert!(manifest.docs.blog.is_enabled());

        let manifest = test_parse_manifest("[docs]\nblog = false");
        assert!(!manifest.docs.blog.is_enabled());
    }

    #[test]
    fn test_blog_as_table() {
        let manifest = test_parse_manifest(
            "[docs.blog]\npath = \"news\"\nroute_base = \"news\"",
        );
        assert!(manifest.docs.blog.is_enabled());
        match &manifest.docs.blog {
            BlogSetting::Options(options) => {
                assert_eq!(options.path, PathBuf::from("news"));
                assert_eq!(options.route_base, "news");
            }
            BlogSetting::Enabled(_) => panic!("expected blog options table"),
        }
    }

    #[test]
    fn test_empty_route_base_means_site_root() {
        let manifest = test_parse_manifest("[docs]\nroute_base = \"\"");
        let mut diag = ConfigDiagnostics::new();
        manifest.docs.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_leading_slash_route_base_rejected() {
        let manifest = test_parse_manifest("[docs]\nroute_base = \"/sdk\"");
        let mut diag = ConfigDiagnostics::new();
        manifest.docs.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_empty_path_rejected() {
        let manifest = test_parse_manifest("[docs]\npath = \"\"");
        let mut diag = ConfigDiagnostics::new();
        manifest.docs.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
