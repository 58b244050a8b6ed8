//! `[links]` section - broken-link policy.
//!
//! The build engine resolves every internal link and markdown reference;
//! these two knobs decide what a resolution failure does to the build.
//!
//! # Example
//!
//! ```toml
//! [links]
//! on_broken = "throw"           # throw | warn | ignore
//! on_broken_markdown = "warn"   # throw | warn | ignore
//! ```

use crate::config::types::manifest_fields;
use serde::{Deserialize, Serialize};

/// Broken-link handling policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LinksConfig {
    /// What a broken internal link does to the build.
    pub on_broken: BrokenLinkAction,

    /// What a broken markdown-style link does to the build.
    pub on_broken_markdown: BrokenLinkAction,
}

manifest_fields!(LinksConfig, "links", LinksFields {
    on_broken,
    on_broken_markdown,
});

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            on_broken: BrokenLinkAction::Throw,
            on_broken_markdown: BrokenLinkAction::Warn,
        }
    }
}

/// Action taken when the engine hits a broken link.
///
/// The set is closed; any other manifest value is a deserialization
/// error.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkAction {
    /// Fail the build.
    #[default]
    Throw,
    /// Report and continue.
    Warn,
    /// Silently continue.
    Ignore,
}

impl BrokenLinkAction {
    /// True if this action aborts the build.
    #[inline]
    pub const fn fails_build(&self) -> bool {
        matches!(self, Self::Throw)
    }

    /// Manifest spelling of the action.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Throw => "throw",
            Self::Warn => "warn",
            Self::Ignore => "ignore",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteManifest, test_parse_manifest};

    #[test]
    fn test_links_defaults() {
        let manifest = test_parse_manifest("");
        assert_eq!(manifest.links.on_broken, BrokenLinkAction::Throw);
        assert_eq!(manifest.links.on_broken_markdown, BrokenLinkAction::Warn);
    }

    #[test]
    fn test_links_custom() {
        let manifest = test_parse_manifest(
            "[links]\non_broken = \"ignore\"\non_broken_markdown = \"throw\"",
        );
        assert_eq!(manifest.links.on_broken, BrokenLinkAction::Ignore);
        assert_eq!(manifest.links.on_broken_markdown, BrokenLinkAction::Throw);
    }

    #[test]
    fn test_action_set_is_closed() {
        // Anything outside throw | warn | ignore is a parse error
        for bad in ["error", "fail", "Throw", ""] {
            let content = format!("[links]\non_broken = \"{bad}\"");
            let result: Result<SiteManifest, _> = toml::from_str(&content);
            assert!(result.is_err(), "value '{bad}' should be rejected");
        }
    }

    #[test]
    fn test_fails_build() {
        assert!(BrokenLinkAction::Throw.fails_build());
        assert!(!BrokenLinkAction::Warn.fails_build());
        assert!(!BrokenLinkAction::Ignore.fails_build());
    }

    #[test]
    fn test_as_str_matches_manifest_spelling() {
        assert_eq!(BrokenLinkAction::Throw.as_str(), "throw");
        assert_eq!(BrokenLinkAction::Warn.as_str(), "warn");
        assert_eq!(BrokenLinkAction::Ignore.as_str(), "ignore");
    }
}
