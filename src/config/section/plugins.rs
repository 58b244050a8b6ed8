//! `[[plugins]]` - additional content-source declarations.
//!
//! Each plugin mounts another directory of pages under its own route
//! base, alongside the primary `[docs]` collection.
//!
//! # Example
//!
//! ```toml
//! [[plugins]]
//! id = "sdk"
//! path = "docs_sdk"
//! route_base = "sdk"
//! sidebar = "sidebars.toml"
//! ```

use crate::config::section::docs::{DocsConfig, validate_route_base};
use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// One extra content source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PluginConfig {
    /// Unique identifier for the content collection.
    pub id: String,

    /// Content directory (relative to the site root).
    pub path: PathBuf,

    /// URL path segment this collection is served under.
    pub route_base: String,

    /// Sidebar-ordering file for this collection.
    pub sidebar: PathBuf,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            path: PathBuf::new(),
            route_base: String::new(),
            sidebar: PathBuf::from("sidebars.toml"),
        }
    }
}

impl PluginConfig {
    fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        if self.id.is_empty() {
            diag.error(
                FieldPath::indexed("plugins", index, "id"),
                "plugin id is required",
            );
        }
        if self.path.as_os_str().is_empty() {
            diag.error(
                FieldPath::indexed("plugins", index, "path"),
                "content directory is required",
            );
        }
        validate_route_base(
            &self.route_base,
            FieldPath::indexed("plugins", index, "route_base"),
            diag,
        );
    }
}

/// Validate the plugin list against itself and the `[docs]` preset.
///
/// # Checks
/// - per-plugin required fields
/// - plugin ids are unique
/// - no two collections (docs included) share a route base
pub fn validate_plugins(plugins: &[PluginConfig], docs: &DocsConfig, diag: &mut ConfigDiagnostics) {
    let mut routes: HashMap<&str, FieldPath> = HashMap::new();
    routes.insert(docs.route_base.as_str(), DocsConfig::FIELDS.route_base);

    let mut ids: HashMap<&str, usize> = HashMap::new();

    for (index, plugin) in plugins.iter().enumerate() {
        plugin.validate(index, diag);

        if !plugin.id.is_empty()
            && let Some(first) = ids.insert(plugin.id.as_str(), index)
        {
            diag.error(
                FieldPath::indexed("plugins", index, "id"),
                format!("duplicate id '{}' (first declared at index {first})", plugin.id),
            );
        }

        let field = FieldPath::indexed("plugins", index, "route_base");
        if let Some(first) = routes.insert(plugin.route_base.as_str(), field) {
            diag.error_with_hint(
                field,
                format!(
                    "route base '{}' is already served by {}",
                    plugin.route_base,
                    first.as_str()
                ),
                "every content collection needs its own route base",
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
