//! Manifest check command.
//!
//! Schema errors abort during load, so reaching this point means the
//! manifest deserialized and validated; what's left is the summary.

use crate::config::{Site, SiteManifest};
use crate::log;
use crate::utils::plural_count;
use anyhow::Result;

/// Report on an already-validated manifest.
pub fn check_manifest(manifest: &SiteManifest) -> Result<()> {
    let site = Site::assemble(manifest)?;

    let manifest_name = manifest
        .manifest_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| manifest.manifest_path.display().to_string());

    log!("check"; "{} is valid", manifest_name);
    log!("check"; "site root {}", site.root_url);
    log!(
        "check";
        "broken links: internal = {}, markdown = {}",
        manifest.links.on_broken.as_str(),
        manifest.links.on_broken_markdown.as_str()
    );
    log!(
        "check";
        "{}, {}, {}, {}",
        plural_count(manifest.i18n.locales.len(), "locale"),
        plural_count(manifest.theme.navbar.items.len(), "navbar item"),
        plural_count(manifest.theme.footer.links.len(), "footer section"),
        plural_count(manifest.plugins.len(), "plugin")
    );

    Ok(())
}
