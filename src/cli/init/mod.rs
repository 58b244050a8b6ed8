//! Site initialization module.
//!
//! Creates a new site from the built-in manifest record.
//!
//! # Module Structure
//!
//! - [`config`]: Manifest and supporting file generation

mod config;

use crate::config::SiteManifest;
use crate::log;
use anyhow::{Context, Result};
use std::fs;

pub use config::generate_manifest_template;

/// Create a new site with default structure
///
/// # Steps
/// 1. Create the site root directory (for `init <name>`)
/// 2. Write docsite.toml from the built-in record
/// 3. Create the docs content directory and a sidebar stub
/// 4. Write ignore files
///
/// If `dry_run` is true, only prints the manifest to stdout
pub fn new_site(manifest: &SiteManifest, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_manifest_template()?);
        return Ok(());
    }

    let root = manifest.get_root();
    if has_name {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create '{}'", root.display()))?;
    }

    config::write_manifest(root)?;

    fs::create_dir_all(manifest.root_join(&manifest.docs.path)).with_context(|| {
        format!(
            "Failed to create content directory '{}'",
            manifest.docs.path.display()
        )
    })?;
    config::write_sidebar_stub(root, &manifest.docs.sidebar)?;
    config::write_ignore_files(root)?;

    log!("init"; "created site at {}", root.display());
    log!(
        "init";
        "next: put pages under {}/ and run 'docsite check'",
        manifest.docs.path.display()
    );

    Ok(())
}
