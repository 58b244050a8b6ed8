//! Manifest file generation.
//!
//! Creates docsite.toml and supporting files for new sites.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::SiteManifest;

/// Default manifest filename
const MANIFEST_FILE: &str = "docsite.toml";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Sidebar stub content written for new sites
const SIDEBAR_STUB: &str = "# Ordered list of documentation pages\norder = []\n";

/// Generate docsite.toml content from the built-in record
pub fn generate_manifest_template() -> Result<String> {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# docsite manifest (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# https://github.com/docsite-rs/docsite\n\n");

    out.push_str(&toml::to_string_pretty(&SiteManifest::builtin())?);

    Ok(out)
}

/// Write the default docsite.toml
///
/// Refuses to overwrite an existing manifest.
pub fn write_manifest(root: &Path) -> Result<()> {
    let path = root.join(MANIFEST_FILE);
    if path.exists() {
        bail!("'{}' already exists, refusing to overwrite", path.display());
    }

    let content = generate_manifest_template()?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write manifest '{}'", path.display()))?;

    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
///
/// Patterns include:
/// - Engine output directory (`/build/`)
/// - OS-specific files (`.DS_Store`)
pub fn write_ignore_files(root: &Path) -> Result<()> {
    let patterns = ["/build/", ".DS_Store"];
    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

/// Write the sidebar-ordering stub referenced by `[docs]`
pub fn write_sidebar_stub(root: &Path, sidebar: &Path) -> Result<()> {
    let path = root.join(sidebar);
    // Only create if doesn't exist
    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, SIDEBAR_STUB)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigDiagnostics;
    use tempfile::TempDir;

    #[test]
    fn test_write_manifest() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path()).unwrap();

        let manifest_path = temp.path().join("docsite.toml");
        assert!(manifest_path.exists());

        let content = fs::read_to_string(&manifest_path).unwrap();
        assert!(content.contains("[site]"));
        assert!(content.contains("Mango Documentation"));
    }

    #[test]
    fn test_write_manifest_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("docsite.toml"), "custom").unwrap();

        assert!(write_manifest(temp.path()).is_err());
        let content = fs::read_to_string(temp.path().join("docsite.toml")).unwrap();
        assert_eq!(content, "custom");
    }

    #[test]
    fn test_template_roundtrips_and_validates() {
        let template = generate_manifest_template().unwrap();
        let manifest = SiteManifest::from_str(&template).unwrap();

        let mut diag = ConfigDiagnostics::new();
        manifest.validate_record(&mut diag);
        assert!(!diag.has_errors(), "template failed: {:?}", diag.errors());
        assert_eq!(manifest.site.title, "Mango Documentation");
    }

    #[test]
    fn test_write_ignore_files() {
        let temp = TempDir::new().unwrap();
        write_ignore_files(temp.path()).unwrap();

        let gitignore = temp.path().join(".gitignore");
        assert!(gitignore.exists());

        let content = fs::read_to_string(&gitignore).unwrap();
        assert!(content.contains("/build/"));
    }

    #[test]
    fn test_ignore_files_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let gitignore = temp.path().join(".gitignore");
        fs::write(&gitignore, "custom content").unwrap();

        write_ignore_files(temp.path()).unwrap();

        let content = fs::read_to_string(&gitignore).unwrap();
        assert_eq!(content, "custom content");
    }

    #[test]
    fn test_write_sidebar_stub() {
        let temp = TempDir::new().unwrap();
        write_sidebar_stub(temp.path(), Path::new("sidebars.toml")).unwrap();

        let content = fs::read_to_string(temp.path().join("sidebars.toml")).unwrap();
        assert!(content.contains("order = []"));

        // Existing sidebar files are left alone
        fs::write(temp.path().join("sidebars.toml"), "order = [\"intro\"]").unwrap();
        write_sidebar_stub(temp.path(), Path::new("sidebars.toml")).unwrap();
        let content = fs::read_to_string(temp.path().join("sidebars.toml")).unwrap();
        assert!(content.contains("intro"));
    }
}
