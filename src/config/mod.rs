//! Site manifest management for `docsite.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Manifest section definitions
//! │   ├── site       # [site]
//! │   ├── links      # [links]
//! │   ├── i18n       # [i18n]
//! │   ├── docs       # [docs]
//! │   ├── theme      # [theme], [theme.navbar], [theme.footer]
//! │   └── plugins    # [[plugins]]
//! ├── types/         # Utility types
//! │   ├── error      # ManifestError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── assemble       # Resolved site record (root URL, copyright year)
//! └── mod.rs         # SiteManifest (this file)
//! ```

pub mod assemble;
pub mod section;
pub mod types;
mod util;

use util::find_manifest_file;

// Re-export from section/
pub use section::{
    BlogSetting, BrokenLinkAction, DocsConfig, I18nConfig, LinksConfig, PluginConfig,
    SiteMetaConfig, ThemeConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostics, FieldPath, ManifestError};

pub use assemble::Site;

use crate::{
    cli::{Cli, Commands},
    log,
};
use anyhow::{Context, Result, bail};
use section::theme::{
    FooterConfig, FooterItem, FooterStyle, HighlightConfig, LinkGroup, LogoConfig, NavbarConfig,
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root manifest
// ============================================================================

/// Root manifest structure representing docsite.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteManifest {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the manifest file (internal use only)
    #[serde(skip)]
    pub manifest_path: PathBuf,

    /// Site root directory - parent of the manifest file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site identity (title, tagline, url, base path)
    #[serde(default)]
    pub site: SiteMetaConfig,

    /// Broken-link policy
    #[serde(default)]
    pub links: LinksConfig,

    /// Locale declarations
    #[serde(default)]
    pub i18n: I18nConfig,

    /// Documentation content preset
    #[serde(default)]
    pub docs: DocsConfig,

    /// Theme settings (card image, navbar, footer, highlight)
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Extra content sources
    #[serde(default)]
    pub plugins: Vec<PluginConfig>,
}

impl Default for SiteManifest {
    fn default() -> Self {
        Self {
            cli: None,
            manifest_path: PathBuf::new(),
            root: PathBuf::new(),
            site: SiteMetaConfig::default(),
            links: LinksConfig::default(),
            i18n: I18nConfig::default(),
            docs: DocsConfig::default(),
            theme: ThemeConfig::default(),
            plugins: Vec::new(),
        }
    }
}

impl SiteManifest {
    /// The built-in site record: the MangoBoost SDK documentation site.
    ///
    /// Pure construction - no inputs, no I/O, no error paths.
    /// `docsite init` writes this record to disk, and it doubles as the
    /// reference instance the test suite pins.
    pub fn builtin() -> Self {
        Self {
            site: SiteMetaConfig {
                title: "Mango Documentation".into(),
                tagline: "Ready-to-deploy full stack AI inferencing server offering \
                          unprecedented performance and flexibility."
                    .into(),
                favicon: PathBuf::from("img/favicon.ico"),
                url: "https://sdk.docs.mangoboost.io".into(),
                base_path: "/".into(),
                organization: "MangoBoost, Inc.".into(),
                project: "Mango Documentation".into(),
            },
            links: LinksConfig {
                on_broken: BrokenLinkAction::Throw,
                on_broken_markdown: BrokenLinkAction::Warn,
            },
            i18n: I18nConfig {
                default_locale: "en".into(),
                locales: vec!["en".into()],
            },
            docs: DocsConfig {
                path: PathBuf::from("docs_sdk"),
                route_base: String::new(),
                sidebar: PathBuf::from("sidebars.toml"),
                blog: BlogSetting::Enabled(false),
                custom_css: Some(PathBuf::from("src/css/custom.css")),
            },
            theme: ThemeConfig {
                card_image: PathBuf::from("img/MangoBoost_Logo.png"),
                navbar: NavbarConfig {
                    title: "SDK".into(),
                    logo: LogoConfig {
                        alt: "MangoBoost Logo".into(),
                        src: PathBuf::from("img/MangoBoost_Logo.png"),
                    },
                    items: Vec::new(),
                },
                footer: FooterConfig {
                    style: FooterStyle::Dark,
                    links: vec![
                        LinkGroup {
                            title: "Docs".into(),
                            items: Vec::new(),
                        },
                        LinkGroup {
                            title: "Community".into(),
                            items: vec![
                                FooterItem::external(
                                    "LinkedIn",
                                    "https://www.linkedin.com/company/mangoboost/",
                                ),
                                FooterItem::external("X", "https://x.com/mangoboost_inc"),
                            ],
                        },
                        LinkGroup {
                            title: "More".into(),
                            items: vec![
                                FooterItem::external(
                                    "Datacenter Infrastructure Acceleration",
                                    "https://www.mangoboost.io",
                                ),
                                FooterItem::external(
                                    "Need Help? Contact Support",
                                    "https://www.mangoboost.io/contact",
                                ),
                                FooterItem::external(
                                    "Question? Contact Sales",
                                    "https://www.mangoboost.io/contact",
                                ),
                            ],
                        },
                    ],
                    copyright: "Copyright © {year} MangoBoost, Inc.".into(),
                },
                highlight: HighlightConfig {
                    light: "github".into(),
                    dark: "dracula".into(),
                },
            },
            plugins: Vec::new(),
            ..Self::default()
        }
    }

    /// Load the manifest from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find the
    /// manifest file. The site root is the manifest's parent directory.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let (manifest_path, exists) = Self::resolve_manifest_path(cli)?;

        // Validate manifest existence (skip for init)
        if !cli.is_init() && !exists {
            log!(
                "error";
                "Manifest '{}' not found. Run 'docsite init' to create a new site.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        // Init starts from the built-in record; everything else reads disk
        let mut manifest = if cli.is_init() {
            Self::builtin()
        } else {
            crate::debug!("load"; "reading manifest at {}", manifest_path.display());
            Self::from_path(&manifest_path)?
        };

        manifest.manifest_path = manifest_path;
        manifest.cli = Some(cli);
        manifest.finalize(cli);

        // Full validation (skip for init: no manifest file yet)
        if !cli.is_init() {
            manifest.validate()?;
        }

        Ok(manifest)
    }

    /// Resolve manifest file path based on command.
    fn resolve_manifest_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match &cli.command {
            Commands::Init {
                name: Some(name), ..
            } => {
                let path = cwd.join(name).join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None, .. } => {
                let path = cwd.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => {
                // Search upward from cwd
                match find_manifest_file(&cli.config) {
                    Some(path) => Ok((path, true)),
                    None => Ok((cwd.join(&cli.config), false)),
                }
            }
        }
    }

    /// Finalize the manifest after loading: resolve the site root.
    fn finalize(&mut self, cli: &Cli) {
        let root = match &cli.command {
            Commands::Init {
                name: Some(name), ..
            } => std::env::current_dir().unwrap_or_default().join(name),
            Commands::Init { name: None, .. } => std::env::current_dir().unwrap_or_default(),
            _ => self
                .manifest_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        self.set_root(&root);
    }

    /// Parse a manifest from a TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(content)?;
        Ok(manifest)
    }

    /// Load a manifest from a file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ManifestError::Io(path.to_path_buf(), err))?;

        let (manifest, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown manifest fields");
            }
        }

        Ok(manifest)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let manifest = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((manifest, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only the filename since the manifest sits at the site root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    /// Get the site root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the site root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Join a path with the site root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Get CLI arguments reference
    pub const fn get_cli(&self) -> &'static Cli {
        self.cli.unwrap()
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the loaded manifest.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        if !self.manifest_path.exists() {
            bail!(ManifestError::Validation("manifest file not found".into()));
        }

        self.validate_record(&mut diag);
        self.warn_missing_content(&mut diag);

        // Print collected warnings (grouped display)
        diag.print_warnings();

        // Return all collected errors
        diag.into_result()
            .map_err(|e| ManifestError::Diagnostics(e).into())
    }

    /// Record-level validation, independent of the filesystem.
    ///
    /// Shared by [`validate`](Self::validate) and tests that construct
    /// records without a backing file.
    pub fn validate_record(&self, diag: &mut ConfigDiagnostics) {
        self.site.validate(diag);
        self.i18n.validate(diag);
        self.docs.validate(diag);
        self.theme.validate(diag);
        section::validate_plugins(&self.plugins, &self.docs, diag);
    }

    /// Warn about declared content that is missing on disk.
    ///
    /// The engine resolves these at build time; missing entries are
    /// reported here as warnings so `check` catches them early.
    fn warn_missing_content(&self, diag: &mut ConfigDiagnostics) {
        if self.root.as_os_str().is_empty() {
            return;
        }

        if !self.root_join(&self.docs.path).is_dir() {
            diag.warn(
                DocsConfig::FIELDS.path,
                format!("directory '{}' not found under the site root", self.docs.path.display()),
            );
        }

        if !self.root_join(&self.docs.sidebar).is_file() {
            diag.warn(
                DocsConfig::FIELDS.sidebar,
                format!("file '{}' not found under the site root", self.docs.sidebar.display()),
            );
        }

        for (index, plugin) in self.plugins.iter().enumerate() {
            if !plugin.path.as_os_str().is_empty() && !self.root_join(&plugin.path).is_dir() {
                diag.warn(
                    FieldPath::indexed("plugins", index, "path"),
                    format!("directory '{}' not found under the site root", plugin.path.display()),
                );
            }
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a manifest with the minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch manifest typos in tests).
#[cfg(test)]
pub fn test_parse_manifest(extra: &str) -> SiteManifest {
    let manifest = format!(
        "[site]\ntitle = \"Test\"\ntagline = \"Test docs\"\nfavicon = \"img/favicon.ico\"\nurl = \"https://test.example\"\n{extra}"
    );
    let (parsed, ignored) = SiteManifest::parse_with_ignored(&manifest).unwrap();
    assert!(
        ignored.is_empty(),
        "test manifest has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<SiteManifest, _> = toml::from_str("[site\ntitle = \"Test\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_get_root_default() {
        let manifest = SiteManifest::default();
        // Default root is empty PathBuf, set during manifest loading
        assert_eq!(manifest.get_root(), Path::new(""));
    }

    #[test]
    fn test_set_root() {
        let mut manifest = SiteManifest::default();
        manifest.set_root(Path::new("/custom/path"));
        assert_eq!(manifest.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_manifest_defaults() {
        let manifest = SiteManifest::default();

        assert!(manifest.cli.is_none());
        assert_eq!(manifest.manifest_path, PathBuf::new());
        assert_eq!(manifest.site.title, "");
        assert_eq!(manifest.site.base_path, "/");
        assert_eq!(manifest.links.on_broken, BrokenLinkAction::Throw);
        assert_eq!(manifest.i18n.default_locale, "en");
        assert!(manifest.plugins.is_empty());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content =
            "[site]\ntitle = \"Test\"\ntagline = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (manifest, ignored) = SiteManifest::parse_with_ignored(content).unwrap();

        // Manifest should parse successfully
        assert_eq!(manifest.site.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ntitle = \"Test\"\ntagline = \"Test\"";
        let (_, ignored) = SiteManifest::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_builtin_record_is_valid() {
        let manifest = SiteManifest::builtin();
        let mut diag = ConfigDiagnostics::new();
        manifest.validate_record(&mut diag);
        assert!(!diag.has_errors(), "builtin record failed: {:?}", diag.errors());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_builtin_is_idempotent() {
        let a = toml::to_string(&SiteManifest::builtin()).unwrap();
        let b = toml::to_string(&SiteManifest::builtin()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_builtin_matches_shipped_site() {
        let manifest = SiteManifest::builtin();
        assert_eq!(manifest.site.title, "Mango Documentation");
        assert_eq!(manifest.site.url, "https://sdk.docs.mangoboost.io");
        assert_eq!(manifest.site.base_path, "/");
        assert_eq!(manifest.links.on_broken, BrokenLinkAction::Throw);
        assert_eq!(manifest.links.on_broken_markdown, BrokenLinkAction::Warn);
        assert_eq!(manifest.docs.path, PathBuf::from("docs_sdk"));
        assert_eq!(manifest.docs.route_base, "");
        assert!(!manifest.docs.blog.is_enabled());
        assert_eq!(manifest.theme.navbar.title, "SDK");
        assert!(manifest.theme.navbar.items.is_empty());
        assert!(manifest.plugins.is_empty());
    }

    #[test]
    fn test_builtin_roundtrips_through_toml() {
        let manifest = SiteManifest::builtin();
        let serialized = toml::to_string_pretty(&manifest).unwrap();
        let reparsed = SiteManifest::from_str(&serialized).unwrap();
        assert_eq!(toml::to_string(&reparsed).unwrap(), toml::to_string(&manifest).unwrap());
    }

    #[test]
    fn test_builtin_serialization_has_no_unknown_fields() {
        let serialized = toml::to_string_pretty(&SiteManifest::builtin()).unwrap();
        let (_, ignored) = SiteManifest::parse_with_ignored(&serialized).unwrap();
        assert!(ignored.is_empty());
    }
}
