//! Manifest section definitions.
//!
//! Each module corresponds to a section in `docsite.toml`:
//!
//! | Module     | TOML Section   | Purpose                              |
//! |------------|----------------|--------------------------------------|
//! | `site`     | `[site]`       | Site identity (title, url, base)     |
//! | `links`    | `[links]`      | Broken-link policy                   |
//! | `i18n`     | `[i18n]`       | Locale declarations                  |
//! | `docs`     | `[docs]`       | Documentation content preset         |
//! | `theme`    | `[theme]`      | Card image, navbar, footer, highlight|
//! | `plugins`  | `[[plugins]]`  | Extra content sources                |

pub mod docs;
mod i18n;
mod links;
mod plugins;
mod site;
pub mod theme;

// Re-export section configs
pub use docs::{BlogOptions, BlogSetting, DocsConfig};
pub use i18n::I18nConfig;
pub use links::{BrokenLinkAction, LinksConfig};
pub use plugins::{PluginConfig, validate_plugins};
pub use site::SiteMetaConfig;
pub use theme::ThemeConfig;
