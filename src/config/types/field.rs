//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for manifest field paths.
///
/// Used with [`manifest_fields!`] to generate compile-time checked
/// field path accessors.
///
/// # Example
///
/// ```ignore
/// manifest_fields!(SiteMetaConfig, "site", SiteMetaFields { title, url });
///
/// // Generated:
/// impl SiteMetaConfig {
///     pub const FIELDS: SiteMetaFields = ...;
/// }
///
/// // Usage:
/// diag.error(SiteMetaConfig::FIELDS.url, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Build a field path for an indexed entry, e.g. `plugins[2].id`.
    ///
    /// The formatted string is leaked; paths are only produced on the
    /// diagnostics path, which runs once per process.
    pub fn indexed(collection: &str, index: usize, field: &str) -> Self {
        Self(Box::leak(
            format!("{collection}[{index}].{field}").into_boxed_str(),
        ))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Generate a `FIELDS` table of [`FieldPath`]s for a config section.
///
/// Each listed field becomes a `FieldPath` of the form
/// `"<section>.<field>"`, giving validation code compile-checked
/// accessors instead of scattered string literals.
macro_rules! manifest_fields {
    ($ty:ident, $section:literal, $fields:ident { $($field:ident),+ $(,)? }) => {
        #[doc = concat!("Field paths for `[", $section, "]`.")]
        #[derive(Debug, Clone, Copy)]
        pub struct $fields {
            $(pub $field: $crate::config::types::FieldPath,)+
        }

        impl $ty {
            /// TOML section this config deserializes from.
            pub const SECTION: &'static str = $section;

            /// Compile-time checked field paths for diagnostics.
            pub const FIELDS: $fields = $fields {
                $($field: $crate::config::types::FieldPath::new(
                    concat!($section, ".", stringify!($field)),
                ),)+
            };
        }
    };
}

pub(crate) use manifest_fields;
