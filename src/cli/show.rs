//! Print the assembled site record.

use std::fs;
use std::io::Write;

use anyhow::Result;

use crate::cli::{ShowArgs, ShowFormat};
use crate::config::{Site, SiteManifest};
use crate::log;

/// Assemble the manifest and print it in the requested format.
pub fn show_site(manifest: &SiteManifest, args: &ShowArgs) -> Result<()> {
    let site = match args.year {
        Some(year) => Site::assemble_at(manifest, year)?,
        None => Site::assemble(manifest)?,
    };

    let formatted = format_site(&site, args)?;

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("show"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

fn format_site(site: &Site, args: &ShowArgs) -> Result<String> {
    let value = site.to_value();
    let formatted = match args.format {
        ShowFormat::Toml => toml::to_string_pretty(&value)?,
        ShowFormat::Json if args.pretty => serde_json::to_string_pretty(&value)?,
        ShowFormat::Json => serde_json::to_string(&value)?,
    };
    Ok(formatted)
}

// ============================================================================
// Tests
// ============================================================================
