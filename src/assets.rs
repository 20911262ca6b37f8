//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const NAV: &str = include_str!("../assets/components/nav.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// File name of the bundled stylesheet inside the assets directory
pub const STYLESHEET: &str = "wiki.css";

/// Writes the bundled wiki stylesheet to the assets directory
///
/// # Errors
///
/// Returns error if the directory cannot be created or the file written
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir).with_context(|| {
        format!("Failed to create assets directory: {}", assets_dir.display())
    })?;
    write_bundled(assets_dir, STYLESHEET, &[BASE, NAV, MARKDOWN])
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
