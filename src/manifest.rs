//! Site manifest: pages, titles and navigation.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Site description loaded from `wiki.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Site name shown in the sidebar logo and page titles
    pub name: String,

    /// Short line under the logo
    #[serde(default)]
    pub tagline: Option<String>,

    /// Link target of the sidebar logo
    #[serde(default = "default_home")]
    pub home: String,

    /// Link pinned to the bottom of the sidebar
    #[serde(default)]
    pub back_link: Option<Link>,

    /// Sidebar sections in display order
    #[serde(default)]
    pub nav: Vec<NavSection>,

    /// Pages to build in order
    pub pages: Vec<PageEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    pub href: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavSection {
    pub title: String,
    pub links: Vec<NavLink>,
}

/// Sidebar link. `page` is the output file name used to mark the active link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub href: String,
    pub text: String,
    pub page: String,
}

/// One markdown source and the page built from it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageEntry {
    /// Markdown file relative to the source directory
    pub source: PathBuf,
    /// HTML file relative to the output directory
    pub output: String,
    /// Display title
    pub title: String,
}

fn default_home() -> String {
    "index.html".to_string()
}

impl Manifest {
    /// Reads and validates a manifest file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid TOML for a
    /// manifest, or fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;

        Self::from_toml(&data).with_context(|| format!("Invalid manifest: {}", path.display()))
    }

    /// Parses and validates manifest text.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_toml(data: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(data).context("Failed to parse manifest TOML")?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Validates page entries.
    ///
    /// # Errors
    ///
    /// Returns error if there are no pages, an output name is duplicated,
    /// absolute, escapes the output directory or lacks the `.html`
    /// extension, or a source path is absolute.
    pub fn validate(&self) -> Result<()> {
        if self.pages.is_empty() {
            bail!("Manifest declares no pages");
        }

        let mut outputs = HashSet::new();
        for page in &self.pages {
            if page.source.is_absolute() {
                bail!("Page source must be relative: {}", page.source.display());
            }
            if !page.output.ends_with(".html") {
                bail!("Page output must end in .html: {}", page.output);
            }
            if page.output.starts_with('/') || page.output.split('/').any(|part| part == "..") {
                bail!("Page output must stay inside the output directory: {}", page.output);
            }
            if !outputs.insert(page.output.as_str()) {
                bail!("Duplicate page output: {}", page.output);
            }
        }

        Ok(())
    }

    /// Returns sidebar sections.
    ///
    /// Falls back to a single "Pages" section listing every page when the
    /// manifest declares no navigation.
    pub fn navigation(&self) -> Vec<NavSection> {
        if !self.nav.is_empty() {
            return self.nav.clone();
        }

        vec![NavSection {
            title: "Pages".to_string(),
            links: self
                .pages
                .iter()
                .map(|page| NavLink {
                    href: page.output.clone(),
                    text: page.title.clone(),
                    page: page.output.clone(),
                })
                .collect(),
        }]
    }
}
