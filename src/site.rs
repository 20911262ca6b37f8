//! Site building: markdown sources to complete wiki pages.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::assets::write_css_assets;
use crate::components::layout::wiki_page;
use crate::manifest::Manifest;
use crate::markdown::MarkdownRenderer;
use crate::report::Report;

/// Builds every page listed in the manifest.
///
/// Writes the stylesheet to `<output>/assets`, then converts each source in
/// manifest order and writes the wrapped page. A missing source is logged
/// and recorded as skipped; the remaining pages are still built.
///
/// # Arguments
///
/// * `manifest`: Validated site manifest
/// * `source_dir`: Directory that page sources are relative to
/// * `output_dir`: Directory to write pages into, created if missing
///
/// # Returns
///
/// Outcome for every manifest page, in manifest order
///
/// # Errors
///
/// Returns error if the output directory, a source file read, or a page
/// write fails for any reason other than a missing source
pub fn build_site(manifest: &Manifest, source_dir: &Path, output_dir: &Path) -> Result<Report> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;
    write_css_assets(&output_dir.join("assets"))?;

    let renderer = MarkdownRenderer::new();
    let mut report = Report::new();

    for page in &manifest.pages {
        let source = source_dir.join(&page.source);
        if !source.is_file() {
            warn!(source = %source.display(), page = %page.output, "skipping page, source not found");
            report.skipped(&page.output, format!("{} not found", page.source.display()));
            continue;
        }

        let markdown = fs::read_to_string(&source)
            .with_context(|| format!("Failed to read page source: {}", source.display()))?;
        let content = renderer.render(&markdown);
        debug!(page = %page.output, bytes = content.len(), "converted markdown");

        let html = wiki_page(manifest, &page.title, &content, &page.output).into_string();

        let target = output_dir.join(&page.output);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&target, html)
            .with_context(|| format!("Failed to write page: {}", target.display()))?;

        info!(page = %page.output, "built page");
        report.written(&page.output, target);
    }

    Ok(report)
}
