//! In-place replacement of the main content of generated pages.
//!
//! A fragment `<name>.html` in the fragments directory replaces whatever sits
//! inside `<main class="main-content ...">` of the same-named page. A
//! `wiki-footer` div inside the main section is preserved.

use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{info, warn};

use crate::report::Report;

static MAIN_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<main class="main-content[^"]*">"#).expect("valid main regex")
});

const FOOTER_OPEN: &str = r#"<div class="wiki-footer">"#;
const MAIN_CLOSE: &str = "</main>";

/// Replaces the main content section of a page.
///
/// Keeps everything up to and including the opening `main` tag, then the
/// fragment, then the rest of the page starting at the footer div (when
/// one sits inside the main section) or at `</main>`. The indentation of
/// that closing line is kept. The opening tag, class included, is not
/// touched.
///
/// # Arguments
///
/// * `page`: Full page HTML
/// * `fragment`: Replacement content
///
/// # Returns
///
/// Updated page, or `None` when the page has no main content section
pub fn splice_main_content(page: &str, fragment: &str) -> Option<String> {
    let open = MAIN_OPEN.find(page)?;
    let body = &page[open.end()..];
    let close = body.find(MAIN_CLOSE)?;

    let tail_at = match body[..close].find(FOOTER_OPEN) {
        Some(footer) => footer,
        None => close,
    };
    let tail_at = open.end() + line_indent_start(body, tail_at);

    let mut result = String::with_capacity(page.len() + fragment.len());
    result.push_str(&page[..open.end()]);
    result.push_str(fragment.trim_end());
    result.push('\n');
    result.push_str(&page[tail_at..]);
    Some(result)
}

/// Moves `pos` back over spaces and tabs preceding it on the same line.
fn line_indent_start(text: &str, pos: usize) -> usize {
    let indent = text[..pos]
        .bytes()
        .rev()
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count();
    pos - indent
}

/// Applies every fragment in `fragments_dir` to its page in `pages_dir`.
///
/// Fragments are processed in file name order. A page that does not exist
/// or has no main content section is skipped and reported.
///
/// # Errors
///
/// Returns error if the fragments directory cannot be listed or a file
/// cannot be read or written
pub fn rewrite_pages(fragments_dir: &Path, pages_dir: &Path) -> Result<Report> {
    let mut report = Report::new();

    for fragment_path in list_fragments(fragments_dir)? {
        let Some(name) = fragment_path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        let page_path = pages_dir.join(name);
        if !page_path.is_file() {
            warn!(page = %name, "page not found");
            report.skipped(name, "page not found");
            continue;
        }

        let fragment = fs::read_to_string(&fragment_path)
            .with_context(|| format!("Failed to read fragment: {}", fragment_path.display()))?;
        let page = fs::read_to_string(&page_path)
            .with_context(|| format!("Failed to read page: {}", page_path.display()))?;

        let Some(updated) = splice_main_content(&page, &fragment) else {
            warn!(page = %name, "page has no main content section");
            report.skipped(name, "no main content section");
            continue;
        };

        fs::write(&page_path, updated)
            .with_context(|| format!("Failed to write page: {}", page_path.display()))?;

        info!(page = %name, "updated page");
        report.written(name, page_path);
    }

    Ok(report)
}

fn list_fragments(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to list fragments: {}", dir.display()))?;

    let mut fragments = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to list fragments: {}", dir.display()))?
            .path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("html") {
            fragments.push(path);
        }
    }
    fragments.sort();

    Ok(fragments)
}
