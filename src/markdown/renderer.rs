//! Renderer handle used by the site builder.

use anyhow::Result;
use std::path::Path;

use super::convert::{convert, convert_file};

/// Renders wiki markdown to HTML fragments.
///
/// Holds no state: every call runs the full conversion pipeline on its own
/// input, so one renderer can be shared across all pages of a build.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Converts markdown text to an HTML fragment.
    pub fn render(&self, content: &str) -> String {
        convert(content)
    }

    /// Reads a markdown file and renders it.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid UTF8
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        convert_file(path)
    }
}
