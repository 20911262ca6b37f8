//! Per-page outcomes of a build or rewrite run.

use std::fmt;
use std::path::PathBuf;

/// What happened to a single page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Page written to the given path
    Written(PathBuf),
    /// Page left alone, with the reason
    Skipped(String),
}

/// Outcome for one page, keyed by its output name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
    pub page: String,
    pub outcome: Outcome,
}

/// Outcomes in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pages: Vec<PageReport>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn written(&mut self, page: impl Into<String>, path: PathBuf) {
        self.pages.push(PageReport {
            page: page.into(),
            outcome: Outcome::Written(path),
        });
    }

    pub(crate) fn skipped(&mut self, page: impl Into<String>, reason: impl Into<String>) {
        self.pages.push(PageReport {
            page: page.into(),
            outcome: Outcome::Skipped(reason.into()),
        });
    }

    pub fn pages(&self) -> &[PageReport] {
        &self.pages
    }

    pub fn written_count(&self) -> usize {
        self.pages
            .iter()
            .filter(|p| matches!(p.outcome, Outcome::Written(_)))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.pages.len() - self.written_count()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} written, {} skipped",
            self.written_count(),
            self.skipped_count()
        )
    }
}
