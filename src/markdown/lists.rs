//! Flat ordered and unordered lists.
//!
//! Lines are fed through a two-state machine. The wrapper opened by the
//! first item stays open until a blank line or end of input, even when later
//! items use the other marker.

use regex::Regex;
use std::sync::LazyLock;

static ORDERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\. ").expect("valid ordered marker regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn open_tag(self) -> &'static str {
        match self {
            Self::Unordered => "<ul>",
            Self::Ordered => "<ol>",
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            Self::Unordered => "</ul>",
            Self::Ordered => "</ol>",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    OutsideList,
    InsideList(ListKind),
}

#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Item(ListKind, &'a str),
    Blank,
    Other,
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        if let Some(text) = line.strip_prefix("- ") {
            Self::Item(ListKind::Unordered, text)
        } else if let Some(marker) = ORDERED_MARKER.find(line) {
            Self::Item(ListKind::Ordered, &line[marker.end()..])
        } else if line.trim().is_empty() {
            Self::Blank
        } else {
            Self::Other
        }
    }
}

impl ListState {
    /// Emits the output for one source line and returns the next state.
    fn step(self, line: &str, out: &mut Vec<String>) -> Self {
        match (self, Line::classify(line)) {
            (Self::OutsideList, Line::Item(kind, text)) => {
                out.push(kind.open_tag().to_string());
                out.push(format!("<li>{text}</li>"));
                Self::InsideList(kind)
            }
            (Self::InsideList(open), Line::Item(_, text)) => {
                out.push(format!("<li>{text}</li>"));
                Self::InsideList(open)
            }
            (Self::InsideList(open), Line::Blank) => {
                out.push(open.close_tag().to_string());
                out.push(line.to_string());
                Self::OutsideList
            }
            (state, Line::Blank | Line::Other) => {
                out.push(line.to_string());
                state
            }
        }
    }

    fn finish(self, out: &mut Vec<String>) {
        if let Self::InsideList(open) = self {
            out.push(open.close_tag().to_string());
        }
    }
}

/// Wraps runs of `- ` and `N. ` lines in `<ul>`/`<ol>` with `<li>` items.
///
/// Every wrapper opened here is closed before returning.
pub(super) fn lists(text: &str) -> String {
    let mut out = Vec::new();
    let mut state = ListState::OutsideList;

    for line in text.split('\n') {
        state = state.step(line, &mut out);
    }
    state.finish(&mut out);

    out.join("\n")
}
