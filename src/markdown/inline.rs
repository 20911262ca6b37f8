//! Emphasis spans.

use regex::Regex;
use std::sync::LazyLock;

static STRONG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid strong regex"));

static EM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("valid emphasis regex"));

/// Converts `**bold**` then `*italic*`.
///
/// Bold runs first so a double-asterisk span is never split into two
/// single-asterisk matches.
pub(super) fn emphasis(text: &str) -> String {
    let text = STRONG.replace_all(text, "<strong>${1}</strong>");
    EM.replace_all(&text, "<em>${1}</em>").into_owned()
}
