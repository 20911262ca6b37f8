//! Line-level block passes: title, headers, blockquotes, rules, paragraphs.

use regex::Regex;
use std::sync::LazyLock;

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A#[^#\n]+\n+").expect("valid title regex"));

static H3: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^### (.+)$").expect("valid h3 regex"));

static H2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## (.+)$").expect("valid h2 regex"));

static BLOCKQUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^> (.+)$").expect("valid blockquote regex"));

static RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^---+$").expect("valid rule regex"));

static BLOCK_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\n+").expect("valid block break regex"));

/// Removes a leading `# Title` line and the blank lines after it.
///
/// The page title is rendered by the page shell, so the document's own
/// top-level heading would otherwise appear twice.
pub(super) fn strip_title(text: &str) -> String {
    TITLE.replace(text, "").into_owned()
}

/// Converts `###` and `##` lines, longest prefix first.
pub(super) fn headers(text: &str) -> String {
    let text = H3.replace_all(text, "<h3>${1}</h3>");
    H2.replace_all(&text, "<h2>${1}</h2>").into_owned()
}

/// One blockquote per `> ` line. Consecutive lines are not merged.
pub(super) fn blockquotes(text: &str) -> String {
    BLOCKQUOTE
        .replace_all(text, "<blockquote><p>${1}</p></blockquote>")
        .into_owned()
}

pub(super) fn horizontal_rules(text: &str) -> String {
    RULE.replace_all(text, "<hr>").into_owned()
}

/// Wraps bare text blocks in `<p>`.
///
/// Blocks are separated by two or more newlines. Blocks that already start
/// with a tag, or with `#`, pass through untouched.
pub(super) fn paragraphs(text: &str) -> String {
    BLOCK_BREAK
        .split(text)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| {
            if block.starts_with('<') || block.starts_with('#') {
                block.to_string()
            } else {
                format!("<p>{block}</p>")
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
