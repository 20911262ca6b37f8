//! Code fences and inline code spans.
//!
//! Rendered code is swapped out for placeholders so the remaining passes
//! never see its contents. A placeholder is `<`, a delimiter character, the
//! span index, the delimiter again and `>`. The delimiter is a private-use
//! character absent from the document, so text written by the author can
//! never be mistaken for a placeholder. Starting with `<` keeps paragraph
//! wrapping identical to the rendered tag the placeholder stands in for.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(\w*)\n(.*?)```").expect("valid fence regex"));

static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("valid inline code regex"));

/// Used only when every private-use character already occurs in the document.
const FALLBACK_MARKER: char = '\u{FDD0}';

/// Rendered code held aside while the remaining passes run.
#[derive(Debug)]
pub(super) struct ProtectedSpans {
    marker: char,
    spans: Vec<String>,
}

impl ProtectedSpans {
    /// Creates an empty store whose placeholders cannot occur in `text`.
    pub(super) fn for_text(text: &str) -> Self {
        let marker = ('\u{E000}'..='\u{F8FF}')
            .find(|c| !text.contains(*c))
            .unwrap_or(FALLBACK_MARKER);

        Self {
            marker,
            spans: Vec::new(),
        }
    }

    fn protect(&mut self, html: String) -> String {
        let token = format!("<{m}{}{m}>", self.spans.len(), m = self.marker);
        self.spans.push(html);
        token
    }

    /// Replaces every placeholder with the HTML it stands for.
    ///
    /// Anything that only resembles a placeholder is copied unchanged.
    pub(super) fn restore(&self, text: &str) -> String {
        if self.spans.is_empty() {
            return text.to_string();
        }

        let open = format!("<{}", self.marker);
        let mut result = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find(&open) {
            result.push_str(&rest[..start]);
            let after = &rest[start + open.len()..];
            match self.lookup(after) {
                Some((html, consumed)) => {
                    result.push_str(html);
                    rest = &after[consumed..];
                }
                None => {
                    result.push_str(&open);
                    rest = after;
                }
            }
        }

        result.push_str(rest);
        result
    }

    /// Parses `N<marker>>` at the start of `text`.
    ///
    /// Returns the stored HTML and the number of bytes consumed.
    fn lookup(&self, text: &str) -> Option<(&str, usize)> {
        let digits = text.find(|c: char| !c.is_ascii_digit())?;
        let close = format!("{}>", self.marker);
        if digits == 0 || !text[digits..].starts_with(&close) {
            return None;
        }

        let index = text[..digits].parse::<usize>().ok()?;
        let html = self.spans.get(index)?;
        Some((html.as_str(), digits + close.len()))
    }
}

/// Renders triple-backtick blocks as `<pre><code class="LANG">`.
///
/// Content is kept verbatim except for `<` and `>`, which are escaped.
/// An unterminated fence does not match and stays literal text.
pub(super) fn fenced_blocks(text: &str, spans: &mut ProtectedSpans) -> String {
    FENCE
        .replace_all(text, |caps: &Captures| {
            let lang = &caps[1];
            let code = escape_angle_brackets(&caps[2]);
            spans.protect(format!(r#"<pre><code class="{lang}">{code}</code></pre>"#))
        })
        .into_owned()
}

/// Renders backtick spans as `<code>`.
pub(super) fn inline_code(text: &str, spans: &mut ProtectedSpans) -> String {
    INLINE_CODE
        .replace_all(text, |caps: &Captures| {
            spans.protect(format!("<code>{}</code>", &caps[1]))
        })
        .into_owned()
}

/// Escapes angle brackets only. Ampersands stay as written.
fn escape_angle_brackets(code: &str) -> String {
    code.replace('<', "&lt;").replace('>', "&gt;")
}
