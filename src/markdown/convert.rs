//! The conversion pipeline.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::code::{self, ProtectedSpans};
use super::{blocks, inline, lists, tables};

/// Converts a markdown document into an HTML fragment.
///
/// Passes run in a fixed order, each one rewriting the output of the
/// previous: title stripping, code fences, inline code, headers, emphasis,
/// blockquotes, horizontal rules, tables, lists, paragraphs. Code is held
/// aside as soon as it is rendered and restored last, so no later pass can
/// touch its contents.
///
/// Conversion never fails. Text that matches no rule is passed through in
/// order.
///
/// # Arguments
///
/// * `markdown`: Document text, usually starting with a `# Title` line
///
/// # Returns
///
/// HTML fragment for embedding in a page shell
///
/// # Examples
///
/// ```
/// let html = wikipress::convert("# Title\n\nSome **bold** text.\n");
/// assert_eq!(html, "<p>Some <strong>bold</strong> text.</p>");
/// ```
pub fn convert(markdown: &str) -> String {
    let mut spans = ProtectedSpans::for_text(markdown);

    let text = blocks::strip_title(markdown);
    let text = code::fenced_blocks(&text, &mut spans);
    let text = code::inline_code(&text, &mut spans);
    let text = blocks::headers(&text);
    let text = inline::emphasis(&text);
    let text = blocks::blockquotes(&text);
    let text = blocks::horizontal_rules(&text);
    let text = tables::tables(&text);
    let text = lists::lists(&text);
    let text = blocks::paragraphs(&text);

    spans.restore(&text)
}

/// Reads a markdown file and converts it.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid UTF8
pub fn convert_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read markdown file: {}", path.display()))?;
    Ok(convert(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn without_newlines(html: &str) -> String {
        html.replace('\n', "")
    }

    #[test]
    fn test_plain_text_single_paragraph() {
        // Arrange & Act
        let html = convert("  Just some plain words.  \n");

        // Assert
        assert_eq!(html, "<p>Just some plain words.</p>");
    }

    #[test]
    fn test_empty_document() {
        // Arrange & Act & Assert
        assert_eq!(convert(""), "");
        assert_eq!(convert("# Title\n\n"), "");
    }

    #[test]
    fn test_title_is_stripped() {
        // Arrange & Act
        let html = convert("# Memory Lattice\n\nIntro.\n");

        // Assert
        assert_eq!(html, "<p>Intro.</p>");
        assert!(!html.contains("Memory Lattice"), "Title belongs to the shell");
    }

    #[test]
    fn test_fence_escapes_angle_brackets() {
        // Arrange & Act
        let html = convert("```\n<b>x</b>\n```");

        // Assert
        assert!(
            html.starts_with("<pre><code class=\"\">&lt;b&gt;x&lt;/b&gt;"),
            "Unexpected fence output: {html}"
        );
        assert!(html.ends_with("</code></pre>"));
        assert!(!html.contains("<p>"), "Fence must not be wrapped in a paragraph");
    }

    #[test]
    fn test_fence_contents_untouched_by_later_passes() {
        // Arrange
        let markdown = "```python\n## not a header\n*args, **kwargs\n- not a list\n\n| a | b |\n```\n";

        // Act
        let html = convert(markdown);

        // Assert
        assert_eq!(
            html,
            "<pre><code class=\"python\">## not a header\n*args, **kwargs\n- not a list\n\n| a | b |\n</code></pre>"
        );
    }

    #[test]
    fn test_inline_code_contents_untouched() {
        // Arrange & Act
        let html = convert("Call it as `f(*args)` here.");

        // Assert
        assert_eq!(html, "<p>Call it as <code>f(*args)</code> here.</p>");
    }

    #[test]
    fn test_header_precedence() {
        // Arrange & Act
        let html = convert("### Sub\n");

        // Assert
        assert_eq!(html, "<h3>Sub</h3>");
        assert!(!html.contains("<h2>"), "### must not also match ##");
    }

    #[test]
    fn test_bold_and_italic() {
        // Arrange & Act
        let html = convert("**bold** and *italic*");

        // Assert
        assert_eq!(html, "<p><strong>bold</strong> and <em>italic</em></p>");
    }

    #[test]
    fn test_list_closed_without_trailing_blank_line() {
        // Arrange & Act
        let html = convert("- a\n- b\n");

        // Assert
        assert_eq!(without_newlines(&html), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_list_items_keep_inline_markup() {
        // Arrange & Act
        let html = convert("1. **Memory** first\n2. `code` second");

        // Assert
        assert_eq!(
            without_newlines(&html),
            "<ol><li><strong>Memory</strong> first</li><li><code>code</code> second</li></ol>"
        );
    }

    #[test]
    fn test_mixed_list_markers_keep_first_wrapper() {
        // Arrange: known edge case, ordered item directly after unordered item
        let markdown = "- a\n1. b\n";

        // Act
        let html = convert(markdown);

        // Assert
        assert_eq!(without_newlines(&html), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_table_conversion() {
        // Arrange
        let markdown = "| Name | Age |\n|------|-----|\n| Ann  | 30  |\n";

        // Act
        let html = convert(markdown);

        // Assert
        assert_eq!(
            html,
            "<table><thead><tr><th>Name</th><th>Age</th></tr></thead>\
             <tbody><tr><td>Ann</td><td>30</td></tr></tbody></table>"
        );
        assert!(!html.contains("---"), "Separator row must not appear");
    }

    #[test]
    fn test_blockquote_and_rule() {
        // Arrange & Act
        let html = convert("> A *quote*\n\n---\n\nAfter.");

        // Assert
        assert_eq!(
            html,
            "<blockquote><p>A <em>quote</em></p></blockquote>\n\n<hr>\n\n<p>After.</p>"
        );
    }

    #[test]
    fn test_unterminated_fence_degrades_to_text() {
        // Arrange & Act
        let html = convert("```\nopen fence");

        // Assert
        assert_eq!(html, "<p>```\nopen fence</p>");
    }

    #[test]
    fn test_block_starting_with_inline_code_is_not_wrapped() {
        // Arrange & Act
        let html = convert("`wikipress build` writes pages.");

        // Assert
        assert_eq!(
            html, "<code>wikipress build</code> writes pages.",
            "Blocks starting with a tag pass through"
        );
    }

    #[test]
    fn test_literal_comment_marker_is_kept() {
        // Arrange & Act
        let html = convert("Literal <!--wikipress:0--> marker and `code`.");

        // Assert
        assert_eq!(
            html,
            "<p>Literal <!--wikipress:0--> marker and <code>code</code>.</p>",
            "Author text resembling a placeholder must stay as written"
        );
    }

    #[test]
    fn test_private_use_characters_in_text() {
        // Arrange & Act
        let html = convert("\u{E000} then `x` and \u{E001}0\u{E001}");

        // Assert
        assert_eq!(html, "<p>\u{E000} then <code>x</code> and \u{E001}0\u{E001}</p>");
    }

    #[test]
    fn test_crlf_line_endings_are_not_normalized() {
        // Arrange & Act
        let paragraphs = convert("a\r\n\r\nb");
        let rule = convert("---\r\n");
        let table = convert("| a |\r\n|---|\r\n| 1 |\r\n");

        // Assert
        assert_eq!(paragraphs, "<p>a\r\n\r\nb</p>", "CRLF blank line does not split");
        assert_eq!(rule, "<p>---</p>", "Carriage return blocks the rule match");
        assert!(!table.contains("<table>"), "CRLF rows are not table rows: {table}");
    }

    #[test]
    fn test_full_document() {
        // Arrange
        let markdown = "\
# Architecture

The system has **three** layers.

## Layers

1. Purpose
2. Self
3. Actions

```text
HOLON
  <purpose>
```

| Layer | Role |
|-------|------|
| Self  | Memory |

> Agents with agency
";

        // Act
        let html = convert(markdown);

        // Assert
        let expected = "\
<p>The system has <strong>three</strong> layers.</p>

<h2>Layers</h2>

<ol>
<li>Purpose</li>
<li>Self</li>
<li>Actions</li>
</ol>

<pre><code class=\"text\">HOLON
  &lt;purpose&gt;
</code></pre>

<table><thead><tr><th>Layer</th><th>Role</th></tr></thead><tbody><tr><td>Self</td><td>Memory</td></tr></tbody></table>

<blockquote><p>Agents with agency</p></blockquote>";
        assert_eq!(html, expected);
    }

    #[test]
    fn test_convert_file_missing() {
        // Arrange & Act
        let result = convert_file("does/not/exist.md");

        // Assert
        assert!(result.is_err(), "Missing file should be an error");
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("exist.md"), "Error names the file: {message}");
    }
}
