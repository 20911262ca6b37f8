//! Pipe tables.
//!
//! A table is a header row, a separator row and at least one body row.
//! Rows begin and end with `|`. The first line that is not a row ends the
//! table and is kept as ordinary text.

/// Replaces every table block with a single-line `<table>` element.
pub(super) fn tables(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        match table_end(&lines, i) {
            Some(end) => {
                out.push(render_table(lines[i], &lines[i + 2..end]));
                i = end;
            }
            None => {
                out.push(lines[i].to_string());
                i += 1;
            }
        }
    }

    out.join("\n")
}

/// Returns the index one past the last body row of a table starting at `start`.
fn table_end(lines: &[&str], start: usize) -> Option<usize> {
    let header = lines.get(start)?;
    let separator = lines.get(start + 1)?;
    if !is_row(header) || !is_separator(separator) {
        return None;
    }

    let body_rows = lines[start + 2..]
        .iter()
        .take_while(|line| is_row(line))
        .count();

    (body_rows > 0).then_some(start + 2 + body_rows)
}

fn is_row(line: &str) -> bool {
    line.len() >= 3 && line.starts_with('|') && line.ends_with('|')
}

fn is_separator(line: &str) -> bool {
    is_row(line)
        && line
            .chars()
            .all(|c| matches!(c, '-' | ':' | '|' | ' '))
}

/// Splits a row on `|`, trimming cells and dropping empty ones.
fn cells(row: &str) -> impl Iterator<Item = &str> {
    row.split('|').map(str::trim).filter(|cell| !cell.is_empty())
}

fn render_table(header: &str, body: &[&str]) -> String {
    let mut html = String::from("<table><thead><tr>");
    for cell in cells(header) {
        html.push_str(&format!("<th>{cell}</th>"));
    }
    html.push_str("</tr></thead><tbody>");

    for row in body {
        html.push_str("<tr>");
        for cell in cells(row) {
            html.push_str(&format!("<td>{cell}</td>"));
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table>");
    html
}
