//! Markdown to HTML fragment conversion.
//!
//! The converter is a fixed pipeline of line-oriented rewrites: title
//! stripping, code fences, inline code, headers, emphasis, blockquotes,
//! horizontal rules, tables, lists and paragraphs. It covers the subset of
//! markdown used by wiki pages and is not a CommonMark parser. Constructs it
//! does not recognize pass through as literal text.

mod blocks;
mod code;
mod convert;
mod inline;
mod lists;
mod renderer;
mod tables;

pub use convert::{convert, convert_file};
pub use renderer::MarkdownRenderer;
