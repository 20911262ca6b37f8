//! Static wiki page generator for markdown documents.

mod assets;
pub mod components;
mod config;
mod manifest;
mod markdown;
mod report;
mod rewrite;
mod site;
mod util;

pub use assets::write_css_assets;
pub use config::{BuildArgs, Command, Config, RewriteArgs};
pub use manifest::{Link, Manifest, NavLink, NavSection, PageEntry};
pub use markdown::{MarkdownRenderer, convert, convert_file};
pub use report::{Outcome, PageReport, Report};
pub use rewrite::{rewrite_pages, splice_main_content};
pub use site::build_site;
