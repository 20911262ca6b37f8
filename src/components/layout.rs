//! Page layout wrapper component

use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::nav::{back_link, sidebar};
use crate::manifest::Manifest;
use crate::util::root_prefix;

/// Wraps a converted fragment in the wiki page shell
///
/// Provides DOCTYPE, head, sidebar navigation, back link and the main
/// content area. The title is rendered as the page `h1` and escaped; the
/// fragment is inserted as-is.
///
/// # Arguments
///
/// * `site`: Manifest providing site name, navigation and links
/// * `title`: Page title text (without site suffix)
/// * `content`: HTML fragment produced by the markdown converter
/// * `active_page`: Output path of this page, used for the active nav link
///   and for resolving the stylesheet path
///
/// # Returns
///
/// Complete HTML document
pub fn wiki_page(site: &Manifest, title: &str, content: &str, active_page: &str) -> Markup {
    let root = root_prefix(active_page);
    let sections = site.navigation();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - " (site.name) " Wiki" }
                link rel="icon" type="image/png" sizes="32x32" href="/favicon-32x32.png";
                link rel="stylesheet" href=(format!("{root}assets/wiki.css"));
            }
            body {
                div class="void-bg" {}
                div class="wiki-container" {
                    (sidebar(site, &sections, active_page))
                    @if let Some(link) = &site.back_link {
                        (back_link(link))
                    }
                    main class="main-content" {
                        h1 { (title) }
                        (PreEscaped(content))
                    }
                }
            }
        }
    }
}
