//! Sidebar navigation component

use maud::{Markup, html};

use crate::manifest::{Link, Manifest, NavLink, NavSection};

/// Renders the wiki sidebar
///
/// Shows the site logo and tagline, then each navigation section with its
/// links. The link whose page matches `active_page` is highlighted.
///
/// # Arguments
///
/// * `site`: Manifest providing name, tagline and home link
/// * `sections`: Navigation sections in display order
/// * `active_page`: Output file name of the page being rendered
///
/// # Returns
///
/// Sidebar `nav` markup
pub fn sidebar(site: &Manifest, sections: &[NavSection], active_page: &str) -> Markup {
    html! {
        nav class="sidebar" {
            div class="sidebar-header" {
                a href=(site.home) class="sidebar-logo" {
                    div class="sidebar-logo-icon" { (logo_letter(&site.name)) }
                    span class="sidebar-logo-text" { (site.name) }
                }
                @if let Some(tagline) = &site.tagline {
                    div class="sidebar-tagline" { (tagline) }
                }
            }
            @for section in sections {
                div class="nav-section" { (section.title) }
                @for link in &section.links {
                    (nav_link(link, active_page))
                }
            }
        }
    }
}

/// Renders one sidebar link, marking it active when its page matches
pub fn nav_link(link: &NavLink, active_page: &str) -> Markup {
    let class = if link.page == active_page {
        "nav-link active"
    } else {
        "nav-link"
    };

    html! {
        a href=(link.href) class=(class) { (link.text) }
    }
}

/// Renders the link pinned below the sidebar
pub fn back_link(link: &Link) -> Markup {
    html! {
        a href=(link.href) class="back-link" {
            span { "←" }
            " " (link.text)
        }
    }
}

fn logo_letter(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
