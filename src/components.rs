//! HTML components for wiki pages
//!
//! Maud component functions for the page shell: the sidebar navigation and
//! the layout wrapper that surrounds every converted markdown fragment.

pub mod layout;
pub mod nav;
