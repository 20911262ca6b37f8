//! Utility functions for wikipress

/// Calculates the relative prefix from a page back to the output root.
///
/// Pages at the output root need no prefix. Each directory level in the
/// page path adds one `../`.
///
/// # Arguments
///
/// * `page`: Page path relative to the output directory, `/` separated
///
/// # Returns
///
/// Prefix such as `""` or `"../../"`
pub fn root_prefix(page: &str) -> String {
    "../".repeat(page.matches('/').count())
}
