//! Unified diff rendering for previews.

use similar::TextDiff;

/// Render a unified diff from `original` to `updated`.
///
/// Returns an empty string when the two are identical.
pub fn render_diff(original: &str, updated: &str, label: &str) -> String {
    if original == updated {
        return String::new();
    }

    TextDiff::from_lines(original, updated)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{label}"), &format!("b/{label}"))
        .to_string()
}
