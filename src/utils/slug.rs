//! URL slug derived from a post title.
//!
//! Matches Hugo's default permalink for a title: lowercase, spaces become
//! hyphens, everything else is kept as-is.

/// Convert a post title to the path segment used in its permalink.
pub fn title_slug(title: &str) -> String {
    title
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}
