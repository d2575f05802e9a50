//! Excerpt derivation
//!
//! A display convenience: the body with markup stripped, cut to a fixed
//! character budget. Not meant to be reversible.

use lazy_static::lazy_static;
use regex::Regex;

/// Character budget for derived excerpts
pub const EXCERPT_LENGTH: usize = 160;

lazy_static! {
    /// Whole heading lines, text included
    static ref HEADING: Regex = Regex::new(r"(?m)^#+\s+.*$").unwrap();
    static ref IMAGE: Regex = Regex::new(r"!\[.*?\]\(.*?\)").unwrap();
    static ref LINK: Regex = Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap();
}

/// Derive an excerpt from an MDX body: drop heading lines and image embeds,
/// keep link display text, trim, then cut to [`EXCERPT_LENGTH`] characters
/// with a trailing ellipsis marker.
pub fn derive(body: &str) -> String {
    let text = HEADING.replace_all(body, "");
    let text = IMAGE.replace_all(&text, "");
    let text = LINK.replace_all(&text, "$1");

    let cut: String = text.trim().chars().take(EXCERPT_LENGTH).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_lines_are_dropped_entirely() {
        let body = "# Binary Search\n\nHalve the range on every probe.";
        assert_eq!(derive(body), "Halve the range on every probe....");
    }

    #[test]
    fn test_images_are_dropped() {
        let body = "Before ![diagram](/images/tree.png) after.";
        assert_eq!(derive(body), "Before  after....");
    }

    #[test]
    fn test_links_keep_their_display_text() {
        let body = "See [the docs](https://example.com/docs) for details.";
        assert_eq!(derive(body), "See the docs for details....");
    }

    #[test]
    fn test_truncates_to_budget_by_characters() {
        let body = "x".repeat(500);
        let excerpt = derive(&body);
        assert_eq!(excerpt.chars().count(), EXCERPT_LENGTH + 3);
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn test_multibyte_body_truncates_on_char_boundaries() {
        let body = "二分搜索".repeat(100);
        let excerpt = derive(&body);
        assert_eq!(excerpt.chars().count(), EXCERPT_LENGTH + 3);
    }

    #[test]
    fn test_short_body_still_gets_the_marker() {
        assert_eq!(derive("Short."), "Short....");
        assert_eq!(derive(""), "...");
    }
}
