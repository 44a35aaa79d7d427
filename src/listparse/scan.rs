//! Strategy 3: synthesize entities from bare UUID-shaped identifiers.

use crate::types::Notebook;
use std::collections::HashSet;

// -----------------------------------------------------------------------------
//
/// How far back to look for a quoted title before an identifier.
const TITLE_WINDOW: usize = 500;

/// How far ahead to look for a short quoted tag (emoji) after an identifier.
const TAG_WINDOW: usize = 100;

// -----------------------------------------------------------------------------
//
/// Enumerates every UUID-shaped identifier, deduplicated by first occurrence,
/// and synthesizes an entity per identifier: the nearest preceding quoted
/// string inside the title window becomes the title, the nearest following
/// 1–2 character quoted string inside the tag window becomes the emoji.
#[must_use]
pub(crate) fn from_uuid_scan(body: &str) -> Vec<Notebook> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut notebooks = Vec::new();

    for identifier in super::uuid_pattern().find_iter(body) {
        if !seen.insert(identifier.as_str()) {
            continue;
        } // if

        let window_start =
            super::floor_char_boundary(body, identifier.start().saturating_sub(TITLE_WINDOW));
        let before = &body[window_start..identifier.start()];
        let title = super::title_pattern()
            .captures_iter(before)
            .filter_map(|capture| capture.get(1))
            .filter(|matched| !super::uuid_pattern().is_match(matched.as_str()))
            .last()
            .map(|matched| matched.as_str().to_string())
            .unwrap_or_default();

        let window_end = super::floor_char_boundary(body, identifier.end() + TAG_WINDOW);
        let after = &body[identifier.end()..window_end];
        let emoji = super::tag_pattern()
            .captures_iter(after)
            .filter_map(|capture| capture.get(1))
            .map(|matched| matched.as_str().to_string())
            .next()
            .unwrap_or_default();

        notebooks.push(Notebook {
            id: identifier.as_str().to_string(),
            title,
            emoji,
            ..Notebook::default()
        }); // push
    } // for

    notebooks
} // fn

// -----------------------------------------------------------------------------
//
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_within_window() {
        let body = r#"noise "Quarterly Report" noise 11111111-2222-4333-8444-555555555555"#;
        let notebooks = from_uuid_scan(body);
        assert_eq!(notebooks.len(), 1);
        assert_eq!(notebooks[0].title, "Quarterly Report");
    }

    #[test]
    fn test_title_outside_window_is_ignored() {
        let padding = "x".repeat(600);
        let body =
            format!(r#""Too Far Away" {padding} 11111111-2222-4333-8444-555555555555"#);
        let notebooks = from_uuid_scan(&body);
        assert_eq!(notebooks.len(), 1);
        assert!(notebooks[0].title.is_empty());
    }

    #[test]
    fn test_following_tag_becomes_emoji() {
        let body = r#""My Notes" 11111111-2222-4333-8444-555555555555,"🦀",true"#;
        let notebooks = from_uuid_scan(body);
        assert_eq!(notebooks[0].emoji, "🦀");
    }

    #[test]
    fn test_nearest_preceding_title_wins() {
        let body = r#""Older Title" then "Newer Title" 11111111-2222-4333-8444-555555555555"#;
        let notebooks = from_uuid_scan(body);
        assert_eq!(notebooks[0].title, "Newer Title");
    }

    #[test]
    fn test_deduplicates_by_first_occurrence() {
        let body = r#""A Title" 11111111-2222-4333-8444-555555555555 and again
            11111111-2222-4333-8444-555555555555"#;
        assert_eq!(from_uuid_scan(body).len(), 1);
    }
}
