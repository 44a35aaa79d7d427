//! Strategy 2: pair quoted titles with UUID-shaped identifiers by proximity.

use crate::types::Notebook;
use std::collections::HashSet;

// -----------------------------------------------------------------------------
//
/// Finds quoted title candidates and UUID-shaped identifiers in the
/// unescaped payload text, then pairs each identifier with the nearest title.
///
/// Identifiers are deduplicated by first occurrence. An identifier with no
/// title candidate anywhere in the text produces nothing, which lets the
/// bare-identifier scan take over.
#[must_use]
pub(crate) fn from_quoted_pairs(payload: &str) -> Vec<Notebook> {
    let titles: Vec<(usize, &str)> = super::title_pattern()
        .captures_iter(payload)
        .filter_map(|capture| {
            let matched = capture.get(1)?;
            // A quoted UUID is an identifier, not a title.
            if super::uuid_pattern().is_match(matched.as_str()) {
                return None;
            } // if
            Some((matched.start(), matched.as_str()))
        })
        .collect();

    if titles.is_empty() {
        return Vec::new();
    } // if

    let mut seen: HashSet<&str> = HashSet::new();
    let mut notebooks = Vec::new();

    for identifier in super::uuid_pattern().find_iter(payload) {
        if !seen.insert(identifier.as_str()) {
            continue;
        } // if

        let nearest = titles
            .iter()
            .min_by_key(|(position, _)| position.abs_diff(identifier.start()))
            .map(|(_, title)| (*title).to_string())
            .unwrap_or_default();

        notebooks.push(Notebook {
            id: identifier.as_str().to_string(),
            title: nearest,
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
    fn test_pairs_by_proximity() {
        let payload = r#"["First Notebook","11111111-2222-4333-8444-555555555555",
            "Second Notebook","66666666-7777-4888-9999-aaaaaaaaaaaa"]"#;
        let notebooks = from_quoted_pairs(payload);
        assert_eq!(notebooks.len(), 2);
        assert_eq!(notebooks[0].title, "First Notebook");
        assert_eq!(notebooks[1].title, "Second Notebook");
    }

    #[test]
    fn test_duplicate_identifiers_collapse() {
        let payload = r#""Only Title" 11111111-2222-4333-8444-555555555555
            11111111-2222-4333-8444-555555555555"#;
        let notebooks = from_quoted_pairs(payload);
        assert_eq!(notebooks.len(), 1);
    }

    #[test]
    fn test_no_titles_means_no_pairs() {
        let payload = "11111111-2222-4333-8444-555555555555";
        assert!(from_quoted_pairs(payload).is_empty());
    }
}
