//! Resilient extraction of notebook lists from chunked payloads.
//!
//! List responses embed their entities in a heavily escaped, sometimes
//! truncated string slot, and upstream proxies occasionally leave stray
//! chunk-size lines attached. Three strategies run in order, each more
//! tolerant and less precise than the one before:
//!
//! 1. structured — frame the body, find the list rpc's chunk, decode its
//!    payload through the positional codec;
//! 2. quoted pairs — pair quoted titles with UUID-shaped identifiers by
//!    proximity in the unescaped text;
//! 3. scan — take every UUID-shaped identifier and synthesize entities from
//!    the nearest surrounding quoted strings.
//!
//! The first strategy to produce entities wins. Strategy 1 may also win with
//! an affirmative empty list (the server's empty-list status); the fallback
//! strategies only win with at least one entity.

pub mod error;
mod quoted;
mod scan;
mod structured;

pub use error::Error;

use crate::types::Notebook;
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

// -----------------------------------------------------------------------------
//
// Shared patterns.

/// UUID-shaped identifier, unanchored, for scanning.
pub(crate) fn uuid_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"[a-f0-9]{8}-(?:[a-f0-9]{4}-){3}[a-f0-9]{12}")
            .expect("UUID pattern is valid")
    })
} // fn

/// Quoted title candidate: 3 to 100 characters between double quotes.
pub(crate) fn title_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#""([^"]{3,100})""#).expect("title pattern is valid"))
} // fn

/// Short quoted tag: 1 to 2 characters between double quotes. Emoji slots
/// match this shape.
pub(crate) fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#""([^"]{1,2})""#).expect("tag pattern is valid"))
} // fn

// -----------------------------------------------------------------------------
//
/// Extracts a notebook list from a response body, trying each strategy in
/// order.
///
/// # Errors
///
/// Returns an error carrying a bounded excerpt of the body when every
/// strategy comes up empty.
pub fn parse_notebook_list(body: &str, rpc_id: &str) -> Result<Vec<Notebook>, Error> {
    let cleaned = strip_trailing_chunk_sizes(body);

    if let Some(notebooks) = structured::from_structured(&cleaned, rpc_id) {
        tracing::debug!(count = notebooks.len(), "structured strategy succeeded");
        return Ok(notebooks);
    } // if

    let unescaped = unescape(&cleaned);

    let notebooks = quoted::from_quoted_pairs(&unescaped);
    if !notebooks.is_empty() {
        tracing::debug!(count = notebooks.len(), "quoted-pair strategy succeeded");
        return Ok(notebooks);
    } // if

    let notebooks = scan::from_uuid_scan(&unescaped);
    if !notebooks.is_empty() {
        tracing::debug!(count = notebooks.len(), "identifier scan succeeded");
        return Ok(notebooks);
    } // if

    Err(Error::Unparseable {
        excerpt: crate::status::excerpt(body),
    })
} // fn

// -----------------------------------------------------------------------------
//
/// Strips spurious trailing chunk-size lines that some upstream proxies leave
/// attached after the last closing bracket.
#[must_use]
pub(crate) fn strip_trailing_chunk_sizes(body: &str) -> Cow<'_, str> {
    static TRAILING: OnceLock<Regex> = OnceLock::new();
    let pattern = TRAILING
        .get_or_init(|| Regex::new(r"(?:\n\d+\s*)+$").expect("trailing pattern is valid"));
    pattern.replace(body, "")
} // fn

// -----------------------------------------------------------------------------
//
/// Joins fragments whose brackets do not balance with the fragment that
/// follows. A fragment cut mid-chunk lacks its terminating bracket; its
/// continuation arrives as the next fragment.
#[must_use]
pub(crate) fn join_unbalanced(fragments: Vec<String>) -> Vec<String> {
    let mut joined = Vec::new();
    let mut pending = String::new();

    for fragment in fragments {
        pending.push_str(&fragment);
        if bracket_balance(&pending) <= 0 {
            joined.push(std::mem::take(&mut pending));
        } // if
    } // for

    if !pending.is_empty() {
        joined.push(pending);
    } // if
    joined
} // fn

// -----------------------------------------------------------------------------
//
/// Net bracket depth of a fragment, ignoring brackets inside string literals.
fn bracket_balance(text: &str) -> i64 {
    let mut balance = 0;
    let mut in_string = false;
    let mut escaped = false;

    for character in text.chars() {
        if escaped {
            escaped = false;
            continue;
        } // if
        match character {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '[' | '{' if !in_string => balance += 1,
            ']' | '}' if !in_string => balance -= 1,
            _ => (),
        } // match
    } // for

    balance
} // fn

// -----------------------------------------------------------------------------
//
/// Collapses one level of JSON string escaping, so the pattern strategies see
/// the text the structured slot would have decoded to.
#[must_use]
pub(crate) fn unescape(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut characters = text.chars();

    while let Some(character) = characters.next() {
        if character != '\\' {
            output.push(character);
            continue;
        } // if
        match characters.next() {
            Some('n') => output.push('\n'),
            Some('t') => output.push('\t'),
            Some('u') => {
                // Keep \uXXXX escapes verbatim; the pattern strategies do not
                // depend on them.
                output.push('\\');
                output.push('u');
            } // Some
            Some(other) => output.push(other),
            None => output.push('\\'),
        } // match
    } // while

    output
} // fn

// -----------------------------------------------------------------------------
//
/// Walks back from a byte offset to the nearest character boundary.
pub(crate) fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    } // while
    index
} // fn

// -----------------------------------------------------------------------------
//
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_trailing_chunk_sizes() {
        assert_eq!(strip_trailing_chunk_sizes("[[\"x\"]]\n25"), "[[\"x\"]]");
        assert_eq!(strip_trailing_chunk_sizes("[[\"x\"]]\n25\n108"), "[[\"x\"]]");
        assert_eq!(strip_trailing_chunk_sizes("[[\"x\"]]"), "[[\"x\"]]");
        // A digit line in the middle is framing, not trailing garbage.
        assert_eq!(strip_trailing_chunk_sizes("12\n[[\"x\"]]"), "12\n[[\"x\"]]");
    }

    #[test]
    fn test_join_unbalanced_fragments() {
        let fragments = vec![
            "[[\"wrb.fr\",\"abc\",\"[1,".to_string(),
            "2]\"]]".to_string(),
            "[[\"e\",4]]".to_string(),
        ];
        let joined = join_unbalanced(fragments);
        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0], "[[\"wrb.fr\",\"abc\",\"[1,2]\"]]");
    }

    #[test]
    fn test_bracket_balance_ignores_strings() {
        assert_eq!(bracket_balance(r#"["a[b"]"#), 0);
        assert_eq!(bracket_balance(r#"["a\"[b"]"#), 0);
        assert_eq!(bracket_balance("[[1,2]"), 1);
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape(r#"\"hello\""#), r#""hello""#);
        assert_eq!(unescape(r"line\nbreak"), "line\nbreak");
        assert_eq!(unescape(r"back\\slash"), r"back\slash");
    }

    #[test]
    fn test_parse_error_carries_excerpt() {
        let error = parse_notebook_list("pure gibberish", "wXbhsf").unwrap_err();
        let Error::Unparseable { excerpt } = error;
        assert!(excerpt.contains("gibberish"));
    }

    #[test]
    fn test_scan_floor_on_any_uuid_with_preceding_title() {
        let body = r#"junk "My Research Notes" junk 1f2e3d4c-5b6a-4789-8abc-def012345678 junk"#;
        let notebooks = parse_notebook_list(body, "wXbhsf").unwrap();
        assert!(!notebooks.is_empty());
        assert_eq!(notebooks[0].id, "1f2e3d4c-5b6a-4789-8abc-def012345678");
    }

    #[test]
    fn test_trailing_digits_then_structured_parse() {
        let chunk = r#"[["wrb.fr","wXbhsf","[[[3,null,\"aaaaaaaa-bbbb-4ccc-8ddd-eeeeeeeeeeee\",\"Kept\"]]]",null,null,null,"generic"]]"#;
        let body = format!(")]}}'\n{}\n{}\n25", chunk.len(), chunk);
        let notebooks = parse_notebook_list(&body, "wXbhsf").unwrap();
        assert_eq!(notebooks.len(), 1);
        assert_eq!(notebooks[0].title, "Kept");
    }
}
