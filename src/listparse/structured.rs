//! Strategy 1: decode the list rpc's chunk through the positional codec.

use crate::beprotojson::{DecodeOptions, PositionalMessage};
use crate::response::{framer, RawResponse};
use crate::status::EMPTY_LIST_CODE;
use crate::types::Notebook;
use serde_json::Value as Json;

// -----------------------------------------------------------------------------
//
/// Locates the chunk echoing the list rpc id, extracts its payload slot, and
/// interprets it structurally.
///
/// Returns `Some` when the payload affirmatively parsed: a non-empty entity
/// list, or the server's empty-list status (code 16), which is an affirmative
/// empty. Returns `None` when the body does not yield a structured payload,
/// so the pattern strategies get their turn.
#[must_use]
pub(crate) fn from_structured(body: &str, rpc_id: &str) -> Option<Vec<Notebook>> {
    let fragments = super::join_unbalanced(framer::frames(body));
    let response = RawResponse::from_fragments(fragments);
    let tuple = response
        .result_for(rpc_id)
        .or_else(|| response.first_result())?;
    let payload = tuple.payload().ok()?;

    match &payload {
        // The bare empty-list status.
        Json::Number(number) if number.as_i64() == Some(EMPTY_LIST_CODE) => Some(Vec::new()),

        Json::Array(items) => {
            // `[16]` is the boxed spelling of the empty-list status.
            if items.len() == 1 && items[0].as_i64() == Some(EMPTY_LIST_CODE) {
                return Some(Vec::new());
            } // if
            let notebooks = notebooks_from_rows(items);
            if notebooks.is_empty() {
                None
            } else {
                Some(notebooks)
            } // if
        } // Array

        Json::Object(map) => {
            let notebooks = notebooks_from_keyed_object(map);
            if notebooks.is_empty() {
                None
            } else {
                Some(notebooks)
            } // if
        } // Object

        _ => None,
    } // match
} // fn

// -----------------------------------------------------------------------------
//
/// An array-of-arrays payload: each inner array is one positional entity.
/// A single row whose elements are themselves all arrays is one extra level
/// of nesting, and is unwrapped first.
fn notebooks_from_rows(items: &[Json]) -> Vec<Notebook> {
    let rows: &[Json] = match items {
        [Json::Array(inner)]
            if !inner.is_empty() && inner.iter().all(Json::is_array) =>
        {
            inner
        } // nested
        _ => items,
    };

    rows.iter()
        .filter(|row| row.is_array())
        .filter_map(|row| Notebook::decode_payload(row, DecodeOptions::default()).ok())
        .filter(|notebook| !notebook.id.is_empty())
        .collect()
} // fn

// -----------------------------------------------------------------------------
//
/// An object payload keyed by UUID-shaped identifiers: one entity per key,
/// with best-effort title and emoji extraction from the key's value.
fn notebooks_from_keyed_object(map: &serde_json::Map<String, Json>) -> Vec<Notebook> {
    map.iter()
        .filter(|(key, _)| uuid::Uuid::parse_str(key).is_ok())
        .map(|(key, value)| {
            let mut notebook = Notebook {
                id: key.clone(),
                ..Notebook::default()
            };
            collect_strings(value, &mut notebook);
            notebook
        })
        .collect()
} // fn

// -----------------------------------------------------------------------------
//
/// Walks a JSON subtree and takes the first title-shaped string (3 to 100
/// characters, not itself a UUID) and the first 1–2 character string as the
/// entity's title and emoji.
fn collect_strings(value: &Json, notebook: &mut Notebook) {
    match value {
        Json::String(text) => {
            let length = text.chars().count();
            if notebook.title.is_empty()
                && (3..=100).contains(&length)
                && uuid::Uuid::parse_str(text).is_err()
            {
                notebook.title = text.clone();
            } else if notebook.emoji.is_empty() && (1..=2).contains(&length) {
                notebook.emoji = text.clone();
            } // if
        } // String
        Json::Array(items) => {
            for item in items {
                collect_strings(item, notebook);
            } // for
        } // Array
        Json::Object(map) => {
            for item in map.values() {
                collect_strings(item, notebook);
            } // for
        } // Object
        _ => (),
    } // match
} // fn

// -----------------------------------------------------------------------------
//
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_status_is_affirmative_empty() {
        let body = ")]}'\n[[\"wrb.fr\",\"wXbhsf\",null,null,null,[16],\"generic\"]]";
        assert_eq!(from_structured(body, "wXbhsf"), Some(Vec::new()));
    }

    #[test]
    fn test_rows_decode_through_codec() {
        let body = concat!(
            ")]}'\n",
            r#"[["wrb.fr","wXbhsf","[[[3,\"🧪\",\"11111111-2222-4333-8444-555555555555\",\"First\"],[3,null,\"66666666-7777-4888-9999-aaaaaaaaaaaa\",\"Second\"]]]",null,null,null,"generic"]]"#,
        );
        let notebooks = from_structured(body, "wXbhsf").unwrap();
        assert_eq!(notebooks.len(), 2);
        assert_eq!(notebooks[0].title, "First");
        assert_eq!(notebooks[1].title, "Second");
    }

    #[test]
    fn test_keyed_object_payload() {
        let body = concat!(
            ")]}'\n",
            r#"[["wrb.fr","wXbhsf","{\"aaaaaaaa-bbbb-4ccc-8ddd-eeeeeeeeeeee\":[\"Project Plan\",\"📔\"]}",null,null,null,"generic"]]"#,
        );
        let notebooks = from_structured(body, "wXbhsf").unwrap();
        assert_eq!(notebooks.len(), 1);
        assert_eq!(notebooks[0].id, "aaaaaaaa-bbbb-4ccc-8ddd-eeeeeeeeeeee");
        assert_eq!(notebooks[0].title, "Project Plan");
    }

    #[test]
    fn test_unstructured_body_defers() {
        assert_eq!(from_structured("no tuples here", "wXbhsf"), None);
    }
}
