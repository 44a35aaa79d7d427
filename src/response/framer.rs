//! Splits a batchexecute response body into raw JSON fragments.
//!
//! After the XSSI-defeating prefix, a body is either a bare JSON value or a
//! stream of frames, each a decimal byte-length line followed by payload
//! bytes. Captured traffic shows the declared lengths cannot be trusted:
//! some proxies rewrite payloads without fixing the counts. Framing is
//! therefore attempted byte-exact first, and falls back to line splitting
//! when the counts do not line up with the stream.
//!
//! The framer performs no schema decoding: it hands raw fragments to the
//! tuple layer in arrival order.

// -----------------------------------------------------------------------------
//
/// The XSSI-defeating prefix Google front-ends prepend to JSON bodies. Must
/// be removed, together with the newline that follows it, before parsing.
pub const XSSI_PREFIX: &str = ")]}'";

// -----------------------------------------------------------------------------
//
/// Strips the XSSI prefix and its trailing newline, when present.
#[must_use]
pub fn strip_xssi(body: &str) -> &str {
    body.strip_prefix(XSSI_PREFIX)
        .map_or(body, |rest| rest.strip_prefix('\n').unwrap_or(rest))
} // fn

// -----------------------------------------------------------------------------
//
/// Splits a response body into raw JSON fragments in arrival order.
///
/// * A body whose first non-whitespace byte is not a digit is one unframed
///   fragment.
/// * A body that is a single whole number is one fragment carrying that
///   number (the tuple layer synthesizes a `"numeric"` tuple from it).
/// * Otherwise the body is framed: repeatedly a decimal length line, then
///   that many payload bytes. A length followed by end-of-input yields the
///   collected bytes as a partial fragment rather than a failure. When a
///   declared length does not land the stream back on a line boundary, the
///   whole stream is re-split by lines instead, with bare decimal lines
///   treated as frame markers.
#[must_use]
pub fn frames(body: &str) -> Vec<String> {
    let remainder = strip_xssi(body).trim_start();

    if remainder.is_empty() {
        return Vec::new();
    } // if

    // A bare whole number carries an RPC status on its own.
    if remainder.trim_end().parse::<i64>().is_ok() {
        return vec![remainder.trim_end().to_string()];
    } // if

    // No leading digit: the whole remainder is one unframed payload.
    if !remainder.as_bytes()[0].is_ascii_digit() {
        return vec![remainder.trim_end().to_string()];
    } // if

    byte_frames(remainder).unwrap_or_else(|| line_frames(remainder))
} // fn

// -----------------------------------------------------------------------------
//
/// Byte-exact framing. Returns `None` when a length line is not a decimal
/// number or a declared length does not end on a line boundary, signalling
/// that the declared counts cannot be trusted.
fn byte_frames(text: &str) -> Option<Vec<String>> {
    let bytes = text.as_bytes();
    let mut fragments: Vec<String> = Vec::new();
    let mut position = 0;

    while position < bytes.len() {
        // Skip blank space between frames:
        while position < bytes.len() && bytes[position].is_ascii_whitespace() {
            position += 1;
        } // while
        if position >= bytes.len() {
            break;
        } // if

        // Decimal length line:
        let line_start = position;
        while position < bytes.len() && bytes[position] != b'\n' {
            position += 1;
        } // while
        let length: usize = std::str::from_utf8(&bytes[line_start..position])
            .ok()?
            .trim()
            .parse()
            .ok()?;
        if position < bytes.len() {
            position += 1; // consume the newline after the length
        } // if

        // Length at end-of-input: nothing left to collect.
        if position >= bytes.len() {
            tracing::debug!(length, "chunk length at end of input, stream truncated");
            break;
        } // if

        let end = position + length;
        if end >= bytes.len() {
            // The declared length reaches past the input. When further lines
            // follow, the count is bogus rather than the stream truncated.
            if end > bytes.len() && bytes[position..].contains(&b'\n') {
                tracing::debug!(length, "declared chunk length overruns framed stream");
                return None;
            } // if
            // Truncated final chunk; keep what arrived.
            if end > bytes.len() {
                tracing::debug!(
                    expected = length,
                    collected = bytes.len() - position,
                    "partial chunk at end of input"
                );
            } // if
            fragments.push(String::from_utf8_lossy(&bytes[position..]).into_owned());
            position = bytes.len();
            break;
        } // if

        // A frame must end at a line boundary; anything else means the
        // declared count is wrong.
        if bytes[end] != b'\n' {
            tracing::debug!(length, "declared chunk length misaligned, re-splitting by lines");
            return None;
        } // if

        fragments.push(String::from_utf8_lossy(&bytes[position..end]).into_owned());
        position = end;
    } // while

    Some(fragments)
} // fn

// -----------------------------------------------------------------------------
//
/// Line-based fallback: bare decimal lines are frame markers and are
/// dropped; every other non-empty line is a fragment.
fn line_frames(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.bytes().all(|byte| byte.is_ascii_digit()))
        .map(ToString::to_string)
        .collect()
} // fn

// -----------------------------------------------------------------------------
//
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_xssi_prefix() {
        assert_eq!(strip_xssi(")]}'\n[[1]]"), "[[1]]");
        assert_eq!(strip_xssi("[[1]]"), "[[1]]");
    }

    #[test]
    fn test_framed_stream_with_exact_lengths() {
        let chunk_one = r#"[["wrb.fr","wXbhsf",null,null,null,[16],"generic"]]"#;
        let chunk_two = r#"[["e",4,null,null,143]]"#;
        let body = format!(
            ")]}}'\n{}\n{}\n{}\n{}\n",
            chunk_one.len(),
            chunk_one,
            chunk_two.len(),
            chunk_two,
        );
        assert_eq!(frames(&body), vec![chunk_one.to_string(), chunk_two.to_string()]);
    }

    #[test]
    fn test_framed_stream_with_wrong_lengths_falls_back_to_lines() {
        // The declared 107 overshoots the 51-byte chunk, as seen in captures.
        let body = ")]}'\n107\n[[\"wrb.fr\",\"wXbhsf\",null,null,null,[16],\"generic\"]]\
            \n25\n[[\"e\",4,null,null,143]]";
        let fragments = frames(body);
        assert_eq!(fragments.len(), 2);
        assert!(fragments[0].contains("wrb.fr"));
        assert!(fragments[1].contains("\"e\""));
    }

    #[test]
    fn test_unframed_body_is_single_fragment() {
        let body = ")]}'\n[[\"wrb.fr\",\"abc\",\"[1]\",null,null,null,\"generic\"]]";
        let fragments = frames(body);
        assert_eq!(fragments.len(), 1);
        assert!(fragments[0].starts_with("[["));
    }

    #[test]
    fn test_bare_number_is_single_fragment() {
        assert_eq!(frames(")]}'\n277567"), vec!["277567".to_string()]);
        assert_eq!(frames(")]}'\n0"), vec!["0".to_string()]);
    }

    #[test]
    fn test_partial_chunk_is_collected() {
        let body = ")]}'\n1000\n[[\"wrb.fr\",\"abc\"";
        let fragments = frames(body);
        assert_eq!(fragments, vec!["[[\"wrb.fr\",\"abc\"".to_string()]);
    }

    #[test]
    fn test_length_at_end_of_input() {
        let chunk = r#"[["wrb.fr","abc",null,null,null,[16],"generic"]]"#;
        let body = format!(")]}}'\n{}\n{}\n25", chunk.len(), chunk);
        assert_eq!(frames(&body), vec![chunk.to_string()]);
    }

    #[test]
    fn test_framed_equals_unframed() {
        let payload = r#"[["wrb.fr","VUsiyb","[null,[1,2]]",null,null,null,"generic"]]"#;
        let framed = format!(")]}}'\n{}\n{}\n", payload.len(), payload);
        let unframed = format!(")]}}'\n{payload}");
        assert_eq!(frames(&framed), frames(&unframed));
    }

    #[test]
    fn test_empty_body() {
        assert!(frames(")]}'\n").is_empty());
        assert!(frames("").is_empty());
    }
}
