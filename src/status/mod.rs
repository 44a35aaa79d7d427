//! Classification of batchexecute numeric statuses as typed errors.
//!
//! batchexecute puns numbers as statuses: a bare number in a response body, or
//! the first element of a payload array, is an RPC-level status code. This
//! module keeps that punning in one place so that framed and unframed bodies
//! normalize through the same rule.

mod api_error;
mod category;
pub mod dictionary;
mod error_code;

pub use api_error::ApiError;
pub use category::ErrorCategory;
pub use error_code::ErrorCode;

pub(crate) use api_error::excerpt;

use serde_json::Value;

// -----------------------------------------------------------------------------
//
/// Whole-number bodies of `0` and `1` are success markers, never errors.
pub const SUCCESS_CODES: [i64; 2] = [0, 1];

/// `16` as the first element of a payload array signals "empty list": the
/// call succeeded and produced a zero-length sequence.
pub const EMPTY_LIST_CODE: i64 = 16;

/// Floor for treating an array's first element as a status. Small numbers
/// appear as genuine payload data (an add-source acknowledgement is `[3]`),
/// so only codes in the HTTP-and-application range resolve out of arrays;
/// bare whole-number bodies resolve against the full table.
const ARRAY_STATUS_FLOOR: i64 = 100;

// -----------------------------------------------------------------------------
//
/// Inspects a response payload for an RPC-level error.
///
/// Recognized error shapes:
///
/// * a whole number other than `0`/`1` that resolves to a known code;
/// * an array whose first element so resolves — limited to codes at or
///   above the status floor, since small numerics (the empty-list marker
///   `16` included) appear inside arrays as genuine payload data;
/// * an object carrying an `error` string or `error_code` number.
///
/// Anything else is not an error from this module's point of view.
#[must_use]
pub fn is_error_response(payload: &Value) -> Option<ApiError> {
    match payload {
        Value::Number(number) => {
            let code = number.as_i64()?;
            resolve_error_code(code, payload)
        } // Number

        Value::Array(elements) => {
            let code = elements.first()?.as_i64()?;
            if code == EMPTY_LIST_CODE || code < ARRAY_STATUS_FLOOR {
                return None;
            } // if
            resolve_error_code(code, payload)
        } // Array

        Value::Object(map) => {
            if let Some(message) = map.get("error").and_then(Value::as_str) {
                return Some(ApiError::unknown(message, &payload.to_string()));
            } // if
            if let Some(code) = map.get("error_code").and_then(Value::as_i64) {
                let raw = payload.to_string();
                return dictionary::lookup(code)
                    .map(|found| ApiError::from_code(found, &raw))
                    .or_else(|| {
                        Some(ApiError::unknown(format!("API error {code}"), &raw))
                    });
            } // if
            None
        } // Object

        _ => None,
    } // match
} // fn

// -----------------------------------------------------------------------------
//
/// Maps a raw response body to a typed error, in order of preference: the body
/// as a whole number, the first element of the body as an array, the HTTP
/// status, and finally a generic unknown error.
#[must_use]
pub fn parse_body_error(raw_body: &str, http_status: u16) -> ApiError {
    let trimmed = raw_body.trim();

    // Whole-number body:
    if let Ok(code) = trimmed.parse::<i64>() {
        if let Some(found) = dictionary::lookup(code) {
            return ApiError::from_code(found, raw_body).with_http_status(http_status);
        } // if
    } // if

    // Array-first-element body:
    if let Ok(Value::Array(elements)) = serde_json::from_str::<Value>(trimmed) {
        if let Some(code) = elements.first().and_then(Value::as_i64) {
            if let Some(found) = dictionary::lookup(code) {
                return ApiError::from_code(found, raw_body)
                    .with_http_status(http_status);
            } // if
        } // if
    } // if

    // The HTTP status itself:
    if let Some(found) = dictionary::lookup(i64::from(http_status)) {
        return ApiError::from_code(found, raw_body).with_http_status(http_status);
    } // if

    ApiError::unknown("Unknown API error", raw_body).with_http_status(http_status)
} // fn

// -----------------------------------------------------------------------------

fn resolve_error_code(code: i64, payload: &Value) -> Option<ApiError> {
    if SUCCESS_CODES.contains(&code) {
        return None;
    } // if
    dictionary::lookup(code).map(|found| ApiError::from_code(found, &payload.to_string()))
} // fn

// -----------------------------------------------------------------------------
//
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_markers_are_never_errors() {
        assert!(is_error_response(&json!(0)).is_none());
        assert!(is_error_response(&json!(1)).is_none());
        assert!(is_error_response(&json!([0])).is_none());
        assert!(is_error_response(&json!([1, "payload"])).is_none());
    }

    #[test]
    fn test_empty_list_marker_is_success() {
        assert!(is_error_response(&json!([16])).is_none());
    }

    #[test]
    fn test_small_numeric_payloads_are_data_not_statuses() {
        // An add-source acknowledgement payload.
        assert!(is_error_response(&json!([3])).is_none());
        assert!(is_error_response(&json!([7, "data"])).is_none());
    }

    #[test]
    fn test_known_numeric_body_is_error() {
        let error = is_error_response(&json!(277567)).unwrap();
        assert_eq!(error.category(), ErrorCategory::Authentication);
        assert_eq!(error.message, "Authentication token expired");
    }

    #[test]
    fn test_unknown_numeric_body_is_not_an_error() {
        assert!(is_error_response(&json!(31_337_777)).is_none());
    }

    #[test]
    fn test_array_first_element_resolves() {
        let error = is_error_response(&json!([324934, null])).unwrap();
        assert_eq!(error.category(), ErrorCategory::RateLimit);
        assert!(error.is_retryable());
    }

    #[test]
    fn test_object_error_shapes() {
        let error = is_error_response(&json!({"error": "quota exceeded"})).unwrap();
        assert_eq!(error.message, "quota exceeded");
        assert_eq!(error.category(), ErrorCategory::Unknown);

        let error = is_error_response(&json!({"error_code": 80620})).unwrap();
        assert_eq!(error.category(), ErrorCategory::Authorization);
    }

    #[test]
    fn test_parse_body_error_fallback_order() {
        let error = parse_body_error("277566", 200);
        assert_eq!(error.numeric_code(), Some(277566));

        let error = parse_body_error("[143]", 200);
        assert_eq!(error.numeric_code(), Some(143));

        let error = parse_body_error("<html>teapot</html>", 429);
        assert_eq!(error.numeric_code(), Some(429));
        assert!(error.is_retryable());

        let error = parse_body_error("<html>teapot</html>", 418);
        assert!(error.code.is_none());
        assert_eq!(error.message, "Unknown API error");
        assert_eq!(error.http_status, Some(418));
    }
}
