use crate::status::{ErrorCategory, ErrorCode};

// -----------------------------------------------------------------------------
//
/// A typed error surfaced to callers after a batchexecute call fails.
///
/// Carries the resolved dictionary entry when the numeric status was
/// recognized, the HTTP status when the failure happened at the transport
/// level, and a bounded excerpt of the raw body for diagnostics.
#[derive(Clone, Debug, PartialEq, thiserror::Error, miette::Diagnostic)]
#[error("{message}")]
#[diagnostic(
    code(notebooklm::status::api_error),
    url(docsrs),
    help("check `category()` to decide whether to re-authenticate, back off, \
        or give up; `is_retryable()` reports whether another attempt may \
        succeed")
)]
pub struct ApiError {
    /// The dictionary entry the numeric status resolved to, when known.
    pub code: Option<ErrorCode>,

    /// The HTTP status of the failing response, when the failure happened at
    /// the HTTP level.
    pub http_status: Option<u16>,

    /// A bounded excerpt of the raw response body.
    pub raw_body: String,

    /// Human-readable description of the failure.
    pub message: String,
} // struct

// -----------------------------------------------------------------------------

impl ApiError {
    // -------------------------------------------------------------------------
    //
    /// Builds an error from a resolved dictionary entry.
    #[must_use]
    pub fn from_code(code: ErrorCode, raw_body: &str) -> Self {
        Self {
            message: code.message.clone().into_owned(),
            http_status: None,
            raw_body: excerpt(raw_body),
            code: Some(code),
        } // ApiError
    } // fn

    // -------------------------------------------------------------------------
    //
    /// Builds an error that resolved to no known numeric code.
    #[must_use]
    pub fn unknown(message: impl Into<String>, raw_body: &str) -> Self {
        Self {
            code: None,
            http_status: None,
            raw_body: excerpt(raw_body),
            message: message.into(),
        } // ApiError
    } // fn

    // -------------------------------------------------------------------------
    //
    /// Attaches the HTTP status of the failing response.
    #[must_use]
    pub const fn with_http_status(mut self, http_status: u16) -> Self {
        self.http_status = Some(http_status);
        self
    } // fn

    // -------------------------------------------------------------------------
    //
    /// The contractual category of this error. `Unknown` when the numeric
    /// status resolved to no dictionary entry.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        self.code
            .as_ref()
            .map_or(ErrorCategory::Unknown, |code| code.category)
    } // fn

    // -------------------------------------------------------------------------
    //
    /// The numeric status, when one was recognized.
    #[must_use]
    pub fn numeric_code(&self) -> Option<i64> {
        self.code.as_ref().map(|code| code.code)
    } // fn

    // -------------------------------------------------------------------------
    //
    /// Whether another attempt may succeed: true when the dictionary entry is
    /// marked retryable, or when the HTTP status is one of 429, 500, 502,
    /// 503, 504.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        self.code.as_ref().is_some_and(|code| code.retryable)
            || matches!(self.http_status, Some(429 | 500 | 502 | 503 | 504))
    } // fn
} // impl

// -----------------------------------------------------------------------------
//
/// Bounds a raw body for inclusion in error values. Oversized bodies are cut
/// at a character boundary.
#[must_use]
pub(crate) fn excerpt(body: &str) -> String {
    const MAX: usize = 500;
    if body.len() <= MAX {
        return body.to_string();
    } // if
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    } // while
    format!("{}…", &body[..end])
} // fn

// -----------------------------------------------------------------------------
//
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::dictionary;

    #[test]
    fn test_retryable_from_code() {
        let error = ApiError::from_code(dictionary::lookup(324934).unwrap(), "324934");
        assert!(error.is_retryable());
        assert_eq!(error.category(), ErrorCategory::RateLimit);
        assert_eq!(error.numeric_code(), Some(324934));
    }

    #[test]
    fn test_retryable_from_http_status() {
        let error = ApiError::unknown("Unknown API error", "").with_http_status(503);
        assert!(error.is_retryable());
        let error = ApiError::unknown("Unknown API error", "").with_http_status(404);
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_excerpt_bounds_body() {
        let body = "x".repeat(10_000);
        let error = ApiError::unknown("Unknown API error", &body);
        assert!(error.raw_body.len() < 600);
    }
}
