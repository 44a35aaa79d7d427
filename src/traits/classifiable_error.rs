use crate::types::ClassifiedError;

// -----------------------------------------------------------------------------
//
/// Classifies errors and statuses for the retry loop.
///
/// Implementations decide, per error type, whether a failure is worth another
/// attempt (`Transient`), final (`Permanent`), or not a failure at all
/// (`None`).
pub trait ClassifiableError<'a, E> {
    /// Wraps an error, or a status, in a `ClassifiedError` enum indicating
    /// the type of failure.
    fn classify(&self) -> ClassifiedError<'_, E>;
} // trait

// -----------------------------------------------------------------------------
//
/// Network failure messages that mark an I/O error as worth retrying. The
/// error chain is searched case-insensitively for each of these.
pub(crate) const TRANSIENT_NETWORK_PATTERNS: [&str; 9] = [
    "connection refused",
    "connection reset",
    "i/o timeout",
    "tls handshake timeout",
    "eof",
    "broken pipe",
    "no such host",
    "network is unreachable",
    "temporary failure",
];

// -----------------------------------------------------------------------------

impl ClassifiableError<'_, Self> for reqwest::Error {
    /// Classifies a [reqwest](https://crates.io/crates/reqwest) error as a
    /// `Transient` or `Permanent` error.
    ///
    /// Connect and timeout failures are transient outright; anything else is
    /// matched against the transient network pattern list before being
    /// declared permanent.
    fn classify(&self) -> ClassifiedError<'_, Self> {
        if self.is_connect() || self.is_timeout() || matches_transient_pattern(self) {
            ClassifiedError::Transient(self)
        } else {
            ClassifiedError::Permanent(self)
        } // if
    } // fn
} // impl

// -----------------------------------------------------------------------------

impl ClassifiableError<'_, Self> for serde_json::Error {
    /// A [serde_json](https://crates.io/crates/serde_json) error is always
    /// `Permanent`: re-sending the same bytes re-parses the same way.
    fn classify(&self) -> ClassifiedError<'_, Self> {
        ClassifiedError::Permanent(self)
    } // fn
} // impl

// -----------------------------------------------------------------------------

impl ClassifiableError<'_, Self> for crate::status::ApiError {
    /// An API error is `Transient` exactly when the dictionary marks its
    /// code retryable or its HTTP status is one of the retryable five.
    fn classify(&self) -> ClassifiedError<'_, Self> {
        if self.is_retryable() {
            ClassifiedError::Transient(self)
        } else {
            ClassifiedError::Permanent(self)
        } // if
    } // fn
} // impl

// -----------------------------------------------------------------------------
//
/// Walks an error chain looking for one of the transient network failure
/// messages.
fn matches_transient_pattern(error: &reqwest::Error) -> bool {
    let mut current: Option<&(dyn std::error::Error + 'static)> = Some(error);
    while let Some(source) = current {
        let message = source.to_string().to_ascii_lowercase();
        if TRANSIENT_NETWORK_PATTERNS
            .iter()
            .any(|pattern| message.contains(pattern))
        {
            return true;
        } // if
        current = source.source();
    } // while
    false
} // fn

// -----------------------------------------------------------------------------
//
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{dictionary, ApiError};

    #[test]
    fn test_api_error_classification_follows_dictionary() {
        let limited = ApiError::from_code(dictionary::lookup(429).unwrap(), "");
        assert!(limited.classify().is_transient());

        let missing = ApiError::from_code(dictionary::lookup(404).unwrap(), "");
        assert!(missing.classify().is_permanent());
    }

    #[test]
    fn test_http_status_override_makes_transient() {
        let error = ApiError::unknown("Unknown API error", "").with_http_status(502);
        assert!(error.classify().is_transient());
    }
}
