//! NotebookLM client error types and error messages.

// -----------------------------------------------------------------------------

use crate::traits::ClassifiableError;
use crate::types::ClassifiedError;
use miette::Diagnostic;
use thiserror::Error as ThisError;

// -----------------------------------------------------------------------------
//
/// Errors that may be produced anywhere in the NotebookLM client.

#[derive(Debug, Diagnostic, ThisError)]
#[diagnostic(code(notebooklm::error), url(docsrs))]
pub enum Error {
    /// The server answered with an RPC-level or HTTP-level error status.
    #[error(transparent)]
    Api(#[from] crate::status::ApiError),

    /// Errors from the positional codec in the `notebooklm` crate.
    #[error(transparent)]
    Codec(#[from] crate::beprotojson::Error),

    /// Errors from response framing and tuple extraction.
    #[error(transparent)]
    Response(#[from] crate::response::Error),

    /// Errors from the resilient list parser.
    #[error(transparent)]
    ListParse(#[from] crate::listparse::Error),

    /// Errors from the HTTP transport itself.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// A request envelope or argument array failed to serialize.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The call's wall-clock budget elapsed before an attempt succeeded.
    #[error("call did not complete within {0:?}")]
    DeadlineExceeded(std::time::Duration),
} // enum Error

// -----------------------------------------------------------------------------

impl Error {
    // -------------------------------------------------------------------------
    //
    /// The typed API error inside, when the failure was an API status.
    #[must_use]
    pub const fn as_api(&self) -> Option<&crate::status::ApiError> {
        match self {
            Self::Api(api_error) => Some(api_error),
            _ => None,
        } // match
    } // fn

    // -------------------------------------------------------------------------
    //
    /// The contractual category of this error.
    ///
    /// Codec, framing, and list-parse failures read as `InvalidInput`: they
    /// mean the upstream sent a format this client cannot consume. Transport
    /// failures and elapsed deadlines read as `NetworkError`.
    #[must_use]
    pub fn category(&self) -> crate::status::ErrorCategory {
        match self {
            Self::Api(api_error) => api_error.category(),
            Self::Codec(_) | Self::Response(_) | Self::ListParse(_) | Self::Json(_) => {
                crate::status::ErrorCategory::InvalidInput
            } // _
            Self::Http(_) | Self::DeadlineExceeded(_) => {
                crate::status::ErrorCategory::NetworkError
            } // _
        } // match
    } // fn

    // -------------------------------------------------------------------------
    //
    /// The numeric status behind this error, when one was recognized.
    #[must_use]
    pub fn numeric_code(&self) -> Option<i64> {
        self.as_api().and_then(crate::status::ApiError::numeric_code)
    } // fn

    // -------------------------------------------------------------------------
    //
    /// Whether the caller may safely retry the failed call.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        self.classify().is_transient()
    } // fn
} // impl

// -----------------------------------------------------------------------------

impl ClassifiableError<'_, Self> for Error {
    /// Classifies a client error for the retry loop: transport failures
    /// follow the network pattern rules, API errors follow the dictionary,
    /// and everything else — codec, framing, parse, serialization — is
    /// permanent.
    fn classify(&self) -> ClassifiedError<'_, Self> {
        let transient = match self {
            Self::Http(error) => error.classify().is_transient(),
            Self::Api(api_error) => api_error.is_retryable(),
            _ => false,
        };
        if transient {
            ClassifiedError::Transient(self)
        } else {
            ClassifiedError::Permanent(self)
        } // if
    } // fn
} // impl

// -----------------------------------------------------------------------------
//
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{dictionary, ApiError, ErrorCategory};

    #[test]
    fn test_categories_follow_error_shape() {
        let api = Error::Api(ApiError::from_code(dictionary::lookup(404).unwrap(), ""));
        assert_eq!(api.category(), ErrorCategory::NotFound);
        assert_eq!(api.numeric_code(), Some(404));

        let parse = Error::Response(crate::response::Error::MissingPayload);
        assert_eq!(parse.category(), ErrorCategory::InvalidInput);
        assert_eq!(parse.numeric_code(), None);
        assert!(!parse.is_retryable());
    }

    #[test]
    fn test_retryable_api_errors_classify_transient() {
        let limited = Error::Api(ApiError::from_code(dictionary::lookup(429).unwrap(), ""));
        assert!(limited.is_retryable());

        let expired = Error::Api(ApiError::from_code(dictionary::lookup(277567).unwrap(), ""));
        assert!(!expired.is_retryable());
    }
}
