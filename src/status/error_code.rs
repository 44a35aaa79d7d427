use crate::status::ErrorCategory;
use std::borrow::Cow;

// -----------------------------------------------------------------------------
//
/// One entry in the error dictionary: a numeric batchexecute status mapped to
/// a category, a human-readable message, and whether a retry may succeed.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorCode {
    /// The numeric code as it appears on the wire, or an HTTP status mapped
    /// into the same space.
    pub code: i64,

    /// The contractual category this code belongs to.
    pub category: ErrorCategory,

    /// Human-readable description of the failure.
    pub message: Cow<'static, str>,

    /// Whether retrying the request may produce a different outcome.
    pub retryable: bool,
} // struct

// -----------------------------------------------------------------------------

impl ErrorCode {
    // -------------------------------------------------------------------------
    //
    /// Builds a dictionary entry. Used for runtime registration; the built-in
    /// table is declared statically.
    #[must_use]
    pub fn new(
        code: i64,
        category: ErrorCategory,
        message: impl Into<Cow<'static, str>>,
        retryable: bool,
    ) -> Self {
        Self {
            code,
            category,
            message: message.into(),
            retryable,
        } // ErrorCode
    } // fn
} // impl

// -----------------------------------------------------------------------------

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{code}: {message} ({category})",
            code = self.code,
            message = self.message,
            category = self.category,
        )
    } // fn
} // impl
