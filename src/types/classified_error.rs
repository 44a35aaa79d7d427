use crate::traits::ClassifiableError;

// -----------------------------------------------------------------------------
//
/// Classifies errors and statuses as `None`, `Transient` or `Permanent`.
///
/// The classification decides whether the transport re-tries a request
/// through [backon](https://crates.io/crates/backon) or surfaces the failure
/// immediately.
#[derive(Debug)]
pub enum ClassifiedError<'a, E> {
    /// Not an error at all. Success responses are never retried.
    None(&'a E),

    /// Potentially temporary, such as a dropped connection or a rate limit.
    /// Worth retrying.
    Transient(&'a E),

    /// Not expected to change on a second attempt, such as a malformed
    /// request or a missing resource. Retrying is ineffective.
    Permanent(&'a E),
} // enum ClassifiedError

// -----------------------------------------------------------------------------

impl<E> ClassifiedError<'_, E> {
    /// Whether the value was classified as `None` (no error).
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None(_))
    } // fn

    /// Whether the value was classified as `Transient`. A transient error
    /// might resolve on a subsequent attempt; the retry loop keys off this.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_))
    } // fn

    /// Whether the value was classified as `Permanent`. A permanent error is
    /// surfaced without further attempts.
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        matches!(self, Self::Permanent(_))
    } // fn
} // impl

// -----------------------------------------------------------------------------

impl<'a, E: ClassifiableError<'a, E>> std::convert::From<&'a E> for ClassifiedError<'a, E> {
    /// Wraps an error, or a status, in a `ClassifiedError` indicating the
    /// type of failure.
    fn from(error: &'a E) -> Self {
        error.classify()
    } // fn
} // impl

// -----------------------------------------------------------------------------

impl<E: std::fmt::Display> std::fmt::Display for ClassifiedError<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifiedError::None(response) => write!(f, "success: {response}"),
            ClassifiedError::Transient(error) => write!(f, "transient error: {error}"),
            ClassifiedError::Permanent(error) => write!(f, "permanent error: {error}"),
        } // match
    } // fn
} // impl
