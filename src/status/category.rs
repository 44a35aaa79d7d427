use serde::{Deserialize, Serialize};

// -----------------------------------------------------------------------------
//
/// The contractual error categories surfaced by the client.
///
/// Callers branch on the category, not on raw numeric codes: the numeric
/// space of batchexecute statuses is undocumented and shifts silently, while
/// these categories are stable across releases.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// The request was unauthenticated or the token has expired. Surface with
    /// "re-authenticate" guidance.
    Authentication,

    /// Credentials were valid but access to the resource was denied.
    Authorization,

    /// Too many requests. Retryable; the client auto-retries up to policy
    /// before surfacing.
    RateLimit,

    /// The resource is absent. Not retryable.
    NotFound,

    /// The request was malformed, or the server returned a format this client
    /// cannot consume. Not retryable.
    InvalidInput,

    /// The server failed internally. Retryable per policy.
    ServerError,

    /// An I/O failure between the client and the server. Retryable per the
    /// transport's pattern list.
    NetworkError,

    /// Access to the specific resource was denied.
    PermissionDenied,

    /// A server-side quota was exhausted. Retryable.
    ResourceExhausted,

    /// The service is temporarily unavailable. Retryable per policy.
    Unavailable,

    /// A numeric status that resolves to no known code, or a parse failure.
    #[default]
    Unknown,
} // enum

// -----------------------------------------------------------------------------

impl ErrorCategory {
    /// Returns the category's display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Authentication => "authentication",
            Self::Authorization => "authorization",
            Self::RateLimit => "rate limit",
            Self::NotFound => "not found",
            Self::InvalidInput => "invalid input",
            Self::ServerError => "server error",
            Self::NetworkError => "network error",
            Self::PermissionDenied => "permission denied",
            Self::ResourceExhausted => "resource exhausted",
            Self::Unavailable => "unavailable",
            Self::Unknown => "unknown",
        } // match
    } // fn
} // impl

// -----------------------------------------------------------------------------

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    } // fn
} // impl
