//! The static error-code table plus the runtime registration overlay.

use crate::status::{ErrorCategory, ErrorCode};
use phf::phf_map;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

// -----------------------------------------------------------------------------
//
// Shorthand so the table below stays legible.

const fn entry(
    code: i64,
    category: ErrorCategory,
    message: &'static str,
    retryable: bool,
) -> ErrorCode {
    ErrorCode {
        code,
        category,
        message: Cow::Borrowed(message),
        retryable,
    } // ErrorCode
} // fn

// -----------------------------------------------------------------------------
//
/// Built-in dictionary. Codes 1 through 16 follow the gRPC-canonical mapping
/// observed inside batchexecute payloads; the six-digit codes are
/// NotebookLM-specific statuses collected from captures; 400 through 504 fold
/// the HTTP status space into the same categories so that transport-level and
/// payload-level failures classify uniformly.
static BUILT_IN: phf::Map<i64, ErrorCode> = phf_map! {
    1i64 => entry(1, ErrorCategory::Unknown, "Operation cancelled", false),
    2i64 => entry(2, ErrorCategory::Unknown, "Unknown error", false),
    3i64 => entry(3, ErrorCategory::InvalidInput, "Invalid argument", false),
    4i64 => entry(4, ErrorCategory::NetworkError, "Deadline exceeded", true),
    5i64 => entry(5, ErrorCategory::NotFound, "Resource not found", false),
    6i64 => entry(6, ErrorCategory::InvalidInput, "Resource already exists", false),
    7i64 => entry(7, ErrorCategory::PermissionDenied, "Permission denied", false),
    8i64 => entry(8, ErrorCategory::ResourceExhausted, "Resource exhausted", true),
    9i64 => entry(9, ErrorCategory::InvalidInput, "Failed precondition", false),
    10i64 => entry(10, ErrorCategory::ServerError, "Operation aborted", true),
    11i64 => entry(11, ErrorCategory::InvalidInput, "Out of range", false),
    12i64 => entry(12, ErrorCategory::InvalidInput, "Method not implemented", false),
    13i64 => entry(13, ErrorCategory::ServerError, "Internal server error", true),
    14i64 => entry(14, ErrorCategory::Unavailable, "Service unavailable", true),
    15i64 => entry(15, ErrorCategory::ServerError, "Unrecoverable data loss", false),
    16i64 => entry(16, ErrorCategory::Authentication, "Not authenticated", false),
    143i64 => entry(143, ErrorCategory::Unknown, "Request stream terminated by server", false),
    277566i64 => entry(277566, ErrorCategory::Authentication, "Authentication required", false),
    277567i64 => entry(277567, ErrorCategory::Authentication, "Authentication token expired", false),
    80620i64 => entry(80620, ErrorCategory::Authorization, "Not authorized to access this resource", false),
    324934i64 => entry(324934, ErrorCategory::RateLimit, "Rate limit exceeded", true),
    400i64 => entry(400, ErrorCategory::InvalidInput, "Bad request", false),
    401i64 => entry(401, ErrorCategory::Authentication, "Unauthorized", false),
    403i64 => entry(403, ErrorCategory::Authorization, "Forbidden", false),
    404i64 => entry(404, ErrorCategory::NotFound, "Not found", false),
    429i64 => entry(429, ErrorCategory::RateLimit, "Too many requests", true),
    500i64 => entry(500, ErrorCategory::ServerError, "Internal server error", true),
    502i64 => entry(502, ErrorCategory::Unavailable, "Bad gateway", true),
    503i64 => entry(503, ErrorCategory::Unavailable, "Service unavailable", true),
    504i64 => entry(504, ErrorCategory::Unavailable, "Gateway timeout", true),
};

// -----------------------------------------------------------------------------
//
// Runtime additions. Read-mostly: the overlay is consulted on every lookup but
// mutated only when a caller registers a code the built-in table lacks.

static RUNTIME: OnceLock<RwLock<HashMap<i64, ErrorCode>>> = OnceLock::new();

fn runtime() -> &'static RwLock<HashMap<i64, ErrorCode>> {
    RUNTIME.get_or_init(|| RwLock::new(HashMap::new()))
} // fn

// -----------------------------------------------------------------------------

/// Looks a numeric code up in the dictionary. Runtime-registered entries win
/// over the built-in table, so a registration can also override a built-in
/// message.
#[must_use]
pub fn lookup(code: i64) -> Option<ErrorCode> {
    if let Ok(overlay) = runtime().read() {
        if let Some(found) = overlay.get(&code) {
            return Some(found.clone());
        } // if
    } // if
    BUILT_IN.get(&code).cloned()
} // fn

/// Registers an additional code at runtime.
pub fn register(entry: ErrorCode) {
    tracing::debug!(
        code = entry.code,
        category = %entry.category,
        "registering error code"
    );
    if let Ok(mut overlay) = runtime().write() {
        overlay.insert(entry.code, entry);
    } // if
} // fn

// -----------------------------------------------------------------------------
//
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grpc_canonical_codes_present() {
        for code in 1..=16 {
            assert!(lookup(code).is_some(), "missing built-in code {code}");
        }
    }

    #[test]
    fn test_notebooklm_codes() {
        let expired = lookup(277567).unwrap();
        assert_eq!(expired.category, ErrorCategory::Authentication);
        assert_eq!(expired.message, "Authentication token expired");
        assert!(!expired.retryable);

        let denied = lookup(80620).unwrap();
        assert_eq!(denied.category, ErrorCategory::Authorization);

        let limited = lookup(324934).unwrap();
        assert_eq!(limited.category, ErrorCategory::RateLimit);
        assert!(limited.retryable);
    }

    #[test]
    fn test_http_statuses_fold_into_categories() {
        assert_eq!(lookup(401).unwrap().category, ErrorCategory::Authentication);
        assert_eq!(lookup(404).unwrap().category, ErrorCategory::NotFound);
        assert!(lookup(429).unwrap().retryable);
        assert!(lookup(503).unwrap().retryable);
        assert!(!lookup(400).unwrap().retryable);
    }

    #[test]
    fn test_runtime_registration_wins() {
        register(ErrorCode::new(
            919_191,
            ErrorCategory::ServerError,
            "experiment disabled",
            false,
        ));
        let found = lookup(919_191).unwrap();
        assert_eq!(found.message, "experiment disabled");
        assert!(lookup(919_192).is_none());
    }
}
