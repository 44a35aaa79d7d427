//! Credential material attached to every batchexecute request.

use std::sync::Once;

// -----------------------------------------------------------------------------
//
/// The `(auth token, cookie string)` pair a NotebookLM session runs under.
///
/// Both values are opaque to this crate: they are captured from a signed-in
/// browser session out of band and attached verbatim to every request. A
/// client holds one immutable pair for its lifetime; refresh by constructing
/// a new client.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    auth_token: String,
    cookies: String,
} // struct

// -----------------------------------------------------------------------------

static EMPTY_WARNING: Once = Once::new();

impl Credentials {
    // -------------------------------------------------------------------------
    //
    /// Instantiates a credential pair.
    ///
    /// Empty credentials are accepted — useful for dry runs and tests — but
    /// warned about once per process, since every authenticated RPC will be
    /// rejected upstream.
    #[must_use]
    pub fn new(auth_token: impl Into<String>, cookies: impl Into<String>) -> Self {
        let credentials = Self {
            auth_token: auth_token.into(),
            cookies: cookies.into(),
        };
        if credentials.is_empty() {
            EMPTY_WARNING.call_once(|| {
                tracing::warn!(
                    "constructed with empty credentials; authenticated calls will fail"
                );
            });
        } // if
        credentials
    } // fn

    // -------------------------------------------------------------------------
    //
    /// The auth token, sent as the `at` form field.
    #[must_use]
    pub fn auth_token(&self) -> &str {
        &self.auth_token
    } // fn

    // -------------------------------------------------------------------------
    //
    /// The cookie string, sent as the `Cookie` header.
    #[must_use]
    pub fn cookies(&self) -> &str {
        &self.cookies
    } // fn

    // -------------------------------------------------------------------------
    //
    /// Whether both halves are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.auth_token.is_empty() && self.cookies.is_empty()
    } // fn
} // impl

// -----------------------------------------------------------------------------
//
// Secrets never appear in debug output; both halves go through redaction.

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("auth_token", &crate::redact::mask_token(&self.auth_token))
            .field("cookies", &crate::redact::mask_cookies(&self.cookies))
            .finish()
    } // fn
} // impl

// -----------------------------------------------------------------------------
//
// Tests
