//! Response framing and tuple-extraction error types and messages.

use miette::Diagnostic;
use thiserror::Error;

// -----------------------------------------------------------------------------
//
/// An error produced while framing a batchexecute response body or extracting
/// RPC tuples from it.
#[derive(Debug, Diagnostic, Error)]
#[diagnostic(code(notebooklm::response::error), url(docsrs))]
pub enum Error {
    /// The body produced no RPC result tuple and was not an explicit
    /// success-code response.
    #[error("response contained no RPC result tuple")]
    #[diagnostic(help(
        "a successful call always yields at least one `wrb.fr` tuple or a \
        bare success code; anything else is a body this client cannot consume"
    ))]
    NoRpcResult {
        /// Bounded excerpt of the body, for diagnostics.
        excerpt: String,
    },

    /// A tuple's payload slot held a string that is not valid JSON.
    #[error("tuple payload is not valid JSON: {source}")]
    PayloadJson {
        source: serde_json::Error,
        /// Bounded excerpt of the payload, for diagnostics.
        excerpt: String,
    },

    /// The tuple carried no payload in either the primary or the fallback
    /// slot where one was required.
    #[error("response tuple carried no payload")]
    MissingPayload,
} // enum
