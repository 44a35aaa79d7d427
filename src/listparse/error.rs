//! Resilient list parser error types and messages.

use miette::Diagnostic;
use thiserror::Error;

// -----------------------------------------------------------------------------
//
/// An error produced when no extraction strategy could recover an entity list
/// from a response body.
#[derive(Clone, Debug, Diagnostic, Error)]
#[diagnostic(code(notebooklm::listparse::error), url(docsrs))]
pub enum Error {
    /// Every strategy came up empty.
    #[error("could not extract an entity list from the response")]
    #[diagnostic(help(
        "the body matched neither the structured chunk layout, nor the \
        quoted-title heuristic, nor a bare identifier scan; the excerpt \
        below shows what arrived"
    ))]
    Unparseable {
        /// Bounded excerpt of the offending body.
        excerpt: String,
    },
} // enum
