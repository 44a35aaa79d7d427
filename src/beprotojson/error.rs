//! Positional codec error types and messages.

use miette::Diagnostic;
use thiserror::Error;

// -----------------------------------------------------------------------------
//
/// An error produced while converting between positional arrays and
/// schema-typed messages.
#[derive(Debug, Diagnostic, Error)]
#[diagnostic(code(notebooklm::beprotojson::error), url(docsrs))]
pub enum Error {
    /// The incoming array carried a value at a position the schema does not
    /// declare, and decoding was strict.
    #[error("unknown position {position} in `{type_name}`")]
    #[diagnostic(help(
        "the server added a slot this schema does not know about; decode \
        permissively to discard unknown positions instead"
    ))]
    UnknownPosition {
        /// The message type being decoded.
        type_name: &'static str,
        /// The offending 1-based position.
        position: usize,
    },

    /// A scalar slot held a value no coercion rule accepts.
    #[error("expected {expected}, found `{found}`")]
    InvalidScalar {
        /// What the schema wanted.
        expected: &'static str,
        /// Bounded rendering of what arrived.
        found: String,
    },

    /// A bytes field held a string that is not valid base64.
    #[error("invalid base64 in bytes field: {0}")]
    Base64(#[from] base64::DecodeError),

    /// An enumeration slot held a name the schema does not declare.
    #[error("unknown name `{name}` for enumeration `{enumeration}`")]
    UnknownEnumName {
        /// The enumeration being decoded.
        enumeration: &'static str,
        /// The unrecognized name.
        name: String,
    },

    /// A type name did not resolve through the schema registry.
    #[error("unknown message type `{0}`")]
    #[diagnostic(help("register the descriptor through `schema::registry::register`"))]
    UnknownType(String),
} // enum
