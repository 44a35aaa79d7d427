//! # `notebooklm`
//! ![Crates.io Version](https://img.shields.io/crates/v/notebooklm)
//! ![Crates.io MSRV](https://img.shields.io/crates/msrv/notebooklm)
//! ![Crates.io License](https://img.shields.io/crates/l/notebooklm)
//!
//! An unofficial NotebookLM batchexecute client library for the Rust
//! programming language.
//!
//! NotebookLM's web application talks to its backend over *batchexecute*, a
//! hidden, undocumented Google web RPC transport: positional JSON arrays
//! carried in form-encoded POSTs, answered with an XSSI-prefixed, chunked
//! stream of response tuples. This crate implements that transport end to
//! end:
//!
//! * the **transport client** — wire-format request construction, retries
//!   with exponential back-off, and numeric status codes classified into
//!   typed errors;
//! * the **positional codec** (`beprotojson`) — a data-driven bidirectional
//!   serializer between schema-described messages and the positional arrays
//!   batchexecute uses in place of JSON objects;
//! * the **resilient list parser** — a multi-strategy fallback pipeline that
//!   recovers entity lists from payloads whose framing is not fully
//!   documented and sometimes malformed.
//!
//! # Installation
//!
//! Configure the dependencies:
//!
//! ```toml
//! [dependencies]
//! notebooklm = "0.3"
//! ```
//!
//! # Usage
//!
//! Credentials are captured out of band from a signed-in browser session:
//! the `at` auth token and the `Cookie` header value.
//!
//! ```rust
//! use notebooklm::prelude::*;
//!
//! let client = Client::try_new(
//!     Credentials::new(AUTH_TOKEN, COOKIES),
//!     ClientConfig::new()
//!         .with_max_retries(5)
//!         .with_timeout(std::time::Duration::from_secs(60))
//!         .build(),
//! )?;
//!
//! // Typed methods:
//!
//! let notebooks = client.list_notebooks().await?;
//! for notebook in &notebooks {
//!     println!("{} {} ({})", notebook.emoji, notebook.title, notebook.id);
//! }
//!
//! let created = client.create_notebook("Research", "🧪").await?;
//! client
//!     .add_source_from_url(&created.id, "https://www.youtube.com/watch?v=abc")
//!     .await?;
//!
//! // Methods without a typed wrapper go through `execute` directly:
//!
//! use serde_json::json;
//! let tuple = client
//!     .execute(&Call::new("wXbhsf", json!([null, 1])))
//!     .await?;
//! println!("{:?}", tuple.payload()?);
//! ```
//!
//! ## Error handling
//!
//! Failures surface as [`Error`]; server-reported statuses carry a typed
//! [`ApiError`](crate::status::ApiError) with a contractual
//! [`ErrorCategory`](crate::status::ErrorCategory), the numeric code when one
//! was recognized, and whether a retry may succeed. The transport already
//! retries transient failures per the configured policy before surfacing
//! them.
//!
//! ## Debugging
//!
//! Set the `NOTEBOOKLM_DEBUG` environment variable (or
//! `ClientConfig::with_debug`) to emit redacted dumps of every request and
//! response through [tracing](https://crates.io/crates/tracing). Auth tokens
//! and cookie values never appear in dumps.
//!
//! ## Feature Flags
//!
//! * `reqwest-default-tls` ‧ system-native TLS (default)
//! * `reqwest-rustls-tls` ‧ TLS via rustls
//! * `reqwest-native-tls` ‧ TLS via native-tls
//! * `reqwest-http2` ‧ HTTP/2 support (default)
//! * `reqwest-gzip`, `reqwest-brotli` ‧ response compression
//!
//! # Disclaimer
//!
//! batchexecute is not a public API. Positional slots shift without notice,
//! and nothing here is guaranteed to keep working across server-side
//! changes. The codec decodes permissively by default for exactly that
//! reason.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::too_long_first_doc_paragraph,
    clippy::too_many_lines
)]

// Common / global modules:

mod call;
mod client;
mod config;
mod credentials;
mod methods;
mod request_id;

pub mod beprotojson;
pub mod error;
pub mod listparse;
pub mod prelude;
pub mod redact;
pub mod response;
pub mod schema;
pub mod status;
pub mod types;

pub mod traits;

// -----------------------------------------------------------------------------
//
// Re-exports for the main event

pub use crate::{
    call::Call,
    client::Client,
    config::ClientConfig,
    credentials::Credentials,
    error::Error,
    methods::Method,
    request_id::RequestIdGenerator,
};

// -----------------------------------------------------------------------------
//
// Re-exports for common shared types

pub use crate::beprotojson::{DecodeOptions, DynamicMessage, PositionalMessage, Timestamp};

pub use crate::response::{RawResponse, ResponseTuple};

pub use crate::status::{ApiError, ErrorCategory, ErrorCode};

pub use crate::types::classified_error::ClassifiedError;

pub use crate::types::{Notebook, NotebookList, Source};
