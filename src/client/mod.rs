//! Contains the `Client` struct and its associated methods. A client holds
//! your _session credentials_ and endpoint settings, executes batchexecute
//! calls with automatic retries, and exposes the typed NotebookLM methods.

// -----------------------------------------------------------------------------

mod execute;
mod new;
mod notebooks;
mod request;
mod with_reqwest_client;

// -----------------------------------------------------------------------------

use crate::config::ClientConfig;
use crate::credentials::Credentials;
use crate::request_id::RequestIdGenerator;
use std::sync::Arc;

// -----------------------------------------------------------------------------
//
/// A NotebookLM batchexecute client.
///
/// One instance is safe for concurrent use across tasks: the only internally
/// mutable state is the request-id counter, which is atomic, and clones share
/// it. No lock is held across an await point.
///
/// How to use this structure's methods in a builder pattern:
///
/// ```rust
/// let client = notebooklm::Client::try_new(
///     notebooklm::Credentials::new(AUTH_TOKEN, COOKIES),
///     notebooklm::ClientConfig::new()
///         .with_max_retries(5)
///         .with_timeout(std::time::Duration::from_secs(60))
///         .build(),
/// )?;
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    /// The session's credential pair, attached verbatim to every request.
    pub credentials: Credentials,

    /// Endpoint and policy settings. Read-only after construction.
    pub config: ClientConfig,

    /// `_reqid` correlator sequence, shared across clones.
    pub(crate) request_ids: Arc<RequestIdGenerator>,

    /// The underlying HTTP client.
    pub(crate) reqwest_client: reqwest::Client,

    /// Resolved debug flag: the config option or the process-wide
    /// environment variable.
    pub(crate) debug: bool,
} // struct

// -----------------------------------------------------------------------------

impl Client {
    /// Rewinds the `_reqid` sequence. The random base is preserved.
    pub fn reset_request_ids(&self) {
        self.request_ids.reset();
    } // fn
} // impl
