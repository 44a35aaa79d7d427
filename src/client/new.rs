use crate::client::Client;
use crate::config::ClientConfig;
use crate::credentials::Credentials;
use crate::request_id::RequestIdGenerator;
use std::sync::Arc;
use std::time::Duration;

// =============================================================================

impl Client {
    // -------------------------------------------------------------------------
    //
    /// Initialize the settings needed for a NotebookLM batchexecute session.
    ///
    /// ## Arguments
    ///
    /// * `credentials` ‧ The session's `(auth token, cookies)` pair, captured
    ///   from a signed-in browser session.
    ///
    /// * `config` ‧ Endpoint and retry settings; `ClientConfig::default()`
    ///   targets the production front-end.
    ///
    /// # Errors
    ///
    /// This can fail if the underlying `reqwest` client cannot be
    /// constructed, for example when no TLS backend is available.
    pub fn try_new(credentials: Credentials, config: ClientConfig) -> Result<Self, crate::Error> {
        let reqwest_client = reqwest::Client::builder()
            .user_agent(format!(
                "RustNotebookLm/{version}",
                version = env!("CARGO_PKG_VERSION")
            ))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(120))
            .build()?;

        let debug = config.debug_enabled();

        Ok(Self {
            credentials,
            config,
            request_ids: Arc::new(RequestIdGenerator::new()),
            reqwest_client,
            debug,
        }) // Client
    } // fn
} // impl
