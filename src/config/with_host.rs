use crate::config::ClientConfig;

impl ClientConfig {
    /// Sets the host serving the batchexecute endpoint.
    ///
    /// ## Arguments
    ///
    /// * `host` ‧ Host name without scheme, e.g. `notebooklm.google.com`.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    } // fn
} // impl
