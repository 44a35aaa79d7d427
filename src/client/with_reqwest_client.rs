// =============================================================================

impl crate::client::Client {
    // -------------------------------------------------------------------------
    //
    /// Passes a user-configured reqwest client for the NotebookLM client to
    /// use. This gives you control over proxies, timeouts and TLS, and lets
    /// tests intercept the transport.
    ///
    /// ## Arguments
    ///
    /// * `reqwest_client` ‧ A reqwest client built using the
    ///   `reqwest::Client::builder()` function.
    ///
    /// ## Examples:
    ///
    /// ```rust
    /// let reqwest_client = reqwest::Client::builder()
    ///     .user_agent("My Cool App v1.0")
    ///     .build()?;
    ///
    /// let client = notebooklm::Client::try_new(credentials, config)?
    ///     .with_reqwest_client(reqwest_client);
    /// ```
    #[must_use]
    pub fn with_reqwest_client(mut self, reqwest_client: reqwest::Client) -> Self {
        self.reqwest_client = reqwest_client;
        self
    } // fn
} // impl
