use crate::config::ClientConfig;

impl ClientConfig {
    /// Sets the URL scheme. The production endpoint is HTTPS only; `http` is
    /// for pointing the client at a local mock server in tests.
    #[must_use]
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    } // fn
} // impl
