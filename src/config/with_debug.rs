use crate::config::ClientConfig;

impl ClientConfig {
    /// Switches redacted request/response dumps on or off for this client.
    /// The `NOTEBOOKLM_DEBUG` environment variable switches them on
    /// process-wide regardless of this setting.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    } // fn
} // impl
