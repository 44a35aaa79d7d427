use crate::config::ClientConfig;
use std::time::Duration;

impl ClientConfig {
    /// Sets the wall-clock budget for one call. The budget spans every retry
    /// attempt and the sleeps between them.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    } // fn
} // impl
