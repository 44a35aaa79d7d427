use crate::config::ClientConfig;
use std::time::Duration;

impl ClientConfig {
    /// Sets the ceiling on the per-attempt retry delay.
    ///
    /// ## Example:
    ///
    /// * Sets the maximum delay between request retries to 32 seconds:
    /// ```rust
    /// .with_max_delay(std::time::Duration::from_secs(32))
    /// ```
    #[must_use]
    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    } // fn
} // impl
