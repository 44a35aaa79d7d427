use crate::config::ClientConfig;
use std::time::Duration;

impl ClientConfig {
    /// Sets the delay before the first retry. The delay doubles per attempt
    /// up to the maximum delay.
    #[must_use]
    pub fn with_initial_delay(mut self, initial_delay: Duration) -> Self {
        self.initial_delay = initial_delay;
        self
    } // fn
} // impl
