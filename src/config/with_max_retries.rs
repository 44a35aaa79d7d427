use crate::config::ClientConfig;

impl ClientConfig {
    /// Sets the maximum number of retries upon a series of request failures.
    ///
    /// ## Arguments
    ///
    /// * `max_retries` ‧ Additional attempts after the first failure; the
    ///   default is 3.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    } // fn
} // impl
