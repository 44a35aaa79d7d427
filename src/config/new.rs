use crate::config::ClientConfig;

impl ClientConfig {
    /// Instantiates a configuration with production defaults. Chain the
    /// `with_*` methods to adjust, then `build()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    } // fn
} // impl
