use crate::config::ClientConfig;

impl ClientConfig {
    /// Sets the front-end build id sent as the `bl` query parameter. Treated
    /// as an opaque string.
    #[must_use]
    pub fn with_build_id(mut self, build_id: impl Into<String>) -> Self {
        self.build_id = build_id.into();
        self
    } // fn
} // impl
