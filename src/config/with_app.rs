use crate::config::ClientConfig;

impl ClientConfig {
    /// Sets the application path segment of the endpoint, the `{app}` in
    /// `/_/{app}/data/batchexecute`.
    #[must_use]
    pub fn with_app(mut self, app: impl Into<String>) -> Self {
        self.app = app.into();
        self
    } // fn
} // impl
