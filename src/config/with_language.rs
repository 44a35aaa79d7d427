use crate::config::ClientConfig;

impl ClientConfig {
    /// Sets the language code sent as the `hl` query parameter.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    } // fn
} // impl
