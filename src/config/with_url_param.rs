use crate::config::ClientConfig;

impl ClientConfig {
    /// Merges a URL query parameter into every request. A repeated name
    /// replaces the earlier value; per-call parameters override these in
    /// turn.
    #[must_use]
    pub fn with_url_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.url_params.retain(|(existing, _)| *existing != name);
        self.url_params.push((name, value.into()));
        self
    } // fn
} // impl
