use crate::config::ClientConfig;

impl ClientConfig {
    /// Appends a request header sent on every call, after the built-in set.
    /// A repeated name replaces the earlier value.
    ///
    /// ## Example:
    ///
    /// ```rust
    /// .with_header("user-agent", "my-tool/1.0")
    /// ```
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|(existing, _)| *existing != name);
        self.headers.push((name, value.into()));
        self
    } // fn
} // impl
