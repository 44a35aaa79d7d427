//! Contains the `ClientConfig` struct and its builder methods. Use them to
//! point the client at a different host or front-end build, attach extra
//! headers or URL parameters, and tune the retry policy.

mod new;
mod with_app;
mod with_build_id;
mod with_debug;
mod with_header;
mod with_host;
mod with_initial_delay;
mod with_language;
mod with_max_delay;
mod with_max_retries;
mod with_scheme;
mod with_timeout;
mod with_url_param;

use std::time::Duration;

// -----------------------------------------------------------------------------
//
/// Environment variable that switches on redacted request/response dumps for
/// every client in the process.
pub const DEBUG_ENV_VAR: &str = "NOTEBOOKLM_DEBUG";

// -----------------------------------------------------------------------------
//
/// Endpoint and policy settings for a NotebookLM client.
///
/// All fields are read-only once the client is built; concurrent reads are
/// safe. The defaults target the production NotebookLM front-end.
///
/// How to use this structure's methods in a builder pattern:
///
/// ```rust
/// let config = notebooklm::ClientConfig::new()
///     .with_language("de")
///     .with_max_retries(5)
///     .with_timeout(std::time::Duration::from_secs(60))
///     .build();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// URL scheme. `https` everywhere except test interception.
    pub scheme: String,

    /// Host serving the batchexecute endpoint.
    pub host: String,

    /// Application path segment between `/_/` and `/data/batchexecute`.
    pub app: String,

    /// Front-end build id, sent as the `bl` query parameter. The server
    /// accepts stale build ids; override when it stops doing so.
    pub build_id: String,

    /// Language code, sent as the `hl` query parameter.
    pub language: String,

    /// Additional request headers, appended after the built-in set.
    pub headers: Vec<(String, String)>,

    /// Additional URL query parameters, merged into every request.
    pub url_params: Vec<(String, String)>,

    /// Retry attempts after the first failure.
    pub max_retries: u32,

    /// Delay before the first retry; doubles per attempt.
    pub initial_delay: Duration,

    /// Ceiling on the per-attempt delay.
    pub max_delay: Duration,

    /// Wall-clock budget for one call, all retries included. `None` means no
    /// deadline beyond the HTTP client's own timeouts.
    pub timeout: Option<Duration>,

    /// Emit redacted dumps of every request and response.
    pub debug: bool,
} // struct

// -----------------------------------------------------------------------------

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            host: "notebooklm.google.com".to_string(),
            app: "LabsTailwindUi".to_string(),
            build_id: "boq_labs-tailwind-frontend_20250713.06_p0".to_string(),
            language: "en".to_string(),
            headers: Vec::new(),
            url_params: Vec::new(),
            max_retries: 3,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(10),
            timeout: None,
            debug: false,
        } // ClientConfig
    } // fn
} // impl

// -----------------------------------------------------------------------------

impl ClientConfig {
    // -------------------------------------------------------------------------
    //
    /// Completes the builder pattern into a final structure.
    ///
    /// ## Arguments
    ///
    /// This method accepts no arguments.
    #[must_use]
    pub fn build(&self) -> Self {
        self.clone()
    } // fn

    // -------------------------------------------------------------------------
    //
    /// Whether debug dumps are on: either through this config or through the
    /// process-wide `NOTEBOOKLM_DEBUG` environment variable.
    #[must_use]
    pub fn debug_enabled(&self) -> bool {
        if self.debug {
            return true;
        } // if
        std::env::var(DEBUG_ENV_VAR)
            .map(|value| !value.is_empty() && value != "0")
            .unwrap_or(false)
    } // fn
} // impl

// -----------------------------------------------------------------------------
//
// Tests
