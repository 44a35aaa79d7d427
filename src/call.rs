//! One logical RPC: an rpc id, its argument array, and per-call URL scoping.

use serde_json::{json, Value};

// -----------------------------------------------------------------------------
//
/// One batchexecute call. Immutable once built; the client reads it to
/// construct the request envelope and query string.
#[derive(Clone, Debug)]
pub struct Call {
    /// Short alphanumeric rpc id, e.g. `wXbhsf`.
    pub rpc_id: String,

    /// Heterogeneous positional argument array.
    pub args: Value,

    /// Notebook id scoping the call. Feeds only the `source-path` query
    /// parameter, which affects server-side permission checks.
    pub notebook_id: Option<String>,

    /// Per-call URL parameter overrides, applied after the config's.
    pub url_params: Vec<(String, String)>,
} // struct

// -----------------------------------------------------------------------------

impl Call {
    // -------------------------------------------------------------------------
    //
    /// Instantiates a call. `args` is the positional argument array; pass
    /// `json!([])` for argument-less methods.
    #[must_use]
    pub fn new(rpc_id: impl Into<String>, args: Value) -> Self {
        Self {
            rpc_id: rpc_id.into(),
            args,
            notebook_id: None,
            url_params: Vec::new(),
        } // Call
    } // fn

    // -------------------------------------------------------------------------
    //
    /// Scopes the call to a notebook, routing it through
    /// `/notebook/{id}` in the `source-path` parameter.
    #[must_use]
    pub fn with_notebook(mut self, notebook_id: impl Into<String>) -> Self {
        self.notebook_id = Some(notebook_id.into());
        self
    } // fn

    // -------------------------------------------------------------------------
    //
    /// Overrides one URL query parameter for this call only.
    #[must_use]
    pub fn with_url_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.url_params.push((name.into(), value.into()));
        self
    } // fn

    // -------------------------------------------------------------------------
    //
    /// The `source-path` query parameter value: `/` unscoped, or
    /// `/notebook/{id}` when scoped.
    #[must_use]
    pub fn source_path(&self) -> String {
        self.notebook_id
            .as_ref()
            .map_or_else(|| "/".to_string(), |id| format!("/notebook/{id}"))
    } // fn

    // -------------------------------------------------------------------------
    //
    /// The `f.req` envelope: `[[[id, JSON(args), null, "generic"]]]`, with
    /// the argument array double-encoded as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error when the argument array cannot be serialized, which
    /// only happens for non-finite floats.
    pub fn envelope(&self) -> Result<String, serde_json::Error> {
        let args = serde_json::to_string(&self.args)?;
        serde_json::to_string(&json!([[[&self.rpc_id, args, null, "generic"]]]))
    } // fn
} // impl

// -----------------------------------------------------------------------------
//
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let call = Call::new("wXbhsf", json!([null, 1]));
        assert_eq!(
            call.envelope().unwrap(),
            r#"[[["wXbhsf","[null,1]",null,"generic"]]]"#,
        );
    }

    #[test]
    fn test_source_path_scoping() {
        let unscoped = Call::new("wXbhsf", json!([]));
        assert_eq!(unscoped.source_path(), "/");

        let scoped = Call::new("izAoDd", json!([]))
            .with_notebook("fec1780c-5a14-4f07-8ee6-f8c3ee2930fa");
        assert_eq!(
            scoped.source_path(),
            "/notebook/fec1780c-5a14-4f07-8ee6-f8c3ee2930fa",
        );
    }
}
