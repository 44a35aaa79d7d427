//! The typed NotebookLM methods. Thin adapters: encode arguments, execute,
//! decode the payload. Transport concerns live in `execute`.

use crate::beprotojson::{self, DecodeOptions, DynamicMessage, PositionalMessage, Value};
use crate::call::Call;
use crate::client::Client;
use crate::methods::Method;
use crate::types::{CreateNotebookResponse, Notebook, CREATE_NOTEBOOK_REQUEST_DESCRIPTOR};
use serde_json::json;

// =============================================================================

impl Client {
    // -------------------------------------------------------------------------
    //
    /// Lists the account's recently viewed notebooks.
    ///
    /// The listing payload is the least stable shape this client consumes, so
    /// decoding runs through the resilient parser: structured decoding first,
    /// then the pattern fallbacks. An empty account produces an empty vector,
    /// not an error.
    ///
    /// ## Basic usage:
    ///
    /// ```rust
    /// let notebooks = client.list_notebooks().await?;
    /// for notebook in &notebooks {
    ///     println!("{} {} ({})", notebook.emoji, notebook.title, notebook.id);
    /// }
    /// ```
    pub async fn list_notebooks(&self) -> Result<Vec<Notebook>, crate::Error> {
        let call = Call::new(Method::ListNotebooks.rpc_id(), json!([null, 1, null, [2]]));
        let executed = self.execute_with_body(&call).await?;
        Ok(crate::listparse::parse_notebook_list(
            &executed.body,
            &call.rpc_id,
        )?)
    } // fn

    // -------------------------------------------------------------------------
    //
    /// Creates a notebook and returns it. Pass an empty `emoji` to let the
    /// server pick one.
    pub async fn create_notebook(
        &self,
        title: &str,
        emoji: &str,
    ) -> Result<Notebook, crate::Error> {
        let mut arguments = DynamicMessage::new(&CREATE_NOTEBOOK_REQUEST_DESCRIPTOR);
        arguments.set(1, Value::String(title.to_string()));
        if !emoji.is_empty() {
            arguments.set(2, Value::String(emoji.to_string()));
        } // if

        let call = Call::new(
            Method::CreateNotebook.rpc_id(),
            beprotojson::encode(&arguments),
        );
        let tuple = self.execute(&call).await?;
        let payload = tuple.payload()?;
        let response =
            CreateNotebookResponse::decode_payload(&payload, DecodeOptions::default())?;
        response
            .notebook
            .ok_or(crate::Error::Response(crate::response::Error::MissingPayload))
    } // fn

    // -------------------------------------------------------------------------
    //
    /// Deletes a notebook by id.
    pub async fn delete_notebook(&self, notebook_id: &str) -> Result<(), crate::Error> {
        let call = Call::new(Method::DeleteNotebook.rpc_id(), json!([[notebook_id]]))
            .with_notebook(notebook_id);
        self.execute(&call).await.map(|_| ())
    } // fn

    // -------------------------------------------------------------------------
    //
    /// Attaches a web page or YouTube video to a notebook by URL and returns
    /// the server's acknowledgement payload.
    ///
    /// YouTube URLs ride in a different slot of the source envelope than
    /// plain web URLs; the distinction is by host.
    pub async fn add_source_from_url(
        &self,
        notebook_id: &str,
        url: &str,
    ) -> Result<serde_json::Value, crate::Error> {
        let source = if is_youtube_url(url) {
            json!([null, null, null, null, null, null, null, [url]])
        } else {
            json!([null, null, [url]])
        };

        let call = Call::new(
            Method::AddSourceFromUrl.rpc_id(),
            json!([[source], notebook_id]),
        )
        .with_notebook(notebook_id);
        let tuple = self.execute(&call).await?;
        Ok(tuple.payload()?)
    } // fn
} // impl

// -----------------------------------------------------------------------------

fn is_youtube_url(url: &str) -> bool {
    url.contains("youtube.com/") || url.contains("youtu.be/")
} // fn

// -----------------------------------------------------------------------------
//
// Tests
