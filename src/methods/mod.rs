//! The known NotebookLM rpc ids.
//!
//! The ids are short opaque strings minted by the front-end build; they
//! change rarely, but nothing upstream documents them. Methods not listed
//! here can be called through [`crate::Client::execute`] with a hand-built
//! [`crate::Call`].

// -----------------------------------------------------------------------------
//
/// A known NotebookLM method.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Method {
    /// Lists the account's recently viewed notebooks.
    ListNotebooks,

    /// Creates a notebook from a title and an optional emoji.
    CreateNotebook,

    /// Deletes notebooks by id.
    DeleteNotebook,

    /// Attaches a source (web page or YouTube video) to a notebook by URL.
    AddSourceFromUrl,
} // enum

// -----------------------------------------------------------------------------

impl Method {
    /// The wire rpc id for this method.
    #[must_use]
    pub const fn rpc_id(self) -> &'static str {
        match self {
            Self::ListNotebooks => "wXbhsf",
            Self::CreateNotebook => "VUsiyb",
            Self::DeleteNotebook => "WWINqb",
            Self::AddSourceFromUrl => "izAoDd",
        } // match
    } // fn
} // impl

// -----------------------------------------------------------------------------

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rpc_id())
    } // fn
} // impl

// -----------------------------------------------------------------------------
//
// Tests
