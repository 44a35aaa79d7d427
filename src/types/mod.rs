//! Common types used across the NotebookLM client: the wire-level entity
//! model and the error-classification wrapper.

pub(super) mod classified_error;
pub(super) mod notebook;
pub(super) mod source;

pub use classified_error::ClassifiedError;
pub use notebook::{
    CreateNotebookResponse, Notebook, NotebookList, CREATE_NOTEBOOK_REQUEST_DESCRIPTOR,
    CREATE_NOTEBOOK_RESPONSE_DESCRIPTOR, NOTEBOOK_DESCRIPTOR, NOTEBOOK_LIST_DESCRIPTOR,
};
pub use source::{Source, SOURCE_DESCRIPTOR, SOURCE_ID_DESCRIPTOR};

use crate::schema::MessageDescriptor;

// -----------------------------------------------------------------------------
//
/// The descriptors seeded into the schema registry on first access.
#[must_use]
pub(crate) fn built_in_descriptors() -> [&'static MessageDescriptor; 6] {
    [
        &NOTEBOOK_DESCRIPTOR,
        &NOTEBOOK_LIST_DESCRIPTOR,
        &CREATE_NOTEBOOK_REQUEST_DESCRIPTOR,
        &CREATE_NOTEBOOK_RESPONSE_DESCRIPTOR,
        &SOURCE_DESCRIPTOR,
        &SOURCE_ID_DESCRIPTOR,
    ]
} // fn
