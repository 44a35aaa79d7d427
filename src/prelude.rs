//! Put `use notebooklm::prelude::*;` in your code to get more convenient
//! access to everything you need. If you're not concerned with name space
//! collisions or conflicts, you can glob import all `notebooklm` structs and
//! enums by using this module.

// =============================================================================
//
// Common structures:

pub use crate::{
    call::Call,
    client::Client,
    config::ClientConfig,
    credentials::Credentials,
    error::Error,
    methods::Method,
};

// =============================================================================
//
// Codec and schema:

pub use crate::beprotojson::{
    DecodeOptions, DynamicMessage, PositionalMessage, Timestamp, Value,
};

pub use crate::schema::{
    Cardinality, EnumDescriptor, FieldDescriptor, FieldKind, MessageDescriptor,
};

// =============================================================================
//
// Wire and entity types:

pub use crate::response::{RawResponse, ResponseTuple};

pub use crate::status::{ApiError, ErrorCategory, ErrorCode};

pub use crate::types::{CreateNotebookResponse, Notebook, NotebookList, Source};
