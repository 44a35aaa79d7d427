//! The notebook entity and the message shapes that carry it.

use crate::beprotojson::{DynamicMessage, PositionalMessage, Timestamp, Value};
use crate::schema::{Cardinality, FieldDescriptor, FieldKind, MessageDescriptor};
use serde::{Deserialize, Serialize};

// -----------------------------------------------------------------------------
//
/// Positional schema of one notebook as it appears on the wire.
pub static NOTEBOOK_DESCRIPTOR: MessageDescriptor = MessageDescriptor {
    name: "Notebook",
    fields: &[
        FieldDescriptor {
            number: 1,
            name: "revision",
            kind: FieldKind::Int64,
            cardinality: Cardinality::Singular,
        },
        FieldDescriptor {
            number: 2,
            name: "emoji",
            kind: FieldKind::String,
            cardinality: Cardinality::Singular,
        },
        FieldDescriptor {
            number: 3,
            name: "notebook_id",
            kind: FieldKind::String,
            cardinality: Cardinality::Singular,
        },
        FieldDescriptor {
            number: 4,
            name: "title",
            kind: FieldKind::String,
            cardinality: Cardinality::Singular,
        },
        FieldDescriptor {
            number: 5,
            name: "created_at",
            kind: FieldKind::Timestamp,
            cardinality: Cardinality::Singular,
        },
        FieldDescriptor {
            number: 6,
            name: "owned",
            kind: FieldKind::Bool,
            cardinality: Cardinality::Singular,
        },
    ],
};

/// Positional schema of a notebook listing: one repeated slot of notebooks.
pub static NOTEBOOK_LIST_DESCRIPTOR: MessageDescriptor = MessageDescriptor {
    name: "NotebookList",
    fields: &[FieldDescriptor {
        number: 1,
        name: "notebooks",
        kind: FieldKind::Message(&NOTEBOOK_DESCRIPTOR),
        cardinality: Cardinality::Repeated,
    }],
};

/// Positional schema of the create-notebook request: title, then emoji.
pub static CREATE_NOTEBOOK_REQUEST_DESCRIPTOR: MessageDescriptor = MessageDescriptor {
    name: "CreateNotebookRequest",
    fields: &[
        FieldDescriptor {
            number: 1,
            name: "title",
            kind: FieldKind::String,
            cardinality: Cardinality::Singular,
        },
        FieldDescriptor {
            number: 2,
            name: "emoji",
            kind: FieldKind::String,
            cardinality: Cardinality::Singular,
        },
    ],
};

/// Positional schema of the create-notebook response: the created notebook in
/// slot 3, server flags in slot 5.
pub static CREATE_NOTEBOOK_RESPONSE_DESCRIPTOR: MessageDescriptor = MessageDescriptor {
    name: "CreateNotebookResponse",
    fields: &[
        FieldDescriptor {
            number: 3,
            name: "notebook",
            kind: FieldKind::Message(&NOTEBOOK_DESCRIPTOR),
            cardinality: Cardinality::Singular,
        },
        FieldDescriptor {
            number: 5,
            name: "flags",
            kind: FieldKind::Bool,
            cardinality: Cardinality::Repeated,
        },
    ],
};

// -----------------------------------------------------------------------------
//
/// One NotebookLM notebook.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    /// Leading numeric revision slot observed on the wire.
    pub revision: i64,

    /// The notebook's emoji, when one is set.
    pub emoji: String,

    /// UUID-shaped notebook identifier.
    pub id: String,

    /// Human-given title.
    pub title: String,

    /// Creation time, when the server includes it.
    pub created_at: Option<Timestamp>,

    /// Whether the calling account owns the notebook.
    pub owned: bool,
} // struct

// -----------------------------------------------------------------------------

impl PositionalMessage for Notebook {
    fn descriptor() -> &'static MessageDescriptor {
        &NOTEBOOK_DESCRIPTOR
    } // fn

    fn from_dynamic(message: &DynamicMessage) -> Self {
        Self {
            revision: message.int_field(1),
            emoji: message.str_field(2).to_string(),
            id: message.str_field(3).to_string(),
            title: message.str_field(4).to_string(),
            created_at: message.timestamp_field(5),
            owned: message.bool_field(6),
        } // Notebook
    } // fn

    fn to_dynamic(&self) -> DynamicMessage {
        let mut message = DynamicMessage::new(&NOTEBOOK_DESCRIPTOR);
        if self.revision != 0 {
            message.set(1, Value::Int(self.revision));
        } // if
        if !self.emoji.is_empty() {
            message.set(2, Value::String(self.emoji.clone()));
        } // if
        if !self.id.is_empty() {
            message.set(3, Value::String(self.id.clone()));
        } // if
        if !self.title.is_empty() {
            message.set(4, Value::String(self.title.clone()));
        } // if
        if let Some(created_at) = self.created_at {
            message.set(5, Value::Timestamp(created_at));
        } // if
        if self.owned {
            message.set(6, Value::Bool(true));
        } // if
        message
    } // fn
} // impl

// -----------------------------------------------------------------------------
//
/// A decoded notebook listing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotebookList {
    /// The notebooks, in server order.
    pub notebooks: Vec<Notebook>,
} // struct

// -----------------------------------------------------------------------------

impl PositionalMessage for NotebookList {
    fn descriptor() -> &'static MessageDescriptor {
        &NOTEBOOK_LIST_DESCRIPTOR
    } // fn

    fn from_dynamic(message: &DynamicMessage) -> Self {
        Self {
            notebooks: message
                .list_field(1)
                .iter()
                .filter_map(Value::as_message)
                .map(Notebook::from_dynamic)
                .collect(),
        } // NotebookList
    } // fn

    fn to_dynamic(&self) -> DynamicMessage {
        let mut message = DynamicMessage::new(&NOTEBOOK_LIST_DESCRIPTOR);
        if !self.notebooks.is_empty() {
            message.set(
                1,
                Value::List(
                    self.notebooks
                        .iter()
                        .map(|notebook| Value::Message(notebook.to_dynamic()))
                        .collect(),
                ),
            );
        } // if
        message
    } // fn
} // impl

// -----------------------------------------------------------------------------
//
/// The decoded create-notebook response.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateNotebookResponse {
    /// The created notebook, when the server echoed it back.
    pub notebook: Option<Notebook>,

    /// Opaque server flags from the trailing slot.
    pub flags: Vec<bool>,
} // struct

// -----------------------------------------------------------------------------

impl PositionalMessage for CreateNotebookResponse {
    fn descriptor() -> &'static MessageDescriptor {
        &CREATE_NOTEBOOK_RESPONSE_DESCRIPTOR
    } // fn

    fn from_dynamic(message: &DynamicMessage) -> Self {
        Self {
            notebook: message.message_field(3).map(Notebook::from_dynamic),
            flags: message
                .list_field(5)
                .iter()
                .filter_map(Value::as_bool)
                .collect(),
        } // CreateNotebookResponse
    } // fn

    fn to_dynamic(&self) -> DynamicMessage {
        let mut message = DynamicMessage::new(&CREATE_NOTEBOOK_RESPONSE_DESCRIPTOR);
        if let Some(notebook) = &self.notebook {
            message.set(3, Value::Message(notebook.to_dynamic()));
        } // if
        if !self.flags.is_empty() {
            message.set(
                5,
                Value::List(self.flags.iter().copied().map(Value::Bool).collect()),
            );
        } // if
        message
    } // fn
} // impl

// -----------------------------------------------------------------------------
//
// Tests
