//! The source entity: one document, URL, or video attached to a notebook.

use crate::beprotojson::{DynamicMessage, PositionalMessage, Value};
use crate::schema::{Cardinality, FieldDescriptor, FieldKind, MessageDescriptor};
use serde::{Deserialize, Serialize};

// -----------------------------------------------------------------------------
//
/// Wrapper around a bare source identifier. The server sometimes sends the
/// identifier string directly where this message is expected; the codec's
/// wrapper unwrapping places it into the lone field.
pub static SOURCE_ID_DESCRIPTOR: MessageDescriptor = MessageDescriptor {
    name: "SourceId",
    fields: &[FieldDescriptor {
        number: 1,
        name: "id",
        kind: FieldKind::String,
        cardinality: Cardinality::Singular,
    }],
};

/// Positional schema of one source.
pub static SOURCE_DESCRIPTOR: MessageDescriptor = MessageDescriptor {
    name: "Source",
    fields: &[
        FieldDescriptor {
            number: 1,
            name: "source_id",
            kind: FieldKind::Message(&SOURCE_ID_DESCRIPTOR),
            cardinality: Cardinality::Singular,
        },
        FieldDescriptor {
            number: 2,
            name: "title",
            kind: FieldKind::String,
            cardinality: Cardinality::Singular,
        },
    ],
};

// -----------------------------------------------------------------------------
//
/// One source attached to a notebook.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// UUID-shaped source identifier.
    pub id: String,

    /// Display title.
    pub title: String,
} // struct

// -----------------------------------------------------------------------------

impl PositionalMessage for Source {
    fn descriptor() -> &'static MessageDescriptor {
        &SOURCE_DESCRIPTOR
    } // fn

    fn from_dynamic(message: &DynamicMessage) -> Self {
        Self {
            id: message
                .message_field(1)
                .map(|wrapper| wrapper.str_field(1).to_string())
                .unwrap_or_default(),
            title: message.str_field(2).to_string(),
        } // Source
    } // fn

    fn to_dynamic(&self) -> DynamicMessage {
        let mut message = DynamicMessage::new(&SOURCE_DESCRIPTOR);
        if !self.id.is_empty() {
            message.set(
                1,
                Value::Message(
                    DynamicMessage::new(&SOURCE_ID_DESCRIPTOR)
                        .with_field(1, Value::String(self.id.clone())),
                ),
            );
        } // if
        if !self.title.is_empty() {
            message.set(2, Value::String(self.title.clone()));
        } // if
        message
    } // fn
} // impl

// -----------------------------------------------------------------------------
//
// Tests
