//! The dynamic value model the codec decodes into and encodes from.

use crate::schema::MessageDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// -----------------------------------------------------------------------------
//
/// Well-known timestamp: `[seconds, nanos]` on the wire.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Timestamp {
    /// Seconds since the Unix epoch.
    pub seconds: i64,

    /// Nanosecond remainder.
    pub nanos: i32,
} // struct

// -----------------------------------------------------------------------------

impl Timestamp {
    /// Builds a timestamp from its two wire components.
    #[must_use]
    pub const fn new(seconds: i64, nanos: i32) -> Self {
        Self { seconds, nanos }
    } // fn
} // impl

// -----------------------------------------------------------------------------
//
/// One decoded field value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Boolean; integers 0/1 on the wire.
    Bool(bool),

    /// Any integer kind.
    Int(i64),

    /// Double-precision float.
    Double(f64),

    /// UTF-8 string.
    String(String),

    /// Byte blob; base64 on the wire.
    Bytes(Vec<u8>),

    /// Enumeration wire number.
    Enum(i32),

    /// Well-known timestamp.
    Timestamp(Timestamp),

    /// Nested message.
    Message(DynamicMessage),

    /// Repeated field contents.
    List(Vec<Value>),
} // enum

// -----------------------------------------------------------------------------

impl Value {
    /// The boolean inside, if this is a `Bool`.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        } // match
    } // fn

    /// The integer inside, if this is an `Int` or `Enum`.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Enum(value) => Some(*value as i64),
            _ => None,
        } // match
    } // fn

    /// The float inside, if this is a `Double`.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(value) => Some(*value),
            _ => None,
        } // match
    } // fn

    /// The string slice inside, if this is a `String`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        } // match
    } // fn

    /// The nested message inside, if this is a `Message`.
    #[must_use]
    pub const fn as_message(&self) -> Option<&DynamicMessage> {
        match self {
            Self::Message(message) => Some(message),
            _ => None,
        } // match
    } // fn

    /// The items inside, if this is a `List`.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        } // match
    } // fn
} // impl

// -----------------------------------------------------------------------------
//
/// A decoded message: a descriptor plus values keyed by field number.
///
/// Fields with no value read back as their kind's zero value through the
/// typed accessors, mirroring how unset positional slots behave on the wire.
#[derive(Clone, Debug)]
pub struct DynamicMessage {
    descriptor: &'static MessageDescriptor,
    fields: BTreeMap<u32, Value>,
} // struct

// -----------------------------------------------------------------------------
//
// Descriptors are statics, so two messages are the same type exactly when
// they point at the same descriptor.

impl PartialEq for DynamicMessage {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.descriptor, other.descriptor) && self.fields == other.fields
    } // fn
} // impl

// -----------------------------------------------------------------------------

impl DynamicMessage {
    // -------------------------------------------------------------------------
    //
    /// Instantiates an empty message of the given type.
    #[must_use]
    pub const fn new(descriptor: &'static MessageDescriptor) -> Self {
        Self {
            descriptor,
            fields: BTreeMap::new(),
        } // DynamicMessage
    } // fn

    // -------------------------------------------------------------------------
    //
    /// The message's descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &'static MessageDescriptor {
        self.descriptor
    } // fn

    // -------------------------------------------------------------------------
    //
    /// Stores a value under a field number.
    pub fn set(&mut self, number: u32, value: Value) {
        self.fields.insert(number, value);
    } // fn

    // -------------------------------------------------------------------------
    //
    /// Chainable form of `set`, for building messages field by field.
    #[must_use]
    pub fn with_field(mut self, number: u32, value: Value) -> Self {
        self.set(number, value);
        self
    } // fn

    // -------------------------------------------------------------------------
    //
    /// The raw value under a field number, if set.
    #[must_use]
    pub fn get(&self, number: u32) -> Option<&Value> {
        self.fields.get(&number)
    } // fn

    // -------------------------------------------------------------------------
    //
    /// Iterates set fields in field-number order.
    pub fn entries(&self) -> impl Iterator<Item = (u32, &Value)> + '_ {
        self.fields.iter().map(|(number, value)| (*number, value))
    } // fn

    // -------------------------------------------------------------------------
    //
    /// The highest set field number, or zero for an empty message.
    #[must_use]
    pub fn max_field_number(&self) -> u32 {
        self.fields.keys().next_back().copied().unwrap_or(0)
    } // fn

    // -------------------------------------------------------------------------
    //
    // Zero-value accessors. An unset slot reads as the kind's zero value.

    /// String field; empty when unset.
    #[must_use]
    pub fn str_field(&self, number: u32) -> &str {
        self.get(number).and_then(Value::as_str).unwrap_or("")
    } // fn

    /// Integer field; zero when unset.
    #[must_use]
    pub fn int_field(&self, number: u32) -> i64 {
        self.get(number).and_then(Value::as_i64).unwrap_or(0)
    } // fn

    /// Float field; zero when unset.
    #[must_use]
    pub fn double_field(&self, number: u32) -> f64 {
        self.get(number).and_then(Value::as_f64).unwrap_or(0.0)
    } // fn

    /// Boolean field; false when unset.
    #[must_use]
    pub fn bool_field(&self, number: u32) -> bool {
        self.get(number).and_then(Value::as_bool).unwrap_or(false)
    } // fn

    /// Timestamp field; `None` when unset.
    #[must_use]
    pub fn timestamp_field(&self, number: u32) -> Option<Timestamp> {
        match self.get(number) {
            Some(Value::Timestamp(timestamp)) => Some(*timestamp),
            _ => None,
        } // match
    } // fn

    /// Repeated field items; empty when unset.
    #[must_use]
    pub fn list_field(&self, number: u32) -> &[Value] {
        self.get(number).and_then(Value::as_list).unwrap_or(&[])
    } // fn

    /// Nested message field; `None` when unset.
    #[must_use]
    pub fn message_field(&self, number: u32) -> Option<&DynamicMessage> {
        self.get(number).and_then(Value::as_message)
    } // fn
} // impl

// -----------------------------------------------------------------------------
//
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Cardinality, FieldDescriptor, FieldKind};

    static POINT: MessageDescriptor = MessageDescriptor {
        name: "ValueTestPoint",
        fields: &[
            FieldDescriptor {
                number: 1,
                name: "x",
                kind: FieldKind::Int64,
                cardinality: Cardinality::Singular,
            },
            FieldDescriptor {
                number: 3,
                name: "label",
                kind: FieldKind::String,
                cardinality: Cardinality::Singular,
            },
        ],
    };

    #[test]
    fn test_unset_fields_read_as_zero_values() {
        let message = DynamicMessage::new(&POINT);
        assert_eq!(message.int_field(1), 0);
        assert_eq!(message.str_field(3), "");
        assert!(!message.bool_field(9));
        assert!(message.list_field(9).is_empty());
        assert!(message.message_field(9).is_none());
    }

    #[test]
    fn test_set_and_read_back() {
        let message = DynamicMessage::new(&POINT)
            .with_field(1, Value::Int(7))
            .with_field(3, Value::String("origin".to_string()));
        assert_eq!(message.int_field(1), 7);
        assert_eq!(message.str_field(3), "origin");
        assert_eq!(message.max_field_number(), 3);
    }
}
