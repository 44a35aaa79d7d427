//! The positional-array codec.
//!
//! batchexecute payloads are positional JSON arrays: the slot at zero-based
//! index `i` carries field number `i + 1` of a schema-described message. This
//! module converts between those arrays and [`DynamicMessage`] values in both
//! directions, driven entirely by [`crate::schema`] descriptors.
//!
//! Serialize-then-deserialize is the identity on every declared field.

mod decode;
mod encode;
pub mod error;
mod value;

pub use error::Error;
pub use value::{DynamicMessage, Timestamp, Value};

use crate::schema::MessageDescriptor;
use serde_json::Value as Json;

// -----------------------------------------------------------------------------
//
/// Decoding behavior for positions the schema does not declare.
#[derive(Clone, Copy, Debug)]
pub struct DecodeOptions {
    /// Discard unknown positions (default) instead of failing on them. The
    /// server grows new trailing slots without notice; strict decoding is for
    /// tests against fresh captures.
    pub discard_unknown: bool,
} // struct

// -----------------------------------------------------------------------------

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            discard_unknown: true,
        } // DecodeOptions
    } // fn
} // impl

// -----------------------------------------------------------------------------

impl DecodeOptions {
    /// Permissive decoding: unknown positions are discarded.
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            discard_unknown: true,
        } // DecodeOptions
    } // fn

    /// Strict decoding: unknown positions fail.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            discard_unknown: false,
        } // DecodeOptions
    } // fn
} // impl

// -----------------------------------------------------------------------------
//
/// Serializes a message to its positional array.
#[must_use]
pub fn encode(message: &DynamicMessage) -> Json {
    encode::encode_message(message)
} // fn

// -----------------------------------------------------------------------------
//
/// Deserializes a positional array into a message of the given type.
///
/// # Errors
///
/// Returns an error when a slot holds a value no coercion rule accepts, or —
/// under strict options — when the array carries an unknown position.
pub fn decode(
    value: &Json,
    descriptor: &'static MessageDescriptor,
    options: DecodeOptions,
) -> Result<DynamicMessage, Error> {
    decode::decode_message(value, descriptor, options)
} // fn

// -----------------------------------------------------------------------------
//
/// Deserializes a positional array into a message type resolved by name
/// through the schema registry.
///
/// # Errors
///
/// Returns an error when the type name does not resolve, plus everything
/// `decode` can return.
pub fn decode_by_name(
    type_name: &str,
    value: &Json,
    options: DecodeOptions,
) -> Result<DynamicMessage, Error> {
    let descriptor = crate::schema::registry::resolve(type_name)
        .ok_or_else(|| Error::UnknownType(type_name.to_string()))?;
    decode(value, descriptor, options)
} // fn

// -----------------------------------------------------------------------------
//
/// A typed view over a positional message: the descriptor plus conversions
/// to and from the dynamic form. Implemented by the concrete request and
/// response types in [`crate::types`].
pub trait PositionalMessage: Sized {
    /// The message type's descriptor.
    fn descriptor() -> &'static MessageDescriptor;

    /// Reads the typed value out of a decoded message. Unset fields read as
    /// zero values, so this conversion is total.
    fn from_dynamic(message: &DynamicMessage) -> Self;

    /// Builds the dynamic form for serialization.
    fn to_dynamic(&self) -> DynamicMessage;

    // -------------------------------------------------------------------------
    //
    /// Decodes a payload value straight into the typed form.
    ///
    /// # Errors
    ///
    /// Returns an error when the payload does not decode against the
    /// descriptor.
    fn decode_payload(value: &Json, options: DecodeOptions) -> Result<Self, Error> {
        decode(value, Self::descriptor(), options).map(|message| Self::from_dynamic(&message))
    } // fn

    /// Serializes the typed value to its positional array.
    #[must_use]
    fn encode_payload(&self) -> Json {
        encode(&self.to_dynamic())
    } // fn
} // trait

// -----------------------------------------------------------------------------
//
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Cardinality, FieldDescriptor, FieldKind};
    use serde_json::json;

    static ITEM: MessageDescriptor = MessageDescriptor {
        name: "CodecTestItem",
        fields: &[
            FieldDescriptor {
                number: 1,
                name: "id",
                kind: FieldKind::String,
                cardinality: Cardinality::Singular,
            },
            FieldDescriptor {
                number: 2,
                name: "count",
                kind: FieldKind::Int64,
                cardinality: Cardinality::Singular,
            },
        ],
    };

    static BASKET: MessageDescriptor = MessageDescriptor {
        name: "CodecTestBasket",
        fields: &[
            FieldDescriptor {
                number: 1,
                name: "open",
                kind: FieldKind::Bool,
                cardinality: Cardinality::Singular,
            },
            FieldDescriptor {
                number: 2,
                name: "label",
                kind: FieldKind::String,
                cardinality: Cardinality::Singular,
            },
            FieldDescriptor {
                number: 3,
                name: "items",
                kind: FieldKind::Message(&ITEM),
                cardinality: Cardinality::Repeated,
            },
            FieldDescriptor {
                number: 4,
                name: "weights",
                kind: FieldKind::Double,
                cardinality: Cardinality::Repeated,
            },
            FieldDescriptor {
                number: 5,
                name: "sealed_at",
                kind: FieldKind::Timestamp,
                cardinality: Cardinality::Singular,
            },
            FieldDescriptor {
                number: 6,
                name: "digest",
                kind: FieldKind::Bytes,
                cardinality: Cardinality::Singular,
            },
        ],
    };

    fn sample() -> DynamicMessage {
        let first = DynamicMessage::new(&ITEM)
            .with_field(1, Value::String("a1".to_string()))
            .with_field(2, Value::Int(3));
        let second = DynamicMessage::new(&ITEM)
            .with_field(1, Value::String("b2".to_string()))
            .with_field(2, Value::Int(-14));
        DynamicMessage::new(&BASKET)
            .with_field(1, Value::Bool(true))
            .with_field(2, Value::String("groceries".to_string()))
            .with_field(3, Value::List(vec![Value::Message(first), Value::Message(second)]))
            .with_field(4, Value::List(vec![Value::Double(0.5), Value::Double(2.25)]))
            .with_field(5, Value::Timestamp(Timestamp::new(1_700_000_000, 500)))
            .with_field(6, Value::Bytes(b"digest".to_vec()))
    }

    #[test]
    fn test_round_trip_is_identity() {
        let message = sample();
        let wire = encode(&message);
        let back = decode(&wire, &BASKET, DecodeOptions::default()).unwrap();
        assert_eq!(message, back);
    }

    #[test]
    fn test_round_trip_survives_strict_decoding() {
        let message = sample();
        let wire = encode(&message);
        let back = decode(&wire, &BASKET, DecodeOptions::strict()).unwrap();
        assert_eq!(message, back);
    }

    #[test]
    fn test_decode_by_name_resolves_registry() {
        let wire = json!([null, null, [[3, null, "id-1", "First"]]]);
        let decoded = decode_by_name("NotebookList", &json!([[[3, null, "id", "t"]]]),
            DecodeOptions::default());
        assert!(decoded.is_ok());
        assert!(decode_by_name("NoSuchType", &wire, DecodeOptions::default()).is_err());
    }
}
