//! Serialization of dynamic messages into positional arrays.

use crate::beprotojson::value::{DynamicMessage, Value};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value as Json;

// -----------------------------------------------------------------------------
//
/// Serializes a message to its positional array.
///
/// Field number `i` lands at zero-based index `i − 1`. The array is exactly
/// as long as the highest set field number: interior unset slots are null,
/// trailing unset slots are omitted.
#[must_use]
pub(crate) fn encode_message(message: &DynamicMessage) -> Json {
    let length = message.max_field_number() as usize;
    let mut slots = vec![Json::Null; length];

    for (number, value) in message.entries() {
        if message.descriptor().field(number).is_none() {
            tracing::debug!(
                type_name = message.descriptor().name,
                number,
                "skipping value set under an undeclared field number"
            );
            continue;
        } // if
        slots[(number - 1) as usize] = encode_value(value);
    } // for

    Json::Array(slots)
} // fn

// -----------------------------------------------------------------------------
//
/// Serializes one value. Booleans become 0/1, bytes become base64,
/// timestamps become `[seconds, nanos]`, messages recurse, repeated fields
/// emit the flat list form.
fn encode_value(value: &Value) -> Json {
    match value {
        Value::Bool(flag) => Json::from(i32::from(*flag)),
        Value::Int(number) => Json::from(*number),
        Value::Double(number) => {
            serde_json::Number::from_f64(*number).map_or(Json::Null, Json::Number)
        } // Double
        Value::String(text) => Json::from(text.clone()),
        Value::Bytes(blob) => Json::from(STANDARD.encode(blob)),
        Value::Enum(number) => Json::from(*number),
        Value::Timestamp(timestamp) => {
            Json::Array(vec![Json::from(timestamp.seconds), Json::from(timestamp.nanos)])
        } // Timestamp
        Value::Message(message) => encode_message(message),
        Value::List(items) => Json::Array(items.iter().map(encode_value).collect()),
    } // match
} // fn

// -----------------------------------------------------------------------------
//
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beprotojson::value::Timestamp;
    use crate::schema::{Cardinality, FieldDescriptor, FieldKind, MessageDescriptor};
    use serde_json::json;

    static INNER: MessageDescriptor = MessageDescriptor {
        name: "EncodeTestInner",
        fields: &[FieldDescriptor {
            number: 1,
            name: "id",
            kind: FieldKind::String,
            cardinality: Cardinality::Singular,
        }],
    };

    static OUTER: MessageDescriptor = MessageDescriptor {
        name: "EncodeTestOuter",
        fields: &[
            FieldDescriptor {
                number: 1,
                name: "ready",
                kind: FieldKind::Bool,
                cardinality: Cardinality::Singular,
            },
            FieldDescriptor {
                number: 3,
                name: "title",
                kind: FieldKind::String,
                cardinality: Cardinality::Singular,
            },
            FieldDescriptor {
                number: 4,
                name: "inner",
                kind: FieldKind::Message(&INNER),
                cardinality: Cardinality::Singular,
            },
            FieldDescriptor {
                number: 5,
                name: "scores",
                kind: FieldKind::Int64,
                cardinality: Cardinality::Repeated,
            },
            FieldDescriptor {
                number: 6,
                name: "created",
                kind: FieldKind::Timestamp,
                cardinality: Cardinality::Singular,
            },
            FieldDescriptor {
                number: 7,
                name: "blob",
                kind: FieldKind::Bytes,
                cardinality: Cardinality::Singular,
            },
        ],
    };

    #[test]
    fn test_positions_and_interior_nulls() {
        let message = DynamicMessage::new(&OUTER)
            .with_field(1, Value::Bool(true))
            .with_field(3, Value::String("hello".to_string()));
        assert_eq!(encode_message(&message), json!([1, null, "hello"]));
    }

    #[test]
    fn test_trailing_unset_slots_are_omitted() {
        let message = DynamicMessage::new(&OUTER).with_field(1, Value::Bool(false));
        assert_eq!(encode_message(&message), json!([0]));
    }

    #[test]
    fn test_nested_repeated_timestamp_bytes() {
        let inner = DynamicMessage::new(&INNER)
            .with_field(1, Value::String("abc".to_string()));
        let message = DynamicMessage::new(&OUTER)
            .with_field(4, Value::Message(inner))
            .with_field(5, Value::List(vec![Value::Int(3), Value::Int(5)]))
            .with_field(6, Value::Timestamp(Timestamp::new(1_234_567_890, 42)))
            .with_field(7, Value::Bytes(vec![0xde, 0xad, 0xbe, 0xef]));
        assert_eq!(
            encode_message(&message),
            json!([null, null, null, ["abc"], [3, 5], [1_234_567_890, 42], "3q2+7w=="]),
        );
    }

    #[test]
    fn test_empty_message_is_empty_array() {
        assert_eq!(encode_message(&DynamicMessage::new(&OUTER)), json!([]));
    }
}
