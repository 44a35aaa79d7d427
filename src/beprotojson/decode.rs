//! Deserialization of positional arrays into dynamic messages.
//!
//! The server's encoders are loose: booleans arrive as numbers or strings,
//! strings arrive as numbers, empty lists arrive as `null`, `false` or a bare
//! status number, and nested lists arrive at more than one depth. The rules
//! here accept every shape observed in captures while keeping the strict
//! option available for tests against fresh traffic.

use crate::beprotojson::error::Error;
use crate::beprotojson::value::{DynamicMessage, Timestamp, Value};
use crate::beprotojson::DecodeOptions;
use crate::schema::{Cardinality, FieldDescriptor, FieldKind, MessageDescriptor};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value as Json;

// -----------------------------------------------------------------------------
//
/// Decodes a positional array (or a tolerated scalar) into a message.
pub(crate) fn decode_message(
    value: &Json,
    descriptor: &'static MessageDescriptor,
    options: DecodeOptions,
) -> Result<DynamicMessage, Error> {
    match value {
        Json::Null => Ok(DynamicMessage::new(descriptor)),

        Json::Array(slots) => {
            let mut message = DynamicMessage::new(descriptor);
            for (index, slot) in slots.iter().enumerate() {
                if slot.is_null() {
                    continue;
                } // if
                let number = u32::try_from(index + 1).unwrap_or(u32::MAX);
                match descriptor.field(number) {
                    Some(field) => {
                        if let Some(decoded) = decode_field(slot, field, options)? {
                            message.set(number, decoded);
                        } // if
                    } // Some
                    None if options.discard_unknown => {
                        tracing::trace!(
                            type_name = descriptor.name,
                            position = index + 1,
                            "discarding unknown position"
                        );
                    } // None
                    None => {
                        return Err(Error::UnknownPosition {
                            type_name: descriptor.name,
                            position: index + 1,
                        });
                    } // None
                } // match
            } // for
            Ok(message)
        } // Array

        // A scalar where a message was expected: place it into the first
        // field when the types are compatible, otherwise produce an empty
        // message. Single-scalar-field wrappers unwrap through this same
        // path.
        scalar => {
            let mut message = DynamicMessage::new(descriptor);
            if let Some(field) = descriptor.first_field() {
                match decode_field(scalar, field, options) {
                    Ok(Some(decoded)) => message.set(field.number, decoded),
                    Ok(None) => (),
                    Err(_) => tracing::debug!(
                        type_name = descriptor.name,
                        "scalar incompatible with first field, decoding as empty"
                    ),
                } // match
            } // if
            Ok(message)
        } // _
    } // match
} // fn

// -----------------------------------------------------------------------------

fn decode_field(
    slot: &Json,
    field: &FieldDescriptor,
    options: DecodeOptions,
) -> Result<Option<Value>, Error> {
    match field.cardinality {
        Cardinality::Repeated => decode_repeated(slot, field, options).map(Some),
        Cardinality::Singular => decode_singular(slot, field, options),
    } // match
} // fn

// -----------------------------------------------------------------------------
//
/// Repeated fields tolerate the server's spellings of "no items": `null`,
/// `false`, and bare numbers all decode to the empty list.
fn decode_repeated(
    slot: &Json,
    field: &FieldDescriptor,
    options: DecodeOptions,
) -> Result<Value, Error> {
    let items = match slot {
        Json::Null | Json::Bool(false) | Json::Number(_) => return Ok(Value::List(Vec::new())),
        Json::Array(items) => items,
        other => {
            return Err(Error::InvalidScalar {
                expected: "array",
                found: render(other),
            });
        } // _
    };

    // Repeated message fields arrive at two depths: the flat form
    // `[item, item, …]` and a form nested one level deeper,
    // `[[item, item, …]]`. The first element's shape tells them apart.
    let items: &[Json] = match (&field.kind, items.first()) {
        (FieldKind::Message(_), Some(Json::Array(inner)))
            if items.len() == 1 && inner.first().is_some_and(Json::is_array) =>
        {
            inner
        } // nested
        _ => items,
    };

    let mut decoded = Vec::with_capacity(items.len());
    for item in items {
        if item.is_null() {
            continue;
        } // if
        if let Some(value) = decode_singular(item, field, options)? {
            decoded.push(value);
        } // if
    } // for
    Ok(Value::List(decoded))
} // fn

// -----------------------------------------------------------------------------

fn decode_singular(
    slot: &Json,
    field: &FieldDescriptor,
    options: DecodeOptions,
) -> Result<Option<Value>, Error> {
    if slot.is_null() {
        return Ok(None);
    } // if

    let value = match field.kind {
        FieldKind::Bool => Value::Bool(coerce_bool(slot)?),
        FieldKind::Int32 | FieldKind::Int64 => Value::Int(coerce_int(slot)?),
        FieldKind::Double => Value::Double(coerce_double(slot)?),
        FieldKind::String => Value::String(coerce_string(slot)?),
        FieldKind::Bytes => match slot {
            Json::String(encoded) => Value::Bytes(STANDARD.decode(encoded)?),
            other => {
                return Err(Error::InvalidScalar {
                    expected: "base64 string",
                    found: render(other),
                });
            } // _
        }, // Bytes
        FieldKind::Enum(enumeration) => Value::Enum(coerce_enum(slot, enumeration)?),
        FieldKind::Timestamp => Value::Timestamp(coerce_timestamp(slot)?),
        FieldKind::Message(descriptor) => {
            Value::Message(decode_message(slot, descriptor, options)?)
        } // Message
    };

    Ok(Some(value))
} // fn

// -----------------------------------------------------------------------------
//
// Scalar coercions.

/// Booleans arrive as booleans, as 0/1 (or any nonzero number), and as the
/// strings "true"/"false"/"1"/"0".
fn coerce_bool(slot: &Json) -> Result<bool, Error> {
    match slot {
        Json::Bool(flag) => Ok(*flag),
        Json::Number(number) => Ok(number.as_f64().unwrap_or(0.0) != 0.0),
        Json::String(text) => match text.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(Error::InvalidScalar {
                expected: "boolean",
                found: render(slot),
            }),
        }, // String
        other => Err(Error::InvalidScalar {
            expected: "boolean",
            found: render(other),
        }),
    } // match
} // fn

fn coerce_int(slot: &Json) -> Result<i64, Error> {
    match slot {
        Json::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float as i64))
            .ok_or_else(|| Error::InvalidScalar {
                expected: "integer",
                found: render(slot),
            }),
        Json::String(text) => text
            .parse::<i64>()
            .or_else(|_| text.parse::<f64>().map(|float| float as i64))
            .map_err(|_| Error::InvalidScalar {
                expected: "integer",
                found: render(slot),
            }),
        other => Err(Error::InvalidScalar {
            expected: "integer",
            found: render(other),
        }),
    } // match
} // fn

fn coerce_double(slot: &Json) -> Result<f64, Error> {
    match slot {
        Json::Number(number) => number.as_f64().ok_or_else(|| Error::InvalidScalar {
            expected: "number",
            found: render(slot),
        }),
        Json::String(text) => text.parse::<f64>().map_err(|_| Error::InvalidScalar {
            expected: "number",
            found: render(slot),
        }),
        other => Err(Error::InvalidScalar {
            expected: "number",
            found: render(other),
        }),
    } // match
} // fn

/// Strings absorb numbers (decimal form) and booleans (lowercase literal).
fn coerce_string(slot: &Json) -> Result<String, Error> {
    match slot {
        Json::String(text) => Ok(text.clone()),
        Json::Number(number) => Ok(number.to_string()),
        Json::Bool(flag) => Ok(flag.to_string()),
        other => Err(Error::InvalidScalar {
            expected: "string",
            found: render(other),
        }),
    } // match
} // fn

/// Enumerations arrive numeric, as numeric strings, or by value name.
fn coerce_enum(
    slot: &Json,
    enumeration: &'static crate::schema::EnumDescriptor,
) -> Result<i32, Error> {
    match slot {
        Json::Number(number) => number
            .as_i64()
            .and_then(|wide| i32::try_from(wide).ok())
            .ok_or_else(|| Error::InvalidScalar {
                expected: "enum number",
                found: render(slot),
            }),
        Json::String(text) => {
            if let Ok(number) = text.parse::<i32>() {
                return Ok(number);
            } // if
            enumeration
                .number_for(text)
                .ok_or_else(|| Error::UnknownEnumName {
                    enumeration: enumeration.name,
                    name: text.clone(),
                })
        } // String
        other => Err(Error::InvalidScalar {
            expected: "enum",
            found: render(other),
        }),
    } // match
} // fn

/// Timestamps arrive as `[seconds, nanos]`, `[seconds]`, or bare seconds.
fn coerce_timestamp(slot: &Json) -> Result<Timestamp, Error> {
    match slot {
        Json::Array(parts) => {
            let seconds = parts.first().map_or(Ok(0), coerce_int)?;
            let nanos = parts
                .get(1)
                .map_or(Ok(0), |part| coerce_int(part).map(|wide| wide as i32))?;
            Ok(Timestamp::new(seconds, nanos))
        } // Array
        Json::Number(_) => Ok(Timestamp::new(coerce_int(slot)?, 0)),
        other => Err(Error::InvalidScalar {
            expected: "timestamp",
            found: render(other),
        }),
    } // match
} // fn

// -----------------------------------------------------------------------------
//
/// Bounded rendering of an incoming value for error messages.
fn render(value: &Json) -> String {
    let mut text = value.to_string();
    if text.len() > 80 {
        let mut end = 80;
        while !text.is_char_boundary(end) {
            end -= 1;
        } // while
        text.truncate(end);
        text.push('…');
    } // if
    text
} // fn

// -----------------------------------------------------------------------------
//
// Tests
