//! Field-number schemas for positional-array messages.
//!
//! batchexecute carries positional JSON arrays in place of JSON objects: the
//! meaning of a slot comes from its position, not a key. These descriptors
//! carry the field numbers explicitly so the codec is data-driven rather than
//! tied to struct layout.

pub mod registry;

// -----------------------------------------------------------------------------
//
/// Whether a field holds one value or a list of values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cardinality {
    /// One value.
    Singular,

    /// A JSON array of values.
    Repeated,
} // enum

// -----------------------------------------------------------------------------
//
/// The wire kind of a field.
#[derive(Clone, Copy, Debug)]
pub enum FieldKind {
    /// Integers 0/1 on the wire; several looser spellings are accepted on
    /// deserialize.
    Bool,

    /// 32-bit integer.
    Int32,

    /// 64-bit integer.
    Int64,

    /// Double-precision float.
    Double,

    /// UTF-8 string.
    String,

    /// Byte blob, base64 on the wire.
    Bytes,

    /// Enumeration; numeric wire value, names accepted on deserialize.
    Enum(&'static EnumDescriptor),

    /// Nested message as a nested positional array.
    Message(&'static MessageDescriptor),

    /// Well-known timestamp: a two-element `[seconds, nanos]` array.
    Timestamp,
} // enum

// -----------------------------------------------------------------------------

impl FieldKind {
    /// Whether this kind is a scalar (everything except nested messages).
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::Message(_))
    } // fn
} // impl

// -----------------------------------------------------------------------------
//
/// One field of a message: its 1-based position, name, kind, and cardinality.
#[derive(Clone, Copy, Debug)]
pub struct FieldDescriptor {
    /// 1-based field number; the field occupies zero-based array index
    /// `number - 1`.
    pub number: u32,

    /// Field name, for diagnostics only; never on the wire.
    pub name: &'static str,

    /// Wire kind.
    pub kind: FieldKind,

    /// Singular or repeated.
    pub cardinality: Cardinality,
} // struct

// -----------------------------------------------------------------------------
//
/// A message type: a name plus its fields, ordered by field number.
#[derive(Debug)]
pub struct MessageDescriptor {
    /// Type name, resolvable through the registry.
    pub name: &'static str,

    /// Declared fields. Field numbers need not be contiguous.
    pub fields: &'static [FieldDescriptor],
} // struct

// -----------------------------------------------------------------------------

impl MessageDescriptor {
    // -------------------------------------------------------------------------
    //
    /// Looks a field up by its 1-based number.
    #[must_use]
    pub fn field(&self, number: u32) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.number == number)
    } // fn

    // -------------------------------------------------------------------------
    //
    /// The field with the lowest number, if any.
    #[must_use]
    pub fn first_field(&self) -> Option<&FieldDescriptor> {
        self.fields.iter().min_by_key(|field| field.number)
    } // fn

    // -------------------------------------------------------------------------
    //
    /// Whether this message is a wrapper: a single singular scalar field.
    /// Wrappers are transparently unwrapped on deserialize, so a bare scalar
    /// at the parent position populates the wrapped field directly.
    #[must_use]
    pub fn is_wrapper(&self) -> bool {
        matches!(
            self.fields,
            [field] if field.kind.is_scalar() && field.cardinality == Cardinality::Singular
        )
    } // fn
} // impl

// -----------------------------------------------------------------------------
//
/// An enumeration: named values with numeric wire form.
#[derive(Debug)]
pub struct EnumDescriptor {
    /// Type name, for diagnostics.
    pub name: &'static str,

    /// `(name, number)` pairs.
    pub values: &'static [(&'static str, i32)],
} // struct

// -----------------------------------------------------------------------------

impl EnumDescriptor {
    /// Resolves a value name to its wire number.
    #[must_use]
    pub fn number_for(&self, name: &str) -> Option<i32> {
        self.values
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, number)| *number)
    } // fn

    /// Resolves a wire number to its value name.
    #[must_use]
    pub fn name_for(&self, number: i32) -> Option<&'static str> {
        self.values
            .iter()
            .find(|(_, candidate)| *candidate == number)
            .map(|(name, _)| *name)
    } // fn
} // impl

// -----------------------------------------------------------------------------
//
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    static COLOR: EnumDescriptor = EnumDescriptor {
        name: "Color",
        values: &[("COLOR_UNSPECIFIED", 0), ("RED", 1), ("BLUE", 2)],
    };

    static WRAPPER: MessageDescriptor = MessageDescriptor {
        name: "StringWrapper",
        fields: &[FieldDescriptor {
            number: 1,
            name: "value",
            kind: FieldKind::String,
            cardinality: Cardinality::Singular,
        }],
    };

    static PAIR: MessageDescriptor = MessageDescriptor {
        name: "Pair",
        fields: &[
            FieldDescriptor {
                number: 2,
                name: "left",
                kind: FieldKind::Int64,
                cardinality: Cardinality::Singular,
            },
            FieldDescriptor {
                number: 4,
                name: "right",
                kind: FieldKind::String,
                cardinality: Cardinality::Singular,
            },
        ],
    };

    #[test]
    fn test_field_lookup() {
        assert_eq!(PAIR.field(4).unwrap().name, "right");
        assert!(PAIR.field(3).is_none());
        assert_eq!(PAIR.first_field().unwrap().name, "left");
    }

    #[test]
    fn test_wrapper_detection() {
        assert!(WRAPPER.is_wrapper());
        assert!(!PAIR.is_wrapper());
    }

    #[test]
    fn test_enum_lookup() {
        assert_eq!(COLOR.number_for("BLUE"), Some(2));
        assert_eq!(COLOR.name_for(1), Some("RED"));
        assert!(COLOR.number_for("GREEN").is_none());
    }
}
