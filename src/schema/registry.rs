//! Read-mostly lookup from message type names to descriptors.
//!
//! The built-in NotebookLM types are seeded on first access; additional
//! descriptors may be registered at runtime behind a writer lock.

use crate::schema::MessageDescriptor;
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

// -----------------------------------------------------------------------------

static REGISTRY: OnceLock<RwLock<HashMap<&'static str, &'static MessageDescriptor>>> =
    OnceLock::new();

fn registry() -> &'static RwLock<HashMap<&'static str, &'static MessageDescriptor>> {
    REGISTRY.get_or_init(|| {
        let mut map: HashMap<&'static str, &'static MessageDescriptor> = HashMap::new();
        for descriptor in crate::types::built_in_descriptors() {
            map.insert(descriptor.name, descriptor);
        } // for
        RwLock::new(map)
    })
} // fn

// -----------------------------------------------------------------------------

/// Resolves a message type name to its descriptor.
#[must_use]
pub fn resolve(name: &str) -> Option<&'static MessageDescriptor> {
    registry()
        .read()
        .ok()
        .and_then(|map| map.get(name).copied())
} // fn

/// Registers a descriptor under its own name. Later registrations replace
/// earlier ones.
pub fn register(descriptor: &'static MessageDescriptor) {
    if let Ok(mut map) = registry().write() {
        map.insert(descriptor.name, descriptor);
    } // if
} // fn

// -----------------------------------------------------------------------------
//
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Cardinality, FieldDescriptor, FieldKind};

    #[test]
    fn test_built_in_types_resolve() {
        assert!(resolve("Notebook").is_some());
        assert!(resolve("NotebookList").is_some());
        assert!(resolve("NoSuchType").is_none());
    }

    #[test]
    fn test_runtime_registration() {
        static EXTRA: MessageDescriptor = MessageDescriptor {
            name: "RegistryTestExtra",
            fields: &[FieldDescriptor {
                number: 1,
                name: "value",
                kind: FieldKind::Int64,
                cardinality: Cardinality::Singular,
            }],
        };
        register(&EXTRA);
        assert!(std::ptr::eq(resolve("RegistryTestExtra").unwrap(), &EXTRA));
    }
}
