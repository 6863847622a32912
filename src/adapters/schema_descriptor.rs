//! Structural type descriptors for schema preview.
//!
//! Mirrors a [`Field`] tree into a JSON-schema-like shape, e.g.
//! `{"name": "string", "tags": ["string"]}`. Pure and cheap enough to run
//! on every keystroke of the editing surface.

use crate::domain::{Field, FieldType};
use serde_json::{json, Map, Value};

/// Convert a schema tree into its type descriptor.
///
/// Object keys follow input field order.
pub fn schema_to_descriptor(fields: &[Field]) -> Value {
    let mut descriptor = Map::new();
    for field in fields {
        descriptor.insert(field.name.clone(), field_descriptor(field));
    }
    Value::Object(descriptor)
}

fn field_descriptor(field: &Field) -> Value {
    match field.field_type {
        FieldType::Object => match &field.children {
            Some(children) if !children.is_empty() => schema_to_descriptor(children),
            _ => json!({}),
        },
        FieldType::Array => match (field.array_item_type, &field.array_item_schema) {
            (Some(FieldType::Object), Some(schema)) => json!([schema_to_descriptor(schema)]),
            (Some(item_type), _) => json!([item_type.as_str()]),
            (None, _) => json!(["string"]),
        },
        other => json!(other.as_str()),
    }
}
