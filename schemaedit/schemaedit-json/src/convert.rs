//! Conversions between [`TypeDescriptor`] and JSON.

use schemaedit_core::{TypeDescriptor, to_descriptor};
use serde_json::{Value, json};

use crate::{error::JsonSchemaError, source::JsonType};

/// Encode a descriptor in the JSON wire format.
///
/// Primitives become bare strings and unions become arrays; every other kind
/// is an object tagged with `type`.
pub fn descriptor_to_json(ty: &TypeDescriptor) -> Value {
    match ty {
        TypeDescriptor::Primitive(p) => Value::String(p.as_str().to_string()),
        TypeDescriptor::Array(items) => json!({
            "type": "array",
            "items": descriptor_to_json(items),
        }),
        TypeDescriptor::Map { keys, values } => json!({
            "type": "map",
            "keys": descriptor_to_json(keys),
            "values": descriptor_to_json(values),
        }),
        TypeDescriptor::Union(members) => {
            Value::Array(members.iter().map(descriptor_to_json).collect())
        }
        TypeDescriptor::Enum(symbols) => json!({
            "type": "enum",
            "symbols": symbols,
        }),
        TypeDescriptor::Record { name, fields } => json!({
            "type": "record",
            "name": name,
            "fields": fields
                .iter()
                .map(|f| json!({ "name": f.name, "type": descriptor_to_json(&f.ty) }))
                .collect::<Vec<_>>(),
        }),
    }
}

/// Pretty-printed JSON text of a descriptor.
pub fn descriptor_to_string(ty: &TypeDescriptor) -> Result<String, JsonSchemaError> {
    Ok(serde_json::to_string_pretty(&descriptor_to_json(ty))?)
}

/// Decode a JSON schema value into a descriptor.
///
/// Records without a `name` are given `record_name`.
pub fn descriptor_from_json(
    value: &Value,
    record_name: &str,
) -> Result<TypeDescriptor, JsonSchemaError> {
    Ok(to_descriptor(&JsonType::new(value.clone()), record_name)?)
}

/// Parse JSON text and decode it into a descriptor.
pub fn descriptor_from_str(text: &str, record_name: &str) -> Result<TypeDescriptor, JsonSchemaError> {
    let value: Value = serde_json::from_str(text)?;
    descriptor_from_json(&value, record_name)
}
