//! [`TypeSource`] over JSON values.

use schemaedit_core::{SchemaError, TypeSource};
use serde_json::{Map, Value};

/// One node of a JSON schema.
///
/// Accepted shapes, interchangeably at every level:
/// - `"int"`: a bare tag;
/// - `["string", "long"]`: a union;
/// - `{"type": "array", "items": ...}` and the other composite objects;
/// - `{"fields": [...]}`: a record without an explicit tag;
/// - `{"type": <object or array>}`: a wrapper around another node.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonType(Value);

impl JsonType {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// The node itself, with `{"type": <non-string>}` wrappers peeled off.
    fn resolved(&self) -> &Value {
        let mut value = &self.0;
        while let Value::Object(map) = value {
            match map.get("type") {
                Some(inner @ (Value::Object(_) | Value::Array(_))) => value = inner,
                _ => break,
            }
        }
        value
    }

    fn object(&self, tag: &str) -> Result<Option<&Map<String, Value>>, SchemaError> {
        match self.resolved() {
            Value::Object(map) => Ok(Some(map)),
            Value::String(_) => Ok(None),
            other => Err(SchemaError::malformed(
                tag,
                format!("expected an object, found {}", json_kind(other)),
            )),
        }
    }

    fn required(&self, tag: &str, key: &str) -> Result<Option<JsonType>, SchemaError> {
        let Some(map) = self.object(tag)? else {
            return Ok(None);
        };
        map.get(key)
            .map(|v| Some(JsonType(v.clone())))
            .ok_or_else(|| SchemaError::malformed(tag, format!("missing '{key}'")))
    }
}

impl From<Value> for JsonType {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl TypeSource for JsonType {
    fn type_tag(&self) -> Result<String, SchemaError> {
        match self.resolved() {
            Value::String(tag) => Ok(tag.clone()),
            Value::Array(_) => Ok("union".to_string()),
            Value::Object(map) => match map.get("type") {
                Some(Value::String(tag)) => Ok(tag.clone()),
                None if map.contains_key("fields") => Ok("record".to_string()),
                None => Err(SchemaError::malformed("", "missing 'type'")),
                Some(other) => Err(SchemaError::malformed(
                    "",
                    format!("'type' must be a string, found {}", json_kind(other)),
                )),
            },
            other => Err(SchemaError::malformed(
                "",
                format!("expected a type, found {}", json_kind(other)),
            )),
        }
    }

    fn items_type(&self) -> Result<Option<Self>, SchemaError> {
        self.required("array", "items")
    }

    /// Map keys are optional on the wire and default to `string`.
    fn keys_type(&self) -> Result<Option<Self>, SchemaError> {
        Ok(self
            .object("map")?
            .and_then(|map| map.get("keys"))
            .map(|v| JsonType(v.clone())))
    }

    fn values_type(&self) -> Result<Option<Self>, SchemaError> {
        self.required("map", "values")
    }

    fn member_types(&self) -> Result<Option<Vec<Self>>, SchemaError> {
        let members = match self.resolved() {
            Value::Array(members) => members,
            Value::String(_) => return Ok(None),
            Value::Object(map) => match map.get("types") {
                Some(Value::Array(members)) => members,
                Some(other) => {
                    return Err(SchemaError::malformed(
                        "union",
                        format!("'types' must be an array, found {}", json_kind(other)),
                    ));
                }
                None => return Err(SchemaError::malformed("union", "missing 'types'")),
            },
            other => {
                return Err(SchemaError::malformed(
                    "union",
                    format!("expected an array, found {}", json_kind(other)),
                ));
            }
        };
        Ok(Some(members.iter().cloned().map(JsonType).collect()))
    }

    fn symbols(&self) -> Result<Option<Vec<String>>, SchemaError> {
        let Some(symbols) = self.required("enum", "symbols")? else {
            return Ok(None);
        };
        let Value::Array(symbols) = symbols.0 else {
            return Err(SchemaError::malformed("enum", "'symbols' must be an array"));
        };
        symbols
            .into_iter()
            .map(|s| match s {
                Value::String(s) => Ok(s),
                other => Err(SchemaError::malformed(
                    "enum",
                    format!("symbol must be a string, found {}", json_kind(&other)),
                )),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    fn fields(&self) -> Result<Option<Vec<(String, Self)>>, SchemaError> {
        let Some(fields) = self.required("record", "fields")? else {
            return Ok(None);
        };
        let Value::Array(fields) = fields.0 else {
            return Err(SchemaError::malformed("record", "'fields' must be an array"));
        };
        fields
            .into_iter()
            .enumerate()
            .map(|(index, field)| {
                let Value::Object(mut field) = field else {
                    return Err(SchemaError::malformed(
                        "record",
                        format!("field {index} must be an object"),
                    ));
                };
                let name = match field.remove("name") {
                    Some(Value::String(name)) => name,
                    _ => {
                        return Err(SchemaError::malformed(
                            "record",
                            format!("field {index} has no string 'name'"),
                        ));
                    }
                };
                let ty = field.remove("type").ok_or_else(|| {
                    SchemaError::malformed("record", format!("field '{name}' has no 'type'"))
                })?;
                Ok((name, JsonType(ty)))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    fn record_name(&self) -> Option<String> {
        match self.resolved() {
            Value::Object(map) => map.get("name").and_then(Value::as_str).map(str::to_string),
            _ => None,
        }
    }
}
