//! Schemas an editor starts from when the caller supplies none.

use schemaedit_core::{FieldDescriptor, PrimitiveType, TypeDescriptor};

pub const DEFAULT_SCHEMA_NAME: &str = "etlSchemabody";

/// A record with a single unnamed `string` field.
pub fn default_schema() -> TypeDescriptor {
    TypeDescriptor::record(
        DEFAULT_SCHEMA_NAME,
        vec![FieldDescriptor::new("", PrimitiveType::String)],
    )
}

/// Sample schema touching every kind of row except enum and nested record.
pub fn demo_schema() -> TypeDescriptor {
    let int_array = || TypeDescriptor::array(PrimitiveType::Int);
    TypeDescriptor::record(
        DEFAULT_SCHEMA_NAME,
        vec![
            FieldDescriptor::new("Field1", PrimitiveType::String),
            FieldDescriptor::new("Field2", PrimitiveType::Int),
            FieldDescriptor::new("Field3", PrimitiveType::Float),
            FieldDescriptor::new("Field4", int_array()),
            FieldDescriptor::new("Field5", int_array()),
            FieldDescriptor::new("Field6", int_array()),
            FieldDescriptor::new(
                "Field7",
                TypeDescriptor::map(PrimitiveType::String, PrimitiveType::String),
            ),
            FieldDescriptor::new(
                "Field8",
                TypeDescriptor::Union(vec![
                    PrimitiveType::String.into(),
                    PrimitiveType::Long.into(),
                    PrimitiveType::Boolean.into(),
                ]),
            ),
        ],
    )
}
