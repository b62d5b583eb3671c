//! JSON wire format for `schemaedit`.
//!
//! Schemas travel as Avro-style JSON: primitives are bare strings, unions are
//! arrays, and composites are objects with a `type` tag. This crate provides
//! [`JsonType`], a [`TypeSource`](schemaedit_core::TypeSource) over
//! `serde_json::Value`, and the conversions between JSON and
//! [`TypeDescriptor`](schemaedit_core::TypeDescriptor).

mod convert;
mod error;
mod source;

pub use convert::{descriptor_from_json, descriptor_from_str, descriptor_to_json, descriptor_to_string};
pub use error::JsonSchemaError;
pub use source::JsonType;
