//! Editor-independent schema types for `schemaedit`.
//!
//! This crate provides the canonical [`TypeDescriptor`], the display tags
//! offered by every type selector ([`SCHEMA_TYPES`]), the [`TypeSource`]
//! accessor contract for external descriptors, and the type parser that turns
//! one source node into a [`DisplayNode`].

mod descriptor;
mod display;
mod error;
mod format;
mod parser;
mod source;
mod tree;

pub use descriptor::{FieldDescriptor, PrimitiveType, TypeDescriptor};
pub use display::{DisplayType, NodeKey, SCHEMA_TYPES, check_complex_type};
pub use error::SchemaError;
pub use format::format_type_descriptor;
pub use parser::{DisplayNode, parse_type};
pub use source::{TypeSource, to_descriptor};
pub use tree::{build_display_fields, default_fields, parse_schema};
