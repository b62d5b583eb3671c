//! Display tags shown in type selectors.

use std::{
    fmt::{self, Display, Formatter},
    sync::atomic::{AtomicU64, Ordering},
};

use crate::descriptor::PrimitiveType;

/// Tag of a display node: one of the seven primitives or a composite kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayType {
    Boolean,
    Bytes,
    Double,
    Float,
    Int,
    Long,
    String,
    Array,
    Map,
    Union,
    Enum,
    Record,
}

/// Options offered by every type selector, in display order.
pub const SCHEMA_TYPES: [DisplayType; 12] = [
    DisplayType::Boolean,
    DisplayType::Bytes,
    DisplayType::Double,
    DisplayType::Float,
    DisplayType::Int,
    DisplayType::Long,
    DisplayType::String,
    DisplayType::Array,
    DisplayType::Map,
    DisplayType::Union,
    DisplayType::Enum,
    DisplayType::Record,
];

impl DisplayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayType::Boolean => "boolean",
            DisplayType::Bytes => "bytes",
            DisplayType::Double => "double",
            DisplayType::Float => "float",
            DisplayType::Int => "int",
            DisplayType::Long => "long",
            DisplayType::String => "string",
            DisplayType::Array => "array",
            DisplayType::Map => "map",
            DisplayType::Union => "union",
            DisplayType::Enum => "enum",
            DisplayType::Record => "record",
        }
    }

    /// Look up a tag by name. Unrecognized tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        SCHEMA_TYPES.into_iter().find(|t| t.as_str() == tag)
    }

    pub fn is_complex(&self) -> bool {
        matches!(
            self,
            DisplayType::Array
                | DisplayType::Map
                | DisplayType::Union
                | DisplayType::Enum
                | DisplayType::Record
        )
    }

    pub fn primitive(&self) -> Option<PrimitiveType> {
        match self {
            DisplayType::Boolean => Some(PrimitiveType::Boolean),
            DisplayType::Bytes => Some(PrimitiveType::Bytes),
            DisplayType::Double => Some(PrimitiveType::Double),
            DisplayType::Float => Some(PrimitiveType::Float),
            DisplayType::Int => Some(PrimitiveType::Int),
            DisplayType::Long => Some(PrimitiveType::Long),
            DisplayType::String => Some(PrimitiveType::String),
            _ => None,
        }
    }
}

impl From<PrimitiveType> for DisplayType {
    fn from(value: PrimitiveType) -> Self {
        match value {
            PrimitiveType::Boolean => DisplayType::Boolean,
            PrimitiveType::Bytes => DisplayType::Bytes,
            PrimitiveType::Double => DisplayType::Double,
            PrimitiveType::Float => DisplayType::Float,
            PrimitiveType::Int => DisplayType::Int,
            PrimitiveType::Long => DisplayType::Long,
            PrimitiveType::String => DisplayType::String,
        }
    }
}

impl Display for DisplayType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a tag needs a nested editor.
///
/// Unknown tags classify as primitive so no nested editor is rendered for them.
pub fn check_complex_type(tag: &str) -> bool {
    DisplayType::from_tag(tag).is_some_and(|t| t.is_complex())
}

static NEXT_NODE_KEY: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a display node, assigned once when the node is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(u64);

impl NodeKey {
    pub fn next() -> Self {
        Self(NEXT_NODE_KEY.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl Display for NodeKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}
