//! Canonical, serializable schema types.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::{display::DisplayType, error::SchemaError};

/// Scalar types a schema field can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Bytes,
    Double,
    Float,
    Int,
    Long,
    String,
}

impl PrimitiveType {
    /// All primitives in selector order.
    pub const ALL: [PrimitiveType; 7] = [
        PrimitiveType::Boolean,
        PrimitiveType::Bytes,
        PrimitiveType::Double,
        PrimitiveType::Float,
        PrimitiveType::Int,
        PrimitiveType::Long,
        PrimitiveType::String,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Bytes => "bytes",
            PrimitiveType::Double => "double",
            PrimitiveType::Float => "float",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::String => "string",
        }
    }
}

impl FromStr for PrimitiveType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveType::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownType(s.to_string()))
    }
}

impl Display for PrimitiveType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical schema type handed to downstream consumers.
///
/// Values are recomputed from the editor tree on every edit; nothing mutates a
/// descriptor in place once it has been emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    Primitive(PrimitiveType),
    Array(Box<TypeDescriptor>),
    Map {
        keys: Box<TypeDescriptor>,
        values: Box<TypeDescriptor>,
    },
    Union(Vec<TypeDescriptor>),
    Enum(Vec<String>),
    Record {
        /// Generated identity used for bookkeeping; not a field name.
        name: String,
        fields: Vec<FieldDescriptor>,
    },
}

impl TypeDescriptor {
    pub fn array(items: impl Into<TypeDescriptor>) -> Self {
        TypeDescriptor::Array(Box::new(items.into()))
    }

    pub fn map(keys: impl Into<TypeDescriptor>, values: impl Into<TypeDescriptor>) -> Self {
        TypeDescriptor::Map {
            keys: Box::new(keys.into()),
            values: Box::new(values.into()),
        }
    }

    pub fn record(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        TypeDescriptor::Record {
            name: name.into(),
            fields,
        }
    }

    pub fn enumeration<I, T>(symbols: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        TypeDescriptor::Enum(symbols.into_iter().map(Into::into).collect())
    }

    pub fn display_type(&self) -> DisplayType {
        match self {
            TypeDescriptor::Primitive(p) => DisplayType::from(*p),
            TypeDescriptor::Array(_) => DisplayType::Array,
            TypeDescriptor::Map { .. } => DisplayType::Map,
            TypeDescriptor::Union(_) => DisplayType::Union,
            TypeDescriptor::Enum(_) => DisplayType::Enum,
            TypeDescriptor::Record { .. } => DisplayType::Record,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.display_type().as_str()
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeDescriptor::Primitive(_))
    }
}

impl From<PrimitiveType> for TypeDescriptor {
    fn from(value: PrimitiveType) -> Self {
        TypeDescriptor::Primitive(value)
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = super::format_type_descriptor(self)?;
        f.write_str(&text)
    }
}

/// One named field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: TypeDescriptor,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}
