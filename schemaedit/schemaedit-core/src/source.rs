//! Accessor contract for external type descriptors.

use std::fmt::Debug;

use tracing::warn;

use crate::{
    descriptor::{FieldDescriptor, PrimitiveType, TypeDescriptor},
    display::DisplayType,
    error::SchemaError,
};

/// A raw type descriptor the parser can query.
///
/// A source is either a bare tag (a primitive name or a composite kind with no
/// further detail) or a structured node. Child accessors return `Ok(None)` for
/// bare tags, in which case the editor substitutes its defaults, and
/// `Err(SchemaError::MalformedNode)` when a structured node lacks the accessor
/// its tag requires.
pub trait TypeSource: Clone + Debug {
    /// Discriminant tag of this node (`"int"`, `"array"`, `"record"`, ...).
    fn type_tag(&self) -> Result<String, SchemaError>;

    fn items_type(&self) -> Result<Option<Self>, SchemaError>;

    fn keys_type(&self) -> Result<Option<Self>, SchemaError>;

    fn values_type(&self) -> Result<Option<Self>, SchemaError>;

    fn member_types(&self) -> Result<Option<Vec<Self>>, SchemaError>;

    fn symbols(&self) -> Result<Option<Vec<String>>, SchemaError>;

    /// Record fields as `(name, type)` pairs in declaration order.
    fn fields(&self) -> Result<Option<Vec<(String, Self)>>, SchemaError>;

    /// Identity of a record node, when the source carries one.
    fn record_name(&self) -> Option<String> {
        None
    }
}

fn wrong_kind(expected: &str, actual: &TypeDescriptor) -> SchemaError {
    SchemaError::malformed(
        actual.type_name(),
        format!("expected a {expected} descriptor"),
    )
}

impl TypeSource for TypeDescriptor {
    fn type_tag(&self) -> Result<String, SchemaError> {
        Ok(self.type_name().to_string())
    }

    fn items_type(&self) -> Result<Option<Self>, SchemaError> {
        match self {
            TypeDescriptor::Array(items) => Ok(Some(items.as_ref().clone())),
            other => Err(wrong_kind("array", other)),
        }
    }

    fn keys_type(&self) -> Result<Option<Self>, SchemaError> {
        match self {
            TypeDescriptor::Map { keys, .. } => Ok(Some(keys.as_ref().clone())),
            other => Err(wrong_kind("map", other)),
        }
    }

    fn values_type(&self) -> Result<Option<Self>, SchemaError> {
        match self {
            TypeDescriptor::Map { values, .. } => Ok(Some(values.as_ref().clone())),
            other => Err(wrong_kind("map", other)),
        }
    }

    fn member_types(&self) -> Result<Option<Vec<Self>>, SchemaError> {
        match self {
            TypeDescriptor::Union(members) => Ok(Some(members.clone())),
            other => Err(wrong_kind("union", other)),
        }
    }

    fn symbols(&self) -> Result<Option<Vec<String>>, SchemaError> {
        match self {
            TypeDescriptor::Enum(symbols) => Ok(Some(symbols.clone())),
            other => Err(wrong_kind("enum", other)),
        }
    }

    fn fields(&self) -> Result<Option<Vec<(String, Self)>>, SchemaError> {
        match self {
            TypeDescriptor::Record { fields, .. } => Ok(Some(
                fields
                    .iter()
                    .map(|f| (f.name.clone(), f.ty.clone()))
                    .collect(),
            )),
            other => Err(wrong_kind("record", other)),
        }
    }

    fn record_name(&self) -> Option<String> {
        match self {
            TypeDescriptor::Record { name, .. } => Some(name.clone()),
            _ => None,
        }
    }
}

/// Eagerly convert a whole source tree into a [`TypeDescriptor`].
///
/// Unlike the lazy display parser this is strict: unknown tags are errors.
/// Bare composite tags expand to the same defaults the editors use, and a
/// record without an identity gets `record_name`.
pub fn to_descriptor<S: TypeSource>(
    source: &S,
    record_name: &str,
) -> Result<TypeDescriptor, SchemaError> {
    let tag = source.type_tag()?;
    let Some(display_type) = DisplayType::from_tag(&tag) else {
        warn!(tag = %tag, "unknown schema type");
        return Err(SchemaError::UnknownType(tag));
    };
    let string = || TypeDescriptor::Primitive(PrimitiveType::String);
    let child = |c: Option<S>| -> Result<TypeDescriptor, SchemaError> {
        c.map_or_else(|| Ok(string()), |c| to_descriptor(&c, record_name))
    };

    let descriptor = match display_type {
        DisplayType::Array => TypeDescriptor::array(child(source.items_type()?)?),
        DisplayType::Map => {
            TypeDescriptor::map(child(source.keys_type()?)?, child(source.values_type()?)?)
        }
        DisplayType::Union => match source.member_types()? {
            Some(members) => TypeDescriptor::Union(
                members
                    .iter()
                    .map(|m| to_descriptor(m, record_name))
                    .collect::<Result<_, _>>()?,
            ),
            None => TypeDescriptor::Union(vec![string()]),
        },
        DisplayType::Enum => {
            TypeDescriptor::Enum(source.symbols()?.unwrap_or_else(|| vec![String::new()]))
        }
        DisplayType::Record => {
            let fields = match source.fields()? {
                Some(fields) => fields
                    .iter()
                    .map(|(name, ty)| Ok(FieldDescriptor::new(name, to_descriptor(ty, record_name)?)))
                    .collect::<Result<_, SchemaError>>()?,
                None => vec![FieldDescriptor::new("", string())],
            };
            TypeDescriptor::record(
                source
                    .record_name()
                    .unwrap_or_else(|| record_name.to_string()),
                fields,
            )
        }
        primitive => match primitive.primitive() {
            Some(p) => TypeDescriptor::Primitive(p),
            None => unreachable!("{primitive} is a composite tag"),
        },
    };
    Ok(descriptor)
}
