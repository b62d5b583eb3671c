//! Type slots and the paths that address them.

use std::{fmt, str::FromStr};

use schemaedit_core::{DisplayType, PrimitiveType, SchemaError, TypeDescriptor};

use crate::{arena::NodeId, error::EditError};

/// A position inside an editor that holds a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotId {
    /// The single slot of a primitive editor.
    Type,
    Items,
    Keys,
    Values,
    Member(usize),
    Field(usize),
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotId::Type => f.write_str("type"),
            SlotId::Items => f.write_str("items"),
            SlotId::Keys => f.write_str("keys"),
            SlotId::Values => f.write_str("values"),
            SlotId::Member(i) => write!(f, "member[{i}]"),
            SlotId::Field(i) => write!(f, "field[{i}]"),
        }
    }
}

impl FromStr for SlotId {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || EditError::BadPath(s.to_string());
        let indexed = |prefix: &str| -> Option<Result<usize, EditError>> {
            let rest = s.strip_prefix(prefix)?.strip_prefix('[')?.strip_suffix(']')?;
            Some(rest.parse().map_err(|_| bad()))
        };
        match s {
            "type" => Ok(SlotId::Type),
            "items" => Ok(SlotId::Items),
            "keys" => Ok(SlotId::Keys),
            "values" => Ok(SlotId::Values),
            _ => {
                if let Some(index) = indexed("field") {
                    Ok(SlotId::Field(index?))
                } else if let Some(index) = indexed("member") {
                    Ok(SlotId::Member(index?))
                } else {
                    Err(bad())
                }
            }
        }
    }
}

/// Slots from the root editor down to a target, e.g. `field[1]/items/keys`.
///
/// The empty path (`""` or `"."`) is the root editor itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotPath(Vec<SlotId>);

impl SlotPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> &[SlotId] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn child(&self, slot: SlotId) -> Self {
        let mut slots = self.0.clone();
        slots.push(slot);
        Self(slots)
    }

    /// Split into the path of the owning editor and the last slot.
    pub fn split_last(&self) -> Option<(SlotPath, SlotId)> {
        let (last, parent) = self.0.split_last()?;
        Some((SlotPath(parent.to_vec()), *last))
    }
}

impl FromStr for SlotPath {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "." {
            return Ok(Self::root());
        }
        s.split('/')
            .map(str::parse)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for SlotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str(".");
        }
        for (i, slot) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{slot}")?;
        }
        Ok(())
    }
}

/// Current state of one type slot.
///
/// `value` is the slot's last resolved descriptor: the scalar for primitive
/// tags, the nested editor's latest emission for complex tags, and `None`
/// while the slot is unresolved (unknown tag, malformed source, or a nested
/// editor that cannot reduce yet).
#[derive(Debug, Clone)]
pub(crate) struct TypeSlot {
    pub(crate) tag: String,
    pub(crate) display_type: Option<DisplayType>,
    pub(crate) value: Option<TypeDescriptor>,
    pub(crate) child: Option<NodeId>,
    pub(crate) fault: Option<SchemaError>,
}

impl TypeSlot {
    pub(crate) fn primitive(p: PrimitiveType) -> Self {
        Self {
            tag: p.as_str().to_string(),
            display_type: Some(p.into()),
            value: Some(p.into()),
            child: None,
            fault: None,
        }
    }

    pub(crate) fn nested(
        display_type: DisplayType,
        child: NodeId,
        value: Option<TypeDescriptor>,
    ) -> Self {
        Self {
            tag: display_type.as_str().to_string(),
            display_type: Some(display_type),
            value,
            child: Some(child),
            fault: None,
        }
    }

    pub(crate) fn unknown(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            display_type: None,
            value: None,
            child: None,
            fault: None,
        }
    }

    pub(crate) fn faulted(tag: impl Into<String>, fault: SchemaError) -> Self {
        Self {
            fault: Some(fault),
            ..Self::unknown(tag)
        }
    }
}
