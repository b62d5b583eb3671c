//! Per-tag row editors.

use schemaedit_core::{DisplayType, FieldDescriptor, NodeKey, TypeDescriptor};

use crate::{
    arena::NodeId,
    config::{IdentityPolicy, Identities},
    slot::{SlotId, TypeSlot},
};

/// The six editor kinds a dispatcher can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    Primitive,
    Array,
    Map,
    Union,
    Enum,
    Record,
}

impl RowKind {
    pub fn for_display_type(display_type: DisplayType) -> Self {
        match display_type {
            DisplayType::Boolean
            | DisplayType::Bytes
            | DisplayType::Double
            | DisplayType::Float
            | DisplayType::Int
            | DisplayType::Long
            | DisplayType::String => RowKind::Primitive,
            DisplayType::Array => RowKind::Array,
            DisplayType::Map => RowKind::Map,
            DisplayType::Union => RowKind::Union,
            DisplayType::Enum => RowKind::Enum,
            DisplayType::Record => RowKind::Record,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RowKind::Primitive => "primitive",
            RowKind::Array => "array",
            RowKind::Map => "map",
            RowKind::Union => "union",
            RowKind::Enum => "enum",
            RowKind::Record => "record",
        }
    }
}

#[derive(Debug)]
pub(crate) struct PrimitiveRow {
    pub(crate) name: Option<String>,
    pub(crate) slot: TypeSlot,
}

#[derive(Debug)]
pub(crate) struct ArrayRow {
    pub(crate) items: TypeSlot,
}

#[derive(Debug)]
pub(crate) struct MapRow {
    pub(crate) keys: TypeSlot,
    pub(crate) values: TypeSlot,
}

#[derive(Debug)]
pub(crate) struct UnionRow {
    pub(crate) members: Vec<TypeSlot>,
}

#[derive(Debug)]
pub(crate) struct EnumRow {
    pub(crate) symbols: Vec<String>,
}

#[derive(Debug)]
pub(crate) struct RecordField {
    pub(crate) id: NodeKey,
    pub(crate) name: String,
    pub(crate) slot: TypeSlot,
}

#[derive(Debug)]
pub(crate) struct RecordRow {
    pub(crate) identity: String,
    pub(crate) fields: Vec<RecordField>,
}

impl RecordRow {
    pub(crate) fn has_field_named(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }
}

#[derive(Debug)]
pub(crate) enum SchemaRow {
    Primitive(PrimitiveRow),
    Array(ArrayRow),
    Map(MapRow),
    Union(UnionRow),
    Enum(EnumRow),
    Record(RecordRow),
}

impl SchemaRow {
    pub(crate) fn kind(&self) -> RowKind {
        match self {
            SchemaRow::Primitive(_) => RowKind::Primitive,
            SchemaRow::Array(_) => RowKind::Array,
            SchemaRow::Map(_) => RowKind::Map,
            SchemaRow::Union(_) => RowKind::Union,
            SchemaRow::Enum(_) => RowKind::Enum,
            SchemaRow::Record(_) => RowKind::Record,
        }
    }

    pub(crate) fn slot(&self, slot: SlotId) -> Option<&TypeSlot> {
        match (self, slot) {
            (SchemaRow::Primitive(row), SlotId::Type) => Some(&row.slot),
            (SchemaRow::Array(row), SlotId::Items) => Some(&row.items),
            (SchemaRow::Map(row), SlotId::Keys) => Some(&row.keys),
            (SchemaRow::Map(row), SlotId::Values) => Some(&row.values),
            (SchemaRow::Union(row), SlotId::Member(i)) => row.members.get(i),
            (SchemaRow::Record(row), SlotId::Field(i)) => row.fields.get(i).map(|f| &f.slot),
            _ => None,
        }
    }

    pub(crate) fn slot_mut(&mut self, slot: SlotId) -> Option<&mut TypeSlot> {
        match (self, slot) {
            (SchemaRow::Primitive(row), SlotId::Type) => Some(&mut row.slot),
            (SchemaRow::Array(row), SlotId::Items) => Some(&mut row.items),
            (SchemaRow::Map(row), SlotId::Keys) => Some(&mut row.keys),
            (SchemaRow::Map(row), SlotId::Values) => Some(&mut row.values),
            (SchemaRow::Union(row), SlotId::Member(i)) => row.members.get_mut(i),
            (SchemaRow::Record(row), SlotId::Field(i)) => {
                row.fields.get_mut(i).map(|f| &mut f.slot)
            }
            _ => None,
        }
    }

    /// Every slot with its id, in display order.
    pub(crate) fn slots(&self) -> Vec<(SlotId, &TypeSlot)> {
        match self {
            SchemaRow::Primitive(row) => vec![(SlotId::Type, &row.slot)],
            SchemaRow::Array(row) => vec![(SlotId::Items, &row.items)],
            SchemaRow::Map(row) => vec![(SlotId::Keys, &row.keys), (SlotId::Values, &row.values)],
            SchemaRow::Union(row) => row
                .members
                .iter()
                .enumerate()
                .map(|(i, m)| (SlotId::Member(i), m))
                .collect(),
            SchemaRow::Enum(_) => Vec::new(),
            SchemaRow::Record(row) => row
                .fields
                .iter()
                .enumerate()
                .map(|(i, f)| (SlotId::Field(i), &f.slot))
                .collect(),
        }
    }

    /// Nested editors owned by this row, keyed by the slot holding them.
    pub(crate) fn children(&self) -> Vec<(SlotId, NodeId)> {
        self.slots()
            .into_iter()
            .filter_map(|(id, slot)| slot.child.map(|child| (id, child)))
            .collect()
    }

    /// Reduce the row to its canonical descriptor from the current state of
    /// every slot. `None` while any slot is unresolved.
    pub(crate) fn reduce(
        &self,
        policy: IdentityPolicy,
        identities: &mut Identities,
    ) -> Option<TypeDescriptor> {
        match self {
            SchemaRow::Primitive(row) => row.slot.value.clone(),
            SchemaRow::Array(row) => row.items.value.clone().map(TypeDescriptor::array),
            SchemaRow::Map(row) => Some(TypeDescriptor::map(
                row.keys.value.clone()?,
                row.values.value.clone()?,
            )),
            SchemaRow::Union(row) => row
                .members
                .iter()
                .map(|m| m.value.clone())
                .collect::<Option<Vec<_>>>()
                .map(TypeDescriptor::Union),
            SchemaRow::Enum(row) => Some(TypeDescriptor::Enum(row.symbols.clone())),
            SchemaRow::Record(row) => {
                let fields = row
                    .fields
                    .iter()
                    .map(|f| Some(FieldDescriptor::new(f.name.clone(), f.slot.value.clone()?)))
                    .collect::<Option<Vec<_>>>()?;
                let name = match policy {
                    IdentityPolicy::Preserve => row.identity.clone(),
                    IdentityPolicy::Regenerate => identities.generate(|id| row.has_field_named(id)),
                };
                Some(TypeDescriptor::record(name, fields))
            }
        }
    }
}
