//! Dispatcher: build exactly one row editor for a display node.

use schemaedit_core::{DisplayNode, SchemaError, TypeDescriptor, TypeSource};
use tracing::{debug, warn};

use crate::{
    arena::NodeId,
    config::IdentityPolicy,
    row::{
        ArrayRow, EnumRow, MapRow, PrimitiveRow, RecordField, RecordRow, RowKind, SchemaRow,
        UnionRow,
    },
    slot::TypeSlot,
    tree::{EditorNode, EditorTree},
};

impl EditorTree {
    /// Build the editor for `node` and its nested editors.
    ///
    /// The node's children are read before anything is inserted, so a
    /// malformed node leaves no partial subtree behind.
    pub(crate) fn dispatch<S: TypeSource>(
        &mut self,
        mut node: DisplayNode<S>,
    ) -> Result<NodeId, SchemaError> {
        if let Some(fault) = node.fault.take() {
            return Err(fault);
        }
        let Some(display_type) = node.display_type else {
            warn!(tag = %node.tag, "no editor for schema type");
            return Err(SchemaError::UnknownType(node.tag));
        };

        let row = match RowKind::for_display_type(display_type) {
            RowKind::Primitive => match display_type.primitive() {
                Some(p) => SchemaRow::Primitive(PrimitiveRow {
                    name: node.name.clone(),
                    slot: TypeSlot::primitive(p),
                }),
                None => return Err(SchemaError::UnknownType(node.tag)),
            },
            RowKind::Array => {
                let items = node.items()?;
                SchemaRow::Array(ArrayRow {
                    items: self.mount_slot(items),
                })
            }
            RowKind::Map => {
                let (keys, values) = (node.keys()?, node.values()?);
                SchemaRow::Map(MapRow {
                    keys: self.mount_slot(keys),
                    values: self.mount_slot(values),
                })
            }
            RowKind::Union => {
                let members = node.members()?;
                SchemaRow::Union(UnionRow {
                    members: members.into_iter().map(|m| self.mount_slot(m)).collect(),
                })
            }
            RowKind::Enum => SchemaRow::Enum(EnumRow {
                symbols: node.symbols()?,
            }),
            RowKind::Record => {
                let fields = node.fields()?;
                // Nested records pick their identities first.
                let row = RecordRow {
                    identity: String::new(),
                    fields: fields
                        .into_iter()
                        .map(|field| RecordField {
                            id: field.id,
                            name: field.name.clone().unwrap_or_default(),
                            slot: self.mount_slot(field),
                        })
                        .collect(),
                };
                let kept = match self.config.identity {
                    IdentityPolicy::Preserve => node.record_name(),
                    IdentityPolicy::Regenerate => None,
                };
                let identity = match kept {
                    Some(name) if !self.identities.is_taken(&name) && !row.has_field_named(&name) => {
                        name
                    }
                    Some(name) => {
                        debug!(identity = %name, "record identity already in use, reissuing");
                        self.identities.generate(|id| row.has_field_named(id))
                    }
                    None => self.identities.generate(|id| row.has_field_named(id)),
                };
                self.identities.reserve(&identity);
                SchemaRow::Record(RecordRow { identity, ..row })
            }
        };

        let id = self.arena.insert(EditorNode { parent: None, row });
        self.relink_children(id);
        debug!(node = %id, kind = display_type.as_str(), "built editor");
        Ok(id)
    }

    /// Turn a child display node into a slot, building a nested editor for
    /// complex tags. Failures stay inside the slot.
    pub(crate) fn mount_slot<S: TypeSource>(&mut self, mut node: DisplayNode<S>) -> TypeSlot {
        if let Some(fault) = node.fault.take() {
            return TypeSlot::faulted(node.tag, fault);
        }
        let Some(display_type) = node.display_type else {
            return TypeSlot::unknown(node.tag);
        };
        if let Some(p) = display_type.primitive() {
            return TypeSlot::primitive(p);
        }
        let tag = node.tag.clone();
        match self.dispatch(node) {
            Ok(child) => {
                let value = self.reduce(child);
                TypeSlot::nested(display_type, child, value)
            }
            Err(err) => {
                warn!(tag = %tag, error = %err, "nested editor not built");
                TypeSlot::faulted(tag, err)
            }
        }
    }

    /// Slot for a freshly selected tag; composite tags get default children.
    pub(crate) fn mount_tag(&mut self, tag: &str) -> TypeSlot {
        self.mount_slot(DisplayNode::<TypeDescriptor>::from_tag(tag))
    }
}
