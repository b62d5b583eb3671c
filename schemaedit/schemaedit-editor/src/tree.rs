//! The editor tree: row editors in an arena, edits, and upward propagation.

use std::fmt;

use schemaedit_core::{DisplayNode, NodeKey, PrimitiveType, SchemaError, TypeDescriptor, TypeSource};
use tracing::{debug, trace};

use crate::{
    arena::{Arena, NodeId},
    config::{EditorConfig, Identities},
    error::EditError,
    row::{RecordField, RowKind, SchemaRow},
    slot::{SlotId, SlotPath, TypeSlot},
};

/// Receives every descriptor the root editor emits.
pub type OnChange = Box<dyn FnMut(&TypeDescriptor)>;

/// Notification from a nested editor to the editor owning its slot.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChildChange {
    pub(crate) slot: SlotId,
    /// The child's new descriptor; `None` while the child is unresolved.
    pub(crate) value: Option<TypeDescriptor>,
}

#[derive(Debug)]
pub(crate) struct EditorNode {
    pub(crate) parent: Option<(NodeId, SlotId)>,
    pub(crate) row: SchemaRow,
}

/// A tree of row editors rooted at one editor.
///
/// Build the tree, then call [`mount`](Self::mount) to emit the initial
/// descriptor. Edits mount the tree first if that has not happened yet, so the
/// initial emission always precedes the first edit's emission. A tree built
/// without a change callback is read-only.
pub struct EditorTree {
    pub(crate) arena: Arena<EditorNode>,
    pub(crate) root: NodeId,
    pub(crate) config: EditorConfig,
    pub(crate) identities: Identities,
    on_change: Option<OnChange>,
    mounted: bool,
    last_emitted: Option<TypeDescriptor>,
}

impl fmt::Debug for EditorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorTree")
            .field("root", &self.root)
            .field("config", &self.config)
            .field("editors", &self.arena.len())
            .field("read_only", &self.is_read_only())
            .field("mounted", &self.mounted)
            .finish()
    }
}

impl EditorTree {
    /// Build the editor for `root` and everything below it.
    ///
    /// Fails when the root itself is malformed or has an unknown tag; failures
    /// further down stay in the slot where they occur.
    pub fn build<S: TypeSource>(
        root: DisplayNode<S>,
        config: EditorConfig,
        on_change: Option<OnChange>,
    ) -> Result<Self, SchemaError> {
        let mut tree = Self {
            arena: Arena::default(),
            root: NodeId::DANGLING,
            identities: Identities::new(config.record_prefix.clone()),
            config,
            on_change,
            mounted: false,
            last_emitted: None,
        };
        tree.root = tree.dispatch(root)?;
        Ok(tree)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn is_read_only(&self) -> bool {
        self.on_change.is_none()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_live(&self, node: NodeId) -> bool {
        self.arena.is_live(node)
    }

    /// Number of live editors.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    /// The last descriptor handed to the change callback.
    pub fn last_emitted(&self) -> Option<&TypeDescriptor> {
        self.last_emitted.as_ref()
    }

    /// Reduce the whole tree now. `None` while any slot is unresolved.
    pub fn current(&mut self) -> Option<TypeDescriptor> {
        self.reduce(self.root)
    }

    pub fn kind(&self, node: NodeId) -> Result<RowKind, EditError> {
        Ok(self.node(node)?.row.kind())
    }

    /// Owning editor and slot of `node`; `None` for the root.
    pub fn parent(&self, node: NodeId) -> Result<Option<(NodeId, SlotId)>, EditError> {
        Ok(self.node(node)?.parent)
    }

    /// Nested editor held by `slot` of `node`.
    pub fn nested(&self, node: NodeId, slot: SlotId) -> Result<NodeId, EditError> {
        self.slot(node, slot)?
            .child
            .ok_or(EditError::NoNestedEditor(slot))
    }

    /// Emit the initial descriptor. Only the first call has any effect.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        let value = self.reduce(self.root);
        self.emit(value);
    }

    /// Editor and slot addressed by `path`, walking nested editors from the
    /// root.
    pub fn resolve_slot(&self, path: &SlotPath) -> Result<(NodeId, SlotId), EditError> {
        let Some((owner, slot)) = path.split_last() else {
            return Err(EditError::BadPath(path.to_string()));
        };
        let node = self.resolve_node(&owner)?;
        self.slot(node, slot)?;
        Ok((node, slot))
    }

    /// Editor addressed by `path`: the root for the empty path, otherwise the
    /// nested editor of the last slot.
    pub fn resolve_node(&self, path: &SlotPath) -> Result<NodeId, EditError> {
        path.slots()
            .iter()
            .try_fold(self.root, |node, slot| self.nested(node, *slot))
    }

    /// Position of the record field with stable id `key`.
    pub fn field_index(&self, node: NodeId, key: NodeKey) -> Result<Option<usize>, EditError> {
        let SchemaRow::Record(row) = &self.node(node)?.row else {
            return Err(self.wrong_kind(node, RowKind::Record));
        };
        Ok(row.fields.iter().position(|f| f.id == key))
    }

    /// Select a new tag for a slot.
    ///
    /// Any nested editor the slot held is disposed; a complex tag gets a fresh
    /// nested editor with default children. Selecting the tag the slot
    /// already shows is a no-op.
    pub fn select_type(&mut self, node: NodeId, slot: SlotId, tag: &str) -> Result<(), EditError> {
        self.begin_edit(node)?;
        let current = self.slot(node, slot)?;
        if current.tag == tag && current.fault.is_none() && current.display_type.is_some() {
            trace!(node = %node, slot = %slot, tag, "tag unchanged");
            return Ok(());
        }
        if let Some(child) = current.child {
            self.dispose(child);
        }

        let mut replacement = self.mount_tag(tag);
        if let Some(child) = replacement.child {
            self.set_parent(child, node, slot);
        }
        debug!(node = %node, slot = %slot, tag, "type selected");
        self.replace_slot(node, slot, &mut replacement)?;
        self.propagate(node);
        Ok(())
    }

    pub fn rename_field(&mut self, node: NodeId, index: usize, name: &str) -> Result<(), EditError> {
        self.begin_edit(node)?;
        let fields = self.record_fields_mut(node)?;
        let len = fields.len();
        let field = fields.get_mut(index).ok_or(EditError::IndexOutOfRange {
            what: "fields",
            index,
            len,
        })?;
        field.name = name.to_string();
        self.keep_identity_distinct(node);
        self.propagate(node);
        Ok(())
    }

    /// Insert a default field (`""`, `string`) at `index`, or append when
    /// `index` is `None`. Returns the new field's stable id.
    pub fn add_field(&mut self, node: NodeId, index: Option<usize>) -> Result<NodeKey, EditError> {
        self.begin_edit(node)?;
        let fields = self.record_fields_mut(node)?;
        let len = fields.len();
        let index = index.unwrap_or(len);
        if index > len {
            return Err(EditError::IndexOutOfRange {
                what: "fields",
                index,
                len,
            });
        }
        let id = NodeKey::next();
        fields.insert(
            index,
            RecordField {
                id,
                name: String::new(),
                slot: TypeSlot::primitive(PrimitiveType::String),
            },
        );
        self.relink_children(node);
        self.keep_identity_distinct(node);
        self.propagate(node);
        Ok(id)
    }

    /// Remove a field. Records may become empty.
    pub fn remove_field(&mut self, node: NodeId, index: usize) -> Result<(), EditError> {
        self.begin_edit(node)?;
        let fields = self.record_fields_mut(node)?;
        let len = fields.len();
        if index >= len {
            return Err(EditError::IndexOutOfRange {
                what: "fields",
                index,
                len,
            });
        }
        let removed = fields.remove(index);
        if let Some(child) = removed.slot.child {
            self.dispose(child);
        }
        self.relink_children(node);
        self.propagate(node);
        Ok(())
    }

    /// Append a `string` member.
    pub fn add_member(&mut self, node: NodeId) -> Result<(), EditError> {
        self.begin_edit(node)?;
        self.members_mut(node)?
            .push(TypeSlot::primitive(PrimitiveType::String));
        self.propagate(node);
        Ok(())
    }

    /// Remove a member. A union keeps at least one member.
    pub fn remove_member(&mut self, node: NodeId, index: usize) -> Result<(), EditError> {
        self.begin_edit(node)?;
        let members = self.members_mut(node)?;
        let len = members.len();
        if index >= len {
            return Err(EditError::IndexOutOfRange {
                what: "members",
                index,
                len,
            });
        }
        if len == 1 {
            return Err(EditError::WouldBeEmpty("union member"));
        }
        let removed = members.remove(index);
        if let Some(child) = removed.child {
            self.dispose(child);
        }
        self.relink_children(node);
        self.propagate(node);
        Ok(())
    }

    pub fn set_symbol(&mut self, node: NodeId, index: usize, text: &str) -> Result<(), EditError> {
        self.begin_edit(node)?;
        let symbols = self.symbols_mut(node)?;
        let len = symbols.len();
        let symbol = symbols.get_mut(index).ok_or(EditError::IndexOutOfRange {
            what: "symbols",
            index,
            len,
        })?;
        *symbol = text.to_string();
        self.propagate(node);
        Ok(())
    }

    /// Append an empty symbol.
    pub fn add_symbol(&mut self, node: NodeId) -> Result<(), EditError> {
        self.begin_edit(node)?;
        self.symbols_mut(node)?.push(String::new());
        self.propagate(node);
        Ok(())
    }

    /// Remove a symbol. An enum keeps at least one symbol.
    pub fn remove_symbol(&mut self, node: NodeId, index: usize) -> Result<(), EditError> {
        self.begin_edit(node)?;
        let symbols = self.symbols_mut(node)?;
        let len = symbols.len();
        if index >= len {
            return Err(EditError::IndexOutOfRange {
                what: "symbols",
                index,
                len,
            });
        }
        if len == 1 {
            return Err(EditError::WouldBeEmpty("enum symbol"));
        }
        symbols.remove(index);
        self.propagate(node);
        Ok(())
    }

    pub(crate) fn reduce(&mut self, node: NodeId) -> Option<TypeDescriptor> {
        let editor = self.arena.get(node)?;
        editor.row.reduce(self.config.identity, &mut self.identities)
    }

    /// Point every nested editor of `node` back at the slot holding it.
    /// Needed after slots shift position.
    pub(crate) fn relink_children(&mut self, node: NodeId) {
        let Some(editor) = self.arena.get(node) else {
            return;
        };
        for (slot, child) in editor.row.children() {
            self.set_parent(child, node, slot);
        }
    }

    pub(crate) fn node(&self, node: NodeId) -> Result<&EditorNode, EditError> {
        self.arena.get(node).ok_or(EditError::StaleNode(node))
    }

    pub(crate) fn slot(&self, node: NodeId, slot: SlotId) -> Result<&TypeSlot, EditError> {
        let editor = self.node(node)?;
        editor.row.slot(slot).ok_or(EditError::NoSuchSlot {
            kind: editor.row.kind().as_str(),
            slot,
        })
    }

    fn node_mut(&mut self, node: NodeId) -> Result<&mut EditorNode, EditError> {
        self.arena.get_mut(node).ok_or(EditError::StaleNode(node))
    }

    fn begin_edit(&mut self, node: NodeId) -> Result<(), EditError> {
        if self.is_read_only() {
            return Err(EditError::ReadOnly);
        }
        self.node(node)?;
        self.mount();
        Ok(())
    }

    fn wrong_kind(&self, node: NodeId, expected: RowKind) -> EditError {
        match self.arena.get(node) {
            Some(editor) => EditError::WrongKind {
                expected: expected.as_str(),
                actual: editor.row.kind().as_str(),
            },
            None => EditError::StaleNode(node),
        }
    }

    fn record_fields_mut(&mut self, node: NodeId) -> Result<&mut Vec<RecordField>, EditError> {
        if self.kind(node)? != RowKind::Record {
            return Err(self.wrong_kind(node, RowKind::Record));
        }
        match &mut self.node_mut(node)?.row {
            SchemaRow::Record(row) => Ok(&mut row.fields),
            _ => Err(EditError::StaleNode(node)),
        }
    }

    fn members_mut(&mut self, node: NodeId) -> Result<&mut Vec<TypeSlot>, EditError> {
        if self.kind(node)? != RowKind::Union {
            return Err(self.wrong_kind(node, RowKind::Union));
        }
        match &mut self.node_mut(node)?.row {
            SchemaRow::Union(row) => Ok(&mut row.members),
            _ => Err(EditError::StaleNode(node)),
        }
    }

    fn symbols_mut(&mut self, node: NodeId) -> Result<&mut Vec<String>, EditError> {
        if self.kind(node)? != RowKind::Enum {
            return Err(self.wrong_kind(node, RowKind::Enum));
        }
        match &mut self.node_mut(node)?.row {
            SchemaRow::Enum(row) => Ok(&mut row.symbols),
            _ => Err(EditError::StaleNode(node)),
        }
    }

    fn replace_slot(
        &mut self,
        node: NodeId,
        slot: SlotId,
        replacement: &mut TypeSlot,
    ) -> Result<(), EditError> {
        let editor = self.node_mut(node)?;
        let kind = editor.row.kind().as_str();
        let target = editor
            .row
            .slot_mut(slot)
            .ok_or(EditError::NoSuchSlot { kind, slot })?;
        std::mem::swap(target, replacement);
        Ok(())
    }

    /// Reissue a record's identity when one of its fields now carries it.
    fn keep_identity_distinct(&mut self, node: NodeId) {
        let Some(EditorNode {
            row: SchemaRow::Record(row),
            ..
        }) = self.arena.get_mut(node)
        else {
            return;
        };
        if !row.has_field_named(&row.identity) {
            return;
        }
        let identity = self.identities.generate(|id| row.has_field_named(id));
        self.identities.reserve(&identity);
        debug!(node = %node, old = %row.identity, new = %identity, "record identity reissued");
        row.identity = identity;
    }

    fn set_parent(&mut self, child: NodeId, node: NodeId, slot: SlotId) {
        if let Some(editor) = self.arena.get_mut(child) {
            editor.parent = Some((node, slot));
        }
    }

    /// Free `node` and every editor below it.
    fn dispose(&mut self, node: NodeId) {
        let mut pending = vec![node];
        let mut count = 0usize;
        while let Some(id) = pending.pop() {
            if let Some(editor) = self.arena.remove(id) {
                pending.extend(editor.row.children().into_iter().map(|(_, child)| child));
                count += 1;
            }
        }
        debug!(node = %node, editors = count, "disposed subtree");
    }

    /// Store a child's new value in its slot. Returns `false` when the target
    /// is gone.
    fn apply_change(&mut self, target: NodeId, change: ChildChange) -> bool {
        let Some(editor) = self.arena.get_mut(target) else {
            debug!(node = %target, slot = %change.slot, "change for disposed editor dropped");
            return false;
        };
        let Some(slot) = editor.row.slot_mut(change.slot) else {
            debug!(node = %target, slot = %change.slot, "change for missing slot dropped");
            return false;
        };
        trace!(node = %target, slot = %change.slot, resolved = change.value.is_some(), "child change");
        slot.value = change.value;
        true
    }

    /// Re-reduce `from` and each of its ancestors, emitting at the root.
    fn propagate(&mut self, from: NodeId) {
        let mut current = from;
        loop {
            let value = self.reduce(current);
            let Some(editor) = self.arena.get(current) else {
                return;
            };
            match editor.parent {
                Some((parent, slot)) => {
                    if !self.apply_change(parent, ChildChange { slot, value }) {
                        return;
                    }
                    current = parent;
                }
                None => {
                    if current == self.root {
                        self.emit(value);
                    }
                    return;
                }
            }
        }
    }

    fn emit(&mut self, value: Option<TypeDescriptor>) {
        let Some(value) = value else {
            debug!("schema has unresolved slots, emission withheld");
            return;
        };
        let Some(on_change) = self.on_change.as_mut() else {
            return;
        };
        debug!(root = value.type_name(), "emitting schema");
        on_change(&value);
        self.last_emitted = Some(value);
    }
}
