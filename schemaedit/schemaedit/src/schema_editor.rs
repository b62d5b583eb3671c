//! Top-level schema editor: a record editor tree with a change callback.

use schemaedit_core::{DisplayType, TypeDescriptor, TypeSource, parse_type};
use schemaedit_editor::{
    EditorConfig, EditorTree, IdentityPolicy, NodeId, OnChange, RowView, render_tree,
};
use schemaedit_json::{JsonSchemaError, JsonType};
use serde_json::Value;
use tracing::debug;

use crate::{defaults::default_schema, error::SchemaEditorError, ops::EditOp};

/// Edits one record schema and reports every change through a callback.
///
/// The initial descriptor is emitted as soon as the editor is built.
#[derive(Debug)]
pub struct SchemaEditor {
    tree: EditorTree,
}

/// Builder for configuring [`SchemaEditor`].
pub struct SchemaEditorBuilder {
    config: EditorConfig,
    on_change: Option<OnChange>,
}

impl SchemaEditor {
    /// Create a builder for [`SchemaEditor`].
    pub fn builder() -> SchemaEditorBuilder {
        SchemaEditorBuilder {
            config: EditorConfig::default(),
            on_change: None,
        }
    }

    pub fn tree(&self) -> &EditorTree {
        &self.tree
    }

    /// Direct access for edits by node handle.
    pub fn tree_mut(&mut self) -> &mut EditorTree {
        &mut self.tree
    }

    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    pub fn is_read_only(&self) -> bool {
        self.tree.is_read_only()
    }

    /// The last descriptor handed to the change callback.
    pub fn last_emitted(&self) -> Option<&TypeDescriptor> {
        self.tree.last_emitted()
    }

    /// The schema as it stands now. `None` while any slot is unresolved.
    pub fn current(&mut self) -> Option<TypeDescriptor> {
        self.tree.current()
    }

    pub fn view(&self, node: NodeId) -> Result<RowView, SchemaEditorError> {
        Ok(self.tree.view(node)?)
    }

    /// Text rendering of the whole editor.
    pub fn render(&self) -> Result<String, SchemaEditorError> {
        Ok(render_tree(&self.tree)?)
    }

    pub fn apply(&mut self, op: &EditOp) -> Result<(), SchemaEditorError> {
        debug!(op = %op, "applying edit");
        op.apply(&mut self.tree)
    }

    pub fn apply_all<'a>(
        &mut self,
        ops: impl IntoIterator<Item = &'a EditOp>,
    ) -> Result<(), SchemaEditorError> {
        ops.into_iter().try_for_each(|op| self.apply(op))
    }
}

impl SchemaEditorBuilder {
    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_identity_policy(mut self, identity: IdentityPolicy) -> Self {
        self.config = self.config.with_identity_policy(identity);
        self
    }

    /// Prefix of generated record identities (default: `record`).
    pub fn with_record_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config = self.config.with_record_prefix(prefix);
        self
    }

    /// Receive every emitted descriptor. Without a callback the editor is
    /// read-only.
    pub fn on_change(mut self, on_change: impl FnMut(&TypeDescriptor) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Build from any [`TypeSource`] whose root is a record.
    pub fn build<S: TypeSource>(self, schema: S) -> Result<SchemaEditor, SchemaEditorError> {
        let root = parse_type(schema)?;
        if root.display_type != Some(DisplayType::Record) {
            return Err(SchemaEditorError::NotARecord { tag: root.tag });
        }
        let mut tree = EditorTree::build(root, self.config, self.on_change)?;
        tree.mount();
        Ok(SchemaEditor { tree })
    }

    /// Build from the default single-field schema.
    pub fn build_default(self) -> Result<SchemaEditor, SchemaEditorError> {
        self.build(default_schema())
    }

    pub fn build_from_descriptor(
        self,
        schema: &TypeDescriptor,
    ) -> Result<SchemaEditor, SchemaEditorError> {
        self.build(schema.clone())
    }

    pub fn build_from_json(self, schema: Value) -> Result<SchemaEditor, SchemaEditorError> {
        self.build(JsonType::new(schema))
    }

    pub fn build_from_json_str(self, text: &str) -> Result<SchemaEditor, SchemaEditorError> {
        let value: Value = serde_json::from_str(text).map_err(JsonSchemaError::from)?;
        self.build_from_json(value)
    }
}
