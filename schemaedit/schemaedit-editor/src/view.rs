//! Read-only views of the editor tree for a presentation layer.

use std::fmt::{Result, Write as _};

use schemaedit_core::{DisplayType, NodeKey, SCHEMA_TYPES};

use crate::{
    arena::NodeId,
    error::EditError,
    row::SchemaRow,
    slot::{SlotId, TypeSlot},
    tree::EditorTree,
};

/// Column labels of the rendered tree.
pub const HEADER: [&str; 3] = ["Name", "Type", "Null"];

/// One type selector.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotView {
    pub slot: SlotId,
    /// Tag currently shown, recognized or not.
    pub tag: String,
    pub display_type: Option<DisplayType>,
    /// Selectable tags; always [`SCHEMA_TYPES`].
    pub options: &'static [DisplayType],
    /// Nested editor shown under the selector for complex tags.
    pub nested: Option<NodeId>,
    pub nullable: bool,
    /// Why the slot renders nothing, when it was built from a malformed node.
    pub fault: Option<String>,
}

impl SlotView {
    fn new(slot: SlotId, state: &TypeSlot) -> Self {
        Self {
            slot,
            tag: state.tag.clone(),
            display_type: state.display_type,
            options: &SCHEMA_TYPES,
            nested: state.child,
            nullable: false,
            fault: state.fault.as_ref().map(ToString::to_string),
        }
    }

    /// Whether anything is rendered for this slot.
    pub fn is_renderable(&self) -> bool {
        self.display_type.is_some() && self.fault.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub id: NodeKey,
    pub name: String,
    pub ty: SlotView,
}

/// Everything a presentation layer needs to draw one editor.
#[derive(Debug, Clone, PartialEq)]
pub enum RowView {
    Primitive { name: Option<String>, ty: SlotView },
    Array { items: SlotView },
    Map { keys: SlotView, values: SlotView },
    Union { members: Vec<SlotView> },
    Enum { symbols: Vec<String> },
    Record { identity: String, fields: Vec<FieldView> },
}

impl EditorTree {
    pub fn view(&self, node: NodeId) -> std::result::Result<RowView, EditError> {
        let view = match &self.node(node)?.row {
            SchemaRow::Primitive(row) => RowView::Primitive {
                name: row.name.clone(),
                ty: SlotView::new(SlotId::Type, &row.slot),
            },
            SchemaRow::Array(row) => RowView::Array {
                items: SlotView::new(SlotId::Items, &row.items),
            },
            SchemaRow::Map(row) => RowView::Map {
                keys: SlotView::new(SlotId::Keys, &row.keys),
                values: SlotView::new(SlotId::Values, &row.values),
            },
            SchemaRow::Union(row) => RowView::Union {
                members: row
                    .members
                    .iter()
                    .enumerate()
                    .map(|(i, m)| SlotView::new(SlotId::Member(i), m))
                    .collect(),
            },
            SchemaRow::Enum(row) => RowView::Enum {
                symbols: row.symbols.clone(),
            },
            SchemaRow::Record(row) => RowView::Record {
                identity: row.identity.clone(),
                fields: row
                    .fields
                    .iter()
                    .enumerate()
                    .map(|(i, f)| FieldView {
                        id: f.id,
                        name: f.name.clone(),
                        ty: SlotView::new(SlotId::Field(i), &f.slot),
                    })
                    .collect(),
            },
        };
        Ok(view)
    }
}

/// Render the whole tree as indented text under a `Name Type Null` header.
///
/// Unrenderable slots show their raw tag in angle brackets and nothing below.
pub fn render_tree(tree: &EditorTree) -> std::result::Result<String, EditError> {
    let mut out = String::new();
    writeln!(out, "{:<24} {:<10} {}", HEADER[0], HEADER[1], HEADER[2])?;
    render_row(tree, tree.root(), 0, &mut out)?;
    Ok(out)
}

fn render_row(
    tree: &EditorTree,
    node: NodeId,
    indent: usize,
    out: &mut String,
) -> std::result::Result<(), EditError> {
    match tree.view(node)? {
        RowView::Primitive { name, ty } => {
            render_slot(tree, name.as_deref().unwrap_or("-"), &ty, indent, out)?
        }
        RowView::Array { items } => render_slot(tree, "items", &items, indent, out)?,
        RowView::Map { keys, values } => {
            render_slot(tree, "keys", &keys, indent, out)?;
            render_slot(tree, "values", &values, indent, out)?;
        }
        RowView::Union { members } => {
            for (i, member) in members.iter().enumerate() {
                render_slot(tree, &format!("[{i}]"), member, indent, out)?;
            }
        }
        RowView::Enum { symbols } => {
            for (i, symbol) in symbols.iter().enumerate() {
                line(out, indent, &format!("[{i}]"), &format!("{symbol:?}"), false)?;
            }
        }
        RowView::Record { fields, .. } => {
            for field in &fields {
                let name = if field.name.is_empty() { "\"\"" } else { &field.name };
                render_slot(tree, name, &field.ty, indent, out)?;
            }
        }
    }
    Ok(())
}

fn render_slot(
    tree: &EditorTree,
    label: &str,
    slot: &SlotView,
    indent: usize,
    out: &mut String,
) -> std::result::Result<(), EditError> {
    let tag = if slot.is_renderable() {
        slot.tag.clone()
    } else {
        format!("<{}>", slot.tag)
    };
    line(out, indent, label, &tag, slot.nullable)?;
    if let Some(nested) = slot.nested {
        render_row(tree, nested, indent + 2, out)?;
    }
    Ok(())
}

fn line(out: &mut String, indent: usize, label: &str, tag: &str, nullable: bool) -> Result {
    let label = format!("{}{label}", " ".repeat(indent));
    let null = if nullable { "yes" } else { "no" };
    writeln!(out, "{label:<24} {tag:<10} {null}")
}
