//! Text-addressable edit operations.
//!
//! Each operation names its target with a [`SlotPath`] from the root record:
//!
//! ```text
//! set-type      PATH TAG          retype a slot
//! rename        PATH NAME         rename the field at PATH (a field[i] slot)
//! add-field     PATH [INDEX]      insert a default field into the record at PATH
//! remove-field  PATH INDEX
//! set-symbol    PATH INDEX TEXT   edit a symbol of the enum at PATH
//! add-symbol    PATH
//! remove-symbol PATH INDEX
//! add-member    PATH              append a member to the union at PATH
//! remove-member PATH INDEX
//! ```
//!
//! `.` is the root record. `NAME` and `TEXT` run to the end of the line and
//! may be empty.

use std::{fmt, str::FromStr};

use schemaedit_editor::{EditorTree, SlotId, SlotPath};

use crate::error::SchemaEditorError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    SetType { path: SlotPath, tag: String },
    Rename { path: SlotPath, name: String },
    AddField { path: SlotPath, index: Option<usize> },
    RemoveField { path: SlotPath, index: usize },
    SetSymbol { path: SlotPath, index: usize, text: String },
    AddSymbol { path: SlotPath },
    RemoveSymbol { path: SlotPath, index: usize },
    AddMember { path: SlotPath },
    RemoveMember { path: SlotPath, index: usize },
}

impl EditOp {
    pub fn apply(&self, tree: &mut EditorTree) -> Result<(), SchemaEditorError> {
        match self {
            EditOp::SetType { path, tag } => {
                let (node, slot) = tree.resolve_slot(path)?;
                tree.select_type(node, slot, tag)?;
            }
            EditOp::Rename { path, name } => {
                let (node, slot) = tree.resolve_slot(path)?;
                let SlotId::Field(index) = slot else {
                    return Err(self.bad("rename needs a field[i] slot"));
                };
                tree.rename_field(node, index, name)?;
            }
            EditOp::AddField { path, index } => {
                let node = tree.resolve_node(path)?;
                tree.add_field(node, *index)?;
            }
            EditOp::RemoveField { path, index } => {
                let node = tree.resolve_node(path)?;
                tree.remove_field(node, *index)?;
            }
            EditOp::SetSymbol { path, index, text } => {
                let node = tree.resolve_node(path)?;
                tree.set_symbol(node, *index, text)?;
            }
            EditOp::AddSymbol { path } => {
                let node = tree.resolve_node(path)?;
                tree.add_symbol(node)?;
            }
            EditOp::RemoveSymbol { path, index } => {
                let node = tree.resolve_node(path)?;
                tree.remove_symbol(node, *index)?;
            }
            EditOp::AddMember { path } => {
                let node = tree.resolve_node(path)?;
                tree.add_member(node)?;
            }
            EditOp::RemoveMember { path, index } => {
                let node = tree.resolve_node(path)?;
                tree.remove_member(node, *index)?;
            }
        }
        Ok(())
    }

    fn bad(&self, detail: &str) -> SchemaEditorError {
        SchemaEditorError::BadOp {
            op: self.to_string(),
            detail: detail.to_string(),
        }
    }
}

fn bad_op(op: &str, detail: impl Into<String>) -> SchemaEditorError {
    SchemaEditorError::BadOp {
        op: op.to_string(),
        detail: detail.into(),
    }
}

/// Split off the next whitespace-delimited word.
fn next_word(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    Some((&s[..end], &s[end..]))
}

impl FromStr for EditOp {
    type Err = SchemaEditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (verb, rest) = next_word(s).ok_or_else(|| bad_op(s, "empty operation"))?;
        let (path, rest) = next_word(rest).ok_or_else(|| bad_op(s, "missing path"))?;
        let path: SlotPath = path.parse().map_err(|e| bad_op(s, format!("{e}")))?;

        let word = |rest: &str, what: &str| -> Result<String, SchemaEditorError> {
            next_word(rest)
                .map(|(w, _)| w.to_string())
                .ok_or_else(|| bad_op(s, format!("missing {what}")))
        };
        let parse_index = |rest: &str| -> Result<(usize, String), SchemaEditorError> {
            let (w, tail) = next_word(rest).ok_or_else(|| bad_op(s, "missing index"))?;
            let index = w
                .parse()
                .map_err(|_| bad_op(s, format!("'{w}' is not an index")))?;
            Ok((index, tail.trim().to_string()))
        };
        let no_trailing = |rest: &str| -> Result<(), SchemaEditorError> {
            match next_word(rest) {
                Some((extra, _)) => Err(bad_op(s, format!("unexpected '{extra}'"))),
                None => Ok(()),
            }
        };

        let op = match verb {
            "set-type" => {
                let tag = word(rest, "tag")?;
                let tail = next_word(rest).map_or("", |(_, tail)| tail);
                no_trailing(tail)?;
                EditOp::SetType { path, tag }
            }
            "rename" => EditOp::Rename {
                name: rest.trim().to_string(),
                path,
            },
            "add-field" => {
                let index = match next_word(rest) {
                    Some(_) => {
                        let (index, tail) = parse_index(rest)?;
                        no_trailing(&tail)?;
                        Some(index)
                    }
                    None => None,
                };
                EditOp::AddField { path, index }
            }
            "remove-field" => {
                let (index, tail) = parse_index(rest)?;
                no_trailing(&tail)?;
                EditOp::RemoveField { path, index }
            }
            "set-symbol" => {
                let (index, text) = parse_index(rest)?;
                EditOp::SetSymbol { path, index, text }
            }
            "add-symbol" => {
                no_trailing(rest)?;
                EditOp::AddSymbol { path }
            }
            "remove-symbol" => {
                let (index, tail) = parse_index(rest)?;
                no_trailing(&tail)?;
                EditOp::RemoveSymbol { path, index }
            }
            "add-member" => {
                no_trailing(rest)?;
                EditOp::AddMember { path }
            }
            "remove-member" => {
                let (index, tail) = parse_index(rest)?;
                no_trailing(&tail)?;
                EditOp::RemoveMember { path, index }
            }
            other => return Err(bad_op(s, format!("unknown operation '{other}'"))),
        };
        Ok(op)
    }
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOp::SetType { path, tag } => write!(f, "set-type {path} {tag}"),
            EditOp::Rename { path, name } => write!(f, "rename {path} {name}"),
            EditOp::AddField { path, index: None } => write!(f, "add-field {path}"),
            EditOp::AddField {
                path,
                index: Some(index),
            } => write!(f, "add-field {path} {index}"),
            EditOp::RemoveField { path, index } => write!(f, "remove-field {path} {index}"),
            EditOp::SetSymbol { path, index, text } => {
                write!(f, "set-symbol {path} {index} {text}")
            }
            EditOp::AddSymbol { path } => write!(f, "add-symbol {path}"),
            EditOp::RemoveSymbol { path, index } => write!(f, "remove-symbol {path} {index}"),
            EditOp::AddMember { path } => write!(f, "add-member {path}"),
            EditOp::RemoveMember { path, index } => write!(f, "remove-member {path} {index}"),
        }
    }
}
