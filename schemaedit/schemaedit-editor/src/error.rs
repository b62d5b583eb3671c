use schemaedit_core::SchemaError;
use thiserror::Error;

use crate::{arena::NodeId, slot::SlotId};

/// Error returned by editor-tree operations.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("editor tree is read-only: no change callback was supplied")]
    ReadOnly,

    #[error("editor {0} has been disposed")]
    StaleNode(NodeId),

    #[error("{kind} editor has no slot {slot}")]
    NoSuchSlot { kind: &'static str, slot: SlotId },

    #[error("index {index} out of range for {len} {what}")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("slot {0} has no nested editor")]
    NoNestedEditor(SlotId),

    #[error("expected a {expected} editor, found a {actual} editor")]
    WrongKind {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("cannot remove the last {0}")]
    WouldBeEmpty(&'static str),

    #[error("invalid slot path '{0}'")]
    BadPath(String),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("failed to render editor tree")]
    Render(#[from] std::fmt::Error),
}
