//! Row editor tree for `schemaedit`.
//!
//! An [`EditorTree`] holds one row editor per composite type, built by the
//! dispatcher from a [`DisplayNode`](schemaedit_core::DisplayNode). Editors live
//! in an arena and address their nested editors through typed slots. Every
//! edit reduces the touched editor and each ancestor in turn, and the root
//! hands the resulting [`TypeDescriptor`](schemaedit_core::TypeDescriptor) to
//! the tree's change callback.

mod arena;
mod config;
mod dispatch;
mod error;
mod row;
mod slot;
mod tree;
mod view;

pub use arena::NodeId;
pub use config::{DEFAULT_RECORD_PREFIX, EditorConfig, IdentityPolicy};
pub use error::EditError;
pub use row::RowKind;
pub use slot::{SlotId, SlotPath};
pub use tree::{EditorTree, OnChange};
pub use view::{FieldView, HEADER, RowView, SlotView, render_tree};
