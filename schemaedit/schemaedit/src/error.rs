//! Error types for the schema editor.

use schemaedit_core::SchemaError;
use schemaedit_editor::EditError;
use schemaedit_json::JsonSchemaError;

/// Errors produced by [`SchemaEditor`](crate::SchemaEditor).
#[derive(Debug, thiserror::Error)]
pub enum SchemaEditorError {
    /// The source schema could not be read.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The JSON schema text could not be read.
    #[error(transparent)]
    Json(#[from] JsonSchemaError),

    /// An edit addressed something that does not exist or is not allowed.
    #[error(transparent)]
    Edit(#[from] EditError),

    /// The top-level schema must be a record.
    #[error("top-level schema must be a record, found '{tag}'")]
    NotARecord { tag: String },

    /// An edit operation could not be parsed.
    #[error("invalid edit operation '{op}': {detail}")]
    BadOp { op: String, detail: String },
}
