//! Error types for the JSON wire format.

use schemaedit_core::SchemaError;

/// Error returned when reading a JSON schema.
#[derive(Debug, thiserror::Error)]
pub enum JsonSchemaError {
    /// The input is not valid JSON.
    #[error("failed to parse schema JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON is well-formed but does not describe a schema type.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
