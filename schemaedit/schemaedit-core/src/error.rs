//! Error types for schema parsing.

/// Error produced while reading a type descriptor source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// A structured node lacks an accessor its tag requires
    /// (e.g. an array without `items`, a record field without a name).
    #[error("malformed schema node (type '{tag}'): {detail}")]
    MalformedNode { tag: String, detail: String },

    /// A tag is not one of the selectable schema types.
    #[error("unknown schema type '{0}'")]
    UnknownType(String),
}

impl SchemaError {
    pub fn malformed(tag: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MalformedNode {
            tag: tag.into(),
            detail: detail.into(),
        }
    }
}
