//! Display tree builder: a record's field list as ordered display nodes.

use crate::{
    display::DisplayType,
    error::SchemaError,
    parser::{DisplayNode, parse_child, parse_type},
    source::TypeSource,
};

/// Build one named display node per field, keeping declaration order.
///
/// Each node gets its own [`NodeKey`](crate::NodeKey). A field whose type is
/// malformed becomes a faulted node; its siblings are unaffected.
pub fn build_display_fields<S: TypeSource>(fields: Vec<(String, S)>) -> Vec<DisplayNode<S>> {
    fields
        .into_iter()
        .map(|(name, ty)| parse_child(ty).with_name(name))
        .collect()
}

/// Field list of a brand-new record: one unnamed `string` field.
pub fn default_fields<S: TypeSource>() -> Vec<DisplayNode<S>> {
    vec![DisplayNode::detached(DisplayType::String).with_name("")]
}

/// Parse a top-level record schema into its field rows.
pub fn parse_schema<S: TypeSource>(schema: S) -> Result<Vec<DisplayNode<S>>, SchemaError> {
    let root = parse_type(schema)?;
    match root.display_type {
        Some(DisplayType::Record) => root.fields(),
        _ => Err(SchemaError::malformed(
            root.tag,
            "top-level schema must be a record",
        )),
    }
}
