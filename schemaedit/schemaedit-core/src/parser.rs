//! Type parser: classify one source node into a [`DisplayNode`].
//!
//! Parsing is shallow. A node only records its own tag and keeps the source
//! around; children are produced on demand through the accessor methods, so an
//! editor expands exactly the levels it renders.

use tracing::warn;

use crate::{
    display::{DisplayType, NodeKey},
    error::SchemaError,
    source::TypeSource,
    tree::{build_display_fields, default_fields},
};

/// Editor-facing view of one type node.
#[derive(Debug, Clone)]
pub struct DisplayNode<S> {
    /// Raw tag as found in the source.
    pub tag: String,
    /// Recognized tag; `None` for unknown tags, which render nothing.
    pub display_type: Option<DisplayType>,
    /// Field name when this node is a record field.
    pub name: Option<String>,
    pub id: NodeKey,
    /// Reserved: set for composite tags.
    pub nested: bool,
    /// Reserved: nullability is not modelled yet and is always `false`.
    pub nullable: bool,
    /// Parse failure of this node; a faulted node renders nothing.
    pub fault: Option<SchemaError>,
    source: Option<S>,
}

/// Classify `source` without descending into its children.
///
/// Unknown tags are not errors: the node comes back with `display_type: None`.
pub fn parse_type<S: TypeSource>(source: S) -> Result<DisplayNode<S>, SchemaError> {
    let tag = source.type_tag()?;
    let display_type = DisplayType::from_tag(&tag);
    if display_type.is_none() {
        warn!(tag = %tag, "no renderer for schema type");
    }
    Ok(DisplayNode {
        nested: display_type.is_some_and(|t| t.is_complex()),
        tag,
        display_type,
        name: None,
        id: NodeKey::next(),
        nullable: false,
        fault: None,
        source: Some(source),
    })
}

/// Parse a child node, containing its failure to that node.
pub(crate) fn parse_child<S: TypeSource>(source: S) -> DisplayNode<S> {
    match parse_type(source) {
        Ok(node) => node,
        Err(err) => {
            warn!(error = %err, "malformed schema node");
            DisplayNode::faulted(err)
        }
    }
}

impl<S: TypeSource> DisplayNode<S> {
    /// A node with no source; its children take the editor defaults.
    pub fn detached(display_type: DisplayType) -> Self {
        Self {
            tag: display_type.as_str().to_string(),
            display_type: Some(display_type),
            name: None,
            id: NodeKey::next(),
            nested: display_type.is_complex(),
            nullable: false,
            fault: None,
            source: None,
        }
    }

    /// A detached node for a raw tag, which may be unrecognized.
    pub fn from_tag(tag: &str) -> Self {
        match DisplayType::from_tag(tag) {
            Some(display_type) => Self::detached(display_type),
            None => {
                warn!(tag = %tag, "no renderer for schema type");
                Self {
                    tag: tag.to_string(),
                    display_type: None,
                    name: None,
                    id: NodeKey::next(),
                    nested: false,
                    nullable: false,
                    fault: None,
                    source: None,
                }
            }
        }
    }

    pub fn faulted(fault: SchemaError) -> Self {
        let tag = match &fault {
            SchemaError::MalformedNode { tag, .. } | SchemaError::UnknownType(tag) => tag.clone(),
        };
        Self {
            tag,
            display_type: None,
            name: None,
            id: NodeKey::next(),
            nested: false,
            nullable: false,
            fault: Some(fault),
            source: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    /// Whether a dispatcher can build an editor for this node.
    pub fn is_renderable(&self) -> bool {
        self.display_type.is_some() && self.fault.is_none()
    }

    pub fn is_complex(&self) -> bool {
        self.display_type.is_some_and(|t| t.is_complex())
    }

    pub fn items(&self) -> Result<DisplayNode<S>, SchemaError> {
        self.child(S::items_type)
    }

    pub fn keys(&self) -> Result<DisplayNode<S>, SchemaError> {
        self.child(S::keys_type)
    }

    pub fn values(&self) -> Result<DisplayNode<S>, SchemaError> {
        self.child(S::values_type)
    }

    /// Union members; a bare `union` tag yields a single `string` member.
    pub fn members(&self) -> Result<Vec<DisplayNode<S>>, SchemaError> {
        match self.source.as_ref().map(S::member_types).transpose()?.flatten() {
            Some(members) => Ok(members.into_iter().map(parse_child).collect()),
            None => Ok(vec![Self::detached(DisplayType::String)]),
        }
    }

    /// Enum symbols; a bare `enum` tag yields one empty symbol.
    pub fn symbols(&self) -> Result<Vec<String>, SchemaError> {
        Ok(self
            .source
            .as_ref()
            .map(S::symbols)
            .transpose()?
            .flatten()
            .unwrap_or_else(|| vec![String::new()]))
    }

    /// Record fields, one named node each; a bare `record` tag yields the
    /// default single empty `string` field.
    pub fn fields(&self) -> Result<Vec<DisplayNode<S>>, SchemaError> {
        match self.source.as_ref().map(S::fields).transpose()?.flatten() {
            Some(fields) => Ok(build_display_fields(fields)),
            None => Ok(default_fields()),
        }
    }

    pub fn record_name(&self) -> Option<String> {
        self.source.as_ref().and_then(S::record_name)
    }

    fn child(
        &self,
        accessor: impl Fn(&S) -> Result<Option<S>, SchemaError>,
    ) -> Result<DisplayNode<S>, SchemaError> {
        match self.source.as_ref().map(accessor).transpose()?.flatten() {
            Some(child) => Ok(parse_child(child)),
            None => Ok(Self::detached(DisplayType::String)),
        }
    }
}
