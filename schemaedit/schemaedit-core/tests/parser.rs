use schemaedit_core::{
    DisplayNode, DisplayType, FieldDescriptor, PrimitiveType, SCHEMA_TYPES, SchemaError,
    TypeDescriptor, TypeSource, check_complex_type, parse_schema, parse_type,
};

/// Minimal source used to exercise the parser without a wire format.
#[derive(Debug, Clone)]
enum Raw {
    Tag(&'static str),
    ArrayWithoutItems,
    Array(Box<Raw>),
    Record(Vec<(&'static str, Raw)>),
}

impl TypeSource for Raw {
    fn type_tag(&self) -> Result<String, SchemaError> {
        Ok(match self {
            Raw::Tag(tag) => tag.to_string(),
            Raw::ArrayWithoutItems | Raw::Array(_) => "array".to_string(),
            Raw::Record(_) => "record".to_string(),
        })
    }

    fn items_type(&self) -> Result<Option<Self>, SchemaError> {
        match self {
            Raw::Array(items) => Ok(Some(items.as_ref().clone())),
            Raw::ArrayWithoutItems => Err(SchemaError::malformed("array", "missing 'items'")),
            _ => Ok(None),
        }
    }

    fn keys_type(&self) -> Result<Option<Self>, SchemaError> {
        Ok(None)
    }

    fn values_type(&self) -> Result<Option<Self>, SchemaError> {
        Ok(None)
    }

    fn member_types(&self) -> Result<Option<Vec<Self>>, SchemaError> {
        Ok(None)
    }

    fn symbols(&self) -> Result<Option<Vec<String>>, SchemaError> {
        Ok(None)
    }

    fn fields(&self) -> Result<Option<Vec<(String, Self)>>, SchemaError> {
        match self {
            Raw::Record(fields) => Ok(Some(
                fields
                    .iter()
                    .map(|(name, ty)| (name.to_string(), ty.clone()))
                    .collect(),
            )),
            _ => Ok(None),
        }
    }
}

#[test]
fn schema_types_are_complete_and_ordered() {
    let names: Vec<&str> = SCHEMA_TYPES.iter().map(|t| t.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "boolean", "bytes", "double", "float", "int", "long", "string", "array", "map",
            "union", "enum", "record"
        ]
    );
}

#[test]
fn complex_classification() {
    for tag in ["array", "map", "union", "enum", "record"] {
        assert!(check_complex_type(tag), "{tag} should be complex");
    }
    for tag in ["boolean", "bytes", "double", "float", "int", "long", "string"] {
        assert!(!check_complex_type(tag), "{tag} should be primitive");
    }
    assert!(!check_complex_type("fixed"));
    assert!(!check_complex_type(""));
}

#[test]
fn bare_primitive_tag_is_classified() {
    let node = parse_type(Raw::Tag("long")).unwrap();
    assert_eq!(node.display_type, Some(DisplayType::Long));
    assert!(!node.nested);
    assert!(!node.nullable);
    assert!(node.is_renderable());
}

#[test]
fn unknown_tag_renders_nothing_instead_of_failing() {
    let node = parse_type(Raw::Tag("fixed")).unwrap();
    assert_eq!(node.tag, "fixed");
    assert_eq!(node.display_type, None);
    assert!(!node.is_renderable());
}

#[test]
fn bare_composite_tags_expand_to_defaults() {
    let array = parse_type(Raw::Tag("array")).unwrap();
    assert!(array.nested);
    assert_eq!(array.items().unwrap().display_type, Some(DisplayType::String));

    let map = parse_type(Raw::Tag("map")).unwrap();
    assert_eq!(map.keys().unwrap().display_type, Some(DisplayType::String));
    assert_eq!(map.values().unwrap().display_type, Some(DisplayType::String));

    let union = parse_type(Raw::Tag("union")).unwrap();
    let members = union.members().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].display_type, Some(DisplayType::String));

    let en = parse_type(Raw::Tag("enum")).unwrap();
    assert_eq!(en.symbols().unwrap(), vec![String::new()]);

    let record = parse_type(Raw::Tag("record")).unwrap();
    let fields = record.fields().unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name.as_deref(), Some(""));
    assert_eq!(fields[0].display_type, Some(DisplayType::String));
}

#[test]
fn children_are_parsed_on_demand() {
    let node = parse_type(Raw::Array(Box::new(Raw::Array(Box::new(Raw::Tag("int")))))).unwrap();
    let items = node.items().unwrap();
    assert_eq!(items.display_type, Some(DisplayType::Array));
    let inner = items.items().unwrap();
    assert_eq!(inner.display_type, Some(DisplayType::Int));
}

#[test]
fn missing_accessor_is_a_malformed_node() {
    let node = parse_type(Raw::ArrayWithoutItems).unwrap();
    match node.items() {
        Err(SchemaError::MalformedNode { tag, detail }) => {
            assert_eq!(tag, "array");
            assert!(detail.contains("items"));
        }
        other => panic!("expected malformed node, got {other:?}"),
    }
}

#[test]
fn malformed_field_does_not_affect_siblings() {
    let fields = parse_schema(Raw::Record(vec![
        ("a", Raw::Tag("string")),
        ("b", Raw::Array(Box::new(Raw::ArrayWithoutItems))),
        ("c", Raw::Tag("int")),
    ]))
    .unwrap();

    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0].display_type, Some(DisplayType::String));
    assert_eq!(fields[2].display_type, Some(DisplayType::Int));
    // The malformed grandchild only surfaces when `b` is expanded.
    let b_items = fields[1].items().unwrap();
    assert_eq!(b_items.display_type, Some(DisplayType::Array));
    assert!(b_items.items().is_err());
}

#[test]
fn field_nodes_carry_names_and_distinct_ids() {
    let fields = parse_schema(Raw::Record(vec![
        ("a", Raw::Tag("string")),
        ("b", Raw::Tag("int")),
    ]))
    .unwrap();
    let names: Vec<_> = fields.iter().map(|f| f.name.clone().unwrap()).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_ne!(fields[0].id, fields[1].id);
}

#[test]
fn parse_schema_rejects_non_record_roots() {
    assert!(parse_schema(Raw::Tag("int")).is_err());
}

#[test]
fn descriptor_source_exposes_its_children() {
    let ty = TypeDescriptor::record(
        "root",
        vec![FieldDescriptor::new(
            "m",
            TypeDescriptor::map(PrimitiveType::String, PrimitiveType::Long),
        )],
    );
    let node = parse_type(ty).unwrap();
    assert_eq!(node.record_name().as_deref(), Some("root"));
    let fields = node.fields().unwrap();
    let values = fields[0].values().unwrap();
    assert_eq!(values.display_type, Some(DisplayType::Long));
}

#[test]
fn detached_nodes_for_unknown_tags_render_nothing() {
    let node: DisplayNode<TypeDescriptor> = DisplayNode::from_tag("null");
    assert_eq!(node.display_type, None);
    assert!(node.source().is_none());
}
