
use schemaedit_core::{FieldDescriptor, PrimitiveType, TypeDescriptor};
use schemaedit_editor::{EditError, EditorConfig, IdentityPolicy, RowKind, RowView, SlotId};
use serde_json::json;
use test_helpers::*;

fn record_name(ty: &TypeDescriptor) -> &str {
    match ty {
        TypeDescriptor::Record { name, .. } => name,
        other => panic!("expected a record, got {other:?}"),
    }
}

#[test]
fn read_only_tree_rejects_edits() {
    let mut tree = read_only(json!({ "fields": [{ "name": "a", "type": "int" }] }));
    let root = tree.root();
    assert!(tree.is_read_only());
    assert!(matches!(
        tree.select_type(root, SlotId::Field(0), "long"),
        Err(EditError::ReadOnly)
    ));
    assert!(matches!(tree.add_field(root, None), Err(EditError::ReadOnly)));
    tree.mount();
    assert!(tree.last_emitted().is_none());
}

#[test]
fn unknown_tag_withholds_emission_until_fixed() {
    let (mut tree, emitted) = editable(json!({
        "type": "record",
        "name": "r",
        "fields": [
            { "name": "a", "type": "uuid" },
            { "name": "b", "type": "int" }
        ]
    }));
    tree.mount();
    assert_eq!(count(&emitted), 0);
    assert!(tree.current().is_none());

    let root = tree.root();
    tree.select_type(root, SlotId::Field(0), "string").unwrap();
    assert_eq!(
        last(&emitted),
        TypeDescriptor::record(
            "r",
            vec![
                FieldDescriptor::new("a", PrimitiveType::String),
                FieldDescriptor::new("b", PrimitiveType::Int),
            ],
        )
    );
}

#[test]
fn selecting_an_unknown_tag_renders_nothing() {
    let (mut tree, emitted) = editable(json!({ "type": "array", "items": "int" }));
    tree.mount();
    let root = tree.root();
    tree.select_type(root, SlotId::Items, "decimal").unwrap();
    assert_eq!(count(&emitted), 1);
    assert!(matches!(
        tree.nested(root, SlotId::Items),
        Err(EditError::NoNestedEditor(SlotId::Items))
    ));
}

#[test]
fn malformed_field_is_contained_to_its_slot() {
    let (mut tree, emitted) = editable(json!({
        "type": "record",
        "name": "r",
        "fields": [
            { "name": "a", "type": { "type": "array" } },
            { "name": "b", "type": "int" }
        ]
    }));
    tree.mount();
    assert_eq!(count(&emitted), 0);

    let root = tree.root();
    tree.select_type(root, SlotId::Field(0), "array").unwrap();
    assert_eq!(
        last(&emitted),
        TypeDescriptor::record(
            "r",
            vec![
                FieldDescriptor::new("a", TypeDescriptor::array(PrimitiveType::String)),
                FieldDescriptor::new("b", PrimitiveType::Int),
            ],
        )
    );
}

#[test]
fn unknown_root_fails_to_build() {
    let root = schemaedit_core::parse_type(schemaedit_json::JsonType::new(json!("uuid"))).unwrap();
    let err = schemaedit_editor::EditorTree::build(root, EditorConfig::default(), None).unwrap_err();
    assert_eq!(err, schemaedit_core::SchemaError::UnknownType("uuid".to_string()));
}

#[test]
fn retyping_disposes_nested_editors_and_rejects_late_edits() {
    let (mut tree, emitted) = editable(json!({
        "type": "record",
        "name": "r",
        "fields": [{ "name": "a", "type": { "type": "array", "items": { "type": "map", "values": "int" } } }]
    }));
    tree.mount();
    let root = tree.root();
    let array = tree.nested(root, SlotId::Field(0)).unwrap();
    let map = tree.nested(array, SlotId::Items).unwrap();
    assert_eq!(tree.len(), 3);

    tree.select_type(root, SlotId::Field(0), "int").unwrap();
    assert!(!tree.is_live(array));
    assert!(!tree.is_live(map));
    assert_eq!(tree.len(), 1);
    let before = count(&emitted);

    assert!(matches!(
        tree.select_type(array, SlotId::Items, "long"),
        Err(EditError::StaleNode(_))
    ));
    assert!(matches!(
        tree.select_type(map, SlotId::Keys, "int"),
        Err(EditError::StaleNode(_))
    ));
    assert_eq!(count(&emitted), before);
    assert_eq!(
        last(&emitted),
        TypeDescriptor::record("r", vec![FieldDescriptor::new("a", PrimitiveType::Int)])
    );
}

#[test]
fn same_tag_selection_is_not_an_edit() {
    let (mut tree, emitted) = editable(json!({ "type": "array", "items": "int" }));
    tree.mount();
    let root = tree.root();
    tree.select_type(root, SlotId::Items, "int").unwrap();
    assert_eq!(count(&emitted), 1);
}

#[test]
fn add_field_inserts_default_row_and_keeps_ids_stable() {
    let (mut tree, emitted) = editable(json!({
        "type": "record",
        "name": "r",
        "fields": [
            { "name": "a", "type": "int" },
            { "name": "b", "type": { "type": "array", "items": "long" } }
        ]
    }));
    let root = tree.root();
    let b_items = tree.nested(root, SlotId::Field(1)).unwrap();
    let added = tree.add_field(root, Some(0)).unwrap();

    assert_eq!(tree.field_index(root, added).unwrap(), Some(0));
    assert_eq!(tree.parent(b_items).unwrap(), Some((root, SlotId::Field(2))));
    assert_eq!(
        last(&emitted),
        TypeDescriptor::record(
            "r",
            vec![
                FieldDescriptor::new("", PrimitiveType::String),
                FieldDescriptor::new("a", PrimitiveType::Int),
                FieldDescriptor::new("b", TypeDescriptor::array(PrimitiveType::Long)),
            ],
        )
    );

    tree.select_type(b_items, SlotId::Items, "float").unwrap();
    tree.rename_field(root, 0, "z").unwrap();
    assert_eq!(
        last(&emitted),
        TypeDescriptor::record(
            "r",
            vec![
                FieldDescriptor::new("z", PrimitiveType::String),
                FieldDescriptor::new("a", PrimitiveType::Int),
                FieldDescriptor::new("b", TypeDescriptor::array(PrimitiveType::Float)),
            ],
        )
    );
}

#[test]
fn add_field_appends_and_checks_range() {
    let (mut tree, _) = editable(json!({ "type": "record", "name": "r", "fields": [] }));
    let root = tree.root();
    let first = tree.add_field(root, None).unwrap();
    let second = tree.add_field(root, None).unwrap();
    assert_ne!(first, second);
    assert_eq!(tree.field_index(root, second).unwrap(), Some(1));
    assert!(matches!(
        tree.add_field(root, Some(5)),
        Err(EditError::IndexOutOfRange { index: 5, len: 2, .. })
    ));
    assert!(matches!(
        tree.remove_field(root, 2),
        Err(EditError::IndexOutOfRange { .. })
    ));
}

#[test]
fn record_may_become_empty() {
    let (mut tree, emitted) = editable(json!({ "type": "record", "name": "r", "fields": [{ "name": "a", "type": "int" }] }));
    let root = tree.root();
    tree.remove_field(root, 0).unwrap();
    assert_eq!(last(&emitted), TypeDescriptor::record("r", vec![]));
}

#[test]
fn union_members_are_added_retyped_and_removed() {
    let (mut tree, emitted) = editable(json!(["string"]));
    let root = tree.root();
    assert_eq!(tree.kind(root).unwrap(), RowKind::Union);

    tree.add_member(root).unwrap();
    tree.select_type(root, SlotId::Member(1), "array").unwrap();
    assert_eq!(
        last(&emitted),
        TypeDescriptor::Union(vec![
            PrimitiveType::String.into(),
            TypeDescriptor::array(PrimitiveType::String),
        ])
    );

    tree.remove_member(root, 0).unwrap();
    let items = tree.nested(root, SlotId::Member(0)).unwrap();
    assert_eq!(tree.parent(items).unwrap(), Some((root, SlotId::Member(0))));
    assert_eq!(
        last(&emitted),
        TypeDescriptor::Union(vec![TypeDescriptor::array(PrimitiveType::String)])
    );
    assert!(matches!(
        tree.remove_member(root, 0),
        Err(EditError::WouldBeEmpty(_))
    ));
}

#[test]
fn enum_symbols_are_plain_text() {
    let (mut tree, emitted) = editable(json!({ "type": "enum", "symbols": ["A"] }));
    let root = tree.root();
    tree.set_symbol(root, 0, "B").unwrap();
    tree.add_symbol(root).unwrap();
    tree.set_symbol(root, 1, "C").unwrap();
    assert_eq!(last(&emitted), TypeDescriptor::enumeration(["B", "C"]));

    tree.remove_symbol(root, 0).unwrap();
    assert_eq!(last(&emitted), TypeDescriptor::enumeration(["C"]));
    assert!(matches!(
        tree.remove_symbol(root, 0),
        Err(EditError::WouldBeEmpty(_))
    ));
    assert!(matches!(
        tree.set_symbol(root, 3, "D"),
        Err(EditError::IndexOutOfRange { .. })
    ));
}

#[test]
fn bare_enum_defaults_to_one_empty_symbol() {
    let (mut tree, emitted) = editable(json!({
        "type": "record",
        "name": "r",
        "fields": [{ "name": "e", "type": "string" }]
    }));
    let root = tree.root();
    tree.select_type(root, SlotId::Field(0), "enum").unwrap();
    assert_eq!(
        last(&emitted),
        TypeDescriptor::record(
            "r",
            vec![FieldDescriptor::new("e", TypeDescriptor::enumeration([""]))],
        )
    );
}

#[test]
fn primitive_root_can_grow_a_nested_editor() {
    let (mut tree, emitted) = editable(json!("int"));
    let root = tree.root();
    assert_eq!(tree.kind(root).unwrap(), RowKind::Primitive);
    tree.mount();
    assert_eq!(last(&emitted), PrimitiveType::Int.into());

    tree.select_type(root, SlotId::Type, "record").unwrap();
    assert_eq!(
        last(&emitted),
        TypeDescriptor::record("record_1", vec![FieldDescriptor::new("", PrimitiveType::String)])
    );
}

#[test]
fn edits_check_editor_kind_and_slots() {
    let (mut tree, _) = editable(json!({ "type": "array", "items": "int" }));
    let root = tree.root();
    assert!(matches!(
        tree.add_field(root, None),
        Err(EditError::WrongKind { expected: "record", actual: "array" })
    ));
    assert!(matches!(
        tree.add_symbol(root),
        Err(EditError::WrongKind { expected: "enum", .. })
    ));
    assert!(matches!(
        tree.select_type(root, SlotId::Keys, "int"),
        Err(EditError::NoSuchSlot { kind: "array", slot: SlotId::Keys })
    ));
}

#[test]
fn preserve_policy_keeps_identities_across_edits() {
    let (mut tree, emitted) = editable(json!({
        "fields": [{ "name": "inner", "type": { "type": "record", "fields": [{ "name": "x", "type": "int" }] } }]
    }));
    tree.mount();
    let root = tree.root();
    tree.rename_field(root, 0, "renamed").unwrap();

    let emitted = emitted.borrow();
    assert_eq!(record_name(&emitted[0]), record_name(&emitted[1]));
    let TypeDescriptor::Record { fields, .. } = &emitted[1] else {
        unreachable!()
    };
    assert_ne!(record_name(&fields[0].ty), record_name(&emitted[1]));
}

#[test]
fn regenerate_policy_issues_fresh_identities() {
    let config = EditorConfig::default()
        .with_identity_policy(IdentityPolicy::Regenerate)
        .with_record_prefix("row");
    let (mut tree, emitted) = editable_with(
        json!({ "type": "record", "name": "kept?", "fields": [{ "name": "a", "type": "int" }] }),
        config,
    );
    tree.mount();
    let root = tree.root();
    tree.rename_field(root, 0, "b").unwrap();

    let emitted = emitted.borrow();
    let (first, second) = (record_name(&emitted[0]), record_name(&emitted[1]));
    assert_ne!(first, second);
    assert!(first.starts_with("row_"));
    assert!(second.starts_with("row_"));
}

#[test]
fn identity_policy_parses_from_flags() {
    assert_eq!("preserve".parse::<IdentityPolicy>(), Ok(IdentityPolicy::Preserve));
    assert_eq!("regenerate".parse::<IdentityPolicy>(), Ok(IdentityPolicy::Regenerate));
    assert!("sometimes".parse::<IdentityPolicy>().is_err());
    assert_eq!(IdentityPolicy::Regenerate.to_string(), "regenerate");
}

#[test]
fn nested_edit_before_mount_emits_initial_value_first() {
    let (mut tree, emitted) = editable(json!({
        "type": "record",
        "name": "r",
        "fields": [{ "name": "a", "type": { "type": "array", "items": "int" } }]
    }));
    let array = tree.nested(tree.root(), SlotId::Field(0)).unwrap();
    tree.select_type(array, SlotId::Items, "long").unwrap();
    tree.mount();

    assert_eq!(
        *emitted.borrow(),
        vec![
            TypeDescriptor::record(
                "r",
                vec![FieldDescriptor::new("a", TypeDescriptor::array(PrimitiveType::Int))],
            ),
            TypeDescriptor::record(
                "r",
                vec![FieldDescriptor::new("a", TypeDescriptor::array(PrimitiveType::Long))],
            ),
        ]
    );
}

#[test]
fn emission_matches_the_view_after_retyping() {
    let (mut tree, emitted) = editable(json!({
        "type": "record",
        "name": "r",
        "fields": [{ "name": "a", "type": "int" }]
    }));
    let root = tree.root();
    tree.select_type(root, SlotId::Field(0), "record").unwrap();

    let RowView::Record { fields, .. } = tree.view(root).unwrap() else {
        panic!("root is a record editor");
    };
    assert_eq!(fields[0].ty.tag, "record");
    let nested = fields[0].ty.nested.expect("record slot has a nested editor");
    let RowView::Record { identity, .. } = tree.view(nested).unwrap() else {
        panic!("nested editor is a record editor");
    };
    assert_eq!(
        last(&emitted),
        TypeDescriptor::record(
            "r",
            vec![FieldDescriptor::new(
                "a",
                TypeDescriptor::record(identity, vec![FieldDescriptor::new("", PrimitiveType::String)]),
            )],
        )
    );
}

#[test]
fn generated_identity_skips_field_names_and_issued_identities() {
    let (mut tree, emitted) = editable(json!({
        "fields": [
            { "name": "record_1", "type": "int" },
            { "name": "inner", "type": { "name": "record_2", "fields": [{ "name": "x", "type": "int" }] } },
            { "name": "other", "type": { "name": "record_2", "fields": [{ "name": "y", "type": "int" }] } }
        ]
    }));
    tree.mount();

    let root = last(&emitted);
    let TypeDescriptor::Record { fields, .. } = &root else {
        unreachable!()
    };
    let outer = record_name(&root);
    let (inner, other) = (record_name(&fields[1].ty), record_name(&fields[2].ty));
    assert_eq!(inner, "record_2");
    assert_ne!(other, "record_2");
    assert_ne!(outer, "record_1");
    assert_ne!(outer, inner);
    assert_ne!(outer, other);
}

#[test]
fn renaming_a_field_to_the_record_identity_reissues_it() {
    let (mut tree, emitted) = editable(json!({
        "type": "record",
        "name": "r",
        "fields": [{ "name": "a", "type": "int" }]
    }));
    let root = tree.root();
    tree.rename_field(root, 0, "r").unwrap();

    let renamed = last(&emitted);
    assert_ne!(record_name(&renamed), "r");
    let RowView::Record { identity, .. } = tree.view(root).unwrap() else {
        panic!("root is a record editor");
    };
    assert_eq!(identity, record_name(&renamed));

    tree.rename_field(root, 0, "b").unwrap();
    assert_eq!(record_name(&last(&emitted)), identity);
}
