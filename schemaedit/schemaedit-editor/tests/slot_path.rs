
use schemaedit_editor::{EditError, SlotId, SlotPath};
use serde_json::json;
use test_helpers::*;

#[test]
fn paths_parse_and_display() {
    let path: SlotPath = "field[1]/items/keys".parse().unwrap();
    assert_eq!(
        path.slots(),
        &[SlotId::Field(1), SlotId::Items, SlotId::Keys]
    );
    assert_eq!(path.to_string(), "field[1]/items/keys");

    let path: SlotPath = "member[0]/values".parse().unwrap();
    assert_eq!(path.slots(), &[SlotId::Member(0), SlotId::Values]);
}

#[test]
fn empty_path_is_the_root() {
    for text in ["", ".", "  "] {
        let path: SlotPath = text.parse().unwrap();
        assert!(path.is_root());
    }
    assert_eq!(SlotPath::root().to_string(), ".");
}

#[test]
fn malformed_segments_are_rejected() {
    for text in ["field", "field[x]", "member[1", "item", "field[1]//keys"] {
        assert!(
            matches!(text.parse::<SlotPath>(), Err(EditError::BadPath(_))),
            "{text} should not parse"
        );
    }
}

#[test]
fn paths_resolve_through_nested_editors() {
    let (tree, _) = editable(json!({
        "type": "record",
        "name": "r",
        "fields": [
            { "name": "a", "type": "int" },
            { "name": "b", "type": { "type": "array", "items": { "type": "map", "values": "long" } } }
        ]
    }));
    let root = tree.root();
    let array = tree.nested(root, SlotId::Field(1)).unwrap();
    let map = tree.nested(array, SlotId::Items).unwrap();

    assert_eq!(tree.resolve_node(&SlotPath::root()).unwrap(), root);
    assert_eq!(tree.resolve_node(&"field[1]/items".parse().unwrap()).unwrap(), map);
    assert_eq!(
        tree.resolve_slot(&"field[1]/items/keys".parse().unwrap()).unwrap(),
        (map, SlotId::Keys)
    );
    assert_eq!(
        SlotPath::root().child(SlotId::Field(1)).child(SlotId::Items),
        "field[1]/items".parse::<SlotPath>().unwrap()
    );
}

#[test]
fn resolving_past_a_primitive_fails() {
    let (tree, _) = editable(json!({ "type": "record", "name": "r", "fields": [{ "name": "a", "type": "int" }] }));
    assert!(matches!(
        tree.resolve_node(&"field[0]/items".parse().unwrap()),
        Err(EditError::NoNestedEditor(SlotId::Field(0)))
    ));
    assert!(matches!(
        tree.resolve_slot(&"field[3]".parse().unwrap()),
        Err(EditError::NoSuchSlot { .. })
    ));
    assert!(matches!(
        tree.resolve_slot(&SlotPath::root()),
        Err(EditError::BadPath(_))
    ));
}
