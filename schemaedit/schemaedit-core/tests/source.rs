use schemaedit_core::{
    FieldDescriptor, PrimitiveType, SchemaError, TypeDescriptor, TypeSource, to_descriptor,
};

#[test]
fn descriptor_round_trips_through_its_own_source() {
    let ty = TypeDescriptor::record(
        "root",
        vec![
            FieldDescriptor::new("a", PrimitiveType::Int),
            FieldDescriptor::new(
                "b",
                TypeDescriptor::Union(vec![
                    PrimitiveType::String.into(),
                    TypeDescriptor::enumeration(["X", "Y"]),
                ]),
            ),
        ],
    );
    assert_eq!(to_descriptor(&ty, "unused").unwrap(), ty);
}

#[test]
fn accessors_reject_the_wrong_kind() {
    let ty: TypeDescriptor = PrimitiveType::Int.into();
    assert!(matches!(
        ty.items_type(),
        Err(SchemaError::MalformedNode { .. })
    ));
    assert!(ty.fields().is_err());
    assert_eq!(ty.record_name(), None);
}
