use base120_core::TransformationType;

#[test]
fn taxonomy_has_6_variants() {
    assert_eq!(TransformationType::COUNT, 6);
    assert_eq!(TransformationType::ALL.len(), 6);
}

#[test]
fn codes_and_display_names() {
    assert_eq!(TransformationType::Perspective.code(), "P");
    assert_eq!(TransformationType::Inversion.code(), "IN");
    assert_eq!(TransformationType::Systems.display_name(), "Systems");
    assert_eq!(TransformationType::Decomposition.to_string(), "Decomposition");
}

#[test]
fn model_code_prefix_classification() {
    assert_eq!(
        TransformationType::from_model_code("IN4"),
        TransformationType::Inversion
    );
    assert_eq!(
        TransformationType::from_model_code("CO12"),
        TransformationType::Composition
    );
    assert_eq!(
        TransformationType::from_model_code("DE1"),
        TransformationType::Decomposition
    );
    assert_eq!(
        TransformationType::from_model_code("RE11"),
        TransformationType::Recursion
    );
    assert_eq!(
        TransformationType::from_model_code("SY16"),
        TransformationType::Systems
    );
    // P is the default for anything else, including P-prefixed codes.
    assert_eq!(
        TransformationType::from_model_code("P3"),
        TransformationType::Perspective
    );
    assert_eq!(
        TransformationType::from_model_code("X99"),
        TransformationType::Perspective
    );
    assert_eq!(
        TransformationType::from_model_code(""),
        TransformationType::Perspective
    );
}

#[test]
fn serde_round_trip_uses_short_codes() {
    for t in TransformationType::ALL {
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, format!("\"{}\"", t.code()));
        let back: TransformationType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}

#[test]
fn ord_follows_declaration_order() {
    // BTreeMap iteration order over transformations depends on this.
    let mut sorted = TransformationType::ALL;
    sorted.sort();
    assert_eq!(sorted, TransformationType::ALL);
}
