use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CueError::configuration("mode", "x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        CueError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CueError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn configuration_names_field_and_value() {
    let err = CueError::configuration("signature", "plaid");
    assert_eq!(err.field(), Some("signature"));
    assert_eq!(
        err.to_string(),
        "configuration error: invalid signature 'plaid'"
    );
    assert_eq!(CueError::validation("x").field(), None);
}

#[test]
fn json_errors_map_to_serde() {
    let err: CueError = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    assert!(matches!(err, CueError::Serde(_)));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CueError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
