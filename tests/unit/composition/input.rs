use super::*;

#[test]
fn parses_valid_raw_input() {
    let raw = RawCompositionInput::new("tide", "Lattice", "night", "k", "tap", 11, true);
    let input = raw.parse().unwrap();
    assert_eq!(input.signature, Signature::Tide);
    assert_eq!(input.form, Form::Lattice);
    assert_eq!(input.chrono, Chrono::Night);
    assert_eq!(input.mode, Mode::Knowing);
    assert_eq!(input.hook, Hook::Tap);
    assert_eq!(input.seed, 11);
    assert!(input.is_capstone);
    assert_eq!(RawCompositionInput::from(input).parse().unwrap(), input);
}

#[test]
fn first_invalid_field_is_reported() {
    let raw = RawCompositionInput::new("ember", "cube", "noon", "k", "tap", 0, false);
    let err = raw.parse().unwrap_err();
    assert_eq!(err.field(), Some("form"));

    let raw = RawCompositionInput::new("ember", "orbit", "work", "q", "tap", 0, false);
    let err = CompositionInput::try_from(&raw).unwrap_err();
    assert_eq!(err.field(), Some("mode"));
    assert!(err.to_string().contains("'q'"));
}

#[test]
fn from_json_defaults_seed_and_capstone() {
    let input = RawCompositionInput::from_json(
        r#"{"signature":"moss","form":"bloom","chrono":"morning","mode":"believing","hook":"observe"}"#,
    )
    .unwrap();
    assert_eq!(input.seed, 0);
    assert!(!input.is_capstone);
    assert_eq!(input.mode, Mode::Believing);
}

#[test]
fn from_json_reports_configuration_and_serde_errors() {
    let err = RawCompositionInput::from_json(
        r#"{"signature":"moss","form":"bloom","chrono":"morning","mode":"b","hook":"swipe"}"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        CueError::Configuration { field: "hook", .. }
    ));

    let err = RawCompositionInput::from_json(r#"{"signature":"moss"}"#).unwrap_err();
    assert!(matches!(err, CueError::Serde(_)));
}

#[test]
fn typed_input_deserializes_through_tag_parsers() {
    let input: CompositionInput = serde_json::from_str(
        r#"{"signature":"ink","form":"shard","chrono":"evening","mode":"e","hook":"hold","seed":5}"#,
    )
    .unwrap();
    assert_eq!(input.signature, Signature::Ink);
    assert!(!input.is_capstone);
}
