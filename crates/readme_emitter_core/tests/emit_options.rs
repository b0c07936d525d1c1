use readme_emitter_core::{EmitOptions, WriteMode};

#[test]
fn options_deserialize_with_field_defaults() {
    let options: EmitOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, EmitOptions::default());

    let options: EmitOptions = serde_json::from_str(r#"{"write_mode":"atomic"}"#).unwrap();
    assert_eq!(options.write_mode, WriteMode::Atomic);
    assert!(!options.create_parents);
}

#[test]
fn options_reject_unknown_write_mode() {
    let result = serde_json::from_str::<EmitOptions>(r#"{"write_mode":"append"}"#);
    assert!(result.is_err());
}
