use shallow_differ::errors::{DifferError, ExError, ExErrorKind};
use shallow_differ::Props;

#[test]
fn invalid_utf8_is_invalid_input() {
    let err = Props::from_json_slice(&[0x7b, 0xff, 0x7d]).unwrap_err();
    assert!(matches!(err, DifferError::InvalidUtf8 { .. }));
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
}

#[test]
fn invalid_json_is_invalid_input() {
    let err = Props::from_json_slice(b"{\"x\": }").unwrap_err();
    assert!(matches!(err, DifferError::InvalidJson { .. }));

    let ex: ExError = err.into();
    assert_eq!(ex.code(), "ERR_INVALID_INPUT");
    assert!(ex.message().starts_with("Input is not valid JSON"));
}

#[test]
fn valid_non_object_json_is_empty_not_an_error() {
    let props = Props::from_json_slice(b"[1, 2, 3]").unwrap();
    assert!(props.is_empty());
}

#[test]
fn valid_object_json_round_trips_through_serialization() {
    let props = Props::from_json_slice(br#"{"a": 1, "b": [true]}"#).unwrap();
    assert_eq!(props.len(), 2);
    assert_eq!(props.to_json_string().unwrap(), r#"{"a":1,"b":[true]}"#);
}

#[test]
fn ex_error_display_is_stable() {
    let ex = ExError::new(ExErrorKind::Serialization)
        .with_op("to_json_string")
        .with_message("boom");
    assert_eq!(
        ex.to_string(),
        "[ERR_SERIALIZATION] in operation 'to_json_string': boom"
    );
}
