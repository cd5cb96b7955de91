use jayson_strict::json::Value;
use jayson_strict::path::{Path, Segment};
use jayson_strict::{build_mismatch_error, validate_string, TypeMismatchError, ValueKind};

#[test]
fn test_without_context() {
    let err = TypeMismatchError::from_value("foo", &Value::from("bar"));
    assert_eq!(err.to_string(), r#"Expected foo, but got string: "bar""#);
    assert_eq!(err.expected(), "foo");
    assert_eq!(err.actual_kind(), ValueKind::String);
    assert!(err.path().is_root());
}

#[test]
fn test_top_level_context() {
    let err = build_mismatch_error("foo", &Value::from("bar"), &Path::root());
    assert_eq!(err.to_string(), r#"Expected foo, but got string: "bar""#);
}

#[test]
fn test_third_level_context() {
    let path: Path = ["asd", "qwe"].into_iter().collect();
    let err = build_mismatch_error("foo", &Value::from("bar"), &path);
    assert_eq!(
        err.to_string(),
        r#"Expected property "asd.qwe" to be foo, but got string: "bar""#
    );
}

#[test]
fn test_validator_with_path() {
    let path: Path = ["asd", "qwe"].into_iter().collect();
    let err = jayson_strict::strict::validate_string_at(&Value::from(42u64), &path).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"Expected property "asd.qwe" to be string, but got integer: 42"#
    );
    assert_eq!(err.expected(), "string");
    assert_eq!(err.actual(), &Value::from(42u64));
}

#[test]
fn test_index_segments() {
    let path = Path::from(vec![
        Segment::from("items"),
        Segment::Index(2),
        Segment::from("price"),
    ]);
    let err = jayson_strict::strict::validate_float_at(&Value::from("9.99"), &path).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"Expected property "items.2.price" to be float, but got string: "9.99""#
    );
}

#[test]
fn test_custom_kind() {
    let err = build_mismatch_error("date", &Value::from(20170101u64), &Path::root());
    assert_eq!(err.to_string(), "Expected date, but got integer: 20170101");
}

#[test]
fn test_deterministic() {
    let value = Value::from("bar");
    let path: Path = ["a"].into_iter().collect();
    let first = build_mismatch_error("foo", &value, &path);
    let second = build_mismatch_error("foo", &value, &path);
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    let err = validate_string(&Value::Null).unwrap_err();
    assert_error(&err);
}
