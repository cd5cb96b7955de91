use jayson_strict::json::Value;
use jayson_strict::path::Path;
use jayson_strict::strict::validate_integer_at;

// A key containing a dot renders the same as two nested keys.
#[test]
fn dotted_key_is_not_escaped() {
    let nested: Path = ["a", "b"].into_iter().collect();
    let dotted: Path = ["a.b"].into_iter().collect();
    let value = Value::from(true);

    let nested = validate_integer_at(&value, &nested).unwrap_err();
    let dotted = validate_integer_at(&value, &dotted).unwrap_err();
    assert_eq!(nested.to_string(), dotted.to_string());
    assert_eq!(
        dotted.to_string(),
        r#"Expected property "a.b" to be integer, but got boolean: true"#
    );
    assert_ne!(nested.path(), dotted.path());
}
