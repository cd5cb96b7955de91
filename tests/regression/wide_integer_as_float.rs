use jayson_strict::json::Value;
use jayson_strict::validate_float;

// Widening is accepted even where the float cannot hold the exact integer.
#[test]
fn integer_beyond_f64_precision_is_accepted() {
    let n = (1u64 << 53) + 1;
    let widened = validate_float(&Value::from(n)).unwrap();
    assert_eq!(widened, (1u64 << 53) as f64);
    assert_eq!(validate_float(&Value::from(u64::MAX)).unwrap(), u64::MAX as f64);
    assert_eq!(validate_float(&Value::from(i64::MIN)).unwrap(), i64::MIN as f64);
}
