use jayson_strict::json::Value;
use jayson_strict::{validate_integer, ValueKind};

fn nested_array(depth: usize) -> Value {
    let mut value = Value::Null;
    for _ in 0..depth {
        value = Value::Array(vec![value]);
    }
    value
}

// Rejecting a very deep document clones it into the error; both copies must
// be reported and freed without recursing.
#[test]
fn rejects_deeply_nested_array() {
    let handle = std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(|| {
            let value = nested_array(100_000);
            let err = validate_integer(&value).unwrap_err();
            assert_eq!(err.actual_kind(), ValueKind::Array);

            let message = err.to_string();
            assert!(message.starts_with("Expected integer, but got array: [[[["));
            assert!(message.ends_with("null]]]]"));
            assert_eq!(message.len(), "Expected integer, but got array: ".len() + 100_000 * 2 + 4);

            drop(value);
            drop(err);
        })
        .unwrap();
    handle.join().unwrap();
}
