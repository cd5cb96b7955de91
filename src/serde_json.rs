use crate::json::{Number, Value};
use serde_json::{Number as JNumber, Value as JValue};

impl From<JValue> for Value {
    fn from(value: JValue) -> Self {
        match value {
            JValue::Null => Value::Null,
            JValue::Bool(b) => Value::Bool(b),
            JValue::Number(n) => Value::Number(n.into()),
            JValue::String(s) => Value::String(s),
            JValue::Array(seq) => Value::Array(seq.into_iter().map(Value::from).collect()),
            JValue::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&JValue> for Value {
    fn from(value: &JValue) -> Self {
        Value::from(value.clone())
    }
}

impl From<JNumber> for Number {
    fn from(n: JNumber) -> Self {
        if let Some(n) = n.as_u64() {
            Number::U64(n)
        } else if let Some(n) = n.as_i64() {
            Number::I64(n)
        } else {
            // Without `arbitrary_precision` every remaining number is an f64.
            Number::F64(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::ValueKind;

    fn decode(text: &str) -> Value {
        serde_json::from_str::<JValue>(text).unwrap().into()
    }

    #[test]
    fn number_split() {
        assert_eq!(decode("50"), Value::Number(Number::U64(50)));
        assert_eq!(decode("-78"), Value::Number(Number::I64(-78)));
        assert_eq!(decode("42.0"), Value::Number(Number::F64(42.0)));
        assert_eq!(decode("4e2").kind(), ValueKind::Float);
    }

    #[test]
    fn structure_is_kept() {
        let value = decode(r#"{"b": [1, "x", null], "a": {"c": true}}"#);
        assert_eq!(value.kind(), ValueKind::Object);
        assert_eq!(value.to_json_string(), r#"{"a":{"c":true},"b":[1,"x",null]}"#);
    }
}
