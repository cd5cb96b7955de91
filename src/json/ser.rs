use crate::json::{Number, Value};
use alloc::string::String;

/// Appends the compact JSON encoding of `value` to `out`.
///
/// Nested arrays and objects are walked with an explicit stack so that very
/// deep documents cannot overflow the call stack while an error message is
/// being rendered.
pub(crate) fn write_value(out: &mut String, value: &Value) {
    enum Frame<'a> {
        Value(&'a Value),
        Key(&'a str),
        Raw(&'static str),
    }

    let mut stack = vec![Frame::Value(value)];
    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Raw(s) => out.push_str(s),
            Frame::Key(k) => {
                write_str(out, k);
                out.push(':');
            }
            Frame::Value(value) => match value {
                Value::Null => out.push_str("null"),
                Value::Bool(true) => out.push_str("true"),
                Value::Bool(false) => out.push_str("false"),
                Value::Number(n) => write_number(out, n),
                Value::String(s) => write_str(out, s),
                Value::Array(array) => {
                    out.push('[');
                    stack.push(Frame::Raw("]"));
                    for (i, element) in array.iter().enumerate().rev() {
                        stack.push(Frame::Value(element));
                        if i > 0 {
                            stack.push(Frame::Raw(","));
                        }
                    }
                }
                Value::Object(object) => {
                    out.push('{');
                    stack.push(Frame::Raw("}"));
                    for (i, (key, element)) in object.iter().enumerate().rev() {
                        stack.push(Frame::Value(element));
                        stack.push(Frame::Key(key));
                        if i > 0 {
                            stack.push(Frame::Raw(","));
                        }
                    }
                }
            },
        }
    }
}

fn write_number(out: &mut String, n: &Number) {
    match *n {
        Number::U64(n) => out.push_str(itoa::Buffer::new().format(n)),
        Number::I64(n) => out.push_str(itoa::Buffer::new().format(n)),
        Number::F64(n) => {
            if n.is_finite() {
                out.push_str(ryu::Buffer::new().format_finite(n));
            } else {
                out.push_str("null");
            }
        }
    }
}

const HEX: &[u8; 16] = b"0123456789abcdef";

fn write_str(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            ch if (ch as u32) < 0x20 => {
                let byte = ch as u8;
                out.push_str("\\u00");
                out.push(HEX[(byte >> 4) as usize] as char);
                out.push(HEX[(byte & 0xf) as usize] as char);
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
}
