use crate::json::{Array, Object, Value};
use alloc::string::String;
use alloc::vec::Vec;
use core::mem;

impl Drop for Value {
    fn drop(&mut self) {
        let mut stack = match self {
            Value::Array(array) if !array.is_empty() => mem::take(array),
            Value::Object(object) if !object.is_empty() => mem::take(object).into_values().collect(),
            _ => return,
        };
        // Each popped value has its children moved onto the stack first, so
        // its own drop only ever sees empty containers.
        while let Some(mut value) = stack.pop() {
            match &mut value {
                Value::Array(array) => stack.append(array),
                Value::Object(object) => stack.extend(mem::take(object).into_values()),
                _ => {}
            }
        }
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        enum Task<'a> {
            Visit(&'a Value),
            Array(usize),
            Object(Vec<&'a String>),
        }

        let mut tasks = vec![Task::Visit(self)];
        let mut done: Vec<Value> = Vec::new();
        while let Some(task) = tasks.pop() {
            match task {
                Task::Visit(value) => match value {
                    Value::Null => done.push(Value::Null),
                    Value::Bool(b) => done.push(Value::Bool(*b)),
                    Value::Number(n) => done.push(Value::Number(*n)),
                    Value::String(s) => done.push(Value::String(s.clone())),
                    Value::Array(array) => {
                        tasks.push(Task::Array(array.len()));
                        tasks.extend(array.iter().rev().map(Task::Visit));
                    }
                    Value::Object(object) => {
                        tasks.push(Task::Object(object.keys().collect()));
                        tasks.extend(object.values().rev().map(Task::Visit));
                    }
                },
                Task::Array(len) => {
                    let elements: Array = done.split_off(done.len() - len);
                    done.push(Value::Array(elements));
                }
                Task::Object(keys) => {
                    let values = done.split_off(done.len() - keys.len());
                    let object: Object = keys.into_iter().cloned().zip(values).collect();
                    done.push(Value::Object(object));
                }
            }
        }
        done.pop().unwrap_or_default()
    }
}
