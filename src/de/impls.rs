use crate::de::{Deserialize, ScalarVisitor};
use crate::json::Value;
use crate::kind::ValueKind;
use crate::path::Path;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use std::collections::HashMap;
use std::hash::BuildHasher;

impl Deserialize for () {
    fn deserialize_from_value<V: ScalarVisitor>(
        value: &Value,
        visitor: &V,
        path: &mut Path,
    ) -> Result<Self, V::Error> {
        if value.is_null() {
            Ok(())
        } else {
            Err(visitor.mismatch(&ValueKind::Null, value, path))
        }
    }
}

impl Deserialize for bool {
    fn deserialize_from_value<V: ScalarVisitor>(
        value: &Value,
        visitor: &V,
        path: &mut Path,
    ) -> Result<Self, V::Error> {
        visitor.visit_boolean(value, path)
    }
}

impl Deserialize for String {
    fn deserialize_from_value<V: ScalarVisitor>(
        value: &Value,
        visitor: &V,
        path: &mut Path,
    ) -> Result<Self, V::Error> {
        visitor.visit_string(value, path)
    }
}

// Values that are integers but do not fit the target are reported with the
// target's own name, e.g. `Expected u8, but got integer: 300`.
macro_rules! integer {
    ($($ty:ident)*) => {
        $(
            impl Deserialize for $ty {
                fn deserialize_from_value<V: ScalarVisitor>(
                    value: &Value,
                    visitor: &V,
                    path: &mut Path,
                ) -> Result<Self, V::Error> {
                    let n = visitor.visit_integer(value, path)?;
                    $ty::try_from(n).map_err(|_| visitor.mismatch(&stringify!($ty), value, path))
                }
            }
        )*
    };
}
integer!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl Deserialize for f64 {
    fn deserialize_from_value<V: ScalarVisitor>(
        value: &Value,
        visitor: &V,
        path: &mut Path,
    ) -> Result<Self, V::Error> {
        visitor.visit_float(value, path)
    }
}

impl Deserialize for f32 {
    fn deserialize_from_value<V: ScalarVisitor>(
        value: &Value,
        visitor: &V,
        path: &mut Path,
    ) -> Result<Self, V::Error> {
        let n = visitor.visit_float(value, path)?;
        let narrowed = n as f32;
        if narrowed.is_infinite() && n.is_finite() {
            Err(visitor.mismatch(&"f32", value, path))
        } else {
            Ok(narrowed)
        }
    }
}

impl<T: Deserialize> Deserialize for Option<T> {
    fn deserialize_from_value<V: ScalarVisitor>(
        value: &Value,
        visitor: &V,
        path: &mut Path,
    ) -> Result<Self, V::Error> {
        match value {
            Value::Null => Ok(None),
            _ => T::deserialize_from_value(value, visitor, path).map(Some),
        }
    }
}

impl<T: Deserialize> Deserialize for Box<T> {
    fn deserialize_from_value<V: ScalarVisitor>(
        value: &Value,
        visitor: &V,
        path: &mut Path,
    ) -> Result<Self, V::Error> {
        T::deserialize_from_value(value, visitor, path).map(Box::new)
    }
}

impl<T: Deserialize> Deserialize for Vec<T> {
    fn deserialize_from_value<V: ScalarVisitor>(
        value: &Value,
        visitor: &V,
        path: &mut Path,
    ) -> Result<Self, V::Error> {
        let array = match value {
            Value::Array(array) => array,
            _ => return Err(visitor.mismatch(&ValueKind::Array, value, path)),
        };

        let mut result = Vec::with_capacity(array.len());
        for (i, element) in array.iter().enumerate() {
            path.push(i);
            let element = T::deserialize_from_value(element, visitor, path);
            path.pop();
            result.push(element?);
        }
        Ok(result)
    }
}

impl<T: Deserialize> Deserialize for BTreeMap<String, T> {
    fn deserialize_from_value<V: ScalarVisitor>(
        value: &Value,
        visitor: &V,
        path: &mut Path,
    ) -> Result<Self, V::Error> {
        let object = match value {
            Value::Object(object) => object,
            _ => return Err(visitor.mismatch(&ValueKind::Object, value, path)),
        };

        let mut result = BTreeMap::new();
        for (key, element) in object {
            path.push(key.as_str());
            let element = T::deserialize_from_value(element, visitor, path);
            path.pop();
            result.insert(key.clone(), element?);
        }
        Ok(result)
    }
}

impl<T, S> Deserialize for HashMap<String, T, S>
where
    T: Deserialize,
    S: BuildHasher + Default,
{
    fn deserialize_from_value<V: ScalarVisitor>(
        value: &Value,
        visitor: &V,
        path: &mut Path,
    ) -> Result<Self, V::Error> {
        let object = match value {
            Value::Object(object) => object,
            _ => return Err(visitor.mismatch(&ValueKind::Object, value, path)),
        };

        let mut result = HashMap::with_capacity_and_hasher(object.len(), S::default());
        for (key, element) in object {
            path.push(key.as_str());
            let element = T::deserialize_from_value(element, visitor, path);
            path.pop();
            result.insert(key.clone(), element?);
        }
        Ok(result)
    }
}
