/// A JSON number, split the way decoders report it.
///
/// Integers keep their exact value; only `F64` carries a fractional part or
/// an exponent in the source document.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Number {
    U64(u64),
    I64(i64),
    F64(f64),
}

impl Number {
    pub fn is_integer(&self) -> bool {
        !matches!(self, Number::F64(_))
    }

    /// The exact integer value, or `None` for floats.
    pub fn as_i128(&self) -> Option<i128> {
        match *self {
            Number::U64(n) => Some(i128::from(n)),
            Number::I64(n) => Some(i128::from(n)),
            Number::F64(_) => None,
        }
    }

    /// Widens to `f64`. Integers beyond 2^53 in magnitude round to the
    /// nearest representable float.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::U64(n) => n as f64,
            Number::I64(n) => n as f64,
            Number::F64(n) => n,
        }
    }
}

impl From<i64> for Number {
    /// Non-negative integers are stored as `U64`, matching what JSON decoders
    /// produce for the same literal.
    fn from(n: i64) -> Self {
        if n < 0 {
            Number::I64(n)
        } else {
            Number::U64(n as u64)
        }
    }
}
