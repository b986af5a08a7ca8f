//! Scalar field values and the loose comparison used by sorting and filtering.
//!
//! Records arrive from query strings and third-party JSON, so the same logical
//! number may show up as `15`, `15.0` or `"15"`. Comparisons therefore treat
//! numeric strings as numbers:
//!
//! - number vs number: numeric
//! - numeric string vs number or numeric string: numeric
//! - anything else: numbers rank below text, text compares byte-wise
//!
//! The result is a total order, which the stable sort relies on.

use core::cmp::Ordering;
use core::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single field value: integer, float or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Convert a JSON value into a scalar.
    ///
    /// Strings and numbers map directly; booleans become `1`/`0`. Arrays,
    /// objects and `null` have no scalar form.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Scalar::Text(s.clone())),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Some(Scalar::Int(i)),
                None => n.as_f64().map(Scalar::Float),
            },
            Value::Bool(b) => Some(Scalar::Int(i64::from(*b))),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Numeric reading of this value, if it has one. Integral text that fits
    /// an `i64` stays integral so large ids compare exactly.
    fn numeric(&self) -> Option<Number> {
        match self {
            Scalar::Int(i) => Some(Number::Int(*i)),
            Scalar::Float(f) => Some(Number::Float(*f)),
            Scalar::Text(s) => match s.trim().parse::<i64>() {
                Ok(i) => Some(Number::Int(i)),
                Err(_) => parse_numeric(s).map(Number::Float),
            },
        }
    }

    /// Legacy falsiness: `0`, `0.0`, `""` and `"0"` count as "not supplied".
    pub fn is_falsy(&self) -> bool {
        match self {
            Scalar::Int(i) => *i == 0,
            Scalar::Float(f) => *f == 0.0,
            Scalar::Text(s) => s.is_empty() || s == "0",
        }
    }

    /// Three-way loose comparison (see module docs).
    pub fn loose_cmp(&self, other: &Scalar) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.to_string().cmp(&other.to_string()),
        }
    }

    /// Loose equality: `"10" == 10`, `"1e1" == 10.0`, `"abc" != 0`.
    pub fn loose_eq(&self, other: &Scalar) -> bool {
        self.loose_cmp(other) == Ordering::Equal
    }
}

/// Compare two possibly-absent field values. Absent sorts below every value.
pub fn cmp_fields(a: Option<&Scalar>, b: Option<&Scalar>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.loose_cmp(b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[derive(Debug, Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Exact comparison of the represented values; no `i64 -> f64` rounding.
    fn cmp(self, other: Number) -> Ordering {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.cmp(&b),
            (Number::Float(a), Number::Float(b)) => cmp_f64(a, b),
            (Number::Int(a), Number::Float(b)) => cmp_int_float(a, b),
            (Number::Float(a), Number::Int(b)) => cmp_int_float(b, a).reverse(),
        }
    }
}

// NaN ranks above every number and equal to itself.
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

fn cmp_int_float(i: i64, f: f64) -> Ordering {
    if f.is_nan() || f >= TWO_POW_63 {
        return Ordering::Less;
    }
    if f < -TWO_POW_63 {
        return Ordering::Greater;
    }
    let whole = f.trunc();
    // `whole` is integral and inside the i64 range, so the cast is exact.
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => cmp_f64(whole, f),
        unequal => unequal,
    }
}

/// Parse a whole string as a finite decimal number, allowing surrounding
/// whitespace. Hex, `inf`, `nan` and trailing garbage are rejected.
pub fn parse_numeric(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() || !t.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    if !t
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    t.parse::<f64>().ok().filter(|f| f.is_finite())
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(i64::from(v))
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Text(v)
    }
}
