//! Legacy scalar casts applied to raw request values.

use serde_json::Value;

/// Integer cast with the legacy leading-prefix rule.
///
/// - strings: leading whitespace skipped, longest numeric prefix read
///   (`"12abc"` is 12, `"3.9"` is 3, `"1e2"` is 100, `"abc"` is 0)
/// - numbers: truncated toward zero
/// - `true` is 1; `false` and `null` are 0
/// - arrays and objects: 0 when empty, otherwise 1
pub fn to_int(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        Value::Bool(b) => i64::from(*b),
        Value::Number(n) => n
            .as_i64()
            .unwrap_or_else(|| n.as_f64().map(truncate).unwrap_or(0)),
        Value::String(s) => numeric_prefix(s).map(truncate).unwrap_or(0),
        Value::Array(a) => i64::from(!a.is_empty()),
        Value::Object(o) => i64::from(!o.is_empty()),
    }
}

/// Text cast for string-valued parameters. Arrays, objects and `null` are empty.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn truncate(f: f64) -> i64 {
    if f.is_finite() { f.trunc() as i64 } else { 0 }
}

/// Longest prefix of `s` (after leading whitespace) that reads as a decimal number.
fn numeric_prefix(s: &str) -> Option<f64> {
    let t = s.trim_start();
    let b = t.as_bytes();
    let mut i = 0;

    if i < b.len() && matches!(b[i], b'+' | b'-') {
        i += 1;
    }
    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }
    if digits == 0 {
        return None;
    }
    if i < b.len() && matches!(b[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < b.len() && matches!(b[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    t[..i].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_use_leading_numeric_prefix() {
        assert_eq!(to_int(&json!("42")), 42);
        assert_eq!(to_int(&json!("  7")), 7);
        assert_eq!(to_int(&json!("12abc")), 12);
        assert_eq!(to_int(&json!("3.9")), 3);
        assert_eq!(to_int(&json!("-3.9")), -3);
        assert_eq!(to_int(&json!("1e2")), 100);
        assert_eq!(to_int(&json!("1e")), 1);
        assert_eq!(to_int(&json!(".5")), 0);
        assert_eq!(to_int(&json!("5.")), 5);
    }

    #[test]
    fn non_numeric_strings_become_zero() {
        assert_eq!(to_int(&json!("abc")), 0);
        assert_eq!(to_int(&json!("")), 0);
        assert_eq!(to_int(&json!("-")), 0);
        assert_eq!(to_int(&json!(".")), 0);
    }

    #[test]
    fn other_json_kinds() {
        assert_eq!(to_int(&json!(null)), 0);
        assert_eq!(to_int(&json!(true)), 1);
        assert_eq!(to_int(&json!(false)), 0);
        assert_eq!(to_int(&json!(9.99)), 9);
        assert_eq!(to_int(&json!([])), 0);
        assert_eq!(to_int(&json!([3])), 1);
    }

    #[test]
    fn text_cast() {
        assert_eq!(to_text(&json!("price")), "price");
        assert_eq!(to_text(&json!(12)), "12");
        assert_eq!(to_text(&json!(true)), "1");
        assert_eq!(to_text(&json!(null)), "");
        assert_eq!(to_text(&json!(["a"])), "");
    }
}
