//! Predicates over dynamic values.

use serde_json::Value;

use crate::merge::Kind;

pub fn is_array(value: &Value) -> bool {
    Kind::of(value) == Kind::Sequence
}

pub fn is_object(value: &Value) -> bool {
    Kind::of(value) == Kind::Mapping
}

pub fn is_boolean(value: &Value) -> bool {
    value.is_boolean()
}

pub fn is_number(value: &Value) -> bool {
    value.is_number()
}

pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

pub fn is_null(value: &Value) -> bool {
    value.is_null()
}

/// `true` for a slot that holds no value at all.
pub fn is_undefined(value: Option<&Value>) -> bool {
    Kind::from(value) == Kind::Absent
}

pub fn is_null_or_undefined(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

/// Null, boolean, number or string.
pub fn is_primitive(value: &Value) -> bool {
    Kind::of(value) == Kind::Scalar
}

/// A number with no fractional part that fits in a signed 32-bit integer.
///
/// Numeric strings are not integers.
pub fn is_int(value: &Value) -> bool {
    let Value::Number(n) = value else {
        return false;
    };

    if let Some(i) = n.as_i64() {
        return i32::try_from(i).is_ok();
    }
    if n.as_u64().is_some() {
        // only reached above i64::MAX
        return false;
    }

    n.as_f64().is_some_and(|f| {
        f.fract() == 0.0 && f >= f64::from(i32::MIN) && f <= f64::from(i32::MAX)
    })
}

/// `null` or the empty string.
pub fn is_true_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Empty in the loose sense: null, `""`, `{}`, `[]`, `0` or `false`.
pub fn is_empty(value: &Value) -> bool {
    if is_true_empty(value) {
        return true;
    }

    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Bool(b) => !b,
        _ => false,
    }
}
