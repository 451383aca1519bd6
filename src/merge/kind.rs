//! Shape classification for dynamic values.

use serde_json::Value;

/// What kind of value sits in a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Mapping,
    Sequence,
    Scalar,
    Absent,
}

impl Kind {
    /// Classify a present value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Kind::Mapping,
            Value::Array(_) => Kind::Sequence,
            _ => Kind::Scalar,
        }
    }

    pub fn is_container(self) -> bool {
        matches!(self, Kind::Mapping | Kind::Sequence)
    }
}

impl From<Option<&Value>> for Kind {
    fn from(value: Option<&Value>) -> Self {
        value.map_or(Kind::Absent, Kind::of)
    }
}

/// Truthiness as the merge rules see it.
///
/// `null`, `false`, numeric zero and the empty string are falsy. Mappings
/// and sequences are always truthy, even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
