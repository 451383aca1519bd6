//! Key removal.

use serde_json::{Map, Value};

/// A list of keys, built from a comma-separated string or a slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyList<'a>(Vec<&'a str>);

impl<'a> KeyList<'a> {
    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|k| *k == key)
    }
}

impl<'a> From<&'a str> for KeyList<'a> {
    fn from(csv: &'a str) -> Self {
        KeyList(
            csv.split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .collect(),
        )
    }
}

impl<'a> From<&'a [&'a str]> for KeyList<'a> {
    fn from(keys: &'a [&'a str]) -> Self {
        KeyList(keys.to_vec())
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for KeyList<'a> {
    fn from(keys: &'a [&'a str; N]) -> Self {
        KeyList(keys.to_vec())
    }
}

impl<'a> From<&'a [String]> for KeyList<'a> {
    fn from(keys: &'a [String]) -> Self {
        KeyList(keys.iter().map(String::as_str).collect())
    }
}

/// Shallow copy of `obj` without the given keys.
pub fn omit<'k>(obj: &Map<String, Value>, keys: impl Into<KeyList<'k>>) -> Map<String, Value> {
    let keys = keys.into();
    obj.iter()
        .filter(|(key, _)| !keys.contains(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Map<String, Value> {
        match json!({"name": "x", "age": 3, "tags": ["a"], "extra": {"k": 1}}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_omit_csv() {
        let result = omit(&sample(), "name, age");
        assert_eq!(
            Value::Object(result),
            json!({"tags": ["a"], "extra": {"k": 1}})
        );
    }

    #[test]
    fn test_omit_list() {
        let result = omit(&sample(), &["tags", "extra"]);
        assert_eq!(Value::Object(result), json!({"name": "x", "age": 3}));
    }

    #[test]
    fn test_omit_owned_list() {
        let keys = vec!["name".to_string()];
        let result = omit(&sample(), keys.as_slice());
        assert!(!result.contains_key("name"));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_omit_unknown_keys() {
        let result = omit(&sample(), "missing,,");
        assert_eq!(result, sample());
    }

    #[test]
    fn test_source_untouched() {
        let source = sample();
        let _ = omit(&source, "name");
        assert!(source.contains_key("name"));
    }
}
