//! Adapter configuration resolution.
//!
//! An adapter config names the active adapter under `type` and keeps one
//! block per adapter keyed by that name:
//!
//! ```toml
//! type = "file"
//! [file]
//! path = "/var/cache"
//! [redis]
//! port = 6379
//! ```
//!
//! A block that carries its own `handle` is written flat instead, with
//! `type` naming it. Layers are normalized into the keyed form, deep merged
//! left to right, and the block selected by the final `type` is returned.

use crate::merge::{extend, is_truthy, merge_all};
use serde_json::{Map, Value};

/// Adapter name used when a config does not specify one.
pub const DEFAULT_ADAPTER_TYPE: &str = "_";

/// Resolve the effective adapter block from a base config and overrides.
///
/// Overrides may be a string (switches the adapter type), a mapping with a
/// `type` (a keyed config like the base), or a mapping without one (merged
/// into the base adapter's block). Falsy overrides are ignored.
pub fn parse_adapter_config(config: &Value, overrides: &[Value]) -> Value {
    let mut base = Value::Object(Map::new());
    extend(&mut base, std::slice::from_ref(config));
    if !base.is_object() {
        base = Value::Object(Map::new());
    }

    if !has_truthy(&base, "type") {
        set_key(&mut base, "type", Value::from(DEFAULT_ADAPTER_TYPE));
    }
    let base = rekey_handler(base);
    let base_type = type_name(&base);

    let mut layers = Vec::with_capacity(overrides.len() + 1);
    layers.push(base);
    layers.extend(
        overrides
            .iter()
            .map(|item| normalize_override(item, &base_type)),
    );

    let merged = merge_all(&layers);
    let active = type_name(&merged);

    let mut block = match merged.get(&active) {
        Some(value) if is_truthy(value) => value.clone(),
        _ => Value::Object(Map::new()),
    };
    if !block.is_object() {
        tracing::debug!("Adapter block '{}' is not a mapping, replacing", active);
        block = Value::Object(Map::new());
    }
    set_key(&mut block, "type", Value::from(active));
    block
}

fn normalize_override(item: &Value, base_type: &str) -> Value {
    if !is_truthy(item) {
        return Value::Object(Map::new());
    }

    let item = match item {
        Value::String(name) => {
            let mut map = Map::new();
            map.insert("type".to_string(), Value::from(name.as_str()));
            Value::Object(map)
        }
        other => other.clone(),
    };

    if !has_truthy(&item, "type") {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::from(base_type));
        map.insert(base_type.to_string(), item);
        return Value::Object(map);
    }

    rekey_handler(item)
}

/// Turn a flat `{type: T, handle, ..}` block into `{type: T, T: {handle, ..}}`.
fn rekey_handler(mut config: Value) -> Value {
    if !has_truthy(&config, "handle") {
        return config;
    }

    let name = type_name(&config);
    if let Some(map) = config.as_object_mut() {
        map.remove("type");
    }

    let mut keyed = Map::new();
    keyed.insert("type".to_string(), Value::from(name.as_str()));
    keyed.insert(name, config);
    Value::Object(keyed)
}

fn has_truthy(value: &Value, key: &str) -> bool {
    value.get(key).map(is_truthy).unwrap_or(false)
}

fn type_name(value: &Value) -> String {
    match value.get("type") {
        Some(Value::String(name)) => name.clone(),
        Some(other) if is_truthy(other) => other.to_string(),
        _ => DEFAULT_ADAPTER_TYPE.to_string(),
    }
}

fn set_key(value: &mut Value, key: &str, entry: Value) {
    if let Some(map) = value.as_object_mut() {
        map.insert(key.to_string(), entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_selects_active_block() {
        let config = json!({
            "type": "file",
            "file": {"path": "/tmp"},
            "redis": {"port": 6379}
        });
        assert_eq!(
            parse_adapter_config(&config, &[]),
            json!({"path": "/tmp", "type": "file"})
        );
    }

    #[test]
    fn test_missing_type_defaults() {
        let config = json!({"_": {"a": 1}});
        assert_eq!(
            parse_adapter_config(&config, &[]),
            json!({"a": 1, "type": "_"})
        );
    }

    #[test]
    fn test_null_config() {
        assert_eq!(
            parse_adapter_config(&Value::Null, &[]),
            json!({"type": "_"})
        );
    }

    #[test]
    fn test_string_override_switches_type() {
        let config = json!({
            "type": "file",
            "file": {"path": "/tmp"},
            "redis": {"port": 6379}
        });
        assert_eq!(
            parse_adapter_config(&config, &[json!("redis")]),
            json!({"port": 6379, "type": "redis"})
        );
    }

    #[test]
    fn test_untyped_override_merges_into_base_block() {
        let config = json!({"type": "file", "file": {"path": "/tmp", "mode": 1}});
        assert_eq!(
            parse_adapter_config(&config, &[json!({"path": "/var"})]),
            json!({"path": "/var", "mode": 1, "type": "file"})
        );
    }

    #[test]
    fn test_typed_override() {
        let config = json!({"type": "file", "file": {"path": "/tmp"}});
        let ext = json!({"type": "redis", "redis": {"port": 1}});
        assert_eq!(
            parse_adapter_config(&config, &[ext]),
            json!({"port": 1, "type": "redis"})
        );
    }

    #[test]
    fn test_flat_handle_config_is_rekeyed() {
        let config = json!({"type": "memory", "handle": "MemoryStore", "limit": 10});
        assert_eq!(
            parse_adapter_config(&config, &[json!({"limit": 20})]),
            json!({"handle": "MemoryStore", "limit": 20, "type": "memory"})
        );
    }

    #[test]
    fn test_flat_handle_override() {
        let config = json!({"type": "file", "file": {"path": "/tmp"}});
        let ext = json!({"type": "db", "handle": "Db", "host": "localhost"});
        assert_eq!(
            parse_adapter_config(&config, &[ext]),
            json!({"handle": "Db", "host": "localhost", "type": "db"})
        );
    }

    #[test]
    fn test_falsy_overrides_ignored() {
        let config = json!({"type": "file", "file": {"path": "/tmp"}});
        assert_eq!(
            parse_adapter_config(&config, &[Value::Null, json!(""), json!(false)]),
            json!({"path": "/tmp", "type": "file"})
        );
    }

    #[test]
    fn test_missing_block_yields_type_only() {
        let config = json!({"type": "file"});
        assert_eq!(
            parse_adapter_config(&config, &[]),
            json!({"type": "file"})
        );
    }

    #[test]
    fn test_base_is_not_mutated() {
        let config = json!({"type": "file", "file": {"path": "/tmp"}});
        let before = config.clone();
        let _ = parse_adapter_config(&config, &[json!({"path": "/var"})]);
        assert_eq!(config, before);
    }
}
