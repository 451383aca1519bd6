//! Recursive structural merge.

use serde_json::{Map, Value};

use crate::merge::kind::{is_truthy, Kind};

/// Merge `sources` into `target`, left to right, and return the target.
///
/// - Falsy sources are skipped.
/// - A value equal to the (truthy) value already in the target is skipped.
/// - A mapping is merged into the existing mapping at that key, or into a
///   fresh one when the existing value is not a mapping.
/// - A sequence is always rebuilt from a fresh, empty sequence, so a later
///   sequence replaces an earlier one instead of overlaying it by index.
/// - Anything else overwrites.
///
/// A target that is not a container is reset first: to an empty sequence
/// when the first source is a sequence, otherwise to an empty mapping.
/// Sequence sources merged into a mapping contribute their indices as
/// string keys; a mapping source turns a sequence target into a mapping
/// keyed by index.
pub fn extend<'a>(target: &'a mut Value, sources: &[Value]) -> &'a mut Value {
    if !Kind::of(target).is_container() {
        *target = match sources.first().map(Kind::of) {
            Some(Kind::Sequence) => Value::Array(Vec::new()),
            _ => Value::Object(Map::new()),
        };
    }

    for source in sources.iter().filter(|source| is_truthy(source)) {
        merge_source(target, source);
    }

    target
}

/// Merge `layers` into a fresh value; later layers win.
pub fn merge_all(layers: &[Value]) -> Value {
    let mut merged = Value::Null;
    extend(&mut merged, layers);
    merged
}

fn merge_source(target: &mut Value, source: &Value) {
    if target.is_array() && source.is_object() {
        if let Value::Array(items) = std::mem::take(target) {
            *target = Value::Object(index_keyed(items));
        }
    }

    match target {
        Value::Object(map) => merge_into_mapping(map, source),
        Value::Array(items) => merge_into_sequence(items, source),
        _ => {}
    }
}

fn merge_into_mapping(map: &mut Map<String, Value>, source: &Value) {
    match source {
        Value::Object(entries) => {
            for (key, incoming) in entries {
                assign(map.entry(key.as_str()).or_insert(Value::Null), incoming);
            }
        }
        Value::Array(items) => {
            for (index, incoming) in items.iter().enumerate() {
                assign(map.entry(index.to_string()).or_insert(Value::Null), incoming);
            }
        }
        _ => {}
    }
}

fn merge_into_sequence(items: &mut Vec<Value>, source: &Value) {
    if let Value::Array(incoming_items) = source {
        for (index, incoming) in incoming_items.iter().enumerate() {
            if index >= items.len() {
                items.resize(index + 1, Value::Null);
            }
            assign(&mut items[index], incoming);
        }
    }
}

fn assign(slot: &mut Value, incoming: &Value) {
    if is_truthy(slot) && *slot == *incoming {
        return;
    }

    match Kind::of(incoming) {
        Kind::Mapping => {
            if Kind::of(slot) != Kind::Mapping {
                *slot = Value::Object(Map::new());
            }
            merge_source(slot, incoming);
        }
        Kind::Sequence => {
            let mut fresh = Value::Array(Vec::new());
            merge_source(&mut fresh, incoming);
            *slot = fresh;
        }
        Kind::Scalar | Kind::Absent => *slot = incoming.clone(),
    }
}

fn index_keyed(items: Vec<Value>) -> Map<String, Value> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| (index.to_string(), item))
        .collect()
}
