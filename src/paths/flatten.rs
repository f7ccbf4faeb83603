//! Value flattening.

use serde_json::Value;
use std::collections::HashMap;

/// Flatten a nested value into a one-level map keyed by dot-joined paths.
///
/// Leaf values are cloned unchanged. Array elements are keyed by index
/// position, consistent with the dotted-path syntax used to address them.
/// Empty objects and arrays are kept as leaves under their own path. A
/// scalar at the root lands under the empty path.
pub fn flatten(value: &Value) -> HashMap<String, Value> {
    let mut flat = HashMap::new();
    flatten_into(&mut flat, "", value);
    flat
}

fn flatten_into(flat: &mut HashMap<String, Value>, prefix: &str, value: &Value) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                flatten_into(flat, &join(prefix, key), child);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(flat, &join(prefix, &index.to_string()), child);
            }
        }
        leaf => {
            flat.insert(prefix.to_string(), leaf.clone());
        }
    }
}

fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}.{segment}")
    }
}

/// Look up the value addressed by a dotted path, walking objects by key
/// and arrays by index position.
///
/// Unlike [`flatten`], this also reaches container nodes: for
/// `{"a": {"b": 1}}`, the path `"a"` yields the inner object, which the
/// flattened map only represents through its leaves.
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}
