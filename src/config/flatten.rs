//! Nested-mapping flattening
//!
//! Converts a nested configuration mapping into a flat mapping of
//! dot-joined path keys to leaf values. The report module relies on the
//! `BTreeMap` ordering being lexicographic over the full dotted key.

use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

/// Flatten a nested mapping using the default `.` separator
///
/// Each key of the result is the dot-joined path from the root to a
/// non-mapping value. Sequences are treated as opaque leaves. Keys that
/// themselves contain the separator are not escaped.
pub fn flatten_config(config: &Mapping) -> BTreeMap<String, Value> {
    flatten_config_with(config, ".")
}

/// Flatten a nested mapping with an explicit separator
pub fn flatten_config_with(config: &Mapping, sep: &str) -> BTreeMap<String, Value> {
    let mut flat = BTreeMap::new();
    flatten_into(config, "", sep, &mut flat);
    flat
}

fn flatten_into(config: &Mapping, parent: &str, sep: &str, flat: &mut BTreeMap<String, Value>) {
    for (key, value) in config {
        let key = render_value(key);
        let new_key = if parent.is_empty() {
            key
        } else {
            format!("{parent}{sep}{key}")
        };

        match value {
            Value::Mapping(nested) => flatten_into(nested, &new_key, sep, flat),
            leaf => {
                flat.insert(new_key, leaf.clone());
            }
        }
    }
}

/// Render a YAML value for report output
///
/// Strings print bare, scalars through their native representation,
/// sequences as `[a, b, c]` with elements rendered recursively.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(seq) => {
            let items: Vec<String> = seq.iter().map(render_value).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(map) => {
            let items: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", render_value(k), render_value(v)))
                .collect();
            format!("{{{}}}", items.join(", "))
        }
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, render_value(&tagged.value)),
    }
}
