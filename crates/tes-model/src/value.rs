//! Generic operations over the plain `serde_json::Value` form of a record.

use serde_json::Value;

/// Untyped key-value mapping, as used for `tags`, `metadata` and construction input.
pub type Mapping = serde_json::Map<String, Value>;

/// Recursively remove absent (`null`) entries.
///
/// Arrays lose their `null` elements and objects lose keys whose value is `null`;
/// the remaining children are pruned the same way. Containers that end up empty are kept.
pub fn drop_empty(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .filter(|item| !item.is_null())
                .map(drop_empty)
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, drop_empty(v)))
                .collect(),
        ),
        other => other,
    }
}

/// Recursively reorder object keys alphabetically.
pub fn sort_keys(value: &mut Value) {
    match value {
        Value::Array(items) => items.iter_mut().for_each(sort_keys),
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = std::mem::take(map).into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            for (_, v) in entries.iter_mut() {
                sort_keys(v);
            }
            *map = entries.into_iter().collect();
        }
        _ => {}
    }
}

/// Short runtime type name of a value, for diagnostics.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_i64() => "int",
        Value::Number(n) if n.is_u64() => "int out of range",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn drops_null_keys_and_elements() {
        let pruned = drop_empty(json!({
            "id": "t1",
            "name": null,
            "tags": {"a": null, "b": "x"},
            "volumes": ["/data", null, "/tmp"],
        }));

        assert_eq!(
            pruned,
            json!({"id": "t1", "tags": {"b": "x"}, "volumes": ["/data", "/tmp"]})
        );
    }

    #[test]
    fn keeps_containers_emptied_by_pruning() {
        let pruned = drop_empty(json!({"tags": {"a": null}, "tasks": [], "logs": [null]}));
        assert_eq!(pruned, json!({"tags": {}, "tasks": [], "logs": []}));
    }

    #[test]
    fn prunes_inside_nested_lists() {
        let pruned = drop_empty(json!([[null, 1], {"k": null}, null]));
        assert_eq!(pruned, json!([[1], {}]));
    }

    #[test]
    fn pruning_is_a_fixed_point() {
        let once = drop_empty(json!({
            "a": [null, {"b": null, "c": [null]}],
            "d": null,
            "e": {"f": {"g": null}},
        }));
        let twice = drop_empty(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn sort_keys_is_recursive() {
        let mut value = json!({"b": 1, "a": {"z": 1, "y": [{"d": 1, "c": 2}]}});
        sort_keys(&mut value);

        let text = serde_json::to_string(&value).unwrap();
        assert_eq!(text, r#"{"a":{"y":[{"c":2,"d":1}],"z":1},"b":1}"#);
    }

    #[test]
    fn kind_names() {
        assert_eq!(kind_of(&json!(null)), "null");
        assert_eq!(kind_of(&json!(true)), "bool");
        assert_eq!(kind_of(&json!(5)), "int");
        assert_eq!(kind_of(&json!(-5)), "int");
        assert_eq!(kind_of(&json!(u64::MAX)), "int out of range");
        assert_eq!(kind_of(&json!(1.5)), "float");
        assert_eq!(kind_of(&json!("s")), "string");
        assert_eq!(kind_of(&json!([])), "list");
        assert_eq!(kind_of(&json!({})), "mapping");
    }
}
