use serde_json::Value;

/// Depth-first, pre-order search for the first value reachable under `key`.
///
/// A key present directly on the current object wins before any recursion,
/// even when deeper occurrences exist and even when its value is null -
/// presence, not truthiness, is the match condition. `None` strictly means
/// "no such key anywhere reachable"; a present null field comes back as
/// `Some(&Value::Null)`.
///
/// Scalars contribute nothing. Objects are checked for the key directly,
/// then their fields are visited in the map's native enumeration order.
/// Arrays cannot carry the key themselves, so their elements are visited
/// left to right.
pub fn find_key<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    match root {
        Value::Object(fields) => {
            if let Some(value) = fields.get(key) {
                return Some(value);
            }
            fields.values().find_map(|child| find_key(child, key))
        }
        Value::Array(items) => items.iter().find_map(|item| find_key(item, key)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn finds_deeply_nested_key() {
        let doc = json!({ "a": { "b": { "c": 5 } } });
        assert_eq!(find_key(&doc, "c"), Some(&json!(5)));
    }

    #[test]
    fn missing_key_yields_none() {
        let doc = json!({ "a": 1 });
        assert_eq!(find_key(&doc, "z"), None);
    }

    #[test]
    fn direct_key_wins_over_deeper_occurrences() {
        let doc = json!({
            "token": null,
            "nested": { "token": "deep" }
        });
        // Top-level null is a real match; recursion must not run.
        assert_eq!(find_key(&doc, "token"), Some(&Value::Null));
    }

    #[test]
    fn descends_through_arrays() {
        let doc = json!({ "entries": [ { "x": 1 }, { "target": "hit" } ] });
        assert_eq!(find_key(&doc, "target"), Some(&json!("hit")));
    }

    #[test]
    fn non_object_root_yields_none() {
        assert_eq!(find_key(&Value::Null, "a"), None);
        assert_eq!(find_key(&json!(42), "a"), None);
        assert_eq!(find_key(&json!("a"), "a"), None);
    }

    #[test]
    fn first_match_in_enumeration_order_wins() {
        let doc = json!({
            "alpha": { "hit": 1 },
            "beta": { "hit": 2 }
        });
        assert_eq!(find_key(&doc, "hit"), Some(&json!(1)));
    }
}
