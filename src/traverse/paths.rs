use serde_json::Value;

/// Flatten a navigation tree into every `path` string it contains.
///
/// Pre-order: a node's own path is collected before its children's, siblings
/// left to right, so output order is fully determined by input order. Items
/// without a string `path` contribute nothing themselves but their `items`
/// children are still visited. Anything that is not an array yields an
/// empty list, never an error.
pub fn collect_paths(tree: &Value) -> Vec<String> {
    let mut paths = Vec::new();
    if let Value::Array(items) = tree {
        collect_into(items, &mut paths);
    }
    paths
}

fn collect_into(items: &[Value], paths: &mut Vec<String>) {
    for item in items {
        if let Some(path) = item.get("path").and_then(Value::as_str) {
            paths.push(path.to_string());
        }
        if let Some(Value::Array(children)) = item.get("items") {
            if !children.is_empty() {
                collect_into(children, paths);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn collects_in_pre_order() {
        let tree = json!([
            { "path": "/x", "items": [ { "path": "/x/y" } ] },
            { "path": "/z" }
        ]);
        assert_eq!(collect_paths(&tree), vec!["/x", "/x/y", "/z"]);
    }

    #[test]
    fn empty_and_non_sequence_inputs_yield_nothing() {
        assert!(collect_paths(&json!([])).is_empty());
        assert!(collect_paths(&Value::Null).is_empty());
        assert!(collect_paths(&json!({ "path": "/x" })).is_empty());
        assert!(collect_paths(&json!("nav")).is_empty());
    }

    #[test]
    fn pathless_groups_still_contribute_children() {
        let tree = json!([
            { "label": "Section", "items": [ { "path": "/a" }, { "path": "/b" } ] }
        ]);
        assert_eq!(collect_paths(&tree), vec!["/a", "/b"]);
    }

    #[test]
    fn non_string_paths_are_skipped() {
        let tree = json!([
            { "path": 7 },
            { "path": "/kept" },
            { "path": null }
        ]);
        assert_eq!(collect_paths(&tree), vec!["/kept"]);
    }

    #[test]
    fn empty_items_sequence_is_not_descended() {
        let tree = json!([
            { "path": "/solo", "items": [] }
        ]);
        assert_eq!(collect_paths(&tree), vec!["/solo"]);
    }
}
