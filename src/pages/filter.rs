use serde_json::Value;

use super::record::PageRecord;

/// Exact-match filter: the records whose `field` holds a value equal to
/// `value`, relative order preserved. No match yields an empty vec, never
/// an error. The input is left untouched.
pub fn filter_eq(records: &[PageRecord], field: &str, value: &Value) -> Vec<PageRecord> {
    records
        .iter()
        .filter(|record| record.get(field) == Some(value))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(raw: Value) -> Vec<PageRecord> {
        PageRecord::from_json_array(raw).unwrap()
    }

    #[test]
    fn matches_exactly_one_record() {
        let input = records(json!([
            { "id": 1, "order": 2 },
            { "id": 2, "order": 1 }
        ]));
        let out = filter_eq(&input, "id", &json!(2));
        assert_eq!(PageRecord::to_json_array(&out), json!([{ "id": 2, "order": 1 }]));
    }

    #[test]
    fn no_match_yields_empty() {
        let input = records(json!([{ "id": 1 }]));
        assert!(filter_eq(&input, "id", &json!(9)).is_empty());
        assert!(filter_eq(&input, "missing", &json!(1)).is_empty());
    }

    #[test]
    fn preserves_relative_order_and_input() {
        let input = records(json!([
            { "kind": "doc", "n": 1 },
            { "kind": "app", "n": 2 },
            { "kind": "doc", "n": 3 }
        ]));
        let out = filter_eq(&input, "kind", &json!("doc"));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].get("n"), Some(&json!(1)));
        assert_eq!(out[1].get("n"), Some(&json!(3)));
        // input untouched
        assert_eq!(input.len(), 3);
    }

    #[test]
    fn null_is_a_matchable_value() {
        let input = records(json!([
            { "flag": null },
            { "flag": true }
        ]));
        let out = filter_eq(&input, "flag", &Value::Null);
        assert_eq!(out.len(), 1);
    }
}
