//! Integration tests for schema inspection commands

use ficbridge_app::{describe_schema, list_resources};
use serde_json::{json, Map, Value};

fn values(raw: Value) -> Map<String, Value> {
    raw.as_object().cloned().unwrap_or_default()
}

#[test]
fn every_resource_lists_unique_operations() {
    for resource in list_resources() {
        let mut values: Vec<&str> = resource.operations.iter().map(|op| op.value.as_str()).collect();
        let total = values.len();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), total, "duplicate operation in {}", resource.name);
    }
}

#[test]
fn described_schema_is_stable() {
    let first = serde_json::to_value(describe_schema(None).expect("schema")).expect("json");
    let second = serde_json::to_value(describe_schema(None).expect("schema")).expect("json");

    assert_eq!(first, second);
}

#[test]
fn limit_is_visible_only_without_return_all() {
    let schema = describe_schema(Some("supplier")).expect("schema");
    let visible = |raw: Value| -> Vec<String> {
        schema.visible_fields(&values(raw)).into_iter().map(|field| field.key.clone()).collect()
    };

    let paged = visible(json!({ "resource": "supplier", "operation": "getAll", "returnAll": false }));
    let all = visible(json!({ "resource": "supplier", "operation": "getAll", "returnAll": true }));

    assert!(paged.contains(&"limit".to_string()));
    assert!(!all.contains(&"limit".to_string()));
    assert!(all.contains(&"returnAll".to_string()));
}
