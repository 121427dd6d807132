//! Helpers used alongside the pipeline by model code.

use crate::common::*;
use modelshift::{allocate_name, content_hash, generate_id, merge_defaults, JsonSource};
use proptest::prelude::*;
use serde_json::json;

#[test]
fn allocate_keeps_free_name() {
    assert_eq!(allocate_name("grid", &["keyboard", "home"]), "grid");
}

#[test]
fn allocate_appends_next_counter() {
    let existing = ["grid", "grid (1)", "grid (2)"];
    assert_eq!(allocate_name("grid", &existing), "grid (3)");
}

proptest! {
    #[test]
    fn allocate_after_k_copies_returns_k_plus_one(base in "[a-zA-Z]{1,12}", k in 0usize..30) {
        let mut existing = vec![base.clone()];
        existing.extend((1..=k).map(|n| format!("{} ({})", base, n)));
        prop_assert_eq!(allocate_name(&base, &existing), format!("{} ({})", base, k + 1));
    }

    #[test]
    fn hash_ignores_identity_fields(a in any::<i64>(), id in "[a-z0-9]{0,10}") {
        let plain = json!({"a": a});
        let tagged = json!({"a": a, "_id": id.clone(), "_rev": id.clone(), "id": id});
        prop_assert_eq!(content_hash(&plain), content_hash(&tagged));
    }
}

#[test]
fn merge_only_whitelisted_missing_fields() {
    let mut target = ModelObject::new();
    let source = obj(json!({"a": 1, "b": 2}));
    merge_defaults(&mut target, Some(&source), Some(&["a"][..]));
    assert_eq!(target.into_value(), json!({"a": 1}));

    let mut target = obj(json!({"a": 0}));
    merge_defaults(&mut target, Some(&obj(json!({"a": 1}))), Some(&["a"][..]));
    assert_eq!(target.into_value(), json!({"a": 0}));
}

#[test]
fn rebuilt_object_keeps_content_hash() {
    // Rebuild an object from partial properties plus its old instance; the
    // new revision must not look like a content change.
    let old = obj(json!({"_id": "grid-1", "_rev": "4-a", "label": "home", "rows": 3}));
    let mut rebuilt = obj(json!({"_id": "grid-1", "_rev": "5-b", "label": "home"}));
    merge_defaults(&mut rebuilt, Some(&old), Some(&["label", "rows"][..]));

    assert_eq!(
        content_hash(&rebuilt.into_value()),
        content_hash(&old.into_value())
    );
}

#[test]
fn json_source_feeds_pipeline_objects() {
    let encoded = serde_json::to_string(&version_string(2, 1, 0)).unwrap();
    let text = format!(r#"{{"modelVersion":{},"label":"x"}}"#, encoded);
    let object = JsonSource::from(text).into_object().unwrap();
    assert_eq!(object.version(), Version::new(2, 1, 0));

    let passthrough = JsonSource::from(json!({"label": "y"})).into_object().unwrap();
    assert_eq!(passthrough["label"], "y");
}

#[test]
fn generated_ids_are_prefixed_and_distinct() {
    let a = generate_id(Some("grid"));
    let b = generate_id(Some("grid"));
    assert!(a.starts_with("grid-"));
    assert_ne!(a, b);
    assert!(generate_id(None).starts_with("id-"));
}
