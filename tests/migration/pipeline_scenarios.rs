//! End-to-end conversion scenarios.

use crate::common::*;
use modelshift::{
    convert, ConverterRegistry, MigrationPipeline, MigrationWarning, ModelInput, ModelOutput,
    NamedConverter, VersionRange,
};
use serde_json::json;

fn upgrade_v1_to_v2() -> ConverterChain<()> {
    vec![NamedConverter::new("v1-to-v2", |mut o: ModelObject, _: &()| {
        let name = o.remove("name").unwrap_or(json!(""));
        o.insert("label".to_string(), json!({ "en": name }));
        o.set_version(&Version::new(2, 0, 0));
        Some(o)
    })
    .shared()]
}

fn resolve_by_major(version: &Version) -> ConverterChain<()> {
    match version.major() {
        Some(1) => upgrade_v1_to_v2(),
        _ => Vec::new(),
    }
}

#[test]
fn batch_runs_chain_per_detected_version() {
    init_tracing();
    let first = obj(json!({"modelVersion": r#"{"major":1,"minor":0,"patch":0}"#, "name": "home"}));
    let second = obj(json!({"modelVersion": r#"{"major":2,"minor":0,"patch":0}"#, "label": {"en": "away"}}));

    let out = MigrationPipeline::new(&resolve_by_major).convert_many(vec![first, second.clone()], &());

    assert_eq!(out.len(), 2);
    assert_eq!(out[0]["label"], json!({"en": "home"}));
    assert!(!out[0].contains_key("name"));
    assert_eq!(out[0].version(), Version::new(2, 0, 0));
    assert_eq!(out[1], second);
}

#[test]
fn always_rejecting_converter_empties_batch() {
    init_tracing();
    let resolver = |_: &Version| rejecting_chain::<()>();
    let pipeline = MigrationPipeline::new(&resolver);

    let a = obj(json!({"a": 1}));
    let b = obj(json!({"b": 2}));
    assert!(pipeline.convert_many(vec![a.clone(), b], &()).is_empty());
    assert_eq!(pipeline.convert_one(a, &()), None);
}

#[test]
fn call_shape_is_preserved() {
    let single = convert(
        Some(ModelInput::One(stamped(1, json!({"name": "n"})))),
        Some(&resolve_by_major),
        &(),
    );
    match single {
        Some(ModelOutput::One(Some(o))) => assert_eq!(o.version(), Version::new(2, 0, 0)),
        other => panic!("expected a single object, got {:?}", other),
    }

    let batch = convert(
        Some(ModelInput::Many(vec![stamped(1, json!({"name": "n"}))])),
        Some(&resolve_by_major),
        &(),
    );
    assert!(matches!(batch, Some(ModelOutput::Many(ref v)) if v.len() == 1));
}

#[test]
fn missing_resolver_returns_input_unchanged() {
    let input = vec![obj(json!({"modelVersion": "{bad", "x": 1}))];
    let out = convert::<(), ConverterRegistry<()>>(Some(input.clone().into()), None, &());
    assert_eq!(out.and_then(ModelOutput::into_many), Some(input));
}

/// Options passed to every converter, like a decryption key.
struct DecryptOptions {
    key: &'static str,
}

#[test]
fn options_reach_every_converter_and_drive_rejection() {
    init_tracing();
    let mut registry = ConverterRegistry::<DecryptOptions>::new();
    registry
        .register(
            VersionRange::Any,
            NamedConverter::new("decrypt", |mut o: ModelObject, opts: &DecryptOptions| {
                match o.remove("sealedWith") {
                    Some(key) if key == opts.key => Some(o),
                    Some(_) => None,
                    None => Some(o),
                }
            }),
        )
        .register(
            VersionRange::Below(Version::new(2, 0, 0)),
            NamedConverter::new("stamp-v2", |mut o: ModelObject, _: &DecryptOptions| {
                o.set_version(&Version::new(2, 0, 0));
                Some(o)
            }),
        );

    let input = vec![
        obj(json!({"n": 0, "sealedWith": "k1"})),
        obj(json!({"n": 1, "sealedWith": "other"})),
        obj(json!({"n": 2})),
    ];
    let report = MigrationPipeline::new(&registry).migrate(input, &DecryptOptions { key: "k1" });

    let kept: Vec<_> = report.objects.iter().map(|o| o["n"].clone()).collect();
    assert_eq!(kept, vec![json!(0), json!(2)]);
    assert!(report.objects.iter().all(|o| o.version() == Version::new(2, 0, 0)));
    assert_eq!(report.rejections.len(), 1);
    assert_eq!(report.rejections[0].index, 1);
    assert_eq!(report.rejections[0].converter, "decrypt");
}

#[test]
fn multi_step_upgrade_from_unversioned() {
    let mut registry = ConverterRegistry::<()>::new();
    registry
        .register(
            VersionRange::Unknown,
            NamedConverter::new("legacy-to-v1", |mut o: ModelObject, _: &()| {
                o.insert("steps".to_string(), json!(["legacy"]));
                Some(o)
            }),
        )
        .register(
            VersionRange::Below(Version::new(2, 0, 0)),
            NamedConverter::new("v1-to-v2", |mut o: ModelObject, _: &()| {
                let mut steps = o.remove("steps").unwrap_or(json!([]));
                if let Some(list) = steps.as_array_mut() {
                    list.push(json!("v2"));
                }
                o.insert("steps".to_string(), steps);
                o.set_version(&Version::new(2, 0, 0));
                Some(o)
            }),
        );

    let pipeline = MigrationPipeline::new(&registry);
    let legacy = pipeline.convert_one(obj(json!({})), &()).unwrap();
    assert_eq!(legacy["steps"], json!(["legacy", "v2"]));

    let v1 = pipeline.convert_one(stamped(1, json!({})), &()).unwrap();
    assert_eq!(v1["steps"], json!(["v2"]));

    let current = stamped(2, json!({"untouched": true}));
    assert_eq!(pipeline.convert_one(current.clone(), &()), Some(current));
}

#[test]
fn malformed_version_is_attributed_to_its_object() {
    init_tracing();
    let input = vec![
        stamped(1, json!({"name": "ok"})),
        obj(json!({"modelVersion": "not-json", "name": "bad"})),
    ];
    let report = MigrationPipeline::new(&resolve_by_major).migrate(input, &());

    assert_eq!(report.objects.len(), 2);
    assert_eq!(
        report.warnings.iter().map(MigrationWarning::index).collect::<Vec<_>>(),
        vec![1]
    );
    // Treated as unversioned, so no v1 upgrade ran on it.
    assert_eq!(report.objects[1]["name"], "bad");
}

#[test]
fn decoded_version_record_is_not_downgraded() {
    init_tracing();
    let input = vec![
        obj(json!({"modelVersion": {"major": 1, "minor": 0, "patch": 0}, "name": "record"})),
        obj(json!({"modelVersion": 7, "name": "number"})),
        obj(json!({"modelVersion": null, "name": "null"})),
    ];
    let report = MigrationPipeline::new(&resolve_by_major).migrate(input, &());

    // The record is read as 1.0.0 and upgraded like a string-stamped object.
    assert_eq!(report.objects[0]["label"], json!({"en": "record"}));
    assert_eq!(report.objects[0].version(), Version::new(2, 0, 0));
    // Numbers are flagged; null counts as unversioned without a warning.
    assert_eq!(report.objects[1]["name"], "number");
    assert_eq!(
        report.warnings,
        vec![MigrationWarning::InvalidVersionType {
            index: 1,
            found: "number".to_string(),
        }]
    );

    let audit = serde_json::to_value(&report.warnings).unwrap();
    assert_eq!(audit[0]["kind"], "invalid_version_type");
    assert_eq!(audit[0]["found"], "number");
}

#[test]
fn report_serializes_for_auditing() {
    let resolver = |_: &Version| rejecting_chain::<()>();
    let report = MigrationPipeline::new(&resolver).migrate(vec![stamped(3, json!({}))], &());
    let audit = serde_json::to_value(&report).unwrap();
    assert_eq!(audit["objects"], json!([]));
    assert_eq!(audit["rejections"][0]["index"], 0);
    assert_eq!(
        audit["rejections"][0]["version"],
        json!({"major": 3, "minor": 0, "patch": 0})
    );
}

#[test]
fn repeated_runs_are_identical() {
    let input = vec![
        stamped(1, json!({"name": "a"})),
        obj(json!({"name": "b"})),
        stamped(2, json!({"label": {"en": "c"}})),
    ];
    let pipeline = MigrationPipeline::new(&resolve_by_major);
    let first = pipeline.convert_many(input.clone(), &());
    for _ in 0..5 {
        assert_eq!(pipeline.convert_many(input.clone(), &()), first);
    }
}
