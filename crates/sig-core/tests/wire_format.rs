//! Wire-shape tests: the JSON emitted for entities and projections matches
//! the generated JSON Schema and the field names HTTP clients rely on.

use pretty_assertions::assert_eq;
use schemars::schema_for;
use serde_json::json;
use sig_core::entities::{Aspect, Signal};
use sig_core::enums::AspectType;
use sig_core::responses::SignalAspects;

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn sample_signal() -> Signal {
    Signal {
        id: 4,
        name: "multi_aspect_signal".into(),
        aspects: vec![
            Aspect {
                id: 1,
                aspect_type: AspectType::Permissive,
                is_on: false,
                signal_id: 4,
            },
            Aspect {
                id: 2,
                aspect_type: AspectType::Override,
                is_on: true,
                signal_id: 4,
            },
        ],
    }
}

#[test]
fn aspect_serializes_type_field() {
    let value = serde_json::to_value(&sample_signal().aspects[0]).unwrap();
    assert_eq!(
        value,
        json!({ "id": 1, "type": "PERMISSIVE", "is_on": false, "signal_id": 4 })
    );
}

#[test]
fn signal_aspects_projection_shape() {
    let projection = SignalAspects::from(&sample_signal());
    let value = serde_json::to_value(&projection).unwrap();
    assert_eq!(
        value,
        json!({
            "signal_id": 4,
            "signal_name": "multi_aspect_signal",
            "aspects": [
                { "type": "PERMISSIVE", "is_on": false },
                { "type": "OVERRIDE", "is_on": true }
            ]
        })
    );
}

#[test]
fn signal_without_aspects_deserializes() {
    let signal: Signal = serde_json::from_value(json!({ "id": 1, "name": "S1" })).unwrap();
    assert!(signal.aspects.is_empty());
}

#[test]
fn signal_matches_generated_schema() {
    let schema = serde_json::to_value(schema_for!(Signal)).unwrap();
    let instance = serde_json::to_value(sample_signal()).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "schema validation failed: {errors:?}");
}

#[test]
fn schema_rejects_unknown_aspect_type() {
    let schema = serde_json::to_value(schema_for!(Aspect)).unwrap();
    let instance = json!({ "id": 1, "type": "CAUTION", "is_on": false, "signal_id": 1 });
    assert!(!validate_against_schema(&schema, &instance).is_empty());
}
