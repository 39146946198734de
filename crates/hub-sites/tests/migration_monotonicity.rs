// SPDX-License-Identifier: Apache-2.0

use hub_common::{InitiativeStep, ItemModel};
use hub_sites::{
    upgrade_initiative_schema, upgrade_to_two_dot_one, upgrade_to_two_dot_two,
    INITIATIVE_SCHEMA_VERSION,
};
use serde_json::json;

fn legacy_initiative_document(version: f64) -> serde_json::Value {
    json!({
        "item": {
            "id": "9f2",
            "title": "Vision Zero",
            "type": "Hub Initiative",
            "properties": { "schemaVersion": version }
        },
        "data": {
            "values": {
                "steps": ["monitorTools", "listenTools"],
                "monitorTools": { "title": "Monitor", "templateIds": ["t1", "t2"] },
                "listenTools": { "title": "Listen", "templateIds": ["t2", "t3"] },
                "collaborationGroupId": "77c"
            }
        }
    })
}

fn decode(document: serde_json::Value) -> ItemModel {
    serde_json::from_value(document).expect("decode")
}

#[test]
fn the_chain_flattens_steps_and_collects_templates() {
    let upgraded = upgrade_initiative_schema(decode(legacy_initiative_document(2.0)));

    assert_eq!(upgraded.schema_version(), INITIATIVE_SCHEMA_VERSION);
    let steps = upgraded.data.steps.as_ref().expect("steps");
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].title.as_deref(), Some("Monitor"));
    assert_eq!(
        upgraded.data.recommended_templates,
        Some(vec!["t1".to_string(), "t2".to_string(), "t3".to_string()])
    );

    // Step objects move out of values; everything else stays behind.
    let values = upgraded.data.values.as_ref().expect("values");
    assert!(!values.contains_key("steps"));
    assert!(!values.contains_key("monitorTools"));
    assert_eq!(values["collaborationGroupId"], "77c");
}

#[test]
fn the_chain_is_idempotent() {
    let once = upgrade_initiative_schema(decode(legacy_initiative_document(2.0)));
    let twice = upgrade_initiative_schema(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn each_step_respects_its_gate() {
    let at_two_dot_one = decode(legacy_initiative_document(2.1));
    let unchanged = upgrade_to_two_dot_one(at_two_dot_one.clone());
    assert_eq!(unchanged, at_two_dot_one);

    let at_current = decode(legacy_initiative_document(INITIATIVE_SCHEMA_VERSION));
    let unchanged = upgrade_to_two_dot_two(at_current.clone());
    assert_eq!(unchanged, at_current);
}

#[test]
fn versions_never_move_backwards() {
    for start in [2.0, 2.1, INITIATIVE_SCHEMA_VERSION, 3.0] {
        let model = decode(legacy_initiative_document(start));
        let upgraded = upgrade_initiative_schema(model);
        assert!(
            upgraded.schema_version() >= start,
            "version regressed from {start}"
        );
    }
}

#[test]
fn flat_models_only_gain_recommended_templates() {
    let mut model = decode(legacy_initiative_document(2.1));
    model.data.values = None;
    model.data.steps = Some(vec![InitiativeStep {
        title: Some("Existing".to_string()),
        template_ids: Some(vec!["t9".to_string()]),
        ..InitiativeStep::default()
    }]);

    let upgraded = upgrade_initiative_schema(model);
    assert_eq!(upgraded.schema_version(), INITIATIVE_SCHEMA_VERSION);
    let steps = upgraded.data.steps.expect("steps");
    assert_eq!(steps[0].title.as_deref(), Some("Existing"));
    assert_eq!(
        upgraded.data.recommended_templates,
        Some(vec!["t9".to_string()])
    );
}
