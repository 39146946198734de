// SPDX-License-Identifier: Apache-2.0

use hub_common::{InitiativeStep, ItemModel};
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::debug;

/// Current initiative schema version. The upgrade chain below must end here.
pub const INITIATIVE_SCHEMA_VERSION: f64 = 2.2;

const STEP_FLATTEN_VERSION: f64 = 2.1;

/// Runs the version-gated initiative migrations in order. Idempotent: a
/// model already at the current version passes through, and re-running the
/// chain returns an equal model.
#[must_use]
pub fn upgrade_initiative_schema(model: ItemModel) -> ItemModel {
    let start = model.schema_version();
    if start >= INITIATIVE_SCHEMA_VERSION {
        return model;
    }
    let model = upgrade_to_two_dot_one(model);
    let model = upgrade_to_two_dot_two(model);
    debug!(
        from = start,
        to = model.schema_version(),
        "upgraded initiative schema"
    );
    model
}

/// 2.1: flattens the legacy step layout, where `data.values.steps` listed
/// step keys and each key mapped to its step object elsewhere in
/// `data.values`, into a plain `data.steps` array. Models that are already
/// flat keep their steps.
#[must_use]
pub fn upgrade_to_two_dot_one(mut model: ItemModel) -> ItemModel {
    if model.schema_version() >= STEP_FLATTEN_VERSION {
        return model;
    }
    if model.data.steps.is_none() {
        model.data.steps = take_value_steps(&mut model.data.values);
    }
    model.set_schema_version(STEP_FLATTEN_VERSION);
    debug!(version = STEP_FLATTEN_VERSION, "flattened initiative steps");
    model
}

/// 2.2: collects the de-duplicated union of `steps[*].templateIds` into
/// `data.recommendedTemplates`, first-seen order.
#[must_use]
pub fn upgrade_to_two_dot_two(mut model: ItemModel) -> ItemModel {
    if model.schema_version() >= INITIATIVE_SCHEMA_VERSION {
        return model;
    }
    let mut seen = HashSet::new();
    let mut recommended = Vec::new();
    for step in model.data.steps.iter().flatten() {
        for id in step.template_ids.iter().flatten() {
            if seen.insert(id.as_str()) {
                recommended.push(id.clone());
            }
        }
    }
    model.data.recommended_templates = Some(recommended);
    model.set_schema_version(INITIATIVE_SCHEMA_VERSION);
    debug!(
        version = INITIATIVE_SCHEMA_VERSION,
        "collected recommended templates"
    );
    model
}

fn take_value_steps(values: &mut Option<Map<String, Value>>) -> Option<Vec<InitiativeStep>> {
    let map = values.as_mut()?;
    if !matches!(map.get("steps"), Some(Value::Array(_))) {
        return None;
    }
    let Some(Value::Array(keys)) = map.remove("steps") else {
        return None;
    };
    let mut steps = Vec::new();
    for key in keys {
        let Value::String(key) = key else { continue };
        let Some(value) = map.get(&key) else { continue };
        // Only step objects move out of values; anything else stays put.
        if let Ok(step) = serde_json::from_value::<InitiativeStep>(value.clone()) {
            steps.push(step);
            map.remove(&key);
        }
    }
    Some(steps)
}
