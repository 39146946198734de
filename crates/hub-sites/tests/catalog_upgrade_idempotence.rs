// SPDX-License-Identifier: Apache-2.0

use hub_common::{ItemModel, MatchValue};
use hub_sites::{
    remove_catalog_v1_from_upgraded_site, upgrade_catalog_schema, upgrade_site_schema,
    SITE_SCHEMA_VERSION,
};
use serde_json::json;

fn legacy_site_document() -> serde_json::Value {
    json!({
        "item": {
            "id": "ae3",
            "title": "City of Gotham",
            "type": "Hub Site Application",
            "url": "https://gotham.hub.arcgis.com",
            "properties": { "schemaVersion": 1.5 }
        },
        "data": {
            "catalog": { "groups": "1ef" },
            "values": { "theme": { "header": "#004da8" } },
            "telemetry": { "consent": false }
        }
    })
}

#[test]
fn a_full_site_document_upgrades_end_to_end() {
    let model: ItemModel = serde_json::from_value(legacy_site_document()).expect("decode");
    let upgraded = upgrade_site_schema(model);

    assert_eq!(upgraded.schema_version(), SITE_SCHEMA_VERSION);
    assert!(upgraded.data.catalog.is_some(), "legacy catalog stays in place");
    let catalog = upgraded.data.catalog_v2.as_ref().expect("catalogv2");
    assert_eq!(
        catalog.scopes.item.filters[0].predicates[0].group,
        Some(MatchValue::Many(vec!["1ef".to_string()]))
    );

    // Keys the model does not know about survive the round trip.
    let encoded = serde_json::to_value(&upgraded).expect("encode");
    assert_eq!(encoded["item"]["url"], "https://gotham.hub.arcgis.com");
    assert_eq!(encoded["data"]["telemetry"]["consent"], false);
    assert_eq!(encoded["data"]["values"]["theme"]["header"], "#004da8");
    assert_eq!(encoded["data"]["catalogv2"]["schemaVersion"], 1.0);
}

#[test]
fn the_site_chain_is_idempotent() {
    let model: ItemModel = serde_json::from_value(legacy_site_document()).expect("decode");
    let once = upgrade_site_schema(model);
    let twice = upgrade_site_schema(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn models_at_the_current_version_pass_through() {
    let mut document = legacy_site_document();
    document["item"]["properties"]["schemaVersion"] = json!(SITE_SCHEMA_VERSION);
    let model: ItemModel = serde_json::from_value(document).expect("decode");
    let upgraded = upgrade_site_schema(model.clone());
    assert_eq!(upgraded, model);
    assert!(upgraded.data.catalog_v2.is_none());
}

#[test]
fn removal_composes_with_the_upgrade() {
    let mut document = legacy_site_document();
    document["data"]["useCatalogV2"] = json!(true);
    let model: ItemModel = serde_json::from_value(document).expect("decode");
    let upgraded = upgrade_site_schema(model);

    let trimmed = remove_catalog_v1_from_upgraded_site(&upgraded);
    assert!(trimmed.data.catalog.is_none());
    assert!(trimmed.data.catalog_v2.is_some());
    // The upgraded input keeps its legacy catalog for callers that read it.
    assert!(upgraded.data.catalog.is_some());
}

#[test]
fn raw_catalog_values_upgrade_idempotently() {
    let legacy = json!({ "groups": ["1ef", "2ab"] });
    let once = upgrade_catalog_schema(&legacy).expect("first pass");
    let reencoded = serde_json::to_value(&once).expect("encode");
    let twice = upgrade_catalog_schema(&reencoded).expect("second pass");
    assert_eq!(once, twice);
}
