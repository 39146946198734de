// SPDX-License-Identifier: Apache-2.0

use hub_common::{
    DateRange, DateSpec, ExpandedFilter, Filter, FilterGroup, FilterType, HubCatalog, ItemModel,
    JoinOperation, MatchOptions, MatchValue, TargetEntity,
};
use serde_json::json;

#[test]
fn match_value_decodes_all_three_terse_forms() {
    let one: MatchValue = serde_json::from_value(json!("water")).expect("scalar");
    assert_eq!(one, MatchValue::One("water".to_string()));

    let many: MatchValue = serde_json::from_value(json!(["water", "crime"])).expect("list");
    assert_eq!(
        many,
        MatchValue::Many(vec!["water".to_string(), "crime".to_string()])
    );

    let options: MatchValue =
        serde_json::from_value(json!({"any": ["water"], "not": ["private"]})).expect("options");
    match options {
        MatchValue::Options(options) => {
            assert_eq!(options.any.as_deref(), Some(&["water".to_string()][..]));
            assert_eq!(options.not.as_deref(), Some(&["private".to_string()][..]));
        }
        other => panic!("expected options, got {other:?}"),
    }
}

#[test]
fn match_options_skip_absent_keys_when_encoding() {
    let options = MatchOptions {
        any: Some(vec!["a".to_string()]),
        ..MatchOptions::default()
    };
    assert_eq!(
        serde_json::to_value(&options).expect("encode"),
        json!({"any": ["a"]})
    );
}

#[test]
fn match_options_reject_unknown_keys() {
    assert!(serde_json::from_value::<MatchOptions>(json!({"any": ["a"], "some": ["b"]})).is_err());
}

#[test]
fn filters_round_trip_through_their_tag() {
    let raw = json!({
        "filterType": "user",
        "term": "dcadmin",
        "disabled": false,
        "groups": ["1ef"],
        "lastlogin": {"type": "date-range", "from": 100, "to": 200}
    });
    let filter: Filter = serde_json::from_value(raw.clone()).expect("decode");
    assert_eq!(filter.filter_type(), FilterType::User);
    assert_eq!(serde_json::to_value(&filter).expect("encode"), raw);
}

#[test]
fn both_filter_instantiations_decode_with_absent_fields() {
    // Neither `MatchOptions`/`DateRange` nor `MatchValue`/`DateSpec` back
    // absent fields with a type-level default; missing keys must still
    // decode as `None` in both the terse and the canonical form.
    let terse: Filter = serde_json::from_value(json!({
        "filterType": "content",
        "tags": "water"
    }))
    .expect("terse decode");
    match terse {
        Filter::Content(content) => {
            assert_eq!(content.tags, Some(MatchValue::from("water")));
            assert!(content.owner.is_none());
            assert!(content.modified.is_none());
            assert!(content.sub_filters.is_empty());
        }
        other => panic!("expected content filter, got {other:?}"),
    }

    let expanded: ExpandedFilter = serde_json::from_value(json!({
        "filterType": "content",
        "tags": {"any": ["water"]},
        "modified": {"from": 100, "to": 200}
    }))
    .expect("expanded decode");
    match expanded {
        ExpandedFilter::Content(content) => {
            assert_eq!(
                content.tags,
                Some(MatchOptions {
                    any: Some(vec!["water".to_string()]),
                    ..MatchOptions::default()
                })
            );
            assert_eq!(content.modified, Some(DateRange::new(100, 200)));
            assert!(content.created.is_none());
        }
        other => panic!("expected content filter, got {other:?}"),
    }
}

#[test]
fn expanded_date_fields_decode_as_plain_ranges() {
    let spec: DateSpec =
        serde_json::from_value(json!({"type": "date-range", "from": 1, "to": 2})).expect("decode");
    assert_eq!(spec.resolve(0), DateRange::new(1, 2));
}

#[test]
fn filter_groups_keep_uppercase_operations() {
    let group = FilterGroup {
        filter_type: FilterType::Content,
        operation: Some(JoinOperation::Or),
        filters: Vec::new(),
    };
    let encoded = serde_json::to_value(&group).expect("encode");
    assert_eq!(encoded["operation"], "OR");
    assert_eq!(encoded["filterType"], "content");
}

#[test]
fn catalog_documents_round_trip_with_unknown_content() {
    let raw = json!({
        "schemaVersion": 1.0,
        "title": "Default Catalog",
        "scopes": {
            "item": {
                "targetEntity": "item",
                "filters": [
                    {"predicates": [{"group": ["1ef", "2ab"], "openData": true}]}
                ]
            }
        },
        "collections": [
            {
                "key": "datasets",
                "label": "Datasets",
                "targetEntity": "item",
                "scope": {"targetEntity": "item", "filters": []},
                "sortField": "title"
            }
        ]
    });
    let catalog: HubCatalog = serde_json::from_value(raw).expect("decode");
    assert_eq!(catalog.scopes.item.target_entity, TargetEntity::Item);
    assert_eq!(
        catalog.scopes.item.filters[0].predicates[0].extra["openData"],
        true
    );
    assert_eq!(catalog.collections[0].extra["sortField"], "title");

    let encoded = serde_json::to_value(&catalog).expect("encode");
    assert_eq!(
        encoded["scopes"]["item"]["filters"][0]["predicates"][0]["openData"],
        true
    );
}

#[test]
fn item_models_default_the_schema_version_gate() {
    let model: ItemModel =
        serde_json::from_value(json!({"item": {"id": "3ef", "properties": {}}})).expect("decode");
    assert_eq!(model.schema_version(), 0.0);

    let versioned: ItemModel = serde_json::from_value(
        json!({"item": {"id": "3ef", "properties": {"schemaVersion": 1.7}}}),
    )
    .expect("decode");
    assert_eq!(versioned.schema_version(), 1.7);
}
