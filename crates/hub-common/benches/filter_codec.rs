// SPDX-License-Identifier: Apache-2.0

use criterion::{criterion_group, criterion_main, Criterion};
use hub_common::{ContentFilter, DateRange, DateSpec, Filter, HubCatalog, MatchValue};

fn nested_filter(depth: usize, fanout: usize) -> ContentFilter {
    let sub_filters = if depth == 0 {
        Vec::new()
    } else {
        (0..fanout).map(|_| nested_filter(depth - 1, fanout)).collect()
    };
    ContentFilter {
        term: Some("water quality".to_string()),
        tags: Some(MatchValue::Many(vec![
            "water".to_string(),
            "crime".to_string(),
            "fires".to_string(),
        ])),
        owner: Some(MatchValue::One("dcadmin".to_string())),
        modified: Some(DateSpec::Range(DateRange::new(
            1_571_000_000_000,
            1_572_480_000_000,
        ))),
        sub_filters,
        ..ContentFilter::default()
    }
}

fn catalog_document() -> String {
    let collections: Vec<serde_json::Value> = (0..24)
        .map(|idx| {
            serde_json::json!({
                "key": format!("collection-{idx}"),
                "label": format!("Collection {idx}"),
                "targetEntity": "item",
                "scope": { "targetEntity": "item", "filters": [] },
                "sortField": "title"
            })
        })
        .collect();
    serde_json::json!({
        "schemaVersion": 1.0,
        "title": "Default Catalog",
        "scopes": {
            "item": {
                "targetEntity": "item",
                "filters": [{
                    "predicates": [{
                        "group": ["1ef", "2ab"],
                        "type": { "any": ["Feature Layer", "CSV"] },
                        "openData": true
                    }]
                }]
            }
        },
        "collections": collections
    })
    .to_string()
}

fn bench_encode_decode(c: &mut Criterion) {
    let filter = Filter::Content(nested_filter(3, 3));
    c.bench_function("filter_json_encode", |b| {
        b.iter(|| {
            serde_json::to_string(&filter).expect("encode");
        })
    });

    let json = serde_json::to_string(&filter).expect("encode sample");
    c.bench_function("filter_json_decode", |b| {
        b.iter(|| {
            let _: Filter = serde_json::from_str(&json).expect("decode");
        })
    });

    let catalog = catalog_document();
    c.bench_function("catalog_json_decode", |b| {
        b.iter(|| {
            let _: HubCatalog = serde_json::from_str(&catalog).expect("decode");
        })
    });
}

criterion_group!(filter_codec, bench_encode_decode);
criterion_main!(filter_codec);
