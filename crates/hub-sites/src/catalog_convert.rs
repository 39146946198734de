// SPDX-License-Identifier: Apache-2.0

use hub_common::{
    CatalogFilter, CatalogQuery, CatalogScopes, HubCatalog, HubError, LegacyCatalog, MatchValue,
    OneOrMany, Predicate, Result, TargetEntity, CATALOG_SCHEMA_VERSION,
};
use serde_json::Value;

pub const DEFAULT_CATALOG_TITLE: &str = "Default Catalog";

/// Builds the canonical catalog from the legacy `{groups}` shorthand.
///
/// No groups (or no legacy catalog at all) yields an item scope with zero
/// filters; otherwise one filter with one predicate whose `group` key holds
/// the group ids, always as an array even when the source wrote a scalar.
#[must_use]
pub fn convert_catalog(legacy: Option<&LegacyCatalog>) -> HubCatalog {
    let group_ids = legacy
        .and_then(|catalog| catalog.groups.as_ref())
        .map(OneOrMany::to_vec)
        .unwrap_or_default();
    let filters = if group_ids.is_empty() {
        Vec::new()
    } else {
        vec![CatalogFilter {
            operation: None,
            predicates: vec![Predicate {
                group: Some(MatchValue::Many(group_ids)),
                ..Predicate::default()
            }],
        }]
    };
    HubCatalog {
        schema_version: CATALOG_SCHEMA_VERSION,
        title: Some(DEFAULT_CATALOG_TITLE.to_string()),
        scopes: CatalogScopes {
            item: CatalogQuery {
                target_entity: TargetEntity::Item,
                filters,
            },
            ..CatalogScopes::default()
        },
        collections: Vec::new(),
    }
}

/// Brings a raw catalog value to the current schema. Documents that
/// already carry `scopes` parse as current, so running this twice returns
/// an equal value; anything else is treated as legacy and converted.
pub fn upgrade_catalog_schema(raw: &Value) -> Result<HubCatalog> {
    match raw {
        Value::Object(document) if document.contains_key("scopes") => {
            serde_json::from_value(raw.clone()).map_err(HubError::from)
        }
        Value::Null => Ok(convert_catalog(None)),
        Value::Object(_) => {
            let legacy: LegacyCatalog = serde_json::from_value(raw.clone())?;
            Ok(convert_catalog(Some(&legacy)))
        }
        _ => Err(HubError::invalid_input("catalog must be a JSON object or null")),
    }
}
