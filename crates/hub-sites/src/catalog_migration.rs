use crate::catalog_convert::convert_catalog;
use crate::site_migrations::SITE_SCHEMA_VERSION;
use hub_common::ItemModel;
use tracing::debug;

/// Stores the converted catalog under `data.catalogv2`, leaving the legacy
/// `data.catalog` in place for services that still read it.
///
/// Models already at the site schema version pass through untouched. A
/// legacy catalog carrying its own `schemaVersion` key (any value) is
/// treated as migrated elsewhere: the model version moves but no catalog
/// is built.
#[must_use]
pub fn catalog_migration(mut model: ItemModel) -> ItemModel {
    if model.schema_version() >= SITE_SCHEMA_VERSION {
        return model;
    }
    let self_versioned = model
        .data
        .catalog
        .as_ref()
        .map_or(false, |catalog| catalog.schema_version.is_some());
    if !self_versioned {
        model.data.catalog_v2 = Some(convert_catalog(model.data.catalog.as_ref()));
        debug!(version = SITE_SCHEMA_VERSION, "built catalogv2 from legacy catalog");
    }
    model.set_schema_version(SITE_SCHEMA_VERSION);
    model
}

/// Deletes the legacy catalog from a copy of the model, but only once the
/// site has opted in via `data.useCatalogV2`. The input is never mutated.
#[must_use]
pub fn remove_catalog_v1_from_upgraded_site(model: &ItemModel) -> ItemModel {
    let mut upgraded = model.clone();
    if upgraded.data.use_catalog_v2 == Some(true) {
        upgraded.data.catalog = None;
    }
    upgraded
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_common::{LegacyCatalog, MatchValue, OneOrMany};

    fn site_model(version: f64, groups: Option<OneOrMany<String>>) -> ItemModel {
        let mut model = ItemModel::default();
        model.set_schema_version(version);
        if let Some(groups) = groups {
            model.data.catalog = Some(LegacyCatalog {
                groups: Some(groups),
                ..LegacyCatalog::default()
            });
        }
        model
    }

    #[test]
    fn builds_catalogv2_and_keeps_the_legacy_catalog() {
        let model = site_model(1.5, Some(OneOrMany::Many(vec!["1ef".to_string()])));
        let migrated = catalog_migration(model);
        assert_eq!(migrated.schema_version(), SITE_SCHEMA_VERSION);
        assert!(migrated.data.catalog.is_some());
        let catalog = migrated.data.catalog_v2.expect("catalogv2");
        assert_eq!(
            catalog.scopes.item.filters[0].predicates[0].group,
            Some(MatchValue::Many(vec!["1ef".to_string()]))
        );
    }

    #[test]
    fn models_at_the_gate_pass_through_unchanged() {
        let model = site_model(1.7, Some(OneOrMany::One("1ef".to_string())));
        let migrated = catalog_migration(model.clone());
        assert_eq!(migrated, model);
        assert!(migrated.data.catalog_v2.is_none());
    }

    #[test]
    fn self_versioned_catalogs_only_move_the_model_version() {
        let mut model = site_model(1.5, Some(OneOrMany::Many(vec!["1ef".to_string()])));
        if let Some(catalog) = model.data.catalog.as_mut() {
            catalog.schema_version = Some(serde_json::json!(2));
        }
        let migrated = catalog_migration(model);
        assert_eq!(migrated.schema_version(), SITE_SCHEMA_VERSION);
        assert!(migrated.data.catalog_v2.is_none());
    }

    #[test]
    fn removal_is_gated_on_the_opt_in_flag() {
        let mut model = site_model(1.7, Some(OneOrMany::One("1ef".to_string())));

        let kept = remove_catalog_v1_from_upgraded_site(&model);
        assert!(kept.data.catalog.is_some());

        model.data.use_catalog_v2 = Some(true);
        let removed = remove_catalog_v1_from_upgraded_site(&model);
        assert!(removed.data.catalog.is_none());
        // The input model is untouched either way.
        assert!(model.data.catalog.is_some());
    }
}
