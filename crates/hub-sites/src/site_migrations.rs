use crate::catalog_migration::catalog_migration;
use hub_common::{ItemModel, OneOrMany};
use tracing::debug;

/// Current site schema version. The upgrade chain below must end here.
pub const SITE_SCHEMA_VERSION: f64 = 1.7;

const GROUP_ARRAY_VERSION: f64 = 1.6;

/// Runs the version-gated site migrations in order. Each step only touches
/// models below its target version and owns its version bump, so applying
/// the chain twice returns an equal model.
#[must_use]
pub fn upgrade_site_schema(model: ItemModel) -> ItemModel {
    let start = model.schema_version();
    if start >= SITE_SCHEMA_VERSION {
        return model;
    }
    let model = ensure_catalog_group_arrays(model);
    let model = catalog_migration(model);
    debug!(from = start, to = model.schema_version(), "upgraded site schema");
    model
}

/// 1.6: the oldest sites wrote `data.catalog.groups` as a scalar; the
/// conversion path expects arrays.
fn ensure_catalog_group_arrays(mut model: ItemModel) -> ItemModel {
    if model.schema_version() >= GROUP_ARRAY_VERSION {
        return model;
    }
    if let Some(catalog) = model.data.catalog.as_mut() {
        if let Some(groups) = catalog.groups.take() {
            catalog.groups = Some(OneOrMany::Many(groups.into_vec()));
        }
    }
    model.set_schema_version(GROUP_ARRAY_VERSION);
    debug!(version = GROUP_ARRAY_VERSION, "normalized catalog groups to arrays");
    model
}
