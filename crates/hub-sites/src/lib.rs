#![forbid(unsafe_code)]
//! Document upgrade layer for Hub sites and initiatives: catalog
//! conversion to the current schema and the version-gated, idempotent
//! schema migrations over item models.

mod catalog_convert;
mod catalog_migration;
mod initiative_migrations;
mod site_migrations;

pub use catalog_convert::{convert_catalog, upgrade_catalog_schema, DEFAULT_CATALOG_TITLE};
pub use catalog_migration::{catalog_migration, remove_catalog_v1_from_upgraded_site};
pub use initiative_migrations::{
    upgrade_initiative_schema, upgrade_to_two_dot_one, upgrade_to_two_dot_two,
    INITIATIVE_SCHEMA_VERSION,
};
pub use site_migrations::{upgrade_site_schema, SITE_SCHEMA_VERSION};

pub const CRATE_NAME: &str = "hub-sites";
