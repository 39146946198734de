#![forbid(unsafe_code)]
//! Shared value types for the Hub search stack: the match-options algebra,
//! date ranges, per-entity filters, catalog documents, and versioned item
//! models. Everything here is pure data with value semantics; time is
//! always injected by callers.

mod catalog;
mod dates;
mod error;
mod filters;
mod match_options;
mod model;
mod pages;

pub use catalog::{
    CatalogCollection, CatalogFilter, CatalogQuery, CatalogScopes, HubCatalog, LegacyCatalog,
    OneOrMany, Predicate, TargetEntity, CATALOG_SCHEMA_VERSION,
};
pub use dates::{union_date_ranges, DateRange, DateSpec, RelativeDate, TimeUnit};
pub use error::{HubError, RemoteServerError, Result};
pub use filters::{
    ContentFilter, EventFilter, ExpandedContentFilter, ExpandedEventFilter, ExpandedFilter,
    ExpandedGroupFilter, ExpandedUserFilter, Filter, FilterGroup, FilterType, GroupFilter,
    JoinOperation, UserFilter,
};
pub use match_options::{MatchOptions, MatchValue};
pub use model::{InitiativeStep, ItemModel, ItemProperties, ModelData, ModelItem};
pub use pages::merge_pages;

pub const CRATE_NAME: &str = "hub-common";
