// SPDX-License-Identifier: Apache-2.0

use crate::dates::DateSpec;
use crate::filters::JoinOperation;
use crate::match_options::MatchValue;
use serde::{Deserialize, Serialize};

/// Schema version written by catalog conversion.
pub const CATALOG_SCHEMA_VERSION: f64 = 1.0;

/// Entity a catalog scope or collection targets. Distinct vocabulary from
/// the `filterType` tag: items are `item` here, `content` there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetEntity {
    Item,
    Group,
    User,
    Event,
}

impl TargetEntity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Group => "group",
            Self::User => "user",
            Self::Event => "event",
        }
    }
}

/// One value or a list of them. Legacy documents wrote scalars where the
/// current schema writes arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

impl<T: Clone> OneOrMany<T> {
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.clone().into_vec()
    }
}

/// Single predicate inside a catalog filter. The named fields are the ones
/// the search layer understands; anything else a document carries rides
/// along in `extra` and round-trips untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Predicate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<MatchValue>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<MatchValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<MatchValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<MatchValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<MatchValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<MatchValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateSpec>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CatalogFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<JoinOperation>,
    #[serde(default)]
    pub predicates: Vec<Predicate>,
}

/// Scoped query: which entity, constrained by which filters. `filters` is
/// always an array after normalization, possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogQuery {
    #[serde(rename = "targetEntity")]
    pub target_entity: TargetEntity,
    #[serde(default)]
    pub filters: Vec<CatalogFilter>,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            target_entity: TargetEntity::Item,
            filters: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CatalogScopes {
    #[serde(default)]
    pub item: CatalogQuery,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<CatalogQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<CatalogQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<CatalogQuery>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogCollection {
    pub key: String,
    pub label: String,
    #[serde(rename = "targetEntity")]
    pub target_entity: TargetEntity,
    pub scope: CatalogQuery,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Current catalog document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubCatalog {
    #[serde(rename = "schemaVersion")]
    pub schema_version: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub scopes: CatalogScopes,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collections: Vec<CatalogCollection>,
}

/// Pre-conversion catalog shorthand: at most a `groups` list (written as a
/// scalar by the oldest sites) and sometimes its own `schemaVersion` marker.
/// Everything else rides along in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LegacyCatalog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<OneOrMany<String>>,
    #[serde(
        default,
        rename = "schemaVersion",
        skip_serializing_if = "Option::is_none"
    )]
    pub schema_version: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
