//! Hub API search dialect: the JSON request body `{q, options}`.

use hub_common::{Filter, FilterGroup, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ApiSearchOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
    #[serde(default, rename = "sortField", skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<String>,
    #[serde(default, rename = "sortOrder", skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

/// The `q` payload: a bare term, a single filter, or filter groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryPayload {
    Term(String),
    Filter(Box<Filter>),
    Groups(Vec<FilterGroup>),
}

/// Search request body for the Hub API. Construction validates that every
/// filter group is homogeneous; sending the request stays with the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequestBody {
    pub q: QueryPayload,
    #[serde(default)]
    pub options: ApiSearchOptions,
}

impl SearchRequestBody {
    pub fn new(q: QueryPayload, options: ApiSearchOptions) -> Result<Self> {
        if let QueryPayload::Groups(groups) = &q {
            for group in groups {
                group.validate()?;
            }
        }
        Ok(Self { q, options })
    }
}
