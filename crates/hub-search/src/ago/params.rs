use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request params for the AGO-backed search endpoint. Typed fields cover
/// the plain params; filterable params (and anything else a caller passes
/// through) arrive via the flattened `extra` map and are interpreted by
/// the serializer against the param schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agg: Option<AggSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageCursors>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Aggregation request: which fields, how many buckets, which mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AggSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

/// Paired paging state: the Hub API window and the AGO window advance
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PageCursors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hub: Option<PageWindow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ago: Option<PageWindow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub start: u64,
    pub size: u64,
}

/// Join operator of a filter clause, lowercase on the wire (the `fn` key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOp {
    Any,
    All,
    Not,
    Between,
}

impl FilterOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::All => "all",
            Self::Not => "not",
            Self::Between => "between",
        }
    }
}

/// Explicit filter clause: `{fn, terms}` on the wire. An absent `fn`
/// means `any`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterClause {
    #[serde(default, rename = "fn", skip_serializing_if = "Option::is_none")]
    pub op: Option<FilterOp>,
    #[serde(default)]
    pub terms: Vec<String>,
}

/// Filterable param value as callers write it: either the `"a,b"` comma
/// shorthand or an explicit clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterParam {
    Raw(String),
    Clause(FilterClause),
}

impl FilterParam {
    /// Normalizes the shorthand: raw values comma-split into terms with
    /// the default `any` join.
    #[must_use]
    pub fn to_clause(&self) -> FilterClause {
        match self {
            Self::Raw(raw) => FilterClause {
                op: None,
                terms: raw.split(',').map(str::to_string).collect(),
            },
            Self::Clause(clause) => clause.clone(),
        }
    }
}
