use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Set-based match specification for a single filter field.
///
/// Each key carries an independent term set: `any` is an OR over the terms,
/// `all` an AND, `not` an exclusion, and `exact` requests verbatim matching.
/// The keys are serialization hints for the query serializers; nothing here
/// evaluates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct MatchOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub any: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact: Option<Vec<String>>,
}

impl MatchOptions {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.any.is_none() && self.all.is_none() && self.not.is_none() && self.exact.is_none()
    }

    /// Combines two match options key by key. Terms are concatenated and
    /// de-duplicated preserving first-seen order; a key empty on both sides
    /// stays absent in the result. Neither input is mutated.
    #[must_use]
    pub fn merge(&self, other: &MatchOptions) -> MatchOptions {
        MatchOptions {
            any: merge_terms(self.any.as_deref(), other.any.as_deref()),
            all: merge_terms(self.all.as_deref(), other.all.as_deref()),
            not: merge_terms(self.not.as_deref(), other.not.as_deref()),
            exact: merge_terms(self.exact.as_deref(), other.exact.as_deref()),
        }
    }
}

fn merge_terms(a: Option<&[String]>, b: Option<&[String]>) -> Option<Vec<String>> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();
    for term in a.into_iter().flatten().chain(b.into_iter().flatten()) {
        if seen.insert(term.as_str()) {
            merged.push(term.clone());
        }
    }
    if merged.is_empty() {
        None
    } else {
        Some(merged)
    }
}

/// Terse form of a match field: a single term, a term list, or full
/// [`MatchOptions`]. Filter expansion canonicalizes every variant into
/// `MatchOptions` via [`MatchValue::into_match_options`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchValue {
    One(String),
    Many(Vec<String>),
    Options(MatchOptions),
}

impl MatchValue {
    /// Scalars and lists wrap as `{any: [...]}`; explicit options pass
    /// through untouched.
    #[must_use]
    pub fn into_match_options(self) -> MatchOptions {
        match self {
            Self::One(term) => MatchOptions {
                any: Some(vec![term]),
                ..MatchOptions::default()
            },
            Self::Many(terms) => MatchOptions {
                any: Some(terms),
                ..MatchOptions::default()
            },
            Self::Options(options) => options,
        }
    }

    #[must_use]
    pub fn to_match_options(&self) -> MatchOptions {
        self.clone().into_match_options()
    }
}

impl From<&str> for MatchValue {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for MatchValue {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for MatchValue {
    fn from(value: Vec<String>) -> Self {
        Self::Many(value)
    }
}

impl From<MatchOptions> for MatchValue {
    fn from(value: MatchOptions) -> Self {
        Self::Options(value)
    }
}
