use crate::dates::{DateRange, DateSpec};
use crate::error::Result;
use crate::match_options::{MatchOptions, MatchValue};
use crate::HubError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Join operator between filters in a group, uppercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinOperation {
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
}

impl JoinOperation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// Entity vocabulary of the `filterType` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    Content,
    Group,
    User,
    Event,
}

impl FilterType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Group => "group",
            Self::User => "user",
            Self::Event => "event",
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content (item) filter. Generic over the match-value state `M` and date
/// state `D`: terse filters hold `MatchValue`/`DateSpec`, expanded ones
/// hold `MatchOptions`/`DateRange`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "M: serde::Deserialize<'de>, D: serde::Deserialize<'de>"))]
pub struct ContentFilter<M = MatchValue, D = DateSpec> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<M>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<M>,
    #[serde(default, rename = "typekeywords", skip_serializing_if = "Option::is_none")]
    pub type_keywords: Option<M>,
    #[serde(default, rename = "orgid", skip_serializing_if = "Option::is_none")]
    pub org_id: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<D>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<D>,
    /// Nested content filters. Concatenated on merge, never de-duplicated.
    #[serde(default, rename = "subFilters", skip_serializing_if = "Vec::is_empty")]
    pub sub_filters: Vec<ContentFilter<M, D>>,
}

impl<M, D> Default for ContentFilter<M, D> {
    fn default() -> Self {
        Self {
            term: None,
            access: None,
            owner: None,
            tags: None,
            group: None,
            id: None,
            item_type: None,
            type_keywords: None,
            org_id: None,
            categories: None,
            created: None,
            modified: None,
            sub_filters: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "M: serde::Deserialize<'de>, D: serde::Deserialize<'de>"))]
pub struct GroupFilter<M = MatchValue, D = DateSpec> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    /// Scalar request modifier, not part of the match algebra.
    #[serde(
        default,
        rename = "searchUserAccess",
        skip_serializing_if = "Option::is_none"
    )]
    pub search_user_access: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<M>,
    #[serde(default, rename = "orgid", skip_serializing_if = "Option::is_none")]
    pub org_id: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<M>,
    #[serde(default, rename = "typekeywords", skip_serializing_if = "Option::is_none")]
    pub type_keywords: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<D>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<D>,
}

impl<M, D> Default for GroupFilter<M, D> {
    fn default() -> Self {
        Self {
            term: None,
            search_user_access: None,
            access: None,
            id: None,
            org_id: None,
            owner: None,
            tags: None,
            title: None,
            type_keywords: None,
            created: None,
            modified: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "M: serde::Deserialize<'de>, D: serde::Deserialize<'de>"))]
pub struct UserFilter<M = MatchValue, D = DateSpec> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    /// Scalar request modifier, not part of the match algebra.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullname: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<D>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<D>,
    #[serde(default, rename = "lastlogin", skip_serializing_if = "Option::is_none")]
    pub last_login: Option<D>,
}

impl<M, D> Default for UserFilter<M, D> {
    fn default() -> Self {
        Self {
            term: None,
            disabled: None,
            username: None,
            fullname: None,
            firstname: None,
            lastname: None,
            email: None,
            groups: None,
            role: None,
            created: None,
            modified: None,
            last_login: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "M: serde::Deserialize<'de>, D: serde::Deserialize<'de>"))]
pub struct EventFilter<M = MatchValue, D = DateSpec> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<M>,
    #[serde(default, rename = "orgid", skip_serializing_if = "Option::is_none")]
    pub org_id: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<D>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<D>,
    #[serde(default, rename = "startDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<D>,
}

impl<M, D> Default for EventFilter<M, D> {
    fn default() -> Self {
        Self {
            term: None,
            title: None,
            org_id: None,
            status: None,
            attendance: None,
            created: None,
            modified: None,
            start_date: None,
        }
    }
}

pub type ExpandedContentFilter = ContentFilter<MatchOptions, DateRange>;
pub type ExpandedGroupFilter = GroupFilter<MatchOptions, DateRange>;
pub type ExpandedUserFilter = UserFilter<MatchOptions, DateRange>;
pub type ExpandedEventFilter = EventFilter<MatchOptions, DateRange>;

/// Terse filter as authored by callers, tagged by entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "filterType", rename_all = "lowercase")]
pub enum Filter {
    Content(ContentFilter),
    Group(GroupFilter),
    User(UserFilter),
    Event(EventFilter),
}

impl Filter {
    #[must_use]
    pub fn filter_type(&self) -> FilterType {
        match self {
            Self::Content(_) => FilterType::Content,
            Self::Group(_) => FilterType::Group,
            Self::User(_) => FilterType::User,
            Self::Event(_) => FilterType::Event,
        }
    }
}

/// Canonical filter after expansion: every match field is `MatchOptions`,
/// every date field an absolute `DateRange`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "filterType", rename_all = "lowercase")]
pub enum ExpandedFilter {
    Content(ExpandedContentFilter),
    Group(ExpandedGroupFilter),
    User(ExpandedUserFilter),
    Event(ExpandedEventFilter),
}

impl ExpandedFilter {
    #[must_use]
    pub fn filter_type(&self) -> FilterType {
        match self {
            Self::Content(_) => FilterType::Content,
            Self::Group(_) => FilterType::Group,
            Self::User(_) => FilterType::User,
            Self::Event(_) => FilterType::Event,
        }
    }
}

/// Homogeneous group of filters joined by one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    #[serde(rename = "filterType")]
    pub filter_type: FilterType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<JoinOperation>,
    pub filters: Vec<Filter>,
}

impl FilterGroup {
    /// Every member filter must carry the group's entity type.
    pub fn validate(&self) -> Result<()> {
        for filter in &self.filters {
            if filter.filter_type() != self.filter_type {
                return Err(HubError::FilterTypeMismatch {
                    expected: self.filter_type,
                    found: filter.filter_type(),
                });
            }
        }
        Ok(())
    }
}
