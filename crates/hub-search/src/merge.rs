// SPDX-License-Identifier: Apache-2.0

use hub_common::{
    union_date_ranges, ExpandedContentFilter, ExpandedEventFilter, ExpandedFilter,
    ExpandedGroupFilter, ExpandedUserFilter, FilterType, HubError, MatchOptions, Result,
};

/// Merges expanded filters of one entity type into a single filter.
///
/// Mixed entity types fail fast with [`HubError::FilterTypeMismatch`]; an
/// empty input has no entity type to merge under and is rejected too.
pub fn merge_filters(filters: &[ExpandedFilter]) -> Result<ExpandedFilter> {
    let first = filters
        .first()
        .ok_or_else(|| HubError::invalid_input("cannot merge an empty filter list"))?;
    match first.filter_type() {
        FilterType::Content => {
            let parts = collect_parts(filters, FilterType::Content, |filter| match filter {
                ExpandedFilter::Content(content) => Some(content),
                _ => None,
            })?;
            Ok(ExpandedFilter::Content(merge_content_filters(&parts)))
        }
        FilterType::Group => {
            let parts = collect_parts(filters, FilterType::Group, |filter| match filter {
                ExpandedFilter::Group(group) => Some(group),
                _ => None,
            })?;
            Ok(ExpandedFilter::Group(merge_group_filters(&parts)))
        }
        FilterType::User => {
            let parts = collect_parts(filters, FilterType::User, |filter| match filter {
                ExpandedFilter::User(user) => Some(user),
                _ => None,
            })?;
            Ok(ExpandedFilter::User(merge_user_filters(&parts)))
        }
        FilterType::Event => {
            let parts = collect_parts(filters, FilterType::Event, |filter| match filter {
                ExpandedFilter::Event(event) => Some(event),
                _ => None,
            })?;
            Ok(ExpandedFilter::Event(merge_event_filters(&parts)))
        }
    }
}

fn collect_parts<T: Clone>(
    filters: &[ExpandedFilter],
    expected: FilterType,
    pick: impl Fn(&ExpandedFilter) -> Option<&T>,
) -> Result<Vec<T>> {
    let mut parts = Vec::with_capacity(filters.len());
    for filter in filters {
        match pick(filter) {
            Some(part) => parts.push(part.clone()),
            None => {
                return Err(HubError::FilterTypeMismatch {
                    expected,
                    found: filter.filter_type(),
                });
            }
        }
    }
    Ok(parts)
}

/// Fold of content filters. Match fields merge set-wise, date fields take
/// the union envelope, terms concatenate with a single space in input
/// order, and `subFilters` concatenate without de-duplication.
#[must_use]
pub fn merge_content_filters(filters: &[ExpandedContentFilter]) -> ExpandedContentFilter {
    let mut merged = ExpandedContentFilter::default();
    for filter in filters {
        merged.term = merge_term(merged.term.take(), filter.term.as_deref());
        merged.access = merge_match(merged.access.take(), filter.access.as_ref());
        merged.owner = merge_match(merged.owner.take(), filter.owner.as_ref());
        merged.tags = merge_match(merged.tags.take(), filter.tags.as_ref());
        merged.group = merge_match(merged.group.take(), filter.group.as_ref());
        merged.id = merge_match(merged.id.take(), filter.id.as_ref());
        merged.item_type = merge_match(merged.item_type.take(), filter.item_type.as_ref());
        merged.type_keywords =
            merge_match(merged.type_keywords.take(), filter.type_keywords.as_ref());
        merged.org_id = merge_match(merged.org_id.take(), filter.org_id.as_ref());
        merged.categories = merge_match(merged.categories.take(), filter.categories.as_ref());
        merged.created = union_date_ranges(merged.created.as_ref(), filter.created.as_ref());
        merged.modified = union_date_ranges(merged.modified.as_ref(), filter.modified.as_ref());
        merged.sub_filters.extend(filter.sub_filters.iter().cloned());
    }
    merged
}

#[must_use]
pub fn merge_group_filters(filters: &[ExpandedGroupFilter]) -> ExpandedGroupFilter {
    let mut merged = ExpandedGroupFilter::default();
    for filter in filters {
        merged.term = merge_term(merged.term.take(), filter.term.as_deref());
        if merged.search_user_access.is_none() {
            merged.search_user_access = filter.search_user_access.clone();
        }
        merged.access = merge_match(merged.access.take(), filter.access.as_ref());
        merged.id = merge_match(merged.id.take(), filter.id.as_ref());
        merged.org_id = merge_match(merged.org_id.take(), filter.org_id.as_ref());
        merged.owner = merge_match(merged.owner.take(), filter.owner.as_ref());
        merged.tags = merge_match(merged.tags.take(), filter.tags.as_ref());
        merged.title = merge_match(merged.title.take(), filter.title.as_ref());
        merged.type_keywords =
            merge_match(merged.type_keywords.take(), filter.type_keywords.as_ref());
        merged.created = union_date_ranges(merged.created.as_ref(), filter.created.as_ref());
        merged.modified = union_date_ranges(merged.modified.as_ref(), filter.modified.as_ref());
    }
    merged
}

#[must_use]
pub fn merge_user_filters(filters: &[ExpandedUserFilter]) -> ExpandedUserFilter {
    let mut merged = ExpandedUserFilter::default();
    for filter in filters {
        merged.term = merge_term(merged.term.take(), filter.term.as_deref());
        merged.disabled = merged.disabled.or(filter.disabled);
        merged.username = merge_match(merged.username.take(), filter.username.as_ref());
        merged.fullname = merge_match(merged.fullname.take(), filter.fullname.as_ref());
        merged.firstname = merge_match(merged.firstname.take(), filter.firstname.as_ref());
        merged.lastname = merge_match(merged.lastname.take(), filter.lastname.as_ref());
        merged.email = merge_match(merged.email.take(), filter.email.as_ref());
        merged.groups = merge_match(merged.groups.take(), filter.groups.as_ref());
        merged.role = merge_match(merged.role.take(), filter.role.as_ref());
        merged.created = union_date_ranges(merged.created.as_ref(), filter.created.as_ref());
        merged.modified = union_date_ranges(merged.modified.as_ref(), filter.modified.as_ref());
        merged.last_login = union_date_ranges(merged.last_login.as_ref(), filter.last_login.as_ref());
    }
    merged
}

#[must_use]
pub fn merge_event_filters(filters: &[ExpandedEventFilter]) -> ExpandedEventFilter {
    let mut merged = ExpandedEventFilter::default();
    for filter in filters {
        merged.term = merge_term(merged.term.take(), filter.term.as_deref());
        merged.title = merge_match(merged.title.take(), filter.title.as_ref());
        merged.org_id = merge_match(merged.org_id.take(), filter.org_id.as_ref());
        merged.status = merge_match(merged.status.take(), filter.status.as_ref());
        merged.attendance = merge_match(merged.attendance.take(), filter.attendance.as_ref());
        merged.created = union_date_ranges(merged.created.as_ref(), filter.created.as_ref());
        merged.modified = union_date_ranges(merged.modified.as_ref(), filter.modified.as_ref());
        merged.start_date = union_date_ranges(merged.start_date.as_ref(), filter.start_date.as_ref());
    }
    merged
}

fn merge_match(acc: Option<MatchOptions>, next: Option<&MatchOptions>) -> Option<MatchOptions> {
    match (acc, next) {
        (Some(a), Some(b)) => Some(a.merge(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b.clone()),
        (None, None) => None,
    }
}

fn merge_term(acc: Option<String>, next: Option<&str>) -> Option<String> {
    match (acc, next) {
        (Some(a), Some(b)) => Some(format!("{a} {b}")),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b.to_string()),
        (None, None) => None,
    }
}
