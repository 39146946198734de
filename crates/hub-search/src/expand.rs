use hub_common::{
    ContentFilter, EventFilter, ExpandedContentFilter, ExpandedEventFilter, ExpandedFilter,
    ExpandedGroupFilter, ExpandedUserFilter, Filter, GroupFilter, MatchOptions, MatchValue,
    UserFilter,
};

/// Canonicalizes a terse filter: scalar and list match values become
/// `MatchOptions`, relative dates resolve against the injected `now_ms`.
#[must_use]
pub fn expand_filter(filter: &Filter, now_ms: i64) -> ExpandedFilter {
    match filter {
        Filter::Content(content) => {
            ExpandedFilter::Content(expand_content_filter(content, now_ms))
        }
        Filter::Group(group) => ExpandedFilter::Group(expand_group_filter(group, now_ms)),
        Filter::User(user) => ExpandedFilter::User(expand_user_filter(user, now_ms)),
        Filter::Event(event) => ExpandedFilter::Event(expand_event_filter(event, now_ms)),
    }
}

#[must_use]
pub fn expand_content_filter(filter: &ContentFilter, now_ms: i64) -> ExpandedContentFilter {
    ExpandedContentFilter {
        term: filter.term.clone(),
        access: expand_match(filter.access.as_ref()),
        owner: expand_match(filter.owner.as_ref()),
        tags: expand_match(filter.tags.as_ref()),
        group: expand_match(filter.group.as_ref()),
        id: expand_match(filter.id.as_ref()),
        item_type: expand_match(filter.item_type.as_ref()),
        type_keywords: expand_match(filter.type_keywords.as_ref()),
        org_id: expand_match(filter.org_id.as_ref()),
        categories: expand_match(filter.categories.as_ref()),
        created: filter.created.as_ref().map(|date| date.resolve(now_ms)),
        modified: filter.modified.as_ref().map(|date| date.resolve(now_ms)),
        sub_filters: filter
            .sub_filters
            .iter()
            .map(|sub| expand_content_filter(sub, now_ms))
            .collect(),
    }
}

#[must_use]
pub fn expand_group_filter(filter: &GroupFilter, now_ms: i64) -> ExpandedGroupFilter {
    ExpandedGroupFilter {
        term: filter.term.clone(),
        search_user_access: filter.search_user_access.clone(),
        access: expand_match(filter.access.as_ref()),
        id: expand_match(filter.id.as_ref()),
        org_id: expand_match(filter.org_id.as_ref()),
        owner: expand_match(filter.owner.as_ref()),
        tags: expand_match(filter.tags.as_ref()),
        title: expand_match(filter.title.as_ref()),
        type_keywords: expand_match(filter.type_keywords.as_ref()),
        created: filter.created.as_ref().map(|date| date.resolve(now_ms)),
        modified: filter.modified.as_ref().map(|date| date.resolve(now_ms)),
    }
}

#[must_use]
pub fn expand_user_filter(filter: &UserFilter, now_ms: i64) -> ExpandedUserFilter {
    ExpandedUserFilter {
        term: filter.term.clone(),
        disabled: filter.disabled,
        username: expand_match(filter.username.as_ref()),
        fullname: expand_match(filter.fullname.as_ref()),
        firstname: expand_match(filter.firstname.as_ref()),
        lastname: expand_match(filter.lastname.as_ref()),
        email: expand_match(filter.email.as_ref()),
        groups: expand_match(filter.groups.as_ref()),
        role: expand_match(filter.role.as_ref()),
        created: filter.created.as_ref().map(|date| date.resolve(now_ms)),
        modified: filter.modified.as_ref().map(|date| date.resolve(now_ms)),
        last_login: filter.last_login.as_ref().map(|date| date.resolve(now_ms)),
    }
}

#[must_use]
pub fn expand_event_filter(filter: &EventFilter, now_ms: i64) -> ExpandedEventFilter {
    ExpandedEventFilter {
        term: filter.term.clone(),
        title: expand_match(filter.title.as_ref()),
        org_id: expand_match(filter.org_id.as_ref()),
        status: expand_match(filter.status.as_ref()),
        attendance: expand_match(filter.attendance.as_ref()),
        created: filter.created.as_ref().map(|date| date.resolve(now_ms)),
        modified: filter.modified.as_ref().map(|date| date.resolve(now_ms)),
        start_date: filter.start_date.as_ref().map(|date| date.resolve(now_ms)),
    }
}

fn expand_match(value: Option<&MatchValue>) -> Option<MatchOptions> {
    value.map(MatchValue::to_match_options)
}
