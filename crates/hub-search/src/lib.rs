#![forbid(unsafe_code)]
//! Query layer for the Hub search stack: expansion of terse filters into
//! their canonical form, associative merge of same-entity filters, and the
//! two request serializers (AGO query-string dialect and Hub API JSON
//! dialect). All functions are pure; time is injected where dates resolve.

mod ago;
mod api;
mod expand;
mod fields;
mod highlight;
mod merge;

pub use ago::{
    build_filter, encode_component, encode_filters, encode_params, format_clause, serialize,
    AggSpec, FilterClause, FilterOp, FilterParam, PageCursors, PageWindow, SearchParams,
};
pub use api::{ApiSearchOptions, QueryPayload, SearchRequestBody, SortOrder};
pub use expand::{
    expand_content_filter, expand_event_filter, expand_filter, expand_group_filter,
    expand_user_filter,
};
pub use fields::{is_filterable, lookup_param, ParamKind, ParamSpec, PARAM_SCHEMA};
pub use highlight::highlight_terms;
pub use merge::{
    merge_content_filters, merge_event_filters, merge_filters, merge_group_filters,
    merge_user_filters,
};

pub const CRATE_NAME: &str = "hub-search";
