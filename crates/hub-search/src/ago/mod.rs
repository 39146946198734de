//! AGO query-string dialect: request params, `encodeURIComponent`-exact
//! escaping, clause rendering, and the full serializer.

mod build_filter;
mod encode;
mod params;
mod serialize;

pub use build_filter::{build_filter, format_clause};
pub use encode::{encode_component, encode_params};
pub use params::{
    AggSpec, FilterClause, FilterOp, FilterParam, PageCursors, PageWindow, SearchParams,
};
pub use serialize::{encode_filters, serialize};
