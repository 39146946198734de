// SPDX-License-Identifier: Apache-2.0

use crate::ago::params::{FilterClause, FilterOp};
use chrono::{NaiveDate, NaiveTime};
use hub_common::{HubError, Result};

/// Renders a clause as an AGO `q` fragment: `(key: a OR b)` with the join
/// operator chosen by `fn`, or `(key: [from TO to])` for `between`, where
/// the endpoints are the UTC midnights of the `YYYY-MM-DD` terms in epoch
/// milliseconds. A same-day range yields equal endpoints.
pub fn build_filter(clause: &FilterClause, key: &str) -> Result<String> {
    if clause.op == Some(FilterOp::Between) {
        let (from, to) = between_endpoints(clause, key)?;
        return Ok(format!("({key}: [{from} TO {to}])"));
    }
    let join = join_operator(clause.op);
    Ok(format!("({key}: {})", clause.terms.join(join)))
}

/// Parses a `between` clause into its epoch-millisecond endpoints. Shared
/// with the segment encoder so date params reject malformed terms before
/// a query string is emitted.
pub(crate) fn between_endpoints(clause: &FilterClause, key: &str) -> Result<(i64, i64)> {
    if clause.terms.len() != 2 {
        return Err(HubError::invalid_input(format!(
            "between filter on `{key}` expects exactly two YYYY-MM-DD terms, got {}",
            clause.terms.len()
        )));
    }
    let from = date_term_to_epoch_ms(&clause.terms[0])?;
    let to = date_term_to_epoch_ms(&clause.terms[1])?;
    Ok((from, to))
}

/// Renders a clause as a `fn(term,term)` segment value for
/// `catalog[...]`/`filter[...]` params. An absent `fn` renders as `any`.
#[must_use]
pub fn format_clause(clause: &FilterClause) -> String {
    let op = clause.op.unwrap_or(FilterOp::Any);
    format!("{}({})", op.as_str(), clause.terms.join(","))
}

const fn join_operator(op: Option<FilterOp>) -> &'static str {
    match op {
        Some(FilterOp::All) => " AND ",
        Some(FilterOp::Not) => " NOT ",
        _ => " OR ",
    }
}

fn date_term_to_epoch_ms(term: &str) -> Result<i64> {
    let date = NaiveDate::parse_from_str(term, "%Y-%m-%d")
        .map_err(|_| HubError::invalid_date(term, "expected YYYY-MM-DD"))?;
    Ok(date.and_time(NaiveTime::MIN).and_utc().timestamp_millis())
}
