use crate::ago::build_filter::{between_endpoints, format_clause};
use crate::ago::encode::{encode_component, encode_params};
use crate::ago::params::{FilterClause, FilterOp, FilterParam, SearchParams};
use crate::fields::{is_filterable, ParamKind, PARAM_SCHEMA};
use hub_common::{HubError, Result};
use serde_json::Value;

/// Serializes search params into the AGO-dialect query string: plain
/// params first (percent-encoded, declaration order), then `catalog[...]`
/// segments, then `filter[...]` segments, both in param-schema order.
///
/// Segment keys are percent-encoded but segment values are emitted raw:
/// `catalog%5BgroupIds%5D=any(1ef,2ab)` keeps its parens and commas.
pub fn serialize(params: &SearchParams) -> Result<String> {
    let mut sections = Vec::new();
    let encoded = encode_params(&simple_params(params)?);
    if !encoded.is_empty() {
        sections.push(encoded);
    }
    let segments = encode_filters(params)?;
    if !segments.is_empty() {
        sections.push(segments);
    }
    Ok(sections.join("&"))
}

/// Emits the `catalog[...]` and `filter[...]` segments only.
pub fn encode_filters(params: &SearchParams) -> Result<String> {
    let mut segments = Vec::new();
    collect_segments(params, true, "catalog", &mut segments)?;
    collect_segments(params, false, "filter", &mut segments)?;
    Ok(segments.join("&"))
}

fn simple_params(params: &SearchParams) -> Result<Vec<(String, Value)>> {
    let mut out = Vec::new();
    push_text(&mut out, "q", params.q.as_deref());
    push_text(&mut out, "sort", params.sort.as_deref());
    push_text(&mut out, "fields", params.fields.as_deref());
    push_text(&mut out, "bbox", params.bbox.as_deref());
    if let Some(agg) = &params.agg {
        out.push(("agg".to_string(), serde_json::to_value(agg)?));
    }
    if let Some(page) = &params.page {
        out.push(("page".to_string(), serde_json::to_value(page)?));
    }
    for (name, value) in &params.extra {
        if !is_filterable(name) {
            out.push((name.clone(), value.clone()));
        }
    }
    Ok(out)
}

fn push_text(out: &mut Vec<(String, Value)>, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        out.push((name.to_string(), Value::String(value.to_string())));
    }
}

fn collect_segments(
    params: &SearchParams,
    catalog: bool,
    prefix: &str,
    out: &mut Vec<String>,
) -> Result<()> {
    for spec in PARAM_SCHEMA {
        if spec.kind == ParamKind::Simple || spec.catalog_definition != catalog {
            continue;
        }
        if let Some(value) = params.extra.get(spec.name) {
            let clause = clause_from_value(spec.name, value)?;
            // Date params must carry parseable between endpoints even
            // though the segment emits the original terms.
            if spec.kind == ParamKind::DateFilter && clause.op == Some(FilterOp::Between) {
                between_endpoints(&clause, spec.name)?;
            }
            let key = encode_component(&format!("{prefix}[{}]", spec.name));
            out.push(format!("{key}={}", format_clause(&clause)));
        }
    }
    Ok(())
}

fn clause_from_value(name: &str, value: &Value) -> Result<FilterClause> {
    let param: FilterParam = serde_json::from_value(value.clone()).map_err(|_| {
        HubError::invalid_input(format!(
            "filter param `{name}` must be a string or a {{fn, terms}} clause"
        ))
    })?;
    Ok(param.to_clause())
}
