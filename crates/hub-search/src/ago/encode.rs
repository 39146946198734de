use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;

/// The `encodeURIComponent` escape set: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`. Query strings produced here must stay
/// byte-identical to ones produced by the JavaScript clients.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[must_use]
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// Renders ordered params as `key=value` pairs joined by `&`. Objects and
/// arrays recurse into bracketed keys (`agg[fields]`, `bbox[0]`); keys and
/// values are both percent-encoded. Null and empty-string values are
/// omitted.
#[must_use]
pub fn encode_params(params: &[(String, Value)]) -> String {
    let mut pairs = Vec::new();
    for (key, value) in params {
        collect_pairs(key, value, &mut pairs);
    }
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn collect_pairs(key: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (child, nested) in map {
                collect_pairs(&format!("{key}[{child}]"), nested, out);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                collect_pairs(&format!("{key}[{index}]"), item, out);
            }
        }
        Value::Null => {}
        Value::String(text) => {
            if !text.is_empty() {
                out.push((key.to_string(), text.clone()));
            }
        }
        other => out.push((key.to_string(), other.to_string())),
    }
}
