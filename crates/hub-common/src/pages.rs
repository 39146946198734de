use crate::error::{HubError, Result};
use serde_json::Value;

/// Flattens paged response bodies into one result list. Every page must be
/// a JSON array; anything else is an input error, not a panic.
pub fn merge_pages(pages: &[Value]) -> Result<Vec<Value>> {
    let mut merged = Vec::new();
    for (index, page) in pages.iter().enumerate() {
        match page {
            Value::Array(items) => merged.extend(items.iter().cloned()),
            other => {
                return Err(HubError::invalid_input(format!(
                    "page {index} is not an array (found {})",
                    json_type_name(other)
                )));
            }
        }
    }
    Ok(merged)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
