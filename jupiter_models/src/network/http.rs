use crate::error::{Error, ModelResult};
use error_stack::report;
use serde_json::value::Value;
use url::form_urlencoded;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    GET,
    POST,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
        }
    }
}

/// Flattens a JSON object into query pairs sorted by key.
///
/// `null` values and empty arrays are dropped, so optional fields left unset never reach
/// the query. Arrays are joined with `,`, nested objects are stringified.
///
/// # Errors
///
/// Returns `Error::EncodingError` if `value` is not a JSON object.
pub fn value_to_sorted_query_pairs(value: &Value) -> ModelResult<Vec<(String, String)>> {
    let Value::Object(map) = value else {
        return Err(
            report!(Error::EncodingError("expected a JSON object".to_string()))
                .attach_printable(format!("Invalid JSON Object: {value:?}")),
        );
    };

    let mut pairs: Vec<(String, String)> = map
        .iter()
        .filter_map(|(key, value)| query_value(value).map(|value| (key.clone(), value)))
        .collect();

    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(pairs)
}

/// Same as [`value_to_sorted_query_pairs`], rendered as a form-urlencoded query string.
pub fn value_to_sorted_querystring(value: &Value) -> ModelResult<String> {
    let pairs = value_to_sorted_query_pairs(value)?;
    Ok(form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .finish())
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Array(items) => Some(
            items
                .iter()
                .map(scalar_to_string)
                .collect::<Vec<String>>()
                .join(","),
        ),
        other => Some(scalar_to_string(other)),
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.to_string(),
        _ => value.to_string(),
    }
}
