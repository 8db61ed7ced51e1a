//! Shared JSON extraction helpers used by every provider.
//!
//! Failure classification follows the structure of the document:
//!
//! - wrong container type on the path (key into an array, index into an
//!   object, string where a number is expected) → `Decode`
//! - absent key, out-of-range index, empty array, `null`, or empty string →
//!   `MissingField`
//! - string that is not a decimal number → `Format`

use avgpx_core::QuoteError;
use serde_json::Value;

use crate::provider_spec::{PathSegment, PriceEncoding};

/// Follow `path` from the document root.
pub fn walk<'a>(provider: &str, body: &'a Value, path: &[PathSegment]) -> Result<&'a Value, QuoteError> {
    let mut current = body;
    for (depth, segment) in path.iter().enumerate() {
        current = match (segment, current) {
            (_, Value::Null) => return Err(missing(provider)),
            (PathSegment::Key(key), Value::Object(map)) => map.get(*key).ok_or_else(|| missing(provider))?,
            (PathSegment::Index(i), Value::Array(items)) => items.get(*i).ok_or_else(|| missing(provider))?,
            (PathSegment::Key(_), other) => {
                let cause = format!("expected object at `{}`, found {}", at(path, depth), json_kind(other));
                return Err(decode(provider, cause));
            }
            (PathSegment::Index(_), other) => {
                let cause = format!("expected array at `{}`, found {}", at(path, depth), json_kind(other));
                return Err(decode(provider, cause));
            }
        };
    }
    Ok(current)
}

/// Convert the value found at the end of the path into a price.
pub fn read_price(provider: &str, value: &Value, encoding: PriceEncoding) -> Result<f64, QuoteError> {
    match (encoding, value) {
        (_, Value::Null) => Err(missing(provider)),
        (PriceEncoding::Number, Value::Number(n)) => {
            n.as_f64().ok_or_else(|| QuoteError::Format { provider: provider.to_string(), raw: n.to_string() })
        }
        (PriceEncoding::Text, Value::String(s)) if s.is_empty() => Err(missing(provider)),
        (PriceEncoding::Text, Value::String(s)) => {
            parse_decimal(s).ok_or_else(|| QuoteError::Format { provider: provider.to_string(), raw: s.clone() })
        }
        (encoding, other) => Err(decode(provider, format!("expected {encoding} price, found {}", json_kind(other)))),
    }
}

/// Parse a decimal string such as `"67890.50"`.
///
/// The whole string must be consumed; surrounding whitespace or trailing
/// characters are rejected.
#[inline]
pub fn parse_decimal(s: &str) -> Option<f64> {
    fast_float2::parse(s).ok()
}

/// Render a path as `result.data[0].a`.
pub fn render_path(path: &[PathSegment]) -> String {
    let mut out = String::new();
    for segment in path {
        match segment {
            PathSegment::Key(key) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(key);
            }
            PathSegment::Index(i) => {
                out.push('[');
                out.push_str(&i.to_string());
                out.push(']');
            }
        }
    }
    if out.is_empty() { "$".to_string() } else { out }
}

fn at(path: &[PathSegment], depth: usize) -> String {
    render_path(&path[..depth])
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn missing(provider: &str) -> QuoteError {
    QuoteError::MissingField { provider: provider.to_string() }
}

fn decode(provider: &str, cause: String) -> QuoteError {
    QuoteError::Decode { provider: provider.to_string(), cause }
}
