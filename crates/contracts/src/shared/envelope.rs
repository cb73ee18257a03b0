//! Reading vendor envelopes.
//!
//! The product API is not consistent about where it puts things: a list
//! payload may be a bare array or an object wrapping the array under
//! `data`, and the total count shows up in one of several places. All of
//! that is resolved here through [`FieldPath`] candidate lists instead of
//! ad hoc `get` chains at every call site.

use serde_json::{Map, Value};
use std::fmt;

/// Placeholder shown for display fields the record did not provide.
pub const PLACEHOLDER: &str = "-";

/// Path of object keys into a JSON document, e.g. `data.meta.total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static [&'static str]);

impl FieldPath {
    pub const fn new(segments: &'static [&'static str]) -> Self {
        Self(segments)
    }

    /// Follow the path; `None` as soon as a segment is missing or the
    /// current node is not an object.
    pub fn resolve<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        self.0
            .iter()
            .try_fold(value, |node, key| node.as_object()?.get(*key))
    }

    /// [`resolve`](Self::resolve) starting from an already unwrapped
    /// object, so callers holding a map need not rebuild a `Value`.
    pub fn resolve_map<'a>(&self, map: &'a Map<String, Value>) -> Option<&'a Value> {
        let (first, rest) = self.0.split_first()?;
        rest.iter()
            .try_fold(map.get(*first)?, |node, key| node.as_object()?.get(*key))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// Candidate locations of the total item count, in priority order.
pub const TOTAL_PATHS: [FieldPath; 3] = [
    FieldPath::new(&["data", "total"]),
    FieldPath::new(&["data", "meta", "total"]),
    FieldPath::new(&["data", "pagination", "total"]),
];

/// Whether a value counts as "provided".
///
/// `null`, `false`, `0` and `""` are treated as missing; the vendor uses
/// all of them interchangeably for absent data.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// First candidate path that resolves to a present value.
pub fn first_present<'a>(value: &'a Value, paths: &[FieldPath]) -> Option<&'a Value> {
    paths
        .iter()
        .filter_map(|path| path.resolve(value))
        .find(|v| is_present(v))
}

/// Text rendering of a scalar for display.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Non-negative count from a number or a numeric string.
pub fn as_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Records of a list envelope.
///
/// `data.data` when it is an array, otherwise `data` when it is an
/// array, otherwise nothing.
pub fn extract_items(envelope: &Value) -> &[Value] {
    let payload = envelope.get("data");
    payload
        .and_then(|p| p.get("data"))
        .and_then(Value::as_array)
        .or_else(|| payload.and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Total item count of a list envelope.
///
/// The first candidate holding a present, countable value wins; a
/// candidate that is set but not a count is skipped. Falls back to
/// `items_len` when no candidate location carries a count. For a paged
/// payload without a total this undercounts: it is the size of the page,
/// not of the collection.
pub fn extract_total(envelope: &Value, items_len: usize) -> u64 {
    TOTAL_PATHS
        .iter()
        .filter_map(|path| path.resolve(envelope))
        .filter(|v| is_present(v))
        .find_map(as_count)
        .unwrap_or(items_len as u64)
}

/// Single record of a detail envelope (`data` as an object).
pub fn extract_record(envelope: &Value) -> Option<&Map<String, Value>> {
    envelope.get("data").and_then(Value::as_object)
}

/// One normalized page of a list envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

/// Extract the records of `envelope` and map each one with `map`.
pub fn read_list<T>(envelope: &Value, map: impl Fn(&Value) -> T) -> ListPage<T> {
    let raw = extract_items(envelope);
    ListPage {
        total: extract_total(envelope, raw.len()),
        items: raw.iter().map(map).collect(),
    }
}
