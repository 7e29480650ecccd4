// src/request.rs
//! Caller-supplied request arguments and parameter projection.
//!
//! Endpoint methods accept a loosely-shaped bag of fields, a superset of
//! what the endpoint recognizes. Projection selects exactly the recognized
//! subset for the query string and JSON body; everything else is silently
//! dropped, including typos. The per-call auth override lives outside the
//! field map so it can never reach the wire as a parameter.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Arguments for a single endpoint call.
#[derive(Debug, Clone, Default)]
pub struct RequestArgs {
    fields: Map<String, Value>,
    auth: Option<String>,
}

impl RequestArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one field. Values nest freely; pass `serde_json::json!` values
    /// for filters and other structured parameters.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Overrides the client-level auth token for this call only.
    pub fn auth(mut self, token: impl Into<String>) -> Self {
        self.auth = Some(token.into());
        self
    }

    pub(crate) fn auth_override(&self) -> Option<&str> {
        self.auth.as_deref()
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

impl From<Map<String, Value>> for RequestArgs {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields, auth: None }
    }
}

/// Projects the recognized subset of the caller's fields.
///
/// Walks the recognized-name list in order and emits each name the caller
/// actually supplied, so the projected map is in recognized-name order no
/// matter how the caller ordered their fields. Absent input projects to an
/// empty map; there are no error conditions.
pub(crate) fn pick(args: &RequestArgs, names: &[&str]) -> IndexMap<String, Value> {
    names
        .iter()
        .filter_map(|&name| args.get(name).map(|value| (name.to_string(), value.clone())))
        .collect()
}

/// Renders a projected query map as `(name, value)` pairs for the URL.
/// Strings pass through verbatim; anything else falls back to its JSON text.
pub(crate) fn query_pairs(query: &IndexMap<String, Value>) -> Vec<(String, String)> {
    query
        .iter()
        .map(|(name, value)| {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (name.clone(), rendered)
        })
        .collect()
}
