use serde::Serialize;
use serde_json::Value;

/// Errors from canonical encoding.
#[derive(Debug, thiserror::Error)]
pub enum CanonicalError {
    #[error("canonical serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CanonicalError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

/// Deterministic JSON encoding of any serializable value.
///
/// Object keys are sorted at every nesting depth, so two values with the
/// same field content always encode to the same string no matter how their
/// maps were populated. Array order is preserved: element order carries
/// meaning (ordered stages, ordered observations).
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, CanonicalError> {
    let raw = serde_json::to_value(value)?;
    Ok(serde_json::to_string(&sort_keys(raw))?)
}

/// Rebuild the value tree with object keys in sorted order, recursively.
/// Does not rely on the map backing serde_json happens to be compiled with.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut sorted = serde_json::Map::with_capacity(entries.len());
            for (key, inner) in entries {
                sorted.insert(key, sort_keys(inner));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
