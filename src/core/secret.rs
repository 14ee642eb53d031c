//! Secret payloads as returned by Vault.
//!
//! Vault returns arbitrary JSON under `data`. The payload is kept as a tagged
//! [`SecretValue`] so shape checks stay explicit and the materializer only
//! has to reject anything that is not text.

use serde_json::Value;
use std::collections::BTreeMap;

/// Key/value payload of a secret, sorted by key.
pub type SecretPayload = BTreeMap<String, SecretValue>;

/// A single value inside a secret payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretValue {
    Text(String),
    Map(SecretPayload),
    /// Anything else, tagged with its JSON kind.
    Other(&'static str),
}

impl SecretValue {
    /// Human readable kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::Map(_) => "map",
            Self::Other(kind) => kind,
        }
    }
}

impl From<Value> for SecretValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s),
            Value::Object(map) => Self::Map(payload_from_json(map)),
            Value::Null => Self::Other("null"),
            Value::Bool(_) => Self::Other("bool"),
            Value::Number(_) => Self::Other("number"),
            Value::Array(_) => Self::Other("array"),
        }
    }
}

/// Convert a JSON object into a payload.
pub fn payload_from_json(map: serde_json::Map<String, Value>) -> SecretPayload {
    map.into_iter().map(|(k, v)| (k, v.into())).collect()
}

/// Pick the payload that holds the actual secret.
///
/// The KV version 2 engine wraps secrets as `{"data": {...}, "metadata": {...}}`.
/// There is no version field to check, so a payload with exactly those two
/// keys, both maps, is taken to be wrapped and `data` is returned. Anything
/// else is returned unchanged. A KV v1 secret that happens to have the same
/// shape is unwrapped too.
pub fn effective_payload(mut raw: SecretPayload) -> SecretPayload {
    if is_wrapped(&raw) {
        if let Some(SecretValue::Map(data)) = raw.remove("data") {
            return data;
        }
    }
    raw
}

fn is_wrapped(raw: &SecretPayload) -> bool {
    raw.len() == 2
        && matches!(raw.get("metadata"), Some(SecretValue::Map(_)))
        && matches!(raw.get("data"), Some(SecretValue::Map(_)))
}
