use crate::error::CoreError;
use crate::hash::IdeaId;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Canonical bytes of a value: `tag\0json`, with every object's keys sorted
/// so the output does not depend on field or map insertion order.
pub fn canonical_bytes(tag: &str, value: &impl Serialize) -> Result<Vec<u8>, CoreError> {
    let json = serde_json::to_string(&sorted(serde_json::to_value(value)?))?;
    let mut buf = Vec::with_capacity(tag.len() + 1 + json.len());
    buf.extend_from_slice(tag.as_bytes());
    buf.push(0);
    buf.extend_from_slice(json.as_bytes());
    Ok(buf)
}

/// Content address of a tagged, serializable value.
pub fn content_id(tag: &str, value: &impl Serialize) -> Result<IdeaId, CoreError> {
    Ok(IdeaId::hash(&canonical_bytes(tag, value)?))
}

fn sorted(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered: BTreeMap<String, Value> =
                map.into_iter().map(|(k, v)| (k, sorted(v))).collect();
            Value::Object(ordered.into_iter().collect::<Map<_, _>>())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sorted).collect()),
        other => other,
    }
}
