//! Loosely typed payloads and the helpers the generated builders copy
//! fields with.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::SdkError;

/// A loosely typed resource payload: a JSON object keyed by caller-facing
/// field names.
pub type Payload = Map<String, Value>;

/// Starts a resource object carrying its `resourceType` tag.
pub fn new_resource(type_name: &str) -> Payload {
    let mut resource = Payload::new();
    resource.insert("resourceType".to_string(), Value::String(type_name.to_string()));
    resource
}

/// Copies `caller_key` from `input` onto `target_key` of `resource`.
///
/// A missing key and an explicit null are both treated as absent.
pub fn copy_field(input: &Payload, resource: &mut Payload, caller_key: &str, target_key: &str) {
    if let Some(value) = input.get(caller_key) {
        if !value.is_null() {
            resource.insert(target_key.to_string(), value.clone());
        }
    }
}

/// Copies `caller_key` from `input` onto `target_key` of `resource`, falling
/// back to `default` when the caller omitted the key or sent null.
pub fn copy_field_or(
    input: &Payload,
    resource: &mut Payload,
    caller_key: &str,
    target_key: &str,
    default: Value,
) {
    match input.get(caller_key) {
        Some(value) if !value.is_null() => {
            resource.insert(target_key.to_string(), value.clone());
        }
        _ => {
            resource.insert(target_key.to_string(), default);
        }
    }
}

/// Serializes typed parameters into the payload the builders accept.
///
/// # Examples
///
/// ```
/// use atrius_hie_sdk::to_payload;
/// use serde_json::json;
///
/// let payload = to_payload(&json!({ "patientId": "pat-1" }))?;
/// assert_eq!(payload["patientId"], json!("pat-1"));
/// # Ok::<(), atrius_hie_sdk::SdkError>(())
/// ```
pub fn to_payload<T: Serialize>(params: &T) -> Result<Payload, SdkError> {
    match serde_json::to_value(params)? {
        Value::Object(payload) => Ok(payload),
        other => Err(SdkError::NonObjectParams(value_kind(&other))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
