//! Response envelope normalization.
//!
//! The API answers either with the payload itself or with a wrapper object
//! carrying it under `data` (alongside `success` / `message`). Single-entity
//! lookups sometimes come back as a one-element array. Every endpoint decodes
//! through here exactly once, so callers only ever see domain types.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;

/// Decode a collection response.
pub fn decode_list<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, ApiError> {
    match unwrap_data(parse(body)?) {
        value @ Value::Array(_) => Ok(serde_json::from_value(value)?),
        _ => Err(ApiError::UnexpectedShape {
            expected: "a list or {\"data\": [...]}",
        }),
    }
}

/// Decode a single-entity response.
pub fn decode_one<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let value = match unwrap_data(parse(body)?) {
        Value::Array(items) => items.into_iter().next().ok_or(ApiError::UnexpectedShape {
            expected: "a non-empty list",
        })?,
        Value::Null => {
            return Err(ApiError::UnexpectedShape {
                expected: "an object or {\"data\": {...}}",
            })
        }
        other => other,
    };
    Ok(serde_json::from_value(value)?)
}

fn parse(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_slice(body)?)
}

fn unwrap_data(value: Value) -> Value {
    match value {
        Value::Object(mut map) if is_wrapper(&map) => map.remove("data").unwrap_or(Value::Null),
        other => other,
    }
}

/// A wrapper has a non-null `data` field and is not itself an entity.
fn is_wrapper(map: &serde_json::Map<String, Value>) -> bool {
    map.get("data").is_some_and(|data| !data.is_null())
        && !map.contains_key("_id")
        && !map.contains_key("id")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Assignee, Task, User};

    const TASK: &str = r#"{"_id":"1","title":"T","description":"D","assigned_to":"a@x.com","priority":"High","status":"Open"}"#;

    #[test]
    fn bare_and_wrapped_lists_decode_the_same() {
        let bare = format!("[{TASK}]");
        let wrapped = format!(r#"{{"success":true,"message":"ok","data":[{TASK}]}}"#);

        let a: Vec<Task> = decode_list(bare.as_bytes()).unwrap();
        let b: Vec<Task> = decode_list(wrapped.as_bytes()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a[0].id, "1");
    }

    #[test]
    fn single_entity_accepts_wrapper_and_array() {
        let wrapped = format!(r#"{{"data":{TASK}}}"#);
        let array = format!("[{TASK}]");

        let a: Task = decode_one(TASK.as_bytes()).unwrap();
        let b: Task = decode_one(wrapped.as_bytes()).unwrap();
        let c: Task = decode_one(array.as_bytes()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn list_keeps_tasks_whose_assignee_was_deleted() {
        let orphan = r#"{"_id":"2","title":"T2","description":"D","assigned_to":null,"priority":"Low","status":"Done"}"#;
        let body = format!("[{TASK},{orphan}]");

        let tasks: Vec<Task> = decode_list(body.as_bytes()).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].assigned_to, Assignee::Unassigned);
    }

    #[test]
    fn list_rejects_object_payload() {
        let err = decode_list::<User>(br#"{"data":{"_id":"u"}}"#).unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedShape { .. }));
    }

    #[test]
    fn one_rejects_empty_array_and_empty_body() {
        assert!(matches!(
            decode_one::<Task>(b"[]").unwrap_err(),
            ApiError::UnexpectedShape { .. }
        ));
        assert!(matches!(
            decode_one::<Task>(b"  ").unwrap_err(),
            ApiError::UnexpectedShape { .. }
        ));
    }

    #[test]
    fn entity_with_data_field_is_not_unwrapped() {
        let body = br#"{"_id":"u1","name":"N","email":"e","contact":"c","data":{"x":1}}"#;
        let user: User = decode_one(body).unwrap();
        assert_eq!(user.id, "u1");
    }
}
