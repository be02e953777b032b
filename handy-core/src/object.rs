// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Helpers over dynamic JSON-shaped data.

use handy_error::{HandyError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Deep copy through a JSON round trip.
///
/// Only what survives JSON makes it across: `#[serde(skip)]` fields come back
/// as their default, maps with non-string keys and non-finite floats do not
/// serialize at all. Types that are `Clone` should prefer `clone()`; this is
/// for data that must be detached from its original representation.
///
/// # Errors
/// `HandyError::Serialization` when the value cannot be written to or read
/// back from JSON.
pub fn deep_clone<T>(value: &T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let json = serde_json::to_value(value)
        .map_err(|error| HandyError::serialization(format!("serialize: {error}")))?;

    serde_json::from_value(json)
        .map_err(|error| HandyError::serialization(format!("deserialize: {error}")))
}

/// Structural equality of two JSON values.
///
/// Both sides must be the same kind of value. Objects need the same number of
/// keys and every key deep-equal, in any order; arrays compare element by
/// element. Numbers compare by value, so `1` equals `1.0`.
///
/// ```
/// use handy_core::deep_equal;
/// use serde_json::json;
///
/// assert!(deep_equal(&json!({"a": 1, "b": [2]}), &json!({"b": [2], "a": 1})));
/// assert!(!deep_equal(&json!({"a": 1, "b": [2]}), &json!({"a": 1, "b": [3]})));
/// assert!(!deep_equal(&json!(1), &json!("1")));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b || a.as_f64() == b.as_f64(),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| deep_equal(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, a)| b.get(key).is_some_and(|b| deep_equal(a, b)))
        }
        _ => false,
    }
}

/// Follow a dotted `path` into `value`.
///
/// Segments index objects by key and arrays by position. A missing key, an
/// out-of-range index or a step into a scalar yields `None`. A present `null`
/// is returned as `Some(&Value::Null)`.
///
/// ```
/// use handy_core::get_prop;
/// use serde_json::json;
///
/// let user = json!({"profile": {"emails": ["a@x.io", "b@x.io"]}});
///
/// assert_eq!(get_prop(&user, "profile.emails.1"), Some(&json!("b@x.io")));
/// assert_eq!(get_prop(&user, "profile.phone"), None);
/// ```
pub fn get_prop<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// [`get_prop`], falling back to `default` when the path does not resolve.
pub fn get_prop_or(value: &Value, path: &str, default: Value) -> Value {
    get_prop(value, path).cloned().unwrap_or(default)
}

/// Whether `value` is a JSON object with no keys. Arrays, `null` and scalars
/// are not empty objects.
pub fn is_empty_object(value: &Value) -> bool {
    value.as_object().is_some_and(serde_json::Map::is_empty)
}
