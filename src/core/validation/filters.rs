//! Reusable field filters
//!
//! Filters normalize a raw field value before validation. A filter either
//! returns the transformed value or the message explaining why the value
//! could not be coerced.

use serde_json::{Number, Value};

/// Signature shared by every filter
pub type FilterFn = dyn Fn(&str, Value) -> Result<Value, String> + Send + Sync;

/// Filter: render JSON scalars as text
///
/// Numbers and booleans become their literal text, so a JSON `4500` is kept
/// as `"4500"`. Arrays and objects are rejected with `message`.
pub fn to_text(
    message: &'static str,
) -> impl Fn(&str, Value) -> Result<Value, String> + Send + Sync + Clone {
    move |_: &str, value: Value| match value {
        Value::Null | Value::String(_) => Ok(value),
        Value::Number(n) => Ok(Value::String(n.to_string())),
        Value::Bool(b) => Ok(Value::String(b.to_string())),
        Value::Array(_) | Value::Object(_) => Err(message.to_string()),
    }
}

/// Filter: trim whitespace from string
pub fn trim() -> impl Fn(&str, Value) -> Result<Value, String> + Send + Sync + Clone {
    |_: &str, value: Value| {
        if let Some(s) = value.as_str() {
            Ok(Value::String(s.trim().to_string()))
        } else {
            Ok(value)
        }
    }
}

/// Filter: empty string becomes absent (null)
pub fn blank_as_absent() -> impl Fn(&str, Value) -> Result<Value, String> + Send + Sync + Clone {
    |_: &str, value: Value| match value.as_str() {
        Some("") => Ok(Value::Null),
        _ => Ok(value),
    }
}

/// Filter: convert string to lowercase
pub fn lowercase() -> impl Fn(&str, Value) -> Result<Value, String> + Send + Sync + Clone {
    |_: &str, value: Value| {
        if let Some(s) = value.as_str() {
            Ok(Value::String(s.to_lowercase()))
        } else {
            Ok(value)
        }
    }
}

/// Filter: coerce decimal text into a finite number
pub fn to_number(
    message: &'static str,
) -> impl Fn(&str, Value) -> Result<Value, String> + Send + Sync + Clone {
    move |_: &str, value: Value| match value {
        Value::Null | Value::Number(_) => Ok(value),
        Value::String(s) => s
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| message.to_string()),
        _ => Err(message.to_string()),
    }
}

/// Filter: coerce integer text (or an integral number) into an integer
pub fn to_integer(
    message: &'static str,
) -> impl Fn(&str, Value) -> Result<Value, String> + Send + Sync + Clone {
    move |_: &str, value: Value| match &value {
        Value::Null => Ok(value),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::from(i))
            } else {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| Value::from(f as i64))
                    .ok_or_else(|| message.to_string())
            }
        }
        Value::String(s) => s
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| message.to_string()),
        _ => Err(message.to_string()),
    }
}

/// Filter: checkbox semantics
///
/// `"on"` and `true` become `true`. Absent stays absent. Anything else
/// becomes `false`, which an `accepted` validator then rejects.
pub fn checkbox() -> impl Fn(&str, Value) -> Result<Value, String> + Send + Sync + Clone {
    |_: &str, value: Value| match value {
        Value::Null => Ok(Value::Null),
        Value::Bool(true) => Ok(Value::Bool(true)),
        Value::String(ref s) if s == "on" => Ok(Value::Bool(true)),
        _ => Ok(Value::Bool(false)),
    }
}
