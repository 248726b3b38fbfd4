//! Reusable field validators
//!
//! Validators run after filters. Each one checks a single concern and lets
//! values of other shapes through, so `required` alone decides presence.

use crate::core::field::FieldFormat;
use serde_json::Value;

/// Signature shared by every validator
pub type ValidatorFn = dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync;

/// Validator: field is required (not null)
pub fn required(
    message: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Value| {
        if value.is_null() {
            Err(message.to_string())
        } else {
            Ok(())
        }
    }
}

/// Validator: string must not exceed `max` characters
pub fn max_length(
    max: usize,
    message: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Value| match value.as_str() {
        Some(s) if s.chars().count() > max => Err(message.to_string()),
        _ => Ok(()),
    }
}

/// Validator: number must be at least `min`
pub fn min_value(
    min: f64,
    message: impl Into<String>,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    let message = message.into();
    move |_: &str, value: &Value| match value.as_f64() {
        Some(num) if num < min => Err(message.clone()),
        _ => Ok(()),
    }
}

/// Validator: number must be within `[min, max]`
pub fn range(
    min: f64,
    max: f64,
    message: impl Into<String>,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    let message = message.into();
    move |_: &str, value: &Value| match value.as_f64() {
        Some(num) if num < min || num > max => Err(message.clone()),
        _ => Ok(()),
    }
}

/// Validator: value must be in allowed list
pub fn in_list(
    allowed: &'static [&'static str],
    message: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Value| match value {
        Value::Null => Ok(()),
        Value::String(s) if allowed.contains(&s.as_str()) => Ok(()),
        _ => Err(message.to_string()),
    }
}

/// Validator: string must match a field format
pub fn format(
    format: FieldFormat,
    message: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Value| {
        if value.is_null() || format.validate(value) {
            Ok(())
        } else {
            Err(message.to_string())
        }
    }
}

/// Validator: value must be exactly `true`
pub fn accepted(
    message: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Value| match value {
        Value::Bool(true) => Ok(()),
        _ => Err(message.to_string()),
    }
}
