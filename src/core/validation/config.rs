//! Declarative per-field validation configuration

use super::filters::FilterFn;
use super::validators::ValidatorFn;
use crate::core::error::FieldError;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Filters and validators attached to one field
#[derive(Clone)]
pub struct FieldRule {
    pub field: &'static str,
    filters: Vec<Arc<FilterFn>>,
    validators: Vec<Arc<ValidatorFn>>,
}

impl FieldRule {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            filters: Vec::new(),
            validators: Vec::new(),
        }
    }

    /// Append a filter; filters run in insertion order
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&str, Value) -> Result<Value, String> + Send + Sync + 'static,
    {
        self.filters.push(Arc::new(filter));
        self
    }

    /// Append a validator; the first failing validator wins
    pub fn validate<V>(mut self, validator: V) -> Self
    where
        V: Fn(&str, &Value) -> Result<(), String> + Send + Sync + 'static,
    {
        self.validators.push(Arc::new(validator));
        self
    }

    fn apply(&self, raw: Value) -> Result<Value, String> {
        let mut value = raw;
        for filter in &self.filters {
            value = filter(self.field, value)?;
        }
        for validator in &self.validators {
            validator(self.field, &value)?;
        }
        Ok(value)
    }
}

impl std::fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRule")
            .field("field", &self.field)
            .field("filters", &self.filters.len())
            .field("validators", &self.validators.len())
            .finish()
    }
}

/// Result of running every field rule over a payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOutcome {
    /// Normalized values of the fields that passed and are present
    pub values: Map<String, Value>,
    /// One error per failing field, in rule order
    pub errors: Vec<FieldError>,
}

impl FilterOutcome {
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

/// Ordered set of field rules for one entity
#[derive(Debug, Clone, Default)]
pub struct EntityValidationConfig {
    rules: Vec<FieldRule>,
}

impl EntityValidationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Filter and validate `payload`
    ///
    /// Keys without a rule are dropped. A missing key is treated as null, so
    /// `required` validators see it.
    pub fn validate_and_filter(&self, payload: &Map<String, Value>) -> FilterOutcome {
        let mut outcome = FilterOutcome::default();

        for rule in &self.rules {
            let raw = payload.get(rule.field).cloned().unwrap_or(Value::Null);
            match rule.apply(raw) {
                Ok(Value::Null) => {}
                Ok(value) => {
                    outcome.values.insert(rule.field.to_string(), value);
                }
                Err(message) => outcome.errors.push(FieldError::new(rule.field, message)),
            }
        }

        outcome
    }
}
