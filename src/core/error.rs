//! Typed error handling for the intake service
//!
//! # Error Categories
//!
//! - [`ValidationError`]: the submission failed a field or cross-field rule
//! - [`StorageError`]: the document store could not be reached or written
//! - [`RequestError`]: the request body could not be read at all
//! - [`ConfigError`]: startup configuration is unusable
//!
//! Every category converts into an [`Acknowledgment`] at the HTTP boundary.
//! Only validation messages reach the browser verbatim; storage and
//! configuration details are logged server-side and replaced by a generic
//! message.

use crate::core::response::Acknowledgment;
use crate::core::rules::messages;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type of the intake service
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl IntakeError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            IntakeError::Validation(_) | IntakeError::Request(_) => StatusCode::BAD_REQUEST,
            IntakeError::Storage(_) | IntakeError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            IntakeError::Validation(_) => "VALIDATION_ERROR",
            IntakeError::Storage(_) => "STORAGE_ERROR",
            IntakeError::Request(_) => "REQUEST_ERROR",
            IntakeError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Message safe to show the user
    pub fn user_message(&self) -> String {
        match self {
            IntakeError::Validation(e) => e.message().to_string(),
            IntakeError::Request(_) => messages::BAD_REQUEST.to_string(),
            IntakeError::Storage(_) | IntakeError::Config(_) => messages::UNEXPECTED.to_string(),
        }
    }

    /// Acknowledgment fragment for this error
    pub fn to_acknowledgment(&self) -> Acknowledgment {
        Acknowledgment::new(self.status_code(), self.user_message())
    }
}

impl IntoResponse for IntakeError {
    fn into_response(self) -> Response {
        self.to_acknowledgment().into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// One failing field and the reason it failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A submission that failed validation
///
/// Holds one error per failing field, in field order. The first entry is
/// the one reported to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", first_message(.errors))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

fn first_message(errors: &[FieldError]) -> &str {
    errors
        .first()
        .map(|e| e.message.as_str())
        .unwrap_or(messages::BAD_REQUEST)
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vec![FieldError::new(field, message)])
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    /// Message of the first failing field
    pub fn message(&self) -> &str {
        first_message(&self.errors)
    }

    /// Error recorded for `field`, if any
    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.for_field(field).is_some()
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to the document store
#[derive(Debug, Error)]
pub enum StorageError {
    /// The insert was rejected or interrupted
    #[error("failed to write submission: {0}")]
    WriteFailed(String),
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors raised before a body can be turned into a candidate submission
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}
