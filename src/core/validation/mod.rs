//! Validation and filtering system
//!
//! Filters normalize raw values, validators check them, and
//! [`EntityValidationConfig`] ties both to named fields. The submission
//! schema builds on that and adds the conditional-requiredness pass.

pub mod config;
pub mod extractor;
pub mod filters;
pub mod schema;
pub mod validators;

pub use config::{EntityValidationConfig, FieldRule, FilterOutcome};
pub use extractor::IntakePayload;
pub use schema::SubmissionSchema;
