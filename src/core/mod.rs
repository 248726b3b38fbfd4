//! Core module containing the domain rules of the intake service

pub mod error;
pub mod field;
pub mod response;
pub mod rules;
pub mod service;
pub mod store;
pub mod validation;

pub use error::{
    ConfigError, FieldError, IntakeError, RequestError, StorageError, ValidationError,
};
pub use field::FieldFormat;
pub use response::Acknowledgment;
pub use rules::RuleSet;
pub use service::IntakeService;
pub use store::SubmissionStore;
pub use validation::{IntakePayload, SubmissionSchema};
