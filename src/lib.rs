//! # EMI Intake
//!
//! Loan/EMI intake service: a form page, a validated `POST /forms` endpoint
//! and MongoDB persistence of accepted submissions.
//!
//! ## Features
//!
//! - **Single rule set**: patterns, limits and messages live in
//!   [`core::rules`]; the server enforces them and the browser script loads
//!   them from `GET /forms/rules`
//! - **Two-pass validation**: per-field filters and validators, then
//!   conditional requiredness driven by `studentLoan` and `paymentMode`
//! - **Typed records**: a student-loan answer of "no" cannot carry loan
//!   subfields
//! - **Acknowledgment responses**: every outcome renders as an alert that
//!   returns the browser to the form
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use intake::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_store(InMemorySubmissionStore::new())
//!     .with_static_dir("static")
//!     .build()?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    pub use crate::config::IntakeConfig;
    pub use crate::core::{
        Acknowledgment, FieldError, IntakeError, IntakePayload, IntakeService, RuleSet,
        StorageError, SubmissionSchema, SubmissionStore, ValidationError,
    };
    pub use crate::entities::{
        Bank, LoanType, PaymentMode, StudentLoan, Submission, SubmissionFields, YesNo,
    };
    pub use crate::server::ServerBuilder;
    pub use crate::storage::InMemorySubmissionStore;
    #[cfg(feature = "mongodb_backend")]
    pub use crate::storage::MongoSubmissionStore;
}
