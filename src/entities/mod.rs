//! Persisted entity types

pub mod choices;
pub mod macros;
pub mod submission;

pub use choices::{Bank, LoanType, PaymentMode, YesNo};
pub use submission::{StudentLoan, Submission, SubmissionFields};
