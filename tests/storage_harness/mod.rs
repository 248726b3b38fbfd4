//! Shared test harness for submission store and HTTP testing
//!
//! Provides sample submissions and form bodies, plus the contract macros
//! every store backend is checked against.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod submission_store_tests;
#[macro_use]
pub mod intake_http_tests;

use intake::core::rules::current_year;
use intake::entities::{Bank, LoanType, PaymentMode, StudentLoan, Submission, SubmissionFields};

/// A valid submission without a student loan
pub fn sample_submission(name: &str) -> Submission {
    Submission::new(SubmissionFields {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "9876543210".to_string(),
        address: Some("12 MG Road, Pune".to_string()),
        emi: None,
        bank: Bank::Sbi,
        student_loan: StudentLoan::No,
        loan_type: LoanType::Home,
        payment_mode: PaymentMode::Cash,
        upi: None,
    })
}

/// A valid submission with every student-loan subfield
pub fn sample_student_loan_submission(name: &str) -> Submission {
    let mut submission = sample_submission(name);
    submission.student_loan = StudentLoan::Yes {
        loan_bank: "Canara".to_string(),
        loan_amount: 250000.5,
        loan_year: 2018,
    };
    submission.loan_type = LoanType::Education;
    submission.payment_mode = PaymentMode::Upi;
    submission.upi = Some("asha@okaxis".to_string());
    submission
}

/// The smallest form body the endpoint accepts, keyed by display names
pub fn minimal_form() -> Vec<(&'static str, String)> {
    vec![
        ("name", "Asha Rao".to_string()),
        ("email", "asha@example.com".to_string()),
        ("phone", "9876543210".to_string()),
        ("bank", "SBI".to_string()),
        ("student-loan", "no".to_string()),
        ("loanType", "home".to_string()),
        ("paymentMode", "cash".to_string()),
        ("declare", "on".to_string()),
    ]
}

/// Replace (or add) one field of a form body
pub fn form_with(
    mut form: Vec<(&'static str, String)>,
    key: &'static str,
    value: impl Into<String>,
) -> Vec<(&'static str, String)> {
    let value = value.into();
    match form.iter_mut().find(|(k, _)| *k == key) {
        Some(entry) => entry.1 = value,
        None => form.push((key, value)),
    }
    form
}

/// A minimal form answering "yes" to student loan with every subfield
pub fn student_loan_form(loan_year: i32) -> Vec<(&'static str, String)> {
    let form = form_with(minimal_form(), "student-loan", "yes");
    let form = form_with(form, "loan-bank", "Canara");
    let form = form_with(form, "loan-amount", "250000.50");
    form_with(form, "loan-year", loan_year.to_string())
}

/// The latest loan year the server accepts right now
pub fn max_loan_year() -> i32 {
    current_year()
}

/// Directory holding the shipped form page and script
pub fn static_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("static")
}
