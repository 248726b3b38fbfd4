//! The intake rule set
//!
//! Every limit, allowed value list and user-facing message lives here. The
//! server-side schema reads these constants directly and the browser script
//! receives the same values through [`RuleSet`], so there is a single copy of
//! each rule.

use crate::core::field::{EMAIL_PATTERN, PHONE_PATTERN, UPI_PATTERN};
use crate::entities::{Bank, LoanType, PaymentMode, YesNo};
use chrono::Datelike;
use serde::Serialize;

/// Model field names, as persisted
pub mod fields {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const ADDRESS: &str = "address";
    pub const EMI: &str = "emi";
    pub const BANK: &str = "bank";
    pub const STUDENT_LOAN: &str = "studentLoan";
    pub const LOAN_BANK: &str = "loanBank";
    pub const LOAN_AMOUNT: &str = "loanAmount";
    pub const LOAN_YEAR: &str = "loanYear";
    pub const LOAN_TYPE: &str = "loanType";
    pub const PAYMENT_MODE: &str = "paymentMode";
    pub const UPI: &str = "upi";
    pub const DECLARE: &str = "declare";
}

pub const NAME_MAX_LEN: usize = 100;
pub const ADDRESS_MAX_LEN: usize = 200;
pub const LOAN_BANK_MAX_LEN: usize = 50;
pub const LOAN_YEAR_MIN: i32 = 2000;

/// User-facing messages
pub mod messages {
    pub const NAME_REQUIRED: &str = "Name is required";
    pub const NAME_TOO_LONG: &str = "Name cannot exceed 100 characters";
    pub const EMAIL_REQUIRED: &str = "Email is required";
    pub const EMAIL_INVALID: &str = "Please enter a valid email address";
    pub const PHONE_REQUIRED: &str = "Phone number is required";
    pub const PHONE_INVALID: &str =
        "Please enter a valid 10-digit Indian phone number starting with 6-9";
    pub const ADDRESS_TOO_LONG: &str = "Address cannot exceed 200 characters";
    pub const BANK_REQUIRED: &str = "Bank selection is required";
    pub const BANK_INVALID: &str = "Please select a valid bank option";
    pub const STUDENT_LOAN_REQUIRED: &str = "Please specify if you've used a student loan before";
    pub const STUDENT_LOAN_INVALID: &str = "Please select either 'Yes' or 'No'";
    pub const LOAN_BANK_REQUIRED: &str = "Bank name required for student loan";
    pub const LOAN_BANK_TOO_LONG: &str = "Bank name cannot exceed 50 characters";
    pub const LOAN_AMOUNT_REQUIRED: &str = "Loan amount required for student loan";
    pub const LOAN_AMOUNT_NOT_A_NUMBER: &str = "Loan amount must be a number";
    pub const LOAN_AMOUNT_NEGATIVE: &str = "Loan amount cannot be negative";
    pub const LOAN_YEAR_REQUIRED: &str = "Loan year required for student loan";
    pub const LOAN_YEAR_NOT_AN_INTEGER: &str = "Loan year must be a whole number";
    pub const LOAN_TYPE_REQUIRED: &str = "Loan type is required";
    pub const LOAN_TYPE_INVALID: &str = "Please select a valid loan type";
    pub const PAYMENT_MODE_REQUIRED: &str = "Payment mode is required";
    pub const PAYMENT_MODE_INVALID: &str = "Please select a valid payment mode";
    pub const UPI_REQUIRED: &str = "UPI ID required when payment mode is UPI";
    pub const UPI_INVALID: &str = "Please enter a valid UPI ID (e.g., name@bank)";
    pub const DECLARE_REQUIRED: &str = "You must agree to the terms and policy";
    pub const TEXT_EXPECTED: &str = "Please enter plain text in every field";

    pub const SUBMITTED: &str = "Thank you! Your form has been submitted.";
    pub const BAD_REQUEST: &str = "Failed to submit form. Please check your inputs and try again.";
    pub const UNEXPECTED: &str = "An unexpected error occurred. Please try again later.";

    /// Loan year bound message; the upper bound moves with the calendar.
    pub fn loan_year_out_of_range(max_year: i32) -> String {
        format!(
            "Loan year must be between {} and {}",
            super::LOAN_YEAR_MIN,
            max_year
        )
    }
}

/// Upper bound for `loanYear`, read from the local clock on every call
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Message reported when a required field is absent
pub fn required_message(field: &str) -> &'static str {
    match field {
        fields::NAME => messages::NAME_REQUIRED,
        fields::EMAIL => messages::EMAIL_REQUIRED,
        fields::PHONE => messages::PHONE_REQUIRED,
        fields::BANK => messages::BANK_REQUIRED,
        fields::STUDENT_LOAN => messages::STUDENT_LOAN_REQUIRED,
        fields::LOAN_BANK => messages::LOAN_BANK_REQUIRED,
        fields::LOAN_AMOUNT => messages::LOAN_AMOUNT_REQUIRED,
        fields::LOAN_YEAR => messages::LOAN_YEAR_REQUIRED,
        fields::LOAN_TYPE => messages::LOAN_TYPE_REQUIRED,
        fields::PAYMENT_MODE => messages::PAYMENT_MODE_REQUIRED,
        fields::UPI => messages::UPI_REQUIRED,
        fields::DECLARE => messages::DECLARE_REQUIRED,
        _ => messages::BAD_REQUEST,
    }
}

/// Rule set handed to the browser for advisory validation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSet {
    pub patterns: Patterns,
    pub name_max_length: usize,
    pub address_max_length: usize,
    pub loan_bank_max_length: usize,
    pub loan_year_min: i32,
    pub loan_year_max: i32,
    pub banks: &'static [&'static str],
    pub student_loan: &'static [&'static str],
    pub loan_types: &'static [&'static str],
    pub payment_modes: &'static [&'static str],
    pub messages: ClientMessages,
}

#[derive(Debug, Clone, Serialize)]
pub struct Patterns {
    pub phone: &'static str,
    pub email: &'static str,
    pub upi: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientMessages {
    pub phone: &'static str,
    pub email: &'static str,
    pub upi: &'static str,
    pub upi_required: &'static str,
    pub loan_amount: &'static str,
    pub loan_year: String,
    pub declare: &'static str,
    pub incomplete: &'static str,
}

impl RuleSet {
    /// Rule set with the loan year bound fixed at `loan_year_max`
    pub fn for_year(loan_year_max: i32) -> Self {
        Self {
            patterns: Patterns {
                phone: PHONE_PATTERN,
                email: EMAIL_PATTERN,
                upi: UPI_PATTERN,
            },
            name_max_length: NAME_MAX_LEN,
            address_max_length: ADDRESS_MAX_LEN,
            loan_bank_max_length: LOAN_BANK_MAX_LEN,
            loan_year_min: LOAN_YEAR_MIN,
            loan_year_max,
            banks: Bank::VALUES,
            student_loan: YesNo::VALUES,
            loan_types: LoanType::VALUES,
            payment_modes: PaymentMode::VALUES,
            messages: ClientMessages {
                phone: messages::PHONE_INVALID,
                email: messages::EMAIL_INVALID,
                upi: messages::UPI_INVALID,
                upi_required: messages::UPI_REQUIRED,
                loan_amount: messages::LOAN_AMOUNT_NEGATIVE,
                loan_year: messages::loan_year_out_of_range(loan_year_max),
                declare: messages::DECLARE_REQUIRED,
                incomplete: "Please fill all required fields correctly.",
            },
        }
    }

    /// Rule set for the current calendar year
    pub fn current() -> Self {
        Self::for_year(current_year())
    }
}
