//! Submission schema
//!
//! Validation runs in two passes. The per-field pass applies the declarative
//! [`EntityValidationConfig`]: normalization filters, then format, range and
//! choice checks. The conditional pass then looks at the trigger fields as
//! typed variants (`studentLoan`, `paymentMode`) and enforces the fields they
//! make mandatory. A field that already failed in the first pass is not
//! reported twice.

use super::config::{EntityValidationConfig, FieldRule, FilterOutcome};
use super::{filters, validators};
use crate::core::error::{FieldError, ValidationError};
use crate::core::field::FieldFormat;
use crate::core::rules::{self, fields, messages};
use crate::entities::{
    Bank, LoanType, PaymentMode, StudentLoan, Submission, SubmissionFields, YesNo,
};
use serde_json::{Map, Value};

/// Validator for candidate submissions
///
/// The loan year upper bound is part of the schema, so build a fresh schema
/// per request with [`SubmissionSchema::current`].
#[derive(Debug, Clone)]
pub struct SubmissionSchema {
    max_loan_year: i32,
    config: EntityValidationConfig,
}

impl SubmissionSchema {
    /// Schema whose loan year bound is `max_loan_year`
    pub fn for_year(max_loan_year: i32) -> Self {
        Self {
            max_loan_year,
            config: field_rules(max_loan_year),
        }
    }

    /// Schema bounded by the current calendar year
    pub fn current() -> Self {
        Self::for_year(rules::current_year())
    }

    pub fn max_loan_year(&self) -> i32 {
        self.max_loan_year
    }

    /// Normalize and validate a candidate keyed by model field names
    ///
    /// Returns the typed record ready for insertion, or every field error
    /// found in field order.
    pub fn validate(&self, candidate: &Map<String, Value>) -> Result<Submission, ValidationError> {
        let mut outcome = self.config.validate_and_filter(candidate);
        check_conditional(&mut outcome);

        if !outcome.errors.is_empty() {
            sort_by_field_order(&mut outcome.errors);
            return Err(ValidationError::new(outcome.errors));
        }

        build_fields(&outcome.values).map(Submission::new)
    }
}

fn field_rules(max_loan_year: i32) -> EntityValidationConfig {
    let text = |field| {
        FieldRule::new(field)
            .filter(filters::to_text(messages::TEXT_EXPECTED))
            .filter(filters::trim())
            .filter(filters::blank_as_absent())
    };
    // JSON numbers stay numbers here
    let numeric = |field| {
        FieldRule::new(field)
            .filter(filters::trim())
            .filter(filters::blank_as_absent())
    };

    EntityValidationConfig::new()
        .field(
            text(fields::NAME)
                .validate(validators::required(messages::NAME_REQUIRED))
                .validate(validators::max_length(rules::NAME_MAX_LEN, messages::NAME_TOO_LONG)),
        )
        .field(
            text(fields::EMAIL)
                .filter(filters::lowercase())
                .validate(validators::required(messages::EMAIL_REQUIRED))
                .validate(validators::format(FieldFormat::Email, messages::EMAIL_INVALID)),
        )
        .field(
            text(fields::PHONE)
                .validate(validators::required(messages::PHONE_REQUIRED))
                .validate(validators::format(FieldFormat::Phone, messages::PHONE_INVALID)),
        )
        .field(
            text(fields::ADDRESS).validate(validators::max_length(
                rules::ADDRESS_MAX_LEN,
                messages::ADDRESS_TOO_LONG,
            )),
        )
        .field(text(fields::EMI))
        .field(
            text(fields::BANK)
                .validate(validators::required(messages::BANK_REQUIRED))
                .validate(validators::in_list(Bank::VALUES, messages::BANK_INVALID)),
        )
        .field(
            text(fields::STUDENT_LOAN)
                .validate(validators::required(messages::STUDENT_LOAN_REQUIRED))
                .validate(validators::in_list(YesNo::VALUES, messages::STUDENT_LOAN_INVALID)),
        )
        .field(text(fields::LOAN_BANK).validate(validators::max_length(
            rules::LOAN_BANK_MAX_LEN,
            messages::LOAN_BANK_TOO_LONG,
        )))
        .field(
            numeric(fields::LOAN_AMOUNT)
                .filter(filters::to_number(messages::LOAN_AMOUNT_NOT_A_NUMBER))
                .validate(validators::min_value(0.0, messages::LOAN_AMOUNT_NEGATIVE)),
        )
        .field(
            numeric(fields::LOAN_YEAR)
                .filter(filters::to_integer(messages::LOAN_YEAR_NOT_AN_INTEGER))
                .validate(validators::range(
                    f64::from(rules::LOAN_YEAR_MIN),
                    f64::from(max_loan_year),
                    messages::loan_year_out_of_range(max_loan_year),
                )),
        )
        .field(
            text(fields::LOAN_TYPE)
                .validate(validators::required(messages::LOAN_TYPE_REQUIRED))
                .validate(validators::in_list(LoanType::VALUES, messages::LOAN_TYPE_INVALID)),
        )
        .field(
            text(fields::PAYMENT_MODE)
                .validate(validators::required(messages::PAYMENT_MODE_REQUIRED))
                .validate(validators::in_list(
                    PaymentMode::VALUES,
                    messages::PAYMENT_MODE_INVALID,
                )),
        )
        .field(text(fields::UPI))
        .field(
            FieldRule::new(fields::DECLARE)
                .filter(filters::checkbox())
                .validate(validators::accepted(messages::DECLARE_REQUIRED)),
        )
}

fn choice<T>(values: &Map<String, Value>, field: &str, parse: fn(&str) -> Option<T>) -> Option<T> {
    values.get(field).and_then(Value::as_str).and_then(parse)
}

fn check_conditional(outcome: &mut FilterOutcome) {
    let mut missing = Vec::new();

    match choice(&outcome.values, fields::STUDENT_LOAN, YesNo::parse) {
        Some(YesNo::Yes) => {
            for field in [fields::LOAN_BANK, fields::LOAN_AMOUNT, fields::LOAN_YEAR] {
                if !outcome.values.contains_key(field) && !outcome.has_error(field) {
                    missing.push(FieldError::new(field, rules::required_message(field)));
                }
            }
        }
        Some(YesNo::No) | None => {}
    }

    match choice(&outcome.values, fields::PAYMENT_MODE, PaymentMode::parse) {
        Some(PaymentMode::Upi) => match outcome.values.get(fields::UPI) {
            None => missing.push(FieldError::new(fields::UPI, messages::UPI_REQUIRED)),
            Some(upi) if !FieldFormat::Upi.validate(upi) => {
                missing.push(FieldError::new(fields::UPI, messages::UPI_INVALID))
            }
            Some(_) => {}
        },
        Some(_) | None => {}
    }

    outcome.errors.extend(missing);
}

const FIELD_ORDER: [&str; 14] = [
    fields::NAME,
    fields::EMAIL,
    fields::PHONE,
    fields::ADDRESS,
    fields::EMI,
    fields::BANK,
    fields::STUDENT_LOAN,
    fields::LOAN_BANK,
    fields::LOAN_AMOUNT,
    fields::LOAN_YEAR,
    fields::LOAN_TYPE,
    fields::PAYMENT_MODE,
    fields::UPI,
    fields::DECLARE,
];

fn sort_by_field_order(errors: &mut [FieldError]) {
    errors.sort_by_key(|e| {
        FIELD_ORDER
            .iter()
            .position(|f| *f == e.field)
            .unwrap_or(FIELD_ORDER.len())
    });
}

fn need_choice<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::single(field, rules::required_message(field)))
}

fn build_fields(values: &Map<String, Value>) -> Result<SubmissionFields, ValidationError> {
    let text = |field: &str| values.get(field).and_then(Value::as_str).map(str::to_owned);
    let need = |field: &'static str| {
        text(field).ok_or_else(|| ValidationError::single(field, rules::required_message(field)))
    };

    let student_loan = match need_choice(
        fields::STUDENT_LOAN,
        choice(values, fields::STUDENT_LOAN, YesNo::parse),
    )? {
        YesNo::No => StudentLoan::No,
        YesNo::Yes => StudentLoan::Yes {
            loan_bank: need(fields::LOAN_BANK)?,
            loan_amount: values
                .get(fields::LOAN_AMOUNT)
                .and_then(Value::as_f64)
                .ok_or_else(|| {
                    ValidationError::single(fields::LOAN_AMOUNT, messages::LOAN_AMOUNT_REQUIRED)
                })?,
            loan_year: values
                .get(fields::LOAN_YEAR)
                .and_then(Value::as_i64)
                .and_then(|y| i32::try_from(y).ok())
                .ok_or_else(|| {
                    ValidationError::single(fields::LOAN_YEAR, messages::LOAN_YEAR_REQUIRED)
                })?,
        },
    };

    Ok(SubmissionFields {
        name: need(fields::NAME)?,
        email: need(fields::EMAIL)?,
        phone: need(fields::PHONE)?,
        address: text(fields::ADDRESS),
        emi: text(fields::EMI),
        bank: need_choice(fields::BANK, choice(values, fields::BANK, Bank::parse))?,
        student_loan,
        loan_type: need_choice(
            fields::LOAN_TYPE,
            choice(values, fields::LOAN_TYPE, LoanType::parse),
        )?,
        payment_mode: need_choice(
            fields::PAYMENT_MODE,
            choice(values, fields::PAYMENT_MODE, PaymentMode::parse),
        )?,
        upi: text(fields::UPI),
    })
}
