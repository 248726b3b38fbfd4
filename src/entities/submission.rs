//! The persisted submission record

use super::{Bank, LoanType, PaymentMode, YesNo};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Student-loan history, tagged on the `studentLoan` answer
///
/// Flattened into [`Submission`], so the persisted document keeps the flat
/// `studentLoan` / `loanBank` / `loanAmount` / `loanYear` layout. A `No`
/// answer carries no subfields at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "studentLoan")]
pub enum StudentLoan {
    #[serde(rename = "no")]
    No,

    #[serde(rename = "yes")]
    Yes {
        #[serde(rename = "loanBank")]
        loan_bank: String,

        #[serde(rename = "loanAmount")]
        loan_amount: f64,

        #[serde(rename = "loanYear")]
        loan_year: i32,
    },
}

impl StudentLoan {
    pub fn answer(&self) -> YesNo {
        match self {
            StudentLoan::No => YesNo::No,
            StudentLoan::Yes { .. } => YesNo::Yes,
        }
    }
}

/// One accepted form post
///
/// Created once per accepted submission and never updated afterwards;
/// `updated_at` equals `created_at` on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emi: Option<String>,

    pub bank: Bank,

    #[serde(flatten)]
    pub student_loan: StudentLoan,

    pub loan_type: LoanType,
    pub payment_mode: PaymentMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upi: Option<String>,

    pub declare: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Normalized field values of a submission that has passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub emi: Option<String>,
    pub bank: Bank,
    pub student_loan: StudentLoan,
    pub loan_type: LoanType,
    pub payment_mode: PaymentMode,
    pub upi: Option<String>,
}

impl Submission {
    /// Stamp validated fields with a fresh id and creation timestamps
    ///
    /// Timestamps are truncated to milliseconds, the precision of a BSON date.
    pub fn new(fields: SubmissionFields) -> Self {
        let now = Utc::now().trunc_subsecs(3);
        Self {
            id: Uuid::new_v4(),
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            address: fields.address,
            emi: fields.emi,
            bank: fields.bank,
            student_loan: fields.student_loan,
            loan_type: fields.loan_type,
            payment_mode: fields.payment_mode,
            upi: fields.upi,
            declare: true,
            created_at: now,
            updated_at: now,
        }
    }
}
