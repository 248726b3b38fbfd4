//! Axum extractor for intake form posts
//!
//! The browser posts fields under their display names (`student-loan`,
//! `loan-bank`, ...). [`IntakePayload`] reads the body, form-encoded or JSON,
//! into one key/value object, and [`IntakePayload::to_candidate`] renames the
//! keys to model field names.

use crate::core::error::{IntakeError, RequestError};
use crate::core::rules::fields;
use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header,
};
use serde_json::{Map, Value};

/// Display name → model field name, in form order
pub const FORM_FIELDS: [(&str, &str); 14] = [
    ("name", fields::NAME),
    ("email", fields::EMAIL),
    ("phone", fields::PHONE),
    ("address", fields::ADDRESS),
    ("emi", fields::EMI),
    ("bank", fields::BANK),
    ("student-loan", fields::STUDENT_LOAN),
    ("loan-bank", fields::LOAN_BANK),
    ("loan-amount", fields::LOAN_AMOUNT),
    ("loan-year", fields::LOAN_YEAR),
    ("loanType", fields::LOAN_TYPE),
    ("paymentMode", fields::PAYMENT_MODE),
    ("upi", fields::UPI),
    ("declare", fields::DECLARE),
];

/// Fields only forwarded when the applicant answered "yes" to student loan
const STUDENT_LOAN_FIELDS: [&str; 3] = [fields::LOAN_BANK, fields::LOAN_AMOUNT, fields::LOAN_YEAR];

/// Raw intake body keyed by display names
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntakePayload(pub Map<String, Value>);

impl IntakePayload {
    pub fn new(values: Map<String, Value>) -> Self {
        Self(values)
    }

    /// Build from form pairs; a repeated key keeps its last value
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), Value::String(v.into())))
                .collect(),
        )
    }

    /// Field names present in the body, for logging
    pub fn keys(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    /// Rename display keys to model field names
    ///
    /// Student-loan subfields pass through only when `student-loan` is
    /// `"yes"`; otherwise they are dropped whatever the client sent, so a
    /// hidden subform can never leak stale values into the record.
    pub fn to_candidate(&self) -> Map<String, Value> {
        let student_loan = self
            .0
            .get("student-loan")
            .and_then(Value::as_str)
            .map(str::trim)
            == Some("yes");

        FORM_FIELDS
            .iter()
            .filter(|(_, model)| student_loan || !STUDENT_LOAN_FIELDS.contains(model))
            .filter_map(|(display, model)| {
                self.0
                    .get(*display)
                    .map(|value| (model.to_string(), value.clone()))
            })
            .collect()
    }
}

fn content_type(req: &Request) -> String {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase()
}

impl<S> FromRequest<S> for IntakePayload
where
    S: Send + Sync,
{
    type Rejection = IntakeError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = content_type(&req);

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(pairs): Form<Vec<(String, String)>> = Form::from_request(req, state)
                .await
                .map_err(|e| RequestError::MalformedBody(e.body_text()))?;
            return Ok(Self::from_pairs(pairs));
        }

        if content_type.starts_with("application/json") {
            let Json(body): Json<Value> = Json::from_request(req, state)
                .await
                .map_err(|e| RequestError::MalformedBody(e.body_text()))?;
            return match body {
                Value::Object(values) => Ok(Self(values)),
                _ => Err(RequestError::MalformedBody("expected a JSON object".to_string()).into()),
            };
        }

        Err(RequestError::UnsupportedContentType(content_type).into())
    }
}
