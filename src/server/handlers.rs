//! HTTP handlers for the intake routes

use crate::core::error::IntakeError;
use crate::core::response::Acknowledgment;
use crate::core::rules::{RuleSet, messages};
use crate::core::service::IntakeService;
use crate::core::validation::IntakePayload;
use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};

/// Shared state of the intake routes
#[derive(Clone)]
pub struct AppState {
    pub service: IntakeService,
}

/// `POST /forms`
///
/// Always answers with an acknowledgment fragment: 200 on success, 400 for
/// unreadable or invalid input, 500 when the store fails.
pub async fn submit_form(
    State(state): State<AppState>,
    payload: Result<IntakePayload, IntakeError>,
) -> Result<Acknowledgment, IntakeError> {
    let payload = payload.inspect_err(|e| {
        tracing::info!(error = %e, "Rejected unreadable form body");
    })?;

    tracing::debug!(fields = ?payload.keys(), "Received form submission");

    match state.service.submit(&payload).await {
        Ok(submission) => {
            tracing::info!(id = %submission.id, "Stored submission");
            Ok(Acknowledgment::ok(messages::SUBMITTED))
        }
        Err(IntakeError::Validation(e)) => {
            tracing::info!(
                field = e.first().map(|f| f.field.as_str()).unwrap_or_default(),
                failures = e.errors().len(),
                "Rejected invalid submission"
            );
            Err(e.into())
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to store submission");
            Err(e)
        }
    }
}

/// `GET /forms/rules`
///
/// The loan year bound is recomputed on every call.
pub async fn form_rules() -> Json<RuleSet> {
    Json(RuleSet::current())
}

/// `GET /health`
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let (status, label) = if state.service.is_healthy().await {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status,
        Json(json!({
            "status": label,
            "service": env!("CARGO_PKG_NAME")
        })),
    )
}
