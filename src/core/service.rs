//! Intake service: validate, then persist

use crate::core::error::{IntakeError, StorageError};
use crate::core::store::SubmissionStore;
use crate::core::validation::{IntakePayload, SubmissionSchema};
use crate::entities::Submission;
use std::sync::Arc;

/// Validation and persistence for one form post
///
/// Holds the store handle created at startup; cloning shares it.
#[derive(Clone)]
pub struct IntakeService {
    store: Arc<dyn SubmissionStore>,
}

impl IntakeService {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn SubmissionStore> {
        &self.store
    }

    /// Validate a raw payload and insert it
    ///
    /// Nothing is written unless validation passes. The loan year bound is
    /// taken from the clock on every call.
    pub async fn submit(&self, payload: &IntakePayload) -> Result<Submission, IntakeError> {
        let candidate = payload.to_candidate();
        let submission = SubmissionSchema::current().validate(&candidate)?;

        let stored = self
            .store
            .insert(submission)
            .await
            .map_err(|e| StorageError::WriteFailed(format!("{:#}", e)))?;

        Ok(stored)
    }

    /// Whether the store answers a ping
    pub async fn is_healthy(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %format!("{:#}", e), "Store ping failed");
                false
            }
        }
    }
}
