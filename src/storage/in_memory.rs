//! In-memory implementation of SubmissionStore for testing and development

use crate::core::SubmissionStore;
use crate::entities::Submission;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// In-memory submission store
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
#[derive(Clone, Default)]
pub struct InMemorySubmissionStore {
    submissions: Arc<RwLock<Vec<Submission>>>,
}

impl InMemorySubmissionStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every stored submission, in insertion order
    pub fn snapshot(&self) -> Result<Vec<Submission>> {
        let submissions = self
            .submissions
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(submissions.clone())
    }
}

#[async_trait]
impl SubmissionStore for InMemorySubmissionStore {
    async fn insert(&self, submission: Submission) -> Result<Submission> {
        let mut submissions = self
            .submissions
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if submissions.iter().any(|s| s.id == submission.id) {
            return Err(anyhow!("Submission already exists: {}", submission.id));
        }

        submissions.push(submission.clone());

        Ok(submission)
    }

    async fn count(&self) -> Result<u64> {
        let submissions = self
            .submissions
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(submissions.len() as u64)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
