//! Store trait for submission persistence

use crate::entities::Submission;
use anyhow::Result;
use async_trait::async_trait;

/// Persistence seam for accepted submissions
///
/// Implementations insert independent records only; there are no update or
/// delete operations and no cross-record invariants.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Insert one validated submission
    async fn insert(&self, submission: Submission) -> Result<Submission>;

    /// Number of stored submissions
    async fn count(&self) -> Result<u64>;

    /// Check that the store is reachable
    async fn ping(&self) -> Result<()>;
}
