//! Macro-generated test suite for `SubmissionStore` contract validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use intake::storage::InMemorySubmissionStore;
//!
//! submission_store_tests!(InMemorySubmissionStore::new());
//! ```
//!
//! # Generated Tests
//!
//! - `test_insert_returns_stored_submission`: insert echoes every field
//! - `test_insert_keeps_student_loan_subfields`: a "yes" record round-trips
//! - `test_count_empty` / `test_count_after_inserts`
//! - `test_duplicate_id_is_rejected`: the id is the primary key
//! - `test_ping`: a fresh store is reachable
//! - `test_concurrent_inserts`: parallel inserts from spawned tasks

/// Generate a `SubmissionStore` conformance test suite.
///
/// `$factory` must evaluate to a fresh, empty store. It is re-evaluated for
/// each test.
#[macro_export]
macro_rules! submission_store_tests {
    ($factory:expr) => {
        mod submission_store_contract_tests {
            use super::*;
            use intake::core::SubmissionStore;
            use std::sync::Arc;

            #[tokio::test]
            async fn test_insert_returns_stored_submission() {
                let store = $factory;
                let submission = sample_submission("Asha");

                let stored = store.insert(submission.clone()).await.unwrap();

                assert_eq!(stored.id, submission.id);
                assert_eq!(stored.name, "Asha");
                assert_eq!(stored.email, "asha@example.com");
                assert_eq!(stored.address.as_deref(), Some("12 MG Road, Pune"));
                assert_eq!(stored.emi, None);
                assert_eq!(stored.student_loan, submission.student_loan);
                assert!(stored.declare);
                assert_eq!(stored.created_at, stored.updated_at);
            }

            #[tokio::test]
            async fn test_insert_keeps_student_loan_subfields() {
                let store = $factory;
                let submission = sample_student_loan_submission("Ravi");

                let stored = store.insert(submission.clone()).await.unwrap();

                assert_eq!(stored.student_loan, submission.student_loan);
                assert_eq!(stored.upi.as_deref(), Some("asha@okaxis"));
            }

            #[tokio::test]
            async fn test_count_empty() {
                let store = $factory;
                assert_eq!(store.count().await.unwrap(), 0);
            }

            #[tokio::test]
            async fn test_count_after_inserts() {
                let store = $factory;
                for name in ["A", "B", "C"] {
                    store.insert(sample_submission(name)).await.unwrap();
                }
                assert_eq!(store.count().await.unwrap(), 3);
            }

            #[tokio::test]
            async fn test_duplicate_id_is_rejected() {
                let store = $factory;
                let submission = sample_submission("Asha");

                store.insert(submission.clone()).await.unwrap();
                assert!(store.insert(submission).await.is_err());
                assert_eq!(store.count().await.unwrap(), 1);
            }

            #[tokio::test]
            async fn test_ping() {
                let store = $factory;
                store.ping().await.unwrap();
            }

            #[tokio::test]
            async fn test_concurrent_inserts() {
                let store: Arc<dyn SubmissionStore> = Arc::new($factory);

                let handles: Vec<_> = (0..10)
                    .map(|i| {
                        let store = store.clone();
                        tokio::spawn(async move {
                            store
                                .insert(sample_submission(&format!("User{}", i)))
                                .await
                                .unwrap();
                        })
                    })
                    .collect();

                for handle in handles {
                    handle.await.unwrap();
                }

                assert_eq!(store.count().await.unwrap(), 10);
            }
        }
    };
}
