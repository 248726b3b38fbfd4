//! Macro-generated HTTP tests for the intake routes.
//!
//! Drives the full stack (HTTP → extractor → validation → SubmissionStore →
//! acknowledgment) through `axum_test::TestServer` over any store backend.
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
//! intake_http_tests!(InMemorySubmissionStore::new());
//! ```

/// Generate the HTTP test suite for the intake routes.
///
/// `$factory` must evaluate to a fresh, empty store. It is re-evaluated for
/// each test.
#[macro_export]
macro_rules! intake_http_tests {
    ($factory:expr) => {
        mod intake_http_contract_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use intake::core::SubmissionStore;
            use intake::core::field::PHONE_PATTERN;
            use intake::core::rules::messages;
            use intake::server::ServerBuilder;
            use serde_json::{Value, json};
            use std::sync::Arc;

            async fn server() -> (TestServer, Arc<dyn SubmissionStore>) {
                let store: Arc<dyn SubmissionStore> = Arc::new($factory);
                let app = ServerBuilder::new()
                    .with_shared_store(store.clone())
                    .with_static_dir(static_dir())
                    .build()
                    .expect("Failed to build app");
                let server = TestServer::new(app);
                (server, store)
            }

            fn without(
                form: Vec<(&'static str, String)>,
                key: &str,
            ) -> Vec<(&'static str, String)> {
                form.into_iter().filter(|(k, _)| *k != key).collect()
            }

            // ==================================================================
            // Accepted submissions
            // ==================================================================

            #[tokio::test]
            async fn test_minimal_submission_is_acknowledged() {
                let (server, store) = server().await;

                let response = server.post("/forms").form(&minimal_form()).await;

                response.assert_status(StatusCode::OK);
                let content_type = response.header("content-type");
                assert!(content_type.to_str().unwrap().starts_with("text/html"));
                let body = response.text();
                assert!(body.contains(messages::SUBMITTED));
                assert!(body.contains("window.location.href = \"/\""));
                assert_eq!(store.count().await.unwrap(), 1);
            }

            #[tokio::test]
            async fn test_student_loan_with_subfields_is_accepted() {
                let (server, store) = server().await;

                let response = server.post("/forms").form(&student_loan_form(2018)).await;

                response.assert_status(StatusCode::OK);
                assert_eq!(store.count().await.unwrap(), 1);
            }

            #[tokio::test]
            async fn test_loan_year_equal_to_current_year_is_accepted() {
                let (server, _store) = server().await;

                let response = server
                    .post("/forms")
                    .form(&student_loan_form(max_loan_year()))
                    .await;

                response.assert_status(StatusCode::OK);
            }

            #[tokio::test]
            async fn test_stale_loan_fields_are_ignored_when_answer_is_no() {
                let (server, store) = server().await;
                let form = form_with(minimal_form(), "loan-year", "1850");
                let form = form_with(form, "loan-amount", "lots");

                let response = server.post("/forms").form(&form).await;

                response.assert_status(StatusCode::OK);
                assert_eq!(store.count().await.unwrap(), 1);
            }

            #[tokio::test]
            async fn test_upi_mode_with_valid_upi_is_accepted() {
                let (server, _store) = server().await;
                let form = form_with(minimal_form(), "paymentMode", "upi");
                let form = form_with(form, "upi", "asha@okaxis");

                server
                    .post("/forms")
                    .form(&form)
                    .await
                    .assert_status(StatusCode::OK);
            }

            #[tokio::test]
            async fn test_json_body_is_accepted() {
                let (server, store) = server().await;

                let response = server
                    .post("/forms")
                    .json(&json!({
                        "name": "Asha Rao",
                        "email": "ASHA@example.com",
                        "phone": "9876543210",
                        "bank": "HDFC",
                        "student-loan": "yes",
                        "loan-bank": "Canara",
                        "loan-amount": 0,
                        "loan-year": 2005,
                        "loanType": "education",
                        "paymentMode": "netbanking",
                        "declare": true
                    }))
                    .await;

                response.assert_status(StatusCode::OK);
                assert_eq!(store.count().await.unwrap(), 1);
            }

            // ==================================================================
            // Rejected submissions
            // ==================================================================

            #[tokio::test]
            async fn test_empty_upi_in_upi_mode_is_rejected() {
                let (server, store) = server().await;
                let form = form_with(minimal_form(), "paymentMode", "upi");
                let form = form_with(form, "upi", "");

                let response = server.post("/forms").form(&form).await;

                response.assert_status(StatusCode::BAD_REQUEST);
                assert!(response.text().contains(messages::UPI_REQUIRED));
                assert_eq!(store.count().await.unwrap(), 0);
            }

            #[tokio::test]
            async fn test_malformed_upi_in_upi_mode_is_rejected() {
                let (server, _store) = server().await;
                let form = form_with(minimal_form(), "paymentMode", "upi");
                let form = form_with(form, "upi", "not-an-upi");

                let response = server.post("/forms").form(&form).await;

                response.assert_status(StatusCode::BAD_REQUEST);
                assert!(response.text().contains(messages::UPI_INVALID));
            }

            #[tokio::test]
            async fn test_loan_year_after_current_year_is_rejected() {
                let (server, store) = server().await;
                let max = max_loan_year();

                let response = server
                    .post("/forms")
                    .form(&student_loan_form(max + 1))
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                assert!(response.text().contains(&messages::loan_year_out_of_range(max)));
                assert_eq!(store.count().await.unwrap(), 0);
            }

            #[tokio::test]
            async fn test_student_loan_yes_without_bank_is_rejected() {
                let (server, _store) = server().await;
                let form = without(student_loan_form(2018), "loan-bank");

                let response = server.post("/forms").form(&form).await;

                response.assert_status(StatusCode::BAD_REQUEST);
                assert!(response.text().contains(messages::LOAN_BANK_REQUIRED));
            }

            #[tokio::test]
            async fn test_missing_declaration_is_rejected() {
                let (server, store) = server().await;
                let form = without(minimal_form(), "declare");

                let response = server.post("/forms").form(&form).await;

                response.assert_status(StatusCode::BAD_REQUEST);
                assert!(response.text().contains(messages::DECLARE_REQUIRED));
                assert_eq!(store.count().await.unwrap(), 0);
            }

            #[tokio::test]
            async fn test_first_failing_field_in_form_order_is_reported() {
                let (server, _store) = server().await;
                let form = form_with(minimal_form(), "name", "   ");
                let form = form_with(form, "phone", "12345");

                let response = server.post("/forms").form(&form).await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body = response.text();
                assert!(body.contains(messages::NAME_REQUIRED));
                assert!(!body.contains(messages::PHONE_INVALID));
            }

            #[tokio::test]
            async fn test_unknown_bank_is_rejected() {
                let (server, _store) = server().await;
                let form = form_with(minimal_form(), "bank", "Gringotts");

                let response = server.post("/forms").form(&form).await;

                response.assert_status(StatusCode::BAD_REQUEST);
                assert!(response.text().contains(messages::BANK_INVALID));
            }

            #[tokio::test]
            async fn test_unsupported_content_type_is_rejected() {
                let (server, store) = server().await;

                let response = server.post("/forms").text("name=Asha").await;

                response.assert_status(StatusCode::BAD_REQUEST);
                assert!(response.text().contains(messages::BAD_REQUEST));
                assert_eq!(store.count().await.unwrap(), 0);
            }

            #[tokio::test]
            async fn test_malformed_json_is_rejected() {
                let (server, _store) = server().await;

                let response = server
                    .post("/forms")
                    .bytes("{\"name\": ".into())
                    .content_type("application/json")
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                assert!(response.text().contains(messages::BAD_REQUEST));
            }

            #[tokio::test]
            async fn test_json_array_is_rejected() {
                let (server, _store) = server().await;

                let response = server.post("/forms").json(&json!(["Asha"])).await;

                response.assert_status(StatusCode::BAD_REQUEST);
            }

            // ==================================================================
            // Rules, health and static assets
            // ==================================================================

            #[tokio::test]
            async fn test_rules_match_server_bounds() {
                let (server, _store) = server().await;

                let response = server.get("/forms/rules").await;

                response.assert_status(StatusCode::OK);
                let rules: Value = response.json();
                assert_eq!(rules["loanYearMin"], 2000);
                assert_eq!(rules["loanYearMax"], max_loan_year());
                assert_eq!(rules["nameMaxLength"], 100);
                assert_eq!(rules["patterns"]["phone"], PHONE_PATTERN);
                assert_eq!(rules["messages"]["upiRequired"], messages::UPI_REQUIRED);
                assert!(
                    rules["banks"]
                        .as_array()
                        .unwrap()
                        .contains(&json!("mPokket"))
                );
                assert_eq!(rules["studentLoan"], json!(["yes", "no"]));
            }

            #[tokio::test]
            async fn test_health_reports_ok() {
                let (server, _store) = server().await;

                for path in ["/health", "/healthz"] {
                    let response = server.get(path).await;
                    response.assert_status(StatusCode::OK);
                    let body: Value = response.json();
                    assert_eq!(body["status"], "ok");
                    assert_eq!(body["service"], "emi-intake");
                }
            }

            #[tokio::test]
            async fn test_form_page_and_script_are_served() {
                let (server, _store) = server().await;

                let page = server.get("/").await;
                page.assert_status(StatusCode::OK);
                let page = page.text();
                assert!(page.contains("id=\"loanForm\""));
                for error_slot in ["phoneError", "emailError", "loanAmountError", "loanYearError"] {
                    assert!(page.contains(error_slot), "missing inline error {}", error_slot);
                }

                let script = server.get("/emi.js").await;
                script.assert_status(StatusCode::OK);
                let script = script.text();
                assert!(script.contains("/forms/rules"));
                assert!(script.contains("[...text].length"));
                assert!(script.contains("submitBtn.disabled = !(policyViewed && this.checked)"));

                server
                    .get("/policy.html")
                    .await
                    .assert_status(StatusCode::OK);
            }

            #[tokio::test]
            async fn test_unknown_path_is_not_found() {
                let (server, _store) = server().await;

                server
                    .get("/no-such-file.txt")
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }
        }
    };
}
