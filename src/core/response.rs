//! Acknowledgment responses
//!
//! Every outcome of a form post is answered the same way: a small HTML
//! fragment whose script shows a dismissible alert and sends the browser
//! back to the form. Only the status code and the message differ.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Alert-and-redirect HTML fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    pub status: StatusCode,
    pub message: String,
    pub redirect_to: String,
}

impl Acknowledgment {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            redirect_to: "/".to_string(),
        }
    }

    /// 200 acknowledgment
    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, message)
    }

    /// Render the fragment body
    ///
    /// Text is embedded as JSON string literals, with `</` broken up so the
    /// message can never close the surrounding `<script>` element.
    pub fn to_html(&self) -> String {
        format!(
            "<script>\n  alert({});\n  window.location.href = {};\n</script>\n",
            script_string(&self.message),
            script_string(&self.redirect_to),
        )
    }
}

fn script_string(text: &str) -> String {
    // Serializing a &str cannot fail
    let literal = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    literal.replace("</", "<\\/")
}

impl IntoResponse for Acknowledgment {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            self.to_html(),
        )
            .into_response()
    }
}
