//! Field formats and the patterns behind them
//!
//! Patterns are written with ASCII classes only so the same source string is
//! valid for both the Rust `regex` crate and a browser `RegExp`. The rule set
//! endpoint hands these exact strings to the client script.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Indian mobile number: ten digits, first digit 6-9.
pub const PHONE_PATTERN: &str = r"^[6-9][0-9]{9}$";

/// Loose email shape: dotted or hyphenated local and domain parts ending in
/// one or more 2-3 character segments. Not RFC 5322.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*@[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*(\.[A-Za-z0-9_]{2,3})+$";

/// UPI virtual payment address, `local@provider`.
pub const UPI_PATTERN: &str = r"^[A-Za-z0-9_.-]+@[A-Za-z0-9]+$";

/// Field format validators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Email,
    Phone,
    Upi,
}

impl FieldFormat {
    /// Source pattern for this format
    pub fn pattern(&self) -> &'static str {
        match self {
            FieldFormat::Email => EMAIL_PATTERN,
            FieldFormat::Phone => PHONE_PATTERN,
            FieldFormat::Upi => UPI_PATTERN,
        }
    }

    /// Check a string against this format
    pub fn is_match(&self, value: &str) -> bool {
        self.regex().is_match(value)
    }

    /// Validate a field value against this format
    ///
    /// Non-string values never match.
    pub fn validate(&self, value: &Value) -> bool {
        value.as_str().is_some_and(|s| self.is_match(s))
    }

    fn regex(&self) -> &'static Regex {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
        static UPI_REGEX: OnceLock<Regex> = OnceLock::new();

        let cell = match self {
            FieldFormat::Email => &EMAIL_REGEX,
            FieldFormat::Phone => &PHONE_REGEX,
            FieldFormat::Upi => &UPI_REGEX,
        };
        cell.get_or_init(|| Regex::new(self.pattern()).expect("built-in pattern must compile"))
    }
}
