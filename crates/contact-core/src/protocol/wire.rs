//! JSON request/response shapes for the contact endpoint.
//!
//! The request body is a flat object with three string fields.  The server
//! never trusts the client, so it reads the body leniently through
//! [`RawSubmission`] and checks presence itself before doing anything else.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::submission::{ContactSubmission, Field};

/// Path of the contact-submission endpoint.
pub const CONTACT_PATH: &str = "/api/contact";

/// Error body for a request with an absent or empty field.
pub const MISSING_FIELDS: &str = "Missing fields";

/// Error body for a failed mail dispatch.  Deliberately generic.
pub const SEND_FAILED: &str = "Failed to send email";

// ── Response ──────────────────────────────────────────────────────────────────

/// Response body of the contact endpoint.
///
/// # Serde representation
///
/// ```json
/// {"success":true}
/// {"error":"Missing fields"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContactResponse {
    Success { success: bool },
    Error { error: String },
}

impl ContactResponse {
    pub fn success() -> Self {
        ContactResponse::Success { success: true }
    }

    pub fn missing_fields() -> Self {
        ContactResponse::Error {
            error: MISSING_FIELDS.to_string(),
        }
    }

    pub fn send_failed() -> Self {
        ContactResponse::Error {
            error: SEND_FAILED.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ContactResponse::Success { success: true })
    }
}

// ── Request ───────────────────────────────────────────────────────────────────

/// Returned by [`RawSubmission::require_fields`] when a field is absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing fields: {}", list(.fields))]
pub struct MissingFields {
    /// The absent fields, in form order.
    pub fields: Vec<Field>,
}

fn list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A request body as received, before the presence check.
///
/// A field is `Some` only when the key exists **and** holds a non-empty JSON
/// string.  Numbers, `null`, arrays, and `""` all count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl RawSubmission {
    /// Reads a request body.
    ///
    /// Malformed JSON, or JSON that is not an object, yields a value with all
    /// three fields absent so the caller answers it like any other
    /// incomplete submission.
    pub fn from_json(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::from_value(&value),
            Err(_) => Self::default(),
        }
    }

    /// Extracts the three fields from an already-parsed JSON value.
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        };
        Self {
            name: text(Field::Name.as_str()),
            email: text(Field::Email.as_str()),
            message: text(Field::Message.as_str()),
        }
    }

    /// Lists the fields that are absent.
    pub fn missing(&self) -> Vec<Field> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push(Field::Name);
        }
        if self.email.is_none() {
            missing.push(Field::Email);
        }
        if self.message.is_none() {
            missing.push(Field::Message);
        }
        missing
    }

    /// Converts into a [`ContactSubmission`] when all fields are present.
    ///
    /// Only presence is checked here; shape rules belong to the form.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFields`] naming every absent field.
    pub fn require_fields(self) -> Result<ContactSubmission, MissingFields> {
        match (self.name, self.email, self.message) {
            (Some(name), Some(email), Some(message)) => Ok(ContactSubmission {
                name,
                email,
                message,
            }),
            (name, email, message) => Err(MissingFields {
                fields: RawSubmission {
                    name,
                    email,
                    message,
                }
                .missing(),
            }),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
