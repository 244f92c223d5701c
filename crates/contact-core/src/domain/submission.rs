//! The contact submission entity and its field rules.
//!
//! A [`ContactSubmission`] is the name/email/message triple a visitor sends
//! through the contact form.  It lives for exactly one request: it is never
//! stored, has no identity, and is dropped once the mail attempt completes.
//!
//! # Field rules
//!
//! | Field     | Rule                             | Error message                 |
//! |-----------|----------------------------------|-------------------------------|
//! | `name`    | at least 2 characters            | `Le nom est requis`           |
//! | `email`   | valid email syntax               | `Email invalide`              |
//! | `message` | at least 5 characters            | `Le message est trop court`   |
//!
//! All three rules are evaluated independently and every violation is
//! reported together, one message per field.  Lengths count Unicode scalar
//! values, so `"Zoé"` is three characters.  Values are checked exactly as
//! entered; no trimming happens here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::email_syntax::is_valid_email;

/// Minimum number of characters in `name`.
pub const NAME_MIN_CHARS: usize = 2;

/// Minimum number of characters in `message`.
pub const MESSAGE_MIN_CHARS: usize = 5;

pub const NAME_ERROR: &str = "Le nom est requis";
pub const EMAIL_ERROR: &str = "Email invalide";
pub const MESSAGE_ERROR: &str = "Le message est trop court";

// ── Field ─────────────────────────────────────────────────────────────────────

/// Identifies one of the three form fields.
///
/// Serialises as the lowercase field name (`"name"`, `"email"`, `"message"`),
/// which is also the key used in the JSON request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// The field's key in the JSON body and in error maps.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── FieldErrors ───────────────────────────────────────────────────────────────

/// Per-field validation messages, at most one per field.
///
/// Serialises as a JSON object keyed by field name:
///
/// ```json
/// {"email":"Email invalide","message":"Le message est trop court"}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field`.  The first message for a field wins.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// Returns the message recorded for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterates `(field, message)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

// ── ContactSubmission ─────────────────────────────────────────────────────────

/// A visitor's contact request.
///
/// Values built through [`validate`] satisfy every field rule.  Values built
/// by hand (or received over the wire) may not; call
/// [`ContactSubmission::validate`] to re-check them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Builds a submission without checking any rule.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Returns the value of `field`.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Re-checks every field rule against this value.
    ///
    /// # Errors
    ///
    /// Returns every violated rule, keyed by field.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let errors = collect_errors(&self.name, &self.email, &self.message);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Validates raw form input and builds a [`ContactSubmission`].
///
/// # Errors
///
/// Returns a [`FieldErrors`] map holding one message for each field that
/// violates its rule.  All rules are checked; the map is never partial.
///
/// # Example
///
/// ```rust
/// use contact_core::{validate, Field};
///
/// let errors = validate("A", "not-an-email", "Hi").unwrap_err();
/// assert_eq!(errors.len(), 3);
/// assert_eq!(errors.get(Field::Email), Some("Email invalide"));
/// ```
pub fn validate(name: &str, email: &str, message: &str) -> Result<ContactSubmission, FieldErrors> {
    let errors = collect_errors(name, email, message);
    if errors.is_empty() {
        Ok(ContactSubmission::new(name, email, message))
    } else {
        Err(errors)
    }
}

fn collect_errors(name: &str, email: &str, message: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if name.chars().count() < NAME_MIN_CHARS {
        errors.insert(Field::Name, NAME_ERROR);
    }
    if !is_valid_email(email) {
        errors.insert(Field::Email, EMAIL_ERROR);
    }
    if message.chars().count() < MESSAGE_MIN_CHARS {
        errors.insert(Field::Message, MESSAGE_ERROR);
    }
    errors
}

// ── Tests ─────────────────────────────────────────────────────────────────────
