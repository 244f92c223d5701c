//! # contact-core
//!
//! Shared library for the GD Consulting contact pipeline containing the
//! contact submission entity, its field rules, the outgoing email mapping,
//! and the JSON wire format spoken between the form and the relay.
//!
//! This crate is used by both the relay server and the form client.
//! It has zero dependencies on sockets, async runtimes, or mail libraries.
//!
//! # Architecture overview
//!
//! A visitor fills in a three-field form (name, email, message).  The form
//! validates the input locally, then POSTs it as JSON to the relay, which
//! re-checks the fields and turns them into exactly one email to the
//! company inbox.
//!
//! ```text
//! contact-form ──POST /api/contact──► contact-relay ──SMTP──► inbox
//!       └────────── both speak contact-core types ──────────┘
//! ```
//!
//! - **`domain`** – The [`ContactSubmission`] entity, the per-field rules
//!   ([`validate`]), and the [`OutgoingEmail`] mapping.
//!
//! - **`protocol`** – The request/response JSON shapes and the fixed error
//!   strings that make up the HTTP contract.

pub mod domain;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `contact_core::ContactSubmission` instead of the full module path.
pub use domain::email_syntax::is_valid_email;
pub use domain::outgoing::OutgoingEmail;
pub use domain::submission::{validate, ContactSubmission, Field, FieldErrors};
pub use protocol::wire::{ContactResponse, MissingFields, RawSubmission, CONTACT_PATH};
