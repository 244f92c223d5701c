//! contact-form library crate.
//!
//! The Form Validator side of the contact pipeline: holds the visitor's
//! input, validates it with the shared `contact-core` rules, and submits it
//! to the relay.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Visitor input
//!         ↓
//! [contact-form]
//!   ├── application/      ContactForm state machine + ContactApi trait
//!   └── infrastructure/
//!         └── http_client/ reqwest client for POST /api/contact
//!         ↓
//! contact-relay (JSON over HTTP)
//! ```
//!
//! # Layer rules
//!
//! - `application` depends on `contact-core` only.
//! - `infrastructure` adds `reqwest`.

/// Application layer: form state and the submission seam.
pub mod application;

/// Infrastructure layer: HTTP client for the relay.
pub mod infrastructure;

pub use application::{ContactApi, ContactForm, FormStatus, Notice, SubmitError};
pub use infrastructure::HttpContactApi;
