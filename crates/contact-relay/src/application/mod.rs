//! Application layer for contact-relay.
//!
//! Knows *what* happens to a submission (presence check, email mapping,
//! one send attempt) and delegates *how* mail is delivered to a
//! [`MailTransport`] supplied by the infrastructure layer.

pub mod relay_service;

pub use relay_service::{MailTransport, RelayOutcome, RelayService, TransportError};
