//! Domain layer: pure contact-pipeline types with no I/O.
//!
//! # What belongs in the domain layer?
//!
//! - The contact submission entity and its field rules
//! - The mapping from a submission to the email that gets sent
//!
//! # What does NOT belong here?
//!
//! - HTTP status codes or JSON bodies (see [`crate::protocol`])
//! - Anything that talks to a network or a mail server

pub mod email_syntax;
pub mod outgoing;
pub mod submission;
