//! The HTTP contract between the contact form and the relay.
//!
//! ```text
//! POST /api/contact   {"name":"…","email":"…","message":"…"}
//!
//! 200  {"success":true}
//! 400  {"error":"Missing fields"}
//! 500  {"error":"Failed to send email"}
//! ```

pub mod wire;

pub use wire::{ContactResponse, MissingFields, RawSubmission, CONTACT_PATH};
