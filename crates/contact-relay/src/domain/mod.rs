//! Domain layer for contact-relay.
//!
//! Plain configuration types with no I/O.  The infrastructure layer fills
//! them in from the config file, CLI flags, and environment variables.

pub mod config;

pub use config::{RelayConfig, RelaySettings, Secret, SmtpSecurity, SmtpSettings};
