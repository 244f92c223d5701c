//! Infrastructure layer for contact-relay.
//!
//! Handles all I/O: the HTTP listener, the SMTP connection, and reading the
//! config file.
//!
//! # What does NOT belong here?
//!
//! - The presence check and email mapping (application layer)
//! - Config struct definitions (domain layer)

pub mod config_file;
pub mod http;
pub mod server;
pub mod smtp;

// Re-export the primary entry points so `main.rs` can call them concisely.
pub use config_file::{load_config, ConfigError, ConfigOverrides, FileConfig};
pub use http::{build_router, AppState};
pub use server::{run_server, serve};
pub use smtp::SmtpMailTransport;
