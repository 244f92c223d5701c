//! contact-relay library crate.
//!
//! The Mail Relay Endpoint for the GD Consulting site: accepts a contact
//! submission over HTTP and sends exactly one email to the company inbox.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Browser form (JSON over HTTP POST)
//!         ↓
//! [contact-relay]
//!   ├── domain/           RelayConfig, SmtpSettings, Secret
//!   ├── application/      RelayService + MailTransport trait
//!   └── infrastructure/
//!         ├── http/        axum router and handlers
//!         ├── server/      bind + graceful shutdown
//!         ├── smtp/        lettre SMTP transport
//!         └── config_file/ TOML file + CLI/env overrides
//!         ↓
//! Mail service (SMTP)
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O.
//! - `application` depends on `domain` and `contact-core` only.
//! - `infrastructure` depends on all other layers plus `axum`, `lettre`,
//!   and `tokio`.

/// Domain layer: configuration types (no I/O).
pub mod domain;

/// Application layer: the relay use case.
pub mod application;

/// Infrastructure layer: HTTP server, SMTP transport, config file.
pub mod infrastructure;
