//! Relay configuration types.
//!
//! [`RelayConfig`] is the single source of truth for all runtime settings.
//! It is built once in `main.rs` from defaults, an optional TOML file, and
//! CLI/environment overrides, then handed to the server by value.
//!
//! Nothing in this module reads the environment.  Keeping configuration as a
//! plain struct lets tests build a relay with any inbox and any transport.

use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

/// Default listener port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default SMTP host (Gmail, the original mailbox provider).
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default SMTP command timeout.
pub const DEFAULT_SMTP_TIMEOUT: Duration = Duration::from_secs(30);

// ── Secret ────────────────────────────────────────────────────────────────────

/// A credential that never shows up in `Debug` output or logs.
#[derive(Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw value.  Only the mail transport should call this.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

// ── SMTP settings ─────────────────────────────────────────────────────────────

/// How the SMTP connection is secured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmtpSecurity {
    /// Implicit TLS from the first byte (SMTPS, port 465).
    #[default]
    Tls,
    /// Plaintext connection upgraded with STARTTLS (port 587).
    StartTls,
    /// No encryption.  Only for local relays and test servers.
    None,
}

impl SmtpSecurity {
    /// The conventional port for this mode.
    pub fn default_port(self) -> u16 {
        match self {
            SmtpSecurity::Tls => 465,
            SmtpSecurity::StartTls => 587,
            SmtpSecurity::None => 25,
        }
    }
}

impl FromStr for SmtpSecurity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tls" => Ok(SmtpSecurity::Tls),
            "starttls" => Ok(SmtpSecurity::StartTls),
            "none" => Ok(SmtpSecurity::None),
            other => Err(format!(
                "unknown SMTP security mode '{other}' (expected tls, starttls, or none)"
            )),
        }
    }
}

/// Connection and credential settings for the outbound mail service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    /// Account identity used to authenticate with the mail service.
    pub username: String,
    pub password: Secret,
    pub security: SmtpSecurity,
    /// Upper bound on each SMTP exchange; owned by the transport client.
    pub timeout: Duration,
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_SMTP_HOST.to_string(),
            port: SmtpSecurity::Tls.default_port(),
            username: String::new(),
            password: Secret::default(),
            security: SmtpSecurity::Tls,
            timeout: DEFAULT_SMTP_TIMEOUT,
        }
    }
}

// ── Relay settings ────────────────────────────────────────────────────────────

/// Settings the relay use case needs to address outgoing mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelaySettings {
    /// The business inbox that receives every contact email.
    pub inbox: String,
}

impl RelaySettings {
    pub fn new(inbox: impl Into<String>) -> Self {
        Self {
            inbox: inbox.into(),
        }
    }
}

// ── Top-level config ──────────────────────────────────────────────────────────

/// All runtime configuration for the relay process.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// The address and port the HTTP server binds to.
    pub bind_addr: SocketAddr,
    pub relay: RelaySettings,
    pub smtp: SmtpSettings,
}

impl Default for RelayConfig {
    /// Returns a config suitable for local development.
    ///
    /// | Field      | Default           |
    /// |------------|-------------------|
    /// | bind_addr  | `127.0.0.1:3000`  |
    /// | inbox      | empty             |
    /// | smtp       | Gmail, TLS, 465   |
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
            relay: RelaySettings::new(""),
            smtp: SmtpSettings::default(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
