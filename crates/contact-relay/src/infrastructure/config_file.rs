//! TOML configuration file and override resolution for the relay.
//!
//! Settings come from three layers, lowest precedence first:
//!
//! 1. Built-in defaults (the `default_*` helpers below).
//! 2. An optional TOML file passed with `--config`.
//! 3. CLI flags, plus `GMAIL_USER` / `GMAIL_PASS` for the credentials
//!    ([`ConfigOverrides`]).
//!
//! Example file:
//!
//! ```toml
//! [server]
//! bind_address = "0.0.0.0"
//! port = 3000
//!
//! [mail]
//! username = "contact@gd-consulting.com"
//! inbox = "team@gd-consulting.com"
//! smtp_host = "smtp.gmail.com"
//! security = "tls"
//! timeout_secs = 30
//! ```
//!
//! Fields annotated with `#[serde(default = "some_fn")]` fall back to
//! `some_fn()` when absent, so an empty file (or no file at all) is valid.
//! The password is normally supplied through `GMAIL_PASS` rather than the file.

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::config::{
    RelayConfig, RelaySettings, Secret, SmtpSecurity, SmtpSettings, DEFAULT_PORT,
    DEFAULT_SMTP_HOST, DEFAULT_SMTP_TIMEOUT,
};

/// Error type for configuration loading and resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error reading config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A required mail credential was not supplied by any layer.
    #[error("missing mail credential: set {0}")]
    MissingCredential(&'static str),

    /// The bind host is not an IPv4 or IPv6 address.
    #[error("invalid bind address: '{0}'")]
    InvalidBindAddress(String),
}

// ── File schema ───────────────────────────────────────────────────────────────

/// Top-level layout of the TOML file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub mail: MailSection,
}

/// `[server]` table.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerSection {
    /// IP address to bind.  `"0.0.0.0"` or `"::"` binds all interfaces.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// `[mail]` table.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MailSection {
    /// Inbox receiving contact emails.  Defaults to `username`.
    #[serde(default)]
    pub inbox: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<Secret>,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    /// Defaults to the conventional port for `security`.
    #[serde(default)]
    pub smtp_port: Option<u16>,
    #[serde(default)]
    pub security: SmtpSecurity,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_smtp_host() -> String {
    DEFAULT_SMTP_HOST.to_string()
}
fn default_timeout_secs() -> u64 {
    DEFAULT_SMTP_TIMEOUT.as_secs()
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

impl Default for MailSection {
    fn default() -> Self {
        Self {
            inbox: None,
            username: None,
            password: None,
            smtp_host: default_smtp_host(),
            smtp_port: None,
            security: SmtpSecurity::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Loads a [`FileConfig`] from `path`, returning defaults if the file does
/// not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

// ── Resolution ────────────────────────────────────────────────────────────────

/// Values from CLI flags or the credential variables.  `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub inbox: Option<String>,
    pub username: Option<String>,
    pub password: Option<Secret>,
    pub smtp_host: Option<String>,
    pub smtp_port: Option<u16>,
    pub security: Option<SmtpSecurity>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Applies `overrides` on top of this file and produces a [`RelayConfig`].
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingCredential`] when no layer supplies a
    ///   non-empty username (`GMAIL_USER`) or password (`GMAIL_PASS`).
    /// - [`ConfigError::InvalidBindAddress`] when the bind host is not an IP
    ///   address.
    pub fn resolve(self, overrides: ConfigOverrides) -> Result<RelayConfig, ConfigError> {
        let FileConfig { server, mail } = self;

        let bind_host = overrides.bind_address.unwrap_or(server.bind_address);
        let port = overrides.port.unwrap_or(server.port);
        let ip: IpAddr = bind_host
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress(bind_host.clone()))?;
        let bind_addr = SocketAddr::new(ip, port);

        let username = non_empty(overrides.username.or(mail.username))
            .ok_or(ConfigError::MissingCredential("GMAIL_USER"))?;
        let password = overrides
            .password
            .or(mail.password)
            .filter(|p| !p.is_empty())
            .ok_or(ConfigError::MissingCredential("GMAIL_PASS"))?;
        let inbox = non_empty(overrides.inbox.or(mail.inbox)).unwrap_or_else(|| username.clone());

        let security = overrides.security.unwrap_or(mail.security);
        let smtp_port = overrides
            .smtp_port
            .or(mail.smtp_port)
            .unwrap_or_else(|| security.default_port());

        Ok(RelayConfig {
            bind_addr,
            relay: RelaySettings::new(inbox),
            smtp: SmtpSettings {
                host: overrides.smtp_host.unwrap_or(mail.smtp_host),
                port: smtp_port,
                username,
                password,
                security,
                timeout: Duration::from_secs(overrides.timeout_secs.unwrap_or(mail.timeout_secs)),
            },
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> ConfigOverrides {
        ConfigOverrides {
            username: Some("contact@gd-consulting.com".to_string()),
            password: Some(Secret::new("app-password")),
            ..ConfigOverrides::default()
        }
    }

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("contact-relay-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let cfg: FileConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, FileConfig::default());
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.mail.smtp_host, "smtp.gmail.com");
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let cfg: FileConfig = toml::from_str(
            r#"
            [mail]
            security = "starttls"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.mail.security, SmtpSecurity::StartTls);
        assert_eq!(cfg.mail.timeout_secs, 30);
        assert_eq!(cfg.server.bind_address, "127.0.0.1");
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let cfg = load_config(&scratch_path("does-not-exist.toml")).unwrap();
        assert_eq!(cfg, FileConfig::default());
    }

    #[test]
    fn test_load_reads_file_from_disk() {
        // Arrange
        let path = scratch_path("relay.toml");
        std::fs::write(&path, "[server]\nport = 8080\n").unwrap();

        // Act
        let cfg = load_config(&path);
        let _ = std::fs::remove_file(&path);

        // Assert
        assert_eq!(cfg.unwrap().server.port, 8080);
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let path = scratch_path("broken.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        let result = load_config(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_resolve_requires_username() {
        let overrides = ConfigOverrides {
            password: Some(Secret::new("pw")),
            ..ConfigOverrides::default()
        };
        let err = FileConfig::default().resolve(overrides).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential("GMAIL_USER")));
    }

    #[test]
    fn test_resolve_requires_password() {
        let overrides = ConfigOverrides {
            username: Some("contact@gd-consulting.com".to_string()),
            ..ConfigOverrides::default()
        };
        let err = FileConfig::default().resolve(overrides).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential("GMAIL_PASS")));
    }

    #[test]
    fn test_resolve_treats_empty_credential_as_missing() {
        let overrides = ConfigOverrides {
            username: Some(String::new()),
            password: Some(Secret::new("pw")),
            ..ConfigOverrides::default()
        };
        assert!(FileConfig::default().resolve(overrides).is_err());
    }

    #[test]
    fn test_resolve_inbox_defaults_to_username() {
        let cfg = FileConfig::default().resolve(creds()).unwrap();
        assert_eq!(cfg.relay.inbox, "contact@gd-consulting.com");
    }

    #[test]
    fn test_resolve_explicit_inbox_wins() {
        let overrides = ConfigOverrides {
            inbox: Some("team@gd-consulting.com".to_string()),
            ..creds()
        };
        let cfg = FileConfig::default().resolve(overrides).unwrap();
        assert_eq!(cfg.relay.inbox, "team@gd-consulting.com");
    }

    #[test]
    fn test_resolve_override_beats_file() {
        // Arrange: file says port 8080, CLI says 9090
        let mut file = FileConfig::default();
        file.server.port = 8080;
        file.mail.smtp_host = "smtp.file.example".to_string();
        let overrides = ConfigOverrides {
            port: Some(9090),
            ..creds()
        };

        // Act
        let cfg = file.resolve(overrides).unwrap();

        // Assert
        assert_eq!(cfg.bind_addr.port(), 9090);
        assert_eq!(cfg.smtp.host, "smtp.file.example");
    }

    #[test]
    fn test_resolve_file_credentials_are_used() {
        let mut file = FileConfig::default();
        file.mail.username = Some("file@gd-consulting.com".to_string());
        file.mail.password = Some(Secret::new("file-pw"));

        let cfg = file.resolve(ConfigOverrides::default()).unwrap();

        assert_eq!(cfg.smtp.username, "file@gd-consulting.com");
        assert_eq!(cfg.smtp.password.expose(), "file-pw");
    }

    #[test]
    fn test_resolve_smtp_port_follows_security_mode() {
        let overrides = ConfigOverrides {
            security: Some(SmtpSecurity::StartTls),
            ..creds()
        };
        let cfg = FileConfig::default().resolve(overrides).unwrap();
        assert_eq!(cfg.smtp.port, 587);
    }

    #[test]
    fn test_resolve_explicit_smtp_port_wins() {
        let overrides = ConfigOverrides {
            smtp_port: Some(2525),
            ..creds()
        };
        let cfg = FileConfig::default().resolve(overrides).unwrap();
        assert_eq!(cfg.smtp.port, 2525);
    }

    #[test]
    fn test_resolve_timeout_in_seconds() {
        let overrides = ConfigOverrides {
            timeout_secs: Some(5),
            ..creds()
        };
        let cfg = FileConfig::default().resolve(overrides).unwrap();
        assert_eq!(cfg.smtp.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_resolve_invalid_bind_address_returns_error() {
        let overrides = ConfigOverrides {
            bind_address: Some("not.an.ip".to_string()),
            ..creds()
        };
        let err = FileConfig::default().resolve(overrides).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddress(_)));
    }

    #[test]
    fn test_resolve_accepts_ipv6_any_address() {
        // Arrange
        let overrides = ConfigOverrides {
            bind_address: Some("::".to_string()),
            port: Some(8080),
            ..creds()
        };

        // Act
        let cfg = FileConfig::default().resolve(overrides).unwrap();

        // Assert
        assert!(cfg.bind_addr.is_ipv6());
        assert_eq!(cfg.bind_addr.to_string(), "[::]:8080");
    }

    #[test]
    fn test_resolve_accepts_ipv6_loopback() {
        let overrides = ConfigOverrides {
            bind_address: Some("::1".to_string()),
            ..creds()
        };
        let cfg = FileConfig::default().resolve(overrides).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "[::1]:3000");
    }

    #[test]
    fn test_resolve_rejects_host_with_port_suffix() {
        let overrides = ConfigOverrides {
            bind_address: Some("127.0.0.1:80".to_string()),
            ..creds()
        };
        let err = FileConfig::default().resolve(overrides).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddress(_)));
    }

    #[test]
    fn test_resolve_treats_empty_password_as_missing() {
        let overrides = ConfigOverrides {
            password: Some(Secret::new("")),
            ..creds()
        };
        let err = FileConfig::default().resolve(overrides).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential("GMAIL_PASS")));
    }

    #[test]
    fn test_password_from_file_is_redacted_in_debug() {
        let cfg: FileConfig = toml::from_str(
            r#"
            [mail]
            username = "contact@gd-consulting.com"
            password = "file-secret-pw"
            "#,
        )
        .unwrap();

        let printed = format!("{cfg:?}");

        assert!(!printed.contains("file-secret-pw"));
        assert_eq!(
            cfg.mail.password.as_ref().map(Secret::expose),
            Some("file-secret-pw")
        );
    }

    #[test]
    fn test_overrides_debug_hides_password() {
        let printed = format!("{:?}", creds());
        assert!(!printed.contains("app-password"));
        assert!(printed.contains("contact@gd-consulting.com"));
    }
}
