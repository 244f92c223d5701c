//! GD Consulting contact relay: entry point.
//!
//! This binary serves `POST /api/contact` for the marketing site's contact
//! form and forwards each valid submission as one email to the company
//! inbox through an authenticated SMTP account.
//!
//! # Usage
//!
//! ```text
//! contact-relay [OPTIONS]
//!
//! Options:
//!   --config        <PATH>  Optional TOML config file
//!   --bind          <IP>    HTTP bind address, IPv4 or IPv6 [default: 127.0.0.1]
//!   --port          <PORT>  HTTP port [default: 3000]
//!   --inbox         <ADDR>  Inbox receiving contact emails [default: --mail-user]
//!   --mail-user     <ADDR>  Mail account identity [env: GMAIL_USER]
//!   --mail-pass     <PASS>  Mail account secret [env: GMAIL_PASS]
//!   --smtp-host     <HOST>  SMTP server [default: smtp.gmail.com]
//!   --smtp-port     <PORT>  SMTP port [default: per security mode]
//!   --smtp-security <MODE>  tls | starttls | none [default: tls]
//!   --smtp-timeout  <SECS>  SMTP timeout in seconds [default: 30]
//! ```
//!
//! # Environment
//!
//! Only the two mail credentials are read from the environment:
//!
//! | Variable     | Description                      |
//! |--------------|----------------------------------|
//! | `GMAIL_USER` | Mail account identity (required) |
//! | `GMAIL_PASS` | Mail account secret (required)   |
//!
//! A CLI flag beats its variable, which beats the config file.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use contact_relay::application::MailTransport;
use contact_relay::domain::{RelayConfig, Secret, SmtpSecurity};
use contact_relay::infrastructure::{
    load_config, run_server, ConfigOverrides, FileConfig, SmtpMailTransport,
};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Contact form mail relay.
///
/// Every option is optional on the command line.  Unset credentials fall
/// back to `GMAIL_USER` / `GMAIL_PASS`; everything else falls back to the
/// config file, then built-in defaults.
#[derive(Debug, Parser)]
#[command(
    name = "contact-relay",
    about = "Mail relay endpoint for the GD Consulting contact form",
    version
)]
struct Cli {
    /// Path to a TOML config file.  A missing file is treated as empty.
    #[arg(long)]
    config: Option<PathBuf>,

    /// IP address to bind the HTTP server to.
    #[arg(long)]
    bind: Option<String>,

    /// TCP port for the HTTP server.
    #[arg(long)]
    port: Option<u16>,

    /// Inbox that receives contact emails.  Defaults to the mail account.
    #[arg(long)]
    inbox: Option<String>,

    /// Mail account identity used to authenticate with the mail service.
    #[arg(long, env = "GMAIL_USER")]
    mail_user: Option<String>,

    /// Mail account secret.
    #[arg(long, env = "GMAIL_PASS", hide_env_values = true)]
    mail_pass: Option<Secret>,

    /// SMTP server hostname.
    #[arg(long)]
    smtp_host: Option<String>,

    /// SMTP server port.
    #[arg(long)]
    smtp_port: Option<u16>,

    /// SMTP connection security: `tls`, `starttls`, or `none`.
    #[arg(long)]
    smtp_security: Option<SmtpSecurity>,

    /// SMTP timeout in seconds.
    #[arg(long)]
    smtp_timeout: Option<u64>,
}

impl Cli {
    /// Splits the CLI into the config file path and the override layer.
    fn into_parts(self) -> (Option<PathBuf>, ConfigOverrides) {
        let overrides = ConfigOverrides {
            bind_address: self.bind,
            port: self.port,
            inbox: self.inbox,
            username: self.mail_user,
            password: self.mail_pass,
            smtp_host: self.smtp_host,
            smtp_port: self.smtp_port,
            security: self.smtp_security,
            timeout_secs: self.smtp_timeout,
        };
        (self.config, overrides)
    }

    /// Loads the config file (if any) and applies the CLI/env overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file is unreadable or malformed, if a
    /// mail credential is missing, or if the bind address is invalid.
    fn into_relay_config(self) -> anyhow::Result<RelayConfig> {
        let (path, overrides) = self.into_parts();

        let file = match path {
            Some(path) => load_config(&path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => FileConfig::default(),
        };

        file.resolve(overrides)
            .context("invalid relay configuration")
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Program entry point.
///
/// 1. `tracing_subscriber` is initialised; `RUST_LOG` controls the level.
/// 2. CLI/env/file settings are merged into a [`RelayConfig`].
/// 3. The SMTP transport is built (no connection yet).
/// 4. The HTTP server runs until Ctrl+C, then drains in-flight requests.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().into_relay_config()?;

    info!(
        "contact relay starting: http={}, smtp={}:{}",
        config.bind_addr, config.smtp.host, config.smtp.port
    );

    let transport: Arc<dyn MailTransport> = Arc::new(
        SmtpMailTransport::new(&config.smtp).context("failed to configure SMTP transport")?,
    );

    let shutdown = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, initiating graceful shutdown"),
            Err(e) => tracing::error!("failed to listen for Ctrl+C signal: {e}"),
        }
    };

    run_server(config, transport, shutdown).await?;

    info!("contact relay stopped");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
