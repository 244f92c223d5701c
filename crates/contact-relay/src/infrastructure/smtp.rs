//! SMTP mail transport built on `lettre`.
//!
//! Turns a library-neutral [`OutgoingEmail`] into a `lettre::Message` and
//! delivers it through an authenticated async SMTP connection.
//!
//! ```text
//! From:      "Awa" <awa@example.com>
//! To:        inbox@gd-consulting.com
//! Reply-To:  awa@example.com
//! Subject:   GD Consulting - Contact Form Submission from Awa
//! Body:      multipart/alternative (text/plain + text/html)
//! ```
//!
//! # Timeouts
//!
//! `lettre` applies `SmtpSettings::timeout` to every SMTP command.  The
//! whole send is additionally bounded by the same duration so that a slow
//! multi-step exchange surfaces as [`TransportError::Timeout`].

use std::time::Duration;

use async_trait::async_trait;
use contact_core::OutgoingEmail;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use crate::application::relay_service::{MailTransport, TransportError};
use crate::domain::config::{SmtpSecurity, SmtpSettings};

/// [`MailTransport`] that delivers over SMTP.
pub struct SmtpMailTransport {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    timeout: Duration,
}

impl SmtpMailTransport {
    /// Builds a transport from `settings`.  No connection is opened until the
    /// first send.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Delivery`] if the TLS parameters for
    /// `settings.host` cannot be set up.
    pub fn new(settings: &SmtpSettings) -> Result<Self, TransportError> {
        let builder = match settings.security {
            SmtpSecurity::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
                .map_err(|e| TransportError::Delivery(e.to_string()))?,
            SmtpSecurity::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
                    .map_err(|e| TransportError::Delivery(e.to_string()))?
            }
            SmtpSecurity::None => {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host)
            }
        };

        let credentials = Credentials::new(
            settings.username.clone(),
            settings.password.expose().to_string(),
        );

        let mailer = builder
            .port(settings.port)
            .credentials(credentials)
            .timeout(Some(settings.timeout))
            .build();

        debug!(
            host = %settings.host,
            port = settings.port,
            security = ?settings.security,
            "SMTP transport configured"
        );

        Ok(Self {
            mailer,
            timeout: settings.timeout,
        })
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), TransportError> {
        let message = build_message(email)?;

        match tokio::time::timeout(self.timeout, self.mailer.send(message)).await {
            Ok(Ok(_response)) => Ok(()),
            Ok(Err(e)) => Err(TransportError::Delivery(e.to_string())),
            Err(_elapsed) => Err(TransportError::Timeout),
        }
    }
}

/// Converts an [`OutgoingEmail`] into a `lettre` message.
///
/// # Errors
///
/// - [`TransportError::Address`] if any address fails to parse.
/// - [`TransportError::Build`] if `lettre` rejects the message.
pub fn build_message(email: &OutgoingEmail) -> Result<Message, TransportError> {
    let from = Mailbox::new(Some(email.from_name.clone()), parse_address(&email.from_address)?);
    let to = Mailbox::new(None, parse_address(&email.to)?);
    let reply_to = Mailbox::new(None, parse_address(&email.reply_to)?);

    Message::builder()
        .from(from)
        .to(to)
        .reply_to(reply_to)
        .subject(email.subject.clone())
        .multipart(MultiPart::alternative_plain_html(
            email.text_body.clone(),
            email.html_body.clone(),
        ))
        .map_err(|e| TransportError::Build(e.to_string()))
}

fn parse_address(raw: &str) -> Result<Address, TransportError> {
    raw.parse::<Address>().map_err(|e| TransportError::Address {
        address: raw.to_string(),
        reason: e.to_string(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
