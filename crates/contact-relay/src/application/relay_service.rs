//! RelayService: turns one contact submission into one outgoing email.
//!
//! This use case is the whole server-side contract.  It receives the raw
//! request body fields, re-checks that all three are present, composes the
//! email, and asks the injected [`MailTransport`] to send it once.
//!
//! ```text
//! RawSubmission ──require_fields──► ContactSubmission ──compose──► OutgoingEmail
//!       │ missing                                                     │
//!       ▼                                                             ▼ transport.send()
//!  MissingFields (400)                                   Ok → Sent (200)
//!                                                        Err → SendFailed (500)
//! ```
//!
//! # Architecture
//!
//! The service depends only on the [`MailTransport`] trait and on
//! `contact-core` types.  The SMTP implementation is injected at
//! construction, so tests substitute a recording transport and never touch
//! the network.
//!
//! There is no retry and no deduplication: every call is independent and
//! makes at most one send attempt.

use std::sync::Arc;

use async_trait::async_trait;
use contact_core::{ContactResponse, OutgoingEmail, RawSubmission};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::config::RelaySettings;

/// Errors a mail transport can report.
///
/// These are logged by the relay and never sent back to the caller.
#[derive(Debug, Error)]
pub enum TransportError {
    /// An address could not be parsed into a mailbox.
    #[error("invalid address '{address}': {reason}")]
    Address { address: String, reason: String },

    /// The message could not be assembled.
    #[error("failed to build message: {0}")]
    Build(String),

    /// The mail service refused the message or the connection failed.
    #[error("delivery failed: {0}")]
    Delivery(String),

    /// The mail service did not answer in time.
    #[error("mail service timed out")]
    Timeout,
}

/// Capability to send one email.
///
/// Infrastructure implementations talk SMTP; test implementations record
/// calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Sends `email`.  Called at most once per submission.
    async fn send(&self, email: &OutgoingEmail) -> Result<(), TransportError>;
}

/// Result of relaying one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    /// The mail service accepted the email.
    Sent,
    /// A required field was absent or empty; nothing was sent.
    MissingFields,
    /// The send attempt failed; details were logged only.
    SendFailed,
}

impl RelayOutcome {
    /// JSON body for this outcome.
    pub fn body(self) -> ContactResponse {
        match self {
            RelayOutcome::Sent => ContactResponse::success(),
            RelayOutcome::MissingFields => ContactResponse::missing_fields(),
            RelayOutcome::SendFailed => ContactResponse::send_failed(),
        }
    }
}

/// The Mail Relay Endpoint use case.
///
/// Holds no mutable state, so one instance is shared (behind an `Arc`) by
/// every concurrent request.
pub struct RelayService {
    settings: RelaySettings,
    transport: Arc<dyn MailTransport>,
}

impl RelayService {
    pub fn new(settings: RelaySettings, transport: Arc<dyn MailTransport>) -> Self {
        Self {
            settings,
            transport,
        }
    }

    /// The inbox every email is addressed to.
    pub fn inbox(&self) -> &str {
        &self.settings.inbox
    }

    /// Relays one submission.
    ///
    /// - Any field absent or empty: returns [`RelayOutcome::MissingFields`]
    ///   without calling the transport.
    /// - Otherwise: sends exactly one email and maps the transport result to
    ///   [`RelayOutcome::Sent`] or [`RelayOutcome::SendFailed`].
    pub async fn relay(&self, raw: RawSubmission) -> RelayOutcome {
        let submission_id = Uuid::new_v4();

        let submission = match raw.require_fields() {
            Ok(s) => s,
            Err(missing) => {
                warn!(%submission_id, "rejecting contact submission: {missing}");
                return RelayOutcome::MissingFields;
            }
        };

        let email = OutgoingEmail::compose(&submission, &self.settings.inbox);

        match self.transport.send(&email).await {
            Ok(()) => {
                info!(%submission_id, to = %email.to, "contact email sent");
                RelayOutcome::Sent
            }
            Err(e) => {
                // The cause may carry provider or credential detail; it stays
                // in the server log.
                error!(%submission_id, error = %e, "failed to send contact email");
                RelayOutcome::SendFailed
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
