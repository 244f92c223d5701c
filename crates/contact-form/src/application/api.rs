//! The seam between the form controller and the network.

use async_trait::async_trait;
use contact_core::ContactSubmission;
use thiserror::Error;

/// Why a submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The relay answered with a non-success status.
    #[error("relay rejected the submission with HTTP {status}")]
    Rejected { status: u16 },

    /// The relay could not be reached (offline, DNS, refused, CORS…).
    #[error("relay unreachable: {0}")]
    Network(String),
}

/// Capability to deliver one validated submission to the relay.
///
/// The HTTP implementation lives in `infrastructure::http_client`; tests
/// substitute doubles that record calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactApi: Send + Sync {
    /// POSTs `submission` once.  No retry.
    async fn post_contact(&self, submission: &ContactSubmission) -> Result<(), SubmitError>;
}
