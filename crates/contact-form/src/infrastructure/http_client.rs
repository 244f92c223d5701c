//! HTTP client for the relay endpoint.
//!
//! Sends one `POST {base_url}/api/contact` with a JSON body of the three
//! fields.  Any 2xx answer is a success; the response body is not inspected.
//! Any other status maps to [`SubmitError::Rejected`] and a transport-level
//! failure maps to [`SubmitError::Network`].  There is no retry.

use std::time::Duration;

use async_trait::async_trait;
use contact_core::{ContactSubmission, CONTACT_PATH};
use tracing::{debug, warn};

use crate::application::{ContactApi, SubmitError};

/// Upper bound on one submission round trip.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// [`ContactApi`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpContactApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpContactApi {
    /// Creates a client for the relay served at `base_url`
    /// (e.g. `https://gd-consulting.com`).  A trailing slash is ignored.
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                warn!("falling back to default HTTP client: {e}");
                reqwest::Client::new()
            });
        Self::with_client(client, base_url)
    }

    /// Same as [`HttpContactApi::new`] with a caller-supplied client.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), CONTACT_PATH);
        Self { client, endpoint }
    }

    /// Full URL submissions are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactApi for HttpContactApi {
    async fn post_contact(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        debug!(endpoint = %self.endpoint, "posting contact submission");

        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SubmitError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
