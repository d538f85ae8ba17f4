//! Contact-form side of the relay: posts a ticket to the relay endpoint.

use serde::Deserialize;
use std::time::Duration;

use crate::error::RelayError;

use super::notifier::build_http_client;
use super::ticket::TicketSubmission;

/// Successful relay acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelayReceipt {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client for the support-ticket relay endpoint.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    relay_url: String,
}

impl RelayClient {
    pub fn new(relay_url: &str, timeout: Duration) -> Self {
        Self {
            http: build_http_client(timeout),
            relay_url: relay_url.to_string(),
        }
    }

    pub fn relay_url(&self) -> &str {
        &self.relay_url
    }

    /// Submit a ticket. Non-2xx responses surface the relay's `message`.
    pub async fn submit(&self, ticket: &TicketSubmission) -> Result<RelayReceipt, RelayError> {
        let response = self.http.post(&self.relay_url).json(ticket).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(RelayError::Rejected {
                status: status.as_u16(),
                message: rejection_message(status, &text),
            });
        }
        serde_json::from_str(&text)
            .map_err(|e| RelayError::InvalidResponse(format!("relay acknowledgement: {e}")))
    }
}

/// The relay's JSON `message`, or a generic status line if it has none.
fn rejection_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .unwrap_or_else(|| {
            format!(
                "Server error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            )
            .trim_end()
            .to_string()
        })
}
