//! Upstream delivery of ticket notices to the messaging bot API.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::RelayCredentials;
use crate::error::RelayError;

use super::notice::{SendMessagePayload, TicketNotice};

/// Delivers a ticket notice to administrators.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notice: &TicketNotice) -> Result<(), RelayError>;
}

/// Build an HTTP client with timeout applied.
pub(crate) fn build_http_client(timeout: Duration) -> reqwest::Client {
    // Fall back to reqwest defaults if builder creation fails for any reason.
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Telegram `sendMessage` notifier. Single attempt, no retries.
pub struct TelegramNotifier {
    http: reqwest::Client,
    api_base_url: String,
    credentials: RelayCredentials,
}

impl TelegramNotifier {
    pub fn new(api_base_url: &str, credentials: RelayCredentials, timeout: Duration) -> Self {
        Self {
            http: build_http_client(timeout),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_base_url, self.credentials.bot_token
        )
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, notice: &TicketNotice) -> Result<(), RelayError> {
        let payload = SendMessagePayload::for_notice(&self.credentials.admin_chat_id, notice);
        let response = self
            .http
            .post(self.send_message_url())
            .json(&payload)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        let body = serde_json::from_str::<serde_json::Value>(&text);

        if !status.is_success() {
            let body = body.unwrap_or(serde_json::Value::String(text));
            warn!(status = status.as_u16(), %body, "messaging API rejected ticket notice");
            return Err(RelayError::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        body.map_err(|e| RelayError::InvalidResponse(format!("messaging API body: {e}")))?;
        debug!("ticket notice delivered");
        Ok(())
    }
}

impl std::fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("api_base_url", &self.api_base_url)
            .field("admin_chat_id", &self.credentials.admin_chat_id)
            .finish_non_exhaustive()
    }
}
