//! Support ticket model shared by the contact form and the relay endpoint.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::RelayError;

/// Fields collected by the support page's contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Build the relay payload for this form.
    pub fn into_submission(self, ticket_id: String, page_url: String) -> TicketSubmission {
        TicketSubmission {
            ticket_id,
            user_name: self.name,
            user_email: self.email,
            request_type: self.subject,
            description: self.message,
            page_url,
        }
    }
}

/// A validated ticket, as posted to the relay endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSubmission {
    pub ticket_id: String,
    pub user_name: String,
    pub user_email: String,
    pub request_type: String,
    pub description: String,
    pub page_url: String,
}

/// Unvalidated relay request body; every field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDraft {
    pub ticket_id: Option<String>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub request_type: Option<String>,
    pub description: Option<String>,
    pub page_url: Option<String>,
}

impl TicketDraft {
    /// Parse a raw request body. Anything that is not a JSON object of
    /// strings reads as an empty draft, which then fails validation.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// Require every field to be present and non-empty.
    pub fn validate(self) -> Result<TicketSubmission, RelayError> {
        fn required(field: Option<String>) -> Result<String, RelayError> {
            field
                .filter(|value| !value.is_empty())
                .ok_or(RelayError::MissingFields)
        }

        Ok(TicketSubmission {
            ticket_id: required(self.ticket_id)?,
            user_name: required(self.user_name)?,
            user_email: required(self.user_email)?,
            request_type: required(self.request_type)?,
            description: required(self.description)?,
            page_url: required(self.page_url)?,
        })
    }
}

/// Ticket identifier of the form `SUP-<unix millis>`.
pub fn new_ticket_id(now: SystemTime) -> String {
    let millis = now
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    format!("SUP-{millis}")
}
