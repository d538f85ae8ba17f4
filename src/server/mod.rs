//! Support-ticket relay endpoint.
//!
//! `/api/submit-ticket` accepts a POSTed ticket, validates it, and forwards a
//! formatted notice through the configured [`Notifier`]. Nothing is retried.

mod response;

use axum::{
    body::Bytes,
    extract::State,
    http::Method,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::build_info;
use crate::config::Config;
use crate::error::RelayError;
use crate::support::{Notifier, TelegramNotifier, TicketDraft, TicketNotice};

pub use response::SUCCESS_MESSAGE;

/// Route of the relay endpoint.
pub const SUBMIT_TICKET_PATH: &str = "/api/submit-ticket";

/// Shared handler state.
///
/// A missing notifier means messaging credentials are not configured; every
/// valid submission then fails with a server configuration error.
#[derive(Clone, Default)]
pub struct RelayState {
    notifier: Option<Arc<dyn Notifier>>,
}

impl RelayState {
    pub fn new(notifier: Option<Arc<dyn Notifier>>) -> Self {
        Self { notifier }
    }

    /// Wire a Telegram notifier when credentials are configured.
    pub fn from_config(config: &Config) -> Self {
        let notifier = config.relay.credentials.clone().map(|credentials| {
            Arc::new(TelegramNotifier::new(
                &config.relay.api_base_url,
                credentials,
                Duration::from_secs(config.relay.timeout_secs),
            )) as Arc<dyn Notifier>
        });
        Self { notifier }
    }

    pub fn is_configured(&self) -> bool {
        self.notifier.is_some()
    }
}

/// Build the relay router.
pub fn router(state: RelayState) -> Router {
    Router::new()
        .route(SUBMIT_TICKET_PATH, any(submit_ticket))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `config.server.bind` and serve until Ctrl-C.
pub async fn serve(config: &Config) -> std::io::Result<()> {
    let state = RelayState::from_config(config);
    if !state.is_configured() {
        error!("Telegram credentials are not set; ticket submissions will fail");
    }

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    info!(
        addr = %listener.local_addr()?,
        build = %build_info::startup_metadata_line(),
        "support relay listening"
    );
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
}

async fn submit_ticket(State(state): State<RelayState>, method: Method, body: Bytes) -> Response {
    match relay_ticket(&state, &method, &body).await {
        Ok(()) => response::relayed(),
        Err(err) => err.into_response(),
    }
}

async fn relay_ticket(state: &RelayState, method: &Method, body: &[u8]) -> Result<(), RelayError> {
    if *method != Method::POST {
        return Err(RelayError::MethodNotAllowed(method.to_string()));
    }

    let ticket = TicketDraft::from_body(body).validate()?;

    let Some(notifier) = state.notifier.as_ref() else {
        error!("Telegram credentials are not set in the environment");
        return Err(RelayError::NotConfigured);
    };

    let notice = TicketNotice::from_ticket(&ticket);
    match notifier.notify(&notice).await {
        Ok(()) => {
            info!(ticket_id = %ticket.ticket_id, "ticket relayed");
            Ok(())
        }
        Err(err) => {
            error!(ticket_id = %ticket.ticket_id, error = %err, "ticket relay failed");
            Err(err)
        }
    }
}
