//! JSON response shapes of the relay endpoint.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::RelayError;

/// Body `message` of a successful relay.
pub const SUCCESS_MESSAGE: &str = "Ticket processed and notification sent.";

pub(super) fn relayed() -> Response {
    (
        StatusCode::OK,
        Json(json!({ "success": true, "message": SUCCESS_MESSAGE })),
    )
        .into_response()
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let message = self.public_message();
        let body = match &self {
            Self::Upstream { body, .. } => json!({ "message": message, "error": body }),
            _ => json!({ "message": message }),
        };

        let mut response = (status, Json(body)).into_response();
        if matches!(self, Self::MethodNotAllowed(_)) {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("POST"));
        }
        response
    }
}
