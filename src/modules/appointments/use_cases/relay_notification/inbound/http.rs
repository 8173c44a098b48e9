use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::warn;

use crate::modules::appointments::use_cases::relay_notification::handler::{
    RelayError, RelayRequest,
};
use crate::shell::state::AppState;

const SEND_FAILED: &str = "Failed to send email";

#[derive(Serialize)]
pub struct RelaySentResponse {
    pub ok: bool,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct RelayErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

fn error_response(status: StatusCode, error: impl Into<String>, details: Option<String>) -> Response {
    (
        status,
        Json(RelayErrorResponse {
            error: error.into(),
            details,
        }),
    )
        .into_response()
}

pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

/// Content type is not checked; an empty body reads as `{}`.
pub async fn handle(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        RelayRequest::default()
    } else {
        match serde_json::from_slice::<RelayRequest>(&body) {
            Ok(r) => r,
            Err(err) => {
                warn!(error = %err, "relay body is not a readable request");
                return error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SEND_FAILED,
                    Some(err.to_string()),
                );
            }
        }
    };

    match state.relay_handler.handle(request).await {
        Ok(()) => (
            StatusCode::OK,
            Json(RelaySentResponse {
                ok: true,
                message: "Appointment request sent.",
            }),
        )
            .into_response(),
        Err(err @ RelayError::MissingRequiredFields) => {
            error_response(StatusCode::BAD_REQUEST, err.to_string(), None)
        }
        Err(err @ RelayError::DestinationNotConfigured) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string(), None)
        }
        Err(RelayError::Mailer(err)) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            SEND_FAILED,
            Some(err.to_string()),
        ),
    }
}
