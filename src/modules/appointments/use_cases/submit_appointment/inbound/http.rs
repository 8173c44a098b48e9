use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::appointments::core::validate::RawFields;
use crate::modules::appointments::use_cases::submit_appointment::view::SubmissionView;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub field: String,
}

#[derive(Serialize)]
pub struct BadRequestResponse {
    pub error: &'static str,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RawFields>, JsonRejection>,
) -> impl IntoResponse {
    let Json(raw) = match body {
        Ok(b) => b,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(BadRequestResponse {
                    error: "Expected a JSON object of string fields.",
                }),
            )
                .into_response();
        }
    };

    match state.submit_handler.handle(&raw).await {
        Ok(receipt) => {
            let status = if receipt.terminal.succeeded() {
                StatusCode::OK
            } else {
                StatusCode::BAD_GATEWAY
            };
            (status, Json(SubmissionView::from(receipt))).into_response()
        }
        Err(err) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorResponse {
                error: err.kind.to_string(),
                field: err.field.to_string(),
            }),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod submit_appointment_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::appointments::core::outcome::{DeliveryOutcome, RejectionReason};
    use crate::tests::fixtures::channels::{CallLog, ScriptedChannel};
    use crate::tests::fixtures::state::make_test_state;

    use super::handle;

    fn app(outcome: DeliveryOutcome, calls: &CallLog) -> Router {
        let calls = calls.clone();
        Router::new()
            .route("/api/appointments", post(handle))
            .with_state(make_test_state(move || {
                vec![ScriptedChannel::new("a", outcome.clone(), &calls).into_arc()]
            }))
    }

    async fn post_json(router: Router, body: &'static str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                Request::post("/api/appointments")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_terminal_status() {
        let calls = CallLog::default();
        let body = r#"{"firstName":"Asha","lastName":"Rao","phone":"9876543210","date":"2024-05-01"}"#;

        let (status, json) = post_json(app(DeliveryOutcome::Delivered, &calls), body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["state"], "succeeded");
        assert_eq!(json["confirmed"], true);
        assert_eq!(json["message"], "Request sent. We will contact you shortly.");
        assert_eq!(json["attempts"][0]["outcome"], "delivered");
        assert_eq!(calls.names(), vec!["a"]);
    }

    #[tokio::test]
    async fn it_should_return_502_when_every_channel_rejects() {
        let calls = CallLog::default();
        let body = r#"{"firstName":"Asha","phone":"9876543210"}"#;

        let (status, json) = post_json(
            app(DeliveryOutcome::Rejected(RejectionReason::Timeout), &calls),
            body,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["state"], "failed");
        assert_eq!(json["attempts"][0]["reason"], "timed out");
    }

    #[tokio::test]
    async fn it_should_return_422_for_a_missing_first_name() {
        let calls = CallLog::default();
        let body = r#"{"firstName":"","phone":"123"}"#;

        let (status, json) = post_json(app(DeliveryOutcome::Delivered, &calls), body).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["field"], "firstName");
        assert_eq!(json["error"], "missing required field");
        assert!(calls.names().is_empty());
    }

    #[tokio::test]
    async fn it_should_return_400_on_invalid_json() {
        let calls = CallLog::default();

        let (status, _) = post_json(app(DeliveryOutcome::Delivered, &calls), "not-json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(calls.names().is_empty());
    }
}
