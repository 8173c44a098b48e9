use axum::{
    Extension, Router,
    routing::{get, post},
};

use crate::modules::appointments::use_cases::relay_notification::inbound::http as relay_http;
use crate::modules::appointments::use_cases::submit_appointment::inbound::http as submit_http;
use crate::shared::config::{BOOKING_PATH, GRAPHQL_PATH};
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState, relay_path: &str) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route(BOOKING_PATH, post(submit_http::handle))
        .route(
            relay_path,
            post(relay_http::handle).fallback(relay_http::method_not_allowed),
        )
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .with_state(state)
}

#[cfg(test)]
mod router_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::shared::infrastructure::mailer::in_memory::InMemoryMailer;
    use crate::tests::fixtures::state::{make_relay_state, relay_config};

    use super::router;

    #[tokio::test]
    async fn it_should_serve_graphql_over_post() {
        let app = router(
            make_relay_state(relay_config(), Arc::new(InMemoryMailer::new())),
            "/api/submit-appointment",
        );

        let response = app
            .oneshot(
                Request::post("/gql")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"query":"{ health }"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["data"]["health"], "ok");
    }

    #[tokio::test]
    async fn it_should_serve_graphiql_over_get() {
        let app = router(
            make_relay_state(relay_config(), Arc::new(InMemoryMailer::new())),
            "/api/submit-appointment",
        );

        let response = app
            .oneshot(Request::get("/gql").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
