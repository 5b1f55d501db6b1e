#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use lambda_runtime::{Context, LambdaEvent};
    use serde_json::json;
    use tower::ServiceExt;

    use crate::{
        mw::request_mw::REQUEST_ID_HEADER,
        server::{app_state::AppState, runtime::app},
        tests::fakes::{Behavior, Counters, FakeConnector, setup_logging},
        time_check::{handlers::lambda_handler, models::Timeouts},
    };

    fn timeouts() -> Timeouts {
        Timeouts {
            connect: Duration::from_secs(1),
            query: Duration::from_secs(1),
        }
    }

    fn test_app(behavior: Behavior) -> (Router, std::sync::Arc<Counters>) {
        let (connector, counters) = FakeConnector::new(behavior);
        (app(AppState::new(connector, timeouts())), counters)
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok_without_database() {
        setup_logging();
        let (app, counters) = test_app(Behavior::RefuseConnection);

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "OK");
        assert_eq!(counters.connects(), 0);
    }

    #[tokio::test]
    async fn post_with_any_body_invokes_handler() {
        setup_logging();
        let (app, counters) = test_app(Behavior::Succeed);

        let response = app
            .oneshot(
                Request::post("/")
                    .body(Body::from("this is not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
        assert_eq!(
            body_text(response).await,
            "Successfully connected to RDS instance. Current time: 2026-10-18 09:30:00"
        );
        assert_eq!(counters.closes(), 1);
    }

    #[tokio::test]
    async fn query_failure_maps_to_internal_error() {
        setup_logging();
        let (app, _) = test_app(Behavior::RejectQuery);

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            body_text(response)
                .await
                .starts_with("ERROR: Could not execute query.")
        );
    }

    #[tokio::test]
    async fn lambda_returns_status_code_and_body() {
        setup_logging();
        let (connector, counters) = FakeConnector::new(Behavior::RefuseConnection);
        let state = AppState::new(connector, timeouts());

        let event = LambdaEvent::new(json!(null), Context::default());
        let response = lambda_handler(state, event).await.unwrap();
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["statusCode"], 500);
        assert!(
            value["body"]
                .as_str()
                .unwrap()
                .starts_with("ERROR: Could not connect to MySQL instance.")
        );
        assert_eq!(counters.closes(), 0);
    }
}
