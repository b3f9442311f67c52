//! Axum router configuration with middleware.
//!
//! Middleware: permissive CORS (the gateway sits behind a public URL the
//! browser client calls directly) and request tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(handlers::chat::chat))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use streamgate_types::config::GatewayConfig;

    /// Router wired with an empty configuration: adapter construction
    /// fails for every platform, so no test ever reaches the network.
    fn unconfigured_router() -> Router {
        build_router(AppState::new(GatewayConfig::default()))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = unconfigured_router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_malformed_payload_is_rejected_before_streaming() {
        let response = unconfigured_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["errors"][0]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_region_surfaces_before_streaming() {
        let response = unconfigured_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"question":"hello","model":"nova-micro","sessionId":"abc"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["errors"][0]["code"], "CONFIGURATION_ERROR");
        assert!(
            json["errors"][0]["message"]
                .as_str()
                .unwrap()
                .contains("BEDROCK_AWS_REGION")
        );
    }

    #[tokio::test]
    async fn test_absent_payload_resolves_default_model() {
        // With nothing configured the defaulted request (hosted-chat,
        // gpt-4o) fails at Azure adapter construction -- proof that the
        // empty body was defaulted to the default alias rather than
        // rejected as malformed.
        let response = unconfigured_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/chat")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["errors"][0]["code"], "CONFIGURATION_ERROR");
        assert!(
            json["errors"][0]["message"]
                .as_str()
                .unwrap()
                .contains("AZURE_OPENAI")
        );
    }
}
