use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chat_relay::{handle_event, HandlerResponse};
use serde_json::Value;
use std::sync::Arc;
use text_completion::TextGenerator;
use tower_http::trace::TraceLayer;
use tracing::*;

pub fn router<G>(generator: Arc<G>) -> Router
where
    G: TextGenerator + Send + Sync + 'static,
{
    Router::new()
        .route("/", post(relay::<G>))
        .route("/invoke", post(invoke::<G>))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(generator)
}

async fn health() -> &'static str {
    "ok"
}

/// HTTP trigger: the request body is the event, the handler response
/// becomes the HTTP response.
async fn relay<G>(State(generator): State<Arc<G>>, body: Bytes) -> HttpResponse
where
    G: TextGenerator + Send + Sync + 'static,
{
    HttpResponse(run(generator.as_ref(), &body).await)
}

/// Raw invocation: returns the handler response itself, like a function runtime would.
async fn invoke<G>(State(generator): State<Arc<G>>, body: Bytes) -> Json<HandlerResponse>
where
    G: TextGenerator + Send + Sync + 'static,
{
    Json(run(generator.as_ref(), &body).await)
}

async fn run<G>(generator: &G, body: &[u8]) -> HandlerResponse
where
    G: TextGenerator + Sync,
{
    match serde_json::from_slice::<Value>(body) {
        Ok(event) => handle_event(generator, &event).await,
        Err(e) => {
            error!("Error: {}", e);
            HandlerResponse::internal_error(&e.to_string())
        }
    }
}

pub struct HttpResponse(pub HandlerResponse);

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        let HandlerResponse {
            status_code,
            headers,
            body,
        } = self.0;
        let status = StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut header_map = HeaderMap::new();
        header_map.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        for (name, value) in &headers {
            match (
                HeaderName::try_from(name.as_str()),
                HeaderValue::try_from(value.as_str()),
            ) {
                (Ok(name), Ok(value)) => {
                    header_map.insert(name, value);
                }
                _ => warn!("Dropping invalid header {}: {}", name, value),
            }
        }

        (status, header_map, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::json;
    use text_completion::GenerationError;
    use tower::ServiceExt;

    struct Echo;

    impl TextGenerator for Echo {
        async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
            Ok(format!("echo: {}", prompt))
        }
    }

    struct Unavailable;

    impl TextGenerator for Unavailable {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            Err(GenerationError::Remote {
                status: 502,
                body: "bad gateway".to_string(),
            })
        }
    }

    fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn read_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_post_root_maps_handler_response() {
        let app = router(Arc::new(Echo));

        let response = app
            .oneshot(post_json("/", json!({ "message": "hi" }).to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["access-control-allow-methods"],
            "OPTIONS,POST"
        );
        let body = read_json(response).await;
        assert_eq!(body["response"], "echo: hi");
        assert_eq!(body["conversationHistory"][1]["content"], "echo: hi");
    }

    #[tokio::test]
    async fn test_post_root_propagates_remote_status() {
        let app = router(Arc::new(Unavailable));

        let response = app
            .oneshot(post_json("/", json!({ "message": "hi" }).to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(response
            .headers()
            .get("access-control-allow-origin")
            .is_none());
        let body = read_json(response).await;
        assert_eq!(body, json!({ "success": false, "error": "bad gateway" }));
    }

    #[tokio::test]
    async fn test_post_root_rejects_non_json_body() {
        let app = router(Arc::new(Echo));

        let response = app.oneshot(post_json("/", "hello?")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_invoke_returns_proxy_shape() {
        let app = router(Arc::new(Echo));
        let event = json!({ "body": "{\"prompt\":\"x\"}" });

        let response = app
            .oneshot(post_json("/invoke", event.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let handler_response: HandlerResponse =
            serde_json::from_value(read_json(response).await).unwrap();
        assert_eq!(handler_response.status_code, 200);
        let body: Value = serde_json::from_str(&handler_response.body).unwrap();
        assert_eq!(body["response"], "echo: x");
    }

    #[tokio::test]
    async fn test_health() {
        let app = router(Arc::new(Echo));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
