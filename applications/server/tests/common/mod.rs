/// Common test utilities
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use chatbot_server::{api, state::AppState};

/// Build the app router against a lazily-connecting client.
///
/// The driver does not dial the deployment until an operation runs, so
/// routing and validation paths can be exercised without a live store.
/// Suites that do reach the store gate on `MONGODB_URI` instead.
#[allow(dead_code)]
pub async fn test_app() -> Router {
    let uri =
        std::env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://127.0.0.1:27017".to_string());
    let client = mongodb::Client::with_uri_str(&uri).await.unwrap();
    let db = client.database("chatbot_admin_test");
    api::router(AppState::new(&db))
}

#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[allow(dead_code)]
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
