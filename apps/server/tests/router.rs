use axum::body::Body;
use axum::http::{Request, StatusCode};
use dzemat_server::Server;
use serde_json::Value;
use tower::ServiceExt;

fn app() -> axum::Router {
    Server::builder().build().expect("server build").into_router()
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn health_endpoint_reports_up() {
    let (status, body) = get_json("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "up");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn capability_endpoints_are_mounted() {
    let (status, body) = get_json("/api/subscription/plans").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("array").len(), 3);

    let (status, body) = get_json("/api/subscription/current").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tenantId"], "default-tenant-demo");

    let (status, body) = get_json("/api/tenant/modules").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("array").len(), 20);
}
