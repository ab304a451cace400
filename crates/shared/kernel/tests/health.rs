use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use dzemat_kernel::server::router::system_router;
use tower::ServiceExt;

#[tokio::test]
async fn health_handler_reports_up() {
    let (app, _doc) = system_router::<()>().split_for_parts();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).and_then(|v| v.to_str().ok()),
        Some("no-store, no-cache, must-revalidate")
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(body["status"], "up");
}
