use axum::body::Body;
use axum::http::{HeaderMap, HeaderValue, Request, StatusCode};
use axum::routing::get;
use axum::{Router, middleware};
use tower::ServiceExt;

use summarizer_agent::infrastructure::observability::{
    REQUEST_ID_HEADER, RequestId, request_id_middleware,
};

fn app() -> Router {
    Router::new()
        .route("/", get(|id: RequestId| async move { id.0 }))
        .layer(middleware::from_fn(request_id_middleware))
}

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[test]
fn given_header_when_reading_request_id_then_uses_trimmed_value() {
    let mut headers = HeaderMap::new();
    headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(" abc-123 "));

    assert_eq!(RequestId::from_headers(&headers).as_str(), "abc-123");
}

#[test]
fn given_blank_header_when_reading_request_id_then_generates_one() {
    let mut headers = HeaderMap::new();
    headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  "));

    let id = RequestId::from_headers(&headers);

    assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());
}

#[tokio::test]
async fn given_incoming_request_id_when_handled_then_echoed_and_visible_to_handler() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(REQUEST_ID_HEADER, "trace-me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[REQUEST_ID_HEADER], "trace-me");
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"trace-me");
}

#[tokio::test]
async fn given_no_request_id_when_handled_then_generated_id_matches_header() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let header = response.headers()[REQUEST_ID_HEADER]
        .to_str()
        .unwrap()
        .to_string();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(body, header.as_bytes());
}
