//! Shared utilities for integration tests.

use axum::{
    body::Body,
    http::{HeaderMap, HeaderName, HeaderValue, Request, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use tower::ServiceExt;

/// A router whose only handler answers `/` with the given response headers.
pub fn router_with_headers(headers: &'static [(&'static str, &'static str)]) -> Router {
    Router::new().route(
        "/",
        get(move || async move {
            let mut response = Response::new(Body::from("ok"));
            for &(name, value) in headers {
                response.headers_mut().append(
                    HeaderName::from_static(name),
                    HeaderValue::from_static(value),
                );
            }
            response
        }),
    )
}

/// Send a GET request to `uri` and return status, headers and body text.
pub async fn get_response(router: Router, uri: &str) -> (StatusCode, HeaderMap, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();

    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}

/// All values of `name`, as strings.
#[allow(dead_code)]
pub fn header_values(headers: &HeaderMap, name: &str) -> Vec<String> {
    headers
        .get_all(name)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}
