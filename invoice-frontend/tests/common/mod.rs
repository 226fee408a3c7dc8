//! Shared helpers for driving the router in-process.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use invoice_frontend::startup::build_router;
use invoice_frontend::AppState;
use tower::util::ServiceExt;

/// Build the full application router over a fresh, empty store.
pub fn test_app() -> Router {
    build_router(AppState::new())
}

pub async fn get(app: &Router, path: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// POST a form-encoded body, the way a browser submits the setup forms.
pub async fn post_form(app: &Router, path: &str, fields: &[(&str, &str)]) -> Response {
    let body = serde_urlencoded::to_string(fields).expect("form fields encode");
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Every mutation acknowledges with a redirect back to the setup page.
pub fn assert_redirects_to_setup(response: &Response) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/setup");
}
