use axum::{extract::Request, middleware::Next, response::Response};

use crate::services::metrics::metrics;

/// Count every request by method, path, and response status.
pub async fn track_http(req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16().to_string();
    metrics()
        .http_requests_total
        .with_label_values(&[&method, &path, &status])
        .inc();

    response
}
