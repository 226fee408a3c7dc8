use axum::middleware::from_fn;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    app::{health_check, index},
    items::{add_item, remove_item},
    meta::{clear_all, update_meta},
    parties::{update_client, update_company},
    views::{invoice_page, setup_page},
};
use crate::middleware::metrics::track_http;
use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/metrics", get(crate::handlers::metrics::metrics))
        .route("/setup", get(setup_page))
        .route("/invoice", get(invoice_page))
        .route("/add_item", post(add_item))
        .route("/remove_item", post(remove_item))
        .route("/update_company", post(update_company))
        .route("/update_client", post(update_client))
        .route("/update_meta", post(update_meta))
        .route("/clear_all", post(clear_all))
        .nest_service("/static", ServeDir::new("invoice-frontend/static"))
        .layer(from_fn(track_http))
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .with_state(state)
}
