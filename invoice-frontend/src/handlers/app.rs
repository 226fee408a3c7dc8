use axum::response::{IntoResponse, Redirect};

/// The default route lands on the setup form.
pub async fn index() -> impl IntoResponse {
    Redirect::to("/setup")
}

pub async fn health_check() -> &'static str {
    "OK"
}
