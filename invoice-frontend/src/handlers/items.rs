use axum::extract::State;
use axum::response::{IntoResponse, Redirect};
use axum::Form;
use invoice_core::models::{ItemForm, RemoveItemForm};

use crate::services::metrics::record_mutation;
use crate::AppState;

pub async fn add_item(
    State(state): State<AppState>,
    Form(form): Form<ItemForm>,
) -> impl IntoResponse {
    let mut store = state.store.write().await;
    if let Some(item) = store.add_item(form) {
        tracing::info!(
            description = %item.description,
            quantity = item.quantity,
            unit_price = item.unit_price,
            "Added line item"
        );
        record_mutation("add_item");
    }
    Redirect::to("/setup")
}

pub async fn remove_item(
    State(state): State<AppState>,
    Form(form): Form<RemoveItemForm>,
) -> impl IntoResponse {
    let description = form.description.clone().unwrap_or_default();
    let mut store = state.store.write().await;
    let before = store.items.len();
    let removed = store.remove_item(form);
    if removed > 0 {
        tracing::info!(
            description = %description.trim(),
            before,
            after = before - removed,
            "Removed line items"
        );
        record_mutation("remove_item");
    }
    Redirect::to("/setup")
}
