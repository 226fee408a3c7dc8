use axum::extract::State;
use axum::response::{IntoResponse, Redirect};
use axum::Form;
use invoice_core::models::MetaForm;

use crate::services::metrics::record_mutation;
use crate::AppState;

pub async fn update_meta(
    State(state): State<AppState>,
    Form(form): Form<MetaForm>,
) -> impl IntoResponse {
    let mut store = state.store.write().await;
    store.update_meta(form);
    tracing::info!(
        invoice_number = %store.meta.invoice_number,
        tax_rate = store.meta.tax_rate,
        shipping = store.meta.shipping,
        amount_paid = store.meta.amount_paid,
        "Invoice metadata updated"
    );
    record_mutation("update_meta");
    Redirect::to("/setup")
}

pub async fn clear_all(State(state): State<AppState>) -> impl IntoResponse {
    let mut store = state.store.write().await;
    store.clear_all();
    tracing::info!("All invoice data cleared and reset to defaults");
    record_mutation("clear_all");
    Redirect::to("/setup")
}
