use axum::extract::State;
use axum::response::{IntoResponse, Redirect};
use axum::Form;
use invoice_core::models::{ClientForm, CompanyForm};

use crate::services::metrics::record_mutation;
use crate::AppState;

pub async fn update_company(
    State(state): State<AppState>,
    Form(form): Form<CompanyForm>,
) -> impl IntoResponse {
    let mut store = state.store.write().await;
    store.update_company(form);
    tracing::info!(name = %store.company.name, "Company profile updated");
    record_mutation("update_company");
    Redirect::to("/setup")
}

pub async fn update_client(
    State(state): State<AppState>,
    Form(form): Form<ClientForm>,
) -> impl IntoResponse {
    let mut store = state.store.write().await;
    store.update_client(form);
    tracing::info!(name = %store.client.name, "Client profile updated");
    record_mutation("update_client");
    Redirect::to("/setup")
}
