use askama::Template;
use axum::extract::State;
use axum::response::IntoResponse;
use invoice_core::models::{ClientProfile, CompanyProfile, InvoiceMeta, LineItem};
use invoice_core::{InvoiceStore, Totals};

use crate::AppState;

/// Everything the two pages render: both profiles, the item rows, the
/// invoice metadata, and the computed totals. Setup and invoice receive
/// identical data and differ only in the template they feed it to.
#[derive(Debug, Clone)]
pub struct InvoiceView {
    pub company: CompanyProfile,
    pub client: ClientProfile,
    pub items: Vec<LineItem>,
    pub meta: InvoiceMeta,
    pub totals: Totals,
}

impl InvoiceView {
    pub fn snapshot(store: &InvoiceStore) -> Self {
        Self {
            company: store.company.clone(),
            client: store.client.clone(),
            items: store.items.clone(),
            meta: store.meta.clone(),
            totals: Totals::compute(&store.items, &store.meta),
        }
    }

    /// Amount still owed after payments recorded so far.
    pub fn balance_due(&self) -> f64 {
        self.totals.total - self.meta.amount_paid
    }
}

#[derive(Template)]
#[template(path = "setup.html")]
pub struct SetupTemplate {
    pub view: InvoiceView,
}

#[derive(Template)]
#[template(path = "invoice.html")]
pub struct InvoiceTemplate {
    pub view: InvoiceView,
}

pub async fn setup_page(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.read().await;
    SetupTemplate {
        view: InvoiceView::snapshot(&store),
    }
}

pub async fn invoice_page(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.read().await;
    InvoiceTemplate {
        view: InvoiceView::snapshot(&store),
    }
}
