pub mod config;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod startup;

use invoice_core::InvoiceStore;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state: the single in-memory invoice store.
///
/// One process-wide store behind one lock. Writers serialize on it, readers
/// snapshot, and that is the entire concurrency story. Everything resets on
/// restart.
#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<RwLock<InvoiceStore>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
