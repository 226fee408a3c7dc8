//! Totals derivation.

use serde::Serialize;

use crate::models::{InvoiceMeta, LineItem};

/// Computed amounts for the current invoice state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    pub subtotal: f64,
    pub tax: f64,
    pub shipping: f64,
    pub total: f64,
}

impl Totals {
    /// Derive subtotal, tax, shipping, and grand total from the item rows
    /// and the invoice metadata.
    ///
    /// Pure and infallible: stored numeric fields are always valid, so no
    /// input can make this fail.
    pub fn compute(items: &[LineItem], meta: &InvoiceMeta) -> Self {
        let subtotal: f64 = items.iter().map(LineItem::amount).sum();
        let tax = subtotal * (meta.tax_rate / 100.0);
        let shipping = meta.shipping;
        Self {
            subtotal,
            tax,
            shipping,
            total: subtotal + tax + shipping,
        }
    }
}
