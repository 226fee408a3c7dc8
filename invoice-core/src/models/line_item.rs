//! Line item model.

use serde::{Deserialize, Serialize};

/// One billable row on the invoice.
///
/// Items carry no stable identifier: the description text is the handle the
/// remove operation matches on, and duplicate descriptions are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub quantity: u32,
    pub description: String,
    pub unit_price: f64,
}

impl LineItem {
    /// Extended amount for this row.
    pub fn amount(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}
