//! Invoice-level metadata: numbers, dates, tax, shipping, notes.

use chrono::Local;
use serde::{Deserialize, Serialize};

pub const DEFAULT_INVOICE_NUMBER: &str = "0001";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
pub const DEFAULT_TAX_RATE: f64 = 3.0;
pub const DEFAULT_NOTES: &str = "Thank you for your business!";

/// Invoice-level fields not tied to a party or line item.
///
/// Numeric fields are always valid numbers here: parsing with fallbacks
/// happens at mutation time, never at read time. `tax_rate` is a percentage
/// and stays within `0..=100` after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceMeta {
    pub invoice_number: String,
    pub invoice_date: String,
    pub due_date: String,
    pub currency_symbol: String,
    pub tax_rate: f64,
    pub shipping: f64,
    pub amount_paid: f64,
    pub notes: String,
}

impl Default for InvoiceMeta {
    fn default() -> Self {
        Self {
            invoice_number: DEFAULT_INVOICE_NUMBER.to_string(),
            invoice_date: today_iso(),
            due_date: String::new(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            tax_rate: DEFAULT_TAX_RATE,
            shipping: 0.0,
            amount_paid: 0.0,
            notes: DEFAULT_NOTES.to_string(),
        }
    }
}

/// Today's date as ISO `YYYY-MM-DD`, local time.
pub fn today_iso() -> String {
    Local::now().date_naive().to_string()
}
