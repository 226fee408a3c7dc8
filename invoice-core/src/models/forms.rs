//! Form payloads accepted by the mutation operations.
//!
//! Every field is optional: a missing or unknown field in a request is
//! treated as absent and resolved through that field's default rule by the
//! store, never rejected.

use serde::Deserialize;

/// Input for appending a line item.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ItemForm {
    pub quantity: Option<String>,
    pub description: Option<String>,
    pub unit_price: Option<String>,
}

/// Input for removing line items by description.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RemoveItemForm {
    pub description: Option<String>,
}

/// Input for replacing the company profile.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CompanyForm {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
}

/// Input for replacing the client profile.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClientForm {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Input for updating invoice metadata.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetaForm {
    pub invoice_number: Option<String>,
    pub invoice_date: Option<String>,
    pub due_date: Option<String>,
    pub currency_symbol: Option<String>,
    pub tax_rate: Option<String>,
    pub shipping: Option<String>,
    pub amount_paid: Option<String>,
    pub notes: Option<String>,
}
