//! In-memory invoice state and its mutation contract.

use crate::models::{
    ClientForm, ClientProfile, CompanyForm, CompanyProfile, InvoiceMeta, ItemForm, LineItem,
    MetaForm, RemoveItemForm, DEFAULT_CURRENCY_SYMBOL,
};
use crate::parse::{non_blank, parse_f64_or, parse_quantity_or, trimmed};

/// The whole editable state of the composer: both party profiles, the
/// invoice metadata, and the ordered line items.
///
/// The web layer owns one of these behind a single lock; every method here
/// runs to completion synchronously while that lock is held. Mutations
/// absorb malformed input through per-field defaults and never fail.
#[derive(Debug, Clone, Default)]
pub struct InvoiceStore {
    pub company: CompanyProfile,
    pub client: ClientProfile,
    pub meta: InvoiceMeta,
    pub items: Vec<LineItem>,
}

impl InvoiceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line item.
    ///
    /// The description is trimmed; a blank description makes the whole
    /// operation a no-op. Quantity defaults to 1 and unit price to 0.0 when
    /// missing or unparsable. Returns the appended item, or `None` on the
    /// no-op path.
    pub fn add_item(&mut self, form: ItemForm) -> Option<&LineItem> {
        let description = non_blank(form.description)?;
        let quantity = parse_quantity_or(form.quantity.as_deref(), 1);
        let unit_price = parse_f64_or(form.unit_price.as_deref(), 0.0);

        self.items.push(LineItem {
            quantity,
            description,
            unit_price,
        });
        self.items.last()
    }

    /// Remove every item whose description exactly equals the submitted
    /// text after trimming. Blank input is a no-op. Returns the number of
    /// items removed, which can exceed one when descriptions repeat.
    pub fn remove_item(&mut self, form: RemoveItemForm) -> usize {
        let Some(description) = non_blank(form.description) else {
            return 0;
        };
        let before = self.items.len();
        self.items.retain(|item| item.description != description);
        before - self.items.len()
    }

    /// Replace the company profile wholesale. Every field is trimmed and
    /// blank values are kept as submitted.
    pub fn update_company(&mut self, form: CompanyForm) {
        self.company = CompanyProfile {
            name: trimmed(form.name),
            address: trimmed(form.address),
            phone: trimmed(form.phone),
            email: trimmed(form.email),
            website: trimmed(form.website),
            logo_url: trimmed(form.logo_url),
        };
    }

    /// Replace the client profile wholesale, same trimming rules as
    /// [`update_company`](Self::update_company).
    pub fn update_client(&mut self, form: ClientForm) {
        self.client = ClientProfile {
            name: trimmed(form.name),
            address: trimmed(form.address),
            phone: trimmed(form.phone),
            email: trimmed(form.email),
        };
    }

    /// Apply invoice metadata updates field by field.
    ///
    /// `invoice_number` and `invoice_date` keep their previous value on
    /// blank input; `currency_symbol` falls back to `"$"`; `due_date` and
    /// `notes` accept blank as an overwrite; `tax_rate` falls back to its
    /// previous value on parse failure and is clamped to `0..=100`;
    /// `shipping` and `amount_paid` fall back to 0.0.
    pub fn update_meta(&mut self, form: MetaForm) {
        if let Some(number) = non_blank(form.invoice_number) {
            self.meta.invoice_number = number;
        }
        if let Some(date) = non_blank(form.invoice_date) {
            self.meta.invoice_date = date;
        }
        self.meta.due_date = trimmed(form.due_date);
        self.meta.currency_symbol = non_blank(form.currency_symbol)
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string());

        let tax_rate = parse_f64_or(form.tax_rate.as_deref(), self.meta.tax_rate);
        self.meta.tax_rate = tax_rate.clamp(0.0, 100.0);

        self.meta.shipping = parse_f64_or(form.shipping.as_deref(), 0.0);
        self.meta.amount_paid = parse_f64_or(form.amount_paid.as_deref(), 0.0);
        self.meta.notes = trimmed(form.notes);
    }

    /// Reset everything to first-start defaults: items cleared, both
    /// profiles back to their placeholders, metadata back to its hard-coded
    /// defaults. The invoice date is recomputed to today at call time, not
    /// restored to its prior literal.
    pub fn clear_all(&mut self) {
        self.items.clear();
        self.company = CompanyProfile::default();
        self.client = ClientProfile::default();
        self.meta = InvoiceMeta::default();
    }
}
