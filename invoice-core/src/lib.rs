//! invoice-core: shared domain core for the invoice composer.
//!
//! Holds the in-memory invoice state, the totals calculator, and the
//! parsing rules applied to untrusted form fields. The web layer owns an
//! [`InvoiceStore`] behind a single lock and calls into it; nothing in this
//! crate performs I/O.

pub mod models;
pub mod observability;
pub mod parse;
pub mod store;
pub mod totals;

pub use store::InvoiceStore;
pub use totals::Totals;
