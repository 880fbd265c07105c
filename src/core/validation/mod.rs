//! Form validation for invoice mutations.
//!
//! This module owns the contract between untyped form payloads and the
//! typed records the rest of the crate works with. Create and Update each
//! have their own named validator with an explicit field set, so the two
//! cannot drift apart silently by editing a shared schema.

pub mod form;
pub mod schema;
pub mod validators;

pub use form::InvoiceForm;
pub use schema::{CreateInvoice, FieldErrors, UpdateInvoice};
