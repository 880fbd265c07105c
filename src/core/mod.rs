//! Core domain types: the invoice model, form validation, and the typed
//! failure contract shared by the operations and the HTTP surface.

pub mod error;
pub mod invoice;
pub mod validation;

pub use error::{ActionFailure, ApiError, State};
pub use invoice::{Invoice, InvoiceDraft, InvoiceInput, InvoiceStatus};
pub use validation::{CreateInvoice, FieldErrors, InvoiceForm, UpdateInvoice};
