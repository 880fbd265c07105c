//! The three invoice mutations: Create, Update, Delete.
//!
//! Each operation composes the same three steps in strict sequence:
//! validate the raw form, execute a single parameterized write, and hand a
//! typed result back to the caller. Navigation (redirect) and listing-cache
//! invalidation are the caller's concern; see the `server` module.

pub mod invoice;

pub use invoice::{MutationOutcome, create_invoice, delete_invoice, update_invoice};

/// User-facing messages produced by the mutation operations.
pub mod messages {
    /// Top-level message on a failed Create validation.
    pub const CREATE_MISSING_FIELDS: &str = "Missing fields. Failed to create invoice.";
    /// Top-level message on a failed Update validation.
    pub const UPDATE_MISSING_FIELDS: &str = "Missing fields. Failed to update invoice.";

    /// Generic message when the Create write faults.
    pub const CREATE_DATABASE_ERROR: &str = "Database Error: Failed to create invoice";
    /// Generic message when the Update write faults.
    pub const UPDATE_DATABASE_ERROR: &str = "Database Error: Failed to update invoice";
    /// Generic message when the Delete write faults.
    pub const DELETE_DATABASE_ERROR: &str = "Database Error: Failed to delete invoice";

    /// Confirmation message for a completed Delete.
    pub const DELETED_INVOICE: &str = "Deleted Invoice.";
}
