//! Invoice mutation operations.
//!
//! These functions are the operation boundary of the crate: validation
//! failures and storage faults are both folded into [`ActionFailure`] here,
//! so nothing past this point propagates backend error detail. Storage
//! faults are logged before being converted; their detail never reaches the
//! caller.

use uuid::Uuid;

use super::messages;
use crate::core::error::{ActionFailure, State};
use crate::core::invoice::Invoice;
use crate::core::validation::{CreateInvoice, InvoiceForm, UpdateInvoice};
use crate::storage::InvoiceStore;

/// What a completed Update or Delete actually did.
///
/// A missing row is reported rather than swallowed, but it is not an
/// error: the user-facing behavior stays idempotent (same redirect, same
/// delete confirmation) whether or not a row matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Exactly one row was written.
    Applied,
    /// No row matched the id; nothing was written.
    NotFound,
}

/// Create a new invoice from a raw form submission.
///
/// The store generates the id and stamps the creation date; neither is
/// accepted from the form. Returns the inserted row on success.
pub async fn create_invoice(
    store: &dyn InvoiceStore,
    form: &InvoiceForm,
) -> Result<Invoice, ActionFailure> {
    let input = CreateInvoice::parse(form).map_err(|errors| {
        ActionFailure::Invalid(State::invalid(errors, messages::CREATE_MISSING_FIELDS))
    })?;

    match store.insert(input.into_draft()).await {
        Ok(invoice) => Ok(invoice),
        Err(fault) => {
            tracing::error!(error = %fault, "invoice insert failed");
            Err(ActionFailure::Database(State::message(
                messages::CREATE_DATABASE_ERROR,
            )))
        }
    }
}

/// Update the invoice matching `id` from a raw form submission.
///
/// `id` arrives out-of-band (from the route) and is not part of the form
/// validation. Only `customer_id`, `amount` and `status` change.
pub async fn update_invoice(
    store: &dyn InvoiceStore,
    id: &Uuid,
    form: &InvoiceForm,
) -> Result<MutationOutcome, ActionFailure> {
    let input = UpdateInvoice::parse(form).map_err(|errors| {
        ActionFailure::Invalid(State::invalid(errors, messages::UPDATE_MISSING_FIELDS))
    })?;

    match store.update(id, input.into_draft()).await {
        Ok(0) => {
            tracing::warn!(invoice_id = %id, "update matched no invoice");
            Ok(MutationOutcome::NotFound)
        }
        Ok(_) => Ok(MutationOutcome::Applied),
        Err(fault) => {
            tracing::error!(invoice_id = %id, error = %fault, "invoice update failed");
            Err(ActionFailure::Database(State::message(
                messages::UPDATE_DATABASE_ERROR,
            )))
        }
    }
}

/// Delete the invoice matching `id`.
///
/// No existence check: deleting an absent invoice completes the same way
/// as deleting a present one.
pub async fn delete_invoice(
    store: &dyn InvoiceStore,
    id: &Uuid,
) -> Result<MutationOutcome, ActionFailure> {
    match store.delete(id).await {
        Ok(0) => Ok(MutationOutcome::NotFound),
        Ok(_) => Ok(MutationOutcome::Applied),
        Err(fault) => {
            tracing::error!(invoice_id = %id, error = %fault, "invoice delete failed");
            Err(ActionFailure::Database(State::message(
                messages::DELETE_DATABASE_ERROR,
            )))
        }
    }
}
