//! End-to-end tests for the three mutation operations against the
//! in-memory store, plus an unreachable-store double for the fault paths.

use anyhow::anyhow;
use invoiced::prelude::*;

/// Store double whose statements all fault, as if the database were down.
struct UnreachableStore;

#[async_trait]
impl InvoiceStore for UnreachableStore {
    async fn insert(&self, _draft: InvoiceDraft) -> Result<Invoice> {
        Err(anyhow!("connection refused"))
    }

    async fn update(&self, _id: &Uuid, _draft: InvoiceDraft) -> Result<u64> {
        Err(anyhow!("connection refused"))
    }

    async fn delete(&self, _id: &Uuid) -> Result<u64> {
        Err(anyhow!("connection refused"))
    }

    async fn get(&self, _id: &Uuid) -> Result<Option<Invoice>> {
        Err(anyhow!("connection refused"))
    }

    async fn list(&self) -> Result<Vec<Invoice>> {
        Err(anyhow!("connection refused"))
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_persists_cents_status_and_today() {
    let store = InMemoryInvoiceStore::new();
    let form = InvoiceForm::new("c1", "49.99", "pending");

    let invoice = create_invoice(&store, &form).await.unwrap();

    let stored = store.get(&invoice.id).await.unwrap().unwrap();
    assert_eq!(stored.amount, 4999);
    assert_eq!(stored.status, InvoiceStatus::Pending);
    assert_eq!(stored.customer_id, "c1");
    assert_eq!(stored.date, chrono::Utc::now().date_naive());
}

#[tokio::test]
async fn create_with_empty_customer_writes_nothing() {
    let store = InMemoryInvoiceStore::new();
    let form = InvoiceForm::new("", "10", "paid");

    let failure = create_invoice(&store, &form).await.unwrap_err();

    let ActionFailure::Invalid(state) = failure else {
        panic!("expected a validation failure");
    };
    assert_eq!(
        state.message.as_deref(),
        Some("Missing fields. Failed to create invoice.")
    );
    let errors = state.errors.unwrap();
    assert_eq!(errors.customer_id, vec!["Please select a customer"]);
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_with_missing_fields_reports_each_field() {
    let store = InMemoryInvoiceStore::new();

    let failure = create_invoice(&store, &InvoiceForm::default())
        .await
        .unwrap_err();

    let errors = failure.into_state().errors.unwrap();
    assert_eq!(errors.customer_id, vec!["Please select a customer"]);
    assert_eq!(errors.amount, vec!["Please enter an amount greater than $0"]);
    assert_eq!(errors.status, vec!["Please select an invoice status."]);
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_never_accepts_caller_supplied_identity() {
    // The form type has no id or date field at all; two identical
    // submissions still yield distinct rows stamped server-side.
    let store = InMemoryInvoiceStore::new();
    let form = InvoiceForm::new("c1", "10", "paid");

    let first = create_invoice(&store, &form).await.unwrap();
    let second = create_invoice(&store, &form).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(store.list().await.unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_changes_editable_fields_only() {
    let store = InMemoryInvoiceStore::new();
    let created = create_invoice(&store, &InvoiceForm::new("c1", "10", "pending"))
        .await
        .unwrap();

    let outcome = update_invoice(&store, &created.id, &InvoiceForm::new("c2", "20.50", "paid"))
        .await
        .unwrap();
    assert_eq!(outcome, MutationOutcome::Applied);

    let updated = store.get(&created.id).await.unwrap().unwrap();
    assert_eq!(updated.customer_id, "c2");
    assert_eq!(updated.amount, 2050);
    assert_eq!(updated.status, InvoiceStatus::Paid);
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.date, created.date);
}

#[tokio::test]
async fn update_with_zero_amount_modifies_nothing() {
    let store = InMemoryInvoiceStore::new();
    let created = create_invoice(&store, &InvoiceForm::new("c1", "10", "pending"))
        .await
        .unwrap();

    let failure = update_invoice(&store, &created.id, &InvoiceForm::new("c2", "0", "paid"))
        .await
        .unwrap_err();

    let ActionFailure::Invalid(state) = failure else {
        panic!("expected a validation failure");
    };
    assert_eq!(
        state.message.as_deref(),
        Some("Missing fields. Failed to update invoice.")
    );
    assert_eq!(
        state.errors.unwrap().amount,
        vec!["Please enter an amount greater than $0"]
    );

    // the row is untouched
    let stored = store.get(&created.id).await.unwrap().unwrap();
    assert_eq!(stored.customer_id, "c1");
    assert_eq!(stored.amount, 1000);
    assert_eq!(stored.status, InvoiceStatus::Pending);
}

#[tokio::test]
async fn update_missing_row_is_not_found_not_error() {
    let store = InMemoryInvoiceStore::new();

    let outcome = update_invoice(&store, &Uuid::new_v4(), &InvoiceForm::new("c1", "10", "paid"))
        .await
        .unwrap();

    assert_eq!(outcome, MutationOutcome::NotFound);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_removes_the_row() {
    let store = InMemoryInvoiceStore::new();
    let created = create_invoice(&store, &InvoiceForm::new("c1", "10", "paid"))
        .await
        .unwrap();

    let outcome = delete_invoice(&store, &created.id).await.unwrap();

    assert_eq!(outcome, MutationOutcome::Applied);
    assert!(store.get(&created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_missing_row_completes_without_error() {
    let store = InMemoryInvoiceStore::new();
    let outcome = delete_invoice(&store, &Uuid::new_v4()).await.unwrap();
    assert_eq!(outcome, MutationOutcome::NotFound);
}

// ---------------------------------------------------------------------------
// Fault paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_store_yields_generic_messages() {
    let id = Uuid::new_v4();
    let form = InvoiceForm::new("c1", "10", "paid");

    let create = create_invoice(&UnreachableStore, &form).await.unwrap_err();
    assert_eq!(
        create.state().message.as_deref(),
        Some("Database Error: Failed to create invoice")
    );

    let update = update_invoice(&UnreachableStore, &id, &form)
        .await
        .unwrap_err();
    assert_eq!(
        update.state().message.as_deref(),
        Some("Database Error: Failed to update invoice")
    );

    let delete = delete_invoice(&UnreachableStore, &id).await.unwrap_err();
    assert_eq!(
        delete.state().message.as_deref(),
        Some("Database Error: Failed to delete invoice")
    );
}

#[tokio::test]
async fn fault_states_carry_no_field_errors() {
    let failure = delete_invoice(&UnreachableStore, &Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(failure.state().errors.is_none());
}
