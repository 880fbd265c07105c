//! Storage backends for invoices.
//!
//! The store trait is deliberately narrow: each mutation maps onto exactly
//! one parameterized statement, and update/delete report how many rows
//! matched so callers can tell a no-op from a hit without treating the
//! miss as an error.

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::core::invoice::{Invoice, InvoiceDraft};

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use in_memory::InMemoryInvoiceStore;
#[cfg(feature = "postgres")]
pub use postgres::{PostgresInvoiceStore, ensure_schema};

/// Service trait for the invoices table.
///
/// Implementations provide single-statement CRUD against one relational
/// table (or an equivalent in-memory map). The operations layer is agnostic
/// to the backend.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Insert a new invoice. The store generates the id and stamps the
    /// creation date; the caller supplies only the three editable fields.
    async fn insert(&self, draft: InvoiceDraft) -> Result<Invoice>;

    /// Update `customer_id`, `amount` and `status` of the row matching
    /// `id`. `id` and `date` are never touched. Returns the number of rows
    /// matched (0 when the invoice does not exist).
    async fn update(&self, id: &Uuid, draft: InvoiceDraft) -> Result<u64>;

    /// Delete the row matching `id`, without an existence precheck.
    /// Returns the number of rows removed.
    async fn delete(&self, id: &Uuid) -> Result<u64>;

    /// Fetch a single invoice by id.
    async fn get(&self, id: &Uuid) -> Result<Option<Invoice>>;

    /// List all invoices, newest first.
    async fn list(&self) -> Result<Vec<Invoice>>;
}
