//! PostgreSQL storage backend using sqlx.
//!
//! Provides an `InvoiceStore` implementation backed by PostgreSQL via
//! `sqlx::PgPool`.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! invoiced-rs = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! # Schema
//!
//! Invoices live in a single `invoices` table: one row per invoice, amount
//! in minor units (cents), creation date as a date-only column. The
//! customer reference is a plain text column; deployments that carry a
//! `customers` table can add the foreign key constraint, and violations
//! surface on the generic persistence-fault path.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use super::InvoiceStore;
use crate::core::invoice::{Invoice, InvoiceDraft};

// ---------------------------------------------------------------------------
// Schema management
// ---------------------------------------------------------------------------

/// Apply the required table (idempotent). Safe to call on every startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS invoices (
            id UUID NOT NULL PRIMARY KEY,
            customer_id TEXT NOT NULL,
            amount BIGINT NOT NULL,
            status TEXT NOT NULL,
            date DATE NOT NULL
        )",
    )
    .execute(pool)
    .await
    .map_err(|e| anyhow!("Failed to create invoices table: {}", e))?;

    Ok(())
}

// ---------------------------------------------------------------------------
// PostgresInvoiceStore
// ---------------------------------------------------------------------------

/// Invoice storage backed by PostgreSQL.
///
/// # Example
///
/// ```rust,ignore
/// use sqlx::PgPool;
/// use invoiced::storage::{PostgresInvoiceStore, ensure_schema};
///
/// let pool = PgPool::connect("postgres://localhost/dashboard").await?;
/// ensure_schema(&pool).await?;
/// let store = PostgresInvoiceStore::new(pool);
/// ```
#[derive(Clone, Debug)]
pub struct PostgresInvoiceStore {
    pool: PgPool,
}

impl PostgresInvoiceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Parse an invoice row tuple into the domain type.
    fn row_to_invoice(
        id: Uuid,
        customer_id: String,
        amount: i64,
        status: String,
        date: NaiveDate,
    ) -> Result<Invoice> {
        Ok(Invoice {
            id,
            customer_id,
            amount,
            status: status
                .parse()
                .map_err(|e| anyhow!("Invalid status in invoices row: {}", e))?,
            date,
        })
    }
}

type InvoiceTuple = (Uuid, String, i64, String, NaiveDate);

const INVOICE_SELECT: &str = "SELECT id, customer_id, amount, status, date FROM invoices";

#[async_trait]
impl InvoiceStore for PostgresInvoiceStore {
    async fn insert(&self, draft: InvoiceDraft) -> Result<Invoice> {
        // Generate id + stamp date here so the returned value matches the
        // row byte for byte, same as the in-memory backend.
        let invoice = Invoice::from_draft(draft);

        sqlx::query(
            "INSERT INTO invoices (id, customer_id, amount, status, date) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(invoice.id)
        .bind(&invoice.customer_id)
        .bind(invoice.amount)
        .bind(invoice.status.as_str())
        .bind(invoice.date)
        .execute(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to insert invoice: {}", e))?;

        Ok(invoice)
    }

    async fn update(&self, id: &Uuid, draft: InvoiceDraft) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE invoices \
             SET customer_id = $1, amount = $2, status = $3 \
             WHERE id = $4",
        )
        .bind(&draft.customer_id)
        .bind(draft.amount)
        .bind(draft.status.as_str())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to update invoice: {}", e))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to delete invoice: {}", e))?;

        Ok(result.rows_affected())
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Invoice>> {
        let sql = format!("{} WHERE id = $1", INVOICE_SELECT);
        let row = sqlx::query_as::<_, InvoiceTuple>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to get invoice: {}", e))?;

        match row {
            Some((id, customer_id, amount, status, date)) => Ok(Some(Self::row_to_invoice(
                id,
                customer_id,
                amount,
                status,
                date,
            )?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Invoice>> {
        let sql = format!("{} ORDER BY date DESC, id", INVOICE_SELECT);
        let rows = sqlx::query_as::<_, InvoiceTuple>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to list invoices: {}", e))?;

        rows.into_iter()
            .map(|(id, customer_id, amount, status, date)| {
                Self::row_to_invoice(id, customer_id, amount, status, date)
            })
            .collect()
    }
}
