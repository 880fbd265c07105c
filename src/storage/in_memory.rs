//! In-memory implementation of InvoiceStore for testing and development

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use super::InvoiceStore;
use crate::core::invoice::{Invoice, InvoiceDraft};

/// In-memory invoice store.
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
#[derive(Clone)]
pub struct InMemoryInvoiceStore {
    invoices: Arc<RwLock<HashMap<Uuid, Invoice>>>,
}

impl InMemoryInvoiceStore {
    pub fn new() -> Self {
        Self {
            invoices: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryInvoiceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InvoiceStore for InMemoryInvoiceStore {
    async fn insert(&self, draft: InvoiceDraft) -> Result<Invoice> {
        let invoice = Invoice::from_draft(draft);

        let mut invoices = self
            .invoices
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        invoices.insert(invoice.id, invoice.clone());

        Ok(invoice)
    }

    async fn update(&self, id: &Uuid, draft: InvoiceDraft) -> Result<u64> {
        let mut invoices = self
            .invoices
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        match invoices.get_mut(id) {
            Some(invoice) => {
                invoice.customer_id = draft.customer_id;
                invoice.amount = draft.amount;
                invoice.status = draft.status;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: &Uuid) -> Result<u64> {
        let mut invoices = self
            .invoices
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        Ok(invoices.remove(id).map(|_| 1).unwrap_or(0))
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Invoice>> {
        let invoices = self
            .invoices
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(invoices.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Invoice>> {
        let invoices = self
            .invoices
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let mut all: Vec<Invoice> = invoices.values().cloned().collect();
        all.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
        Ok(all)
    }
}
