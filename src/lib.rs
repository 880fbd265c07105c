//! # Invoiced
//!
//! Form-driven invoice mutation handlers for web dashboards.
//!
//! The crate implements the server side of a basic invoice CRUD screen:
//! validate submitted form fields, persist the change with a single
//! parameterized statement, invalidate the cached listing page, and
//! redirect back to it.
//!
//! ## Features
//!
//! - **Named Validators**: `CreateInvoice` and `UpdateInvoice` with explicit
//!   field sets and stable user-facing messages
//! - **Typed Feedback**: validation failures come back as a structured
//!   per-field `errors` map, storage faults as a generic message
//! - **Pluggable Storage**: in-memory store by default, PostgreSQL via the
//!   `postgres` feature flag
//! - **Cache + Redirect**: mutations revalidate the cached listing page;
//!   create/update answer with an unconditional redirect to it
//! - **Minor Units**: amounts are submitted in dollars and stored in cents
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use invoiced::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     invoiced::server::init_tracing();
//!
//!     let config = AppConfig::default();
//!     let store = Arc::new(InMemoryInvoiceStore::new());
//!     let state = AppState::new(store).with_listing_path(config.listing_path.clone());
//!
//!     invoiced::server::serve(&config.listen_addr, state).await
//! }
//! ```

pub mod actions;
pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        error::{ActionFailure, ApiError, State},
        invoice::{Invoice, InvoiceDraft, InvoiceInput, InvoiceStatus},
        validation::{CreateInvoice, FieldErrors, InvoiceForm, UpdateInvoice},
    };

    // === Operations ===
    pub use crate::actions::{
        MutationOutcome, create_invoice, delete_invoice, messages, update_invoice,
    };

    // === Storage ===
    pub use crate::storage::{InMemoryInvoiceStore, InvoiceStore};
    #[cfg(feature = "postgres")]
    pub use crate::storage::{PostgresInvoiceStore, ensure_schema};

    // === Server ===
    pub use crate::server::{AppState, PageCache, router};

    // === Config ===
    pub use crate::config::AppConfig;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
    pub use uuid::Uuid;
}
