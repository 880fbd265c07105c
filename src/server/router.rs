//! HTTP surface for the invoice dashboard.
//!
//! Routes (relative to the configured listing path, default
//! `/dashboard/invoices`):
//!
//! - `GET  {listing}`: the invoice listing, served from the page cache
//!   when fresh;
//! - `POST {listing}`: create from a form submission;
//! - `POST {listing}/{id}`: update from a form submission;
//! - `POST {listing}/{id}/delete`: delete.
//!
//! Successful create/update mutations revalidate the cached listing and
//! answer with an unconditional redirect back to it; delete revalidates
//! and confirms with a message body. Failures answer with the `State`
//! feedback object instead (422 for validation, 500 for storage faults).

use axum::extract::{Form, Path, State as AxumState};
use axum::http::header;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::actions::{self, messages};
use crate::core::error::{ApiError, State};
use crate::core::validation::InvoiceForm;
use crate::server::cache::PageCache;
use crate::storage::InvoiceStore;

/// Default location of the invoice listing page.
pub const DEFAULT_LISTING_PATH: &str = "/dashboard/invoices";

/// Shared state for the invoice routes.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn InvoiceStore>,
    pub cache: PageCache,
    pub listing_path: String,
}

impl AppState {
    pub fn new(store: Arc<dyn InvoiceStore>) -> Self {
        Self {
            store,
            cache: PageCache::new(),
            listing_path: DEFAULT_LISTING_PATH.to_string(),
        }
    }

    /// Override the listing path (routes and redirects follow it).
    pub fn with_listing_path(mut self, path: impl Into<String>) -> Self {
        self.listing_path = path.into();
        self
    }
}

/// Build the invoice router for the given state.
pub fn router(state: AppState) -> Router {
    let listing = state.listing_path.clone();

    Router::new()
        .route(&listing, get(list_invoices).post(create_invoice))
        .route(&format!("{listing}/{{id}}"), post(update_invoice))
        .route(&format!("{listing}/{{id}}/delete"), post(delete_invoice))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn list_invoices(AxumState(app): AxumState<AppState>) -> Result<Response, ApiError> {
    if let Some(body) = app.cache.get(&app.listing_path) {
        return Ok(json_body(body));
    }

    let invoices = app.store.list().await.map_err(|fault| {
        tracing::error!(error = %fault, "invoice listing failed");
        ApiError::Database(State::message("Database Error: Failed to fetch invoices"))
    })?;

    let body = serde_json::to_string(&invoices).map_err(|fault| {
        tracing::error!(error = %fault, "invoice listing serialization failed");
        ApiError::Database(State::message("Database Error: Failed to fetch invoices"))
    })?;

    app.cache.put(&app.listing_path, body.clone());
    Ok(json_body(body))
}

async fn create_invoice(
    AxumState(app): AxumState<AppState>,
    Form(form): Form<InvoiceForm>,
) -> Result<Response, ApiError> {
    actions::create_invoice(app.store.as_ref(), &form).await?;

    app.cache.revalidate(&app.listing_path);
    Ok(Redirect::to(&app.listing_path).into_response())
}

async fn update_invoice(
    AxumState(app): AxumState<AppState>,
    Path(id): Path<String>,
    Form(form): Form<InvoiceForm>,
) -> Result<Response, ApiError> {
    let id = parse_invoice_id(&id)?;
    actions::update_invoice(app.store.as_ref(), &id, &form).await?;

    // The redirect is unconditional on the success path, row matched or not.
    app.cache.revalidate(&app.listing_path);
    Ok(Redirect::to(&app.listing_path).into_response())
}

async fn delete_invoice(
    AxumState(app): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_invoice_id(&id)?;
    actions::delete_invoice(app.store.as_ref(), &id).await?;

    app.cache.revalidate(&app.listing_path);
    Ok(Json(State::message(messages::DELETED_INVOICE)).into_response())
}

/// The `{id}` segment comes from the route, not the form; a malformed id
/// is a request error and never reaches validation.
fn parse_invoice_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::InvalidInvoiceId(raw.to_string()))
}

fn json_body(body: String) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}
