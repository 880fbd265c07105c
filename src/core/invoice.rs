//! Invoice model and the typed records that flow between validation and storage.
//!
//! Money is handled in two representations:
//! - form input carries major units (dollars) as a decimal,
//! - storage carries minor units (cents) as an integer.
//!
//! Conversion is `round(amount * 100)` and happens exactly once, when a
//! validated input becomes a storage draft.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Invoice status lifecycle. Only these two values are accepted from forms
/// and only these two values are ever stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    /// The wire/storage representation ("pending" or "paid").
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored or submitted status string is not a known
/// status value.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown invoice status: '{0}'")]
pub struct ParseStatusError(pub String);

impl FromStr for InvoiceStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// A persisted invoice row.
///
/// `id` and `date` are stamped by the storage layer at creation and are
/// immutable afterwards; updates only ever touch `customer_id`, `amount`
/// and `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub customer_id: String,
    /// Amount in minor units (cents).
    pub amount: i64,
    pub status: InvoiceStatus,
    /// Creation date (UTC, date-only). Never updated.
    pub date: NaiveDate,
}

impl Invoice {
    /// Materialize a new invoice from a draft, generating the id and
    /// stamping the creation date from the UTC clock.
    pub fn from_draft(draft: InvoiceDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id: draft.customer_id,
            amount: draft.amount,
            status: draft.status,
            date: Utc::now().date_naive(),
        }
    }
}

/// The output of a successful form validation: typed values, still in
/// major units. `id` and `date` are deliberately absent; they are never
/// taken from a form.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceInput {
    pub customer_id: String,
    /// Amount in major units (dollars), as submitted.
    pub amount: f64,
    pub status: InvoiceStatus,
}

impl InvoiceInput {
    /// Convert to the cents-denominated record handed to the store.
    pub fn into_draft(self) -> InvoiceDraft {
        InvoiceDraft {
            customer_id: self.customer_id,
            amount: to_cents(self.amount),
            status: self.status,
        }
    }
}

/// The record a single INSERT or UPDATE statement is parameterized with:
/// the three user-editable fields, amount already in minor units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDraft {
    pub customer_id: String,
    /// Amount in minor units (cents).
    pub amount: i64,
    pub status: InvoiceStatus,
}

/// Convert a major-unit amount to minor units: `round(amount * 100)`.
pub fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}
