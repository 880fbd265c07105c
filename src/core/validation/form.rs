//! Raw form payload as submitted by the client.

use serde::{Deserialize, Serialize};

/// A raw invoice form submission: string-keyed fields, all optional at this
/// stage. Field names follow the form's wire naming (`customerId`).
///
/// `id` and `date` have no place here: the id arrives out-of-band via the
/// route and the date is stamped server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceForm {
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl InvoiceForm {
    /// Convenience constructor for a fully populated form.
    pub fn new(
        customer_id: impl Into<String>,
        amount: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: Some(customer_id.into()),
            amount: Some(amount.into()),
            status: Some(status.into()),
        }
    }
}
