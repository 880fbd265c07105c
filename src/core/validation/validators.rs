//! Reusable field validators
//!
//! Each validator takes the raw form value and either coerces it to its
//! typed representation or returns the user-facing message for that field.

use crate::core::invoice::InvoiceStatus;

/// Message shown when the customer field is missing or empty.
pub const CUSTOMER_MESSAGE: &str = "Please select a customer";

/// Message shown when the amount is missing, non-numeric, or not > 0.
pub const AMOUNT_MESSAGE: &str = "Please enter an amount greater than $0";

/// Message shown when the status is missing or not a known status.
pub const STATUS_MESSAGE: &str = "Please select an invoice status.";

/// Validator: customer reference is a non-empty string.
pub fn customer_id(raw: Option<&str>) -> Result<String, &'static str> {
    match raw {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(CUSTOMER_MESSAGE),
    }
}

/// Validator: amount coerces to a finite number strictly greater than zero.
///
/// The value stays in major units here; conversion to cents happens when
/// the validated input becomes a storage draft.
pub fn amount(raw: Option<&str>) -> Result<f64, &'static str> {
    let parsed = raw
        .and_then(|value| value.trim().parse::<f64>().ok())
        .ok_or(AMOUNT_MESSAGE)?;

    if parsed.is_finite() && parsed > 0.0 {
        Ok(parsed)
    } else {
        Err(AMOUNT_MESSAGE)
    }
}

/// Validator: status is exactly "pending" or "paid".
pub fn status(raw: Option<&str>) -> Result<InvoiceStatus, &'static str> {
    raw.and_then(|value| value.parse::<InvoiceStatus>().ok())
        .ok_or(STATUS_MESSAGE)
}
