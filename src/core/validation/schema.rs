//! Named validators for the two form-driven mutations.
//!
//! `CreateInvoice` and `UpdateInvoice` are deliberately separate types with
//! their own explicit field sets, even though the sets currently coincide.
//! Neither validator knows about `id` or `date`: those fields never come
//! from a form.

use serde::Serialize;

use super::form::InvoiceForm;
use super::validators;
use crate::core::invoice::InvoiceInput;

/// Per-field validation messages, keyed by the form's wire field names.
/// Each field carries an ordered list of messages; empty lists are omitted
/// from serialized output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub customer_id: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amount: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.customer_id.is_empty() && self.amount.is_empty() && self.status.is_empty()
    }
}

/// Validator for the Create form. Fields: `customerId`, `amount`, `status`.
pub struct CreateInvoice;

impl CreateInvoice {
    pub fn parse(form: &InvoiceForm) -> Result<InvoiceInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        let customer_id = validators::customer_id(form.customer_id.as_deref())
            .map_err(|msg| errors.customer_id.push(msg.to_string()));
        let amount = validators::amount(form.amount.as_deref())
            .map_err(|msg| errors.amount.push(msg.to_string()));
        let status = validators::status(form.status.as_deref())
            .map_err(|msg| errors.status.push(msg.to_string()));

        match (customer_id, amount, status) {
            (Ok(customer_id), Ok(amount), Ok(status)) => Ok(InvoiceInput {
                customer_id,
                amount,
                status,
            }),
            _ => Err(errors),
        }
    }
}

/// Validator for the Update form. Fields: `customerId`, `amount`, `status`.
/// The target `id` is supplied by the route, not the form, and is therefore
/// not part of this validator.
pub struct UpdateInvoice;

impl UpdateInvoice {
    pub fn parse(form: &InvoiceForm) -> Result<InvoiceInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        let customer_id = validators::customer_id(form.customer_id.as_deref())
            .map_err(|msg| errors.customer_id.push(msg.to_string()));
        let amount = validators::amount(form.amount.as_deref())
            .map_err(|msg| errors.amount.push(msg.to_string()));
        let status = validators::status(form.status.as_deref())
            .map_err(|msg| errors.status.push(msg.to_string()));

        match (customer_id, amount, status) {
            (Ok(customer_id), Ok(amount), Ok(status)) => Ok(InvoiceInput {
                customer_id,
                amount,
                status,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::invoice::InvoiceStatus;
    use crate::core::validation::validators::{
        AMOUNT_MESSAGE, CUSTOMER_MESSAGE, STATUS_MESSAGE,
    };

    // === CreateInvoice ===

    #[test]
    fn create_parses_valid_form() {
        let form = InvoiceForm::new("c1", "49.99", "pending");
        let input = CreateInvoice::parse(&form).unwrap();
        assert_eq!(input.customer_id, "c1");
        assert_eq!(input.amount, 49.99);
        assert_eq!(input.status, InvoiceStatus::Pending);
    }

    #[test]
    fn create_collects_single_field_error() {
        let form = InvoiceForm::new("", "10", "paid");
        let errors = CreateInvoice::parse(&form).unwrap_err();
        assert_eq!(errors.customer_id, vec![CUSTOMER_MESSAGE]);
        assert!(errors.amount.is_empty());
        assert!(errors.status.is_empty());
    }

    #[test]
    fn create_collects_all_field_errors() {
        let errors = CreateInvoice::parse(&InvoiceForm::default()).unwrap_err();
        assert_eq!(errors.customer_id, vec![CUSTOMER_MESSAGE]);
        assert_eq!(errors.amount, vec![AMOUNT_MESSAGE]);
        assert_eq!(errors.status, vec![STATUS_MESSAGE]);
    }

    #[test]
    fn create_rejects_zero_amount() {
        let form = InvoiceForm::new("c1", "0", "paid");
        let errors = CreateInvoice::parse(&form).unwrap_err();
        assert_eq!(errors.amount, vec![AMOUNT_MESSAGE]);
        assert!(errors.customer_id.is_empty());
    }

    // === UpdateInvoice ===

    #[test]
    fn update_parses_valid_form() {
        let form = InvoiceForm::new("c2", "15", "paid");
        let input = UpdateInvoice::parse(&form).unwrap();
        assert_eq!(input.customer_id, "c2");
        assert_eq!(input.amount, 15.0);
        assert_eq!(input.status, InvoiceStatus::Paid);
    }

    #[test]
    fn update_rejects_bad_status() {
        let form = InvoiceForm::new("c2", "15", "overdue");
        let errors = UpdateInvoice::parse(&form).unwrap_err();
        assert_eq!(errors.status, vec![STATUS_MESSAGE]);
    }

    #[test]
    fn validators_agree_on_field_rules() {
        // Both validators must accept and reject the same payloads as long
        // as their field sets coincide.
        let good = InvoiceForm::new("c1", "1.23", "pending");
        assert_eq!(
            CreateInvoice::parse(&good).unwrap(),
            UpdateInvoice::parse(&good).unwrap()
        );

        let bad = InvoiceForm::new("", "-1", "nope");
        assert_eq!(
            CreateInvoice::parse(&bad).unwrap_err(),
            UpdateInvoice::parse(&bad).unwrap_err()
        );
    }

    // === FieldErrors serialization ===

    #[test]
    fn field_errors_serialize_with_wire_names() {
        let errors = FieldErrors {
            customer_id: vec![CUSTOMER_MESSAGE.to_string()],
            ..Default::default()
        };
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["customerId"][0], CUSTOMER_MESSAGE);
        assert!(json.get("amount").is_none());
        assert!(json.get("status").is_none());
    }

    #[test]
    fn field_errors_is_empty() {
        assert!(FieldErrors::default().is_empty());
        let errors = FieldErrors {
            amount: vec![AMOUNT_MESSAGE.to_string()],
            ..Default::default()
        };
        assert!(!errors.is_empty());
    }
}
