use rust_decimal::Decimal;

use super::error::ValidationError;
use super::states::is_known_state;
use super::types::*;

/// Validate an invoice record before it is saved or rendered.
/// Returns all validation errors found (not just the first).
///
/// The tax calculator itself is an unguarded numeric transform; this is
/// the guard callers run in front of it.
pub fn validate_invoice(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if invoice.number.trim().is_empty() {
        errors.push(ValidationError::new(
            "number",
            "invoice number must not be empty",
        ));
    }

    validate_customer(&invoice.customer, &mut errors);

    if invoice.items.is_empty() {
        errors.push(ValidationError::new(
            "items",
            "invoice must have at least one line item",
        ));
    }

    for (i, item) in invoice.items.iter().enumerate() {
        validate_item(item, i, &mut errors);
    }

    errors
}

fn validate_customer(customer: &Customer, errors: &mut Vec<ValidationError>) {
    if customer.name.trim().is_empty() {
        errors.push(ValidationError::new(
            "customer.name",
            "customer name must not be empty",
        ));
    }

    if customer.state.trim().is_empty() {
        errors.push(ValidationError::new(
            "customer.state",
            "customer state must not be empty (required for the tax jurisdiction decision)",
        ));
    } else if !is_known_state(&customer.state) {
        errors.push(ValidationError::new(
            "customer.state",
            format!(
                "'{}' is not a known Indian state or union territory",
                customer.state
            ),
        ));
    }
}

fn validate_item(item: &LineItem, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("items[{index}]");

    if item.name.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.name"),
            "item name must not be empty",
        ));
    }

    if item.quantity < Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.quantity"),
            "quantity must not be negative",
        ));
    }

    if item.unit_price < Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.unit_price"),
            "unit price must not be negative",
        ));
    }

    if item.discount_percent < Decimal::ZERO || item.discount_percent > Decimal::ONE_HUNDRED {
        errors.push(ValidationError::new(
            format!("{prefix}.discount_percent"),
            "discount must be between 0 and 100 percent",
        ));
    }

    if item.gst_rate < Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.gst_rate"),
            "GST rate must not be negative",
        ));
    }
}
