use rust_decimal::Decimal;

use super::types::{GstSplit, LineItem, TaxBreakdown};

/// Compute the GST breakdown for a set of line items.
///
/// The jurisdiction decision is made once per invoice from the
/// seller/buyer state pair — not per line. Equal states split the tax
/// evenly into CGST + SGST; different states put the full tax into IGST.
///
/// When `round_off` is enabled the grand total is rounded to the nearest
/// whole rupee (half away from zero); otherwise full precision is kept.
///
/// This is a pure numeric transform: it performs no input validation and
/// propagates whatever it is given, including negative quantities or
/// prices. Callers that need guarded inputs run
/// [`validate_invoice`](super::validate_invoice) first.
pub fn compute_tax(
    items: &[LineItem],
    seller_state: &str,
    buyer_state: &str,
    round_off: bool,
) -> TaxBreakdown {
    let intra_state = seller_state == buyer_state;

    let mut subtotal = Decimal::ZERO;
    let mut tax = Decimal::ZERO;

    for item in items {
        let discounted = item.amount();
        subtotal += discounted;
        tax += discounted * item.gst_rate / Decimal::ONE_HUNDRED;
    }

    let split = if intra_state {
        let half = tax / Decimal::TWO;
        GstSplit::Domestic {
            cgst: half,
            sgst: half,
        }
    } else {
        GstSplit::Interstate { igst: tax }
    };

    let total = subtotal + split.total();
    let grand_total = if round_off {
        round_to_rupee(total)
    } else {
        total
    };

    TaxBreakdown {
        subtotal,
        split,
        grand_total,
    }
}

/// Round to the nearest whole rupee, half away from zero.
fn round_to_rupee(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
