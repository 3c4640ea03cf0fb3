//! Property-based tests for tax computation and invoice numbering.

use bijak::core::*;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn arb_gst_rate() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(Decimal::ZERO),
        Just(Decimal::from(5)),
        Just(Decimal::from(12)),
        Just(Decimal::from(18)),
        Just(Decimal::from(28)),
    ]
}

prop_compose! {
    fn arb_item()(
        quantity in 0i64..1_000,
        price_paise in 0i64..10_000_000,
        discount_bp in 0i64..=10_000,
        gst_rate in arb_gst_rate(),
    ) -> LineItem {
        LineItem {
            name: "Item".into(),
            hsn: "0000".into(),
            quantity: Decimal::from(quantity),
            unit_price: Decimal::new(price_paise, 2),
            discount_percent: Decimal::new(discount_bp, 2),
            gst_rate,
        }
    }
}

fn arb_items() -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec(arb_item(), 0..8)
}

fn arb_state_pair() -> impl Strategy<Value = (String, String)> {
    let state = prop_oneof![
        Just("Karnataka".to_string()),
        Just("Maharashtra".to_string()),
        Just("Delhi".to_string()),
        Just("Tamil Nadu".to_string()),
    ];
    (state.clone(), state)
}

proptest! {
    #[test]
    fn grand_total_is_sum_of_parts(items in arb_items(), (seller, buyer) in arb_state_pair()) {
        let tax = compute_tax(&items, &seller, &buyer, false);
        let split = &tax.split;
        prop_assert_eq!(
            tax.grand_total,
            tax.subtotal + split.cgst() + split.sgst() + split.igst()
        );
    }

    #[test]
    fn split_sides_are_mutually_exclusive(
        items in arb_items(),
        (seller, buyer) in arb_state_pair(),
    ) {
        let tax = compute_tax(&items, &seller, &buyer, false);
        let split = &tax.split;

        if split.is_interstate() {
            prop_assert_eq!(split.cgst(), Decimal::ZERO);
            prop_assert_eq!(split.sgst(), Decimal::ZERO);
        } else {
            prop_assert_eq!(split.igst(), Decimal::ZERO);
            // Intra-state halves are always equal.
            prop_assert_eq!(split.cgst(), split.sgst());
        }
    }

    #[test]
    fn jurisdiction_follows_state_equality(
        items in arb_items(),
        (seller, buyer) in arb_state_pair(),
    ) {
        let tax = compute_tax(&items, &seller, &buyer, false);
        prop_assert_eq!(tax.split.is_interstate(), seller != buyer);
    }

    #[test]
    fn split_never_changes_the_total(items in arb_items()) {
        let intra = compute_tax(&items, "Karnataka", "Karnataka", false);
        let inter = compute_tax(&items, "Karnataka", "Maharashtra", false);
        prop_assert_eq!(intra.grand_total, inter.grand_total);
        prop_assert_eq!(intra.subtotal, inter.subtotal);
        prop_assert_eq!(intra.split.total(), inter.split.total());
    }

    #[test]
    fn round_off_yields_whole_rupees(
        items in arb_items(),
        (seller, buyer) in arb_state_pair(),
    ) {
        let rounded = compute_tax(&items, &seller, &buyer, true);
        prop_assert!(rounded.grand_total.fract().is_zero());

        let exact = compute_tax(&items, &seller, &buyer, false);
        // Rounding moves the total by at most half a rupee.
        let diff = (rounded.grand_total - exact.grand_total).abs();
        prop_assert!(diff <= Decimal::new(5, 1));
    }

    #[test]
    fn subtotal_matches_line_amounts(items in arb_items()) {
        let tax = compute_tax(&items, "Karnataka", "Karnataka", false);
        let expected: Decimal = items.iter().map(|i| i.amount()).sum();
        prop_assert_eq!(tax.subtotal, expected);
    }

    #[test]
    fn next_number_exceeds_existing(existing_suffixes in prop::collection::vec(0u32..20_000, 0..20)) {
        let numbers: Vec<String> = existing_suffixes
            .iter()
            .map(|n| format!("INV-2024-{n:04}"))
            .collect();
        let next = next_invoice_number(numbers.iter().map(String::as_str), "INV-", 2024);

        let suffix: u64 = next.strip_prefix("INV-2024-").unwrap().parse().unwrap();
        let max = existing_suffixes.iter().copied().max().unwrap_or(0) as u64;
        prop_assert_eq!(suffix, max + 1);
    }

    #[test]
    fn allocation_is_monotonic(existing_suffixes in prop::collection::vec(0u32..20_000, 0..20)) {
        let mut numbers: Vec<String> = existing_suffixes
            .iter()
            .map(|n| format!("INV-2024-{n:04}"))
            .collect();

        let first = next_invoice_number(numbers.iter().map(String::as_str), "INV-", 2024);
        numbers.push(first.clone());
        let second = next_invoice_number(numbers.iter().map(String::as_str), "INV-", 2024);

        let parse = |n: &str| n.strip_prefix("INV-2024-").unwrap().parse::<u64>().unwrap();
        prop_assert_eq!(parse(&second), parse(&first) + 1);
    }
}
