//! Rupee and date formatting for rendered documents.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Format an amount as `₹` plus two decimal places, e.g. "₹7483.50".
pub fn format_rupees(amount: Decimal) -> String {
    format!("₹{:.2}", round_paise(amount))
}

/// Format an amount with Indian digit grouping, e.g. "₹1,23,456.78".
/// Used for the grand total; the last three digits group together,
/// then pairs.
pub fn format_rupees_grouped(amount: Decimal) -> String {
    let rounded = round_paise(amount);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("₹{sign}{}.{frac_part}", group_indian(int_part))
}

/// Format a date as DD/MM/YYYY.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn round_paise(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
