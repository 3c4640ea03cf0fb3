/// Zero-pad width for the sequential part, e.g. "0001".
const SEQUENCE_WIDTH: usize = 4;

/// Derive the next invoice number for a calendar year.
///
/// Numbers have the format `{prefix}{year}-{sequence}`, e.g.
/// "INV-2024-0001". Among the existing numbers that start with the
/// literal `{prefix}{year}-`, the numeric suffixes are parsed (suffixes
/// that fail to parse are ignored, not errors) and the maximum plus one
/// is emitted, zero-padded to four digits.
///
/// The prefix match is a literal string test: changing the prefix
/// mid-year excludes invoices numbered under the old prefix, so the
/// sequence restarts at 0001 for the new prefix.
///
/// Not safe under concurrent allocation — two callers reading the same
/// existing set before either writes will derive the same number.
/// Serialize allocation at the write boundary, or re-check uniqueness at
/// commit time.
pub fn next_invoice_number<'a, I>(existing: I, prefix: &str, year: i32) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let year_prefix = format!("{prefix}{year}-");

    let max = existing
        .into_iter()
        .filter_map(|number| number.strip_prefix(&year_prefix))
        .filter_map(|suffix| suffix.parse::<u64>().ok())
        .max()
        .unwrap_or(0);

    format!("{year_prefix}{:0>width$}", max + 1, width = SEQUENCE_WIDTH)
}
