use bijak::core::*;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn main() {
    let profile = CompanyProfile {
        name: "Deshmukh Components".into(),
        address: "12 Industrial Estate, Bangalore, Karnataka, 560058".into(),
        gstin: "29AABCD1234E1Z7".into(),
        phone: "9876501234".into(),
        state: "Karnataka".into(),
        ..CompanyProfile::default()
    };

    // Allocate the next number from the invoices already on file.
    let existing = ["INV-2024-0001", "INV-2024-0002"];
    let number = next_invoice_number(existing, &profile.invoice_prefix, 2024);

    let invoice = InvoiceBuilder::new(number, NaiveDate::from_ymd_opt(2024, 7, 20).unwrap())
        .customer(
            CustomerBuilder::new("PQR Solutions", "Maharashtra")
                .billing_address("456 IT Hub, Pune, Maharashtra, 411057")
                .gstin("27FGHIJ5678K2Z9")
                .phone("8765432109")
                .build(),
        )
        .add_item(
            LineItemBuilder::new("Laptop Pro 15\"", "8471", dec!(1), dec!(85000))
                .discount_percent(dec!(5))
                .gst_rate(dec!(18))
                .build(),
        )
        .add_item(
            LineItemBuilder::new("Wireless Mouse", "8471", dec!(2), dec!(1200))
                .gst_rate(dec!(18))
                .build(),
        )
        .notes("Payment is due within 15 days.")
        .build(&profile)
        .expect("valid invoice");

    println!("Invoice {}", invoice.number);
    println!("  Subtotal:    {}", invoice.tax.subtotal);
    println!("  CGST:        {}", invoice.tax.split.cgst());
    println!("  SGST:        {}", invoice.tax.split.sgst());
    println!("  IGST:        {}", invoice.tax.split.igst());
    println!("  Grand total: {}", invoice.tax.grand_total);
}
