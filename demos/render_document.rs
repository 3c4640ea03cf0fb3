use bijak::core::*;
use bijak::render::{DrawOp, render_invoice};
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn main() {
    let profile = CompanyProfile {
        name: "Deshmukh Components".into(),
        address: "12 Industrial Estate, Bangalore, Karnataka, 560058".into(),
        gstin: "29AABCD1234E1Z7".into(),
        state: "Karnataka".into(),
        custom_footer: "Thank you for your business!".into(),
        custom_fields: vec![
            CustomField {
                id: "bank".into(),
                label: "Bank".into(),
                value: "Canara Bank, A/C 1234567890".into(),
            },
            CustomField {
                id: "ifsc".into(),
                label: "IFSC".into(),
                value: "CNRB0001234".into(),
            },
        ],
        ..CompanyProfile::default()
    };

    let invoice = InvoiceBuilder::new(
        "INV-2024-0042",
        NaiveDate::from_ymd_opt(2024, 7, 20).unwrap(),
    )
    .customer(
        CustomerBuilder::new("ABC Electronics", "Karnataka")
            .billing_address("123 Tech Park, Bangalore, Karnataka, 560001")
            .gstin("29ABCDE1234F1Z5")
            .build(),
    )
    .add_item(
        LineItemBuilder::new("Software Consulting (per hour)", "9983", dec!(10), dec!(3000))
            .gst_rate(dec!(18))
            .build(),
    )
    .template(Template::Modern)
    .notes("Payment is due within 15 days.")
    .build(&profile)
    .expect("valid invoice");

    let doc = render_invoice(&invoice, &profile);

    println!(
        "{} page: {} x {} mm, {} drawing ops",
        invoice.number,
        doc.width_mm,
        doc.height_mm,
        doc.ops.len()
    );
    for op in &doc.ops {
        match op {
            DrawOp::Text(t) => println!("  text  ({:6.1},{:6.1}) {:?}", t.x, t.y, t.text),
            DrawOp::Line(l) => println!("  line  ({:6.1},{:6.1})-({:6.1},{:6.1})", l.x1, l.y1, l.x2, l.y2),
            DrawOp::Rect(r) => println!("  rect  ({:6.1},{:6.1}) {}x{}", r.x, r.y, r.width, r.height),
            DrawOp::Table(t) => println!("  table ({:6.1},{:6.1}) {} rows", t.x, t.y, t.rows.len()),
            DrawOp::Image(i) => println!("  image ({:6.1},{:6.1}) {} bytes", i.x, i.y, i.data.len()),
        }
    }
}
