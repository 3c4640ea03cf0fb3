#![cfg(feature = "render")]

use bijak::core::*;
use bijak::render::*;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn profile() -> CompanyProfile {
    CompanyProfile {
        name: "Deshmukh Components".into(),
        state: "Karnataka".into(),
        ..CompanyProfile::default()
    }
}

fn customer(state: &str) -> Customer {
    CustomerBuilder::new("ABC Electronics", state)
        .billing_address("123 Tech Park, Bangalore, Karnataka, 560001")
        .gstin("29ABCDE1234F1Z5")
        .build()
}

fn invoice(template: Option<Template>, buyer_state: &str) -> Invoice {
    let mut builder = InvoiceBuilder::new("INV-2024-0001", date(2024, 7, 20))
        .customer(customer(buyer_state))
        .notes("Payment is due within 15 days.")
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
        );
    if let Some(t) = template {
        builder = builder.template(t);
    }
    builder.build(&profile()).unwrap()
}

fn texts(doc: &RenderedDocument) -> Vec<&TextOp> {
    doc.ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text(t) => Some(t),
            _ => None,
        })
        .collect()
}

fn tables(doc: &RenderedDocument) -> Vec<&TableOp> {
    doc.ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Table(t) => Some(t),
            _ => None,
        })
        .collect()
}

fn has_text(doc: &RenderedDocument, needle: &str) -> bool {
    texts(doc).iter().any(|t| t.text.contains(needle))
}

// --- Page setup ---

#[test]
fn page_dimensions_match_paper_size() {
    let doc = render_invoice(&invoice(None, "Karnataka"), &profile());
    assert_eq!(doc.paper_size, PaperSize::A4);
    assert_eq!((doc.width_mm, doc.height_mm), (210.0, 297.0));

    let mut inv = invoice(None, "Karnataka");
    inv.paper_size = Some(PaperSize::A5);
    let doc = render_invoice(&inv, &profile());
    assert_eq!((doc.width_mm, doc.height_mm), (148.0, 210.0));

    inv.paper_size = Some(PaperSize::Letter);
    let doc = render_invoice(&inv, &profile());
    assert_eq!((doc.width_mm, doc.height_mm), (215.9, 279.4));
}

#[test]
fn template_override_beats_profile_default() {
    // Profile default is Standard; the invoice asks for Modern.
    let doc = render_invoice(&invoice(Some(Template::Modern), "Karnataka"), &profile());
    assert!(has_text(&doc, "INVOICE"));
    assert!(!has_text(&doc, "TAX INVOICE"));
    // Modern opens with the full-width accent band.
    assert!(matches!(doc.ops.first(), Some(DrawOp::Rect(_))));
}

// --- Classic template ---

#[test]
fn classic_layout_regions_present() {
    let doc = render_invoice(&invoice(None, "Karnataka"), &profile());

    assert!(has_text(&doc, "TAX INVOICE"));
    assert!(has_text(&doc, "Bill To:"));
    assert!(has_text(&doc, "Invoice No:"));
    assert!(has_text(&doc, "20/07/2024"));
    assert!(has_text(&doc, "Subtotal"));
    assert!(has_text(&doc, "Grand Total"));

    let tables = tables(&doc);
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].rows.len(), 2);
    assert_eq!(tables[0].theme, TableTheme::Grid);
}

#[test]
fn compact_is_smaller_standard() {
    let standard = render_invoice(&invoice(Some(Template::Standard), "Karnataka"), &profile());
    let compact = render_invoice(&invoice(Some(Template::Compact), "Karnataka"), &profile());

    let font_of = |doc: &RenderedDocument, needle: &str| -> f64 {
        texts(doc)
            .iter()
            .find(|t| t.text == needle)
            .expect(needle)
            .size
    };

    assert_eq!(font_of(&standard, "Bill To:"), 10.0);
    assert_eq!(font_of(&compact, "Bill To:"), 9.0);
    assert_eq!(tables(&standard)[0].font_size, 9.0);
    assert_eq!(tables(&compact)[0].font_size, 8.0);
}

#[test]
fn totals_flow_below_table() {
    let doc = render_invoice(&invoice(None, "Karnataka"), &profile());
    let table_end = tables(&doc)[0].end_y();
    let subtotal = texts(&doc)
        .into_iter()
        .find(|t| t.text == "Subtotal")
        .unwrap()
        .y;
    assert!(subtotal > table_end);
}

// --- Jurisdiction-dependent totals lines ---

#[test]
fn intra_state_shows_cgst_sgst_only() {
    let doc = render_invoice(&invoice(None, "Karnataka"), &profile());
    assert!(has_text(&doc, "CGST"));
    assert!(has_text(&doc, "SGST"));
    assert!(!has_text(&doc, "IGST"));
}

#[test]
fn inter_state_shows_igst_only() {
    let doc = render_invoice(&invoice(None, "Maharashtra"), &profile());
    assert!(has_text(&doc, "IGST"));
    assert!(!has_text(&doc, "CGST"));
    assert!(!has_text(&doc, "SGST"));
}

#[test]
fn fully_exempt_invoice_shows_no_tax_lines() {
    let inv = InvoiceBuilder::new("INV-2024-0002", date(2024, 7, 20))
        .customer(customer("Karnataka"))
        .add_item(
            LineItemBuilder::new("Khadi Cloth", "5208", dec!(10), dec!(150))
                .gst_rate(dec!(0))
                .build(),
        )
        .build(&profile())
        .unwrap();
    let doc = render_invoice(&inv, &profile());

    assert!(!has_text(&doc, "CGST"));
    assert!(!has_text(&doc, "SGST"));
    assert!(!has_text(&doc, "IGST"));
    // The grand total still renders, with grouped rupee formatting.
    assert!(has_text(&doc, "₹1,500.00"));
}

#[test]
fn grand_total_uses_indian_grouping() {
    let doc = render_invoice(&invoice(None, "Karnataka"), &profile());
    assert!(has_text(&doc, "₹98,117.00"));
    // Component lines keep the plain two-decimal format.
    assert!(has_text(&doc, "₹7483.50"));
}

// --- Logo handling ---

#[test]
fn logo_skipped_when_disabled() {
    let mut p = profile();
    p.logo = Some(vec![1, 2, 3]);
    p.show_logo_in_pdf = false;
    let doc = render_invoice(&invoice(None, "Karnataka"), &p);
    assert!(!doc.ops.iter().any(|op| matches!(op, DrawOp::Image(_))));
}

#[test]
fn corrupt_logo_degrades_gracefully() {
    let mut p = profile();
    p.logo = Some(vec![0xde, 0xad, 0xbe, 0xef]);
    p.show_logo_in_pdf = true;
    let doc = render_invoice(&invoice(None, "Karnataka"), &p);
    // Render completes, just without the image.
    assert!(!doc.ops.iter().any(|op| matches!(op, DrawOp::Image(_))));
    assert!(has_text(&doc, "Grand Total"));
}

#[test]
fn valid_logo_is_placed() {
    // Minimal valid 1x1 PNG.
    let png: &[u8] = &[
        0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48,
        0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00,
        0x00, 0x1f, 0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0b, 0x49, 0x44, 0x41, 0x54, 0x78,
        0x9c, 0x63, 0x60, 0x00, 0x02, 0x00, 0x00, 0x05, 0x00, 0x01, 0x7a, 0x5e, 0xab, 0x3f,
        0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
    ];
    let mut p = profile();
    p.logo = Some(png.to_vec());
    let doc = render_invoice(&invoice(None, "Karnataka"), &p);

    let image = doc.ops.iter().find_map(|op| match op {
        DrawOp::Image(i) => Some(i),
        _ => None,
    });
    let image = image.expect("logo image op");
    assert_eq!((image.width, image.height), (25.0, 25.0));
    assert_eq!(image.data, png);
}

// --- Footer stacking ---

#[test]
fn footer_rule_sits_above_all_footer_content() {
    let mut p = profile();
    p.custom_footer = "Thank you for your business!".into();
    p.show_custom_fields_in_pdf = true;
    p.custom_fields = vec![
        CustomField {
            id: "1".into(),
            label: "Bank".into(),
            value: "Canara Bank, A/C 1234567890".into(),
        },
        CustomField {
            id: "2".into(),
            label: "IFSC".into(),
            value: "CNRB0001234".into(),
        },
    ];
    let doc = render_invoice(&invoice(None, "Karnataka"), &p);

    // The footer separator is the last line op emitted.
    let rule = doc
        .ops
        .iter()
        .rev()
        .find_map(|op| match op {
            DrawOp::Line(l) => Some(l),
            _ => None,
        })
        .unwrap();
    assert_eq!(rule.y1, rule.y2);

    let footer_texts: Vec<&TextOp> = texts(&doc)
        .into_iter()
        .filter(|t| {
            t.text.contains("Thank you")
                || t.text.starts_with("Notes:")
                || t.text.starts_with("Bank:")
                || t.text.starts_with("IFSC:")
        })
        .collect();
    assert_eq!(footer_texts.len(), 4);
    for text in &footer_texts {
        assert!(
            rule.y1 < text.y,
            "rule at {} should be above footer text at {}",
            rule.y1,
            text.y
        );
    }
}

#[test]
fn custom_fields_render_in_reverse_order() {
    let mut p = profile();
    p.custom_fields = vec![
        CustomField {
            id: "1".into(),
            label: "First".into(),
            value: "one".into(),
        },
        CustomField {
            id: "2".into(),
            label: "Second".into(),
            value: "two".into(),
        },
    ];
    let doc = render_invoice(&invoice(None, "Karnataka"), &p);

    let first = texts(&doc)
        .into_iter()
        .find(|t| t.text.starts_with("First:"))
        .unwrap();
    let second = texts(&doc)
        .into_iter()
        .find(|t| t.text.starts_with("Second:"))
        .unwrap();
    // First-defined field ends up closest to the separating rule, above
    // the last-defined one.
    assert!(first.y < second.y);
}

#[test]
fn custom_fields_hidden_when_disabled() {
    let mut p = profile();
    p.show_custom_fields_in_pdf = false;
    p.custom_fields = vec![CustomField {
        id: "1".into(),
        label: "Bank".into(),
        value: "Canara Bank".into(),
    }];
    let doc = render_invoice(&invoice(None, "Karnataka"), &p);
    assert!(!has_text(&doc, "Bank:"));
}

// --- Modern template ---

#[test]
fn modern_layout_regions_present() {
    let doc = render_invoice(&invoice(Some(Template::Modern), "Karnataka"), &profile());

    assert!(has_text(&doc, "INVOICE"));
    assert!(has_text(&doc, "BILLED TO"));
    assert!(has_text(&doc, "Invoice #:"));
    assert!(has_text(&doc, "GRAND TOTAL"));
    assert_eq!(tables(&doc)[0].theme, TableTheme::Striped);

    // Band title is white on the accent band.
    let title = texts(&doc)
        .into_iter()
        .find(|t| t.text == "INVOICE")
        .unwrap();
    assert_eq!(title.color, Rgb::WHITE);
}

#[test]
fn malformed_accent_color_falls_back_to_black() {
    let mut p = profile();
    p.accent_color = "definitely-not-hex".into();
    let doc = render_invoice(&invoice(Some(Template::Modern), "Karnataka"), &p);

    let band = doc.ops.iter().find_map(|op| match op {
        DrawOp::Rect(r) => Some(r),
        _ => None,
    });
    assert_eq!(band.unwrap().fill, Rgb::BLACK);
}

// --- Column visibility flows through to the rendered table ---

#[test]
fn hidden_columns_absent_from_rendered_table() {
    let mut inv = invoice(None, "Karnataka");
    inv.show_columns = Some(ColumnVisibility {
        hsn: false,
        discount: true,
        gst: false,
    });
    let doc = render_invoice(&inv, &profile());

    let table = tables(&doc)[0];
    assert_eq!(
        table.head,
        vec!["#", "Item", "Qty", "Rate", "Discount", "Amount"]
    );
    assert_eq!(table.head.len(), table.column_widths.len());
}
