//! Standard/Compact template.
//!
//! Centered bold title, right-aligned seller block, left "Bill To" block
//! with right-aligned invoice metadata, accent rule lines, grid item
//! table, right-aligned totals stack. Compact is the same layout with
//! reduced font sizes and tighter spacing, not a separate algorithm.

use rust_decimal::Decimal;

use super::footer::compose_footer;
use super::format::{format_date, format_rupees, format_rupees_grouped};
use super::page::{FontPalette, PageMetrics, WRAP_LINE_STEP, wrap_text};
use super::table::{TableOp, TableTheme, build_table};
use super::{Align, DocumentTemplate, DrawOp, LineOp, Rgb, TextOp, logo_op};
use crate::core::{CompanyProfile, Invoice};

/// The Standard template, optionally in its Compact parametrization.
#[derive(Debug, Clone, Copy)]
pub struct ClassicTemplate {
    compact: bool,
}

impl ClassicTemplate {
    pub fn standard() -> Self {
        Self { compact: false }
    }

    pub fn compact() -> Self {
        Self { compact: true }
    }
}

impl DocumentTemplate for ClassicTemplate {
    fn layout(&self, invoice: &Invoice, profile: &CompanyProfile) -> Vec<DrawOp> {
        let page = PageMetrics::new(invoice.effective_paper_size(profile), profile.pdf_margin);
        let mut fonts = FontPalette::for_preset(profile.pdf_font_size);
        if self.compact {
            fonts = fonts.compact();
        }
        let accent = Rgb::from_hex_or_black(&profile.accent_color);
        let columns = invoice.effective_columns(profile);

        let mut ops = Vec::new();

        // --- Header ---
        if let Some(logo) = logo_op(profile, page.margin, 10.0, 25.0, 25.0) {
            ops.push(DrawOp::Image(logo));
        }

        ops.push(DrawOp::Text(
            TextOp::new(page.center_x(), 20.0, "TAX INVOICE", fonts.title)
                .bold()
                .color(accent)
                .align(Align::Center),
        ));

        ops.push(DrawOp::Text(
            TextOp::new(page.right_edge(), 15.0, profile.name.clone(), fonts.body)
                .align(Align::Right),
        ));
        for (i, line) in wrap_text(&profile.address, 60.0, fonts.body).iter().enumerate() {
            ops.push(DrawOp::Text(
                TextOp::new(
                    page.right_edge(),
                    20.0 + i as f64 * WRAP_LINE_STEP,
                    line.clone(),
                    fonts.body,
                )
                .align(Align::Right),
            ));
        }
        ops.push(DrawOp::Text(
            TextOp::new(
                page.right_edge(),
                32.0,
                format!("GSTIN: {}", profile.gstin),
                fonts.body,
            )
            .align(Align::Right),
        ));
        ops.push(DrawOp::Text(
            TextOp::new(
                page.right_edge(),
                37.0,
                format!("Phone: {}", profile.phone),
                fonts.body,
            )
            .align(Align::Right),
        ));

        ops.push(DrawOp::Line(LineOp {
            x1: page.margin,
            y1: 45.0,
            x2: page.right_edge(),
            y2: 45.0,
            width: 0.5,
            color: accent,
        }));

        // --- Invoice & customer details ---
        let y = 55.0;
        ops.push(DrawOp::Text(
            TextOp::new(page.margin, y, "Bill To:", fonts.body).bold(),
        ));
        ops.push(DrawOp::Text(TextOp::new(
            page.margin,
            y + 5.0,
            invoice.customer.name.clone(),
            fonts.body,
        )));
        for (i, line) in wrap_text(&invoice.customer.billing_address, 80.0, fonts.body)
            .iter()
            .enumerate()
        {
            ops.push(DrawOp::Text(TextOp::new(
                page.margin,
                y + 10.0 + i as f64 * WRAP_LINE_STEP,
                line.clone(),
                fonts.body,
            )));
        }
        ops.push(DrawOp::Text(TextOp::new(
            page.margin,
            y + 22.0,
            format!("GSTIN: {}", invoice.customer.gstin),
            fonts.body,
        )));

        let details_x = page.right_edge() - 50.0;
        let meta = [
            ("Invoice No:", invoice.number.clone()),
            ("Date:", format_date(invoice.date)),
            ("Due Date:", format_date(invoice.due_date)),
        ];
        for (i, (label, value)) in meta.into_iter().enumerate() {
            let line_y = y + i as f64 * 5.0;
            ops.push(DrawOp::Text(
                TextOp::new(details_x, line_y, label, fonts.body).bold(),
            ));
            ops.push(DrawOp::Text(
                TextOp::new(page.right_edge(), line_y, value, fonts.body).align(Align::Right),
            ));
        }

        // --- Items table ---
        let table = TableOp::from_model(
            build_table(&invoice.items, &columns),
            page.margin,
            y + 30.0,
            page.content_width(),
            fonts.table,
            accent,
            TableTheme::Grid,
        );
        let table_end = table.end_y();
        ops.push(DrawOp::Table(table));

        // --- Totals ---
        let line_height = if self.compact { 4.0 } else { 5.0 };
        let total_y_start = table_end + if self.compact { 6.0 } else { 10.0 };

        let add_total_line =
            |ops: &mut Vec<DrawOp>, label: &str, value: String, y: f64, bold: bool, size: f64, color: Rgb| {
                let label_op = TextOp::new(page.right_edge() - 50.0, y, label, size).color(color);
                ops.push(DrawOp::Text(if bold { label_op.bold() } else { label_op }));
                ops.push(DrawOp::Text(
                    TextOp::new(page.right_edge(), y, value, size)
                        .bold()
                        .color(color)
                        .align(Align::Right),
                ));
            };

        add_total_line(
            &mut ops,
            "Subtotal",
            format_rupees(invoice.tax.subtotal),
            total_y_start,
            false,
            fonts.body,
            Rgb::BLACK,
        );

        let mut current_y = total_y_start;
        let split = &invoice.tax.split;
        for (label, amount) in [
            ("CGST", split.cgst()),
            ("SGST", split.sgst()),
            ("IGST", split.igst()),
        ] {
            if amount > Decimal::ZERO {
                current_y += line_height;
                add_total_line(
                    &mut ops,
                    label,
                    format_rupees(amount),
                    current_y,
                    false,
                    fonts.body,
                    Rgb::BLACK,
                );
            }
        }

        current_y += if self.compact { 5.0 } else { 7.0 };
        ops.push(DrawOp::Line(LineOp {
            x1: page.right_edge() - 50.0,
            y1: current_y - 2.0,
            x2: page.right_edge(),
            y2: current_y - 2.0,
            width: 0.2,
            color: Rgb::BLACK,
        }));

        add_total_line(
            &mut ops,
            "Grand Total",
            format_rupees_grouped(invoice.tax.grand_total),
            current_y + 2.0,
            true,
            fonts.body + 2.0,
            accent,
        );

        // --- Footer ---
        compose_footer(invoice, profile, &page, &fonts, accent, &mut ops);

        ops
    }
}
