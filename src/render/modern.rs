//! Modern template.
//!
//! Full-width accent band with the title and logo, label/value pairs for
//! company and invoice metadata, striped item table, and a totals block
//! with a left label column paired to a right value column.

use rust_decimal::Decimal;

use super::footer::compose_footer;
use super::format::{format_date, format_rupees, format_rupees_grouped};
use super::page::{FontPalette, PageMetrics, WRAP_LINE_STEP, wrap_text};
use super::table::{TableOp, TableTheme, build_table};
use super::{Align, DocumentTemplate, DrawOp, LineOp, RectOp, Rgb, TextOp, logo_op};
use crate::core::{CompanyProfile, Invoice};

/// Height of the accent title band, in millimeters.
const BAND_HEIGHT: f64 = 30.0;

#[derive(Debug, Clone, Copy)]
pub struct ModernTemplate;

impl DocumentTemplate for ModernTemplate {
    fn layout(&self, invoice: &Invoice, profile: &CompanyProfile) -> Vec<DrawOp> {
        let page = PageMetrics::new(invoice.effective_paper_size(profile), profile.pdf_margin);
        let fonts = FontPalette::for_preset(profile.pdf_font_size);
        let accent = Rgb::from_hex_or_black(&profile.accent_color);
        let columns = invoice.effective_columns(profile);

        let mut ops = Vec::new();

        // --- Header band ---
        ops.push(DrawOp::Rect(RectOp {
            x: 0.0,
            y: 0.0,
            width: page.width,
            height: BAND_HEIGHT,
            fill: accent,
        }));
        ops.push(DrawOp::Text(
            TextOp::new(page.margin, 20.0, "INVOICE", fonts.title + 4.0)
                .bold()
                .color(Rgb::WHITE),
        ));

        if let Some(logo) = logo_op(profile, page.right_edge() - 30.0, 5.0, 25.0, 25.0) {
            ops.push(DrawOp::Image(logo));
        }

        // --- Company & invoice details ---
        let mut y = 40.0;
        ops.push(DrawOp::Text(
            TextOp::new(page.right_edge(), y, profile.name.clone(), fonts.body)
                .bold()
                .align(Align::Right),
        ));
        let company_block = format!("{}\nGSTIN: {}", profile.address, profile.gstin);
        for (i, line) in wrap_text(&company_block, 60.0, fonts.body).iter().enumerate() {
            ops.push(DrawOp::Text(
                TextOp::new(
                    page.right_edge(),
                    y + 5.0 + i as f64 * WRAP_LINE_STEP,
                    line.clone(),
                    fonts.body,
                )
                .align(Align::Right),
            ));
        }

        let meta = [
            ("Invoice #:", invoice.number.clone()),
            ("Date:", format_date(invoice.date)),
        ];
        for (i, (label, value)) in meta.into_iter().enumerate() {
            let line_y = y + 10.0 + i as f64 * 5.0;
            ops.push(DrawOp::Text(
                TextOp::new(page.margin, line_y, label, fonts.body).bold(),
            ));
            ops.push(DrawOp::Text(TextOp::new(
                page.margin + 25.0,
                line_y,
                value,
                fonts.body,
            )));
        }

        y += 25.0;
        ops.push(DrawOp::Line(LineOp {
            x1: page.margin,
            y1: y,
            x2: page.right_edge(),
            y2: y,
            width: 0.2,
            color: Rgb {
                r: 200,
                g: 200,
                b: 200,
            },
        }));
        y += 10.0;

        // --- Customer details ---
        ops.push(DrawOp::Text(
            TextOp::new(page.margin, y, "BILLED TO", fonts.body).bold(),
        ));
        ops.push(DrawOp::Text(TextOp::new(
            page.margin,
            y + 5.0,
            invoice.customer.name.clone(),
            fonts.body,
        )));
        let customer_block = format!(
            "{}\nGSTIN: {}",
            invoice.customer.billing_address, invoice.customer.gstin
        );
        for (i, line) in wrap_text(&customer_block, 80.0, fonts.body).iter().enumerate() {
            ops.push(DrawOp::Text(TextOp::new(
                page.margin,
                y + 10.0 + i as f64 * WRAP_LINE_STEP,
                line.clone(),
                fonts.body,
            )));
        }

        // --- Items table ---
        y += 30.0;
        let table = TableOp::from_model(
            build_table(&invoice.items, &columns),
            page.margin,
            y,
            page.content_width(),
            fonts.table,
            accent,
            TableTheme::Striped,
        );
        let table_end = table.end_y();
        ops.push(DrawOp::Table(table));

        // --- Totals ---
        let label_x = page.right_edge() - 50.0;
        let value_x = page.right_edge();
        let line_height = 5.0;
        let mut total_y = table_end + 10.0;

        let add_total_line =
            |ops: &mut Vec<DrawOp>, total_y: &mut f64, label: &str, value: String, bold: bool, size: f64| {
                let label_op = TextOp::new(label_x, *total_y, label, size);
                let value_op = TextOp::new(value_x, *total_y, value, size).align(Align::Right);
                if bold {
                    ops.push(DrawOp::Text(label_op.bold()));
                    ops.push(DrawOp::Text(value_op.bold()));
                } else {
                    ops.push(DrawOp::Text(label_op));
                    ops.push(DrawOp::Text(value_op));
                }
                *total_y += line_height;
            };

        add_total_line(
            &mut ops,
            &mut total_y,
            "Subtotal",
            format_rupees(invoice.tax.subtotal),
            false,
            fonts.body,
        );
        let split = &invoice.tax.split;
        for (label, amount) in [
            ("CGST", split.cgst()),
            ("SGST", split.sgst()),
            ("IGST", split.igst()),
        ] {
            if amount > Decimal::ZERO {
                add_total_line(
                    &mut ops,
                    &mut total_y,
                    label,
                    format_rupees(amount),
                    false,
                    fonts.body,
                );
            }
        }

        total_y += 2.0;
        ops.push(DrawOp::Line(LineOp {
            x1: label_x - 5.0,
            y1: total_y,
            x2: value_x,
            y2: total_y,
            width: 0.3,
            color: accent,
        }));
        total_y += 5.0;

        add_total_line(
            &mut ops,
            &mut total_y,
            "GRAND TOTAL",
            format_rupees_grouped(invoice.tax.grand_total),
            true,
            fonts.body + 2.0,
        );

        // --- Footer ---
        compose_footer(invoice, profile, &page, &fonts, accent, &mut ops);

        ops
    }
}
