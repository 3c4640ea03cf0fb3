//! Bottom-anchored footer composition.
//!
//! The footer stacks bottom-up from a fixed page-bottom margin so its
//! position does not depend on how far the item table flowed: custom
//! footer text first (lowest), then invoice notes, then custom fields in
//! reverse definition order, then one separating rule above everything
//! placed. The reverse field order is a caller-visible property of this
//! stacking discipline, not an accident.

use super::page::{FontPalette, PageMetrics, WRAP_LINE_STEP, wrap_text};
use super::{Align, DrawOp, LineOp, Rgb, TextOp};
use crate::core::{CompanyProfile, Invoice};

/// Distance of the footer anchor from the page bottom, in millimeters.
const PAGE_BOTTOM_MARGIN: f64 = 10.0;

/// Extra spacing around the custom-field block, in millimeters.
const FIELD_BLOCK_GAP: f64 = 2.0;

/// Append the footer instructions for `invoice` to `ops`.
pub(crate) fn compose_footer(
    invoice: &Invoice,
    profile: &CompanyProfile,
    page: &PageMetrics,
    fonts: &FontPalette,
    accent: Rgb,
    ops: &mut Vec<DrawOp>,
) {
    let mut y = page.height - PAGE_BOTTOM_MARGIN;

    // Custom footer text, centered at the very bottom.
    if !profile.custom_footer.is_empty() {
        let lines = wrap_text(&profile.custom_footer, page.content_width(), fonts.table);
        for (i, line) in lines.iter().enumerate() {
            ops.push(DrawOp::Text(
                TextOp::new(
                    page.center_x(),
                    y + i as f64 * WRAP_LINE_STEP,
                    line.clone(),
                    fonts.table,
                )
                .italic()
                .align(Align::Center),
            ));
        }
        y -= lines.len() as f64 * WRAP_LINE_STEP;
    }

    // Invoice notes, left-aligned within half the page width.
    if !invoice.notes.is_empty() {
        let text = format!("Notes: {}", invoice.notes);
        let lines = wrap_text(&text, page.width / 2.0, fonts.table);
        for (i, line) in lines.iter().enumerate() {
            ops.push(DrawOp::Text(TextOp::new(
                page.margin,
                y + i as f64 * WRAP_LINE_STEP,
                line.clone(),
                fonts.table,
            )));
        }
        y -= lines.len() as f64 * WRAP_LINE_STEP;
    }

    // Custom fields, bottom-up, so the last-defined field sits closest
    // to the notes and the first-defined closest to the rule.
    if profile.show_custom_fields_in_pdf && !profile.custom_fields.is_empty() {
        y -= FIELD_BLOCK_GAP;
        for field in profile.custom_fields.iter().rev() {
            let text = format!("{}: {}", field.label, field.value);
            let lines = wrap_text(&text, page.content_width(), fonts.table);
            y -= lines.len() as f64 * WRAP_LINE_STEP;
            for (i, line) in lines.iter().enumerate() {
                ops.push(DrawOp::Text(TextOp::new(
                    page.margin,
                    y + i as f64 * WRAP_LINE_STEP,
                    line.clone(),
                    fonts.table,
                )));
            }
        }
        y -= FIELD_BLOCK_GAP;
    }

    // Separating rule above all footer content.
    ops.push(DrawOp::Line(LineOp {
        x1: page.margin,
        y1: y,
        x2: page.right_edge(),
        y2: y,
        width: 0.5,
        color: accent,
    }));
}
