//! Item-table document model and geometry.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::page::{WRAP_LINE_STEP, wrap_text};
use super::{Align, Rgb};
use crate::core::{ColumnVisibility, LineItem};

/// Cell padding inside table cells, in millimeters.
const CELL_PADDING: f64 = 2.0;

/// Narrowest the flexible Item column may get, in millimeters.
const MIN_ITEM_WIDTH: f64 = 20.0;

/// Table visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableTheme {
    /// Ruled grid around every cell.
    Grid,
    /// Alternating row background stripes.
    Striped,
}

/// Layout hint for one column. `width: None` marks the flexible column
/// that absorbs the remaining page width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnHint {
    pub width: Option<f64>,
    pub align: Align,
}

/// Render-ready table content: header row, body rows, and column hints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableModel {
    pub head: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub hints: Vec<ColumnHint>,
}

/// Assemble the item table from line items and the visible column set.
///
/// Column order is fixed: `#`, `Item` (label suffixed with "& HSN/SAC"
/// when the HSN column is visible), `Qty`, `Rate`, then `Discount` and
/// `GST` only when visible, and `Amount` last. Rows keep input order.
/// The Amount cell is the post-discount, pre-tax line total; a zero GST
/// rate renders as `Exempt`; the Item cell gains an `HSN: <code>` second
/// line when HSN is visible.
pub fn build_table(items: &[LineItem], columns: &ColumnVisibility) -> TableModel {
    let mut head = vec!["#".to_string()];
    let mut hints = vec![ColumnHint {
        width: Some(10.0),
        align: Align::Left,
    }];

    let item_title = if columns.hsn { "Item & HSN/SAC" } else { "Item" };
    head.push(item_title.to_string());
    hints.push(ColumnHint {
        width: None,
        align: Align::Left,
    });

    head.push("Qty".to_string());
    hints.push(ColumnHint {
        width: Some(15.0),
        align: Align::Right,
    });

    head.push("Rate".to_string());
    hints.push(ColumnHint {
        width: Some(20.0),
        align: Align::Right,
    });

    if columns.discount {
        head.push("Discount".to_string());
        hints.push(ColumnHint {
            width: Some(20.0),
            align: Align::Right,
        });
    }

    if columns.gst {
        head.push("GST".to_string());
        hints.push(ColumnHint {
            width: Some(15.0),
            align: Align::Right,
        });
    }

    head.push("Amount".to_string());
    hints.push(ColumnHint {
        width: Some(25.0),
        align: Align::Right,
    });

    let rows = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let mut row = vec![(index + 1).to_string()];

            if columns.hsn {
                row.push(format!("{}\nHSN: {}", item.name, item.hsn));
            } else {
                row.push(item.name.clone());
            }

            row.push(item.quantity.normalize().to_string());
            row.push(money_cell(item.unit_price));

            if columns.discount {
                row.push(format!("{}%", item.discount_percent.normalize()));
            }

            if columns.gst {
                if item.gst_rate > Decimal::ZERO {
                    row.push(format!("{}%", item.gst_rate.normalize()));
                } else {
                    row.push("Exempt".to_string());
                }
            }

            row.push(money_cell(item.amount()));
            row
        })
        .collect();

    TableModel { head, rows, hints }
}

fn money_cell(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
    )
}

/// A positioned table with resolved column widths and row heights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableOp {
    pub x: f64,
    pub y: f64,
    pub column_widths: Vec<f64>,
    pub aligns: Vec<Align>,
    pub head: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub header_height: f64,
    pub row_heights: Vec<f64>,
    /// Cell font size in points.
    pub font_size: f64,
    pub theme: TableTheme,
    pub head_fill: Rgb,
    pub head_text: Rgb,
}

impl TableOp {
    /// Resolve a [`TableModel`] against a position and total width.
    /// The flexible column absorbs the width the fixed columns leave.
    pub fn from_model(
        model: TableModel,
        x: f64,
        y: f64,
        total_width: f64,
        font_size: f64,
        accent: Rgb,
        theme: TableTheme,
    ) -> Self {
        let fixed: f64 = model.hints.iter().filter_map(|h| h.width).sum();
        let flexible = (total_width - fixed).max(MIN_ITEM_WIDTH);

        let column_widths: Vec<f64> = model
            .hints
            .iter()
            .map(|h| h.width.unwrap_or(flexible))
            .collect();
        let aligns: Vec<Align> = model.hints.iter().map(|h| h.align).collect();

        let header_height = row_height(&model.head, &column_widths, font_size);
        let row_heights: Vec<f64> = model
            .rows
            .iter()
            .map(|row| row_height(row, &column_widths, font_size))
            .collect();

        Self {
            x,
            y,
            column_widths,
            aligns,
            head: model.head,
            rows: model.rows,
            header_height,
            row_heights,
            font_size,
            theme,
            head_fill: accent,
            head_text: Rgb::WHITE,
        }
    }

    /// Total table height.
    pub fn height(&self) -> f64 {
        self.header_height + self.row_heights.iter().sum::<f64>()
    }

    /// Y just below the last row — where the next region starts flowing.
    pub fn end_y(&self) -> f64 {
        self.y + self.height()
    }
}

/// Height of one row: the tallest cell's wrapped line count.
fn row_height(cells: &[String], widths: &[f64], font_size: f64) -> f64 {
    let mut max_lines = 1usize;
    for (cell, width) in cells.iter().zip(widths) {
        let lines = wrap_text(cell, (width - 2.0 * CELL_PADDING).max(1.0), font_size).len();
        max_lines = max_lines.max(lines);
    }
    max_lines as f64 * WRAP_LINE_STEP + 2.0 * CELL_PADDING
}
