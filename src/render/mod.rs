//! Document layout engine.
//!
//! Consumes a finalized [`Invoice`] and [`CompanyProfile`] and produces an
//! ordered list of positioned drawing instructions — text blocks, lines,
//! filled rectangles, an item table, and an optional logo image —
//! consumable by any page-description backend. All positions and sizes
//! are millimeters; font sizes are points; page dimensions match the
//! declared paper size exactly.

mod classic;
mod footer;
mod format;
mod modern;
mod page;
mod table;

pub use classic::ClassicTemplate;
pub use format::{format_date, format_rupees, format_rupees_grouped};
pub use modern::ModernTemplate;
pub use page::{FontPalette, PageMetrics, wrap_text};
pub use table::{ColumnHint, TableModel, TableOp, TableTheme, build_table};

use serde::{Deserialize, Serialize};

use crate::core::{CompanyProfile, Invoice, PaperSize, Template};

/// Logo images larger than this are not decoded.
const MAX_LOGO_BYTES: usize = 8 * 1024 * 1024;

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Parse a `#RRGGBB` hex string (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Rgb { r, g, b })
    }

    /// Parse a hex color, falling back to black on malformed input.
    pub fn from_hex_or_black(hex: &str) -> Rgb {
        Rgb::from_hex(hex).unwrap_or(Rgb::BLACK)
    }
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontStyle {
    Normal,
    Bold,
    Italic,
}

/// A positioned text run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextOp {
    pub x: f64,
    pub y: f64,
    pub text: String,
    /// Font size in points.
    pub size: f64,
    pub style: FontStyle,
    pub color: Rgb,
    pub align: Align,
}

impl TextOp {
    pub fn new(x: f64, y: f64, text: impl Into<String>, size: f64) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            size,
            style: FontStyle::Normal,
            color: Rgb::BLACK,
            align: Align::Left,
        }
    }

    pub fn bold(mut self) -> Self {
        self.style = FontStyle::Bold;
        self
    }

    pub fn italic(mut self) -> Self {
        self.style = FontStyle::Italic;
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

/// A straight line segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineOp {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    /// Stroke width in millimeters.
    pub width: f64,
    pub color: Rgb,
}

/// A filled rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectOp {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Rgb,
}

/// A raster image placement. `data` holds the original encoded bytes
/// (PNG/JPEG/WebP), already verified decodable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageOp {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub data: Vec<u8>,
}

/// One drawing instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawOp {
    Text(TextOp),
    Line(LineOp),
    Rect(RectOp),
    Table(TableOp),
    Image(ImageOp),
}

/// A laid-out document: page dimensions plus the ordered instruction list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub paper_size: PaperSize,
    pub width_mm: f64,
    pub height_mm: f64,
    pub ops: Vec<DrawOp>,
}

/// A document template: one layout pass over a finalized invoice.
///
/// Each variant computes the vertical flow Header → PartyDetails →
/// ItemsTable → TotalsBlock, with the footer anchored to the page bottom.
pub trait DocumentTemplate {
    fn layout(&self, invoice: &Invoice, profile: &CompanyProfile) -> Vec<DrawOp>;
}

/// Lay out an invoice with the selected template and paper size.
///
/// Selection order for both: the invoice-level override, then the
/// profile default. Never fails — a missing or undecodable logo and a
/// malformed accent color degrade gracefully.
pub fn render_invoice(invoice: &Invoice, profile: &CompanyProfile) -> RenderedDocument {
    let paper_size = invoice.effective_paper_size(profile);
    let (width_mm, height_mm) = paper_size.dimensions_mm();

    let ops = match invoice.effective_template(profile) {
        Template::Standard => ClassicTemplate::standard().layout(invoice, profile),
        Template::Compact => ClassicTemplate::compact().layout(invoice, profile),
        Template::Modern => ModernTemplate.layout(invoice, profile),
    };

    RenderedDocument {
        paper_size,
        width_mm,
        height_mm,
        ops,
    }
}

/// Place the profile logo, if the profile enables it and the bytes decode.
///
/// A corrupt or oversized logo is logged and skipped; it never fails the
/// render.
pub(crate) fn logo_op(
    profile: &CompanyProfile,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Option<ImageOp> {
    if !profile.show_logo_in_pdf {
        return None;
    }
    let data = profile.logo.as_ref()?;

    if data.len() > MAX_LOGO_BYTES {
        log::warn!(
            "logo image is {} bytes (limit {}), rendering without it",
            data.len(),
            MAX_LOGO_BYTES
        );
        return None;
    }

    match image::load_from_memory(data) {
        Ok(_) => Some(ImageOp {
            x,
            y,
            width,
            height,
            data: data.clone(),
        }),
        Err(e) => {
            log::warn!("failed to decode logo image, rendering without it: {e}");
            None
        }
    }
}
