//! Page metrics, font presets, and text wrapping.

use crate::core::{FontSizePreset, MarginPreset, PaperSize};

/// One typographic point in millimeters.
pub const PT_TO_MM: f64 = 0.352778;

/// Average Helvetica glyph width as a fraction of the font size.
/// Wrapping uses this estimate; backends re-measure when rasterizing.
const AVG_GLYPH_EM: f64 = 0.5;

/// Vertical advance per wrapped text line, in millimeters.
pub(crate) const WRAP_LINE_STEP: f64 = 4.0;

/// Font sizes (points) for the document regions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontPalette {
    pub header: f64,
    pub title: f64,
    pub body: f64,
    pub table: f64,
}

impl FontPalette {
    pub fn for_preset(preset: FontSizePreset) -> Self {
        match preset {
            FontSizePreset::Small => Self {
                header: 16.0,
                title: 18.0,
                body: 8.0,
                table: 7.0,
            },
            FontSizePreset::Medium => Self {
                header: 18.0,
                title: 20.0,
                body: 10.0,
                table: 9.0,
            },
            FontSizePreset::Large => Self {
                header: 20.0,
                title: 22.0,
                body: 12.0,
                table: 11.0,
            },
        }
    }

    /// Compact template scale: header −2, body −1, table −1.
    pub fn compact(mut self) -> Self {
        self.header -= 2.0;
        self.body -= 1.0;
        self.table -= 1.0;
        self
    }
}

/// Page dimensions and margin, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMetrics {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl PageMetrics {
    pub fn new(paper: PaperSize, margin: MarginPreset) -> Self {
        let (width, height) = paper.dimensions_mm();
        Self {
            width,
            height,
            margin: margin.width_mm(),
        }
    }

    /// Width between the left and right margins.
    pub fn content_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    /// X of the right margin edge.
    pub fn right_edge(&self) -> f64 {
        self.width - self.margin
    }

    /// Horizontal page center.
    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }
}

/// Greedy word-wrap of `text` into lines fitting `max_width_mm` at the
/// given font size. Embedded newlines start new lines; words longer than
/// a full line are broken. Line width uses an average-glyph estimate so
/// the layout stays deterministic.
pub fn wrap_text(text: &str, max_width_mm: f64, font_size_pt: f64) -> Vec<String> {
    let glyph_mm = font_size_pt * PT_TO_MM * AVG_GLYPH_EM;
    let max_chars = ((max_width_mm / glyph_mm).floor() as usize).max(1);

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let words: Vec<&str> = paragraph.split_whitespace().collect();
        if words.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in words {
            let mut rest = word;
            // Break words that cannot fit on a line of their own.
            while rest.chars().count() > max_chars {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let split_at = rest
                    .char_indices()
                    .nth(max_chars)
                    .map(|(i, _)| i)
                    .unwrap_or(rest.len());
                let (head, tail) = rest.split_at(split_at);
                lines.push(head.to_string());
                rest = tail;
            }

            let needed = if current.is_empty() {
                rest.chars().count()
            } else {
                current.chars().count() + 1 + rest.chars().count()
            };
            if needed > max_chars && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(rest);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}
