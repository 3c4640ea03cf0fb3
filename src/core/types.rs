use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sales invoice — the top-level document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Record identifier used by the persistence collaborator.
    pub id: String,
    /// Invoice number (unique, immutable once assigned).
    pub number: String,
    /// Issue date.
    pub date: NaiveDate,
    /// Payment due date.
    pub due_date: NaiveDate,
    /// Billed customer. Owns the buyer jurisdiction (state) used for the
    /// CGST/SGST vs IGST decision.
    pub customer: Customer,
    /// Line items, in entry order.
    pub items: Vec<LineItem>,
    /// Lifecycle status. Transitions are user-driven field updates.
    pub status: InvoiceStatus,
    /// Free-text notes shown in the document footer.
    pub notes: String,
    /// Derived tax breakdown (set by the builder, recomputed in full).
    pub tax: TaxBreakdown,
    /// Per-invoice template override; falls back to the profile default.
    pub template: Option<Template>,
    /// Per-invoice paper size override; falls back to the profile default.
    pub paper_size: Option<PaperSize>,
    /// Per-invoice column visibility override; falls back to the profile
    /// default.
    pub show_columns: Option<ColumnVisibility>,
}

impl Invoice {
    /// Template to render with: invoice override, else profile default.
    pub fn effective_template(&self, profile: &CompanyProfile) -> Template {
        self.template.unwrap_or(profile.template)
    }

    /// Paper size to render on: invoice override, else profile default.
    pub fn effective_paper_size(&self, profile: &CompanyProfile) -> PaperSize {
        self.paper_size.unwrap_or(profile.pdf_paper_size)
    }

    /// Column set to render: invoice override, else profile default.
    pub fn effective_columns(&self, profile: &CompanyProfile) -> ColumnVisibility {
        self.show_columns.unwrap_or(profile.pdf_show_columns)
    }
}

/// Invoice lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Sent => "Sent",
            Self::Paid => "Paid",
            Self::Overdue => "Overdue",
        }
    }
}

/// One invoice line. Quantity and price default from the item catalog
/// when built via [`LineItem::from_catalog`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name.
    pub name: String,
    /// HSN/SAC classification code.
    pub hsn: String,
    /// Invoiced quantity.
    pub quantity: Decimal,
    /// Per-unit price.
    pub unit_price: Decimal,
    /// Discount percentage (0–100).
    pub discount_percent: Decimal,
    /// GST rate percentage. Zero renders as "Exempt".
    pub gst_rate: Decimal,
}

impl LineItem {
    /// Start a line from a catalog item: quantity 1, no discount,
    /// price/HSN/rate copied from the catalog record.
    pub fn from_catalog(item: &CatalogItem) -> Self {
        Self {
            name: item.name.clone(),
            hsn: item.hsn.clone(),
            quantity: Decimal::ONE,
            unit_price: item.price,
            discount_percent: Decimal::ZERO,
            gst_rate: item.gst_rate,
        }
    }

    /// Post-discount, pre-tax line total: `quantity * price * (1 - discount/100)`.
    pub fn amount(&self) -> Decimal {
        let gross = self.quantity * self.unit_price;
        gross - gross * self.discount_percent / Decimal::ONE_HUNDRED
    }
}

/// Catalog item record — the suggestion source for invoice lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub hsn: String,
    pub gst_rate: Decimal,
}

/// Customer record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub billing_address: String,
    pub shipping_address: String,
    /// GSTIN as entered. Checksum format is not validated.
    pub gstin: String,
    /// Buyer jurisdiction — one of the Indian states/union territories.
    pub state: String,
}

/// Jurisdiction-dependent GST split.
///
/// An invoice is taxed either intra-state (CGST + SGST, always equal
/// halves) or inter-state (IGST) — never both. The variant records the
/// decision; accessors return zero for the side that does not apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GstSplit {
    /// Intra-state sale: central + state halves.
    Domestic { cgst: Decimal, sgst: Decimal },
    /// Inter-state sale: integrated GST.
    Interstate { igst: Decimal },
}

impl GstSplit {
    pub fn cgst(&self) -> Decimal {
        match self {
            Self::Domestic { cgst, .. } => *cgst,
            Self::Interstate { .. } => Decimal::ZERO,
        }
    }

    pub fn sgst(&self) -> Decimal {
        match self {
            Self::Domestic { sgst, .. } => *sgst,
            Self::Interstate { .. } => Decimal::ZERO,
        }
    }

    pub fn igst(&self) -> Decimal {
        match self {
            Self::Domestic { .. } => Decimal::ZERO,
            Self::Interstate { igst } => *igst,
        }
    }

    pub fn is_interstate(&self) -> bool {
        matches!(self, Self::Interstate { .. })
    }

    /// Sum of all tax components.
    pub fn total(&self) -> Decimal {
        match self {
            Self::Domestic { cgst, sgst } => *cgst + *sgst,
            Self::Interstate { igst } => *igst,
        }
    }
}

/// Derived invoice totals. Never mutated independently — recomputed in
/// full whenever items, jurisdiction, or the round-off setting change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Sum of post-discount line amounts.
    pub subtotal: Decimal,
    /// CGST/SGST or IGST component.
    pub split: GstSplit,
    /// `subtotal + tax`, optionally rounded to the nearest whole rupee.
    pub grand_total: Decimal,
}

/// Document template variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Standard,
    Compact,
    Modern,
}

/// Supported paper sizes (portrait).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    A4,
    Letter,
    A5,
}

impl PaperSize {
    /// Page width and height in millimeters.
    pub fn dimensions_mm(&self) -> (f64, f64) {
        match self {
            Self::A4 => (210.0, 297.0),
            Self::Letter => (215.9, 279.4),
            Self::A5 => (148.0, 210.0),
        }
    }
}

/// Which optional item-table columns appear in the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnVisibility {
    pub hsn: bool,
    pub discount: bool,
    pub gst: bool,
}

impl Default for ColumnVisibility {
    fn default() -> Self {
        Self {
            hsn: true,
            discount: true,
            gst: true,
        }
    }
}

/// Document font scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSizePreset {
    Small,
    Medium,
    Large,
}

/// Page margin preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarginPreset {
    Normal,
    Narrow,
}

impl MarginPreset {
    /// Left/right page margin in millimeters.
    pub fn width_mm(&self) -> f64 {
        match self {
            Self::Normal => 15.0,
            Self::Narrow => 10.0,
        }
    }
}

/// Footer key/value field, displayed in the rendered document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomField {
    pub id: String,
    pub label: String,
    pub value: String,
}

/// Seller identity and document preferences. Singleton record, persisted
/// externally; passed explicitly into every computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub address: String,
    pub gstin: String,
    pub phone: String,
    pub email: String,
    /// Raw encoded logo image bytes (PNG/JPEG/WebP), if any.
    pub logo: Option<Vec<u8>>,
    /// Seller jurisdiction — one of the Indian states/union territories.
    pub state: String,

    // Invoice preferences
    pub template: Template,
    /// Accent color as a hex string, e.g. "#4F46E5". Malformed values
    /// fall back to black at render time.
    pub accent_color: String,
    pub custom_footer: String,
    pub invoice_prefix: String,
    pub enable_round_off: bool,

    // Tax settings
    /// Comma-separated GST rate palette, e.g. "5,12,18,28".
    pub default_gst_rates: String,

    // Document preferences
    pub show_logo_in_pdf: bool,
    pub pdf_font_size: FontSizePreset,
    pub pdf_margin: MarginPreset,
    pub pdf_paper_size: PaperSize,
    pub pdf_show_columns: ColumnVisibility,

    // Custom fields
    pub show_custom_fields_in_pdf: bool,
    pub custom_fields: Vec<CustomField>,
}

impl CompanyProfile {
    /// Parse the configured GST rate palette. Malformed entries are
    /// skipped, not errors.
    pub fn gst_rate_palette(&self) -> Vec<Decimal> {
        self.default_gst_rates
            .split(',')
            .filter_map(|s| s.trim().parse::<Decimal>().ok())
            .collect()
    }
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            name: "My Business".into(),
            address: "123 Main Street, Anytown, Karnataka, 12345".into(),
            gstin: "29ABCDE1234F1Z5".into(),
            phone: "9998887776".into(),
            email: "contact@mybusiness.com".into(),
            logo: None,
            state: "Karnataka".into(),
            template: Template::Standard,
            accent_color: "#4F46E5".into(),
            custom_footer: "Thank you for your business!".into(),
            invoice_prefix: "INV-".into(),
            enable_round_off: true,
            default_gst_rates: "5,12,18,28".into(),
            show_logo_in_pdf: true,
            pdf_font_size: FontSizePreset::Medium,
            pdf_margin: MarginPreset::Normal,
            pdf_paper_size: PaperSize::A4,
            pdf_show_columns: ColumnVisibility::default(),
            show_custom_fields_in_pdf: true,
            custom_fields: Vec::new(),
        }
    }
}
