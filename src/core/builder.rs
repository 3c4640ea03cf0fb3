use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use super::error::BijakError;
use super::tax::compute_tax;
use super::types::*;
use super::validation;

/// Payment terms applied when no due date is given: 15 days.
const DEFAULT_DUE_DAYS: u64 = 15;

/// Builder for constructing invoices with a computed tax breakdown.
///
/// The company profile is passed explicitly to [`build`](Self::build) —
/// it supplies the seller jurisdiction and the round-off setting, and
/// keeping it a parameter keeps the computation free of ambient state.
///
/// ```
/// use bijak::core::*;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let profile = CompanyProfile::default();
/// let invoice = InvoiceBuilder::new("INV-2024-0001", NaiveDate::from_ymd_opt(2024, 7, 20).unwrap())
///     .customer(
///         CustomerBuilder::new("ABC Electronics", "Karnataka")
///             .gstin("29ABCDE1234F1Z5")
///             .build(),
///     )
///     .add_item(
///         LineItemBuilder::new("Wireless Mouse", "8471", dec!(2), dec!(1200))
///             .gst_rate(dec!(18))
///             .build(),
///     )
///     .build(&profile)
///     .unwrap();
///
/// assert_eq!(invoice.tax.subtotal, dec!(2400));
/// ```
pub struct InvoiceBuilder {
    id: Option<String>,
    number: String,
    date: NaiveDate,
    due_date: Option<NaiveDate>,
    customer: Option<Customer>,
    items: Vec<LineItem>,
    status: InvoiceStatus,
    notes: String,
    template: Option<Template>,
    paper_size: Option<PaperSize>,
    show_columns: Option<ColumnVisibility>,
}

impl InvoiceBuilder {
    pub fn new(number: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: None,
            number: number.into(),
            date,
            due_date: None,
            customer: None,
            items: Vec::new(),
            status: InvoiceStatus::Draft,
            notes: String::new(),
            template: None,
            paper_size: None,
            show_columns: None,
        }
    }

    /// Persistence identifier. Defaults to the invoice number.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Payment due date. Defaults to the issue date plus 15 days.
    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn customer(mut self, customer: Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn add_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn status(mut self, status: InvoiceStatus) -> Self {
        self.status = status;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Per-invoice template override.
    pub fn template(mut self, template: Template) -> Self {
        self.template = Some(template);
        self
    }

    /// Per-invoice paper size override.
    pub fn paper_size(mut self, size: PaperSize) -> Self {
        self.paper_size = Some(size);
        self
    }

    /// Per-invoice column visibility override.
    pub fn show_columns(mut self, columns: ColumnVisibility) -> Self {
        self.show_columns = Some(columns);
        self
    }

    /// Build the invoice, computing the tax breakdown from the profile's
    /// seller state and round-off setting, and running validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self, profile: &CompanyProfile) -> Result<Invoice, BijakError> {
        let invoice = self.assemble(profile)?;

        let errors = validation::validate_invoice(&invoice);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(BijakError::Validation(msg));
        }

        Ok(invoice)
    }

    /// Build without validation — useful for testing or importing
    /// external data. The tax breakdown is still computed.
    pub fn build_unchecked(self, profile: &CompanyProfile) -> Result<Invoice, BijakError> {
        self.assemble(profile)
    }

    fn assemble(self, profile: &CompanyProfile) -> Result<Invoice, BijakError> {
        // The jurisdiction decision needs a buyer state: computation must
        // not proceed without a customer.
        let customer = self
            .customer
            .ok_or_else(|| BijakError::Builder("customer is required".into()))?;

        // Input limits to prevent abuse
        if self.items.len() > 10_000 {
            return Err(BijakError::Builder(
                "invoice cannot have more than 10,000 line items".into(),
            ));
        }
        if self.number.len() > 200 {
            return Err(BijakError::Builder(
                "invoice number cannot exceed 200 characters".into(),
            ));
        }

        let tax = compute_tax(
            &self.items,
            &profile.state,
            &customer.state,
            profile.enable_round_off,
        );

        Ok(Invoice {
            id: self.id.unwrap_or_else(|| self.number.clone()),
            number: self.number,
            date: self.date,
            due_date: self
                .due_date
                .unwrap_or_else(|| self.date + Days::new(DEFAULT_DUE_DAYS)),
            customer,
            items: self.items,
            status: self.status,
            notes: self.notes,
            tax,
            template: self.template,
            paper_size: self.paper_size,
            show_columns: self.show_columns,
        })
    }
}

/// Builder for customer records.
pub struct CustomerBuilder {
    id: Option<String>,
    name: String,
    phone: String,
    email: String,
    billing_address: String,
    shipping_address: Option<String>,
    gstin: String,
    state: String,
}

impl CustomerBuilder {
    pub fn new(name: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            phone: String::new(),
            email: String::new(),
            billing_address: String::new(),
            shipping_address: None,
            gstin: String::new(),
            state: state.into(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn billing_address(mut self, address: impl Into<String>) -> Self {
        self.billing_address = address.into();
        self
    }

    /// Shipping address. Defaults to the billing address.
    pub fn shipping_address(mut self, address: impl Into<String>) -> Self {
        self.shipping_address = Some(address.into());
        self
    }

    pub fn gstin(mut self, gstin: impl Into<String>) -> Self {
        self.gstin = gstin.into();
        self
    }

    pub fn build(self) -> Customer {
        let shipping_address = self
            .shipping_address
            .unwrap_or_else(|| self.billing_address.clone());
        Customer {
            id: self.id.unwrap_or_else(|| self.name.clone()),
            name: self.name,
            phone: self.phone,
            email: self.email,
            billing_address: self.billing_address,
            shipping_address,
            gstin: self.gstin,
            state: self.state,
        }
    }
}

/// Builder for line items.
pub struct LineItemBuilder {
    name: String,
    hsn: String,
    quantity: Decimal,
    unit_price: Decimal,
    discount_percent: Decimal,
    gst_rate: Decimal,
}

impl LineItemBuilder {
    pub fn new(
        name: impl Into<String>,
        hsn: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            hsn: hsn.into(),
            quantity,
            unit_price,
            discount_percent: Decimal::ZERO,
            gst_rate: Decimal::ZERO,
        }
    }

    pub fn discount_percent(mut self, percent: Decimal) -> Self {
        self.discount_percent = percent;
        self
    }

    pub fn gst_rate(mut self, rate: Decimal) -> Self {
        self.gst_rate = rate;
        self
    }

    pub fn build(self) -> LineItem {
        LineItem {
            name: self.name,
            hsn: self.hsn,
            quantity: self.quantity,
            unit_price: self.unit_price,
            discount_percent: self.discount_percent,
            gst_rate: self.gst_rate,
        }
    }
}
