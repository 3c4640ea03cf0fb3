//! # bijak
//!
//! GST invoicing library for Indian small businesses: customer, catalog
//! and invoice record types, CGST/SGST/IGST tax computation, year-scoped
//! sequential invoice numbering, and a printable document layout engine
//! with multiple templates and paper sizes.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Page geometry is expressed in millimeters as `f64`.
//!
//! ## Quick Start
//!
//! ```rust
//! use bijak::core::*;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let profile = CompanyProfile::default();
//!
//! let customer = CustomerBuilder::new("ABC Electronics", "Karnataka")
//!     .gstin("29ABCDE1234F1Z5")
//!     .billing_address("123 Tech Park, Bangalore, Karnataka, 560001")
//!     .build();
//!
//! let invoice = InvoiceBuilder::new(
//!     "INV-2024-0001",
//!     NaiveDate::from_ymd_opt(2024, 7, 20).unwrap(),
//! )
//! .customer(customer)
//! .add_item(
//!     LineItemBuilder::new("Laptop Pro 15\"", "8471", dec!(1), dec!(85000))
//!         .discount_percent(dec!(5))
//!         .gst_rate(dec!(18))
//!         .build(),
//! )
//! .build(&profile)
//! .unwrap();
//!
//! // Same-state sale: tax splits evenly into CGST + SGST.
//! assert_eq!(invoice.tax.subtotal, dec!(80750));
//! assert_eq!(invoice.tax.split.cgst(), dec!(7267.5));
//! assert_eq!(invoice.tax.split.igst(), dec!(0));
//! assert_eq!(invoice.tax.grand_total, dec!(95285));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Record types, GST computation, numbering, validation |
//! | `render` (default) | Template layout engine producing drawing instructions |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "render")]
pub mod render;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
