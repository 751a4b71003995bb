//! # Domain Types
//!
//! Core domain types used throughout VoltDesk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │    Product      │   │      User       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  name, email    │   │  category, make │   │  email          │       │
//! │  │  phone, address │   │  quantity, unit │   │  role           │       │
//! │  └─────────────────┘   │  price_paise    │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                        │
//! │  │   Quotation     │ ─────► │    Invoice      │                        │
//! │  │  ─────────────  │ frozen │  ─────────────  │                        │
//! │  │  customer_id    │ items  │  quotation_id   │                        │
//! │  │  items[]        │        │  items[] (copy) │                        │
//! │  │  total_paise    │        │  additional[]   │                        │
//! │  │  status         │        │  total_paise    │                        │
//! │  └─────────────────┘        └─────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership Rules
//! - Quotations OWN their items; products are referenced, never owned.
//! - Invoices own a frozen COPY of a quotation's items plus their own
//!   additional items. Nothing is re-derived from live product data.
//!
//! ## Optional vs Required
//! Optionality is explicit per field (`Option<T>`), never a runtime
//! presence check: `Customer.scope`, `Quotation.notes`,
//! `Invoice.warranty`, `Invoice.notes`, `User.display_name` are the only
//! optional fields.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Customer
// =============================================================================

/// A customer of the business.
///
/// Identity is the store-generated id; all descriptive fields are mutable
/// via edit. Deletion is admin-only (enforced in the operations layer).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    /// Unique identifier (UUID v4, assigned by the store).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Contact email.
    pub email: String,

    /// Contact phone number.
    pub phone: String,

    /// Street address.
    pub address: String,

    /// City / area, used for filtering in the dashboard.
    pub location: String,

    /// Optional note about scope of work for this customer.
    pub scope: Option<String>,

    /// When the record was created (server-assigned).
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Product
// =============================================================================

/// Enumerated product category.
///
/// Ordered so category breakdowns render in a stable sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Motor,
    Pump,
    Cable,
    Panel,
    Switchgear,
    Other,
}

/// Unit of measure for quantity-on-hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Piece,
    Meter,
    Set,
    Box,
    Kg,
}

/// An inventory product.
///
/// `quantity` is mutated by direct edit or by the explicit signed-delta
/// adjustment operation, and must never go negative. Creating a quotation
/// or invoice NEVER touches it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4, assigned by the store).
    pub id: String,

    /// Display name shown in lists and on documents.
    pub name: String,

    /// Product category.
    pub category: ProductCategory,

    /// Voltage rating (e.g., "415V").
    pub voltage: String,

    /// Power/capacity rating (e.g., "5HP", "63A").
    pub rating: String,

    /// Manufacturer / brand.
    pub make: String,

    /// Quantity on hand. Integer, never negative.
    pub quantity: i64,

    /// Unit of measure for `quantity`.
    pub unit: Unit,

    /// Unit price in paise.
    pub price_paise: i64,

    /// When the record was created (server-assigned).
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the record was last updated (server-assigned).
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_paise(self.price_paise)
    }

    /// Checks whether `requested` units can be quoted from current stock.
    pub fn in_stock(&self, requested: i64) -> bool {
        self.quantity >= requested
    }
}

// =============================================================================
// Quotation
// =============================================================================

/// The status of a quotation.
///
/// ```text
///           ┌──────────► approved ──┐
///  pending ─┤                       ├──► invoiced   (terminal, immutable)
///           └──────────► rejected ──┘
///           └───────────────────────┘
///            (invoicing is also legal straight from pending/rejected;
///             the review step is advisory, not enforced)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum QuotationStatus {
    /// Newly created, awaiting review.
    Pending,
    /// Reviewed and accepted.
    Approved,
    /// Reviewed and declined.
    Rejected,
    /// An invoice was generated from it. Immutable from here on.
    Invoiced,
}

impl Default for QuotationStatus {
    fn default() -> Self {
        QuotationStatus::Pending
    }
}

/// A line item in a quotation.
///
/// Uses the snapshot pattern: name and unit price are frozen at pricing
/// time so later product edits never change an issued document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuotationItem {
    /// The product this line references.
    pub product_id: String,

    /// Product name at pricing time (frozen).
    pub name_snapshot: String,

    /// Requested quantity.
    pub quantity: i64,

    /// Unit price in paise at pricing time (frozen).
    pub unit_price_paise: i64,

    /// Line subtotal: quantity × unit price (paise).
    pub subtotal_paise: i64,
}

impl QuotationItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_paise(self.unit_price_paise)
    }

    /// Returns the line subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_paise(self.subtotal_paise)
    }
}

/// A priced, non-binding offer of products to a customer.
///
/// Invariant: `total_paise` equals the sum of item subtotals AT CREATION
/// TIME. It is never recomputed when product prices change later.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Quotation {
    /// Unique identifier (UUID v4, assigned by the store).
    pub id: String,

    /// The customer this quotation is addressed to.
    pub customer_id: String,

    /// Ordered line items. Never empty.
    pub items: Vec<QuotationItem>,

    /// Grand total in paise (sum of item subtotals).
    pub total_paise: i64,

    /// Date until which the offer stands.
    #[ts(as = "String")]
    pub valid_until: NaiveDate,

    /// Lifecycle status.
    pub status: QuotationStatus,

    /// Optional free-text notes.
    pub notes: Option<String>,

    /// When the record was created (server-assigned).
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Quotation {
    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_paise(self.total_paise)
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// Whether the invoice is issued to a customer or the company itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceType {
    Customer,
    Company,
}

/// The status of an invoice.
///
/// Only `Active` is ever set by the derivation logic. `Paid` and
/// `Cancelled` are legal values written by direct edit; no transition
/// rules exist between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Active,
    Paid,
    Cancelled,
}

impl Default for InvoiceStatus {
    fn default() -> Self {
        InvoiceStatus::Active
    }
}

/// A non-product charge added only at invoice time (e.g., "Installation").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdditionalItem {
    /// Free-text description. Never empty.
    pub description: String,

    /// Charge amount in paise. Never negative.
    pub amount_paise: i64,
}

impl AdditionalItem {
    /// Returns the charge amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_paise(self.amount_paise)
    }
}

/// A billing document derived from a quotation, frozen at generation time.
///
/// Invariant: `items` is a verbatim snapshot of the originating
/// quotation's items; it is never re-derived from live product data.
/// `total_paise = quotation.total_paise + Σ additional_items.amount_paise`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Invoice {
    /// Unique identifier (UUID v4, assigned by the store).
    pub id: String,

    /// The quotation this invoice was generated from.
    pub quotation_id: String,

    /// The customer being billed (copied from the quotation).
    pub customer_id: String,

    /// Verbatim copy of the quotation's items at generation time.
    pub items: Vec<QuotationItem>,

    /// Extra non-product charges.
    pub additional_items: Vec<AdditionalItem>,

    /// Business-supplied invoice number. NOT checked for uniqueness; the
    /// numbering scheme is the business's responsibility (known gap).
    pub invoice_number: String,

    /// Invoice date.
    #[ts(as = "String")]
    pub invoice_date: NaiveDate,

    /// Payment terms (e.g., "50% advance, 50% on delivery").
    pub payment_terms: String,

    /// Optional warranty period (e.g., "12 months").
    pub warranty: Option<String>,

    /// Optional free-text notes.
    pub notes: Option<String>,

    /// Customer or company invoice.
    pub kind: InvoiceType,

    /// Invoice status. Initialized to Active; edited directly thereafter.
    pub status: InvoiceStatus,

    /// Combined total in paise.
    pub total_paise: i64,

    /// When the record was created (server-assigned).
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Invoice {
    /// Returns the combined total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_paise(self.total_paise)
    }
}

// =============================================================================
// User / Session
// =============================================================================

/// Role of the signed-in user.
///
/// Admin unlocks the destructive deletes (customer, product); everything
/// else is open to any authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Employee,
}

/// A signed-in user of the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    /// Unique identifier (UUID v4, assigned by the store).
    pub id: String,

    /// Sign-in email.
    pub email: String,

    /// Role gating destructive actions.
    pub role: Role,

    /// Optional display name.
    pub display_name: Option<String>,

    /// When the record was created (server-assigned).
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotation_status_default() {
        assert_eq!(QuotationStatus::default(), QuotationStatus::Pending);
    }

    #[test]
    fn test_invoice_status_default() {
        assert_eq!(InvoiceStatus::default(), InvoiceStatus::Active);
    }

    #[test]
    fn test_item_money_helpers() {
        let item = QuotationItem {
            product_id: "p1".to_string(),
            name_snapshot: "4-core Cable".to_string(),
            quantity: 3,
            unit_price_paise: 8500,
            subtotal_paise: 25500,
        };
        assert_eq!(item.unit_price().paise(), 8500);
        assert_eq!(item.subtotal().paise(), 25500);
    }

    #[test]
    fn test_product_in_stock() {
        let product = Product {
            id: "p1".to_string(),
            name: "Crompton 5HP Motor".to_string(),
            category: ProductCategory::Motor,
            voltage: "415V".to_string(),
            rating: "5HP".to_string(),
            make: "Crompton".to_string(),
            quantity: 3,
            unit: Unit::Piece,
            price_paise: 1_250_000,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(product.in_stock(3));
        assert!(!product.in_stock(4));
    }
}
