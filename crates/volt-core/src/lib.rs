//! # volt-core: Pure Business Logic for VoltDesk
//!
//! This crate is the **heart** of VoltDesk. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        VoltDesk Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Dashboard UI (out of scope)                    │   │
//! │  │    Customer forms ──► Quotation builder ──► Invoice screens     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    volt-ops (operations)                        │   │
//! │  │    create_quotation, generate_invoice, adjust_inventory, ...    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ volt-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌─────────┐ ┌─────────┐ │   │
//! │  │  │  types  │ │  money  │ │ pricing  │ │lifecycle│ │ invoice │ │   │
//! │  │  │Customer │ │  Money  │ │ calculate│ │ status  │ │ derive  │ │   │
//! │  │  │Quotation│ │ (paise) │ │ totals   │ │ machine │ │ freeze  │ │   │
//! │  │  └─────────┘ └─────────┘ └──────────┘ └─────────┘ └─────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORE • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 volt-store (document store)                     │   │
//! │  │          Collections, live snapshots, subscriptions             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Customer, Product, Quotation, Invoice, User)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation, run before any write
//! - [`pricing`] - The quotation pricing/total calculator
//! - [`lifecycle`] - Quotation status state machine
//! - [`invoice`] - Invoice derivation (frozen snapshot + combined total)
//! - [`inventory`] - Signed-delta stock adjustment rule
//! - [`stats`] - Dashboard aggregates over collection snapshots
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output; callers pass the clock
//! 2. **No I/O**: store, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are paise (i64), never floats
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use volt_core::pricing::{price_items, ItemRequest};
//! # use volt_core::types::{Product, ProductCategory, Unit};
//! # use chrono::Utc;
//!
//! # let product = Product {
//! #     id: "p1".into(), name: "4-core Cable".into(),
//! #     category: ProductCategory::Cable, voltage: "415V".into(),
//! #     rating: "25 sqmm".into(), make: "Polycab".into(), quantity: 500,
//! #     unit: Unit::Meter, price_paise: 8500,
//! #     created_at: Utc::now(), updated_at: Utc::now(),
//! # };
//! let catalog: HashMap<String, Product> =
//!     [("p1".to_string(), product)].into_iter().collect();
//!
//! let priced = price_items(&[ItemRequest::new("p1", 120)], &catalog).unwrap();
//! assert_eq!(priced.total().to_string(), "Rs 10200.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod invoice;
pub mod lifecycle;
pub mod money;
pub mod pricing;
pub mod stats;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use volt_core::Money` instead of
// `use volt_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single quotation line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 100000 instead of 100).
/// The real ceiling is always current stock; this only catches nonsense
/// before the stock check names a product.
pub const MAX_ITEM_QUANTITY: i64 = 9_999;

/// Maximum length of short text fields (names, addresses, invoice numbers).
pub const MAX_TEXT_LEN: usize = 200;

/// Maximum length of free-text fields (notes, scope, warranty).
pub const MAX_NOTES_LEN: usize = 1_000;
