//! # Inventory Adjustment
//!
//! The signed-delta adjustment rule for quantity-on-hand.
//!
//! Stock only ever moves through this explicit operation: pricing a
//! quotation or generating an invoice never decrements inventory.
//!
//! ```text
//! quantity 5 ── adjust(-3) ──► quantity 2 ── adjust(-5) ──► REJECTED
//!                                                  (would be -3; stays 2)
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::Product;

/// Computes the new quantity-on-hand after applying a signed delta.
///
/// Rejects any adjustment that would drive the quantity below zero,
/// leaving the stored value unchanged (the caller must not write).
///
/// ## Example
/// ```rust
/// # use volt_core::inventory::apply_adjustment;
/// # use volt_core::types::{Product, ProductCategory, Unit};
/// # use chrono::Utc;
/// # let mut product = Product {
/// #     id: "p1".into(), name: "Starter".into(),
/// #     category: ProductCategory::Switchgear, voltage: "415V".into(),
/// #     rating: "16A".into(), make: "L&T".into(), quantity: 5,
/// #     unit: Unit::Piece, price_paise: 120000,
/// #     created_at: Utc::now(), updated_at: Utc::now(),
/// # };
/// assert_eq!(apply_adjustment(&product, -3).unwrap(), 2);
/// product.quantity = 2;
/// assert!(apply_adjustment(&product, -5).is_err());
/// ```
pub fn apply_adjustment(product: &Product, delta: i64) -> CoreResult<i64> {
    // i64 overflow from an extreme delta: hugely negative is the same
    // below-zero refusal, hugely positive is nonsense input
    let new_quantity = match product.quantity.checked_add(delta) {
        Some(quantity) => quantity,
        None if delta < 0 => {
            return Err(CoreError::NegativeStock {
                name: product.name.clone(),
                current: product.quantity,
                delta,
            })
        }
        None => {
            return Err(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 0,
                max: i64::MAX,
            }
            .into())
        }
    };

    if new_quantity < 0 {
        return Err(CoreError::NegativeStock {
            name: product.name.clone(),
            current: product.quantity,
            delta,
        });
    }

    Ok(new_quantity)
}

// =============================================================================
// Unit Tests
// =============================================================================
