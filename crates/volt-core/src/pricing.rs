//! # Pricing Calculator
//!
//! The pure pricing/total calculator for quotations.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Pricing a Quotation                                  │
//! │                                                                         │
//! │  requests: [(product_id, qty), ...]      catalog: id → Product         │
//! │       │                                       │                         │
//! │       └──────────────┬────────────────────────┘                         │
//! │                      ▼                                                  │
//! │            price_items() ← THIS MODULE                                  │
//! │                      │                                                  │
//! │       ┌── empty list?          → EmptyQuotation                         │
//! │       ├── unknown product id?  → ProductNotFound                        │
//! │       ├── qty <= 0 / absurd?   → Validation error                       │
//! │       ├── qty > on-hand?       → InsufficientStock (names the product  │
//! │       │                          and the available amount)              │
//! │       │                                                                 │
//! │       └── OK → items with frozen name/price snapshots,                  │
//! │               subtotal = qty × unit price, total = Σ subtotals          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guarantees
//! - Pure: no I/O, nothing is persisted here, inventory is NOT decremented
//!   (stock only changes through the explicit adjustment operation).
//! - All checks run before the caller writes anything, so a failed line
//!   means zero records were created.
//! - Item order is preserved; the total is order-independent.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, QuotationItem};
use crate::validation::validate_quantity;

// =============================================================================
// Inputs / Outputs
// =============================================================================

/// One requested quotation line: which product, how many.
#[derive(Debug, Clone)]
pub struct ItemRequest {
    pub product_id: String,
    pub quantity: i64,
}

impl ItemRequest {
    pub fn new(product_id: impl Into<String>, quantity: i64) -> Self {
        ItemRequest {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// The result of pricing: frozen line items plus the grand total.
#[derive(Debug, Clone)]
pub struct PricedItems {
    /// Line items with name/price snapshots, in request order.
    pub items: Vec<QuotationItem>,

    /// Grand total in paise (sum of line subtotals).
    pub total_paise: i64,
}

impl PricedItems {
    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_paise(self.total_paise)
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// Prices an ordered list of item requests against a product catalog.
///
/// ## Arguments
/// * `requests` - (product id, quantity) pairs, in the order the user
///   entered them
/// * `catalog` - current products keyed by id (a read snapshot; this
///   function never mutates it)
///
/// ## Errors
/// * [`CoreError::EmptyQuotation`] - `requests` is empty
/// * [`CoreError::ProductNotFound`] - a product id does not resolve
/// * [`CoreError::Validation`] - a quantity is zero, negative, or absurd
/// * [`CoreError::InsufficientStock`] - a quantity exceeds quantity-on-hand
pub fn price_items(
    requests: &[ItemRequest],
    catalog: &HashMap<String, Product>,
) -> CoreResult<PricedItems> {
    if requests.is_empty() {
        return Err(CoreError::EmptyQuotation);
    }

    let mut items = Vec::with_capacity(requests.len());
    let mut total = Money::zero();

    for request in requests {
        validate_quantity(request.quantity)?;

        let product = catalog
            .get(&request.product_id)
            .ok_or_else(|| CoreError::ProductNotFound(request.product_id.clone()))?;

        if !product.in_stock(request.quantity) {
            return Err(CoreError::InsufficientStock {
                name: product.name.clone(),
                available: product.quantity,
                requested: request.quantity,
            });
        }

        let subtotal = product.price().multiply_quantity(request.quantity);
        total += subtotal;

        items.push(QuotationItem {
            product_id: product.id.clone(),
            name_snapshot: product.name.clone(),
            quantity: request.quantity,
            unit_price_paise: product.price_paise,
            subtotal_paise: subtotal.paise(),
        });
    }

    Ok(PricedItems {
        items,
        total_paise: total.paise(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ProductCategory, Unit};
    use chrono::Utc;

    fn product(id: &str, name: &str, quantity: i64, price_paise: i64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: ProductCategory::Other,
            voltage: "415V".to_string(),
            rating: "-".to_string(),
            make: "Generic".to_string(),
            quantity,
            unit: Unit::Piece,
            price_paise,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn catalog(products: Vec<Product>) -> HashMap<String, Product> {
        products.into_iter().map(|p| (p.id.clone(), p)).collect()
    }

    #[test]
    fn test_prices_lines_and_total() {
        // product A: qty 2 at Rs 100 → Rs 200; product B: qty 1 at Rs 50 → Rs 50
        let catalog = catalog(vec![
            product("a", "Product A", 10, 10000),
            product("b", "Product B", 10, 5000),
        ]);
        let requests = [ItemRequest::new("a", 2), ItemRequest::new("b", 1)];

        let priced = price_items(&requests, &catalog).unwrap();

        assert_eq!(priced.items.len(), 2);
        assert_eq!(priced.items[0].subtotal_paise, 20000);
        assert_eq!(priced.items[1].subtotal_paise, 5000);
        assert_eq!(priced.total_paise, 25000);
        // snapshots frozen
        assert_eq!(priced.items[0].name_snapshot, "Product A");
        assert_eq!(priced.items[0].unit_price_paise, 10000);
    }

    #[test]
    fn test_total_is_order_independent() {
        let catalog = catalog(vec![
            product("a", "Product A", 10, 10000),
            product("b", "Product B", 10, 5000),
            product("c", "Product C", 10, 333),
        ]);
        let forward = [
            ItemRequest::new("a", 2),
            ItemRequest::new("b", 1),
            ItemRequest::new("c", 7),
        ];
        let backward = [
            ItemRequest::new("c", 7),
            ItemRequest::new("b", 1),
            ItemRequest::new("a", 2),
        ];

        let t1 = price_items(&forward, &catalog).unwrap().total_paise;
        let t2 = price_items(&backward, &catalog).unwrap().total_paise;
        assert_eq!(t1, t2);
    }

    #[test]
    fn test_empty_request_list_rejected() {
        let catalog = catalog(vec![product("a", "Product A", 10, 10000)]);
        let err = price_items(&[], &catalog).unwrap_err();
        assert!(matches!(err, CoreError::EmptyQuotation));
    }

    #[test]
    fn test_unknown_product_rejected() {
        let catalog = catalog(vec![product("a", "Product A", 10, 10000)]);
        let requests = [ItemRequest::new("missing", 1)];
        let err = price_items(&requests, &catalog).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(id) if id == "missing"));
    }

    #[test]
    fn test_insufficient_stock_names_product_and_available() {
        let catalog = catalog(vec![product("a", "Crompton 5HP Motor", 3, 10000)]);
        let requests = [ItemRequest::new("a", 5)];

        match price_items(&requests, &catalog).unwrap_err() {
            CoreError::InsufficientStock {
                name,
                available,
                requested,
            } => {
                assert_eq!(name, "Crompton 5HP Motor");
                assert_eq!(available, 3);
                assert_eq!(requested, 5);
            }
            other => panic!("expected InsufficientStock, got {other:?}"),
        }
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        let catalog = catalog(vec![product("a", "Product A", 10, 10000)]);
        assert!(price_items(&[ItemRequest::new("a", 0)], &catalog).is_err());
        assert!(price_items(&[ItemRequest::new("a", -2)], &catalog).is_err());
    }

    #[test]
    fn test_exact_stock_is_allowed() {
        let catalog = catalog(vec![product("a", "Product A", 5, 10000)]);
        let priced = price_items(&[ItemRequest::new("a", 5)], &catalog).unwrap();
        assert_eq!(priced.total_paise, 50000);
    }

    #[test]
    fn test_pricing_does_not_touch_inventory() {
        let catalog = catalog(vec![product("a", "Product A", 5, 10000)]);
        price_items(&[ItemRequest::new("a", 3)], &catalog).unwrap();
        // the catalog snapshot is untouched; stock only moves via the
        // explicit adjustment operation
        assert_eq!(catalog.get("a").unwrap().quantity, 5);
    }
}
