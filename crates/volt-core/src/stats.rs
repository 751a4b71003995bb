//! # Dashboard Aggregates
//!
//! Pure aggregate computations behind the dashboard's overview screens:
//! entity counts, inventory valuation, category breakdown, monthly sales.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Aggregation Flow                                    │
//! │                                                                         │
//! │   collection snapshots (full, replaced on every mutation)              │
//! │   customers[]  products[]  quotations[]  invoices[]                     │
//! │        │           │            │            │                          │
//! │        └───────────┴─────┬──────┴────────────┘                          │
//! │                          ▼                                              │
//! │                 compute() ← THIS MODULE (pure)                          │
//! │                          │                                              │
//! │                          ▼                                              │
//! │                   DashboardStats                                        │
//! │                                                                         │
//! │   The live part (re-running this whenever a snapshot changes) lives    │
//! │   in the operations layer; this module never does I/O.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Customer, Invoice, InvoiceStatus, Product, ProductCategory, Quotation, QuotationStatus};

// =============================================================================
// Aggregate Types
// =============================================================================

/// Per-category inventory figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryBreakdown {
    pub category: ProductCategory,

    /// Number of distinct products in the category.
    pub product_count: usize,

    /// Σ price × quantity-on-hand across the category, in paise.
    pub stock_value_paise: i64,
}

/// Invoice totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MonthlySales {
    pub year: i32,
    pub month: u32,

    /// Σ invoice totals dated in this month, in paise.
    pub total_paise: i64,
}

/// Everything the dashboard overview renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardStats {
    pub customer_count: usize,
    pub product_count: usize,
    pub quotation_count: usize,
    pub invoice_count: usize,

    /// Quotations still awaiting review.
    pub pending_quotations: usize,

    /// Σ price × quantity-on-hand across all products, in paise.
    pub inventory_value_paise: i64,

    /// Per-category breakdown, in category order.
    pub categories: Vec<CategoryBreakdown>,

    /// Chronological monthly sales, oldest first.
    pub monthly_sales: Vec<MonthlySales>,
}

// =============================================================================
// Aggregations
// =============================================================================

/// Total stock valuation: Σ price × quantity-on-hand.
pub fn inventory_value(products: &[Product]) -> Money {
    products
        .iter()
        .map(|p| p.price().multiply_quantity(p.quantity))
        .sum()
}

/// Groups products into per-category counts and stock values.
pub fn category_breakdown(products: &[Product]) -> Vec<CategoryBreakdown> {
    let mut by_category: BTreeMap<ProductCategory, (usize, Money)> = BTreeMap::new();

    for product in products {
        let entry = by_category
            .entry(product.category)
            .or_insert((0, Money::zero()));
        entry.0 += 1;
        entry.1 += product.price().multiply_quantity(product.quantity);
    }

    by_category
        .into_iter()
        .map(|(category, (product_count, value))| CategoryBreakdown {
            category,
            product_count,
            stock_value_paise: value.paise(),
        })
        .collect()
}

/// Groups invoice totals by invoice-date month, oldest first.
///
/// Cancelled invoices are excluded (a cancelled bill is not revenue);
/// active and paid both count.
pub fn monthly_sales(invoices: &[Invoice]) -> Vec<MonthlySales> {
    let mut by_month: BTreeMap<(i32, u32), Money> = BTreeMap::new();

    for invoice in invoices {
        if invoice.status == InvoiceStatus::Cancelled {
            continue;
        }

        let key = (invoice.invoice_date.year(), invoice.invoice_date.month());
        *by_month.entry(key).or_insert(Money::zero()) += invoice.total();
    }

    by_month
        .into_iter()
        .map(|((year, month), total)| MonthlySales {
            year,
            month,
            total_paise: total.paise(),
        })
        .collect()
}

/// Computes the full dashboard figure set from collection snapshots.
pub fn compute(
    customers: &[Customer],
    products: &[Product],
    quotations: &[Quotation],
    invoices: &[Invoice],
) -> DashboardStats {
    DashboardStats {
        customer_count: customers.len(),
        product_count: products.len(),
        quotation_count: quotations.len(),
        invoice_count: invoices.len(),
        pending_quotations: quotations
            .iter()
            .filter(|q| q.status == QuotationStatus::Pending)
            .count(),
        inventory_value_paise: inventory_value(products).paise(),
        categories: category_breakdown(products),
        monthly_sales: monthly_sales(invoices),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
