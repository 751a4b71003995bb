//! # Product Operations
//!
//! Catalog CRUD plus the signed-delta inventory adjustment.
//!
//! ## Two Ways Stock Changes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Direct edit          set quantity to an absolute value (>= 0)          │
//! │                                                                         │
//! │  Adjustment           apply a signed delta: +received / -sold or        │
//! │                       damaged. Rejected if the result would be          │
//! │                       negative, leaving the stored quantity untouched.  │
//! │                                                                         │
//! │  Quotations and invoices NEVER touch stock. Availability is only a     │
//! │  gate at quotation-pricing time.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use volt_core::error::CoreError;
use volt_core::inventory::apply_adjustment;
use volt_core::types::{Product, ProductCategory, Unit};
use volt_core::validation::{validate_price_paise, validate_required, validate_stock_quantity};
use volt_store::error::StoreError;

use crate::context::AppContext;
use crate::error::OpsResult;

// =============================================================================
// Inputs
// =============================================================================

/// Form payload for creating a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub category: ProductCategory,
    pub voltage: String,
    pub rating: String,
    pub make: String,
    pub quantity: i64,
    pub unit: Unit,
    pub price_paise: i64,
}

/// Partial edit of a product. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ProductCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voltage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_paise: Option<i64>,
}

// =============================================================================
// Operations
// =============================================================================

/// Creates a product after validating every field.
pub async fn create_product(ctx: &AppContext, new: NewProduct) -> OpsResult<Product> {
    validate_required("name", &new.name)?;
    validate_required("voltage", &new.voltage)?;
    validate_required("rating", &new.rating)?;
    validate_required("make", &new.make)?;
    validate_stock_quantity(new.quantity)?;
    validate_price_paise(new.price_paise)?;

    let id = ctx
        .store
        .products
        .create(Product {
            id: String::new(),
            name: new.name,
            category: new.category,
            voltage: new.voltage,
            rating: new.rating,
            make: new.make,
            quantity: new.quantity,
            unit: new.unit,
            price_paise: new.price_paise,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            updated_at: DateTime::<Utc>::UNIX_EPOCH,
        })
        .await?;

    info!(product_id = %id, "product created");

    let product = ctx
        .store
        .products
        .get(&id)
        .await?
        .ok_or_else(|| StoreError::not_found("products", &id))?;
    Ok(product)
}

/// Applies a partial edit to a product.
///
/// Price edits do NOT flow back into existing quotations or invoices;
/// their line items carry frozen snapshots.
pub async fn update_product(ctx: &AppContext, id: &str, update: ProductUpdate) -> OpsResult<()> {
    if let Some(name) = &update.name {
        validate_required("name", name)?;
    }
    if let Some(voltage) = &update.voltage {
        validate_required("voltage", voltage)?;
    }
    if let Some(rating) = &update.rating {
        validate_required("rating", rating)?;
    }
    if let Some(make) = &update.make {
        validate_required("make", make)?;
    }
    if let Some(quantity) = update.quantity {
        validate_stock_quantity(quantity)?;
    }
    if let Some(price) = update.price_paise {
        validate_price_paise(price)?;
    }

    let patch = serde_json::to_value(&update).map_err(StoreError::from)?;
    ctx.store.products.update(id, patch).await?;

    info!(product_id = %id, "product updated");
    Ok(())
}

/// Applies a signed stock delta and returns the new quantity on hand.
///
/// ## Example
/// Stock 5, delta -3 → 2. A further -5 is refused and stock stays 2.
///
/// ## Concurrency
/// Read-modify-write with no compare-and-swap: two concurrent adjustments
/// on the same product are last-write-wins, so one delta can be lost.
pub async fn adjust_inventory(ctx: &AppContext, id: &str, delta: i64) -> OpsResult<i64> {
    let product = ctx
        .store
        .products
        .get(id)
        .await?
        .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

    let new_quantity = apply_adjustment(&product, delta)?;
    ctx.store
        .products
        .update(id, json!({ "quantity": new_quantity }))
        .await?;

    info!(product_id = %id, delta, new_quantity, "inventory adjusted");
    Ok(new_quantity)
}

/// Deletes a product. Admin only; quotations and invoices referencing it
/// keep their frozen snapshots.
pub async fn delete_product(ctx: &AppContext, id: &str) -> OpsResult<()> {
    ctx.require_admin("delete products")?;

    ctx.store.products.remove(id).await?;
    info!(product_id = %id, "product deleted");
    Ok(())
}
