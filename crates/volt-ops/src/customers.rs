//! # Customer Operations
//!
//! Form-validated CRUD for customers.
//!
//! Every check runs before the store is touched; a validation failure
//! means no record was written. Deletion is the one admin-gated action
//! here.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use volt_core::types::Customer;
use volt_core::validation::{validate_email, validate_notes, validate_phone, validate_required};
use volt_store::error::StoreError;

use crate::context::AppContext;
use crate::error::OpsResult;

// =============================================================================
// Inputs
// =============================================================================

/// Form payload for creating a customer.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub location: String,
    pub scope: Option<String>,
}

/// Partial edit of a customer. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// The stored field is itself optional, so edits need three states:
    /// absent = keep, `Some(Some(v))` = set, `Some(None)` = clear.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Option<String>>,
}

// =============================================================================
// Operations
// =============================================================================

/// Creates a customer after validating every field.
pub async fn create_customer(ctx: &AppContext, new: NewCustomer) -> OpsResult<Customer> {
    validate_required("name", &new.name)?;
    validate_email(&new.email)?;
    validate_phone(&new.phone)?;
    validate_required("address", &new.address)?;
    validate_required("location", &new.location)?;
    validate_notes("scope", new.scope.as_deref())?;

    let id = ctx
        .store
        .customers
        .create(Customer {
            id: String::new(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            address: new.address,
            location: new.location,
            scope: new.scope,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        })
        .await?;

    info!(customer_id = %id, "customer created");

    let customer = ctx
        .store
        .customers
        .get(&id)
        .await?
        .ok_or_else(|| StoreError::not_found("customers", &id))?;
    Ok(customer)
}

/// Applies a partial edit to a customer.
pub async fn update_customer(ctx: &AppContext, id: &str, update: CustomerUpdate) -> OpsResult<()> {
    if let Some(name) = &update.name {
        validate_required("name", name)?;
    }
    if let Some(email) = &update.email {
        validate_email(email)?;
    }
    if let Some(phone) = &update.phone {
        validate_phone(phone)?;
    }
    if let Some(address) = &update.address {
        validate_required("address", address)?;
    }
    if let Some(location) = &update.location {
        validate_required("location", location)?;
    }
    validate_notes("scope", update.scope.as_ref().and_then(|s| s.as_deref()))?;

    let patch = serde_json::to_value(&update).map_err(StoreError::from)?;
    ctx.store.customers.update(id, patch).await?;

    info!(customer_id = %id, "customer updated");
    Ok(())
}

/// Deletes a customer. Admin only; no cascade to quotations or invoices
/// that reference the customer.
pub async fn delete_customer(ctx: &AppContext, id: &str) -> OpsResult<()> {
    ctx.require_admin("delete customers")?;

    ctx.store.customers.remove(id).await?;
    info!(customer_id = %id, "customer deleted");
    Ok(())
}
