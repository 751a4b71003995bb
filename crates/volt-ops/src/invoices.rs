//! # Invoice Operations
//!
//! Post-generation invoice management.
//!
//! Generation lives with the quotation saga
//! ([`crate::quotations::generate_invoice`]); what remains here is the
//! direct-edit surface: status changes (paid, cancelled) and the few
//! metadata fields that stay mutable after issue. Line items, additional
//! items, and the total are frozen at generation time and have no edit
//! path.

use serde::Serialize;
use serde_json::json;
use tracing::info;

use volt_core::types::InvoiceStatus;
use volt_core::validation::{validate_notes, validate_required};
use volt_store::error::StoreError;

use crate::context::AppContext;
use crate::error::OpsResult;

/// Partial edit of an invoice's mutable metadata.
///
/// `warranty` and `notes` are optional on the invoice itself, so their
/// edits carry three states: absent = keep, `Some(Some(v))` = set,
/// `Some(None)` = clear.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InvoiceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

/// Sets an invoice's status directly. No transition rules apply between
/// active, paid, and cancelled.
pub async fn set_invoice_status(
    ctx: &AppContext,
    id: &str,
    status: InvoiceStatus,
) -> OpsResult<()> {
    ctx.store
        .invoices
        .update(id, json!({ "status": status }))
        .await?;

    info!(invoice_id = %id, status = ?status, "invoice status set");
    Ok(())
}

/// Applies a partial edit to an invoice's mutable metadata.
pub async fn update_invoice(ctx: &AppContext, id: &str, update: InvoiceUpdate) -> OpsResult<()> {
    if let Some(terms) = &update.payment_terms {
        validate_required("payment_terms", terms)?;
    }
    validate_notes("warranty", update.warranty.as_ref().and_then(|w| w.as_deref()))?;
    validate_notes("notes", update.notes.as_ref().and_then(|n| n.as_deref()))?;

    let patch = serde_json::to_value(&update).map_err(StoreError::from)?;
    ctx.store.invoices.update(id, patch).await?;

    info!(invoice_id = %id, "invoice updated");
    Ok(())
}

/// Deletes an invoice. Open to any role.
pub async fn delete_invoice(ctx: &AppContext, id: &str) -> OpsResult<()> {
    ctx.store.invoices.remove(id).await?;
    info!(invoice_id = %id, "invoice deleted");
    Ok(())
}
