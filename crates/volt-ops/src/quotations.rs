//! # Quotation Operations
//!
//! Quotation creation, review, deletion, and the generate-invoice saga.
//!
//! ## The Saga
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Generate Invoice                                   │
//! │                                                                         │
//! │  1. Load quotation ──── missing? ───► QuotationNotFound (no writes)    │
//! │  2. Derive invoice ──── invoiced? ──► AlreadyInvoiced   (no writes)    │
//! │                         bad input? ─► Validation        (no writes)    │
//! │  3. Create invoice ──── failure? ───► Store             (no writes)    │
//! │  4. Mark quotation invoiced                                             │
//! │         └── failure? ─► PartialInvoice { invoice_id, quotation_id }    │
//! │                         invoice EXISTS, quotation still looks open     │
//! │                                                                         │
//! │  Steps 3 and 4 are two independent writes with no transaction           │
//! │  around them. Step 4 failing is the one partial-write case in the      │
//! │  system; it is reported, never rolled back.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::json;
use tracing::{info, warn};

use volt_core::error::CoreError;
use volt_core::invoice::{derive_invoice, InvoiceMetadata};
use volt_core::lifecycle::{review, ReviewDecision};
use volt_core::pricing::{price_items, ItemRequest};
use volt_core::types::{AdditionalItem, Invoice, Quotation, QuotationStatus};
use volt_core::validation::validate_notes;
use volt_store::error::StoreError;

use crate::context::AppContext;
use crate::error::{OpsError, OpsResult};

// =============================================================================
// Inputs
// =============================================================================

/// Form payload for creating a quotation.
#[derive(Debug, Clone)]
pub struct NewQuotation {
    pub customer_id: String,
    pub items: Vec<ItemRequest>,
    pub valid_until: NaiveDate,
    pub notes: Option<String>,
}

// =============================================================================
// Operations
// =============================================================================

/// Creates a quotation: verifies the customer, prices the requested items
/// against the current catalog, and persists the result as pending.
///
/// Pricing runs entirely before the write; any failure (unknown product,
/// insufficient stock, empty item list) leaves the store untouched. Stock
/// itself is NOT decremented.
pub async fn create_quotation(ctx: &AppContext, new: NewQuotation) -> OpsResult<Quotation> {
    validate_notes("notes", new.notes.as_deref())?;

    if ctx.store.customers.get(&new.customer_id).await?.is_none() {
        return Err(CoreError::CustomerNotFound(new.customer_id).into());
    }

    let catalog: HashMap<String, _> = ctx
        .store
        .products
        .list()
        .await?
        .into_iter()
        .map(|p| (p.id.clone(), p))
        .collect();
    let priced = price_items(&new.items, &catalog)?;

    let id = ctx
        .store
        .quotations
        .create(Quotation {
            id: String::new(),
            customer_id: new.customer_id,
            total_paise: priced.total_paise,
            items: priced.items,
            valid_until: new.valid_until,
            status: QuotationStatus::Pending,
            notes: new.notes,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        })
        .await?;

    info!(quotation_id = %id, "quotation created");

    let quotation = ctx
        .store
        .quotations
        .get(&id)
        .await?
        .ok_or_else(|| StoreError::not_found("quotations", &id))?;
    Ok(quotation)
}

/// Marks a quotation approved.
pub async fn approve_quotation(ctx: &AppContext, id: &str) -> OpsResult<()> {
    apply_review(ctx, id, ReviewDecision::Approve).await
}

/// Marks a quotation rejected.
pub async fn reject_quotation(ctx: &AppContext, id: &str) -> OpsResult<()> {
    apply_review(ctx, id, ReviewDecision::Reject).await
}

async fn apply_review(ctx: &AppContext, id: &str, decision: ReviewDecision) -> OpsResult<()> {
    let quotation = ctx
        .store
        .quotations
        .get(id)
        .await?
        .ok_or_else(|| CoreError::QuotationNotFound(id.to_string()))?;

    let next = review(id, quotation.status, decision)?;
    ctx.store
        .quotations
        .update(id, json!({ "status": next }))
        .await?;

    info!(quotation_id = %id, status = ?next, "quotation reviewed");
    Ok(())
}

/// Deletes a quotation. Open to any role; invoices already generated from
/// it are untouched and keep their frozen item copies.
pub async fn delete_quotation(ctx: &AppContext, id: &str) -> OpsResult<()> {
    ctx.store.quotations.remove(id).await?;
    info!(quotation_id = %id, "quotation deleted");
    Ok(())
}

/// Generates an invoice from a quotation, then marks the quotation
/// invoiced. Returns the stored invoice.
///
/// ## Errors
/// - Before the invoice write, every failure means nothing was persisted.
/// - After the invoice write, a failure to flip the quotation's status
///   returns [`OpsError::PartialInvoice`] with both ids: the invoice is
///   real, the quotation still looks open, and reconciliation is manual.
pub async fn generate_invoice(
    ctx: &AppContext,
    quotation_id: &str,
    additional_items: Vec<AdditionalItem>,
    metadata: InvoiceMetadata,
) -> OpsResult<Invoice> {
    let quotation = ctx
        .store
        .quotations
        .get(quotation_id)
        .await?
        .ok_or_else(|| CoreError::QuotationNotFound(quotation_id.to_string()))?;

    generate_invoice_from(ctx, &quotation, additional_items, metadata).await
}

/// Generates an invoice from an already-held quotation document,
/// skipping the re-fetch. List views hold the full document from their
/// live snapshot, so this is the entry point the invoice screen uses.
///
/// The invoiceability check runs against the passed document. Another
/// client deleting the quotation between the invoice write and the status
/// flip is exactly the partial-write case: the invoice stays persisted and
/// the call returns [`OpsError::PartialInvoice`].
pub async fn generate_invoice_from(
    ctx: &AppContext,
    quotation: &Quotation,
    additional_items: Vec<AdditionalItem>,
    metadata: InvoiceMetadata,
) -> OpsResult<Invoice> {
    let draft = derive_invoice(quotation, additional_items, metadata)?;

    let invoice_id = ctx.store.invoices.create(draft).await?;
    info!(invoice_id = %invoice_id, quotation_id = %quotation.id, "invoice created");

    let flip = ctx
        .store
        .quotations
        .update(&quotation.id, json!({ "status": QuotationStatus::Invoiced }))
        .await;
    if let Err(source) = flip {
        warn!(
            invoice_id = %invoice_id,
            quotation_id = %quotation.id,
            %source,
            "invoice created but quotation could not be marked invoiced"
        );
        return Err(OpsError::PartialInvoice {
            invoice_id,
            quotation_id: quotation.id.clone(),
            source,
        });
    }

    let invoice = ctx
        .store
        .invoices
        .get(&invoice_id)
        .await?
        .ok_or_else(|| StoreError::not_found("invoices", &invoice_id))?;
    Ok(invoice)
}
