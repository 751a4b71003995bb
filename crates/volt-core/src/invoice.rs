//! # Invoice Derivation
//!
//! Derives an immutable invoice from a quotation.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Generating an Invoice                                │
//! │                                                                         │
//! │   Quotation (frozen items, total)     AdditionalItems     Metadata      │
//! │          │                                  │                │          │
//! │          └───────────────┬──────────────────┴────────────────┘          │
//! │                          ▼                                              │
//! │                 derive_invoice() ← THIS MODULE                          │
//! │                          │                                              │
//! │        ┌── already invoiced?        → AlreadyInvoiced                   │
//! │        ├── metadata field empty?    → Validation error                  │
//! │        ├── bad additional item?     → Validation error                  │
//! │        │                                                                │
//! │        └── OK → Invoice {                                               │
//! │                   items: VERBATIM copy of quotation.items,              │
//! │                   total: quotation.total + Σ additional amounts,        │
//! │                   status: Active,                                       │
//! │                 }                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The copy is deliberate: current product prices play NO part here. A
//! product edited between quoting and invoicing bills at the quoted price.
//!
//! This function is pure. The id and creation timestamp of the returned
//! invoice are placeholders the store fills in on create, and nothing is
//! persisted here: the quotation-status flip and the invoice write are the
//! operations layer's two-step saga.

use crate::error::CoreResult;
use crate::lifecycle::ensure_invoiceable;
use crate::money::Money;
use crate::types::{AdditionalItem, Invoice, InvoiceStatus, InvoiceType, Quotation};
use crate::validation::{validate_additional_amount, validate_notes, validate_required};
use chrono::{DateTime, NaiveDate, Utc};

// =============================================================================
// Metadata
// =============================================================================

/// Caller-supplied invoice metadata.
#[derive(Debug, Clone)]
pub struct InvoiceMetadata {
    /// Business-supplied invoice number. Required, but NOT checked for
    /// uniqueness anywhere - duplicate numbers are a known gap the
    /// numbering scheme must avoid on its own.
    pub invoice_number: String,

    /// Invoice date.
    pub invoice_date: NaiveDate,

    /// Payment terms. Required.
    pub payment_terms: String,

    /// Optional warranty period.
    pub warranty: Option<String>,

    /// Optional free-text notes.
    pub notes: Option<String>,

    /// Customer or company invoice.
    pub kind: InvoiceType,
}

// =============================================================================
// Derivation
// =============================================================================

/// Derives an invoice from a quotation plus optional additional items.
///
/// ## Guarantees
/// * `items` is a verbatim copy of the quotation's items (product id,
///   quantity, unit price, subtotal, name snapshot) - no recomputation
///   against possibly-changed product data.
/// * `total = quotation.total + Σ additional_items.amount`; with zero
///   additional items the totals are exactly equal.
/// * Status starts at [`InvoiceStatus::Active`]; `paid`/`cancelled` are
///   set later by direct edit only.
///
/// ## Errors
/// * [`crate::error::CoreError::AlreadyInvoiced`] - quotation already invoiced
/// * [`crate::error::CoreError::Validation`] - empty invoice number or
///   payment terms, empty additional-item description, negative amount
pub fn derive_invoice(
    quotation: &Quotation,
    additional_items: Vec<AdditionalItem>,
    meta: InvoiceMetadata,
) -> CoreResult<Invoice> {
    ensure_invoiceable(&quotation.id, quotation.status)?;

    validate_required("invoice number", &meta.invoice_number)?;
    validate_required("payment terms", &meta.payment_terms)?;
    validate_notes("warranty", meta.warranty.as_deref())?;
    validate_notes("notes", meta.notes.as_deref())?;

    for item in &additional_items {
        validate_required("description", &item.description)?;
        validate_additional_amount(item.amount_paise)?;
    }

    let additional_total: Money = additional_items.iter().map(AdditionalItem::amount).sum();
    let total = quotation.total() + additional_total;

    Ok(Invoice {
        // assigned by the store on create
        id: String::new(),
        quotation_id: quotation.id.clone(),
        customer_id: quotation.customer_id.clone(),
        items: quotation.items.clone(),
        additional_items,
        invoice_number: meta.invoice_number,
        invoice_date: meta.invoice_date,
        payment_terms: meta.payment_terms,
        warranty: meta.warranty,
        notes: meta.notes,
        kind: meta.kind,
        status: InvoiceStatus::Active,
        total_paise: total.paise(),
        // stamped by the store on create
        created_at: DateTime::<Utc>::UNIX_EPOCH,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::types::{QuotationItem, QuotationStatus};

    fn quotation(status: QuotationStatus) -> Quotation {
        Quotation {
            id: "q1".to_string(),
            customer_id: "c1".to_string(),
            items: vec![
                QuotationItem {
                    product_id: "a".to_string(),
                    name_snapshot: "Product A".to_string(),
                    quantity: 2,
                    unit_price_paise: 10000,
                    subtotal_paise: 20000,
                },
                QuotationItem {
                    product_id: "b".to_string(),
                    name_snapshot: "Product B".to_string(),
                    quantity: 1,
                    unit_price_paise: 5000,
                    subtotal_paise: 5000,
                },
            ],
            total_paise: 25000,
            valid_until: NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
            status,
            notes: None,
            created_at: Utc::now(),
        }
    }

    fn meta(number: &str) -> InvoiceMetadata {
        InvoiceMetadata {
            invoice_number: number.to_string(),
            invoice_date: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            payment_terms: "Net 30".to_string(),
            warranty: Some("12 months".to_string()),
            notes: None,
            kind: InvoiceType::Customer,
        }
    }

    #[test]
    fn test_items_copied_verbatim() {
        let q = quotation(QuotationStatus::Approved);
        let invoice = derive_invoice(&q, vec![], meta("INV-001")).unwrap();

        assert_eq!(invoice.items, q.items);
        assert_eq!(invoice.quotation_id, "q1");
        assert_eq!(invoice.customer_id, "c1");
        assert_eq!(invoice.status, InvoiceStatus::Active);
    }

    #[test]
    fn test_total_without_additional_items_matches_quotation_exactly() {
        let q = quotation(QuotationStatus::Approved);
        let invoice = derive_invoice(&q, vec![], meta("INV-001")).unwrap();
        assert_eq!(invoice.total_paise, q.total_paise);
    }

    #[test]
    fn test_additional_items_extend_total() {
        // quotation total Rs 250 + installation Rs 75 = Rs 325
        let q = quotation(QuotationStatus::Approved);
        let additional = vec![AdditionalItem {
            description: "Installation".to_string(),
            amount_paise: 7500,
        }];

        let invoice = derive_invoice(&q, additional, meta("INV-002")).unwrap();
        assert_eq!(invoice.total_paise, 32500);
        assert_eq!(invoice.items.len(), 2);
    }

    #[test]
    fn test_invoicing_from_pending_is_allowed() {
        let q = quotation(QuotationStatus::Pending);
        assert!(derive_invoice(&q, vec![], meta("INV-003")).is_ok());
    }

    #[test]
    fn test_already_invoiced_is_refused() {
        let q = quotation(QuotationStatus::Invoiced);
        let err = derive_invoice(&q, vec![], meta("INV-004")).unwrap_err();
        assert!(matches!(err, CoreError::AlreadyInvoiced(id) if id == "q1"));
    }

    #[test]
    fn test_metadata_required_fields() {
        let q = quotation(QuotationStatus::Approved);

        let mut m = meta("");
        assert!(derive_invoice(&q, vec![], m).is_err());

        m = meta("INV-005");
        m.payment_terms = "  ".to_string();
        assert!(derive_invoice(&q, vec![], m).is_err());
    }

    #[test]
    fn test_bad_additional_items_rejected() {
        let q = quotation(QuotationStatus::Approved);

        let empty_description = vec![AdditionalItem {
            description: "".to_string(),
            amount_paise: 100,
        }];
        assert!(derive_invoice(&q, empty_description, meta("INV-006")).is_err());

        let negative_amount = vec![AdditionalItem {
            description: "Discount".to_string(),
            amount_paise: -100,
        }];
        assert!(derive_invoice(&q, negative_amount, meta("INV-007")).is_err());
    }

    #[test]
    fn test_zero_amount_additional_item_is_allowed() {
        let q = quotation(QuotationStatus::Approved);
        let additional = vec![AdditionalItem {
            description: "Free delivery".to_string(),
            amount_paise: 0,
        }];
        let invoice = derive_invoice(&q, additional, meta("INV-008")).unwrap();
        assert_eq!(invoice.total_paise, q.total_paise);
    }
}
