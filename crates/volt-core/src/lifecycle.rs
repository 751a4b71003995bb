//! # Quotation Lifecycle
//!
//! The state machine governing a quotation's status.
//!
//! ## States and Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Quotation Lifecycle                                 │
//! │                                                                         │
//! │   create ──► pending ──┬── review(Approve) ──► approved ──┐            │
//! │                        │                                   │            │
//! │                        ├── review(Reject)  ──► rejected ──┤            │
//! │                        │                                   │            │
//! │                        └── generate-invoice ───────────────┴─► invoiced │
//! │                                                                (final)  │
//! │                                                                         │
//! │  • review is a DIRECT overwrite between pending/approved/rejected      │
//! │  • generate-invoice is legal from ANY non-invoiced status - approval   │
//! │    before invoicing is deliberately NOT enforced                        │
//! │  • invoiced is terminal: the quotation is immutable afterwards          │
//! │  • delete is legal in every state and cascades to nothing               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! These rules are pure functions over [`QuotationStatus`] so they can be
//! tested without a store; the operations layer applies the resulting
//! status with a single patch write.

use crate::error::{CoreError, CoreResult};
use crate::types::QuotationStatus;

// =============================================================================
// Review
// =============================================================================

/// Outcome chosen by the reviewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

/// Applies a review decision to the current status.
///
/// A review is a direct status overwrite with no side effects on items or
/// total. The only refusal is an already-invoiced quotation, which is
/// immutable.
///
/// ## Arguments
/// * `quotation_id` - used only for error context
/// * `current` - the quotation's current status
/// * `decision` - approve or reject
pub fn review(
    quotation_id: &str,
    current: QuotationStatus,
    decision: ReviewDecision,
) -> CoreResult<QuotationStatus> {
    if current == QuotationStatus::Invoiced {
        return Err(CoreError::AlreadyInvoiced(quotation_id.to_string()));
    }

    Ok(match decision {
        ReviewDecision::Approve => QuotationStatus::Approved,
        ReviewDecision::Reject => QuotationStatus::Rejected,
    })
}

// =============================================================================
// Invoicing
// =============================================================================

/// Checks that an invoice may be generated from the current status.
///
/// Allowed from any status except `Invoiced`: the business invoices
/// straight from `pending` routinely, so the review step is advisory.
/// An invoiced quotation can never be invoiced a second time.
pub fn ensure_invoiceable(quotation_id: &str, current: QuotationStatus) -> CoreResult<()> {
    if current == QuotationStatus::Invoiced {
        return Err(CoreError::AlreadyInvoiced(quotation_id.to_string()));
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_overwrites_status() {
        let status = review("q1", QuotationStatus::Pending, ReviewDecision::Approve).unwrap();
        assert_eq!(status, QuotationStatus::Approved);

        let status = review("q1", QuotationStatus::Pending, ReviewDecision::Reject).unwrap();
        assert_eq!(status, QuotationStatus::Rejected);

        // direct overwrite: a rejected quotation can still be approved
        let status = review("q1", QuotationStatus::Rejected, ReviewDecision::Approve).unwrap();
        assert_eq!(status, QuotationStatus::Approved);
    }

    #[test]
    fn test_review_refused_once_invoiced() {
        let err = review("q1", QuotationStatus::Invoiced, ReviewDecision::Approve).unwrap_err();
        assert!(matches!(err, CoreError::AlreadyInvoiced(id) if id == "q1"));
    }

    #[test]
    fn test_invoiceable_from_any_non_invoiced_status() {
        assert!(ensure_invoiceable("q1", QuotationStatus::Pending).is_ok());
        assert!(ensure_invoiceable("q1", QuotationStatus::Approved).is_ok());
        assert!(ensure_invoiceable("q1", QuotationStatus::Rejected).is_ok());
    }

    #[test]
    fn test_invoicing_twice_is_refused() {
        let err = ensure_invoiceable("q1", QuotationStatus::Invoiced).unwrap_err();
        assert!(matches!(err, CoreError::AlreadyInvoiced(id) if id == "q1"));
    }
}
