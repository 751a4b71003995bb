//! # Operation Error Types
//!
//! The error surface callers of the operations layer see.
//!
//! ## Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      What Can Go Wrong                                  │
//! │                                                                         │
//! │  Core(..)            validation / not-found / stock / lifecycle        │
//! │                      failures - raised BEFORE any write, zero records  │
//! │                      persisted                                          │
//! │                                                                         │
//! │  Store(..)           I/O failure from the document store - the failed  │
//! │                      call persisted nothing                             │
//! │                                                                         │
//! │  Forbidden           role gate refused a destructive action             │
//! │                                                                         │
//! │  PartialInvoice      THE partial-write case: the invoice exists but    │
//! │                      the quotation never flipped to invoiced. Distinct │
//! │                      from a plain failure because data WAS written;    │
//! │                      carries both ids for manual reconciliation.       │
//! │                                                                         │
//! │  Everything is recoverable at the call site; nothing retries            │
//! │  automatically - the user resubmits.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use volt_core::error::CoreError;
use volt_core::types::Role;
use volt_store::error::StoreError;

/// Operation-layer errors.
#[derive(Debug, Error)]
pub enum OpsError {
    /// Business rule violation from volt-core (nothing was written).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Document store failure (the failed call wrote nothing).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The current user's role may not perform this action.
    #[error("{role:?} role may not {action}")]
    Forbidden { role: Role, action: String },

    /// Consistency warning: the invoice was created but the quotation
    /// could not be marked invoiced afterwards.
    ///
    /// ## Why a Separate Variant
    /// The two writes of invoice generation are not atomic. When the
    /// second one fails the system holds an invoice whose quotation still
    /// looks open - that must surface differently from "nothing happened",
    /// with both ids attached, so someone can reconcile by hand.
    #[error(
        "invoice {invoice_id} was created but quotation {quotation_id} \
         could not be marked invoiced: {source}"
    )]
    PartialInvoice {
        invoice_id: String,
        quotation_id: String,
        source: StoreError,
    },
}

impl From<volt_core::error::ValidationError> for OpsError {
    fn from(err: volt_core::error::ValidationError) -> Self {
        OpsError::Core(CoreError::Validation(err))
    }
}

/// Result type for operations.
pub type OpsResult<T> = Result<T, OpsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_invoice_message_names_both_ids() {
        let err = OpsError::PartialInvoice {
            invoice_id: "inv-1".to_string(),
            quotation_id: "q-1".to_string(),
            source: StoreError::not_found("quotations", "q-1"),
        };
        let message = err.to_string();
        assert!(message.contains("inv-1"));
        assert!(message.contains("q-1"));
    }

    #[test]
    fn test_forbidden_message() {
        let err = OpsError::Forbidden {
            role: Role::Employee,
            action: "delete customers".to_string(),
        };
        assert_eq!(err.to_string(), "Employee role may not delete customers");
    }
}
