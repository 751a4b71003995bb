//! # Error Types
//!
//! Domain-specific error types for volt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  volt-core errors (this file)                                          │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  volt-store errors (separate crate)                                    │
//! │  └── StoreError       - Document store failures                        │
//! │                                                                         │
//! │  volt-ops errors (separate crate)                                      │
//! │  └── OpsError         - Operation failures, role gates, partial writes │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → OpsError → caller                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, available stock, etc.)
//! 3. Errors are enum variants, never String
//! 4. Every error is recoverable at the call site; nothing here panics

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations. All of them are raised
/// BEFORE anything is persisted, so a failed operation leaves no record
/// behind (the one exception, a partially written invoice, lives in
/// volt-ops as its own variant).
#[derive(Debug, Error)]
pub enum CoreError {
    /// A quotation line references a product id that does not resolve.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Requested quantity exceeds the product's available stock.
    ///
    /// ## When This Occurs
    /// - Pricing a quotation line with quantity > quantity-on-hand
    ///
    /// ## User Workflow
    /// ```text
    /// Add line (qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Crompton 5HP Motor", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// UI shows: "Only 3 Crompton 5HP Motor in stock"
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// A quotation must carry at least one line item.
    #[error("Quotation has no line items")]
    EmptyQuotation,

    /// Customer referenced by a quotation does not exist.
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// Quotation referenced by an operation does not exist.
    #[error("Quotation not found: {0}")]
    QuotationNotFound(String),

    /// The quotation was already turned into an invoice.
    ///
    /// ## When This Occurs
    /// - A second generate-invoice attempt on the same quotation
    /// - Approve/reject on a quotation that is already immutable
    #[error("Quotation {0} is already invoiced")]
    AlreadyInvoiced(String),

    /// An inventory adjustment would drive quantity-on-hand below zero.
    /// The stored quantity is left unchanged.
    #[error("Adjustment of {delta} would leave {name} at negative stock (current {current})")]
    NegativeStock {
        name: String,
        current: i64,
        delta: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements. Used for early
/// validation before business logic runs, so a bad form submission never
/// reaches the store.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            name: "Crompton 5HP Motor".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Crompton 5HP Motor: available 3, requested 5"
        );

        let err = CoreError::AlreadyInvoiced("q-123".to_string());
        assert_eq!(err.to_string(), "Quotation q-123 is already invoiced");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "invoice number".to_string(),
        };
        assert_eq!(err.to_string(), "invoice number is required");

        let err = ValidationError::MustBeNonNegative {
            field: "amount".to_string(),
        };
        assert_eq!(err.to_string(), "amount must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
