//! # Validation Module
//!
//! Input validation utilities for VoltDesk.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Dashboard forms (out of scope here)                          │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE, called by the operations layer                  │
//! │  ├── Runs BEFORE any write reaches the store                           │
//! │  └── A failed check means zero records were persisted                  │
//! │                                                                         │
//! │  There is no Layer 3: the document store enforces nothing. Every       │
//! │  invariant the data carries is enforced right here.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_ITEM_QUANTITY, MAX_NOTES_LEN, MAX_TEXT_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required free-text field (name, address, make, etc.).
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    // the cap is in characters (the error message says so), not bytes
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_LEN,
        });
    }

    Ok(())
}

/// Validates an optional free-text field (notes, scope, warranty).
///
/// Empty / absent is fine; present values only get a length cap.
pub fn validate_notes(field: &str, value: Option<&str>) -> ValidationResult<()> {
    if let Some(value) = value {
        if value.chars().count() > MAX_NOTES_LEN {
            return Err(ValidationError::TooLong {
                field: field.to_string(),
                max: MAX_NOTES_LEN,
            });
        }
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Required, at most 200 characters
/// - Must contain a single `@` with text on both sides
///
/// Intentionally loose: real verification happens when mail is sent.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    validate_required("email", email)?;

    let email = email.trim();
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@example.com".to_string(),
        });
    }

    Ok(())
}

/// Validates a phone number.
///
/// ## Rules
/// - Required
/// - Digits, spaces, `+`, `-`, parentheses only
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    validate_required("phone", phone)?;

    if !phone
        .trim()
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
    {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain only digits, spaces, +, - and parentheses".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line-item quantity.
///
/// ## Rules
/// - Must be a positive integer (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY
///
/// Stock availability is a separate check in the pricing calculator; this
/// only catches nonsense input (0, negative, fat-fingered huge numbers).
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in paise.
///
/// ## Rules
/// - Must be non-negative (>= 0); zero is allowed (free items)
pub fn validate_price_paise(paise: i64) -> ValidationResult<()> {
    if paise < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity-on-hand value (direct edit, not adjustment).
///
/// ## Rules
/// - Must be non-negative (>= 0)
pub fn validate_stock_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates an additional (non-product) invoice charge amount in paise.
///
/// ## Rules
/// - Must be non-negative (>= 0)
pub fn validate_additional_amount(paise: i64) -> ValidationResult<()> {
    if paise < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "amount".to_string(),
        });
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
    fn test_validate_required() {
        assert!(validate_required("name", "Sharma Electricals").is_ok());
        assert!(validate_required("name", "").is_err());
        assert!(validate_required("name", "   ").is_err());
        assert!(validate_required("name", &"A".repeat(300)).is_err());
    }

    #[test]
    fn test_length_cap_counts_characters_not_bytes() {
        // multi-byte characters: 200 chars is fine even at 600 bytes
        assert!(validate_required("name", &"₹".repeat(MAX_TEXT_LEN)).is_ok());
        assert!(validate_required("name", &"₹".repeat(MAX_TEXT_LEN + 1)).is_err());

        assert!(validate_notes("notes", Some(&"₹".repeat(MAX_NOTES_LEN))).is_ok());
        assert!(validate_notes("notes", Some(&"₹".repeat(MAX_NOTES_LEN + 1))).is_err());
    }

    #[test]
    fn test_validate_notes() {
        assert!(validate_notes("notes", None).is_ok());
        assert!(validate_notes("notes", Some("panel wiring only")).is_ok());
        assert!(validate_notes("notes", Some(&"A".repeat(2000))).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("accounts@sharma.example").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("name@").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+91 98765 43210").is_ok());
        assert!(validate_phone("(040) 2345-6789").is_ok());
        assert!(validate_phone("").is_err());
        assert!(validate_phone("call me").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(120).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(MAX_ITEM_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_validate_price_paise() {
        assert!(validate_price_paise(0).is_ok());
        assert!(validate_price_paise(8500).is_ok());
        assert!(validate_price_paise(-100).is_err());
    }

    #[test]
    fn test_validate_additional_amount() {
        assert!(validate_additional_amount(0).is_ok());
        assert!(validate_additional_amount(7500).is_ok());
        assert!(validate_additional_amount(-1).is_err());
    }
}
