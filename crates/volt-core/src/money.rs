//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A quotation with 40 lines of Rs 33.33 each must total EXACTLY          │
//! │  Rs 1,333.20 - not "close enough". Customers check the arithmetic.     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    Every amount is an i64 count of paise (1/100 rupee).                 │
//! │    Addition and quantity multiplication are exact.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use volt_core::money::Money;
//!
//! // Create from paise (preferred)
//! let price = Money::from_paise(10050); // Rs 100.50
//!
//! // Arithmetic operations
//! let line = price.multiply_quantity(2);          // Rs 201.00
//! let total = line + Money::from_paise(7500);     // Rs 276.00
//!
//! // NEVER from floats - no such constructor exists.
//! ```
//!
//! Display is the single fixed formatting convention of the system
//! (`Rs 100.50`); any other locale handling belongs to the UI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in paise (the smallest currency unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values exist transiently (e.g., corrections)
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for document payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise.
    ///
    /// ## Example
    /// ```rust
    /// use volt_core::money::Money;
    ///
    /// let price = Money::from_paise(10050); // Rs 100.50
    /// assert_eq!(price.paise(), 10050);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from rupees and paise.
    ///
    /// For negative amounts only the rupee part carries the sign:
    /// `from_rupees_paise(-5, 50)` is Rs -5.50, not Rs -4.50.
    #[inline]
    pub const fn from_rupees_paise(rupees: i64, paise: i64) -> Self {
        if rupees < 0 {
            Money(rupees * 100 - paise)
        } else {
            Money(rupees * 100 + paise)
        }
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the fractional paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use volt_core::money::Money;
    ///
    /// let unit_price = Money::from_paise(10000); // Rs 100.00
    /// let subtotal = unit_price.multiply_quantity(2);
    /// assert_eq!(subtotal.paise(), 20000); // Rs 200.00
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Product: 4-core Cable  Rs 85.00/m
    /// Quantity: 120 m
    ///      │
    ///      ▼
    /// multiply_quantity(120) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line subtotal: Rs 10,200.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display in the fixed `Rs X.XX` convention.
///
/// This is the one formatting convention the system carries; anything
/// fancier (grouping, locale) is a UI concern.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}Rs {}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation of line subtotals into a grand total.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paise() {
        let money = Money::from_paise(10050);
        assert_eq!(money.paise(), 10050);
        assert_eq!(money.rupees(), 100);
        assert_eq!(money.paise_part(), 50);
    }

    #[test]
    fn test_from_rupees_paise() {
        let money = Money::from_rupees_paise(100, 50);
        assert_eq!(money.paise(), 10050);

        let negative = Money::from_rupees_paise(-5, 50);
        assert_eq!(negative.paise(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_paise(10050)), "Rs 100.50");
        assert_eq!(format!("{}", Money::from_paise(500)), "Rs 5.00");
        assert_eq!(format!("{}", Money::from_paise(-550)), "-Rs 5.50");
        assert_eq!(format!("{}", Money::from_paise(0)), "Rs 0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_paise(1000);
        let b = Money::from_paise(500);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!((a - b).paise(), 500);
        let result: Money = a * 3;
        assert_eq!(result.paise(), 3000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_paise(8500);
        let subtotal = unit_price.multiply_quantity(120);
        assert_eq!(subtotal.paise(), 1_020_000);
    }

    #[test]
    fn test_sum() {
        let subtotals = [
            Money::from_paise(20000),
            Money::from_paise(5000),
            Money::from_paise(7500),
        ];
        let total: Money = subtotals.into_iter().sum();
        assert_eq!(total.paise(), 32500);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let negative = Money::from_paise(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().paise(), 100);
    }
}
