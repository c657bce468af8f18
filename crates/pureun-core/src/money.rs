//! # Money Module
//!
//! Provides the `Money` type for handling won amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floating point prices:                                            │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  KRW has no minor unit, so every price in the catalog is already a      │
//! │  whole number of won. Keeping it as an integer means:                   │
//! │    3 nights × 100,000원 + 2 × 20,000원 = 340,000원  (exact)            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pureun_core::money::Money;
//!
//! let nightly = Money::from_won(100_000);
//! let stay = nightly.multiply_quantity(3);
//! let total = stay + Money::from_won(40_000);
//! assert_eq!(total.won(), 340_000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole won.
///
/// ## Design Decisions
/// - **i64 (signed)**: nights arithmetic on an inverted range yields a
///   negative subtotal; the type can represent it so callers can detect it
/// - **Newtype serde**: serialises as a bare number, the same shape the
///   remote catalog sends (`"optionPrice": 20000`)
///
/// ## Where Money is Used
/// ```text
/// ProductDetails.nightly_price ──► nights × rate ──► product_subtotal ──┐
///                                                                       ├─► grand_total
/// OptionItem.unit_price ──► LedgerEntry.unit_price ──► line_total ──────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole won.
    ///
    /// ## Example
    /// ```rust
    /// use pureun_core::money::Money;
    ///
    /// let price = Money::from_won(20_000);
    /// assert_eq!(price.won(), 20_000);
    /// ```
    #[inline]
    pub const fn from_won(won: i64) -> Self {
        Money(won)
    }

    /// Returns the value in whole won.
    #[inline]
    pub const fn won(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
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

    /// Multiplies money by a quantity (nights, option count).
    ///
    /// ## Example
    /// ```rust
    /// use pureun_core::money::Money;
    ///
    /// let unit_price = Money::from_won(15_000);
    /// assert_eq!(unit_price.multiply_quantity(3).won(), 45_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Formats the amount with comma thousands separators, no unit.
    ///
    /// ## Example
    /// ```rust
    /// use pureun_core::money::Money;
    ///
    /// assert_eq!(Money::from_won(340_000).grouped(), "340,000");
    /// assert_eq!(Money::from_won(-1_500).grouped(), "-1,500");
    /// ```
    pub fn grouped(&self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if self.0 < 0 {
            out.push('-');
        }
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount as `340,000원`.
///
/// ## Note
/// The booking layer formats with the configured currency unit; this
/// impl is for logs and debugging.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}원", self.grouped())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0 * i64::from(qty))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
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
    fn test_from_won() {
        let money = Money::from_won(20_000);
        assert_eq!(money.won(), 20_000);
        assert!(!money.is_zero());
        assert!(!money.is_negative());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_won(340_000)), "340,000원");
        assert_eq!(format!("{}", Money::from_won(0)), "0원");
        assert_eq!(format!("{}", Money::from_won(999)), "999원");
        assert_eq!(format!("{}", Money::from_won(1_000)), "1,000원");
        assert_eq!(format!("{}", Money::from_won(-100_000)), "-100,000원");
    }

    #[test]
    fn test_grouped_large() {
        assert_eq!(Money::from_won(1_234_567_890).grouped(), "1,234,567,890");
        assert_eq!(Money::from_won(100).grouped(), "100");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_won(1_000);
        let b = Money::from_won(500);

        assert_eq!((a + b).won(), 1_500);
        assert_eq!((a - b).won(), 500);
        assert_eq!((a * 3_i64).won(), 3_000);
        assert_eq!((a * 2_u32).won(), 2_000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [20_000, 15_000, 5_000]
            .into_iter()
            .map(Money::from_won)
            .sum();
        assert_eq!(total.won(), 40_000);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_serde_is_bare_number() {
        let json = serde_json::to_string(&Money::from_won(20_000)).unwrap();
        assert_eq!(json, "20000");

        let back: Money = serde_json::from_str("15000").unwrap();
        assert_eq!(back, Money::from_won(15_000));
    }
}
