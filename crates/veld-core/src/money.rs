//! # Money Module
//!
//! Provides the `Money` type for handling ZAR monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A storefront that computes totals in floats drifts at cent level       │
//! │  across subtotal + shipping + VAT.                                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    R955.00 is stored as 95500 cents (i64)                               │
//! │    Every invariant in checkout holds EXACTLY                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use veld_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(10999); // R109.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;
//! let total = price + Money::from_cents(500);
//!
//! // Parse user/CSV input exactly (no floats involved)
//! let parsed = Money::parse("199.99").unwrap();
//! assert_eq!(parsed.cents(), 19999);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (ZAR cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// Product.price_cents ──► CartItem.unit_price_cents ──► line_total
///                                       │
///                                       ▼
/// subtotal ──► shipping rule ──► VAT ──► Order.total_cents
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use veld_core::money::Money;
    ///
    /// let price = Money::from_cents(10999); // Represents R109.99
    /// assert_eq!(price.cents(), 10999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (rand and cents).
    ///
    /// ## Example
    /// ```rust
    /// use veld_core::money::Money;
    ///
    /// let price = Money::from_rand(109, 99); // R109.99
    /// assert_eq!(price.cents(), 10999);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_rand(-5, 50)` = -R5.50, not -R4.50
    #[inline]
    pub const fn from_rand(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Parses a decimal string ("199.99") into cents exactly.
    ///
    /// ## Rules
    /// - Optional leading `R` and surrounding whitespace are tolerated
    /// - At most two decimal places ("1.999" is rejected, not rounded)
    /// - No floats anywhere in the path
    ///
    /// ## Example
    /// ```rust
    /// use veld_core::money::Money;
    ///
    /// assert_eq!(Money::parse("955").unwrap().cents(), 95500);
    /// assert_eq!(Money::parse("R955.00").unwrap().cents(), 95500);
    /// assert_eq!(Money::parse("0.5").unwrap().cents(), 50);
    /// assert!(Money::parse("1.999").is_err());
    /// assert!(Money::parse("abc").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let s = input.trim().trim_start_matches('R').trim();
        let invalid = || ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "must be a decimal amount like 199.99".to_string(),
        };

        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "price".to_string(),
            });
        }

        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (major_str, minor_str) = match s.split_once('.') {
            Some((_, "")) => return Err(invalid()),
            Some((major, minor)) => (major, minor),
            None => (s, ""),
        };

        if major_str.is_empty() || !major_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        if minor_str.len() > 2 || !minor_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let major: i64 = major_str.parse().map_err(|_| invalid())?;
        // "5" → 50 cents, "05" → 5 cents
        let minor: i64 = if minor_str.is_empty() {
            0
        } else {
            let parsed: i64 = minor_str.parse().map_err(|_| invalid())?;
            if minor_str.len() == 1 {
                parsed * 10
            } else {
                parsed
            }
        };

        let cents = major * 100 + minor;
        Ok(Money(if negative { -cents } else { cents }))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (rand) portion.
    #[inline]
    pub const fn rand_part(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies a rate given in basis points, rounding half up to the cent.
    ///
    /// ## Rounding
    /// Integer math only: `(cents × bps + 5000) / 10000`. The `+5000`
    /// provides half-up rounding (5000/10000 = 0.5). i128 intermediates
    /// prevent overflow on large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use veld_core::money::Money;
    /// use veld_core::VAT_RATE_BPS;
    ///
    /// let subtotal = Money::from_cents(70_000); // R700.00
    /// let vat = subtotal.apply_rate(VAT_RATE_BPS); // 15%
    /// assert_eq!(vat.cents(), 10_500); // R105.00 exactly
    /// ```
    pub fn apply_rate(&self, bps: u32) -> Money {
        let cents = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use veld_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(10_000); // R100.00
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.cents(), 20_000); // R200.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money as `R955.00`.
///
/// Fixed two-decimal rendering, as the storefront displays all amounts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}R{}.{:02}", sign, self.rand_part().abs(), self.cents_part())
    }
}

/// Default money is zero.
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

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VAT_RATE_BPS;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(10999);
        assert_eq!(money.cents(), 10999);
        assert_eq!(money.rand_part(), 109);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_rand() {
        let money = Money::from_rand(109, 99);
        assert_eq!(money.cents(), 10999);

        let negative = Money::from_rand(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(95500)), "R955.00");
        assert_eq!(format!("{}", Money::from_cents(500)), "R5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-R5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "R0.00");
    }

    #[test]
    fn test_parse_whole_and_decimal() {
        assert_eq!(Money::parse("955").unwrap().cents(), 95500);
        assert_eq!(Money::parse("955.00").unwrap().cents(), 95500);
        assert_eq!(Money::parse("199.99").unwrap().cents(), 19999);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse("0.5").unwrap().cents(), 50);
        assert_eq!(Money::parse("R150.00").unwrap().cents(), 15000);
        assert_eq!(Money::parse("-12.34").unwrap().cents(), -1234);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.999").is_err());
        assert!(Money::parse("1.").is_err());
        assert!(Money::parse(".99").is_err());
        assert!(Money::parse("1,99").is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_vat_on_spec_scenarios() {
        // R700.00 at 15% = R105.00 exactly
        let subtotal = Money::from_cents(70_000);
        assert_eq!(subtotal.apply_rate(VAT_RATE_BPS).cents(), 10_500);

        // R2000.00 at 15% = R300.00 exactly
        let subtotal = Money::from_cents(200_000);
        assert_eq!(subtotal.apply_rate(VAT_RATE_BPS).cents(), 30_000);
    }

    #[test]
    fn test_vat_rounds_half_up() {
        // 3 cents at 15% = 0.45 cents → 0; 7 cents at 15% = 1.05 → 1
        assert_eq!(Money::from_cents(3).apply_rate(VAT_RATE_BPS).cents(), 0);
        assert_eq!(Money::from_cents(7).apply_rate(VAT_RATE_BPS).cents(), 1);
        // Exactly half a cent rounds up: 10 cents * 15% = 1.5 → 2
        assert_eq!(Money::from_cents(10).apply_rate(VAT_RATE_BPS).cents(), 2);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(positive.is_positive());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(10_000);
        assert_eq!(unit_price.multiply_quantity(2).cents(), 20_000);
    }
}
