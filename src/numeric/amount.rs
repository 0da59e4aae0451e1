// ============================================================================
// Amount Value
// Exact split of a decimal amount into whole baht and satang
// ============================================================================

use super::errors::{TranscribeError, TranscribeResult};
use crate::domain::config::CentsRounding;
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Satang per baht
pub const SATANG_PER_BAHT: u128 = 100;

/// Number of fractional digits kept from the input amount
const SATANG_DIGITS: u32 = 2;

/// A validated, non-negative monetary amount.
///
/// Holds the integer magnitude (`baht`) and exactly two fractional digits
/// (`satang`, always in `0..=99`). Built from a [`Decimal`] so that the split
/// never goes through floating point.
///
/// # Example
/// ```
/// use thai_baht_text::numeric::AmountValue;
/// use thai_baht_text::domain::CentsRounding;
/// use rust_decimal::Decimal;
///
/// let amount = AmountValue::from_decimal(Decimal::new(123456, 2), CentsRounding::Truncate)?;
/// assert_eq!(amount.baht(), 1234);
/// assert_eq!(amount.satang(), 56);
/// # Ok::<(), thai_baht_text::numeric::TranscribeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AmountValue {
    baht: u128,
    satang: u8,
}

impl AmountValue {
    /// Zero baht, zero satang
    pub const ZERO: Self = Self { baht: 0, satang: 0 };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from whole baht and satang.
    ///
    /// Satang above 99 carry into baht.
    #[inline]
    pub const fn from_parts(baht: u128, satang: u8) -> Self {
        Self {
            baht: baht + (satang as u128) / SATANG_PER_BAHT,
            satang: ((satang as u128) % SATANG_PER_BAHT) as u8,
        }
    }

    /// Split a decimal amount into baht and satang.
    ///
    /// Sub-satang precision is dropped according to `rounding`. A carry out of
    /// the satang digits (e.g. 0.995 rounded half away from zero) lands in
    /// `baht`.
    ///
    /// # Errors
    /// Returns `NegativeAmount` if `value` is below zero. Negative zero is
    /// accepted and yields [`AmountValue::ZERO`].
    pub fn from_decimal(value: Decimal, rounding: CentsRounding) -> TranscribeResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(TranscribeError::NegativeAmount);
        }

        // Scale is at most SATANG_DIGITS after this
        let rounded = value.round_dp_with_strategy(SATANG_DIGITS, rounding.strategy());

        // |mantissa| < 2^96, so scaling up by at most 100 stays within u128
        let mantissa = rounded.mantissa().unsigned_abs();
        let missing_digits = SATANG_DIGITS.saturating_sub(rounded.scale());
        let total_satang = mantissa * 10u128.pow(missing_digits);

        Ok(Self {
            baht: total_satang / SATANG_PER_BAHT,
            satang: (total_satang % SATANG_PER_BAHT) as u8,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Whole baht (integer part of the amount).
    #[inline]
    pub const fn baht(self) -> u128 {
        self.baht
    }

    /// Satang (two fractional digits), in `0..=99`.
    #[inline]
    pub const fn satang(self) -> u8 {
        self.satang
    }

    /// True when the amount has no satang part.
    #[inline]
    pub const fn is_whole(self) -> bool {
        self.satang == 0
    }
}

impl fmt::Display for AmountValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.baht, self.satang)
    }
}

// ============================================================================
// Tests
// ============================================================================
