// ============================================================================
// Baht Transcriber
// Decimal amount to "<baht>บาท<satang>สตางค์" / "<baht>บาทถ้วน"
// ============================================================================

use super::integer::{transcribe_integer, write_integer};
use crate::domain::lexicon::{BAHT_WORD, EVEN_WORD, SATANG_WORD};
use crate::domain::{CentsRounding, TranscriberConfig};
use crate::numeric::{AmountValue, TranscribeResult};
use rust_decimal::Decimal;

/// Converts amounts into Thai baht text.
///
/// Holds only its configuration; every call is independent, so a single
/// transcriber can be shared freely between threads.
///
/// # Example
/// ```
/// use thai_baht_text::engine::BahtTranscriber;
/// use rust_decimal::Decimal;
///
/// let transcriber = BahtTranscriber::default();
/// let text = transcriber.transcribe(Decimal::new(123456, 2))?;
/// assert_eq!(text, "หนึ่งพันสองร้อยสามสิบสี่บาทห้าสิบหกสตางค์");
/// # Ok::<(), thai_baht_text::numeric::TranscribeError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BahtTranscriber {
    config: TranscriberConfig,
}

impl BahtTranscriber {
    pub fn new(config: TranscriberConfig) -> Self {
        Self { config }
    }

    /// Transcriber with the given rounding rule
    pub fn with_rounding(cents_rounding: CentsRounding) -> Self {
        Self::new(TranscriberConfig::new(cents_rounding))
    }

    /// Validate and split `value`, then transcribe it.
    ///
    /// # Errors
    /// Returns `NegativeAmount` for values below zero. Negative zero is
    /// transcribed as zero.
    pub fn transcribe(&self, value: Decimal) -> TranscribeResult<String> {
        let amount = AmountValue::from_decimal(value, self.config.cents_rounding)
            .inspect_err(|_| tracing::debug!(%value, "Rejected negative amount"))?;

        let text = self.transcribe_value(amount);
        tracing::trace!(%value, %amount, %text, "Transcribed amount");
        Ok(text)
    }

    /// Transcribe an already validated amount.
    pub fn transcribe_value(&self, amount: AmountValue) -> String {
        let mut out = transcribe_integer(amount.baht());
        out.push_str(BAHT_WORD);

        if amount.is_whole() {
            out.push_str(EVEN_WORD);
        } else {
            write_integer(u128::from(amount.satang()), &mut out);
            out.push_str(SATANG_WORD);
        }

        out
    }
}

/// Transcribe `value` with the default configuration (sub-satang digits
/// truncated).
///
/// # Example
/// ```
/// use thai_baht_text::engine::transcribe_amount;
/// use thai_baht_text::numeric::TranscribeError;
/// use rust_decimal::Decimal;
///
/// assert_eq!(transcribe_amount(Decimal::from(21)).unwrap(), "ยี่สิบเอ็ดบาทถ้วน");
/// assert_eq!(transcribe_amount(Decimal::from(-1)), Err(TranscribeError::NegativeAmount));
/// ```
pub fn transcribe_amount(value: Decimal) -> TranscribeResult<String> {
    BahtTranscriber::default().transcribe(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::TranscribeError;
    use proptest::prelude::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn baht(s: &str) -> String {
        transcribe_amount(dec(s)).unwrap()
    }

    #[test]
    fn test_zero() {
        assert_eq!(baht("0"), "ศูนย์บาทถ้วน");
        assert_eq!(baht("0.0"), "ศูนย์บาทถ้วน");
        assert_eq!(baht("0.00"), "ศูนย์บาทถ้วน");
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(baht("-0.00"), "ศูนย์บาทถ้วน");
        assert_eq!(
            transcribe_amount(-Decimal::ZERO).unwrap(),
            "ศูนย์บาทถ้วน"
        );
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(
            transcribe_amount(Decimal::from(-1)),
            Err(TranscribeError::NegativeAmount)
        );
        assert_eq!(
            transcribe_amount(dec("-999.99")),
            Err(TranscribeError::NegativeAmount)
        );
    }

    #[test]
    fn test_whole_amounts() {
        assert_eq!(baht("1"), "หนึ่งบาทถ้วน");
        assert_eq!(baht("11"), "สิบเอ็ดบาทถ้วน");
        assert_eq!(baht("21"), "ยี่สิบเอ็ดบาทถ้วน");
        assert_eq!(baht("100"), "หนึ่งร้อยบาทถ้วน");
        assert_eq!(baht("1000000"), "หนึ่งล้านบาทถ้วน");
    }

    #[test]
    fn test_satang() {
        assert_eq!(baht("0.1"), "ศูนย์บาทสิบสตางค์");
        assert_eq!(baht("0.01"), "ศูนย์บาทหนึ่งสตางค์");
        assert_eq!(baht("0.50"), "ศูนย์บาทห้าสิบสตางค์");
        assert_eq!(baht("1.23"), "หนึ่งบาทยี่สิบสามสตางค์");
        assert_eq!(baht("100.99"), "หนึ่งร้อยบาทเก้าสิบเก้าสตางค์");
        assert_eq!(baht("5.21"), "ห้าบาทยี่สิบเอ็ดสตางค์");
    }

    #[test]
    fn test_largest_fixture() {
        assert_eq!(
            baht("999999999.99"),
            "เก้าร้อยเก้าสิบเก้าล้านเก้าแสนเก้าหมื่นเก้าพันเก้าร้อยเก้าสิบเก้าบาทเก้าสิบเก้าสตางค์"
        );
    }

    #[test]
    fn test_truncation_default() {
        assert_eq!(baht("0.001"), "ศูนย์บาทถ้วน");
        assert_eq!(baht("100.0001"), "หนึ่งร้อยบาทถ้วน");
        assert_eq!(baht("42.123456"), "สี่สิบสองบาทสิบสองสตางค์");
        assert_eq!(baht("1.333333"), "หนึ่งบาทสามสิบสามสตางค์");
        assert_eq!(baht("1.23456789"), "หนึ่งบาทยี่สิบสามสตางค์");
        assert_eq!(baht("42.125"), "สี่สิบสองบาทสิบสองสตางค์");
        assert_eq!(baht("0.999"), "ศูนย์บาทเก้าสิบเก้าสตางค์");
    }

    #[test]
    fn test_half_away_from_zero() {
        let transcriber = BahtTranscriber::with_rounding(CentsRounding::HalfAwayFromZero);
        let round = |s: &str| transcriber.transcribe(dec(s)).unwrap();

        // Down
        assert_eq!(round("42.124"), "สี่สิบสองบาทสิบสองสตางค์");
        assert_eq!(round("0.001"), "ศูนย์บาทถ้วน");
        // Up
        assert_eq!(round("42.125"), "สี่สิบสองบาทสิบสามสตางค์");
        assert_eq!(round("0.995"), "หนึ่งบาทถ้วน");
        assert_eq!(round("999999.999"), "หนึ่งล้านบาทถ้วน");
    }

    #[test]
    fn test_transcribe_value() {
        let transcriber = BahtTranscriber::default();
        assert_eq!(
            transcriber.transcribe_value(AmountValue::from_parts(2020, 1)),
            "สองพันยี่สิบบาทหนึ่งสตางค์"
        );
    }

    proptest! {
        #[test]
        fn prop_negative_always_rejected(mantissa in 1i64..=i64::MAX, scale in 0u32..=10) {
            let value = -Decimal::new(mantissa, scale);
            prop_assert_eq!(transcribe_amount(value), Err(TranscribeError::NegativeAmount));
        }

        #[test]
        fn prop_whole_amounts_end_even(n in any::<u64>()) {
            let text = transcribe_amount(Decimal::from(n)).unwrap();
            prop_assert!(text.ends_with("บาทถ้วน"));
        }

        #[test]
        fn prop_satang_suffix(whole in 0u64..1_000_000_000, satang in 1i64..100) {
            let value = Decimal::from(whole) + Decimal::new(satang, 2);
            let text = transcribe_amount(value).unwrap();
            prop_assert!(text.ends_with(SATANG_WORD));
            prop_assert!(!text.contains(EVEN_WORD));
        }

        #[test]
        fn prop_idempotent(mantissa in 0i64..=i64::MAX, scale in 0u32..=8) {
            let value = Decimal::new(mantissa, scale);
            prop_assert_eq!(transcribe_amount(value), transcribe_amount(value));
        }
    }
}
