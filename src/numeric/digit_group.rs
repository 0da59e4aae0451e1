// ============================================================================
// Digit Group
// Six-digit block below one million, most-significant digit first
// ============================================================================

use std::fmt;

/// Width of a group in decimal digits
pub const GROUP_WIDTH: usize = 6;

/// Exclusive upper bound of a group value (one million)
pub const GROUP_RADIX: u32 = 1_000_000;

/// A block of six decimal digits, most significant first.
///
/// Index 0 holds the hundred-thousands digit and index 5 the ones digit, so
/// the positional unit of index `i` is `GROUP_WIDTH - 1 - i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitGroup([u8; GROUP_WIDTH]);

impl DigitGroup {
    /// Decompose `value` into six digits.
    ///
    /// Returns `None` if `value` does not fit in a group.
    pub fn new(value: u32) -> Option<Self> {
        (value < GROUP_RADIX).then(|| Self::low_of(u128::from(value)))
    }

    /// The lowest six digits of `value` (`value % 1_000_000`).
    pub fn low_of(value: u128) -> Self {
        let mut digits = [0u8; GROUP_WIDTH];
        let mut rest = value % u128::from(GROUP_RADIX);
        for slot in digits.iter_mut().rev() {
            *slot = (rest % 10) as u8;
            rest /= 10;
        }
        Self(digits)
    }

    /// Digits, most significant first.
    #[inline]
    pub const fn digits(&self) -> &[u8; GROUP_WIDTH] {
        &self.0
    }

    /// Digit at positional unit `position` (0 = ones ... 5 = hundred-thousands).
    #[inline]
    pub fn digit_at(&self, position: usize) -> u8 {
        self.0[GROUP_WIDTH - 1 - position]
    }

    /// Iterate `(position, digit)` pairs from hundred-thousands down to ones.
    pub fn positions(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(index, &digit)| (GROUP_WIDTH - 1 - index, digit))
    }
}

impl fmt::Display for DigitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.0 {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose() {
        let g = DigitGroup::new(123_456).unwrap();
        assert_eq!(g.digits(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(g.digit_at(0), 6);
        assert_eq!(g.digit_at(5), 1);
    }

    #[test]
    fn test_leading_zeros() {
        let g = DigitGroup::new(21).unwrap();
        assert_eq!(g.digits(), &[0, 0, 0, 0, 2, 1]);
        assert_eq!(g.digit_at(1), 2);
        assert_eq!(g.to_string(), "000021");
    }

    #[test]
    fn test_positions_order() {
        let g = DigitGroup::new(905_001).unwrap();
        let positions: Vec<_> = g.positions().collect();
        assert_eq!(
            positions,
            vec![(5, 9), (4, 0), (3, 5), (2, 0), (1, 0), (0, 1)]
        );
    }

    #[test]
    fn test_low_of() {
        let g = DigitGroup::low_of(987_654_321);
        assert_eq!(g.digits(), &[6, 5, 4, 3, 2, 1]);
        assert_eq!(DigitGroup::low_of(5_000_000).digits(), &[0; GROUP_WIDTH]);
    }

    #[test]
    fn test_out_of_range() {
        assert!(DigitGroup::new(GROUP_RADIX).is_none());
        assert!(DigitGroup::new(999_999).is_some());
        assert_eq!(DigitGroup::new(0).unwrap().digits(), &[0; GROUP_WIDTH]);
    }
}
