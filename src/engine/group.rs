// ============================================================================
// Group Transcription
// Six-digit block to Thai text, with the irregular tens/ones forms
// ============================================================================

use crate::domain::lexicon::{
    digit_word, unit_word, AND_ONE, STANDALONE_TEN, STANDALONE_TWENTY,
};
use crate::numeric::DigitGroup;

/// Spoken form of one digit at one position within a group.
///
/// Decision table:
/// ```text
/// position  digit  tens digit   form
/// --------  -----  ----------   ----------------
/// any       0      -            Silent
/// 1         1      -            StandaloneTen     สิบ
/// 1         2      -            StandaloneTwenty  ยี่สิบ
/// 0         1      nonzero      AndOne            เอ็ด
/// otherwise                     Plain             digit word + unit word
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitForm {
    Silent,
    StandaloneTen,
    StandaloneTwenty,
    AndOne,
    Plain { digit: u8, position: usize },
}

impl DigitForm {
    /// Classify `digit` at `position`, given the tens digit of the same group.
    pub fn classify(digit: u8, position: usize, tens_digit: u8) -> Self {
        match (position, digit) {
            (_, 0) => DigitForm::Silent,
            (1, 1) => DigitForm::StandaloneTen,
            (1, 2) => DigitForm::StandaloneTwenty,
            (0, 1) if tens_digit != 0 => DigitForm::AndOne,
            _ => DigitForm::Plain { digit, position },
        }
    }

    /// Append the Thai text of this form to `out`.
    pub fn write_to(self, out: &mut String) {
        match self {
            DigitForm::Silent => {}
            DigitForm::StandaloneTen => out.push_str(STANDALONE_TEN),
            DigitForm::StandaloneTwenty => out.push_str(STANDALONE_TWENTY),
            DigitForm::AndOne => out.push_str(AND_ONE),
            DigitForm::Plain { digit, position } => {
                out.push_str(digit_word(digit));
                out.push_str(unit_word(position));
            }
        }
    }
}

/// Append the text of `group` to `out`. An all-zero group writes nothing.
pub(crate) fn write_group(group: &DigitGroup, out: &mut String) {
    let tens_digit = group.digit_at(1);
    for (position, digit) in group.positions() {
        DigitForm::classify(digit, position, tens_digit).write_to(out);
    }
}

/// Transcribe a group value in `1..1_000_000`.
///
/// Returns `None` for zero or values of one million and above, which have no
/// group text of their own.
///
/// # Example
/// ```
/// use thai_baht_text::engine::transcribe_group;
///
/// assert_eq!(transcribe_group(121).as_deref(), Some("หนึ่งร้อยยี่สิบเอ็ด"));
/// assert_eq!(transcribe_group(1_000_000), None);
/// ```
pub fn transcribe_group(n: u32) -> Option<String> {
    if n == 0 {
        return None;
    }

    let group = DigitGroup::new(n)?;
    let mut out = String::new();
    write_group(&group, &mut out);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(n: u32) -> String {
        transcribe_group(n).unwrap()
    }

    #[test]
    fn test_classify_table() {
        assert_eq!(DigitForm::classify(0, 3, 5), DigitForm::Silent);
        assert_eq!(DigitForm::classify(1, 1, 1), DigitForm::StandaloneTen);
        assert_eq!(DigitForm::classify(2, 1, 2), DigitForm::StandaloneTwenty);
        assert_eq!(DigitForm::classify(1, 0, 3), DigitForm::AndOne);
        assert_eq!(
            DigitForm::classify(1, 0, 0),
            DigitForm::Plain {
                digit: 1,
                position: 0
            }
        );
        assert_eq!(
            DigitForm::classify(3, 1, 3),
            DigitForm::Plain {
                digit: 3,
                position: 1
            }
        );
        // Irregular tens forms apply to the tens place only
        assert_eq!(
            DigitForm::classify(2, 4, 0),
            DigitForm::Plain {
                digit: 2,
                position: 4
            }
        );
    }

    #[test]
    fn test_single_digits() {
        assert_eq!(group(1), "หนึ่ง");
        assert_eq!(group(5), "ห้า");
        assert_eq!(group(9), "เก้า");
    }

    #[test]
    fn test_tens() {
        assert_eq!(group(10), "สิบ");
        assert_eq!(group(11), "สิบเอ็ด");
        assert_eq!(group(19), "สิบเก้า");
        assert_eq!(group(20), "ยี่สิบ");
        assert_eq!(group(21), "ยี่สิบเอ็ด");
        assert_eq!(group(30), "สามสิบ");
        assert_eq!(group(45), "สี่สิบห้า");
    }

    #[test]
    fn test_one_after_zero_tens_is_plain() {
        assert_eq!(group(101), "หนึ่งร้อยหนึ่ง");
        assert_eq!(group(10_001), "หนึ่งหมื่นหนึ่ง");
        assert_eq!(group(111), "หนึ่งร้อยสิบเอ็ด");
    }

    #[test]
    fn test_full_group() {
        assert_eq!(group(999_999), "เก้าแสนเก้าหมื่นเก้าพันเก้าร้อยเก้าสิบเก้า");
        assert_eq!(
            group(111_111),
            "หนึ่งแสนหนึ่งหมื่นหนึ่งพันหนึ่งร้อยสิบเอ็ด"
        );
        assert_eq!(group(220_022), "สองแสนสองหมื่นยี่สิบสอง");
    }

    #[test]
    fn test_out_of_range_group() {
        assert_eq!(transcribe_group(0), None);
        assert_eq!(transcribe_group(1_000_000), None);
        assert_eq!(transcribe_group(u32::MAX), None);
    }

    #[test]
    fn test_all_zero_group_writes_nothing() {
        let mut out = String::new();
        write_group(&DigitGroup::low_of(7_000_000), &mut out);
        assert!(out.is_empty());
    }
}
