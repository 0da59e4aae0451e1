// ============================================================================
// Thai Lexicon
// Read-only word tables for digits, positional units and currency
// ============================================================================

/// Digit words, indexed by digit value 0-9.
pub static DIGIT_WORDS: [&str; 10] = [
    "ศูนย์", "หนึ่ง", "สอง", "สาม", "สี่", "ห้า", "หก", "เจ็ด", "แปด", "เก้า",
];

/// Positional unit words within a six-digit group.
///
/// Index 0 is the ones place (no unit word), index 5 the hundred-thousands.
pub static UNIT_WORDS: [&str; 6] = ["", "สิบ", "ร้อย", "พัน", "หมื่น", "แสน"];

/// Multiplier appended after each transcribed millions group.
pub const MILLION_WORD: &str = "ล้าน";

/// Tens place holding 1.
pub const STANDALONE_TEN: &str = "สิบ";

/// Tens place holding 2.
pub const STANDALONE_TWENTY: &str = "ยี่สิบ";

/// Ones place holding 1 after a nonzero tens digit.
pub const AND_ONE: &str = "เอ็ด";

pub const BAHT_WORD: &str = "บาท";

/// Suffix for amounts with no satang ("exact").
pub const EVEN_WORD: &str = "ถ้วน";

pub const SATANG_WORD: &str = "สตางค์";

/// Word for a digit value.
///
/// # Panics
/// Panics if `digit > 9`.
#[inline]
pub fn digit_word(digit: u8) -> &'static str {
    DIGIT_WORDS[usize::from(digit)]
}

/// Unit word for a position inside a group.
///
/// # Panics
/// Panics if `position > 5`.
#[inline]
pub fn unit_word(position: usize) -> &'static str {
    UNIT_WORDS[position]
}
