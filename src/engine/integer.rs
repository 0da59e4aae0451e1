// ============================================================================
// Integer Transcription
// Whole numbers of any magnitude via the recursive "million" multiplier
// ============================================================================

use super::group::write_group;
use crate::domain::lexicon::{digit_word, MILLION_WORD};
use crate::numeric::{DigitGroup, GROUP_RADIX};

/// Append the text of `n` (n > 0) to `out`.
///
/// The part above one million is itself transcribed recursively and followed
/// by ล้าน, so only six positional unit words are ever needed.
pub(crate) fn write_integer(n: u128, out: &mut String) {
    let radix = u128::from(GROUP_RADIX);
    let millions = n / radix;
    if millions > 0 {
        write_integer(millions, out);
        out.push_str(MILLION_WORD);
    }
    write_group(&DigitGroup::low_of(n), out);
}

/// Transcribe a non-negative integer into Thai numerals.
///
/// Zero is spelled ศูนย์; every other value omits zero digits entirely.
///
/// # Example
/// ```
/// use thai_baht_text::engine::transcribe_integer;
///
/// assert_eq!(transcribe_integer(0), "ศูนย์");
/// assert_eq!(transcribe_integer(21), "ยี่สิบเอ็ด");
/// assert_eq!(transcribe_integer(1_000_000_000), "หนึ่งพันล้าน");
/// ```
pub fn transcribe_integer(n: u128) -> String {
    let mut out = String::new();
    if n == 0 {
        out.push_str(digit_word(0));
    } else {
        write_integer(n, &mut out);
    }
    out
}
