// ============================================================================
// Addition Engine
// Sign-aware digit-wise addition with carry propagation
// ============================================================================

use super::alignment::align;
use super::canonicalize;
use super::subtraction::subtract_abs;
use crate::domain::{DigitVec, NumberRecord, Sign};
use smallvec::smallvec;

/// Add two records exactly.
///
/// Matching signs add magnitudes under the common sign. Opposite signs
/// delegate to absolute subtraction under the larger operand's sign, and a
/// magnitude tie collapses to a signed zero. A zero operand is neutral: it
/// joins the other operand's sign path, so `add(a, zero)` reproduces `a` at
/// the common precision. The result precision is the aligned common
/// precision.
pub fn add(a: &NumberRecord, b: &NumberRecord) -> NumberRecord {
    let aligned = align(a, b);

    let same_path = a.sign() == b.sign() || a.is_zero() || b.is_zero();
    if same_path {
        let digits = add_abs(aligned.first(), aligned.second());
        let sign = if a.is_zero() { b.sign() } else { a.sign() };
        return canonicalize(&digits, aligned.precision(), sign, "add/normalize");
    }

    // Opposite signs: |larger| - |smaller| under the larger sign.
    if aligned.is_tie() {
        let zeros: DigitVec = smallvec![0; aligned.first().len()];
        return canonicalize(&zeros, aligned.precision(), Sign::Zero, "add/normalize");
    }
    let digits = subtract_abs(aligned.larger(), aligned.smaller());
    let sign = if aligned.swapped() { b.sign() } else { a.sign() };
    canonicalize(&digits, aligned.precision(), sign, "add/normalize")
}

/// Digit-wise addition of two equal-length aligned arrays, right to left.
///
/// The result is one digit wider than the inputs; a carry out of the
/// most-significant position lands there, otherwise the extra digit is a
/// leading zero the normalizer trims.
pub(crate) fn add_abs(first: &[u8], second: &[u8]) -> DigitVec {
    debug_assert_eq!(first.len(), second.len());

    let mut digits: DigitVec = smallvec![0; first.len() + 1];
    let mut carry = 0u8;
    for i in (0..first.len()).rev() {
        let sum = first[i] + second[i] + carry;
        digits[i + 1] = sum % 10;
        carry = sum / 10;
    }
    digits[0] = carry;
    digits
}
