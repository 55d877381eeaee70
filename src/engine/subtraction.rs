// ============================================================================
// Subtraction Engine
// Sign-aware digit-wise subtraction with borrow propagation
// ============================================================================

use super::addition::add;
use super::alignment::align;
use super::canonicalize;
use crate::domain::{DigitVec, NumberRecord, Sign};
use smallvec::smallvec;

/// Subtract `b` from `a` exactly.
///
/// When the signs already differ, the difference is an addition of absolute
/// values - subtracting a negative adds its magnitude - so this reduces to
/// `add(a, -b)`. Matching signs align the operands, subtract the smaller
/// magnitude from the larger, and take the first operand's sign when it is
/// the larger, flipped otherwise. A magnitude tie collapses to a signed
/// zero at the common precision.
pub fn subtract(a: &NumberRecord, b: &NumberRecord) -> NumberRecord {
    if a.sign() != b.sign() {
        return add(a, &b.negated());
    }

    let aligned = align(a, b);
    if aligned.is_tie() {
        let zeros: DigitVec = smallvec![0; aligned.first().len()];
        return canonicalize(&zeros, aligned.precision(), Sign::Zero, "subtract/normalize");
    }

    let digits = subtract_abs(aligned.larger(), aligned.smaller());
    let sign = if aligned.swapped() {
        a.sign().flipped()
    } else {
        a.sign()
    };
    canonicalize(&digits, aligned.precision(), sign, "subtract/normalize")
}

/// Digit-wise subtraction of two equal-length aligned arrays, right to
/// left: when `digit - borrow - subtrahend` goes negative, add 10 and carry
/// a borrow of 1 into the next position.
///
/// Contract: the minuend's magnitude is at least the subtrahend's. A
/// leftover borrow means alignment broke that contract, which is a bug in
/// this crate, never caller input - so it halts instead of surfacing as an
/// error value.
pub(crate) fn subtract_abs(larger: &[u8], smaller: &[u8]) -> DigitVec {
    debug_assert_eq!(larger.len(), smaller.len());

    let mut digits: DigitVec = smallvec![0; larger.len()];
    let mut borrow = 0i16;
    for i in (0..larger.len()).rev() {
        let mut diff = larger[i] as i16 - borrow - smaller[i] as i16;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        digits[i] = diff as u8;
    }
    assert_eq!(borrow, 0, "alignment produced minuend smaller than subtrahend");
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DigitVec;

    fn record(sign: Sign, int: &[u8], frac: &[u8]) -> NumberRecord {
        NumberRecord::from_parts_unchecked(
            sign,
            DigitVec::from_slice(int),
            DigitVec::from_slice(frac),
            frac.len(),
        )
    }

    #[test]
    fn test_subtract_abs_borrow_chain() {
        // 1000 - 1 = 0999
        assert_eq!(subtract_abs(&[1, 0, 0, 0], &[0, 0, 0, 1]).as_slice(), &[0, 9, 9, 9]);
        // No borrow
        assert_eq!(subtract_abs(&[7, 5], &[2, 3]).as_slice(), &[5, 2]);
    }

    #[test]
    #[should_panic(expected = "minuend smaller than subtrahend")]
    fn test_subtract_abs_contract_violation_panics() {
        subtract_abs(&[1], &[2]);
    }

    #[test]
    fn test_same_sign_larger_first() {
        let a = record(Sign::Positive, &[5, 0], &[2, 5]);
        let b = record(Sign::Positive, &[1, 0], &[]);
        assert_eq!(subtract(&a, &b).to_string(), "40.25");
    }

    #[test]
    fn test_same_sign_smaller_first_flips() {
        let a = record(Sign::Positive, &[3], &[]);
        let b = record(Sign::Positive, &[1, 0], &[]);
        assert_eq!(subtract(&a, &b).to_string(), "-7");
    }

    #[test]
    fn test_both_negative() {
        // -3 - -10 = 7
        let a = record(Sign::Negative, &[3], &[]);
        let b = record(Sign::Negative, &[1, 0], &[]);
        assert_eq!(subtract(&a, &b).to_string(), "7");
    }

    #[test]
    fn test_differing_signs_add_magnitudes() {
        // 4.5 - -1.5 = 6.0
        let a = record(Sign::Positive, &[4], &[5]);
        let b = record(Sign::Negative, &[1], &[5]);
        assert_eq!(subtract(&a, &b).to_string(), "6.0");

        // -4.5 - 1.5 = -6.0
        assert_eq!(subtract(&a.negated(), &b.negated()).to_string(), "-6.0");
    }

    #[test]
    fn test_equal_operands_yield_signed_zero() {
        let a = record(Sign::Positive, &[1, 0, 0], &[]);
        let diff = subtract(&a, &a.clone());
        assert!(diff.is_zero());
        assert_eq!(diff.precision(), 0);
        assert_eq!(diff.to_string(), "0");
    }

    #[test]
    fn test_zero_operands() {
        let a = record(Sign::Negative, &[2], &[5]);
        let zero = NumberRecord::zero();
        assert_eq!(subtract(&a, &zero), a);
        assert_eq!(subtract(&zero, &a), a.negated());
        assert!(subtract(&zero, &zero).is_zero());
    }

    #[test]
    fn test_consistent_with_adding_negation() {
        let a = record(Sign::Positive, &[9, 5], &[0, 7]);
        let b = record(Sign::Positive, &[1, 2, 0], &[4]);
        assert_eq!(subtract(&a, &b), add(&a, &b.negated()));
    }
}
