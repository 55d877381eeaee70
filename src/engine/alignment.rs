// ============================================================================
// Operand Alignment
// Pads two operands to a common shape and settles which is larger
// ============================================================================

use crate::domain::{DigitVec, NumberRecord};
use smallvec::smallvec;
use std::cmp::Ordering;

/// Two absolute values padded to identical shape, plus their relative
/// magnitude.
///
/// The integer parts are left-padded and the fractional parts right-padded
/// with zeros, so both arrays share one integer length and one precision and
/// digit positions line up for the carry/borrow loops. The magnitude answer
/// is computed here once; the equal case is the tie that lets opposite-sign
/// addition of equal magnitudes collapse to a signed zero.
#[derive(Debug, Clone)]
pub struct Alignment {
    first: DigitVec,
    second: DigitVec,
    precision: usize,
    magnitude: Ordering,
}

/// Pad both operands' absolute values to a common integer length and a
/// common precision (the max of each), and record how `a` compares to `b`
/// by magnitude.
pub fn align(a: &NumberRecord, b: &NumberRecord) -> Alignment {
    let precision = a.precision().max(b.precision());
    let integer_len = a.integer_digits().len().max(b.integer_digits().len());

    Alignment {
        first: padded_abs(a, integer_len, precision),
        second: padded_abs(b, integer_len, precision),
        precision,
        magnitude: a.cmp_abs(b),
    }
}

fn padded_abs(record: &NumberRecord, integer_len: usize, precision: usize) -> DigitVec {
    let mut digits: DigitVec = smallvec![0; integer_len - record.integer_digits().len()];
    digits.extend_from_slice(record.integer_digits());
    digits.extend_from_slice(record.fractional_digits());
    digits.resize(integer_len + precision, 0);
    digits
}

impl Alignment {
    /// Aligned absolute digits of the first operand.
    #[inline]
    pub fn first(&self) -> &[u8] {
        &self.first
    }

    /// Aligned absolute digits of the second operand.
    #[inline]
    pub fn second(&self) -> &[u8] {
        &self.second
    }

    /// Common precision both arrays were padded to.
    #[inline]
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// How the first operand compares to the second by absolute value.
    #[inline]
    pub fn magnitude(&self) -> Ordering {
        self.magnitude
    }

    /// True when both operands have exactly equal magnitude.
    #[inline]
    pub fn is_tie(&self) -> bool {
        self.magnitude == Ordering::Equal
    }

    /// True when the second operand has the larger magnitude, i.e. the
    /// larger/smaller views swap the input order.
    #[inline]
    pub fn swapped(&self) -> bool {
        self.magnitude == Ordering::Less
    }

    /// The aligned digits of the larger-magnitude operand. Ties resolve to
    /// the first operand; callers that care must check `is_tie` before.
    #[inline]
    pub fn larger(&self) -> &[u8] {
        if self.swapped() {
            &self.second
        } else {
            &self.first
        }
    }

    /// The aligned digits of the smaller-magnitude operand.
    #[inline]
    pub fn smaller(&self) -> &[u8] {
        if self.swapped() {
            &self.first
        } else {
            &self.second
        }
    }
}
