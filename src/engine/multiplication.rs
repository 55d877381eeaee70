// ============================================================================
// Multiplication Engine
// Grade-school long multiplication with precision accumulation
// ============================================================================

use super::canonicalize;
use crate::domain::{DigitVec, NumberRecord, Sign};
use smallvec::smallvec;

/// Multiply two records exactly.
///
/// Each operand's absolute value is flattened to one digit array (integer
/// digits then fractional digits, decimal point dropped). Every digit of
/// the second operand produces one partial-product row against the full
/// first array, right-aligned by that digit's place value; the rows are
/// then summed column-wise with carry. The result precision is the sum of
/// the operand precisions - exact, never rounded - and the sign is positive
/// when the input signs match, negative otherwise, with an all-zero product
/// collapsing to Zero in normalization. O(L1·L2) digit work by design.
pub fn multiply(a: &NumberRecord, b: &NumberRecord) -> NumberRecord {
    let first = a.abs_digits();
    let second = b.abs_digits();
    let width = first.len() + second.len() + 1;

    // One row per multiplier digit, least significant first. Row r is
    // shifted r positions left of the units column.
    let mut rows: Vec<DigitVec> = Vec::with_capacity(second.len());
    for (shift, &multiplier) in second.iter().rev().enumerate() {
        rows.push(partial_product(&first, multiplier, shift, width));
    }

    // Column-wise summation with carry across all rows.
    let mut digits: DigitVec = smallvec![0; width];
    let mut carry: u64 = 0;
    for col in (0..width).rev() {
        let sum = rows.iter().map(|row| u64::from(row[col])).sum::<u64>() + carry;
        digits[col] = (sum % 10) as u8;
        carry = sum / 10;
    }
    // The product of L1- and L2-digit numbers fits in L1+L2 digits, and the
    // rows are one wider still.
    debug_assert_eq!(carry, 0);

    let precision = a.precision() + b.precision();
    let sign = if a.sign() == b.sign() {
        Sign::Positive
    } else {
        Sign::Negative
    };
    canonicalize(&digits, precision, sign, "multiply/normalize")
}

/// Multiply the full digit array by a single digit with intra-row carry,
/// placing the result `shift` columns left of the units position in a row
/// of the given width.
fn partial_product(digits: &[u8], multiplier: u8, shift: usize, width: usize) -> DigitVec {
    let mut row: DigitVec = smallvec![0; width];
    let mut carry = 0u16;
    let mut col = width - 1 - shift;
    for &d in digits.iter().rev() {
        let product = u16::from(d) * u16::from(multiplier) + carry;
        row[col] = (product % 10) as u8;
        carry = product / 10;
        col -= 1;
    }
    row[col] = carry as u8;
    row
}
