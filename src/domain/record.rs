// ============================================================================
// Number Record Domain Model
// ============================================================================

use smallvec::{smallvec, SmallVec};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Digit array used throughout the crate.
///
/// Digits are stored as values 0-9, most-significant first. Operands up to
/// 16 digits stay inline on the stack.
pub type DigitVec = SmallVec<[u8; 16]>;

// ============================================================================
// Sign
// ============================================================================

/// Sign of a decimal value.
///
/// `Zero` is a distinct state rather than a degenerate `Positive`: every
/// all-zero digit pattern carries it, so there is exactly one representation
/// of zero at any precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    Positive,
    Negative,
    Zero,
}

impl Sign {
    /// The opposite sign. `Zero` is its own opposite.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
        }
    }

    /// Rank used for signed comparison: Negative < Zero < Positive.
    #[inline]
    pub(crate) fn rank(self) -> i8 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }
}

// ============================================================================
// Number Record
// ============================================================================

/// Canonical signed decimal value as digit arrays.
///
/// Invariants (enforced by the validator after every construction path):
/// - `precision == fractional_digits.len()`
/// - `sign == Zero` iff every digit is 0
/// - `integer_digits` is never empty and has no leading zero unless the
///   value is exactly zero (a single `0`)
/// - every stored digit is 0-9
///
/// Records are immutable: the arithmetic engines never mutate an operand,
/// they always return a new record. Construction goes through the parser or
/// the normalizer only.
///
/// # Example
/// ```ignore
/// use decimal_engine::prelude::*;
///
/// let profile = NumericFormatProfile::default();
/// let a = parse("12.5", &profile)?;
/// let b = parse("4.00", &profile)?;
/// assert_eq!(to_text(&multiply(&a, &b), &profile), "50.000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumberRecord {
    sign: Sign,
    integer_digits: DigitVec,
    fractional_digits: DigitVec,
    precision: usize,
}

impl NumberRecord {
    /// Construct without validation. Callers are the parser and the
    /// normalizer, which validate before the record escapes the crate.
    #[inline]
    pub(crate) fn from_parts_unchecked(
        sign: Sign,
        integer_digits: DigitVec,
        fractional_digits: DigitVec,
        precision: usize,
    ) -> Self {
        Self {
            sign,
            integer_digits,
            fractional_digits,
            precision,
        }
    }

    /// The canonical zero: sign `Zero`, integer part `0`, precision 0.
    pub fn zero() -> Self {
        Self {
            sign: Sign::Zero,
            integer_digits: smallvec![0],
            fractional_digits: smallvec![],
            precision: 0,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Integer digits, most-significant first. Never empty.
    #[inline]
    pub fn integer_digits(&self) -> &[u8] {
        &self.integer_digits
    }

    /// Fractional digits. Length is exactly `precision()`; trailing zeros
    /// are retained because they encode stated resolution.
    #[inline]
    pub fn fractional_digits(&self) -> &[u8] {
        &self.fractional_digits
    }

    /// Count of fractional digits carried by this value.
    #[inline]
    pub fn precision(&self) -> usize {
        self.precision
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    // ========================================================================
    // Derived values
    // ========================================================================

    /// A copy with the opposite sign. Zero stays zero.
    pub fn negated(&self) -> Self {
        Self {
            sign: self.sign.flipped(),
            integer_digits: self.integer_digits.clone(),
            fractional_digits: self.fractional_digits.clone(),
            precision: self.precision,
        }
    }

    /// Absolute value as a flat digit array: integer digits followed by
    /// fractional digits, decimal point dropped. Used by the engines.
    pub(crate) fn abs_digits(&self) -> DigitVec {
        let mut flat = DigitVec::with_capacity(self.integer_digits.len() + self.precision);
        flat.extend_from_slice(&self.integer_digits);
        flat.extend_from_slice(&self.fractional_digits);
        flat
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare absolute values.
    ///
    /// Integer parts are canonical (no leading zeros), so a longer integer
    /// part is strictly larger; equal lengths compare digit-wise. Fractional
    /// parts compare digit-wise with the shorter side read as zero-extended.
    pub fn cmp_abs(&self, other: &Self) -> Ordering {
        match self.integer_digits.len().cmp(&other.integer_digits.len()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        match self.integer_digits.cmp(&other.integer_digits) {
            Ordering::Equal => {}
            ord => return ord,
        }

        let common = self.precision.max(other.precision);
        for i in 0..common {
            let a = self.fractional_digits.get(i).copied().unwrap_or(0);
            let b = other.fractional_digits.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        Ordering::Equal
    }

    /// Compare signed values.
    ///
    /// Not exposed as `Ord`: records that differ only in stated precision
    /// (`1.5` vs `1.50`) are value-equal here but structurally unequal under
    /// the derived `Eq`, and `Ord` must agree with `Eq`.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        match self.sign.rank().cmp(&other.sign.rank()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        match self.sign {
            Sign::Positive => self.cmp_abs(other),
            Sign::Negative => other.cmp_abs(self),
            Sign::Zero => Ordering::Equal,
        }
    }
}

// ============================================================================
// Operator Implementations
// ============================================================================

impl Neg for NumberRecord {
    type Output = NumberRecord;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Neg for &NumberRecord {
    type Output = NumberRecord;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Add for &NumberRecord {
    type Output = NumberRecord;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        crate::engine::add(self, rhs)
    }
}

impl Add for NumberRecord {
    type Output = NumberRecord;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        crate::engine::add(&self, &rhs)
    }
}

impl Sub for &NumberRecord {
    type Output = NumberRecord;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        crate::engine::subtract(self, rhs)
    }
}

impl Sub for NumberRecord {
    type Output = NumberRecord;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        crate::engine::subtract(&self, &rhs)
    }
}

impl Mul for &NumberRecord {
    type Output = NumberRecord;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        crate::engine::multiply(self, rhs)
    }
}

impl Mul for NumberRecord {
    type Output = NumberRecord;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        crate::engine::multiply(&self, &rhs)
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for NumberRecord {
    /// Canonical text: `-` for negative values, `.` as the decimal
    /// separator, exactly `precision` fractional digits, no grouping.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Negative {
            f.write_str("-")?;
        }
        for &d in &self.integer_digits {
            write!(f, "{}", d)?;
        }
        if self.precision > 0 {
            f.write_str(".")?;
            for &d in &self.fractional_digits {
                write!(f, "{}", d)?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sign: Sign, int: &[u8], frac: &[u8]) -> NumberRecord {
        NumberRecord::from_parts_unchecked(
            sign,
            DigitVec::from_slice(int),
            DigitVec::from_slice(frac),
            frac.len(),
        )
    }

    #[test]
    fn test_zero() {
        let z = NumberRecord::zero();
        assert!(z.is_zero());
        assert_eq!(z.integer_digits(), &[0]);
        assert_eq!(z.precision(), 0);
        assert_eq!(z.to_string(), "0");
    }

    #[test]
    fn test_negated() {
        let x = record(Sign::Positive, &[4, 2], &[5]);
        let neg = x.negated();
        assert!(neg.is_negative());
        assert_eq!(neg.integer_digits(), x.integer_digits());
        assert_eq!(neg.precision(), x.precision());

        // Zero is its own negation
        assert!(NumberRecord::zero().negated().is_zero());
    }

    #[test]
    fn test_abs_digits_flattening() {
        let x = record(Sign::Positive, &[1, 2], &[3, 4]);
        assert_eq!(x.abs_digits().as_slice(), &[1, 2, 3, 4]);

        let whole = record(Sign::Positive, &[7], &[]);
        assert_eq!(whole.abs_digits().as_slice(), &[7]);
    }

    #[test]
    fn test_cmp_abs_integer_length_dominates() {
        let big = record(Sign::Positive, &[1, 0, 0], &[]);
        let small = record(Sign::Positive, &[9, 9], &[9]);
        assert_eq!(big.cmp_abs(&small), Ordering::Greater);
        assert_eq!(small.cmp_abs(&big), Ordering::Less);
    }

    #[test]
    fn test_cmp_abs_fractional_zero_extension() {
        // 1.5 and 1.50 have equal magnitude despite different precision
        let a = record(Sign::Positive, &[1], &[5]);
        let b = record(Sign::Positive, &[1], &[5, 0]);
        assert_eq!(a.cmp_abs(&b), Ordering::Equal);

        let c = record(Sign::Positive, &[1], &[5, 1]);
        assert_eq!(a.cmp_abs(&c), Ordering::Less);
    }

    #[test]
    fn test_cmp_value_sign_ordering() {
        let pos = record(Sign::Positive, &[1], &[]);
        let neg = record(Sign::Negative, &[1], &[]);
        let zero = NumberRecord::zero();

        assert_eq!(neg.cmp_value(&zero), Ordering::Less);
        assert_eq!(zero.cmp_value(&pos), Ordering::Less);
        assert_eq!(neg.cmp_value(&pos), Ordering::Less);
    }

    #[test]
    fn test_cmp_value_negative_reverses_magnitude() {
        let neg_small = record(Sign::Negative, &[1], &[]);
        let neg_big = record(Sign::Negative, &[9], &[]);
        assert_eq!(neg_big.cmp_value(&neg_small), Ordering::Less);
    }

    #[test]
    fn test_display_canonical() {
        let x = record(Sign::Negative, &[3, 7, 7], &[8, 1]);
        assert_eq!(x.to_string(), "-377.81");

        let trailing = record(Sign::Positive, &[5, 0], &[0, 0, 0]);
        assert_eq!(trailing.to_string(), "50.000");
    }
}
