// ============================================================================
// Normalizer
// Raw signed digit array + precision -> canonical number record
// ============================================================================

use super::errors::{ValidationError, ValidationReason, ValidationResult};
use super::validate::validate_as;
use crate::domain::{DigitVec, NumberRecord, Sign};

/// Build a canonical record from a flat digit array.
///
/// `digits` holds the absolute value most-significant first; the trailing
/// `precision` entries are the fractional part. Leading integer zeros are
/// trimmed to the minimal representation (a single `0` survives when the
/// integer part is empty or all zero); fractional digits are never trimmed,
/// their count is the stated precision. An all-zero array forces the sign
/// to `Zero` regardless of the `sign` argument.
///
/// # Errors
/// Returns a `ValidationError` when a digit exceeds 9, when `precision`
/// exceeds the array length, or when the resulting record fails validation.
pub fn normalize(digits: &[u8], precision: usize, sign: Sign) -> ValidationResult<NumberRecord> {
    normalize_as(digits, precision, sign, "normalize")
}

/// Normalize with the construction chain recorded for diagnostics.
pub(crate) fn normalize_as(
    digits: &[u8],
    precision: usize,
    sign: Sign,
    operation: &'static str,
) -> ValidationResult<NumberRecord> {
    if precision > digits.len() {
        return Err(ValidationError::new(
            ValidationReason::PrecisionMismatch,
            operation,
        ));
    }
    for &d in digits {
        if d > 9 {
            return Err(ValidationError::new(
                ValidationReason::DigitOutOfRange(d),
                operation,
            ));
        }
    }

    let integer_len = digits.len() - precision;
    let (integer_raw, fraction_raw) = digits.split_at(integer_len);

    // Minimal integer representation: drop leading zeros, keep one digit.
    let first_significant = integer_raw.iter().position(|&d| d != 0);
    let integer_digits: DigitVec = match first_significant {
        Some(idx) => DigitVec::from_slice(&integer_raw[idx..]),
        None => DigitVec::from_slice(&[0]),
    };
    let fractional_digits = DigitVec::from_slice(fraction_raw);

    let all_zero = digits.iter().all(|&d| d == 0);
    let sign = if all_zero { Sign::Zero } else { sign };

    tracing::trace!(len = digits.len(), precision, ?sign, "normalized digit array");

    let record = NumberRecord::from_parts_unchecked(sign, integer_digits, fractional_digits, precision);
    validate_as(&record, operation)?;
    Ok(record)
}
