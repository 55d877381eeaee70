// ============================================================================
// Record Validator
// Structural invariant checks run after every construction path
// ============================================================================

use super::errors::{ValidationError, ValidationReason, ValidationResult};
use crate::domain::{NumberRecord, Sign};

/// Check every structural invariant of a record.
///
/// The parser and the normalizer run this before a record reaches any
/// caller, so every `NumberRecord` observable outside the crate is valid.
///
/// # Errors
/// Returns the first violated invariant: a digit outside 0-9, a precision
/// that disagrees with the fractional digit count, an empty or
/// non-canonical integer part, or a sign inconsistent with the digits.
pub fn validate(record: &NumberRecord) -> ValidationResult<()> {
    validate_as(record, "validate")
}

/// Validate with the construction chain that produced the record, so a
/// failure names its origin (`"parse"`, `"add/normalize"`, ...).
pub(crate) fn validate_as(record: &NumberRecord, operation: &'static str) -> ValidationResult<()> {
    let integer = record.integer_digits();
    let fraction = record.fractional_digits();

    if integer.is_empty() {
        return Err(ValidationError::new(
            ValidationReason::EmptyIntegerPart,
            operation,
        ));
    }

    if record.precision() != fraction.len() {
        return Err(ValidationError::new(
            ValidationReason::PrecisionMismatch,
            operation,
        ));
    }

    for &d in integer.iter().chain(fraction.iter()) {
        if d > 9 {
            return Err(ValidationError::new(
                ValidationReason::DigitOutOfRange(d),
                operation,
            ));
        }
    }

    if integer.len() > 1 && integer[0] == 0 {
        return Err(ValidationError::new(
            ValidationReason::NonCanonicalLeadingZero,
            operation,
        ));
    }

    let all_zero = integer.iter().chain(fraction.iter()).all(|&d| d == 0);
    if all_zero != (record.sign() == Sign::Zero) {
        return Err(ValidationError::new(
            ValidationReason::SignZeroInconsistency,
            operation,
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DigitVec;

    fn record(sign: Sign, int: &[u8], frac: &[u8], precision: usize) -> NumberRecord {
        NumberRecord::from_parts_unchecked(
            sign,
            DigitVec::from_slice(int),
            DigitVec::from_slice(frac),
            precision,
        )
    }

    #[test]
    fn test_valid_record_passes() {
        let r = record(Sign::Positive, &[1, 2], &[5, 0], 2);
        assert!(validate(&r).is_ok());

        let z = NumberRecord::zero();
        assert!(validate(&z).is_ok());
    }

    #[test]
    fn test_empty_integer_part() {
        let r = record(Sign::Positive, &[], &[5], 1);
        assert_eq!(
            validate(&r).unwrap_err().reason,
            ValidationReason::EmptyIntegerPart
        );
    }

    #[test]
    fn test_precision_mismatch() {
        let r = record(Sign::Positive, &[1], &[5], 2);
        assert_eq!(
            validate(&r).unwrap_err().reason,
            ValidationReason::PrecisionMismatch
        );
    }

    #[test]
    fn test_digit_out_of_range() {
        let r = record(Sign::Positive, &[1, 12], &[], 0);
        assert_eq!(
            validate(&r).unwrap_err().reason,
            ValidationReason::DigitOutOfRange(12)
        );
    }

    #[test]
    fn test_leading_zero_rejected() {
        let r = record(Sign::Positive, &[0, 7], &[], 0);
        assert_eq!(
            validate(&r).unwrap_err().reason,
            ValidationReason::NonCanonicalLeadingZero
        );

        // A lone zero integer digit is the canonical zero form
        let z = record(Sign::Zero, &[0], &[0, 0], 2);
        assert!(validate(&z).is_ok());
    }

    #[test]
    fn test_sign_zero_inconsistency() {
        // Digits all zero but sign claims Positive
        let r = record(Sign::Positive, &[0], &[0], 1);
        assert_eq!(
            validate(&r).unwrap_err().reason,
            ValidationReason::SignZeroInconsistency
        );

        // Non-zero digits but sign claims Zero
        let r = record(Sign::Zero, &[3], &[], 0);
        assert_eq!(
            validate(&r).unwrap_err().reason,
            ValidationReason::SignZeroInconsistency
        );
    }

    #[test]
    fn test_validate_as_names_operation() {
        let r = record(Sign::Positive, &[], &[], 0);
        let err = validate_as(&r, "multiply/normalize").unwrap_err();
        assert_eq!(err.operation, "multiply/normalize");
    }
}
