// ============================================================================
// Decimal Text Parser
// Profile-driven text -> number record
// ============================================================================

use crate::domain::{DigitVec, NumberRecord, NumericFormatProfile, Sign};
use crate::numeric::{normalize_as, ParseError, ParseErrorKind, ParseResult};

/// Parse decimal text into a canonical record under the given profile.
///
/// Accepted shape: at most one leading `+`/`-`, integer digits with
/// optional grouping separators, and at most one decimal separator followed
/// by fractional digits. Fractional trailing zeros are kept - they state
/// the value's precision - while integer leading zeros are trimmed during
/// normalization. Surrounding whitespace is ignored.
///
/// Grouping separators must sit strictly between integer digits: not
/// leading, not trailing, not doubled, and never in the fractional part.
/// Their distance from the decimal point is not checked against the
/// profile's grouping size, so `12,34,567` parses under a size-3 profile.
///
/// # Errors
/// `ParseError` with the offending byte offset (relative to the trimmed
/// input) for: a sign past the first position, a second decimal separator,
/// any other non-digit character, a structurally misplaced grouping
/// separator, or input with no digits at all.
pub fn parse(text: &str, profile: &NumericFormatProfile) -> ParseResult<NumberRecord> {
    match parse_record(text.trim(), profile) {
        Ok(record) => Ok(record),
        Err(err) => {
            tracing::debug!(%err, input = text, "rejected decimal text");
            Err(err)
        },
    }
}

fn parse_record(text: &str, profile: &NumericFormatProfile) -> ParseResult<NumberRecord> {
    if text.is_empty() {
        return Err(ParseError::new(ParseErrorKind::EmptyMantissa, 0));
    }

    let (negative, body, body_start) = match text.chars().next() {
        Some('-') => (true, &text[1..], 1),
        Some('+') => (false, &text[1..], 1),
        _ => (false, text, 0),
    };

    let mut integer_digits = DigitVec::new();
    let mut fractional_digits = DigitVec::new();
    let mut in_fraction = false;
    let mut pending_group: Option<usize> = None;

    for (i, c) in body.char_indices() {
        let offset = body_start + i;

        if c == profile.decimal_separator {
            if in_fraction {
                return Err(ParseError::new(ParseErrorKind::MultipleDecimalPoints, offset));
            }
            if let Some(group_offset) = pending_group {
                // Grouping separator directly before the decimal point
                return Err(ParseError::new(ParseErrorKind::InconsistentGrouping, group_offset));
            }
            in_fraction = true;
        } else if c == profile.grouping_separator {
            if in_fraction || integer_digits.is_empty() || pending_group.is_some() {
                return Err(ParseError::new(ParseErrorKind::InconsistentGrouping, offset));
            }
            pending_group = Some(offset);
        } else if let Some(d) = c.to_digit(10) {
            if in_fraction {
                fractional_digits.push(d as u8);
            } else {
                integer_digits.push(d as u8);
            }
            pending_group = None;
        } else if c == '+' || c == '-' {
            return Err(ParseError::new(ParseErrorKind::MisplacedSign, offset));
        } else {
            return Err(ParseError::new(ParseErrorKind::NonDigitCharacter(c), offset));
        }
    }

    if let Some(group_offset) = pending_group {
        // Trailing grouping separator
        return Err(ParseError::new(ParseErrorKind::InconsistentGrouping, group_offset));
    }
    if integer_digits.is_empty() && fractional_digits.is_empty() {
        return Err(ParseError::new(ParseErrorKind::EmptyMantissa, body_start));
    }

    let precision = fractional_digits.len();
    let sign = if negative { Sign::Negative } else { Sign::Positive };

    let mut digits = integer_digits;
    digits.extend_from_slice(&fractional_digits);

    // Every pushed digit is 0-9 and precision matches the tail length, so
    // normalization of parser output cannot fail.
    Ok(normalize_as(&digits, precision, sign, "parse")
        .expect("parsed digits failed normalization"))
}
