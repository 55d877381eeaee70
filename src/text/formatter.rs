// ============================================================================
// Decimal Text Formatter
// Number record -> text, canonical or grouped/currency-decorated
// ============================================================================

use crate::domain::{NumberRecord, NumericFormatProfile};

/// Output decoration switches. Default output is canonical: no grouping,
/// no currency symbol.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Insert the profile's grouping separator between integer digit groups
    pub use_grouping: bool,

    /// Prefix the profile's currency symbol (after the sign)
    pub show_currency: bool,
}

impl FormatOptions {
    /// Builder method: enable integer grouping
    pub fn with_grouping(mut self) -> Self {
        self.use_grouping = true;
        self
    }

    /// Builder method: enable the currency prefix
    pub fn with_currency(mut self) -> Self {
        self.show_currency = true;
        self
    }
}

/// Canonical text for a record: sign, integer digits, then the profile's
/// decimal separator and exactly `precision` fractional digits when the
/// precision is non-zero. Trailing fractional zeros are emitted - they are
/// part of the stated precision. No grouping, no currency.
pub fn to_text(record: &NumberRecord, profile: &NumericFormatProfile) -> String {
    to_text_with_options(record, profile, &FormatOptions::default())
}

/// Text for a record with optional grouping and currency decoration.
///
/// Grouping inserts the profile's separator every `grouping_size` integer
/// digits counted from the decimal point. The currency symbol sits between
/// the sign and the first digit. Neither decoration ever changes the digits
/// emitted.
pub fn to_text_with_options(
    record: &NumberRecord,
    profile: &NumericFormatProfile,
    options: &FormatOptions,
) -> String {
    let integer = record.integer_digits();
    let fraction = record.fractional_digits();
    let mut out = String::with_capacity(integer.len() + fraction.len() + 4);

    if record.is_negative() {
        out.push('-');
    }
    if options.show_currency {
        out.push_str(&profile.currency_symbol);
    }

    if options.use_grouping && profile.grouping_size > 0 {
        for (i, &d) in integer.iter().enumerate() {
            if i > 0 && (integer.len() - i) % profile.grouping_size == 0 {
                out.push(profile.grouping_separator);
            }
            out.push(digit_char(d));
        }
    } else {
        for &d in integer {
            out.push(digit_char(d));
        }
    }

    if record.precision() > 0 {
        out.push(profile.decimal_separator);
        for &d in fraction {
            out.push(digit_char(d));
        }
    }

    out
}

#[inline]
fn digit_char(d: u8) -> char {
    (b'0' + d) as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::parser::parse;

    fn us() -> NumericFormatProfile {
        NumericFormatProfile::default()
    }

    #[test]
    fn test_canonical_output() {
        let r = parse("-377.81", &us()).unwrap();
        assert_eq!(to_text(&r, &us()), "-377.81");

        let r = parse("50.000", &us()).unwrap();
        assert_eq!(to_text(&r, &us()), "50.000");

        let r = parse("0", &us()).unwrap();
        assert_eq!(to_text(&r, &us()), "0");
    }

    #[test]
    fn test_precision_zero_omits_separator() {
        let r = parse("1234", &us()).unwrap();
        assert_eq!(to_text(&r, &us()), "1234");
    }

    #[test]
    fn test_profile_separator_respected() {
        let eu = NumericFormatProfile::european_style();
        let r = parse("3,50", &eu).unwrap();
        assert_eq!(to_text(&r, &eu), "3,50");
    }

    #[test]
    fn test_grouped_output() {
        let r = parse("1234567.5", &us()).unwrap();
        let options = FormatOptions::default().with_grouping();
        assert_eq!(to_text_with_options(&r, &us(), &options), "1,234,567.5");

        // Exactly one group wide: no separator
        let r = parse("123", &us()).unwrap();
        assert_eq!(to_text_with_options(&r, &us(), &options), "123");
    }

    #[test]
    fn test_grouping_with_negative_sign() {
        let r = parse("-1000", &us()).unwrap();
        let options = FormatOptions::default().with_grouping();
        assert_eq!(to_text_with_options(&r, &us(), &options), "-1,000");
    }

    #[test]
    fn test_currency_prefix_after_sign() {
        let r = parse("-19.99", &us()).unwrap();
        let options = FormatOptions::default().with_grouping().with_currency();
        assert_eq!(to_text_with_options(&r, &us(), &options), "-$19.99");
    }

    #[test]
    fn test_round_trip_canonical() {
        for text in ["0", "-377.81", "50.000", "0.3", "9999999999.000000001"] {
            let r = parse(text, &us()).unwrap();
            assert_eq!(parse(&to_text(&r, &us()), &us()).unwrap(), r);
        }
    }

    #[test]
    fn test_grouped_output_reparses_to_same_record() {
        let r = parse("1234567.89", &us()).unwrap();
        let grouped = to_text_with_options(&r, &us(), &FormatOptions::default().with_grouping());
        assert_eq!(parse(&grouped, &us()).unwrap(), r);
    }
}
