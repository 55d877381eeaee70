// ============================================================================
// Numeric Format Profile
// Separator and grouping configuration consumed at the text boundary
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for reading and writing decimal text.
///
/// Pure value configuration with no identity. The arithmetic engines never
/// see a profile; only the parser and the formatter consume it. The currency
/// symbol is cosmetic output decoration and is ignored on input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumericFormatProfile {
    /// Character separating integer and fractional digits
    pub decimal_separator: char,

    /// Character allowed between integer digits on input, emitted on
    /// grouped output
    pub grouping_separator: char,

    /// Integer digits per group when grouping is emitted
    pub grouping_size: usize,

    /// Symbol prefixed to grouped/currency output
    pub currency_symbol: String,
}

impl Default for NumericFormatProfile {
    fn default() -> Self {
        Self::us_style()
    }
}

impl NumericFormatProfile {
    /// US-style profile: `1,234.50`
    pub fn us_style() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
            grouping_size: 3,
            currency_symbol: "$".to_string(),
        }
    }

    /// European-style profile: `1.234,50`
    pub fn european_style() -> Self {
        Self {
            decimal_separator: ',',
            grouping_separator: '.',
            grouping_size: 3,
            currency_symbol: "€".to_string(),
        }
    }

    /// Builder method: set the decimal separator
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Builder method: set the grouping separator
    pub fn with_grouping_separator(mut self, separator: char) -> Self {
        self.grouping_separator = separator;
        self
    }

    /// Builder method: set the grouping size
    pub fn with_grouping_size(mut self, size: usize) -> Self {
        self.grouping_size = size;
        self
    }

    /// Builder method: set the currency symbol
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Validate the profile.
    ///
    /// A profile whose separators collide, or whose separators are digits or
    /// sign characters, cannot be parsed unambiguously.
    pub fn validate(&self) -> Result<(), String> {
        if self.decimal_separator == self.grouping_separator {
            return Err("Decimal and grouping separators must differ".to_string());
        }
        for sep in [self.decimal_separator, self.grouping_separator] {
            if sep.is_ascii_digit() {
                return Err(format!("Separator '{}' collides with digits", sep));
            }
            if sep == '+' || sep == '-' {
                return Err(format!("Separator '{}' collides with sign characters", sep));
            }
        }
        if self.grouping_size == 0 {
            return Err("Grouping size must be at least 1".to_string());
        }
        Ok(())
    }
}
