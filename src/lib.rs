// ============================================================================
// Decimal Engine Library
// Exact signed decimal arithmetic over digit arrays
// ============================================================================

//! # Decimal Engine
//!
//! Exact decimal arithmetic on numbers represented as digit arrays with an
//! explicit sign and a stated fractional precision.
//!
//! ## Features
//!
//! - **No floating point** anywhere in the computation path - `0.1 + 0.2`
//!   is exactly `0.3`
//! - **Explicit precision**: trailing fractional zeros are kept because
//!   they state resolution; multiplication accumulates precision exactly
//! - **Sign-aware digit arithmetic** with carry/borrow propagation and
//!   grade-school long multiplication
//! - **Profile-driven text boundary**: configurable decimal and grouping
//!   separators, optional grouped/currency output
//! - **Validated construction**: every record a caller can observe has
//!   passed the structural invariant checks
//!
//! ## Example
//!
//! ```rust
//! use decimal_engine::prelude::*;
//!
//! let profile = NumericFormatProfile::default();
//!
//! let debit = parse("-9589.21", &profile).unwrap();
//! let credit = parse("9,211.40", &profile).unwrap();
//!
//! let balance = add(&debit, &credit);
//! assert_eq!(to_text(&balance, &profile), "-377.81");
//!
//! let price = parse("12.5", &profile).unwrap();
//! let qty = parse("4.00", &profile).unwrap();
//! assert_eq!(to_text(&multiply(&price, &qty), &profile), "50.000");
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;
pub mod text;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{DigitVec, NumberRecord, NumericFormatProfile, Sign};
    pub use crate::engine::{add, align, multiply, subtract, Alignment};
    pub use crate::numeric::{
        normalize, validate, ParseError, ParseErrorKind, ValidationError, ValidationReason,
    };
    pub use crate::text::{parse, to_text, to_text_with_options, FormatOptions};
}

pub use domain::{NumberRecord, NumericFormatProfile, Sign};
pub use engine::{add, multiply, subtract};
pub use numeric::{normalize, validate, ParseError, ValidationError};
pub use text::{parse, to_text, to_text_with_options};
