// ============================================================================
// Domain Models Module
// Core value objects: the number record and the format profile
// ============================================================================

pub mod profile;
pub mod record;

pub use profile::NumericFormatProfile;
pub use record::{DigitVec, NumberRecord, Sign};
