//! `tributo-cuit` — Argentine CUIT validation domain.
//!
//! Business rules for CUIT identifiers (the 11-digit tax keys issued by
//! AFIP), implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage): a weighted modulo-11 checksum engine, a [`Cuit`] value type
//! and validation entry points for the three input forms (parts, full
//! number, text).

pub mod check_digit;
pub mod cuit;
pub mod validation;

pub use cuit::Cuit;
pub use validation::{
    CUIT_LENGTH, ResultCode, ValidationResult, validate_number, validate_parts, validate_text,
};
