//! CUIT validation: the result model and the three validation entry points.
//!
//! Malformed business input never surfaces as an error. Every entry point
//! returns a [`ValidationResult`] whose code names the first check that
//! failed.

use serde::{Deserialize, Serialize};
use tracing::debug;
use tributo_core::{DomainError, ValueObject};

use crate::check_digit;

/// Number of characters of a full CUIT.
pub const CUIT_LENGTH: usize = 11;

/// Smallest eleven-digit value, itself excluded from the valid range.
const MIN_FULL_NUMBER: i64 = 10_000_000_000;

/// Largest eleven-digit value.
const MAX_FULL_NUMBER: i64 = 99_999_999_999;

const MIN_DOCUMENT_NUMBER: i32 = 10_000_000;
const MAX_DOCUMENT_NUMBER: i32 = 99_999_999;
const MAX_KIND: i32 = 99;
const MAX_CHECK_DIGIT: i32 = 9;

/// Outcome code of a CUIT validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultCode {
    /// The CUIT is well formed and its check digit matches.
    Valid,
    /// The CUIT does not have exactly eleven digits.
    WrongDigitCount,
    /// The CUIT is not a well-formed number in the eleven-digit range.
    InvalidFormat,
    /// The check digit does not match the computed one.
    WrongCheckDigit,
}

/// Result of validating a CUIT.
///
/// Constructed only through [`ValidationResult::valid`] and
/// [`ValidationResult::invalid`]; there is no partially initialized state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationResult {
    valid: bool,
    code: ResultCode,
}

impl ValidationResult {
    /// A successful validation. Forces the code to [`ResultCode::Valid`].
    pub fn valid() -> Self {
        Self {
            valid: true,
            code: ResultCode::Valid,
        }
    }

    /// A failed validation carrying the specific failure code.
    pub fn invalid(code: ResultCode) -> Self {
        Self { valid: false, code }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn code(&self) -> ResultCode {
        self.code
    }
}

impl ValueObject for ValidationResult {}

fn reject(code: ResultCode) -> ValidationResult {
    debug!(code = ?code, "cuit validation rejected");
    ValidationResult::invalid(code)
}

/// Validate a CUIT given as its three parts.
///
/// Range checks run in order and the first failure wins; a CUIT that passes
/// them is assembled into its full number and handed to
/// [`validate_number`].
pub fn validate_parts(kind: i32, document_number: i32, check_digit: i32) -> ValidationResult {
    if !(MIN_DOCUMENT_NUMBER..=MAX_DOCUMENT_NUMBER).contains(&document_number) {
        return reject(ResultCode::WrongDigitCount);
    }

    // One-sided on purpose: a negative check digit is not caught here, it
    // flows into the assembled number and fails downstream.
    if check_digit > MAX_CHECK_DIGIT {
        return reject(ResultCode::WrongDigitCount);
    }

    if kind > MAX_KIND {
        return reject(ResultCode::WrongDigitCount);
    }

    let number =
        i64::from(kind) * 1_000_000_000 + i64::from(document_number) * 10 + i64::from(check_digit);
    validate_number(number)
}

/// Validate a full eleven-digit CUIT number.
///
/// This is the canonical validator the other entry points reduce to.
pub fn validate_number(number: i64) -> ValidationResult {
    if number <= MIN_FULL_NUMBER || number > MAX_FULL_NUMBER {
        return reject(ResultCode::InvalidFormat);
    }

    let kind = number / 1_000_000_000;
    let without_check = number / 10;
    let document_number = without_check - kind * 100_000_000;
    let provided = number % 10;

    let expected = match check_digit::compute(kind as i32, document_number as i32) {
        Ok(digit) => digit,
        // A decomposed part the engine rejects (e.g. an all-zero document
        // number) means the number never encoded a CUIT.
        Err(DomainError::InvalidArgument(_)) => return reject(ResultCode::InvalidFormat),
    };

    if provided != i64::from(expected) {
        return reject(ResultCode::WrongCheckDigit);
    }

    ValidationResult::valid()
}

/// Validate a CUIT given as text.
///
/// The text is trimmed of surrounding whitespace, must be exactly
/// [`CUIT_LENGTH`] characters and must parse as an integer before the
/// numeric validation applies.
pub fn validate_text(text: &str) -> ValidationResult {
    if text.is_empty() {
        return reject(ResultCode::WrongDigitCount);
    }

    let trimmed = text.trim();

    if trimmed.chars().count() != CUIT_LENGTH {
        return reject(ResultCode::WrongDigitCount);
    }

    match trimmed.parse::<i64>() {
        Ok(number) => validate_number(number),
        Err(_) => reject(ResultCode::InvalidFormat),
    }
}
