//! The CUIT value type.

use serde::{Deserialize, Serialize};
use tributo_core::{DomainError, DomainResult, ValueObject};

use crate::check_digit;
use crate::validation::{self, ResultCode, ValidationResult};

/// An Argentine CUIT, held as its two constituent parts.
///
/// Construction performs no validation: the parts are stored verbatim and
/// validity is a separate query (construct-then-ask). A `Cuit` holding
/// out-of-range parts is representable and simply reports itself invalid.
/// The check digit and the full number are derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cuit {
    kind: i32,
    document_number: i32,
}

impl Cuit {
    /// Create a CUIT from its kind prefix and document number, verbatim.
    pub fn new(kind: i32, document_number: i32) -> Self {
        Self {
            kind,
            document_number,
        }
    }

    /// The kind prefix (first two digits of the full number).
    pub fn kind(&self) -> i32 {
        self.kind
    }

    /// The document number (middle eight digits of the full number).
    pub fn document_number(&self) -> i32 {
        self.document_number
    }

    /// The computed check digit (last digit of the full number).
    ///
    /// Fails with [`DomainError::InvalidArgument`] when either stored part
    /// is non-positive, since the checksum is undefined there.
    pub fn check_digit(&self) -> DomainResult<u8> {
        check_digit::compute(self.kind, self.document_number)
    }

    /// The full eleven-digit number: kind, document number and check digit
    /// concatenated.
    pub fn full_number(&self) -> DomainResult<i64> {
        // Widened before the multiply: the largest CUIT, 99-99999999 plus a
        // check digit, does not fit in 32 bits.
        let check = i64::from(self.check_digit()?);
        Ok(i64::from(self.kind) * 1_000_000_000 + i64::from(self.document_number) * 10 + check)
    }

    /// Validate the full number formed by the stored parts.
    pub fn validate(&self) -> ValidationResult {
        match self.full_number() {
            Ok(number) => validation::validate_number(number),
            // Parts with no defined check digit never form a CUIT; the
            // contract error stays inside this boundary.
            Err(DomainError::InvalidArgument(_)) => {
                ValidationResult::invalid(ResultCode::InvalidFormat)
            }
        }
    }

    /// Whether the stored parts form a valid CUIT. Never panics.
    pub fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }
}

impl ValueObject for Cuit {}
