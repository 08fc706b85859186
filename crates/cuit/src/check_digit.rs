//! CUIT check digit computation.

use tributo_core::{DomainError, DomainResult};

/// AFIP weight table, paired with the ten digits of the check base from the
/// most significant digit down.
const WEIGHTS: [u64; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Compute the check digit for a CUIT from its kind prefix and document
/// number.
///
/// Digit-count ranges are the caller's job; this function only enforces the
/// arithmetic precondition that both parts are positive, and returns
/// [`DomainError::InvalidArgument`] when it is violated.
pub fn compute(kind: i32, document_number: i32) -> DomainResult<u8> {
    if kind <= 0 {
        return Err(DomainError::invalid_argument("kind must be positive"));
    }
    if document_number <= 0 {
        return Err(DomainError::invalid_argument(
            "document number must be positive",
        ));
    }

    // Two kind digits followed by eight document digits. Widened before the
    // multiply: 99 * 10^8 + 99_999_999 does not fit in 32 bits.
    let mut base = kind as u64 * 100_000_000 + document_number as u64;

    // Walking the base least-significant-digit-first means walking the
    // weight table backwards.
    let mut sum: u64 = 0;
    for weight in WEIGHTS.iter().rev() {
        sum += (base % 10) * weight;
        base /= 10;
    }

    Ok(match 11 - sum % 11 {
        11 => 0,
        10 => 9,
        diff => diff as u8,
    })
}
