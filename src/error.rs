//! Error types shared by the arithmetic engines.
//!
//! Malformed text never shows up here: it is recovered into the invalid [`N`](crate::N) or
//! [`Z`](crate::Z) sentinel instead. The types below are for domain errors which must reach the
//! caller.

use thiserror::Error;

/// A division, remainder or modulus with a zero divisor was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("division by zero")]
pub struct DivisionByZero;

/// A narrowing conversion was requested for a value not representable in the target type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("value out of range for {target}")]
pub struct RangeError {
    pub target: &'static str,
}

/// Indexed access past the width of a fixed-width value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("access index {index} in number of size {width}")]
pub struct IndexOutOfBounds {
    pub index: isize,
    pub width: usize,
}

/// A fixed-layout byte buffer had the wrong length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("expected {expected} bytes, got {actual}")]
pub struct ByteLengthError {
    pub expected: usize,
    pub actual: usize,
}

#[test]
fn test_index_out_of_bounds_message() {
    extern crate alloc;
    use alloc::string::ToString as _;

    let e = IndexOutOfBounds { index: 12, width: 12 };
    assert_eq!(e.to_string(), "access index 12 in number of size 12");
}
