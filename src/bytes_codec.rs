//! Conversions between byte sequences and arbitrary-precision values.
//!
//! Unsigned values are encoded as their minimal magnitude, zero as the single byte `0x00`.
//! Signed values use minimal two's complement: the most significant byte's top bit carries the
//! sign and the encoding is the shortest one for which that holds. Little-endian sequences are
//! the byte reversal of the big-endian ones.

extern crate alloc;

use alloc::vec::Vec;

use malachite::base::num::basic::traits::{One as _, Zero as _};
use malachite::base::num::conversion::traits::PowerOf2Digits;
use malachite::{Integer, Natural};

use super::endian::Endian;
use super::int::Z;
use super::nat::N;

pub(crate) fn natural_from_be_bytes(bytes: &[u8]) -> Natural {
    // Bytes are always valid base 2^8 digits.
    <Natural as PowerOf2Digits<u8>>::from_power_of_2_digits_desc(8, bytes.iter().copied())
        .unwrap_or(Natural::ZERO)
}

pub(crate) fn natural_to_be_bytes(n: &Natural) -> Vec<u8> {
    let mut bytes = PowerOf2Digits::<u8>::to_power_of_2_digits_desc(n, 8);
    if bytes.is_empty() {
        bytes.push(0);
    }
    bytes
}

pub(crate) fn integer_from_be_bytes(bytes: &[u8]) -> Integer {
    let magnitude = Integer::from(natural_from_be_bytes(bytes));
    match bytes.first() {
        Some(b) if b & 0x80 != 0 => magnitude - (Integer::ONE << (8 * bytes.len() as u64)),
        _ => magnitude,
    }
}

pub(crate) fn integer_to_be_bytes(z: &Integer) -> Vec<u8> {
    if *z >= Integer::ZERO {
        let mut bytes = natural_to_be_bytes(z.unsigned_abs_ref());
        if bytes[0] & 0x80 != 0 {
            bytes.insert(0, 0);
        }
        return bytes;
    }

    // -m == !(m - 1) in two's complement.
    let m1 = z.unsigned_abs_ref() - &Natural::ONE;
    let mut bytes = PowerOf2Digits::<u8>::to_power_of_2_digits_desc(&m1, 8);
    if bytes.first().map_or(true, |b| b & 0x80 != 0) {
        bytes.insert(0, 0);
    }
    for b in bytes.iter_mut() {
        *b = !*b;
    }
    bytes
}

fn to_big_endian(bytes: &[u8], order: Endian) -> Vec<u8> {
    let mut bytes = bytes.to_vec();
    if order == Endian::Little {
        bytes.reverse();
    }
    bytes
}

fn from_big_endian(mut bytes: Vec<u8>, order: Endian) -> Vec<u8> {
    if order == Endian::Little {
        bytes.reverse();
    }
    bytes
}

/// Interpret a byte sequence as an unsigned magnitude.
///
/// Empty and all-zero sequences of any length decode to zero.
pub fn read_bytes(bytes: &[u8], order: Endian) -> N {
    N::from_natural(natural_from_be_bytes(&to_big_endian(bytes, order)))
}

/// Encode a natural number as its minimal magnitude.
///
/// Zero encodes to a single zero byte. Returns `None` for the invalid value.
pub fn write_bytes(n: &N, order: Endian) -> Option<Vec<u8>> {
    n.as_natural()
        .map(|n| from_big_endian(natural_to_be_bytes(n), order))
}

/// Interpret a byte sequence as a two's complement signed integer.
pub fn read_signed_bytes(bytes: &[u8], order: Endian) -> Z {
    Z::from_integer(integer_from_be_bytes(&to_big_endian(bytes, order)))
}

/// Encode an integer in minimal two's complement.
///
/// Returns `None` for the invalid value.
pub fn write_signed_bytes(z: &Z, order: Endian) -> Option<Vec<u8>> {
    z.as_integer()
        .map(|z| from_big_endian(integer_to_be_bytes(z), order))
}

#[test]
fn test_read_bytes() {
    assert_eq!(read_bytes(&[], Endian::Big), 0u64);
    assert_eq!(read_bytes(&[0, 0, 0, 0], Endian::Big), 0u64);
    assert_eq!(read_bytes(&[0, 0, 0, 0], Endian::Little), 0u64);
    assert_eq!(read_bytes(&[0x01, 0x02], Endian::Big), 0x0102u64);
    assert_eq!(read_bytes(&[0x01, 0x02], Endian::Little), 0x0201u64);
    assert_eq!(read_bytes(&[0x00, 0x00, 0x01, 0x02], Endian::Big), 0x0102u64);
}

#[test]
fn test_write_bytes() {
    assert_eq!(write_bytes(&N::from(0u64), Endian::Big).unwrap(), [0x00]);
    assert_eq!(write_bytes(&N::from(0u64), Endian::Little).unwrap(), [0x00]);
    assert_eq!(write_bytes(&N::from(0x0102u64), Endian::Big).unwrap(), [0x01, 0x02]);
    assert_eq!(write_bytes(&N::from(0x0102u64), Endian::Little).unwrap(), [0x02, 0x01]);
    assert_eq!(write_bytes(&N::from(0x80u64), Endian::Big).unwrap(), [0x80]);
    assert!(write_bytes(&N::invalid(), Endian::Big).is_none());
}

#[test]
fn test_read_signed_bytes() {
    assert_eq!(read_signed_bytes(&[], Endian::Big), 0i64);
    assert_eq!(read_signed_bytes(&[0x00], Endian::Big), 0i64);
    assert_eq!(read_signed_bytes(&[0xff], Endian::Big), -1i64);
    assert_eq!(read_signed_bytes(&[0x80], Endian::Big), -128i64);
    assert_eq!(read_signed_bytes(&[0x00, 0x80], Endian::Big), 128i64);
    assert_eq!(read_signed_bytes(&[0xff, 0x7f], Endian::Big), -129i64);
    assert_eq!(read_signed_bytes(&[0x7f, 0xff], Endian::Little), -129i64);
    assert_eq!(read_signed_bytes(&[0xff, 0xff, 0xff], Endian::Big), -1i64);
}

#[test]
fn test_write_signed_bytes() {
    let cases: [(i64, &[u8]); 9] = [
        (0, &[0x00]),
        (1, &[0x01]),
        (127, &[0x7f]),
        (128, &[0x00, 0x80]),
        (-1, &[0xff]),
        (-128, &[0x80]),
        (-129, &[0xff, 0x7f]),
        (-256, &[0xff, 0x00]),
        (-32768, &[0x80, 0x00]),
    ];
    for (v, expected) in cases {
        let z = Z::from(v);
        assert_eq!(write_signed_bytes(&z, Endian::Big).unwrap(), expected);
        let mut little = expected.to_vec();
        little.reverse();
        assert_eq!(write_signed_bytes(&z, Endian::Little).unwrap(), little);
        assert_eq!(read_signed_bytes(expected, Endian::Big), z);
    }
    assert!(write_signed_bytes(&Z::invalid(), Endian::Big).is_none());
}

#[cfg(test)]
proptest::proptest! {
    #[test]
    fn prop_bytes_round_trip(bytes in proptest::collection::vec(proptest::num::u8::ANY, 0..48)) {
        let n = read_bytes(&bytes, Endian::Big);
        for order in [Endian::Big, Endian::Little] {
            let encoded = write_bytes(&n, order).unwrap();
            proptest::prop_assert_eq!(read_bytes(&encoded, order), n.clone());
        }
    }

    #[test]
    fn prop_signed_bytes_round_trip(bytes in proptest::collection::vec(proptest::num::u8::ANY, 0..48)) {
        let z = read_signed_bytes(&bytes, Endian::Big);
        for order in [Endian::Big, Endian::Little] {
            let encoded = write_signed_bytes(&z, order).unwrap();
            proptest::prop_assert_eq!(read_signed_bytes(&encoded, order), z.clone());
        }
    }
}
