//! Decimal and hexadecimal text representations.
//!
//! Accepted forms are `-?(0|[1-9][0-9]*)` for decimal and `-?0x[0-9a-fA-F]*` for hexadecimal
//! text. Hexadecimal digits may come in any number, none at all meaning zero. A leading `-`
//! negates the magnitude given by the digits in either base.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::str::FromStr as _;

use malachite::base::num::basic::traits::Zero as _;
use malachite::{Integer, Natural};

use super::bytes_codec::{natural_from_be_bytes, natural_to_be_bytes};
use super::hexstr::{be_bytes_from_hexstr, bytes_to_hexstr, nibble_from_hexchar};
use super::int::Z;
use super::nat::N;

/// Radix used for writing numbers out as text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Base {
    #[default]
    Decimal,
    Hexadecimal,
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    }
}

fn decimal_digits(unsigned: &str) -> Option<&str> {
    let bytes = unsigned.as_bytes();
    let well_formed = match bytes {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        _ => bytes.iter().all(u8::is_ascii_digit),
    };
    well_formed.then_some(unsigned)
}

fn hex_digits(unsigned: &str) -> Option<&str> {
    let digits = unsigned.strip_prefix("0x")?;
    digits
        .bytes()
        .all(|c| nibble_from_hexchar(c).is_some())
        .then_some(digits)
}

pub fn is_decimal(s: &str) -> bool {
    decimal_digits(split_sign(s).1).is_some()
}

pub fn is_hexadecimal(s: &str) -> bool {
    hex_digits(split_sign(s).1).is_some()
}

/// Hexadecimal text all of whose digits are zero, any number of them.
pub fn is_hex_zero(s: &str) -> bool {
    hex_digits(split_sign(s).1).map_or(false, |digits| digits.bytes().all(|c| c == b'0'))
}

pub fn is_valid(s: &str) -> bool {
    is_decimal(s) || is_hexadecimal(s)
}

/// Valid text starting with a minus sign.
pub fn is_negative(s: &str) -> bool {
    is_valid(s) && s.starts_with('-')
}

/// Parse text into a sign and a magnitude.
///
/// Returns `None` for malformed text, the callers map that to their invalid value.
pub(crate) fn parse(s: &str) -> Option<(bool, Natural)> {
    let (negative, unsigned) = split_sign(s);
    let magnitude = if let Some(digits) = hex_digits(unsigned) {
        be_bytes_from_hexstr(digits)
            .ok()
            .map(|be| natural_from_be_bytes(&be))
    } else if let Some(digits) = decimal_digits(unsigned) {
        Natural::from_str(digits).ok()
    } else {
        None
    };
    match magnitude {
        Some(magnitude) => Some((negative, magnitude)),
        None => {
            log::debug!("rejecting malformed number text {:?}", s);
            None
        }
    }
}

pub(crate) fn format_natural(n: &Natural, base: Base) -> String {
    match base {
        Base::Decimal => n.to_string(),
        Base::Hexadecimal => format!("0x{}", bytes_to_hexstr(&natural_to_be_bytes(n))),
    }
}

pub(crate) fn format_integer(z: &Integer, base: Base) -> String {
    let magnitude = format_natural(z.unsigned_abs_ref(), base);
    if *z < Integer::ZERO {
        format!("-{}", magnitude)
    } else {
        magnitude
    }
}

/// Render a natural number, `None` if it's invalid.
///
/// Hexadecimal output always has an even number of digits, zero is written as `0x00`.
pub fn write_natural(n: &N, base: Base) -> Option<String> {
    n.as_natural().map(|n| format_natural(n, base))
}

/// Render an integer, `None` if it's invalid.
///
/// Negative values are written as `-` followed by their magnitude's text.
pub fn write_integer(z: &Z, base: Base) -> Option<String> {
    z.as_integer().map(|z| format_integer(z, base))
}

#[test]
fn test_is_decimal() {
    for s in ["0", "1", "10", "-0", "-1", "1234567890123456789012345678901234567890"] {
        assert!(is_decimal(s), "{}", s);
    }
    for s in ["", "-", "01", "-01", "00", "1a", "+1", "--1", " 1", "0x1"] {
        assert!(!is_decimal(s), "{}", s);
    }
}

#[test]
fn test_is_hexadecimal() {
    for s in ["0x", "0x0", "0x00", "0xabc", "0xABCdef0123", "-0x", "-0x1"] {
        assert!(is_hexadecimal(s), "{}", s);
    }
    for s in ["", "0", "x1", "0X1", "0xg", "-", "--0x1", "0x-1"] {
        assert!(!is_hexadecimal(s), "{}", s);
    }
}

#[test]
fn test_predicates() {
    assert!(is_hex_zero("0x"));
    assert!(is_hex_zero("0x000"));
    assert!(is_hex_zero("-0x00"));
    assert!(!is_hex_zero("0x01"));
    assert!(!is_hex_zero("0"));

    assert!(is_negative("-1"));
    assert!(is_negative("-0x01"));
    assert!(!is_negative("1"));
    assert!(!is_negative("-"));
    assert!(!is_negative("-x"));

    assert!(is_valid("12"));
    assert!(is_valid("0x12"));
    assert!(!is_valid("0x12 "));
    assert!(!is_valid("twelve"));
}

#[test]
fn test_parse() {
    assert_eq!(parse("0"), Some((false, Natural::from(0u32))));
    assert_eq!(parse("1234"), Some((false, Natural::from(1234u32))));
    assert_eq!(parse("-1234"), Some((true, Natural::from(1234u32))));
    assert_eq!(parse("0x"), Some((false, Natural::from(0u32))));
    assert_eq!(parse("0x4d2"), Some((false, Natural::from(1234u32))));
    assert_eq!(parse("0x04D2"), Some((false, Natural::from(1234u32))));
    assert_eq!(parse("-0x04d2"), Some((true, Natural::from(1234u32))));
    assert_eq!(
        parse("0x0100000000000000000000000000000000"),
        Some((false, Natural::from(1u32) << 128u64))
    );
    assert_eq!(parse(""), None);
    assert_eq!(parse("01"), None);
    assert_eq!(parse("0xz"), None);
}

#[test]
fn test_write() {
    assert_eq!(write_natural(&N::from(0u64), Base::Decimal).unwrap(), "0");
    assert_eq!(write_natural(&N::from(0u64), Base::Hexadecimal).unwrap(), "0x00");
    assert_eq!(write_natural(&N::from(0xabcu64), Base::Hexadecimal).unwrap(), "0x0abc");
    assert_eq!(write_natural(&N::from(0xabcdu64), Base::Hexadecimal).unwrap(), "0xabcd");
    assert_eq!(write_natural(&N::from(1234u64), Base::Decimal).unwrap(), "1234");
    assert!(write_natural(&N::invalid(), Base::Decimal).is_none());

    assert_eq!(write_integer(&Z::from(-1234i64), Base::Decimal).unwrap(), "-1234");
    assert_eq!(write_integer(&Z::from(-0xabci64), Base::Hexadecimal).unwrap(), "-0x0abc");
    assert_eq!(write_integer(&Z::from(0i64), Base::Hexadecimal).unwrap(), "0x00");
    assert!(write_integer(&Z::invalid(), Base::Hexadecimal).is_none());
}
