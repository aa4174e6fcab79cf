//! Conversions between hexadecimal digit strings and big-endian byte sequences.
//!
//! These helpers deal with bare digits only, the `0x` prefix and sign are handled by the
//! [`text`](crate::text) codec.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[derive(PartialEq, Eq, Debug, Clone, Copy, thiserror::Error)]
pub enum BytesFromHexStrError {
    #[error("invalid hex string length")]
    InvalidHexStrLen,
    #[error("invalid hex character")]
    InvalidHexChar,
}

pub(crate) fn nibble_from_hexchar(hex_char: u8) -> Option<u8> {
    match hex_char {
        b'0'..=b'9' => Some(hex_char - b'0'),
        b'a'..=b'f' => Some(hex_char - b'a' + 0xa),
        b'A'..=b'F' => Some(hex_char - b'A' + 0xa),
        _ => None,
    }
}

fn nibble_to_hexchar(nibble: u8) -> char {
    let c = match nibble {
        0x0..=0x9 => b'0' + nibble,
        0xa..=0xf => b'a' + (nibble - 0xa),
        _ => unreachable!(),
    };
    c as char
}

/// Convert a string of hex digits into big-endian bytes.
///
/// An odd number of digits is accepted, the missing most significant nibble is taken to be
/// zero. The empty string converts to an empty byte sequence.
pub fn be_bytes_from_hexstr(hexstr: &str) -> Result<Vec<u8>, BytesFromHexStrError> {
    let hexstr = hexstr.as_bytes();
    let mut result = Vec::with_capacity((hexstr.len() + 1) / 2);
    let (head, tail) = hexstr.split_at(hexstr.len() % 2);
    if let Some(c) = head.first() {
        result.push(nibble_from_hexchar(*c).ok_or(BytesFromHexStrError::InvalidHexChar)?);
    }
    for pair in tail.chunks_exact(2) {
        let high = nibble_from_hexchar(pair[0]).ok_or(BytesFromHexStrError::InvalidHexChar)?;
        let low = nibble_from_hexchar(pair[1]).ok_or(BytesFromHexStrError::InvalidHexChar)?;
        result.push(high << 4 | low);
    }
    Ok(result)
}

#[test]
fn test_be_bytes_from_hexstr() {
    assert_eq!(
        be_bytes_from_hexstr("0123456789abcdefABCDEF").unwrap(),
        [0x01u8, 0x23u8, 0x45u8, 0x67u8, 0x89u8, 0xabu8, 0xcdu8, 0xefu8, 0xabu8, 0xcdu8, 0xefu8],
    );
    assert_eq!(
        be_bytes_from_hexstr("123456789abcdefABCDEF").unwrap(),
        [0x01u8, 0x23u8, 0x45u8, 0x67u8, 0x89u8, 0xabu8, 0xcdu8, 0xefu8, 0xabu8, 0xcdu8, 0xefu8],
    );
    assert!(be_bytes_from_hexstr("").unwrap().is_empty());
    assert_eq!(be_bytes_from_hexstr("0").unwrap(), [0x00u8]);
    assert_eq!(be_bytes_from_hexstr("0g"), Err(BytesFromHexStrError::InvalidHexChar));
    assert_eq!(be_bytes_from_hexstr("x"), Err(BytesFromHexStrError::InvalidHexChar));
}

/// Convert a string of exactly `2 * len` hex digits into big-endian bytes.
pub fn bytes_from_hexstr(hexstr: &str, len: usize) -> Result<Vec<u8>, BytesFromHexStrError> {
    if hexstr.len() != 2 * len {
        return Err(BytesFromHexStrError::InvalidHexStrLen);
    }
    be_bytes_from_hexstr(hexstr)
}

#[test]
fn test_bytes_from_hexstr() {
    assert_eq!(
        bytes_from_hexstr("0123456789abcdefABCDEF", 11).unwrap(),
        [0x01u8, 0x23u8, 0x45u8, 0x67u8, 0x89u8, 0xabu8, 0xcdu8, 0xefu8, 0xabu8, 0xcdu8, 0xefu8],
    );
    assert_eq!(
        bytes_from_hexstr("123456789abcdefABCDEF", 11),
        Err(BytesFromHexStrError::InvalidHexStrLen)
    );
}

pub fn bytes_to_hexstr(bytes: &[u8]) -> String {
    let mut result = String::with_capacity(2 * bytes.len());
    for b in bytes {
        result.push(nibble_to_hexchar(b >> 4));
        result.push(nibble_to_hexchar(b & 0xf))
    }
    result
}

#[test]
fn test_bytes_to_hexstr() {
    assert_eq!(
        bytes_to_hexstr(&[0x01u8, 0x23u8, 0x45u8, 0x67u8, 0x89u8, 0xabu8, 0xcdu8, 0xefu8,]),
        "0123456789abcdef",
    );
    assert_eq!(bytes_to_hexstr(&[]), "");
}
