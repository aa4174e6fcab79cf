//! Endian-tagged byte views.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::ops;

use super::bytes_codec::{
    integer_from_be_bytes, integer_to_be_bytes, natural_from_be_bytes, natural_to_be_bytes,
};
use super::error::IndexOutOfBounds;
use super::hexstr::{be_bytes_from_hexstr, bytes_to_hexstr};
use super::int::Z;
use super::nat::N;
use super::text;

/// Byte order of a sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl Endian {
    pub fn opposite(self) -> Self {
        match self {
            Self::Big => Self::Little,
            Self::Little => Self::Big,
        }
    }
}

/// Whether a byte view is interpreted as a magnitude or in two's complement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signedness {
    Unsigned,
    Signed,
}

/// A byte sequence of fixed width together with its byte order and signedness.
///
/// Shifts preserve the width. Following the bit-shrink convention of this view, `<<` moves
/// bits towards the least significant end and `>>` moves them towards the most significant end.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EndianBytes {
    bytes: Vec<u8>,
    order: Endian,
    signedness: Signedness,
}

impl EndianBytes {
    pub fn new(bytes: Vec<u8>, order: Endian, signedness: Signedness) -> Self {
        Self {
            bytes,
            order,
            signedness,
        }
    }

    pub fn zero(len: usize, order: Endian, signedness: Signedness) -> Self {
        Self::new(alloc::vec![0u8; len], order, signedness)
    }

    /// Parse `0x`-prefixed hex text, most significant digit first, into a view.
    ///
    /// The width is the number of digits rounded up to whole bytes. Returns `None` for anything
    /// but non-negative hexadecimal text.
    pub fn read(s: &str, order: Endian, signedness: Signedness) -> Option<Self> {
        if !text::is_hexadecimal(s) || text::is_negative(s) {
            log::debug!("rejecting malformed byte view text {:?}", s);
            return None;
        }
        let digits = s.strip_prefix("0x")?;
        let be = be_bytes_from_hexstr(digits).ok()?;
        Some(Self::from_big_endian(be, order, signedness))
    }

    /// Minimal unsigned encoding of a natural number, `None` if it's invalid.
    pub fn from_n(n: &N, order: Endian) -> Option<Self> {
        let be = natural_to_be_bytes(n.as_natural()?);
        Some(Self::from_big_endian(be, order, Signedness::Unsigned))
    }

    /// Minimal two's complement encoding of an integer, `None` if it's invalid.
    pub fn from_z(z: &Z, order: Endian) -> Option<Self> {
        let be = integer_to_be_bytes(z.as_integer()?);
        Some(Self::from_big_endian(be, order, Signedness::Signed))
    }

    fn from_big_endian(mut be: Vec<u8>, order: Endian, signedness: Signedness) -> Self {
        if order == Endian::Little {
            be.reverse();
        }
        Self::new(be, order, signedness)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn order(&self) -> Endian {
        self.order
    }

    pub fn signedness(&self) -> Signedness {
        self.signedness
    }

    /// Whether the view is signed and its sign bit is set.
    pub fn is_negative(&self) -> bool {
        self.signedness == Signedness::Signed
            && self.most_significant_byte().map_or(false, |b| b & 0x80 != 0)
    }

    fn most_significant_byte(&self) -> Option<u8> {
        match self.order {
            Endian::Big => self.bytes.first().copied(),
            Endian::Little => self.bytes.last().copied(),
        }
    }

    /// Access the byte stored at position `i`, negative positions count from the end.
    pub fn byte(&self, i: isize) -> Result<u8, IndexOutOfBounds> {
        let len = self.bytes.len();
        let out_of_bounds = IndexOutOfBounds {
            index: i,
            width: len,
        };
        let j = if i < 0 {
            len.checked_sub(i.unsigned_abs()).ok_or(out_of_bounds)?
        } else {
            i as usize
        };
        self.bytes.get(j).copied().ok_or(out_of_bounds)
    }

    pub fn to_big_endian(&self) -> Vec<u8> {
        let mut be = self.bytes.clone();
        if self.order == Endian::Little {
            be.reverse();
        }
        be
    }

    /// The same value stored in the given byte order.
    pub fn to_order(&self, order: Endian) -> Self {
        Self::from_big_endian(self.to_big_endian(), order, self.signedness)
    }

    fn shrink(&self, distance: u32) -> Self {
        let fill = if self.is_negative() { 0xffu8 } else { 0 };
        let be = self.to_big_endian();
        let len = be.len() as u64;
        let byte_distance = u64::from(distance / 8);
        let bit_distance = distance % 8;
        // Byte i receives bits from source bytes i - byte_distance and the one before it.
        let src = |i: u64, back: u64| -> u8 {
            if i < byte_distance + back {
                fill
            } else {
                be[(i - byte_distance - back) as usize]
            }
        };
        let shifted = (0..len)
            .map(|i| {
                if bit_distance == 0 {
                    src(i, 0)
                } else {
                    src(i, 0) >> bit_distance | src(i, 1) << (8 - bit_distance)
                }
            })
            .collect();
        Self::from_big_endian(shifted, self.order, self.signedness)
    }

    fn grow(&self, distance: u32) -> Self {
        let be = self.to_big_endian();
        let len = be.len() as u64;
        let byte_distance = u64::from(distance / 8);
        let bit_distance = distance % 8;
        let src = |j: u64| -> u8 {
            match j.checked_add(byte_distance) {
                Some(k) if k < len => be[k as usize],
                _ => 0,
            }
        };
        let shifted = (0..len)
            .map(|i| {
                let cur = src(i);
                if bit_distance == 0 {
                    cur
                } else {
                    cur << bit_distance | src(i + 1) >> (8 - bit_distance)
                }
            })
            .collect();
        Self::from_big_endian(shifted, self.order, self.signedness)
    }
}

impl fmt::Debug for EndianBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EndianBytes({:?}, {:?}, 0x{})",
            self.order,
            self.signedness,
            bytes_to_hexstr(&self.to_big_endian())
        )
    }
}

/// Most significant byte first, regardless of the storage order.
impl fmt::LowerHex for EndianBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", bytes_to_hexstr(&self.to_big_endian()))
    }
}

impl ops::Not for &EndianBytes {
    type Output = EndianBytes;

    fn not(self) -> EndianBytes {
        EndianBytes::new(
            self.bytes.iter().map(|b| !b).collect(),
            self.order,
            self.signedness,
        )
    }
}

impl ops::Not for EndianBytes {
    type Output = EndianBytes;

    fn not(self) -> EndianBytes {
        !&self
    }
}

impl ops::Shl<u32> for &EndianBytes {
    type Output = EndianBytes;

    fn shl(self, distance: u32) -> EndianBytes {
        self.shrink(distance)
    }
}

impl ops::Shl<u32> for EndianBytes {
    type Output = EndianBytes;

    fn shl(self, distance: u32) -> EndianBytes {
        self.shrink(distance)
    }
}

impl ops::ShlAssign<u32> for EndianBytes {
    fn shl_assign(&mut self, distance: u32) {
        *self = self.shrink(distance);
    }
}

impl ops::Shr<u32> for &EndianBytes {
    type Output = EndianBytes;

    fn shr(self, distance: u32) -> EndianBytes {
        self.grow(distance)
    }
}

impl ops::Shr<u32> for EndianBytes {
    type Output = EndianBytes;

    fn shr(self, distance: u32) -> EndianBytes {
        self.grow(distance)
    }
}

impl ops::ShrAssign<u32> for EndianBytes {
    fn shr_assign(&mut self, distance: u32) {
        *self = self.grow(distance);
    }
}

impl From<&EndianBytes> for N {
    fn from(view: &EndianBytes) -> Self {
        match view.signedness {
            Signedness::Unsigned => N::from_natural(natural_from_be_bytes(&view.to_big_endian())),
            Signedness::Signed => N::from_integer(&Z::from(view)),
        }
    }
}

impl From<&EndianBytes> for Z {
    fn from(view: &EndianBytes) -> Self {
        let be = view.to_big_endian();
        match view.signedness {
            Signedness::Unsigned => Z::from(&N::from_natural(natural_from_be_bytes(&be))),
            Signedness::Signed => Z::from_integer(integer_from_be_bytes(&be)),
        }
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::Zeroize for EndianBytes {
    fn zeroize(&mut self) {
        zeroize::Zeroize::zeroize(self.bytes.as_mut_slice());
    }
}

#[cfg(test)]
fn view(s: &str, order: Endian, signedness: Signedness) -> EndianBytes {
    EndianBytes::read(s, order, signedness).unwrap()
}

#[test]
fn test_read() {
    let v = view("0x0102", Endian::Big, Signedness::Unsigned);
    assert_eq!(v.as_bytes(), [0x01, 0x02]);
    let v = view("0x0102", Endian::Little, Signedness::Unsigned);
    assert_eq!(v.as_bytes(), [0x02, 0x01]);
    let v = view("0x102", Endian::Big, Signedness::Unsigned);
    assert_eq!(v.as_bytes(), [0x01, 0x02]);
    assert!(view("0x", Endian::Big, Signedness::Unsigned).is_empty());
    assert!(EndianBytes::read("-0x01", Endian::Big, Signedness::Signed).is_none());
    assert!(EndianBytes::read("0x0g", Endian::Big, Signedness::Signed).is_none());
    assert!(EndianBytes::read("12", Endian::Big, Signedness::Signed).is_none());
}

#[test]
fn test_complement() {
    for order in [Endian::Big, Endian::Little] {
        for signedness in [Signedness::Unsigned, Signedness::Signed] {
            let zero = view("0x00", order, signedness);
            let ones = view("0xff", order, signedness);
            assert_eq!(!&zero, ones);
            assert_eq!(!&ones, zero);
            let v = view("0x00ff01", order, signedness);
            assert_eq!(!v, view("0xff00fe", order, signedness));
        }
    }
}

#[test]
fn test_shift() {
    for order in [Endian::Big, Endian::Little] {
        for signedness in [Signedness::Unsigned, Signedness::Signed] {
            let v = view("0x100000000001000000000001", order, signedness);
            let expect = |s: &str| view(s, order, signedness);
            assert_eq!(&v << 1, expect("0x080000000000800000000000"));
            assert_eq!(&v >> 1, expect("0x200000000002000000000002"));
            assert_eq!(&v >> 4, expect("0x000000000010000000000010"));
            assert_eq!(&v << 33, expect("0x000000000800000000008000"));
            assert_eq!(&v >> 33, expect("0x000200000000000200000000"));
            assert_eq!(&v << 66, expect("0x000000000000000004000000"));
            assert_eq!(&v >> 66, expect("0x000000040000000000000000"));
            assert_eq!(&v << 0, v);
            assert_eq!(&v << 96, expect("0x000000000000000000000000"));
            assert_eq!(&v >> 200, expect("0x000000000000000000000000"));

            let mut w = v.clone();
            w >>= 1;
            w <<= 1;
            assert_eq!(w, v);
        }
    }
}

#[test]
fn test_shift_sign_fill() {
    let v = view("0x8000", Endian::Big, Signedness::Signed);
    assert_eq!(&v << 4, view("0xf800", Endian::Big, Signedness::Signed));
    assert_eq!(&v << 12, view("0xfff8", Endian::Big, Signedness::Signed));
    let v = view("0x8000", Endian::Little, Signedness::Signed);
    assert_eq!(&v << 16, view("0xffff", Endian::Little, Signedness::Signed));
    let v = view("0x8000", Endian::Big, Signedness::Unsigned);
    assert_eq!(&v << 4, view("0x0800", Endian::Big, Signedness::Unsigned));
}

#[test]
fn test_byte() {
    let v = view("0x010203", Endian::Big, Signedness::Unsigned);
    assert_eq!(v.byte(0), Ok(0x01));
    assert_eq!(v.byte(2), Ok(0x03));
    assert_eq!(v.byte(-1), Ok(0x03));
    assert_eq!(v.byte(-3), Ok(0x01));
    assert_eq!(
        v.byte(3),
        Err(IndexOutOfBounds {
            index: 3,
            width: 3
        })
    );
    let e = v.byte(-4).unwrap_err();
    assert_eq!(e.to_string(), "access index -4 in number of size 3");

    let v = view("0x010203", Endian::Little, Signedness::Unsigned);
    assert_eq!(v.byte(0), Ok(0x03));
    assert_eq!(v.byte(-1), Ok(0x01));
}

#[test]
fn test_to_order() {
    let v = view("0x010203", Endian::Big, Signedness::Signed);
    let l = v.to_order(Endian::Little);
    assert_eq!(l.as_bytes(), [0x03, 0x02, 0x01]);
    assert_eq!(l.order(), Endian::Little);
    assert_eq!(l.to_big_endian(), v.as_bytes());
    assert_eq!(Z::from(&l), Z::from(&v));
    assert_eq!(l.to_order(Endian::Big), v);
}

#[test]
fn test_numeric_conversions() {
    let v = view("0xff7f", Endian::Big, Signedness::Signed);
    assert!(v.is_negative());
    assert_eq!(Z::from(&v), -129i64);
    assert_eq!(N::from(&v), 0u64);
    let v = view("0xff7f", Endian::Big, Signedness::Unsigned);
    assert!(!v.is_negative());
    assert_eq!(Z::from(&v), 0xff7fi64);
    assert_eq!(N::from(&v), 0xff7fu64);

    let v = EndianBytes::from_n(&N::from(0x0102u64), Endian::Little).unwrap();
    assert_eq!(v.as_bytes(), [0x02, 0x01]);
    let v = EndianBytes::from_z(&Z::from(-129i64), Endian::Big).unwrap();
    assert_eq!(v.as_bytes(), [0xff, 0x7f]);
    assert_eq!(format!("{:x}", v.to_order(Endian::Little)), "0xff7f");
    assert!(EndianBytes::from_n(&N::invalid(), Endian::Big).is_none());
    assert!(EndianBytes::from_z(&Z::invalid(), Endian::Big).is_none());
}

#[cfg(feature = "zeroize")]
#[test]
fn test_zeroize() {
    use zeroize::Zeroize as _;
    let mut v = view("0x0102", Endian::Big, Signedness::Unsigned);
    v.zeroize();
    assert_eq!(v.as_bytes(), [0, 0]);
}
