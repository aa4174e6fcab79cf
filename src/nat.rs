//! Arbitrary-precision natural numbers.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::ops;

use malachite::base::num::basic::traits::{One as _, Zero as _};
use malachite::base::num::conversion::traits::PowerOf2Digits;
use malachite::{Integer, Natural};

use super::bytes_codec;
use super::endian::Endian;
use super::error::{DivisionByZero, RangeError};
use super::int::Z;
use super::number::Division;
use super::text::{self, Base};

/// An unbounded non-negative integer, or the invalid value.
///
/// The invalid value results from reading malformed text and propagates through all arithmetic.
/// Two invalid values compare equal, an invalid value is unequal to every valid one.
/// Subtraction saturates at zero.
#[derive(Clone)]
pub struct N {
    value: Option<Natural>,
}

pub(crate) fn natural_to_u64(n: &Natural) -> Option<u64> {
    let digits = PowerOf2Digits::<u64>::to_power_of_2_digits_asc(n, 64);
    match digits.as_slice() {
        [] => Some(0),
        [d] => Some(*d),
        _ => None,
    }
}

impl N {
    pub fn zero() -> Self {
        Self::from_natural(Natural::ZERO)
    }

    pub fn one() -> Self {
        Self::from_natural(Natural::ONE)
    }

    pub fn invalid() -> Self {
        Self { value: None }
    }

    pub(crate) fn from_natural(n: Natural) -> Self {
        Self { value: Some(n) }
    }

    pub(crate) fn as_natural(&self) -> Option<&Natural> {
        self.value.as_ref()
    }

    pub fn is_valid(&self) -> bool {
        self.value.is_some()
    }

    /// Whether the value is a valid zero.
    pub fn is_zero(&self) -> bool {
        self.value.as_ref().map_or(false, |n| *n == Natural::ZERO)
    }

    /// Parse decimal or hexadecimal text.
    ///
    /// Malformed text and negative literals both produce the invalid value.
    pub fn read(s: &str) -> Self {
        match text::parse(s) {
            Some((false, magnitude)) => Self::from_natural(magnitude),
            Some((true, _)) => {
                log::debug!("rejecting negative natural number text {:?}", s);
                Self::invalid()
            }
            None => Self::invalid(),
        }
    }

    pub fn read_bytes(bytes: &[u8], order: Endian) -> Self {
        bytes_codec::read_bytes(bytes, order)
    }

    pub fn write_bytes(&self, order: Endian) -> Option<Vec<u8>> {
        bytes_codec::write_bytes(self, order)
    }

    pub fn write(&self, base: Base) -> Option<String> {
        text::write_natural(self, base)
    }

    /// Narrow an integer, negative values become zero.
    pub fn from_integer(z: &Z) -> Self {
        match z.as_integer() {
            Some(z) if *z >= Integer::ZERO => Self::from_natural(z.unsigned_abs_ref().clone()),
            Some(_) => Self::zero(),
            None => Self::invalid(),
        }
    }

    /// Quotient and remainder.
    ///
    /// An invalid operand yields invalid quotient and remainder.
    pub fn divide(&self, divisor: &N) -> Result<Division<N>, DivisionByZero> {
        let (n, d) = match (&self.value, &divisor.value) {
            (Some(n), Some(d)) => (n, d),
            _ => {
                return Ok(Division {
                    quotient: Self::invalid(),
                    remainder: Self::invalid(),
                })
            }
        };
        if *d == Natural::ZERO {
            log::debug!("natural number division by zero");
            return Err(DivisionByZero);
        }
        Ok(Division {
            quotient: Self::from_natural(n / d),
            remainder: Self::from_natural(n % d),
        })
    }

    /// Whether `divisor` divides this value without remainder.
    pub fn is_divisible_by(&self, divisor: &N) -> Result<bool, DivisionByZero> {
        Ok(self.divide(divisor)?.remainder.is_zero())
    }

    pub fn increment(&mut self) {
        *self += 1u64;
    }

    /// Decrement, saturating at zero.
    pub fn decrement(&mut self) {
        *self -= 1u64;
    }

    /// Increment and return the previous value.
    pub fn post_increment(&mut self) -> Self {
        let old = self.clone();
        self.increment();
        old
    }

    /// Decrement and return the previous value.
    pub fn post_decrement(&mut self) -> Self {
        let old = self.clone();
        self.decrement();
        old
    }

    fn zip_with<F: FnOnce(&Natural, &Natural) -> Natural>(&self, rhs: &N, f: F) -> N {
        match (&self.value, &rhs.value) {
            (Some(a), Some(b)) => Self::from_natural(f(a, b)),
            _ => Self::invalid(),
        }
    }

    fn map<F: FnOnce(&Natural) -> Natural>(&self, f: F) -> N {
        match &self.value {
            Some(a) => Self::from_natural(f(a)),
            None => Self::invalid(),
        }
    }
}

impl Default for N {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for N {
    fn from(value: u64) -> Self {
        Self::from_natural(Natural::from(value))
    }
}

impl From<u32> for N {
    fn from(value: u32) -> Self {
        Self::from_natural(Natural::from(value))
    }
}

impl TryFrom<&N> for u64 {
    type Error = RangeError;

    fn try_from(n: &N) -> Result<Self, Self::Error> {
        n.as_natural()
            .and_then(natural_to_u64)
            .ok_or(RangeError { target: "u64" })
    }
}

impl PartialEq for N {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for N {}

impl PartialOrd for N {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (&self.value, &other.value) {
            (Some(a), Some(b)) => Some(a.cmp(b)),
            (None, None) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl PartialEq<u64> for N {
    fn eq(&self, other: &u64) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd<u64> for N {
    fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
        self.value.as_ref().map(|n| n.cmp(&Natural::from(*other)))
    }
}

impl PartialEq<Z> for N {
    fn eq(&self, other: &Z) -> bool {
        Z::from(self) == *other
    }
}

impl PartialOrd<Z> for N {
    fn partial_cmp(&self, other: &Z) -> Option<Ordering> {
        Z::from(self).partial_cmp(other)
    }
}

impl fmt::Debug for N {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(n) => write!(f, "N({})", n),
            None => write!(f, "N(invalid)"),
        }
    }
}

impl fmt::Display for N {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(n) => write!(f, "{}", n),
            None => write!(f, "invalid"),
        }
    }
}

impl fmt::LowerHex for N {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(n) => f.write_str(&text::format_natural(n, Base::Hexadecimal)),
            None => write!(f, "invalid"),
        }
    }
}

impl ops::Add<&N> for &N {
    type Output = N;

    fn add(self, rhs: &N) -> N {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl ops::Sub<&N> for &N {
    type Output = N;

    fn sub(self, rhs: &N) -> N {
        self.zip_with(rhs, |a, b| if a > b { a - b } else { Natural::ZERO })
    }
}

impl ops::Mul<&N> for &N {
    type Output = N;

    fn mul(self, rhs: &N) -> N {
        self.zip_with(rhs, |a, b| a * b)
    }
}

/// Panics on a zero divisor, [`N::divide`] is the non-panicking form.
impl ops::Div<&N> for &N {
    type Output = N;

    fn div(self, rhs: &N) -> N {
        match self.divide(rhs) {
            Ok(division) => division.quotient,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

/// Panics on a zero divisor, [`N::divide`] is the non-panicking form.
impl ops::Rem<&N> for &N {
    type Output = N;

    fn rem(self, rhs: &N) -> N {
        match self.divide(rhs) {
            Ok(division) => division.remainder,
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

forward_binop_to_ref!(impl Add, add for N, N => N);
forward_binop_to_ref!(impl Sub, sub for N, N => N);
forward_binop_to_ref!(impl Mul, mul for N, N => N);
forward_binop_to_ref!(impl Div, div for N, N => N);
forward_binop_to_ref!(impl Rem, rem for N, N => N);
forward_assign_to_ref!(impl AddAssign, add_assign for N, N, Add, add);
forward_assign_to_ref!(impl SubAssign, sub_assign for N, N, Sub, sub);
forward_assign_to_ref!(impl MulAssign, mul_assign for N, N, Mul, mul);
forward_assign_to_ref!(impl DivAssign, div_assign for N, N, Div, div);
forward_assign_to_ref!(impl RemAssign, rem_assign for N, N, Rem, rem);

macro_rules! impl_u64_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
        impl ops::$imp<u64> for &N {
            type Output = N;

            fn $method(self, rhs: u64) -> N {
                ops::$imp::$method(self, &N::from(rhs))
            }
        }

        forward_scalar_binop_to_ref!(impl $imp, $method for N, u64 => N);
        forward_scalar_assign_to_ref!(impl $assign_imp, $assign_method for N, u64, $imp, $method);
    };
}

impl_u64_binop!(Add, add, AddAssign, add_assign);
impl_u64_binop!(Sub, sub, SubAssign, sub_assign);
impl_u64_binop!(Mul, mul, MulAssign, mul_assign);
impl_u64_binop!(Div, div, DivAssign, div_assign);
impl_u64_binop!(Rem, rem, RemAssign, rem_assign);

impl ops::BitXor<u32> for &N {
    type Output = N;

    fn bitxor(self, rhs: u32) -> N {
        self.map(|a| a ^ &Natural::from(rhs))
    }
}

/// Shift towards the most significant end, negative distances shift the other way.
impl ops::Shl<i64> for &N {
    type Output = N;

    fn shl(self, distance: i64) -> N {
        self.map(|a| a << distance)
    }
}

/// Shift towards the least significant end, negative distances shift the other way.
impl ops::Shr<i64> for &N {
    type Output = N;

    fn shr(self, distance: i64) -> N {
        self.map(|a| a >> distance)
    }
}

forward_scalar_binop_to_ref!(impl BitXor, bitxor for N, u32 => N);
forward_scalar_binop_to_ref!(impl Shl, shl for N, i64 => N);
forward_scalar_binop_to_ref!(impl Shr, shr for N, i64 => N);
forward_scalar_assign_to_ref!(impl BitXorAssign, bitxor_assign for N, u32, BitXor, bitxor);
forward_scalar_assign_to_ref!(impl ShlAssign, shl_assign for N, i64, Shl, shl);
forward_scalar_assign_to_ref!(impl ShrAssign, shr_assign for N, i64, Shr, shr);

#[test]
fn test_invalid() {
    let invalid = N::read("12a");
    assert!(!invalid.is_valid());
    assert_eq!(invalid, N::invalid());
    assert_ne!(invalid, N::zero());
    assert_ne!(invalid, 0u64);
    assert!(!invalid.is_zero());
    assert_eq!(invalid.partial_cmp(&N::invalid()), Some(Ordering::Equal));
    assert_eq!(invalid.partial_cmp(&N::one()), None);
    assert!(!(invalid < 1u64));
    assert!(!(invalid >= 1u64));

    assert!(!(&invalid + 1u64).is_valid());
    assert!(!(N::one() - &invalid).is_valid());
    assert!(!(&invalid << 3).is_valid());
    let d = invalid.divide(&N::zero()).unwrap();
    assert!(!d.quotient.is_valid());
    assert!(!d.remainder.is_valid());
    assert!(u64::try_from(&invalid).is_err());
    assert!(invalid.write(Base::Decimal).is_none());
}

#[test]
fn test_read() {
    assert_eq!(N::read("0"), 0u64);
    assert_eq!(N::read("1234"), 1234u64);
    assert_eq!(N::read("0x04d2"), 1234u64);
    assert_eq!(N::read("0x"), 0u64);
    assert!(!N::read("-1").is_valid());
    assert!(!N::read("-0x01").is_valid());
    assert!(!N::read("").is_valid());
    assert!(!N::read("007").is_valid());
}

#[test]
fn test_arithmetic() {
    let a = N::from(1000u64);
    let b = N::from(7u64);
    assert_eq!(&a + &b, 1007u64);
    assert_eq!(&a - &b, 993u64);
    assert_eq!(&b - &a, 0u64);
    assert_eq!(&a * &b, 7000u64);
    assert_eq!(&a / &b, 142u64);
    assert_eq!(&a % &b, 6u64);
    assert_eq!(a.clone() + 1u64, 1001u64);
    assert_eq!(a.clone() - 1001u64, 0u64);
    assert_eq!(a.clone() ^ 0x3ffu32, 0x17u64);

    let mut c = N::from(5u64);
    c += &b;
    assert_eq!(c, 12u64);
    c -= 20u64;
    assert_eq!(c, 0u64);
    c += 3u64;
    c *= N::from(4u64);
    assert_eq!(c, 12u64);
    c /= 5u64;
    assert_eq!(c, 2u64);
    c %= 2u64;
    assert!(c.is_zero());

    let big = N::read("340282366920938463463374607431768211456");
    assert_eq!(big, N::one() << 128);
    assert_eq!(&big - 1u64, N::read("0xffffffffffffffffffffffffffffffff"));
}

#[test]
fn test_divide() {
    let d = N::from(17u64).divide(&N::from(5u64)).unwrap();
    assert_eq!(d.quotient, 3u64);
    assert_eq!(d.remainder, 2u64);
    assert_eq!(N::from(17u64).divide(&N::zero()), Err(DivisionByZero));
    assert_eq!(N::from(15u64).is_divisible_by(&N::from(5u64)), Ok(true));
    assert_eq!(N::from(16u64).is_divisible_by(&N::from(5u64)), Ok(false));
    assert_eq!(N::from(16u64).is_divisible_by(&N::zero()), Err(DivisionByZero));
}

#[test]
#[should_panic]
fn test_div_by_zero_panics() {
    let _ = N::one() / N::zero();
}

#[test]
fn test_shift() {
    let n = N::from(0x1234u64);
    assert_eq!(&n << 4, 0x12340u64);
    assert_eq!(&n >> 4, 0x123u64);
    assert_eq!(&n << -4, 0x123u64);
    assert_eq!(&n >> -4, 0x12340u64);
    assert_eq!(&n >> 100, 0u64);

    let mut m = n.clone();
    m >>= 8;
    assert_eq!(m, 0x12u64);
    m <<= 8;
    assert_eq!(m, 0x1200u64);
}

#[test]
fn test_increment_decrement() {
    let mut n = N::from(1u64);
    assert_eq!(n.post_increment(), 1u64);
    assert_eq!(n, 2u64);
    assert_eq!(n.post_decrement(), 2u64);
    assert_eq!(n, 1u64);
    n.decrement();
    assert_eq!(n, 0u64);
    n.decrement();
    assert_eq!(n, 0u64);
    n.increment();
    assert_eq!(n, 1u64);
}

#[test]
fn test_compare() {
    assert!(N::from(3u64) < N::from(4u64));
    assert!(N::from(4u64) >= 4u64);
    assert!(N::from(4u64) > 3u64);
    assert_eq!(N::from(4u64), Z::from(4i64));
    assert!(N::from(4u64) > Z::from(-4i64));
    assert!(N::from(4u64) >= Z::from(3i64));
    assert!(!(N::from(4u64) >= Z::from(5i64)));
    assert_ne!(N::from(4u64), Z::invalid());
}

#[test]
fn test_conversions() {
    assert_eq!(u64::try_from(&N::from(u64::MAX)), Ok(u64::MAX));
    assert_eq!(
        u64::try_from(&(N::from(u64::MAX) + 1u64)),
        Err(RangeError { target: "u64" })
    );
    assert_eq!(N::from_integer(&Z::from(-5i64)), 0u64);
    assert_eq!(N::from_integer(&Z::from(5i64)), 5u64);
    assert!(!N::from_integer(&Z::invalid()).is_valid());
}

#[test]
fn test_format() {
    let n = N::from(0xabcu64);
    assert_eq!(n.to_string(), "2748");
    assert_eq!(format!("{:x}", n), "0x0abc");
    assert_eq!(format!("{:?}", n), "N(2748)");
    assert_eq!(format!("{:?}", N::invalid()), "N(invalid)");
}

#[cfg(test)]
proptest::proptest! {
    #[test]
    fn prop_text_round_trip(bytes in proptest::collection::vec(proptest::num::u8::ANY, 0..40)) {
        let n = N::read_bytes(&bytes, Endian::Big);
        for base in [Base::Decimal, Base::Hexadecimal] {
            let s = n.write(base).unwrap();
            proptest::prop_assert_eq!(N::read(&s), n.clone());
        }
    }

    #[test]
    fn prop_shift_laws(bytes in proptest::collection::vec(proptest::num::u8::ANY, 0..40),
                       k in 0i64..200, j in 0i64..200) {
        let n = N::read_bytes(&bytes, Endian::Big);
        proptest::prop_assert_eq!((&n << k) << j, &n << (k + j));
        let low_cleared = &n - &(&n % &(N::one() << k));
        proptest::prop_assert_eq!((&n >> k) << k, low_cleared);
    }

    #[test]
    fn prop_division(a in proptest::collection::vec(proptest::num::u8::ANY, 0..40),
                     b in proptest::collection::vec(proptest::num::u8::ANY, 1..20)) {
        let a = N::read_bytes(&a, Endian::Little);
        let b = N::read_bytes(&b, Endian::Little) + 1u64;
        let d = a.divide(&b).unwrap();
        proptest::prop_assert!(d.remainder < b);
        proptest::prop_assert_eq!(&(&b * &d.quotient) + &d.remainder, a);
    }
}
