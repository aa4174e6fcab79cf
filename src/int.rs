//! Arbitrary-precision signed integers.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::ops;

use malachite::base::num::basic::traits::{NegativeOne as _, One as _, Zero as _};
use malachite::Integer;

use super::bytes_codec;
use super::endian::Endian;
use super::error::{DivisionByZero, RangeError};
use super::nat::{natural_to_u64, N};
use super::number::Division;
use super::text::{self, Base};

/// An unbounded signed integer, or the invalid value.
///
/// Unlike [`N`], an invalid `Z` is unequal to everything, itself included.
#[derive(Clone)]
pub struct Z {
    value: Option<Integer>,
}

impl Z {
    pub fn zero() -> Self {
        Self::from_integer(Integer::ZERO)
    }

    pub fn one() -> Self {
        Self::from_integer(Integer::ONE)
    }

    pub fn invalid() -> Self {
        Self { value: None }
    }

    pub(crate) fn from_integer(z: Integer) -> Self {
        Self { value: Some(z) }
    }

    pub(crate) fn as_integer(&self) -> Option<&Integer> {
        self.value.as_ref()
    }

    pub fn is_valid(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_zero(&self) -> bool {
        self.value.as_ref().map_or(false, |z| *z == Integer::ZERO)
    }

    pub fn is_negative(&self) -> bool {
        self.value.as_ref().map_or(false, |z| *z < Integer::ZERO)
    }

    /// Parse decimal or hexadecimal text, producing the invalid value for malformed input.
    pub fn read(s: &str) -> Self {
        match text::parse(s) {
            Some((negative, magnitude)) => {
                let z = Integer::from(magnitude);
                Self::from_integer(if negative { -z } else { z })
            }
            None => Self::invalid(),
        }
    }

    /// Decode minimal or sign-extended two's complement bytes.
    pub fn read_bytes(bytes: &[u8], order: Endian) -> Self {
        bytes_codec::read_signed_bytes(bytes, order)
    }

    pub fn write_bytes(&self, order: Endian) -> Option<Vec<u8>> {
        bytes_codec::write_signed_bytes(self, order)
    }

    pub fn write(&self, base: Base) -> Option<String> {
        text::write_integer(self, base)
    }

    pub fn abs(&self) -> Self {
        self.map(|z| Integer::from(z.unsigned_abs_ref().clone()))
    }

    pub fn unsigned_abs(&self) -> N {
        match &self.value {
            Some(z) => N::from_natural(z.unsigned_abs_ref().clone()),
            None => N::invalid(),
        }
    }

    /// -1, 0 or 1 according to the sign.
    pub fn signum(&self) -> Self {
        self.map(|z| match z.cmp(&Integer::ZERO) {
            Ordering::Less => Integer::NEGATIVE_ONE,
            Ordering::Equal => Integer::ZERO,
            Ordering::Greater => Integer::ONE,
        })
    }

    /// Truncating division.
    ///
    /// The quotient rounds towards zero and the remainder takes the dividend's sign. An invalid
    /// operand yields invalid quotient and remainder.
    pub fn divide(&self, divisor: &Z) -> Result<Division<Z>, DivisionByZero> {
        let (n, d) = match (&self.value, &divisor.value) {
            (Some(n), Some(d)) => (n, d),
            _ => {
                return Ok(Division {
                    quotient: Self::invalid(),
                    remainder: Self::invalid(),
                })
            }
        };
        if *d == Integer::ZERO {
            log::debug!("integer division by zero");
            return Err(DivisionByZero);
        }
        Ok(Division {
            quotient: Self::from_integer(n / d),
            remainder: Self::from_integer(n % d),
        })
    }

    /// Whether `divisor` divides this value without remainder.
    pub fn is_divisible_by(&self, divisor: &Z) -> Result<bool, DivisionByZero> {
        Ok(self.divide(divisor)?.remainder.is_zero())
    }

    pub fn increment(&mut self) {
        *self += 1i64;
    }

    pub fn decrement(&mut self) {
        *self -= 1i64;
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

    fn zip_with<F: FnOnce(&Integer, &Integer) -> Integer>(&self, rhs: &Z, f: F) -> Z {
        match (&self.value, &rhs.value) {
            (Some(a), Some(b)) => Self::from_integer(f(a, b)),
            _ => Self::invalid(),
        }
    }

    fn map<F: FnOnce(&Integer) -> Integer>(&self, f: F) -> Z {
        match &self.value {
            Some(a) => Self::from_integer(f(a)),
            None => Self::invalid(),
        }
    }
}

impl Default for Z {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Z {
    fn from(value: i64) -> Self {
        Self::from_integer(Integer::from(value))
    }
}

impl From<u64> for Z {
    fn from(value: u64) -> Self {
        Self::from_integer(Integer::from(value))
    }
}

/// Valid naturals embed as non-negative integers, an invalid one stays invalid.
impl From<&N> for Z {
    fn from(n: &N) -> Self {
        match n.as_natural() {
            Some(n) => Self::from_integer(Integer::from(n.clone())),
            None => Self::invalid(),
        }
    }
}

impl From<N> for Z {
    fn from(n: N) -> Self {
        Self::from(&n)
    }
}

impl TryFrom<&Z> for i64 {
    type Error = RangeError;

    fn try_from(z: &Z) -> Result<Self, Self::Error> {
        let err = RangeError { target: "i64" };
        let z = z.as_integer().ok_or(err)?;
        let magnitude = natural_to_u64(z.unsigned_abs_ref()).ok_or(err)?;
        if *z < Integer::ZERO {
            if magnitude > 1u64 << 63 {
                return Err(err);
            }
            Ok((magnitude as i64).wrapping_neg())
        } else {
            i64::try_from(magnitude).map_err(|_| err)
        }
    }
}

impl TryFrom<&Z> for u64 {
    type Error = RangeError;

    fn try_from(z: &Z) -> Result<Self, Self::Error> {
        let err = RangeError { target: "u64" };
        match z.as_integer() {
            Some(z) if *z >= Integer::ZERO => natural_to_u64(z.unsigned_abs_ref()).ok_or(err),
            _ => Err(err),
        }
    }
}

impl PartialEq for Z {
    fn eq(&self, other: &Self) -> bool {
        match (&self.value, &other.value) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for Z {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (&self.value, &other.value) {
            (Some(a), Some(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl PartialEq<i64> for Z {
    fn eq(&self, other: &i64) -> bool {
        *self == Z::from(*other)
    }
}

impl PartialOrd<i64> for Z {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        self.partial_cmp(&Z::from(*other))
    }
}

impl PartialEq<N> for Z {
    fn eq(&self, other: &N) -> bool {
        *self == Z::from(other)
    }
}

impl PartialOrd<N> for Z {
    fn partial_cmp(&self, other: &N) -> Option<Ordering> {
        self.partial_cmp(&Z::from(other))
    }
}

impl fmt::Debug for Z {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(z) => write!(f, "Z({})", z),
            None => write!(f, "Z(invalid)"),
        }
    }
}

impl fmt::Display for Z {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(z) => write!(f, "{}", z),
            None => write!(f, "invalid"),
        }
    }
}

impl fmt::LowerHex for Z {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(z) => f.write_str(&text::format_integer(z, Base::Hexadecimal)),
            None => write!(f, "invalid"),
        }
    }
}

impl ops::Neg for &Z {
    type Output = Z;

    fn neg(self) -> Z {
        self.map(|z| -z)
    }
}

impl ops::Neg for Z {
    type Output = Z;

    fn neg(self) -> Z {
        -&self
    }
}

impl ops::Add<&Z> for &Z {
    type Output = Z;

    fn add(self, rhs: &Z) -> Z {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl ops::Sub<&Z> for &Z {
    type Output = Z;

    fn sub(self, rhs: &Z) -> Z {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl ops::Mul<&Z> for &Z {
    type Output = Z;

    fn mul(self, rhs: &Z) -> Z {
        self.zip_with(rhs, |a, b| a * b)
    }
}

/// Truncating, panics on a zero divisor. [`Z::divide`] is the non-panicking form.
impl ops::Div<&Z> for &Z {
    type Output = Z;

    fn div(self, rhs: &Z) -> Z {
        match self.divide(rhs) {
            Ok(division) => division.quotient,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

/// Takes the dividend's sign, panics on a zero divisor.
impl ops::Rem<&Z> for &Z {
    type Output = Z;

    fn rem(self, rhs: &Z) -> Z {
        match self.divide(rhs) {
            Ok(division) => division.remainder,
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

forward_binop_to_ref!(impl Add, add for Z, Z => Z);
forward_binop_to_ref!(impl Sub, sub for Z, Z => Z);
forward_binop_to_ref!(impl Mul, mul for Z, Z => Z);
forward_binop_to_ref!(impl Div, div for Z, Z => Z);
forward_binop_to_ref!(impl Rem, rem for Z, Z => Z);
forward_assign_to_ref!(impl AddAssign, add_assign for Z, Z, Add, add);
forward_assign_to_ref!(impl SubAssign, sub_assign for Z, Z, Sub, sub);
forward_assign_to_ref!(impl MulAssign, mul_assign for Z, Z, Mul, mul);
forward_assign_to_ref!(impl DivAssign, div_assign for Z, Z, Div, div);
forward_assign_to_ref!(impl RemAssign, rem_assign for Z, Z, Rem, rem);

// Mixed operands promote the natural number first.
macro_rules! impl_mixed_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
        impl ops::$imp<&N> for &Z {
            type Output = Z;

            fn $method(self, rhs: &N) -> Z {
                ops::$imp::$method(self, &Z::from(rhs))
            }
        }

        impl ops::$imp<&Z> for &N {
            type Output = Z;

            fn $method(self, rhs: &Z) -> Z {
                ops::$imp::$method(&Z::from(self), rhs)
            }
        }

        impl ops::$imp<i64> for &Z {
            type Output = Z;

            fn $method(self, rhs: i64) -> Z {
                ops::$imp::$method(self, &Z::from(rhs))
            }
        }

        forward_binop_to_ref!(impl $imp, $method for Z, N => Z);
        forward_binop_to_ref!(impl $imp, $method for N, Z => Z);
        forward_assign_to_ref!(impl $assign_imp, $assign_method for Z, N, $imp, $method);
        forward_scalar_binop_to_ref!(impl $imp, $method for Z, i64 => Z);
        forward_scalar_assign_to_ref!(impl $assign_imp, $assign_method for Z, i64, $imp, $method);
    };
}

impl_mixed_binop!(Add, add, AddAssign, add_assign);
impl_mixed_binop!(Sub, sub, SubAssign, sub_assign);
impl_mixed_binop!(Mul, mul, MulAssign, mul_assign);
impl_mixed_binop!(Div, div, DivAssign, div_assign);
impl_mixed_binop!(Rem, rem, RemAssign, rem_assign);

impl ops::Shl<i64> for &Z {
    type Output = Z;

    fn shl(self, distance: i64) -> Z {
        self.map(|z| z << distance)
    }
}

/// Rounds towards negative infinity.
impl ops::Shr<i64> for &Z {
    type Output = Z;

    fn shr(self, distance: i64) -> Z {
        self.map(|z| z >> distance)
    }
}

forward_scalar_binop_to_ref!(impl Shl, shl for Z, i64 => Z);
forward_scalar_binop_to_ref!(impl Shr, shr for Z, i64 => Z);
forward_scalar_assign_to_ref!(impl ShlAssign, shl_assign for Z, i64, Shl, shl);
forward_scalar_assign_to_ref!(impl ShrAssign, shr_assign for Z, i64, Shr, shr);

#[test]
fn test_invalid() {
    let invalid = Z::read("1-2");
    assert!(!invalid.is_valid());
    assert_ne!(invalid, Z::invalid());
    assert_ne!(invalid.clone(), invalid);
    assert_ne!(invalid, 0i64);
    assert_eq!(invalid.partial_cmp(&Z::invalid()), None);
    assert!(!(&invalid + 1i64).is_valid());
    assert!(!(-&invalid).is_valid());
    assert!(!Z::from(&N::invalid()).is_valid());
    assert!(i64::try_from(&invalid).is_err());
}

#[test]
fn test_read() {
    assert_eq!(Z::read("-1234"), -1234i64);
    assert_eq!(Z::read("1234"), 1234i64);
    assert_eq!(Z::read("-0x04d2"), -1234i64);
    assert_eq!(Z::read("-0"), 0i64);
    assert_eq!(Z::read("-0x"), 0i64);
    assert!(!Z::read("--1").is_valid());
}

#[test]
fn test_arithmetic() {
    let a = Z::from(-7i64);
    let b = Z::from(2i64);
    assert_eq!(&a + &b, -5i64);
    assert_eq!(&a - &b, -9i64);
    assert_eq!(&b - &a, 9i64);
    assert_eq!(&a * &b, -14i64);
    assert_eq!(&a / &b, -3i64);
    assert_eq!(&a % &b, -1i64);
    assert_eq!(Z::from(7i64) / Z::from(-2i64), -3i64);
    assert_eq!(Z::from(7i64) % Z::from(-2i64), 1i64);
    assert_eq!(-a.clone(), 7i64);

    assert_eq!(&a + &N::from(10u64), 3i64);
    assert_eq!(&N::from(3u64) - &Z::from(10i64), -7i64);
    assert_eq!(a.clone() * 3i64, -21i64);

    let mut c = Z::from(1i64);
    c -= 5i64;
    assert_eq!(c, -4i64);
    c *= N::from(2u64);
    assert_eq!(c, -8i64);
    c /= 3i64;
    assert_eq!(c, -2i64);
    c.decrement();
    assert_eq!(c.post_increment(), -3i64);
    assert_eq!(c, -2i64);
    assert_eq!(c.post_decrement(), -2i64);
    assert_eq!(c, -3i64);
}

#[test]
fn test_divide() {
    let d = Z::from(-17i64).divide(&Z::from(5i64)).unwrap();
    assert_eq!(d.quotient, -3i64);
    assert_eq!(d.remainder, -2i64);
    assert_eq!(Z::from(-17i64).divide(&Z::zero()), Err(DivisionByZero));
    assert_eq!(Z::from(-15i64).is_divisible_by(&Z::from(5i64)), Ok(true));
}

#[test]
fn test_shift() {
    assert_eq!(Z::from(-5i64) >> 1, -3i64);
    assert_eq!(Z::from(5i64) >> 1, 2i64);
    assert_eq!(Z::from(-5i64) << 2, -20i64);
    assert_eq!(Z::from(-20i64) << -2, -5i64);
    assert_eq!(Z::from(-1i64) >> 100, -1i64);
}

#[test]
fn test_sign() {
    assert_eq!(Z::from(-5i64).abs(), 5i64);
    assert_eq!(Z::from(-5i64).unsigned_abs(), 5u64);
    assert_eq!(Z::from(-5i64).signum(), -1i64);
    assert_eq!(Z::zero().signum(), 0i64);
    assert_eq!(Z::from(9i64).signum(), 1i64);
    assert!(Z::from(-1i64).is_negative());
    assert!(!Z::zero().is_negative());
}

#[test]
fn test_compare() {
    assert!(Z::from(-3i64) < Z::from(2i64));
    assert!(Z::from(-3i64) < 0i64);
    assert!(Z::from(3i64) >= N::from(3u64));
    assert!(Z::from(-3i64) < N::zero());
    assert_eq!(Z::from(&N::from(3u64)), 3i64);
}

#[test]
fn test_conversions() {
    assert_eq!(i64::try_from(&Z::from(i64::MIN)), Ok(i64::MIN));
    assert_eq!(i64::try_from(&Z::from(i64::MAX)), Ok(i64::MAX));
    assert!(i64::try_from(&(Z::from(i64::MIN) - 1i64)).is_err());
    assert!(i64::try_from(&(Z::from(i64::MAX) + 1i64)).is_err());
    assert_eq!(u64::try_from(&Z::from(u64::MAX)), Ok(u64::MAX));
    assert_eq!(u64::try_from(&Z::from(-1i64)), Err(RangeError { target: "u64" }));
}

#[test]
fn test_format() {
    let z = Z::from(-0xabci64);
    assert_eq!(z.to_string(), "-2748");
    assert_eq!(format!("{:x}", z), "-0x0abc");
    assert_eq!(z.write(Base::Decimal).unwrap(), "-2748");
    assert_eq!(format!("{:?}", z), "Z(-2748)");
}

#[cfg(test)]
proptest::proptest! {
    #[test]
    fn prop_text_round_trip(v in proptest::num::i64::ANY, k in 0i64..100) {
        let z = Z::from(v) << k;
        for base in [Base::Decimal, Base::Hexadecimal] {
            let s = z.write(base).unwrap();
            proptest::prop_assert_eq!(Z::read(&s), z.clone());
        }
    }

    #[test]
    fn prop_truncating_division(a in proptest::num::i64::ANY, b in proptest::num::i64::ANY) {
        proptest::prop_assume!(b != 0);
        let d = Z::from(a).divide(&Z::from(b)).unwrap();
        proptest::prop_assert_eq!(&(&d.quotient * &Z::from(b)) + &d.remainder, Z::from(a));
        proptest::prop_assert!(d.remainder.unsigned_abs() < Z::from(b).unsigned_abs());
        proptest::prop_assert!(d.remainder.is_zero() || d.remainder.is_negative() == (a < 0));
    }
}
