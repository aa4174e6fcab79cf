//! Capabilities shared by the numeric types, so that algorithms like
//! [`extended_gcd`](crate::extended_gcd) and [`Modular`](crate::Modular) can be written once for
//! the arbitrary-precision, fixed-width and native integers alike.

use super::base_uint::BaseUint;
use super::error::DivisionByZero;
use super::int::Z;
use super::nat::N;

/// Quotient and remainder of a division.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Division<T> {
    pub quotient: T,
    pub remainder: T,
}

/// An unsigned integer type.
pub trait Unsigned: Clone + PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
    fn is_zero(&self) -> bool;

    /// Whether the value may take part in arithmetic. Only [`N`] has invalid values.
    fn is_valid(&self) -> bool {
        true
    }

    fn plus(&self, rhs: &Self) -> Self;

    /// `self - rhs`, only meaningful for `rhs <= self`.
    fn minus(&self, rhs: &Self) -> Self;

    fn times(&self, rhs: &Self) -> Self;

    fn divide(&self, divisor: &Self) -> Result<Division<Self>, DivisionByZero>;

    /// `self * rhs mod modulus`.
    ///
    /// Implementations for bounded types must not overflow on the intermediate product.
    fn mul_mod(&self, rhs: &Self, modulus: &Self) -> Result<Self, DivisionByZero> {
        Ok(self.times(rhs).divide(modulus)?.remainder)
    }
}

/// A signed integer type.
pub trait Signed: Clone {
    fn zero() -> Self;
    fn one() -> Self;

    fn is_valid(&self) -> bool {
        true
    }

    fn plus(&self, rhs: &Self) -> Self;
    fn minus(&self, rhs: &Self) -> Self;
    fn times(&self, rhs: &Self) -> Self;
    fn negate(&self) -> Self;
}

/// Lossless conversion of an unsigned magnitude into a signed type.
pub trait FromMagnitude<U: Unsigned>: Signed {
    fn from_magnitude(magnitude: &U) -> Self;
}

impl Unsigned for N {
    fn zero() -> Self {
        N::zero()
    }

    fn one() -> Self {
        N::one()
    }

    fn is_zero(&self) -> bool {
        N::is_zero(self)
    }

    fn is_valid(&self) -> bool {
        N::is_valid(self)
    }

    fn plus(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn minus(&self, rhs: &Self) -> Self {
        self - rhs
    }

    fn times(&self, rhs: &Self) -> Self {
        self * rhs
    }

    fn divide(&self, divisor: &Self) -> Result<Division<Self>, DivisionByZero> {
        N::divide(self, divisor)
    }
}

impl<const WORDS: usize> Unsigned for BaseUint<WORDS> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn one() -> Self {
        BaseUint::one()
    }

    fn is_zero(&self) -> bool {
        BaseUint::is_zero(self)
    }

    fn plus(&self, rhs: &Self) -> Self {
        *self + *rhs
    }

    fn minus(&self, rhs: &Self) -> Self {
        *self - *rhs
    }

    fn times(&self, rhs: &Self) -> Self {
        *self * *rhs
    }

    fn divide(&self, divisor: &Self) -> Result<Division<Self>, DivisionByZero> {
        self.div_rem(divisor)
    }

    fn mul_mod(&self, rhs: &Self, modulus: &Self) -> Result<Self, DivisionByZero> {
        BaseUint::mul_mod(self, rhs, modulus)
    }
}

macro_rules! impl_unsigned_native {
    ($t:ty, $wide:ty) => {
        impl Unsigned for $t {
            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }

            fn is_zero(&self) -> bool {
                *self == 0
            }

            fn plus(&self, rhs: &Self) -> Self {
                self.wrapping_add(*rhs)
            }

            fn minus(&self, rhs: &Self) -> Self {
                self.wrapping_sub(*rhs)
            }

            fn times(&self, rhs: &Self) -> Self {
                self.wrapping_mul(*rhs)
            }

            fn divide(&self, divisor: &Self) -> Result<Division<Self>, DivisionByZero> {
                if *divisor == 0 {
                    log::debug!("native integer division by zero");
                    return Err(DivisionByZero);
                }
                Ok(Division {
                    quotient: self / divisor,
                    remainder: self % divisor,
                })
            }

            fn mul_mod(&self, rhs: &Self, modulus: &Self) -> Result<Self, DivisionByZero> {
                if *modulus == 0 {
                    log::debug!("native integer division by zero");
                    return Err(DivisionByZero);
                }
                let product = <$wide>::from(*self) * <$wide>::from(*rhs);
                // The remainder is less than the modulus and thus fits.
                Ok((product % <$wide>::from(*modulus)) as $t)
            }
        }
    };
}

impl_unsigned_native!(u32, u64);
impl_unsigned_native!(u64, u128);

impl Signed for Z {
    fn zero() -> Self {
        Z::zero()
    }

    fn one() -> Self {
        Z::one()
    }

    fn is_valid(&self) -> bool {
        Z::is_valid(self)
    }

    fn plus(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn minus(&self, rhs: &Self) -> Self {
        self - rhs
    }

    fn times(&self, rhs: &Self) -> Self {
        self * rhs
    }

    fn negate(&self) -> Self {
        -self
    }
}

// Bézout coefficients are bounded by the magnitudes of the operands, which fit in twice the
// width of the corresponding unsigned type.
macro_rules! impl_signed_native {
    ($t:ty) => {
        impl Signed for $t {
            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }

            fn plus(&self, rhs: &Self) -> Self {
                self.wrapping_add(*rhs)
            }

            fn minus(&self, rhs: &Self) -> Self {
                self.wrapping_sub(*rhs)
            }

            fn times(&self, rhs: &Self) -> Self {
                self.wrapping_mul(*rhs)
            }

            fn negate(&self) -> Self {
                self.wrapping_neg()
            }
        }
    };
}

impl_signed_native!(i64);
impl_signed_native!(i128);

impl FromMagnitude<N> for Z {
    fn from_magnitude(magnitude: &N) -> Self {
        Z::from(magnitude)
    }
}

impl<const WORDS: usize> FromMagnitude<BaseUint<WORDS>> for Z {
    fn from_magnitude(magnitude: &BaseUint<WORDS>) -> Self {
        Z::from(&N::from(magnitude))
    }
}

impl FromMagnitude<u32> for i64 {
    fn from_magnitude(magnitude: &u32) -> Self {
        i64::from(*magnitude)
    }
}

impl FromMagnitude<u64> for i128 {
    fn from_magnitude(magnitude: &u64) -> Self {
        i128::from(*magnitude)
    }
}

#[test]
fn test_native_mul_mod() {
    assert_eq!(u64::MAX.mul_mod(&u64::MAX, &(u64::MAX - 1)), Ok(1));
    assert_eq!(u32::MAX.mul_mod(&2, &7), Ok(((u32::MAX as u64 * 2) % 7) as u32));
    assert_eq!(5u32.mul_mod(&3, &0), Err(DivisionByZero));
}

#[test]
fn test_unsigned_divide() {
    assert_eq!(
        Unsigned::divide(&17u32, &5),
        Ok(Division {
            quotient: 3,
            remainder: 2
        })
    );
    assert_eq!(Unsigned::divide(&17u64, &0), Err(DivisionByZero));
    let d = Unsigned::divide(&N::from(17u64), &N::from(5u64)).unwrap();
    assert_eq!(d.quotient, 3u64);
}

#[test]
fn test_default_mul_mod() {
    let r = N::from(123456789u64).mul_mod(&N::from(987654321u64), &N::from(1000u64));
    assert_eq!(r, Ok(N::from((123456789u64 * 987654321u64) % 1000)));
    assert_eq!(N::one().mul_mod(&N::one(), &N::zero()), Err(DivisionByZero));
}

#[test]
fn test_from_magnitude() {
    assert_eq!(i64::from_magnitude(&u32::MAX), 4294967295i64);
    assert_eq!(i128::from_magnitude(&u64::MAX), u64::MAX as i128);
    assert_eq!(Z::from_magnitude(&N::from(5u64)), 5i64);
    assert_eq!(
        Z::from_magnitude(&BaseUint::<4>::from(u64::MAX)),
        Z::from(u64::MAX)
    );
    assert_eq!(Signed::negate(&Z::from(5i64)), -5i64);
    assert_eq!(Signed::negate(&3i64), -3);
}
