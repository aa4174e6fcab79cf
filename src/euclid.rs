//! Extended Euclidean algorithm.

use super::error::DivisionByZero;
use super::number::{FromMagnitude, Signed, Unsigned};

/// The greatest common divisor of `a` and `b` along with Bézout coefficients satisfying
/// `a * bezout_a + b * bezout_b == gcd`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtendedGcd<S, U> {
    pub gcd: U,
    pub bezout_a: S,
    pub bezout_b: S,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExtendedGcdError {
    #[error("greatest common divisor of zero and zero")]
    DivisionByZero,
    #[error("invalid operand")]
    InvalidOperand,
}

impl From<DivisionByZero> for ExtendedGcdError {
    fn from(_: DivisionByZero) -> Self {
        Self::DivisionByZero
    }
}

/// Compute the greatest common divisor of `a` and `b` together with Bézout coefficients.
///
/// Iterates the division with remainder on `(a, b)` and keeps track of how each remainder is
/// expressed as a linear combination of `a` and `b`, until the remainder becomes zero.
///
/// # Arguments
///
/// * `a` - The first operand.
/// * `b` - The second operand. Either operand may be zero, but not both of them.
///
pub fn extended_gcd<S, U>(a: &U, b: &U) -> Result<ExtendedGcd<S, U>, ExtendedGcdError>
where
    U: Unsigned,
    S: FromMagnitude<U>,
{
    if !a.is_valid() || !b.is_valid() {
        return Err(ExtendedGcdError::InvalidOperand);
    }
    if a.is_zero() && b.is_zero() {
        log::debug!("extended gcd of zero and zero");
        return Err(ExtendedGcdError::DivisionByZero);
    }

    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (S::one(), S::zero());
    let (mut old_t, mut t) = (S::zero(), S::one());
    let mut steps = 0usize;
    while !r.is_zero() {
        let division = old_r.divide(&r)?;
        let q = S::from_magnitude(&division.quotient);
        old_r = core::mem::replace(&mut r, division.remainder);
        let next_s = old_s.minus(&q.times(&s));
        old_s = core::mem::replace(&mut s, next_s);
        let next_t = old_t.minus(&q.times(&t));
        old_t = core::mem::replace(&mut t, next_t);
        steps += 1;
    }
    log::trace!("extended gcd finished after {} division steps", steps);

    Ok(ExtendedGcd {
        gcd: old_r,
        bezout_a: old_s,
        bezout_b: old_t,
    })
}

#[cfg(test)]
fn check_extended_gcd<S, U>(a: U, b: U, expected: U)
where
    U: Unsigned + core::fmt::Debug,
    S: FromMagnitude<U> + PartialEq + core::fmt::Debug,
{
    let result = extended_gcd::<S, U>(&a, &b).unwrap();
    assert!(result.gcd == expected, "{:?} != {:?}", result.gcd, expected);
    let combination = S::from_magnitude(&a)
        .times(&result.bezout_a)
        .plus(&S::from_magnitude(&b).times(&result.bezout_b));
    assert_eq!(combination, S::from_magnitude(&expected));
    if !expected.is_zero() {
        assert!(a.divide(&expected).unwrap().remainder.is_zero());
        assert!(b.divide(&expected).unwrap().remainder.is_zero());
    }
}

#[test]
fn test_extended_gcd_z_n() {
    use super::int::Z;
    use super::nat::N;

    check_extended_gcd::<Z, N>(N::from(1145u64), N::from(916u64), N::from(229u64));
    check_extended_gcd::<Z, N>(N::from(916u64), N::from(1145u64), N::from(229u64));
    check_extended_gcd::<Z, N>(N::from(2u64), N::from(4u64), N::from(2u64));
    check_extended_gcd::<Z, N>(N::from(1u64), N::from(1u64), N::from(1u64));
    check_extended_gcd::<Z, N>(N::from(0u64), N::from(7u64), N::from(7u64));
    check_extended_gcd::<Z, N>(N::from(7u64), N::from(0u64), N::from(7u64));

    let r = extended_gcd::<Z, N>(&N::from(1145u64), &N::from(916u64)).unwrap();
    assert_eq!(r.bezout_a, 1i64);
    assert_eq!(r.bezout_b, -1i64);

    assert_eq!(
        extended_gcd::<Z, N>(&N::zero(), &N::zero()),
        Err(ExtendedGcdError::DivisionByZero)
    );
    assert_eq!(
        extended_gcd::<Z, N>(&N::read("x"), &N::one()),
        Err(ExtendedGcdError::InvalidOperand)
    );
}

#[test]
fn test_extended_gcd_native() {
    check_extended_gcd::<i64, u32>(1145, 916, 229);
    check_extended_gcd::<i64, u32>(2, 4, 2);
    check_extended_gcd::<i64, u32>(1, 1, 1);
    check_extended_gcd::<i64, u32>(u32::MAX, u32::MAX - 1, 1);
    check_extended_gcd::<i128, u64>(1145, 916, 229);
    check_extended_gcd::<i128, u64>(u64::MAX, 1 << 63, 1);
    check_extended_gcd::<i128, u64>(6 << 40, 4 << 40, 2 << 40);
    assert_eq!(
        extended_gcd::<i64, u32>(&0, &0),
        Err(ExtendedGcdError::DivisionByZero)
    );
}

#[test]
fn test_extended_gcd_base_uint() {
    use super::base_uint::Uint256;
    use super::int::Z;

    check_extended_gcd::<Z, Uint256>(
        Uint256::from(1145u32),
        Uint256::from(916u32),
        Uint256::from(229u32),
    );
    check_extended_gcd::<Z, Uint256>(Uint256::MAX, Uint256::one() << 255, Uint256::one());
    assert_eq!(
        extended_gcd::<Z, Uint256>(&Uint256::ZERO, &Uint256::ZERO),
        Err(ExtendedGcdError::DivisionByZero)
    );
}

#[cfg(test)]
proptest::proptest! {
    #[test]
    fn prop_bezout_identity(a in proptest::num::u64::ANY, b in proptest::num::u64::ANY) {
        proptest::prop_assume!(a != 0 || b != 0);
        let r = extended_gcd::<i128, u64>(&a, &b).unwrap();
        let combination = i128::from(a)
            .wrapping_mul(r.bezout_a)
            .wrapping_add(i128::from(b).wrapping_mul(r.bezout_b));
        proptest::prop_assert_eq!(combination, i128::from(r.gcd));
        proptest::prop_assert_eq!(a % r.gcd, 0);
        proptest::prop_assert_eq!(b % r.gcd, 0);
    }
}
