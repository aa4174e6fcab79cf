//! Residues modulo an explicitly configured modulus.
//!
//! A [`Modulus`] gets constructed once and is then borrowed by every [`Modular`] residue
//! associated with it. Arithmetic on residues always yields values in `[0, modulus)`, and doesn't
//! overflow for fixed-width value types: additions are carried out against the complement
//! `modulus - b` and multiplications go through [`Unsigned::mul_mod`].

use core::fmt;
use core::ops;

use super::error::DivisionByZero;
use super::number::Unsigned;

/// A nonzero modulus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Modulus<X> {
    value: X,
}

impl<X: Unsigned> Modulus<X> {
    pub fn new(value: X) -> Result<Self, DivisionByZero> {
        if value.is_zero() {
            log::debug!("rejecting zero modulus");
            return Err(DivisionByZero);
        }
        Ok(Self { value })
    }

    pub fn value(&self) -> &X {
        &self.value
    }

    /// Associate `value` with this modulus as is, without reducing it.
    pub fn residue(&self, value: X) -> Modular<'_, X> {
        Modular {
            value,
            modulus: self,
        }
    }

    /// The residue class of `value`.
    pub fn reduce(&self, value: &X) -> Modular<'_, X> {
        self.residue(self.rem(value))
    }

    fn rem(&self, value: &X) -> X {
        match value.divide(&self.value) {
            Ok(division) => division.remainder,
            Err(_) => unreachable!(),
        }
    }
}

/// A value together with the modulus it's to be taken with.
#[derive(Clone)]
pub struct Modular<'m, X> {
    value: X,
    modulus: &'m Modulus<X>,
}

impl<'m, X: Unsigned> Modular<'m, X> {
    pub fn value(&self) -> &X {
        &self.value
    }

    pub fn into_value(self) -> X {
        self.value
    }

    pub fn modulus(&self) -> &'m Modulus<X> {
        self.modulus
    }

    /// Whether the value is in `[0, modulus)`.
    pub fn valid(&self) -> bool {
        self.value.is_valid() && self.value < self.modulus.value
    }

    fn reduced(&self) -> X {
        if self.valid() {
            self.value.clone()
        } else {
            self.modulus.rem(&self.value)
        }
    }

    fn same_modulus(&self, rhs: &Self) -> bool {
        core::ptr::eq(self.modulus, rhs.modulus) || self.modulus.value == rhs.modulus.value
    }

    fn with_value(&self, value: X) -> Self {
        self.modulus.residue(value)
    }

    /// Modular sum.
    ///
    /// Panics if the residues belong to different moduli.
    pub fn plus(&self, rhs: &Self) -> Self {
        assert!(self.same_modulus(rhs), "residues of different moduli");
        let m = &self.modulus.value;
        let (a, b) = (self.reduced(), rhs.reduced());
        let complement = m.minus(&b);
        if a >= complement {
            self.with_value(a.minus(&complement))
        } else {
            self.with_value(a.plus(&b))
        }
    }

    /// Modular difference.
    ///
    /// Panics if the residues belong to different moduli.
    pub fn minus(&self, rhs: &Self) -> Self {
        assert!(self.same_modulus(rhs), "residues of different moduli");
        let m = &self.modulus.value;
        let (a, b) = (self.reduced(), rhs.reduced());
        if a >= b {
            self.with_value(a.minus(&b))
        } else {
            self.with_value(m.minus(&b.minus(&a)))
        }
    }

    /// Modular product.
    ///
    /// Panics if the residues belong to different moduli.
    pub fn times(&self, rhs: &Self) -> Self {
        assert!(self.same_modulus(rhs), "residues of different moduli");
        let m = &self.modulus.value;
        match self.value.mul_mod(&rhs.value, m) {
            Ok(product) => self.with_value(product),
            Err(_) => unreachable!(),
        }
    }

    /// Additive inverse, zero for zero.
    pub fn negate(&self) -> Self {
        let a = self.reduced();
        if a.is_zero() {
            self.with_value(a)
        } else {
            self.with_value(self.modulus.value.minus(&a))
        }
    }
}

impl<X: PartialEq> PartialEq for Modular<'_, X> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.modulus.value == other.modulus.value
    }
}

impl<X: fmt::Debug> fmt::Debug for Modular<'_, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} (mod {:?})", self.value, self.modulus.value)
    }
}

macro_rules! impl_modular_binop {
    ($imp:ident, $method:ident, $modular_method:ident) => {
        impl<'m, X: Unsigned> ops::$imp<&Modular<'m, X>> for &Modular<'m, X> {
            type Output = Modular<'m, X>;

            fn $method(self, rhs: &Modular<'m, X>) -> Modular<'m, X> {
                self.$modular_method(rhs)
            }
        }

        impl<'m, X: Unsigned> ops::$imp for Modular<'m, X> {
            type Output = Modular<'m, X>;

            fn $method(self, rhs: Modular<'m, X>) -> Modular<'m, X> {
                self.$modular_method(&rhs)
            }
        }
    };
}

impl_modular_binop!(Add, add, plus);
impl_modular_binop!(Sub, sub, minus);
impl_modular_binop!(Mul, mul, times);

impl<'m, X: Unsigned> ops::Neg for &Modular<'m, X> {
    type Output = Modular<'m, X>;

    fn neg(self) -> Modular<'m, X> {
        self.negate()
    }
}

impl<'m, X: Unsigned> ops::Neg for Modular<'m, X> {
    type Output = Modular<'m, X>;

    fn neg(self) -> Modular<'m, X> {
        self.negate()
    }
}

#[test]
fn test_modulus() {
    use super::nat::N;

    assert_eq!(Modulus::new(N::zero()), Err(DivisionByZero));
    assert_eq!(Modulus::new(0u32), Err(DivisionByZero));
    let m = Modulus::new(N::from(7u64)).unwrap();
    assert_eq!(*m.value(), 7u64);

    let r = m.residue(N::from(10u64));
    assert!(!r.valid());
    assert_eq!(*r.value(), 10u64);
    let r = m.reduce(&N::from(10u64));
    assert!(r.valid());
    assert_eq!(*r.value(), 3u64);
    assert!(core::ptr::eq(r.modulus(), &m));
}

#[test]
fn test_arithmetic_n() {
    use super::nat::N;

    let m = Modulus::new(N::from(7u64)).unwrap();
    let r = |v: u64| m.residue(N::from(v));
    assert_eq!(&r(5) + &r(4), r(2));
    assert_eq!(&r(2) - &r(5), r(4));
    assert_eq!(&r(5) - &r(2), r(3));
    assert_eq!(&r(3) * &r(5), r(1));
    assert_eq!(-r(0), r(0));
    assert_eq!(-r(3), r(4));
    assert_eq!(r(10) + r(0), r(3));
    assert_eq!(r(6).plus(&r(1)), r(0));
    assert_eq!(r(0).minus(&r(1)), r(6));
    assert_eq!(r(13).times(&r(13)), r(1));
    assert_eq!((-r(14)).into_value(), 0u64);
}

#[test]
fn test_arithmetic_base_uint() {
    use super::base_uint::Uint256;

    let m = Modulus::new(Uint256::MAX - 188u64).unwrap();
    let r = |v: Uint256| m.residue(v);
    let a = *m.value() - 1u64;
    let b = *m.value() - 2u64;
    assert_eq!(&r(a) + &r(b), r(*m.value() - 3u64));
    assert_eq!(&r(b) - &r(a), r(*m.value() - 1u64));
    // (-1) * (-2) == 2
    assert_eq!(&r(a) * &r(b), r(Uint256::from(2u32)));
    assert_eq!(-r(a), r(Uint256::one()));
    assert_eq!(r(Uint256::MAX) + r(Uint256::ZERO), r(Uint256::from(188u32)));
}

#[test]
fn test_arithmetic_native() {
    let m = Modulus::new(u64::MAX - 58).unwrap();
    let r = |v: u64| m.residue(v);
    assert_eq!(&r(u64::MAX - 59) + &r(u64::MAX - 60), r(u64::MAX - 61));
    assert_eq!(&r(u64::MAX - 59) * &r(u64::MAX - 59), r(1));
    assert_eq!(-r(1), r(u64::MAX - 59));
}

#[test]
#[should_panic]
fn test_mixed_moduli_panics() {
    let m0 = Modulus::new(7u32).unwrap();
    let m1 = Modulus::new(11u32).unwrap();
    let _ = m0.residue(1) + m1.residue(1);
}

#[cfg(test)]
proptest::proptest! {
    #[test]
    fn prop_closure(a in proptest::num::u64::ANY, b in proptest::num::u64::ANY,
                    m in 1u64..=u64::MAX) {
        let modulus = Modulus::new(m).unwrap();
        let (ra, rb) = (modulus.residue(a), modulus.residue(b));
        let wide = |v: u128| (v % u128::from(m)) as u64;
        let (a, b) = (u128::from(a % m), u128::from(b % m));
        let m128 = u128::from(m);

        let sum = &ra + &rb;
        proptest::prop_assert!(sum.valid());
        proptest::prop_assert_eq!(*sum.value(), wide(a + b));

        let difference = &ra - &rb;
        proptest::prop_assert!(difference.valid());
        proptest::prop_assert_eq!(*difference.value(), wide(a + m128 - b));

        let product = &ra * &rb;
        proptest::prop_assert!(product.valid());
        proptest::prop_assert_eq!(*product.value(), wide(a * b));

        let negation = -&ra;
        proptest::prop_assert!(negation.valid());
        proptest::prop_assert_eq!(*negation.value(), wide(m128 - a));
    }
}
