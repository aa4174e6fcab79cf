//! Fixed-width unsigned big integers.
//!
//! A [`BaseUint`] stores its value as a little-endian array of `WORDS` 32-bit words. All
//! arithmetic wraps modulo `2^BITS`. Division by zero is the only operation which can fail, it is
//! reported by [`BaseUint::checked_div`] and friends and makes the `/` and `%` operators panic.

extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::ops;

use super::add_impl::{add_mp_mp, add_mp_w, negate_mp, sub_mp_mp, sub_mp_w};
use super::cmp_impl::{cmp_mp_mp, eq_mp_u64, find_last_set_bit_mp, is_zero_mp};
use super::div_impl::div_mp_mp;
use super::endian::Endian;
use super::error::{ByteLengthError, DivisionByZero, IndexOutOfBounds, RangeError};
use super::mul_impl::{mul_trunc_mp_mp, mul_trunc_mp_w};
use super::nat::N;
use super::number::Division;
use super::shift_impl::{lshift_mp, rshift_mp};
use super::word::{WordType, WORD_BITS, WORD_BYTES};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BaseUint<const WORDS: usize> {
    words: [WordType; WORDS],
}

pub type Uint128 = BaseUint<4>;
pub type Uint160 = BaseUint<5>;
pub type Uint224 = BaseUint<7>;
pub type Uint256 = BaseUint<8>;
pub type Uint320 = BaseUint<10>;
pub type Uint384 = BaseUint<12>;
pub type Uint448 = BaseUint<14>;
pub type Uint512 = BaseUint<16>;

impl<const WORDS: usize> BaseUint<WORDS> {
    pub const BITS: u32 = WORDS as u32 * WORD_BITS;

    pub const ZERO: Self = Self { words: [0; WORDS] };

    pub const MAX: Self = Self {
        words: [!0; WORDS],
    };

    pub const fn from_words(words: [WordType; WORDS]) -> Self {
        Self { words }
    }

    pub fn one() -> Self {
        Self::from(1u32)
    }

    pub fn words(&self) -> &[WordType; WORDS] {
        &self.words
    }

    pub fn is_zero(&self) -> bool {
        is_zero_mp(&self.words)
    }

    /// Position of the highest set bit, counting from one. Zero for a zero value.
    pub fn bits(&self) -> u32 {
        find_last_set_bit_mp(&self.words)
    }

    /// Width in bytes.
    pub fn size(&self) -> usize {
        WORDS * WORD_BYTES
    }

    pub fn word(&self, i: usize) -> Result<WordType, IndexOutOfBounds> {
        self.words.get(i).copied().ok_or(IndexOutOfBounds {
            index: i as isize,
            width: WORDS,
        })
    }

    fn bit(&self, i: u32) -> bool {
        let word = self.words[(i / WORD_BITS) as usize];
        (word >> (i % WORD_BITS)) & 1 != 0
    }

    /// The 64 least significant bits.
    pub fn low_u64(&self) -> u64 {
        let low = self.words.first().copied().unwrap_or(0);
        let high = self.words.get(1).copied().unwrap_or(0);
        u64::from(high) << 32 | u64::from(low)
    }

    /// Nearest double, rounded one word at a time.
    pub fn to_f64(&self) -> f64 {
        let mut result = 0.0;
        let mut factor = 1.0;
        for w in self.words.iter() {
            result += factor * f64::from(*w);
            factor *= 4294967296.0;
        }
        result
    }

    pub fn div_rem(&self, divisor: &Self) -> Result<Division<Self>, DivisionByZero> {
        let mut remainder = self.words;
        match div_mp_mp(&mut remainder, &divisor.words) {
            Ok(quotient) => Ok(Division {
                quotient: Self::from_words(quotient),
                remainder: Self::from_words(remainder),
            }),
            Err(e) => {
                log::debug!("fixed-width division by zero");
                Err(e)
            }
        }
    }

    pub fn checked_div(&self, divisor: &Self) -> Result<Self, DivisionByZero> {
        Ok(self.div_rem(divisor)?.quotient)
    }

    pub fn checked_rem(&self, divisor: &Self) -> Result<Self, DivisionByZero> {
        Ok(self.div_rem(divisor)?.remainder)
    }

    pub fn increment(&mut self) {
        add_mp_w(&mut self.words, 1);
    }

    pub fn decrement(&mut self) {
        sub_mp_w(&mut self.words, 1);
    }

    pub fn post_increment(&mut self) -> Self {
        let old = *self;
        self.increment();
        old
    }

    pub fn post_decrement(&mut self) -> Self {
        let old = *self;
        self.decrement();
        old
    }

    /// Fixed layout: exactly [`size()`](Self::size) bytes, least significant first.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.words.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, ByteLengthError> {
        if bytes.len() != WORDS * WORD_BYTES {
            return Err(ByteLengthError {
                expected: WORDS * WORD_BYTES,
                actual: bytes.len(),
            });
        }
        let mut words = [0; WORDS];
        for (w, chunk) in words.iter_mut().zip(bytes.chunks_exact(WORD_BYTES)) {
            let mut buf = [0u8; WORD_BYTES];
            buf.copy_from_slice(chunk);
            *w = WordType::from_le_bytes(buf);
        }
        Ok(Self::from_words(words))
    }

    /// Parse decimal or hexadecimal text.
    ///
    /// Returns `None` for malformed or negative text and for values exceeding the width.
    pub fn read(s: &str) -> Option<Self> {
        let n = N::read(s);
        if !n.is_valid() {
            return None;
        }
        match Self::try_from(&n) {
            Ok(v) => Some(v),
            Err(e) => {
                log::debug!("rejecting {:?}: {}", s, e);
                None
            }
        }
    }

    /// `self * rhs mod modulus` without intermediate overflow, by doubling and adding.
    pub(crate) fn mul_mod(&self, rhs: &Self, modulus: &Self) -> Result<Self, DivisionByZero> {
        let a = self.checked_rem(modulus)?;
        let b = rhs.checked_rem(modulus)?;
        let add_mod = |x: Self, y: Self| {
            let complement = *modulus - y;
            if x >= complement {
                x - complement
            } else {
                x + y
            }
        };
        let mut result = Self::ZERO;
        for i in (0..b.bits()).rev() {
            result = add_mod(result, result);
            if b.bit(i) {
                result = add_mod(result, a);
            }
        }
        Ok(result)
    }
}

impl<const WORDS: usize> Default for BaseUint<WORDS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const WORDS: usize> From<u64> for BaseUint<WORDS> {
    fn from(value: u64) -> Self {
        let mut words = [0; WORDS];
        if let Some(w) = words.get_mut(0) {
            *w = value as WordType;
        }
        if let Some(w) = words.get_mut(1) {
            *w = (value >> 32) as WordType;
        }
        Self::from_words(words)
    }
}

impl<const WORDS: usize> From<u32> for BaseUint<WORDS> {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}

impl<const WORDS: usize> From<&BaseUint<WORDS>> for N {
    fn from(value: &BaseUint<WORDS>) -> Self {
        N::read_bytes(&value.to_le_bytes(), Endian::Little)
    }
}

impl<const WORDS: usize> TryFrom<&N> for BaseUint<WORDS> {
    type Error = RangeError;

    fn try_from(n: &N) -> Result<Self, Self::Error> {
        let err = RangeError { target: "BaseUint" };
        let mut bytes = n.write_bytes(Endian::Little).ok_or(err)?;
        if bytes.len() > WORDS * WORD_BYTES {
            return Err(err);
        }
        bytes.resize(WORDS * WORD_BYTES, 0);
        Self::from_le_bytes(&bytes).map_err(|_| err)
    }
}

impl<const WORDS: usize> PartialOrd for BaseUint<WORDS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const WORDS: usize> Ord for BaseUint<WORDS> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_mp_mp(&self.words, &other.words)
    }
}

impl<const WORDS: usize> PartialEq<u64> for BaseUint<WORDS> {
    fn eq(&self, other: &u64) -> bool {
        eq_mp_u64(&self.words, *other)
    }
}

impl<const WORDS: usize> fmt::Display for BaseUint<WORDS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&N::from(self), f)
    }
}

/// All `BITS / 4` digits, `0x`-prefixed with `{:#x}`.
impl<const WORDS: usize> fmt::LowerHex for BaseUint<WORDS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        for w in self.words.iter().rev() {
            write!(f, "{:08x}", w)?;
        }
        Ok(())
    }
}

impl<const WORDS: usize> fmt::Debug for BaseUint<WORDS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint{}({:#x})", Self::BITS, self)
    }
}

impl<const WORDS: usize> ops::Not for BaseUint<WORDS> {
    type Output = Self;

    fn not(mut self) -> Self {
        for w in self.words.iter_mut() {
            *w = !*w;
        }
        self
    }
}

/// Two's complement.
impl<const WORDS: usize> ops::Neg for BaseUint<WORDS> {
    type Output = Self;

    fn neg(mut self) -> Self {
        negate_mp(&mut self.words);
        self
    }
}

impl<const WORDS: usize> ops::Add for BaseUint<WORDS> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        add_mp_mp(&mut self.words, &rhs.words);
        self
    }
}

impl<const WORDS: usize> ops::Sub for BaseUint<WORDS> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        sub_mp_mp(&mut self.words, &rhs.words);
        self
    }
}

impl<const WORDS: usize> ops::Mul for BaseUint<WORDS> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut product = [0; WORDS];
        mul_trunc_mp_mp(&mut product, &self.words, &rhs.words);
        Self::from_words(product)
    }
}

impl<const WORDS: usize> ops::Mul<u32> for BaseUint<WORDS> {
    type Output = Self;

    fn mul(mut self, rhs: u32) -> Self {
        mul_trunc_mp_w(&mut self.words, rhs);
        self
    }
}

/// Panics on a zero divisor, [`BaseUint::checked_div`] is the non-panicking form.
impl<const WORDS: usize> ops::Div for BaseUint<WORDS> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        match self.checked_div(&rhs) {
            Ok(quotient) => quotient,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

/// Panics on a zero divisor, [`BaseUint::checked_rem`] is the non-panicking form.
impl<const WORDS: usize> ops::Rem for BaseUint<WORDS> {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        match self.checked_rem(&rhs) {
            Ok(remainder) => remainder,
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

macro_rules! impl_bitwise {
    ($imp:ident, $method:ident, $op:tt) => {
        impl<const WORDS: usize> ops::$imp for BaseUint<WORDS> {
            type Output = Self;

            fn $method(mut self, rhs: Self) -> Self {
                for (w, r) in self.words.iter_mut().zip(rhs.words.iter()) {
                    *w = *w $op *r;
                }
                self
            }
        }
    };
}

impl_bitwise!(BitAnd, bitand, &);
impl_bitwise!(BitOr, bitor, |);
impl_bitwise!(BitXor, bitxor, ^);

impl<const WORDS: usize> ops::Shl<u32> for BaseUint<WORDS> {
    type Output = Self;

    fn shl(mut self, distance: u32) -> Self {
        lshift_mp(&mut self.words, distance);
        self
    }
}

impl<const WORDS: usize> ops::Shr<u32> for BaseUint<WORDS> {
    type Output = Self;

    fn shr(mut self, distance: u32) -> Self {
        rshift_mp(&mut self.words, distance);
        self
    }
}

macro_rules! impl_u64_op {
    ($imp:ident, $method:ident) => {
        impl<const WORDS: usize> ops::$imp<u64> for BaseUint<WORDS> {
            type Output = Self;

            fn $method(self, rhs: u64) -> Self {
                ops::$imp::$method(self, Self::from(rhs))
            }
        }
    };
}

impl_u64_op!(Add, add);
impl_u64_op!(Sub, sub);
impl_u64_op!(BitXor, bitxor);
impl_u64_op!(BitOr, bitor);

macro_rules! impl_assign {
    ($imp:ident, $method:ident, $op:ident, $op_method:ident, $rhs:ty) => {
        impl<const WORDS: usize> ops::$imp<$rhs> for BaseUint<WORDS> {
            fn $method(&mut self, rhs: $rhs) {
                *self = ops::$op::$op_method(*self, rhs);
            }
        }
    };
}

impl_assign!(AddAssign, add_assign, Add, add, BaseUint<WORDS>);
impl_assign!(SubAssign, sub_assign, Sub, sub, BaseUint<WORDS>);
impl_assign!(MulAssign, mul_assign, Mul, mul, BaseUint<WORDS>);
impl_assign!(DivAssign, div_assign, Div, div, BaseUint<WORDS>);
impl_assign!(RemAssign, rem_assign, Rem, rem, BaseUint<WORDS>);
impl_assign!(BitAndAssign, bitand_assign, BitAnd, bitand, BaseUint<WORDS>);
impl_assign!(BitOrAssign, bitor_assign, BitOr, bitor, BaseUint<WORDS>);
impl_assign!(BitXorAssign, bitxor_assign, BitXor, bitxor, BaseUint<WORDS>);
impl_assign!(ShlAssign, shl_assign, Shl, shl, u32);
impl_assign!(ShrAssign, shr_assign, Shr, shr, u32);
impl_assign!(MulAssign, mul_assign, Mul, mul, u32);
impl_assign!(AddAssign, add_assign, Add, add, u64);
impl_assign!(SubAssign, sub_assign, Sub, sub, u64);
impl_assign!(BitXorAssign, bitxor_assign, BitXor, bitxor, u64);
impl_assign!(BitOrAssign, bitor_assign, BitOr, bitor, u64);

#[cfg(feature = "zeroize")]
impl<const WORDS: usize> zeroize::Zeroize for BaseUint<WORDS> {
    fn zeroize(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.words);
    }
}

#[test]
fn test_add_sub() {
    let a = Uint256::from(u64::MAX);
    let b = a + 1u64;
    assert_eq!(b.words()[..3], [0, 0, 1]);
    assert_eq!(b - 1u64, a);
    assert_eq!(Uint256::ZERO - 1u64, Uint256::MAX);
    assert_eq!(Uint256::MAX + Uint256::one(), Uint256::ZERO);
    assert_eq!(-Uint256::one(), Uint256::MAX);
    assert_eq!(-Uint256::ZERO, Uint256::ZERO);
    assert_eq!(!Uint256::ZERO, Uint256::MAX);

    let mut c = Uint128::from(5u32);
    c += Uint128::from(7u32);
    assert_eq!(c, 12u64);
    c -= 2u64;
    assert_eq!(c, 10u64);
}

#[test]
fn test_mul() {
    let a = Uint128::from(u64::MAX);
    // (2^64 - 1)^2 = 2^128 - 2^65 + 1
    assert_eq!((a * a).words(), &[1, 0, !1, !0]);
    let a = Uint256::from(u64::MAX);
    assert_eq!((a * a).words(), &[1, 0, !1, !0, 0, 0, 0, 0]);
    assert_eq!(Uint128::from(1u64 << 32) * 3u32, Uint128::from(3u64 << 32));
    assert_eq!(Uint128::MAX * 2u32, Uint128::MAX - 1u64);
    let mut c = Uint128::from(6u32);
    c *= 7u32;
    assert_eq!(c, 42u64);
}

#[test]
fn test_div() {
    let a = Uint256::from(1000u64);
    let b = Uint256::from(7u64);
    assert_eq!(a / b, 142u64);
    assert_eq!(a % b, 6u64);
    let d = a.div_rem(&b).unwrap();
    assert_eq!(d.quotient, 142u64);
    assert_eq!(d.remainder, 6u64);

    assert_eq!(Uint256::one().checked_div(&Uint256::ZERO), Err(DivisionByZero));
    assert_eq!(Uint256::one().checked_rem(&Uint256::ZERO), Err(DivisionByZero));
    assert_eq!(Uint256::MAX / Uint256::MAX, 1u64);
    assert_eq!(Uint256::MAX / (Uint256::one() << 255), 1u64);
    assert_eq!(Uint256::MAX % (Uint256::one() << 255), Uint256::MAX >> 1);
}

#[test]
#[should_panic]
fn test_div_by_zero_panics() {
    let _ = Uint256::from(1u32) / Uint256::from(0u32);
}

#[test]
fn test_shift() {
    let one = Uint256::one();
    assert_eq!((one << 255) >> 255, one);
    assert_eq!(one << 256, Uint256::ZERO);
    assert_eq!(one << 1000, Uint256::ZERO);
    assert_eq!((one << 40).words()[1], 1 << 8);
    let v = Uint128::from(0x8000_0000_0000_0001u64);
    assert_eq!((v << 33).words(), &[0, 2, 0, 1]);
    assert_eq!(((v << 33) >> 33), v);
    let mut w = v;
    w >>= 63;
    assert_eq!(w, 1u64);
}

#[test]
fn test_bitwise() {
    let a = Uint128::from(0b1100u32);
    let b = Uint128::from(0b1010u32);
    assert_eq!(a & b, 0b1000u64);
    assert_eq!(a | b, 0b1110u64);
    assert_eq!(a ^ b, 0b0110u64);
    assert_eq!(a ^ 0b1111u64, 0b0011u64);
    assert_eq!(a | 0b0011u64, 0b1111u64);
}

#[test]
fn test_bits_and_words() {
    assert_eq!(Uint256::ZERO.bits(), 0);
    assert_eq!(Uint256::one().bits(), 1);
    assert_eq!((Uint256::one() << 200).bits(), 201);
    assert_eq!(Uint256::MAX.bits(), 256);
    assert_eq!(Uint256::ZERO.size(), 32);
    assert_eq!(Uint160::ZERO.size(), 20);
    assert_eq!(Uint512::BITS, 512);

    let v = Uint128::from(0x1234_5678_9abc_def0u64);
    assert_eq!(v.word(0), Ok(0x9abc_def0));
    assert_eq!(v.word(1), Ok(0x1234_5678));
    assert_eq!(v.word(4), Err(IndexOutOfBounds { index: 4, width: 4 }));
    assert_eq!(v.low_u64(), 0x1234_5678_9abc_def0);
    assert_eq!((Uint128::one() << 70).low_u64(), 0u64);
}

#[test]
fn test_increment_decrement() {
    let mut v = Uint128::MAX;
    assert_eq!(v.post_increment(), Uint128::MAX);
    assert!(v.is_zero());
    assert_eq!(v.post_decrement(), 0u64);
    assert_eq!(v, Uint128::MAX);
    v.increment();
    v.increment();
    assert_eq!(v, 1u64);
    v.decrement();
    assert!(v.is_zero());
}

#[test]
fn test_to_f64() {
    assert_eq!(Uint256::ZERO.to_f64(), 0.0);
    assert_eq!(Uint256::from(12345u64).to_f64(), 12345.0);
    assert_eq!((Uint256::one() << 200).to_f64(), 2f64.powi(200));
}

#[test]
fn test_bytes() {
    let v = Uint128::from(0x0102_0304_0506_0708u64);
    let bytes = v.to_le_bytes();
    assert_eq!(bytes.len(), 16);
    assert_eq!(bytes[..8], [8, 7, 6, 5, 4, 3, 2, 1]);
    assert_eq!(Uint128::from_le_bytes(&bytes), Ok(v));
    assert_eq!(
        Uint128::from_le_bytes(&bytes[..15]),
        Err(ByteLengthError {
            expected: 16,
            actual: 15
        })
    );
}

#[test]
fn test_text() {
    let v = Uint256::read("0x0102030405060708090a0b0c0d0e0f").unwrap();
    assert_eq!(v.low_u64(), 0x0809_0a0b_0c0d_0e0f);
    assert_eq!(Uint256::read("1234"), Some(Uint256::from(1234u32)));
    assert_eq!(Uint128::read("340282366920938463463374607431768211455"), Some(Uint128::MAX));
    assert_eq!(Uint128::read("340282366920938463463374607431768211456"), None);
    assert_eq!(Uint128::read("-1"), None);
    assert_eq!(Uint128::read("0xz"), None);

    assert_eq!(Uint128::from(1234u32).to_string(), "1234");
    assert_eq!(
        format!("{:x}", Uint128::from(0xabcu32)),
        "00000000000000000000000000000abc"
    );
    assert_eq!(
        format!("{:#x}", Uint128::MAX),
        "0xffffffffffffffffffffffffffffffff"
    );
}

#[test]
fn test_n_conversions() {
    let v = Uint256::MAX;
    let n = N::from(&v);
    assert_eq!(n, (N::one() << 256) - 1u64);
    assert_eq!(Uint256::try_from(&n), Ok(v));
    assert!(Uint128::try_from(&n).is_err());
    assert!(Uint128::try_from(&N::invalid()).is_err());
    assert_eq!(Uint128::try_from(&N::zero()), Ok(Uint128::ZERO));
}

#[test]
fn test_mul_mod() {
    let m = Uint128::MAX - 58u64;
    let a = Uint128::MAX - 100u64;
    let b = Uint128::MAX - 200u64;
    let expected = (N::from(&a) * N::from(&b)) % N::from(&m);
    assert_eq!(N::from(&a.mul_mod(&b, &m).unwrap()), expected);
    assert_eq!(a.mul_mod(&b, &Uint128::ZERO), Err(DivisionByZero));
}

#[cfg(feature = "zeroize")]
#[test]
fn test_zeroize() {
    use zeroize::Zeroize as _;
    let mut v = Uint256::MAX;
    v.zeroize();
    assert!(v.is_zero());
}

#[cfg(test)]
proptest::proptest! {
    #[test]
    fn prop_division(a in proptest::array::uniform8(proptest::num::u32::ANY),
                     b in proptest::array::uniform8(proptest::num::u32::ANY)) {
        let a = Uint256::from_words(a);
        let b = Uint256::from_words(b);
        proptest::prop_assume!(!b.is_zero());
        let d = a.div_rem(&b).unwrap();
        proptest::prop_assert!(d.remainder < b);
        proptest::prop_assert_eq!(b * d.quotient + d.remainder, a);
    }

    #[test]
    fn prop_matches_natural(a in proptest::array::uniform4(proptest::num::u32::ANY),
                            b in proptest::array::uniform4(proptest::num::u32::ANY)) {
        let (a, b) = (Uint128::from_words(a), Uint128::from_words(b));
        let modulus = N::one() << 128;
        proptest::prop_assert_eq!(N::from(&(a + b)), (N::from(&a) + N::from(&b)) % &modulus);
        proptest::prop_assert_eq!(N::from(&(a * b)), (N::from(&a) * N::from(&b)) % &modulus);
    }
}
