//! Definitions and arithmetic primitives related to [WordType], the basic unit of fixed-width
//! integer arithmetic.

/// The basic unit used by the fixed-width integer implementation.
///
/// Fixed-width integers are stored as little-endian arrays of these, which is also their
/// serialized layout, so unlike a machine limb the width doesn't vary with the target
/// architecture.
pub type WordType = u32;

/// The bit width of a [`WordType`].
pub const WORD_BITS: u32 = WordType::BITS;
/// The size of a [`WordType`] in bytes.
pub const WORD_BYTES: usize = core::mem::size_of::<WordType>();

/// The double width accumulator all word products and carries are computed in.
type DoubleWordType = u64;

/// A pair of [`WordType`]s interpreted as a double precision integer.
///
/// Used for the result of [`mul_add_w_w_w_c`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DoubleWord {
    v: DoubleWordType,
}

impl DoubleWord {
    pub fn high(&self) -> WordType {
        (self.v >> WORD_BITS) as WordType
    }

    pub fn low(&self) -> WordType {
        self.v as WordType
    }
}

/// Add two words.
///
/// Returns a pair of carry and the [`WordType::BITS`] lower bits of the sum.
///
/// # Arguments:
///
/// * `v0` - first operand
/// * `v1` - second operand
///
pub fn add_w_w(v0: WordType, v1: WordType) -> (WordType, WordType) {
    let (r, carry) = v0.overflowing_add(v1);
    (carry as WordType, r)
}

#[test]
fn test_add_w_w() {
    assert_eq!(add_w_w(0, 0), (0, 0));
    assert_eq!(add_w_w(1, 0), (0, 1));
    assert_eq!(add_w_w(!0 - 1, 1), (0, !0));
    assert_eq!(add_w_w(!0, 1), (1, 0));
    assert_eq!(add_w_w(1 << (WORD_BITS - 1), 1 << (WORD_BITS - 1)), (1, 0));
    assert_eq!(add_w_w(!0, 1 << (WORD_BITS - 1)), (1, !0 >> 1));
    assert_eq!(add_w_w(!0, !0), (1, !0 - 1));
}

pub fn add_w_w_c(v0: WordType, v1: WordType, carry: WordType) -> (WordType, WordType) {
    debug_assert!(carry <= 1);
    let (carry0, r) = add_w_w(v0, carry);
    let (carry1, r) = add_w_w(r, v1);
    let carry = carry0 + carry1;
    debug_assert!(carry <= 1);
    (carry, r)
}

#[test]
fn test_add_w_w_c() {
    assert_eq!(add_w_w_c(!0, 0, 1), (1, 0));
    assert_eq!(add_w_w_c(!0, !0, 1), (1, !0));
    assert_eq!(add_w_w_c(1, 2, 1), (0, 4));
}

/// Subtract two words.
///
/// Returns a pair of borrow and the [`WordType::BITS`] lower bits of the difference.
///
/// # Arguments:
///
/// * `v0` - first operand
/// * `v1` - second operand
///
pub fn sub_w_w(v0: WordType, v1: WordType) -> (WordType, WordType) {
    let (r, borrow) = v0.overflowing_sub(v1);
    (borrow as WordType, r)
}

#[test]
fn test_sub_w_w() {
    assert_eq!(sub_w_w(0, 0), (0, 0));
    assert_eq!(sub_w_w(1, 0), (0, 1));
    assert_eq!(sub_w_w(0, 1), (1, !0));
    assert_eq!(sub_w_w(1 << (WORD_BITS - 1), 1 << (WORD_BITS - 1)), (0, 0));
    assert_eq!(sub_w_w(0, 1 << (WORD_BITS - 1)), (1, 1 << (WORD_BITS - 1)));
    assert_eq!(sub_w_w(1 << (WORD_BITS - 1), (1 << (WORD_BITS - 1)) + 1), (1, !0));
}

pub fn sub_w_w_b(v0: WordType, v1: WordType, borrow: WordType) -> (WordType, WordType) {
    debug_assert!(borrow <= 1);
    let (borrow0, r) = sub_w_w(v0, borrow);
    let (borrow1, r) = sub_w_w(r, v1);
    let borrow = borrow0 + borrow1;
    debug_assert!(borrow <= 1);
    (borrow, r)
}

#[test]
fn test_sub_w_w_b() {
    assert_eq!(sub_w_w_b(0, 0, 1), (1, !0));
    assert_eq!(sub_w_w_b(0, !0, 1), (1, 0));
    assert_eq!(sub_w_w_b(5, 2, 1), (0, 2));
}

/// Compute `op0 + op10 * op11 + carry`.
///
/// Returns a pair of the new carry and the low word of the result. The whole computation happens
/// in the double width accumulator, it cannot overflow: `(2^32 - 1) + (2^32 - 1)^2 + (2^32 - 1)`
/// equals `2^64 - 1`.
pub fn mul_add_w_w_w_c(
    op0: WordType,
    op10: WordType,
    op11: WordType,
    carry: WordType,
) -> (WordType, WordType) {
    let acc = op0 as DoubleWordType
        + op10 as DoubleWordType * op11 as DoubleWordType
        + carry as DoubleWordType;
    let acc = DoubleWord { v: acc };
    (acc.high(), acc.low())
}

#[test]
fn test_mul_add_w_w_w_c() {
    assert_eq!(mul_add_w_w_w_c(0, 0, 0, 0), (0, 0));
    assert_eq!(mul_add_w_w_w_c(1, 2, 3, 4), (0, 11));
    assert_eq!(mul_add_w_w_w_c(!0, !0, !0, !0), (!0, !0));
    assert_eq!(mul_add_w_w_w_c(0, 1 << (WORD_BITS - 1), 2, 1), (1, 1));
}

// Position of MSB + 1, if any, zero otherwise.
pub fn find_last_set_bit_w(v: WordType) -> u32 {
    WORD_BITS - v.leading_zeros()
}

#[test]
fn test_find_last_set_bit_w() {
    assert_eq!(find_last_set_bit_w(0), 0);

    for i in 0..WORD_BITS {
        let v = 1 << i;
        assert_eq!(find_last_set_bit_w(v), i + 1);
        assert_eq!(find_last_set_bit_w(v - 1), i);
    }
}
