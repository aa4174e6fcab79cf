//! Implementation of fixed-width multiprecision integer addition related primitives.
//!
//! All operands are little-endian word slices. Results wrap around at the first operand's width,
//! the carry or borrow out of the most significant word is returned to the caller.

use super::word::{add_w_w, add_w_w_c, sub_w_w, sub_w_w_b, WordType};

/// Add two multiprecision integers.
///
/// The first operand's contents will be replaced by the resulting sum and the carry, if any,
/// returned from the function.
///
/// # Arguments:
///
/// * `op0` - The first input addend. It will be overwritten by the resulting sum.
/// * `op1` - The second input addend. Its length must not exceed the length of `op0`.
pub fn add_mp_mp(op0: &mut [WordType], op1: &[WordType]) -> WordType {
    debug_assert!(op1.len() <= op0.len());
    let mut carry = 0;
    for (i, op0_val) in op0.iter_mut().enumerate() {
        let op1_val = op1.get(i).copied().unwrap_or(0);
        (carry, *op0_val) = add_w_w_c(*op0_val, op1_val, carry);
    }
    carry
}

#[test]
fn test_add_mp_mp() {
    let mut op0 = [!0, 0];
    let carry = add_mp_mp(&mut op0, &[!0, 0]);
    assert_eq!(carry, 0);
    assert_eq!(op0, [!1, 1]);

    let mut op0 = [!0, !0];
    let carry = add_mp_mp(&mut op0, &[!0, !0]);
    assert_eq!(carry, 1);
    assert_eq!(op0, [!1, !0]);

    let mut op0 = [!0, !0];
    let carry = add_mp_mp(&mut op0, &[1]);
    assert_eq!(carry, 1);
    assert_eq!(op0, [0, 0]);
}

/// Subtract two multiprecision integers.
///
/// The first operand's contents will be replaced by the resulting difference and the borrow, if
/// any, returned from the function.
///
/// # Arguments:
///
/// * `op0` - The minuend. It will be overwritten by the resulting difference.
/// * `op1` - The subtrahend. Its length must not exceed the length of `op0`.
pub fn sub_mp_mp(op0: &mut [WordType], op1: &[WordType]) -> WordType {
    debug_assert!(op1.len() <= op0.len());
    let mut borrow = 0;
    for (i, op0_val) in op0.iter_mut().enumerate() {
        let op1_val = op1.get(i).copied().unwrap_or(0);
        (borrow, *op0_val) = sub_w_w_b(*op0_val, op1_val, borrow);
    }
    borrow
}

#[test]
fn test_sub_mp_mp() {
    let mut op0 = [!1, 1];
    let borrow = sub_mp_mp(&mut op0, &[!0, 0]);
    assert_eq!(borrow, 0);
    assert_eq!(op0, [!0, 0]);

    let mut op0 = [0, 0];
    let borrow = sub_mp_mp(&mut op0, &[1]);
    assert_eq!(borrow, 1);
    assert_eq!(op0, [!0, !0]);

    let mut op0 = [0, 1];
    let borrow = sub_mp_mp(&mut op0, &[1, 0]);
    assert_eq!(borrow, 0);
    assert_eq!(op0, [!0, 0]);
}

/// Add a single word to a multiprecision integer, propagating the carry upwards.
pub fn add_mp_w(op0: &mut [WordType], op1: WordType) -> WordType {
    let mut carry = op1;
    for op0_val in op0.iter_mut() {
        if carry == 0 {
            break;
        }
        (carry, *op0_val) = add_w_w(*op0_val, carry);
    }
    carry
}

#[test]
fn test_add_mp_w() {
    let mut op0 = [!0, !0, 0];
    assert_eq!(add_mp_w(&mut op0, 1), 0);
    assert_eq!(op0, [0, 0, 1]);

    let mut op0 = [!0, !0];
    assert_eq!(add_mp_w(&mut op0, 2), 1);
    assert_eq!(op0, [1, 0]);
}

/// Subtract a single word from a multiprecision integer, propagating the borrow upwards.
pub fn sub_mp_w(op0: &mut [WordType], op1: WordType) -> WordType {
    let mut borrow = op1;
    for op0_val in op0.iter_mut() {
        if borrow == 0 {
            break;
        }
        (borrow, *op0_val) = sub_w_w(*op0_val, borrow);
    }
    borrow
}

#[test]
fn test_sub_mp_w() {
    let mut op0 = [0, 0, 1];
    assert_eq!(sub_mp_w(&mut op0, 1), 0);
    assert_eq!(op0, [!0, !0, 0]);

    let mut op0 = [0, 0];
    assert_eq!(sub_mp_w(&mut op0, 1), 1);
    assert_eq!(op0, [!0, !0]);
}

/// Replace a multiprecision integer by its two's complement negation.
pub fn negate_mp(op0: &mut [WordType]) {
    for op0_val in op0.iter_mut() {
        *op0_val = !*op0_val;
    }
    add_mp_w(op0, 1);
}

#[test]
fn test_negate_mp() {
    let mut op0 = [1, 0];
    negate_mp(&mut op0);
    assert_eq!(op0, [!0, !0]);

    let mut op0 = [0, 0];
    negate_mp(&mut op0);
    assert_eq!(op0, [0, 0]);

    let mut op0 = [0, 1];
    negate_mp(&mut op0);
    assert_eq!(op0, [0, !0]);
}
