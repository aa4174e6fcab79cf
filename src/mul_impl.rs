//! Implementation of fixed-width multiprecision integer multiplication primitives.

use super::word::{mul_add_w_w_w_c, WordType};

/// Multiply a multiprecision integer by a single word.
///
/// The first operand's contents will be replaced by the product, truncated to its width. The
/// excess high word which didn't fit is returned.
///
/// # Arguments
///
/// * `op0` - The first input factor. Overwritten with the truncated product.
/// * `op1` - The second input factor.
///
pub fn mul_trunc_mp_w(op0: &mut [WordType], op1: WordType) -> WordType {
    let mut carry = 0;
    for op0_val in op0.iter_mut() {
        (carry, *op0_val) = mul_add_w_w_w_c(0, *op0_val, op1, carry);
    }
    carry
}

#[test]
fn test_mul_trunc_mp_w() {
    let mut op0 = [2, 0];
    assert_eq!(mul_trunc_mp_w(&mut op0, 3), 0);
    assert_eq!(op0, [6, 0]);

    let mut op0 = [!0, !0];
    assert_eq!(mul_trunc_mp_w(&mut op0, !0), !1);
    assert_eq!(op0, [1, !0]);

    let mut op0 = [1 << 31, 0];
    assert_eq!(mul_trunc_mp_w(&mut op0, 4), 0);
    assert_eq!(op0, [0, 2]);
}

/// Multiply two multiprecision integers.
///
/// The product is truncated to the width of `result`, which must be zero on entry and must not
/// alias any of the factors. Schoolbook multiplication: for each word of `op0`, the row product
/// against `op1` is accumulated into `result` at the word's offset, each word product computed
/// in a double width accumulator together with the running carry.
///
/// # Arguments
///
/// * `result` - Receives the truncated product.
/// * `op0` - The first input factor.
/// * `op1` - The second input factor.
///
pub fn mul_trunc_mp_mp(result: &mut [WordType], op0: &[WordType], op1: &[WordType]) {
    debug_assert!(result.iter().all(|w| *w == 0));
    let nwords = result.len();
    for (j, op0_val) in op0.iter().enumerate().take(nwords) {
        let mut carry = 0;
        for (i, op1_val) in op1.iter().enumerate().take(nwords - j) {
            (carry, result[i + j]) = mul_add_w_w_w_c(result[i + j], *op0_val, *op1_val, carry);
        }
        // The row's carry out lands in the next higher word, if that's still within the width.
        let k = j + op1.len();
        if k < nwords {
            result[k] = carry;
        }
    }
}

#[test]
fn test_mul_trunc_mp_mp() {
    let mut result = [0; 4];
    mul_trunc_mp_mp(&mut result, &[!0, !0], &[!0, !0]);
    // (2^64 - 1)^2 = 2^128 - 2^65 + 1
    assert_eq!(result, [1, 0, !1, !0]);

    let mut result = [0; 2];
    mul_trunc_mp_mp(&mut result, &[!0, !0], &[!0, !0]);
    assert_eq!(result, [1, 0]);

    let mut result = [0; 3];
    mul_trunc_mp_mp(&mut result, &[0, 1, 0], &[0, 1, 0]);
    assert_eq!(result, [0, 0, 1]);

    let mut result = [0; 4];
    mul_trunc_mp_mp(&mut result, &[3, 0, 0, 0], &[5, 7, 0, 0]);
    assert_eq!(result, [15, 21, 0, 0]);
}
