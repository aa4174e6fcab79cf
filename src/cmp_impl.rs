//! Implementation of fixed-width multiprecision integer comparison primitives.

use core::cmp::Ordering;

use super::word::{find_last_set_bit_w, WordType, WORD_BITS};

/// Compare two multiprecision integers.
///
/// The operands may differ in length, excess high words are compared against zero.
///
/// # Arguments
///
/// * `op0` - The first operand as a little-endian word slice.
/// * `op1` - The second operand as a little-endian word slice.
///
pub fn cmp_mp_mp(op0: &[WordType], op1: &[WordType]) -> Ordering {
    let nwords = op0.len().max(op1.len());
    for i in (0..nwords).rev() {
        let op0_val = op0.get(i).copied().unwrap_or(0);
        let op1_val = op1.get(i).copied().unwrap_or(0);
        match op0_val.cmp(&op1_val) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

#[test]
fn test_cmp_mp_mp() {
    assert_eq!(cmp_mp_mp(&[1, 2], &[1, 2]), Ordering::Equal);
    assert_eq!(cmp_mp_mp(&[2, 1], &[1, 2]), Ordering::Less);
    assert_eq!(cmp_mp_mp(&[1, 2], &[2, 1]), Ordering::Greater);
    assert_eq!(cmp_mp_mp(&[1, 0, 0], &[1]), Ordering::Equal);
    assert_eq!(cmp_mp_mp(&[1], &[1, 0, 1]), Ordering::Less);
    assert_eq!(cmp_mp_mp(&[], &[]), Ordering::Equal);
}

pub fn is_zero_mp(op0: &[WordType]) -> bool {
    op0.iter().all(|w| *w == 0)
}

/// Compare a multiprecision integer against a native `u64`.
pub fn eq_mp_u64(op0: &[WordType], v: u64) -> bool {
    let low = [v as WordType, (v >> WORD_BITS) as WordType];
    cmp_mp_mp(op0, &low) == Ordering::Equal
}

#[test]
fn test_eq_mp_u64() {
    assert!(eq_mp_u64(&[1, 2, 0, 0], 0x2_0000_0001));
    assert!(!eq_mp_u64(&[1, 2, 0, 1], 0x2_0000_0001));
    assert!(eq_mp_u64(&[0, 0, 0, 0], 0));
    assert!(!eq_mp_u64(&[0, 0, 0, 0], 1 << 32));
}

/// Find the position of the most significant set bit.
///
/// Returns the 1-based bit position of the most significant set bit, zero if the multiprecision
/// integer is zero.
pub fn find_last_set_bit_mp(op0: &[WordType]) -> u32 {
    for i in (0..op0.len()).rev() {
        if op0[i] != 0 {
            return i as u32 * WORD_BITS + find_last_set_bit_w(op0[i]);
        }
    }
    0
}

#[test]
fn test_find_last_set_bit_mp() {
    assert_eq!(find_last_set_bit_mp(&[0, 0, 0]), 0);
    assert_eq!(find_last_set_bit_mp(&[1, 0, 0]), 1);
    assert_eq!(find_last_set_bit_mp(&[0, 1, 0]), 33);
    assert_eq!(find_last_set_bit_mp(&[!0, 0, 1 << 31]), 96);
}
