//! Implementation of fixed-width multiprecision integer shift primitives.

use super::word::{WordType, WORD_BITS};

/// Shift a multiprecision integer towards the most significant end.
///
/// Bits shifted out past the width are lost, zeroes are shifted in from the right. The shift
/// distance is split into a whole word part, which simply translates the words, and a partial
/// word part, for which each destination word receives bits from two source words.
///
/// # Arguments
///
/// * `op0` - The little-endian word slice to shift in place.
/// * `distance` - The shift distance in bits. Distances `>=` the bit width clear `op0`.
///
pub fn lshift_mp(op0: &mut [WordType], distance: u32) {
    let nwords = op0.len();
    let word_distance = (distance / WORD_BITS) as usize;
    let bit_distance = distance % WORD_BITS;
    if word_distance >= nwords {
        op0.fill(0);
        return;
    }

    for dst in (word_distance..nwords).rev() {
        let src = dst - word_distance;
        let mut v = op0[src] << bit_distance;
        if bit_distance != 0 && src > 0 {
            v |= op0[src - 1] >> (WORD_BITS - bit_distance);
        }
        op0[dst] = v;
    }
    op0[..word_distance].fill(0);
}

#[test]
fn test_lshift_mp() {
    let mut op0 = [1, 0, 0];
    lshift_mp(&mut op0, 1);
    assert_eq!(op0, [2, 0, 0]);

    let mut op0 = [1 << 31, 0, 0];
    lshift_mp(&mut op0, 1);
    assert_eq!(op0, [0, 1, 0]);

    let mut op0 = [0x8000_0001, 0x8000_0000, 0];
    lshift_mp(&mut op0, 33);
    assert_eq!(op0, [0, 2, 1]);

    let mut op0 = [1, 2, 3];
    lshift_mp(&mut op0, 64);
    assert_eq!(op0, [0, 0, 1]);

    let mut op0 = [1, 2, 3];
    lshift_mp(&mut op0, 96);
    assert_eq!(op0, [0, 0, 0]);

    let mut op0 = [1, 2, 3];
    lshift_mp(&mut op0, 0);
    assert_eq!(op0, [1, 2, 3]);
}

/// Shift a multiprecision integer towards the least significant end.
///
/// Bits shifted out at the low end are lost, zeroes are shifted in from the left.
///
/// # Arguments
///
/// * `op0` - The little-endian word slice to shift in place.
/// * `distance` - The shift distance in bits. Distances `>=` the bit width clear `op0`.
///
pub fn rshift_mp(op0: &mut [WordType], distance: u32) {
    let nwords = op0.len();
    let word_distance = (distance / WORD_BITS) as usize;
    let bit_distance = distance % WORD_BITS;
    if word_distance >= nwords {
        op0.fill(0);
        return;
    }

    for dst in 0..nwords - word_distance {
        let src = dst + word_distance;
        let mut v = op0[src] >> bit_distance;
        if bit_distance != 0 && src + 1 < nwords {
            v |= op0[src + 1] << (WORD_BITS - bit_distance);
        }
        op0[dst] = v;
    }
    op0[nwords - word_distance..].fill(0);
}

#[test]
fn test_rshift_mp() {
    let mut op0 = [2, 0, 0];
    rshift_mp(&mut op0, 1);
    assert_eq!(op0, [1, 0, 0]);

    let mut op0 = [0, 1, 0];
    rshift_mp(&mut op0, 1);
    assert_eq!(op0, [1 << 31, 0, 0]);

    let mut op0 = [0, 2, 1];
    rshift_mp(&mut op0, 33);
    assert_eq!(op0, [0x8000_0001, 0, 0]);

    let mut op0 = [1, 2, 3];
    rshift_mp(&mut op0, 64);
    assert_eq!(op0, [3, 0, 0]);

    let mut op0 = [1, 2, 3];
    rshift_mp(&mut op0, 1000);
    assert_eq!(op0, [0, 0, 0]);
}
