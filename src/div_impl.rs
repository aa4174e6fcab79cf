//! Implementation of fixed-width multiprecision integer division.

use core::cmp::Ordering;

use super::add_impl::sub_mp_mp;
use super::cmp_impl::{cmp_mp_mp, find_last_set_bit_mp};
use super::error::DivisionByZero;
use super::shift_impl::{lshift_mp, rshift_mp};
use super::word::{WordType, WORD_BITS};

/// Divide two multiprecision integers of the same width.
///
/// Bit-serial restoring division: the divisor gets aligned to the dividend's most significant set
/// bit and then, for each bit position from there down to zero, is subtracted from the running
/// remainder whenever it fits, recording a set quotient bit for every successful subtraction.
///
/// On success, `num` is left with the remainder and the quotient is returned.
///
/// # Arguments
///
/// * `num` - The dividend on entry, the remainder on return.
/// * `div` - The divisor.
///
pub fn div_mp_mp<const N: usize>(
    num: &mut [WordType; N],
    div: &[WordType; N],
) -> Result<[WordType; N], DivisionByZero> {
    let num_bits = find_last_set_bit_mp(&num[..]);
    let div_bits = find_last_set_bit_mp(&div[..]);
    if div_bits == 0 {
        return Err(DivisionByZero);
    }

    let mut quotient = [0; N];
    if div_bits > num_bits {
        // The result is certainly zero.
        return Ok(quotient);
    }

    let mut shift = num_bits - div_bits;
    let mut aligned_div = *div;
    lshift_mp(&mut aligned_div, shift);
    loop {
        if cmp_mp_mp(&num[..], &aligned_div) != Ordering::Less {
            let borrow = sub_mp_mp(&mut num[..], &aligned_div);
            debug_assert_eq!(borrow, 0);
            quotient[(shift / WORD_BITS) as usize] |= 1 << (shift % WORD_BITS);
        }
        if shift == 0 {
            break;
        }
        rshift_mp(&mut aligned_div, 1);
        shift -= 1;
    }
    Ok(quotient)
}

#[test]
fn test_div_mp_mp() {
    let mut num = [7, 0];
    let q = div_mp_mp(&mut num, &[2, 0]).unwrap();
    assert_eq!(q, [3, 0]);
    assert_eq!(num, [1, 0]);

    let mut num = [0, 1];
    let q = div_mp_mp(&mut num, &[2, 0]).unwrap();
    assert_eq!(q, [1 << 31, 0]);
    assert_eq!(num, [0, 0]);

    let mut num = [!0, !0];
    let q = div_mp_mp(&mut num, &[!0, !0]).unwrap();
    assert_eq!(q, [1, 0]);
    assert_eq!(num, [0, 0]);

    let mut num = [5, 0];
    let q = div_mp_mp(&mut num, &[0, 1]).unwrap();
    assert_eq!(q, [0, 0]);
    assert_eq!(num, [5, 0]);

    // (2^64 - 1) / (2^32 + 1) = 2^32 - 1, remainder 0.
    let mut num = [!0, !0, 0];
    let q = div_mp_mp(&mut num, &[1, 1, 0]).unwrap();
    assert_eq!(q, [!0, 0, 0]);
    assert_eq!(num, [0, 0, 0]);

    let mut num = [1, 0];
    assert_eq!(div_mp_mp(&mut num, &[0, 0]), Err(DivisionByZero));
    assert_eq!(num, [1, 0]);
}
