use crate::big_digit::{self, BigDigit};

/// Active length of the slice after ignoring high zero limbs; never
/// shorter than one limb, so zero keeps its slot.
#[inline]
pub fn normalized_len(a: &[BigDigit]) -> usize {
    let mut len = a.len();
    while len > 1 && a[len - 1] == 0 {
        len -= 1;
    }
    len
}

/// Number of significant bits in the value. Zero has bit length zero.
#[inline]
pub fn bit_length(a: &[BigDigit]) -> u64 {
    debug_assert!(!a.is_empty());
    let len = normalized_len(a);
    let top = a[len - 1];
    if top == 0 {
        return 0;
    }
    (len as u64 - 1) * big_digit::BITS + (big_digit::BITS - u64::from(top.leading_zeros()))
}

/// Set a single bit, little-endian order. The slice must cover the index.
#[inline]
pub fn set_bit(x: &mut [BigDigit], bit: u64) {
    x[(bit / big_digit::BITS) as usize] |= 1 << (bit % big_digit::BITS);
}

/// Halve the value in place.
#[inline]
pub fn shr1(x: &mut [BigDigit]) {
    let mut carry = 0;
    for d in x.iter_mut().rev() {
        let next_carry = *d << (big_digit::BITS - 1);
        *d = (*d >> 1) | carry;
        carry = next_carry;
    }
}
