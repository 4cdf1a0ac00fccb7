use crate::algorithms::normalized_len;
use crate::big_digit::{self, BigDigit, DoubleBigDigit};

/// Add with carry: returns the low limb of `a + b + *acc` and leaves the
/// carry in `acc`.
#[inline]
pub fn adc(a: BigDigit, b: BigDigit, acc: &mut DoubleBigDigit) -> BigDigit {
    *acc += DoubleBigDigit::from(a);
    *acc += DoubleBigDigit::from(b);
    let lo = *acc as BigDigit;
    *acc >>= big_digit::BITS;
    lo
}

/// Two argument addition of raw slices, `a += b`, returning the carry out
/// of the top of `a`. Requires `a.len() >= b.len()`.
pub fn __add2(a: &mut [BigDigit], b: &[BigDigit]) -> BigDigit {
    debug_assert!(a.len() >= b.len());

    let mut carry = 0;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = adc(*a, *b, &mut carry);
    }

    if carry != 0 {
        for a in a_hi {
            *a = adc(*a, 0, &mut carry);
            if carry == 0 {
                break;
            }
        }
    }

    carry as BigDigit
}

/// Add `b` into the active prefix of `acc`, truncating: a carry out of
/// the last limb of `acc` is dropped. Limbs of `acc` above `a_len` must
/// be zero. Returns the normalized length of the sum.
pub fn add2(acc: &mut [BigDigit], a_len: usize, b: &[BigDigit]) -> usize {
    debug_assert!(a_len <= acc.len() && b.len() <= acc.len());

    let mut len = a_len.max(b.len());
    let carry = __add2(&mut acc[..len], b);
    if carry != 0 && len < acc.len() {
        acc[len] = carry;
        len += 1;
    }
    normalized_len(&acc[..len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adc() {
        let mut carry = 0;
        assert_eq!(adc(u32::MAX, 1, &mut carry), 0);
        assert_eq!(carry, 1);
        assert_eq!(adc(2, 3, &mut carry), 6);
        assert_eq!(carry, 0);
    }

    #[test]
    fn test_add2_carry_chain() {
        let mut acc = [u32::MAX, u32::MAX, 0];
        let len = add2(&mut acc, 2, &[1]);
        assert_eq!(len, 3);
        assert_eq!(acc, [0, 0, 1]);
    }

    #[test]
    fn test_add2_shorter_into_longer() {
        let mut acc = [5, 0, 7, 0];
        let len = add2(&mut acc, 3, &[u32::MAX]);
        assert_eq!(len, 3);
        assert_eq!(acc, [4, 1, 7, 0]);
    }

    #[test]
    fn test_add2_truncates_at_capacity() {
        let mut acc = [u32::MAX, u32::MAX];
        let len = add2(&mut acc, 2, &[1]);
        assert_eq!(len, 1);
        assert_eq!(acc, [0, 0]);
    }
}
