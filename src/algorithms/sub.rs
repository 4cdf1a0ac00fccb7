use core::cmp::Ordering;

use crate::algorithms::{cmp_slice, normalized_len};
use crate::big_digit::{self, BigDigit, SignedDoubleBigDigit};

/// Subtract with borrow: returns the low limb of `a - b + *acc` and
/// leaves the borrow in `acc`.
#[inline]
pub fn sbb(a: BigDigit, b: BigDigit, acc: &mut SignedDoubleBigDigit) -> BigDigit {
    *acc += SignedDoubleBigDigit::from(a);
    *acc -= SignedDoubleBigDigit::from(b);
    let lo = *acc as BigDigit;
    *acc >>= big_digit::BITS;
    lo
}

/// In-place subtraction, `a -= b`. The caller guarantees `a >= b`.
pub fn sub2(a: &mut [BigDigit], b: &[BigDigit]) {
    let mut borrow = 0;
    let len = Ord::min(a.len(), b.len());
    let (a_lo, a_hi) = a.split_at_mut(len);
    let (b_lo, b_hi) = b.split_at(len);

    for (a, b) in a_lo.iter_mut().zip(b_lo) {
        *a = sbb(*a, *b, &mut borrow);
    }

    if borrow != 0 {
        for a in a_hi {
            *a = sbb(*a, 0, &mut borrow);
            if borrow == 0 {
                break;
            }
        }
    }

    assert!(
        borrow == 0 && b_hi.iter().all(|x| *x == 0),
        "cannot subtract b from a because b is larger than a"
    );
}

/// Magnitude difference in place: `acc = |acc - b|`, with `acc`'s active
/// prefix `a_len` limbs long and limbs above it zero. When `b` is the
/// larger magnitude the operand roles swap internally. Returns the
/// normalized length of the result and how the magnitudes compared, so
/// callers can fix up the sign.
pub fn sub2_abs(acc: &mut [BigDigit], a_len: usize, b: &[BigDigit]) -> (usize, Ordering) {
    debug_assert!(a_len <= acc.len() && b.len() <= acc.len());

    let ord = cmp_slice(&acc[..a_len], b);
    match ord {
        Ordering::Equal => {
            acc[..a_len].fill(0);
            (1, ord)
        }
        Ordering::Greater => {
            let mut borrow = 0;
            for (a, &b_digit) in acc[..a_len].iter_mut().zip(b.iter()) {
                *a = sbb(*a, b_digit, &mut borrow);
            }
            if borrow != 0 {
                for a in acc[b.len()..a_len].iter_mut() {
                    *a = sbb(*a, 0, &mut borrow);
                    if borrow == 0 {
                        break;
                    }
                }
            }
            debug_assert_eq!(borrow, 0);
            (normalized_len(&acc[..a_len]), ord)
        }
        Ordering::Less => {
            // acc < b implies b has at least as many active limbs, and
            // acc reads as zero above a_len
            let mut borrow = 0;
            for (a, &b_digit) in acc[..b.len()].iter_mut().zip(b.iter()) {
                *a = sbb(b_digit, *a, &mut borrow);
            }
            debug_assert_eq!(borrow, 0);
            (normalized_len(&acc[..b.len()]), ord)
        }
    }
}
