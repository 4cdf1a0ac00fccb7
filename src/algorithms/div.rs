use alloc::vec;

use core::cmp::Ordering;

use crate::algorithms::{__add2, bit_length, cmp_slice, mac3, normalized_len, set_bit, sub2};
use crate::big_digit::{self, BigDigit};

/// Magnitude division: fills `quotient` and `remainder` (buffers of equal
/// length, the working capacity) and returns their normalized lengths.
///
/// Works through a scaled reciprocal of the divisor refined by
/// Newton-Raphson. With `k` twice the capacity in bits, the iteration
///
/// ```text
/// x <- (x * (2^(k+1) - b * x)) >> k
/// ```
///
/// converges quadratically to the largest `x` with `b * x <= 2^k`, so the
/// loop count is logarithmic in the capacity and the quotient estimate
/// `(a * x) >> k` is off by at most one, fixed by a single correction.
///
/// The divisor must be nonzero; that is checked by `debug_assert!` here
/// and turned into a real panic at the `BigInt` layer.
pub fn div_rem(
    a: &[BigDigit],
    b: &[BigDigit],
    quotient: &mut [BigDigit],
    remainder: &mut [BigDigit],
) -> (usize, usize) {
    let cap = quotient.len();
    debug_assert_eq!(remainder.len(), cap);

    let a = &a[..normalized_len(a)];
    let b = &b[..normalized_len(b)];
    debug_assert!(b.len() > 1 || b[0] != 0, "attempt to divide by zero");
    debug_assert!(a.len() <= cap && b.len() <= cap);

    quotient.fill(0);
    remainder.fill(0);

    if *b == [1] {
        quotient[..a.len()].copy_from_slice(a);
        return (a.len(), 1);
    }
    if cmp_slice(a, b) == Ordering::Less {
        remainder[..a.len()].copy_from_slice(a);
        return (1, a.len());
    }

    let k = 2 * cap as u64 * big_digit::BITS;
    let ext = 4 * cap;

    // first estimate: the power of two just above 2^k / b
    let mut x = vec![0; ext];
    set_bit(&mut x, k - bit_length(b) + 1);

    // 2^(k+1), the constant term of the Newton step
    let mut pow = vec![0; ext];
    set_bit(&mut pow, k + 1);

    let mut t = vec![0; ext];
    let mut u = vec![0; ext];

    loop {
        t.fill(0);
        mac3(&mut t, b, &x[..normalized_len(&x)]);
        u.copy_from_slice(&pow);
        sub2(&mut u, &t[..normalized_len(&t)]);

        t.fill(0);
        mac3(&mut t, &x[..normalized_len(&x)], &u[..normalized_len(&u)]);
        shr_limbs(&mut t, 2 * cap);

        if t == x {
            break;
        }
        x.copy_from_slice(&t);
    }

    // quotient estimate (a * x) >> k, never above the true quotient
    t.fill(0);
    mac3(&mut t, a, &x[..normalized_len(&x)]);
    shr_limbs(&mut t, 2 * cap);
    let q_len = normalized_len(&t).min(cap);
    quotient[..q_len].copy_from_slice(&t[..q_len]);

    // exact residue a - b * q, then at most one correction step
    u.fill(0);
    mac3(&mut u, b, &quotient[..q_len]);
    remainder[..a.len()].copy_from_slice(a);
    sub2(remainder, &u[..normalized_len(&u)]);

    if cmp_slice(&remainder[..normalized_len(remainder)], b) != Ordering::Less {
        sub2(remainder, b);
        let carry = __add2(quotient, &[1]);
        debug_assert_eq!(carry, 0);
    }

    (normalized_len(quotient), normalized_len(remainder))
}

// shift right by whole limbs, zero-filling the vacated top
fn shr_limbs(x: &mut [BigDigit], limbs: usize) {
    if limbs >= x.len() {
        x.fill(0);
        return;
    }
    x.copy_within(limbs.., 0);
    let len = x.len();
    x[len - limbs..].fill(0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "rand")]
    use rand::prelude::*;
    #[cfg(feature = "rand")]
    use rand_xorshift::XorShiftRng;

    fn run(a: &[BigDigit], b: &[BigDigit], cap: usize) -> (alloc::vec::Vec<u32>, alloc::vec::Vec<u32>) {
        let mut q = vec![0u32; cap];
        let mut r = vec![0u32; cap];
        let (q_len, r_len) = div_rem(a, b, &mut q, &mut r);
        q.truncate(q_len);
        r.truncate(r_len);
        (q, r)
    }

    #[test]
    fn test_div_rem_simple() {
        assert_eq!(run(&[17], &[5], 2), (vec![3], vec![2]));
        assert_eq!(run(&[100], &[10], 2), (vec![10], vec![0]));
        assert_eq!(run(&[0], &[7], 2), (vec![0], vec![0]));
    }

    #[test]
    fn test_div_rem_divisor_one() {
        assert_eq!(run(&[9, 9], &[1], 2), (vec![9, 9], vec![0]));
    }

    #[test]
    fn test_div_rem_small_over_large() {
        assert_eq!(run(&[3], &[0, 1], 3), (vec![0], vec![3]));
    }

    #[test]
    fn test_div_rem_multi_limb() {
        // 2^96 / (2^32 + 1) leaves 2^64 - 2^32 remainder 2^32
        let (q, r) = run(&[0, 0, 0, 1], &[1, 1], 4);
        assert_eq!(q, vec![0, u32::MAX]);
        assert_eq!(r, vec![0, 1]);
    }

    #[test]
    fn test_div_rem_equal_operands() {
        assert_eq!(run(&[4, 3], &[4, 3], 2), (vec![1], vec![0]));
    }

    #[test]
    fn test_div_rem_near_power_of_two_divisor() {
        // divisors flush against a bit boundary stress the first estimate
        let (q, r) = run(&[u32::MAX, u32::MAX, u32::MAX], &[u32::MAX], 3);
        assert_eq!(q, vec![1, 1, 1]);
        assert_eq!(r, vec![0]);
    }

    #[cfg(feature = "rand")]
    #[test]
    fn test_div_rem_reconstructs() {
        let mut rng = XorShiftRng::from_seed([1u8; 16]);
        let cap = 12;
        for _ in 0..40 {
            let mut a = vec![0u32; cap];
            let mut b = vec![0u32; cap];
            rng.fill(&mut a[..]);
            rng.fill(&mut b[..6]);
            if normalized_len(&b) == 1 && b[0] == 0 {
                continue;
            }

            let mut q = vec![0u32; cap];
            let mut r = vec![0u32; cap];
            let (q_len, r_len) = div_rem(&a, &b, &mut q, &mut r);

            let b_active = &b[..normalized_len(&b)];
            assert_eq!(cmp_slice(&r[..r_len], b_active), Ordering::Less);

            // b * q + r reassembles a exactly
            let mut back = r.clone();
            mac3(&mut back, b_active, &q[..q_len]);
            assert_eq!(back, a);
        }
    }
}
