use core::ops::{Div, DivAssign, Rem, RemAssign};

use alloc::vec;

use num_traits::{One, Zero};

use crate::algorithms;
use crate::bigint::{BigInt, Sign};

impl BigInt {
    /// Simultaneous floored quotient and remainder.
    ///
    /// The quotient rounds toward negative infinity, so the remainder is
    /// zero or takes the divisor's sign, and `a == b * q + r` always
    /// holds with `|r| < |b|`.
    ///
    /// # Examples
    ///
    /// ```
    /// use multiprec::BigInt;
    ///
    /// let (q, r) = BigInt::from(-17).div_rem(&BigInt::from(5));
    /// assert_eq!(q, BigInt::from(-4));
    /// assert_eq!(r, BigInt::from(3));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics when `other` is zero.
    pub fn div_rem(&self, other: &BigInt) -> (BigInt, BigInt) {
        match self.checked_div_rem(other) {
            Some(qr) => qr,
            None => panic!("attempt to divide by zero"),
        }
    }

    /// Non-panicking [`div_rem`](BigInt::div_rem): `None` for a zero
    /// divisor.
    pub fn checked_div_rem(&self, other: &BigInt) -> Option<(BigInt, BigInt)> {
        if other.is_zero() {
            return None;
        }
        let cap = self.common_limbs(other);
        let mut q_data = vec![0; cap];
        let mut r_data = vec![0; cap];
        let (q_len, r_len) =
            algorithms::div_rem(self.digits(), other.digits(), &mut q_data, &mut r_data);
        let q = BigInt::from_parts(Sign::Plus, q_data, q_len);
        let r = BigInt::from_parts(Sign::Plus, r_data, r_len);

        if self.sign() == other.sign() {
            // magnitude division is already the floored answer; the
            // remainder keeps the common sign
            let r = if other.sign() == Sign::Minus { -r } else { r };
            return Some((q, r));
        }
        if r.is_zero() {
            // exact: flooring changes nothing beyond the sign flip
            return Some((-q, r));
        }
        // differing signs round down one more step and rebase the
        // remainder on the divisor's side of zero
        let q = -(q + BigInt::one());
        let r = if other.sign() == Sign::Minus {
            -(other.abs() - &r)
        } else {
            other.abs() - &r
        };
        Some((q, r))
    }

    pub fn checked_div(&self, other: &BigInt) -> Option<BigInt> {
        Some(self.checked_div_rem(other)?.0)
    }

    pub fn checked_rem(&self, other: &BigInt) -> Option<BigInt> {
        Some(self.checked_div_rem(other)?.1)
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn div(self, other: &BigInt) -> BigInt {
        self.div_rem(other).0
    }
}

forward_all_binop_to_ref_ref!(impl Div for BigInt, div);

impl DivAssign<&BigInt> for BigInt {
    #[inline]
    fn div_assign(&mut self, other: &BigInt) {
        *self = &*self / other;
    }
}

forward_val_assign!(impl DivAssign for BigInt, div_assign);

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn rem(self, other: &BigInt) -> BigInt {
        self.div_rem(other).1
    }
}

forward_all_binop_to_ref_ref!(impl Rem for BigInt, rem);

impl RemAssign<&BigInt> for BigInt {
    #[inline]
    fn rem_assign(&mut self, other: &BigInt) {
        *self = &*self % other;
    }
}

forward_val_assign!(impl RemAssign for BigInt, rem_assign);

#[cfg(test)]
mod tests {
    use num_traits::Zero;

    #[cfg(feature = "rand")]
    use rand::prelude::*;
    #[cfg(feature = "rand")]
    use rand_xorshift::XorShiftRng;

    use crate::bigint::BigInt;

    fn big(n: i64) -> BigInt {
        BigInt::from(n).resize(128)
    }

    #[test]
    fn test_div_rem_floor_signs() {
        let cases = [
            (17, 5, 3, 2),
            (-17, 5, -4, 3),
            (17, -5, -4, -3),
            (-17, -5, 3, -2),
        ];
        for &(a, b, q, r) in &cases {
            let (quo, rem) = big(a).div_rem(&big(b));
            assert_eq!(quo, BigInt::from(q), "{a} / {b}");
            assert_eq!(rem, BigInt::from(r), "{a} % {b}");
        }
    }

    #[test]
    fn test_div_rem_exact_mixed_signs() {
        let (q, r) = BigInt::from(-15).div_rem(&BigInt::from(5));
        assert_eq!(q, BigInt::from(-3));
        assert!(r.is_zero());

        let (q, r) = BigInt::from(15).div_rem(&BigInt::from(-5));
        assert_eq!(q, BigInt::from(-3));
        assert!(r.is_zero());
    }

    #[test]
    fn test_div_rem_small_dividend() {
        let (q, r) = BigInt::from(3).div_rem(&BigInt::from(10));
        assert!(q.is_zero());
        assert_eq!(r, BigInt::from(3));

        let (q, r) = BigInt::from(-3).div_rem(&BigInt::from(10));
        assert_eq!(q, BigInt::from(-1));
        assert_eq!(r, BigInt::from(7));
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_div_by_zero_panics() {
        let _ = BigInt::from(1) / BigInt::zero();
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_rem_by_zero_panics() {
        let _ = BigInt::from(1) % BigInt::zero();
    }

    #[test]
    fn test_checked_division() {
        let z = BigInt::zero();
        assert_eq!(BigInt::from(1).checked_div(&z), None);
        assert_eq!(BigInt::from(1).checked_rem(&z), None);
        assert_eq!(BigInt::from(1).checked_div_rem(&z), None);
        assert_eq!(
            BigInt::from(17).checked_div(&BigInt::from(5)),
            Some(BigInt::from(3))
        );
    }

    #[test]
    fn test_div_assign_ops() {
        let mut a = BigInt::from(100);
        a /= BigInt::from(7);
        assert_eq!(a, BigInt::from(14));
        let mut b = BigInt::from(100);
        b %= BigInt::from(7);
        assert_eq!(b, BigInt::from(2));
    }

    #[cfg(feature = "rand")]
    #[test]
    fn test_div_rem_invariant() {
        use crate::bigrand::RandBigInt;

        let mut rng = XorShiftRng::from_seed([1u8; 16]);
        for i in 0..60 {
            let mut a = rng.gen_bigint(256);
            let mut b = rng.gen_bigint(100);
            if b.is_zero() {
                continue;
            }
            if i % 2 == 0 {
                a = -a;
            }
            if i % 3 == 0 {
                b = -b;
            }

            let (q, r) = a.div_rem(&b);
            assert_eq!(&(&b * &q) + &r, a);
            assert!(r.abs() < b.abs());
            if !r.is_zero() {
                assert_eq!(r.sign(), b.sign());
            }
        }
    }
}
