use alloc::borrow::Cow;

use crate::algorithms::{mod_inverse, xgcd};
use crate::bigint::BigInt;

/// Generic trait for modular multiplicative inverse.
///
/// Computes the [modular multiplicative inverse](https://en.wikipedia.org/wiki/Modular_multiplicative_inverse)
/// of an integer *a* modulo *m*.
///
/// Returns `None` if the inverse does not exist (i.e., `gcd(a, m) != 1`).
pub trait ModInverse<R: Sized>: Sized {
    /// The output type of the modular inverse.
    type Output: Sized;

    /// Returns the modular inverse of `self` modulo `m`, or `None` if it does not exist.
    fn mod_inverse(self, m: R) -> Option<Self::Output>;
}

/// Generic trait for the extended Euclidean algorithm.
///
/// Computes the [extended GCD](https://en.wikipedia.org/wiki/Extended_Euclidean_algorithm),
/// returning `(gcd, x, y)` such that `self * x + other * y = gcd`. The
/// gcd is never negative.
pub trait ExtendedGcd<R: Sized>: Sized {
    /// Returns `(gcd, x, y)` such that `self * x + other * y = gcd`.
    fn extended_gcd(self, other: R) -> (BigInt, BigInt, BigInt);
}

// --- ModInverse impls ---

impl ModInverse<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mod_inverse(self, m: &BigInt) -> Option<BigInt> {
        mod_inverse(Cow::Borrowed(self), Cow::Borrowed(m))
    }
}

impl ModInverse<BigInt> for &BigInt {
    type Output = BigInt;

    fn mod_inverse(self, m: BigInt) -> Option<BigInt> {
        mod_inverse(Cow::Borrowed(self), Cow::Owned(m))
    }
}

impl ModInverse<&BigInt> for BigInt {
    type Output = BigInt;

    fn mod_inverse(self, m: &BigInt) -> Option<BigInt> {
        mod_inverse(Cow::Owned(self), Cow::Borrowed(m))
    }
}

impl ModInverse<BigInt> for BigInt {
    type Output = BigInt;

    fn mod_inverse(self, m: BigInt) -> Option<BigInt> {
        mod_inverse(Cow::Owned(self), Cow::Owned(m))
    }
}

// --- ExtendedGcd impls ---

impl ExtendedGcd<&BigInt> for &BigInt {
    fn extended_gcd(self, other: &BigInt) -> (BigInt, BigInt, BigInt) {
        xgcd(self, other)
    }
}

impl ExtendedGcd<BigInt> for &BigInt {
    fn extended_gcd(self, other: BigInt) -> (BigInt, BigInt, BigInt) {
        xgcd(self, &other)
    }
}

impl ExtendedGcd<&BigInt> for BigInt {
    fn extended_gcd(self, other: &BigInt) -> (BigInt, BigInt, BigInt) {
        xgcd(&self, other)
    }
}

impl ExtendedGcd<BigInt> for BigInt {
    fn extended_gcd(self, other: BigInt) -> (BigInt, BigInt, BigInt) {
        xgcd(&self, &other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extended_gcd_trait() {
        let a = BigInt::from(240);
        let b = BigInt::from(46);
        let (g, x, y) = (&a).extended_gcd(&b);
        assert_eq!(g, BigInt::from(2));
        assert_eq!(&(&a * &x) + &(&b * &y), g);

        let (g2, _, _) = a.clone().extended_gcd(b.clone());
        assert_eq!(g2, BigInt::from(2));
    }

    #[test]
    fn test_mod_inverse_trait() {
        let inv = (&BigInt::from(3)).mod_inverse(&BigInt::from(11));
        assert_eq!(inv, Some(BigInt::from(4)));

        let none = BigInt::from(4).mod_inverse(BigInt::from(8));
        assert!(none.is_none());
    }
}
