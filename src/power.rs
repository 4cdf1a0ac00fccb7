use num_traits::One;

use crate::bigint::BigInt;

/// Modular exponentiation by iterative square-and-multiply, most
/// significant exponent bit first.
///
/// The squarings run at twice the modulus capacity so a full-width
/// residue product can never wrap; the result is brought back to the
/// widest capacity among the three operands. Residues follow the sign
/// convention of [`%`](core::ops::Rem), so a negative modulus yields
/// non-positive residues.
///
/// # Panics
///
/// Panics when the exponent is negative or the modulus is zero.
pub fn modpow(base: &BigInt, exponent: &BigInt, modulus: &BigInt) -> BigInt {
    assert!(!exponent.is_negative(), "negative exponent");

    let out_cap = base
        .capacity()
        .max(exponent.capacity())
        .max(modulus.capacity());

    let work_bits = 2 * modulus.capacity();
    let m = modulus.resize(work_bits);
    // 1 % m rather than plain 1: covers |modulus| == 1 and rejects zero
    let mut result = BigInt::one().resize(work_bits) % &m;
    let t = base.resize(work_bits) % &m;

    for i in (0..exponent.bits()).rev() {
        result = &(&result * &result) % &m;
        if exponent.bit(i) {
            result = &(&result * &t) % &m;
        }
    }
    result.resize(out_cap)
}

impl BigInt {
    /// Returns `self^exponent mod modulus`. See [`modpow`].
    ///
    /// # Examples
    ///
    /// ```
    /// use multiprec::BigInt;
    ///
    /// let p = BigInt::from(497);
    /// assert_eq!(
    ///     BigInt::from(4).modpow(&BigInt::from(13), &p),
    ///     BigInt::from(445)
    /// );
    /// ```
    #[inline]
    pub fn modpow(&self, exponent: &BigInt, modulus: &BigInt) -> BigInt {
        modpow(self, exponent, modulus)
    }
}

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};

    #[cfg(feature = "rand")]
    use rand::prelude::*;
    #[cfg(feature = "rand")]
    use rand_xorshift::XorShiftRng;

    use super::*;

    #[test]
    fn test_modpow_simple() {
        let r = modpow(&BigInt::from(4).resize(64), &BigInt::from(13), &BigInt::from(497));
        assert_eq!(r, BigInt::from(445));
        assert_eq!(r.capacity(), 64);
    }

    #[test]
    fn test_modpow_zero_exponent() {
        let r = modpow(&BigInt::from(7), &BigInt::zero(), &BigInt::from(5));
        assert!(r.is_one());
    }

    #[test]
    fn test_modpow_negative_base() {
        // (-2)^3 = -8, and -8 = 5 * (-2) + 2
        let r = modpow(&BigInt::from(-2), &BigInt::from(3), &BigInt::from(5));
        assert_eq!(r, BigInt::from(2));
    }

    #[test]
    fn test_modpow_negative_modulus() {
        let r = modpow(&BigInt::from(2), &BigInt::from(3), &BigInt::from(-5));
        assert_eq!(r, BigInt::from(-2));
    }

    #[test]
    #[should_panic(expected = "negative exponent")]
    fn test_modpow_negative_exponent() {
        let _ = modpow(&BigInt::from(2), &BigInt::from(-1), &BigInt::from(5));
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_modpow_zero_modulus() {
        let _ = modpow(&BigInt::from(2), &BigInt::from(3), &BigInt::zero());
    }

    #[cfg(feature = "rand")]
    #[test]
    fn test_modpow_matches_naive() {
        use crate::bigrand::RandBigInt;

        let mut rng = XorShiftRng::from_seed([1u8; 16]);
        for i in 0..30 {
            let base = rng.gen_bigint(64);
            let base = if i % 2 == 0 { base } else { -base };
            let e = rng.gen_bigint(8);
            let m = rng.gen_bigint(96);
            if m.is_zero() {
                continue;
            }

            let fast = modpow(&base, &e, &m);

            // repeated multiplication at a comfortable width
            let m_wide = m.resize(512);
            let mut naive = BigInt::one().resize(512) % &m_wide;
            let mut count = BigInt::zero();
            while count < e {
                naive = &(&naive * &base) % &m_wide;
                count = &count + &BigInt::one();
            }
            assert_eq!(fast, naive, "base {base}, exponent {e}, modulus {m}");
        }
    }
}
