//! Probabilistic primality checking built on Miller-Rabin rounds.

use num_traits::{One, Zero};

use rand::Rng;

use crate::bigint::BigInt;
use crate::bigrand::RandBigInt;
use crate::power::modpow;

/// One Miller-Rabin round: does `candidate` still look prime to
/// `witness`?
///
/// Factors `candidate - 1` into `q * 2^k` with `q` odd, raises the
/// witness to `q` and squares up to `k - 1` times looking for `-1`.
/// The candidate must be odd and greater than two.
pub fn miller_rabin(candidate: &BigInt, witness: &BigInt) -> bool {
    debug_assert!(candidate.is_odd());

    let one = BigInt::one();
    let minus_one = candidate - &one;

    let mut q = minus_one.clone();
    let mut k = 0u64;
    while q.is_even() {
        q = q.shr1();
        k += 1;
    }

    // working capacity doubled so the squarings below cannot wrap
    let mut t = modpow(witness, &q, candidate).resize(2 * candidate.capacity());
    if t.is_one() || t == minus_one {
        return true;
    }
    for _ in 1..k {
        t = &(&t * &t) % candidate;
        if t == minus_one {
            return true;
        }
    }
    false
}

/// Miller-Rabin with `rounds` random witnesses drawn from `rng`.
///
/// Witnesses are uniform in `[1, candidate - 2]`. Values below two,
/// even values, and negative values are rejected up front, so this is
/// total over all inputs. Each round a composite survives has
/// probability at most 1/4.
pub fn probably_prime_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    candidate: &BigInt,
    rounds: usize,
) -> bool {
    let two = BigInt::from(2);
    if *candidate < two {
        return false;
    }
    if *candidate == two {
        return true;
    }
    if candidate.is_even() {
        return false;
    }

    let bound = candidate - &BigInt::one();
    for _ in 0..rounds {
        let mut w = rng.gen_bigint_below(&bound);
        while w.is_zero() {
            w = rng.gen_bigint_below(&bound);
        }
        if !miller_rabin(candidate, &w) {
            return false;
        }
    }
    true
}

/// Convenience form of [`probably_prime_with_rng`] drawing witnesses
/// from the thread-local generator.
///
/// # Examples
///
/// ```
/// use multiprec::BigInt;
/// use multiprec::prime::probably_prime;
///
/// assert!(probably_prime(&BigInt::from(1_000_003), 20));
/// assert!(!probably_prime(&BigInt::from(1_000_001), 20));
/// ```
pub fn probably_prime(candidate: &BigInt, rounds: usize) -> bool {
    probably_prime_with_rng(&mut rand::rng(), candidate, rounds)
}

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use rand::prelude::*;
    use rand_xorshift::XorShiftRng;

    use super::*;

    static PRIMES: &[u32] = &[
        2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 41, 61, 89, 127, 65_537, 1_000_003, 2_147_483_647,
    ];

    static COMPOSITES: &[u32] = &[
        0, 1, 4, 9, 15, 21, 25, 27, 33, 49, 561, 1105, 1729, 2465, 10_585, 1_000_001, 25_326_001,
    ];

    #[test]
    fn test_probably_prime_known_values() {
        let mut rng = XorShiftRng::from_seed([1u8; 16]);
        for &p in PRIMES {
            assert!(
                probably_prime_with_rng(&mut rng, &BigInt::from(p), 10),
                "{p} should be prime"
            );
        }
        for &c in COMPOSITES {
            assert!(
                !probably_prime_with_rng(&mut rng, &BigInt::from(c), 10),
                "{c} should not be prime"
            );
        }
    }

    #[test]
    fn test_probably_prime_edges() {
        let mut rng = XorShiftRng::from_seed([1u8; 16]);
        assert!(!probably_prime_with_rng(&mut rng, &BigInt::zero(), 10));
        assert!(!probably_prime_with_rng(&mut rng, &BigInt::one(), 10));
        assert!(probably_prime_with_rng(&mut rng, &BigInt::from(2), 10));
        assert!(probably_prime_with_rng(&mut rng, &BigInt::from(3), 10));
        assert!(!probably_prime_with_rng(&mut rng, &BigInt::from(-7), 10));
    }

    #[test]
    fn test_miller_rabin_strong_pseudoprime() {
        // 2047 = 23 * 89 fools a single base-2 round
        let n = BigInt::from(2047);
        assert!(miller_rabin(&n, &BigInt::from(2)));
        assert!(!miller_rabin(&n, &BigInt::from(3)));
    }

    #[test]
    fn test_probably_prime_mersenne() {
        // 2^127 - 1, prime, so no witness can ever reject it
        let p = BigInt::from_hex("7fffffffffffffffffffffffffffffff").unwrap();
        let mut rng = XorShiftRng::from_seed([1u8; 16]);
        assert!(probably_prime_with_rng(&mut rng, &p, 10));
    }

    #[test]
    fn test_probably_prime_large_composite() {
        // (2^61 - 1) * (2^31 - 1)
        let n = &BigInt::from(u64::MAX >> 3).resize(128) * &BigInt::from(u32::MAX >> 1);
        let mut rng = XorShiftRng::from_seed([1u8; 16]);
        assert!(!probably_prime_with_rng(&mut rng, &n, 10));
    }
}
