//! Randomization of big integers
#![cfg(feature = "rand")]
#![cfg_attr(docsrs, doc(cfg(feature = "rand")))]

use rand::distr::uniform::{Error, SampleBorrow, SampleUniform, UniformSampler};
use rand::prelude::*;

use alloc::vec;

use crate::big_digit;
use crate::bigint::{BigInt, Sign};

use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

/// A trait for sampling random big integers.
///
/// The `rand` feature must be enabled to use this. See crate-level documentation for details.
pub trait RandBigInt {
    /// Generate a random non-negative [`BigInt`] of the given bit size.
    ///
    /// The capacity of the result is the bit size rounded up to a whole
    /// limb.
    fn gen_bigint(&mut self, bit_size: u64) -> BigInt;

    /// Generate a random [`BigInt`] less than the given bound. Fails
    /// when the bound is not positive.
    fn gen_bigint_below(&mut self, bound: &BigInt) -> BigInt;

    /// Generate a random [`BigInt`] within the given range. The lower
    /// bound is inclusive; the upper bound is exclusive. Fails when
    /// the upper bound is not greater than the lower bound.
    fn gen_bigint_range(&mut self, lbound: &BigInt, ubound: &BigInt) -> BigInt;
}

fn gen_bits<R: Rng + ?Sized>(rng: &mut R, data: &mut [u32], rem: u64) {
    // `fill` is faster than many `random::<u32>` calls
    rng.fill(data);
    if rem > 0 {
        let last = data.len() - 1;
        data[last] >>= big_digit::BITS - rem;
    }
}

impl<R: Rng + ?Sized> RandBigInt for R {
    fn gen_bigint(&mut self, bit_size: u64) -> BigInt {
        let (digits, rem) = bit_size.div_rem(&big_digit::BITS);
        let len = (digits + (rem > 0) as u64)
            .to_usize()
            .expect("capacity overflow");
        let mut data = vec![0u32; len];
        gen_bits(self, &mut data, rem);
        BigInt::new(Sign::Plus, data)
    }

    fn gen_bigint_below(&mut self, bound: &BigInt) -> BigInt {
        assert!(bound.is_positive());
        let bits = bound.bits();
        loop {
            let n = self.gen_bigint(bits);
            if n < *bound {
                return n;
            }
        }
    }

    fn gen_bigint_range(&mut self, lbound: &BigInt, ubound: &BigInt) -> BigInt {
        assert!(*lbound < *ubound);
        if lbound.is_zero() {
            self.gen_bigint_below(ubound)
        } else {
            lbound + self.gen_bigint_below(&(ubound - lbound))
        }
    }
}

/// The back-end implementing rand's [`UniformSampler`] for [`BigInt`].
#[derive(Clone, Debug)]
pub struct UniformBigInt {
    base: BigInt,
    len: BigInt,
}

impl UniformSampler for UniformBigInt {
    type X = BigInt;

    #[inline]
    fn new<B1, B2>(low_b: B1, high_b: B2) -> Result<Self, Error>
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let low = low_b.borrow();
        let high = high_b.borrow();
        if low >= high {
            return Err(Error::EmptyRange);
        }
        Ok(UniformBigInt {
            len: high - low,
            base: low.clone(),
        })
    }

    #[inline]
    fn new_inclusive<B1, B2>(low_b: B1, high_b: B2) -> Result<Self, Error>
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let low = low_b.borrow();
        let high = high_b.borrow();
        if low > high {
            return Err(Error::EmptyRange);
        }
        // widen before the +1 so a full-capacity span cannot wrap
        let span = high - low;
        let span = span.resize(span.capacity() + big_digit::BITS);
        Ok(UniformBigInt {
            len: span + BigInt::one(),
            base: low.clone(),
        })
    }

    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::X {
        &self.base + rng.gen_bigint_below(&self.len)
    }

    #[inline]
    fn sample_single<R: Rng + ?Sized, B1, B2>(
        low: B1,
        high: B2,
        rng: &mut R,
    ) -> Result<Self::X, Error>
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let low = low.borrow();
        let high = high.borrow();
        if low >= high {
            return Err(Error::EmptyRange);
        }
        Ok(rng.gen_bigint_range(low, high))
    }
}

impl SampleUniform for BigInt {
    type Sampler = UniformBigInt;
}

/// A random distribution for [`BigInt`] values of a particular bit size.
///
/// The `rand` feature must be enabled to use this. See crate-level documentation for details.
#[derive(Clone, Copy, Debug)]
pub struct RandomBits {
    bits: u64,
}

impl RandomBits {
    #[inline]
    pub fn new(bits: u64) -> RandomBits {
        RandomBits { bits }
    }
}

impl Distribution<BigInt> for RandomBits {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BigInt {
        rng.gen_bigint(self.bits)
    }
}

/// A generic trait for generating random primes.
///
/// *Warning*: This is highly dependent on the provided random number generator,
/// to provide actually random primes.
///
/// # Example
///
/// ```
/// use multiprec::RandPrime;
///
/// let mut rng = rand::rng();
/// let p = rng.gen_prime(64);
/// assert_eq!(p.bits(), 64);
/// ```
#[cfg(feature = "prime")]
#[cfg_attr(docsrs, doc(cfg(feature = "prime")))]
pub trait RandPrime {
    /// Generate a random prime number with as many bits as given.
    fn gen_prime(&mut self, bit_size: u64) -> BigInt;
}

/// A list of small, prime numbers that allows us to rapidly
/// exclude some fraction of composite candidates when searching for a random
/// prime. This list is truncated at the point where SMALL_PRIMES_PRODUCT
/// exceeds a u64. It does not include two because we ensure that the
/// candidates are odd by construction.
#[cfg(feature = "prime")]
const SMALL_PRIMES: [u8; 15] = [3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53];

/// The product of the values in SMALL_PRIMES and allows us
/// to reduce a candidate prime by this number and then determine whether it's
/// coprime to all the elements of SMALL_PRIMES without further big integer
/// operations.
#[cfg(feature = "prime")]
static SMALL_PRIMES_PRODUCT: std::sync::LazyLock<BigInt> =
    std::sync::LazyLock::new(|| BigInt::from(16_294_579_238_595_022_365u64));

#[cfg(feature = "prime")]
#[cfg_attr(docsrs, doc(cfg(feature = "prime")))]
impl<R: Rng + ?Sized> RandPrime for R {
    fn gen_prime(&mut self, bit_size: u64) -> BigInt {
        use crate::prime::probably_prime_with_rng;

        if bit_size < 2 {
            panic!("prime size must be at least 2-bit");
        }

        loop {
            let mut p = self.gen_bigint(bit_size);

            // Don't let the value be too small, i.e, set the most significant two bits.
            // Setting the top two bits, rather than just the top bit,
            // means that when two of these values are multiplied together,
            // the result isn't ever one bit short.
            p.set_bit(bit_size - 1, true);
            if bit_size > 2 {
                p.set_bit(bit_size - 2, true);
            }

            // Make the value odd since an even number this large certainly isn't prime.
            p.set_bit(0, true);

            // must always be a u64, as the SMALL_PRIMES_PRODUCT is a u64
            let rem = (&p % &*SMALL_PRIMES_PRODUCT)
                .to_u64()
                .expect("remainder below a u64 product");

            'next: for delta in (0u64..1 << 20).step_by(2) {
                let m = rem + delta;

                for prime in &SMALL_PRIMES {
                    if m.is_multiple_of(u64::from(*prime))
                        && (bit_size > 6 || m != u64::from(*prime))
                    {
                        continue 'next;
                    }
                }

                let candidate = &p + &BigInt::from(delta);
                // Adding delta may have pushed the value past the requested
                // width. Start over when it does.
                if candidate.bits() != bit_size {
                    break;
                }
                if probably_prime_with_rng(self, &candidate, 20) {
                    return candidate;
                }
            }
        }
    }
}
