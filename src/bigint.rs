use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::ops::Neg;

use alloc::vec;
use alloc::vec::Vec;

use num_traits::{One, Zero};

use self::Sign::{Minus, Plus};
use crate::algorithms::{self, bit_length, cmp_slice};
use crate::big_digit::{self, BigDigit};

mod addition;
mod convert;
mod division;
mod multiplication;
mod subtraction;
mod zeroize;

/// A `Sign` is a [`BigInt`]'s composing element.
///
/// Zero always carries `Plus`, so there is exactly one representation
/// per value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Minus,
    Plus,
}

impl Neg for Sign {
    type Output = Sign;

    /// Negate `Sign` value.
    #[inline]
    fn neg(self) -> Sign {
        match self {
            Minus => Plus,
            Plus => Minus,
        }
    }
}

/// A signed integer with a fixed capacity chosen at construction.
///
/// The capacity is a whole number of 32-bit limbs and never changes for
/// the lifetime of a value; results whose magnitude outgrows it are
/// silently reduced modulo `2^capacity`. Binary operations on operands
/// of different capacities produce a result at the wider one.
///
/// Only the low `len` limbs of the backing vector are significant (the
/// active length); everything above is kept zeroed.
#[derive(Clone)]
pub struct BigInt {
    sign: Sign,
    data: Vec<BigDigit>,
    len: usize,
}

#[allow(clippy::len_without_is_empty)]
impl BigInt {
    /// Creates a `BigInt` from a little-endian limb vector; the vector's
    /// length becomes the capacity. An empty vector makes a zero of the
    /// smallest capacity.
    pub fn new(sign: Sign, mut digits: Vec<BigDigit>) -> BigInt {
        if digits.is_empty() {
            digits.push(0);
        }
        let len = digits.len();
        BigInt::from_parts(sign, digits, len)
    }

    /// A zero of the given capacity.
    ///
    /// # Panics
    ///
    /// Panics unless `bits` is a nonzero multiple of the limb width.
    pub fn with_capacity(bits: u64) -> BigInt {
        BigInt {
            sign: Plus,
            data: vec![0; Self::capacity_limbs(bits)],
            len: 1,
        }
    }

    /// Copies the value into a new capacity, zero-extending or truncating
    /// the high limbs. A negative value truncated to nothing comes out as
    /// plain zero.
    ///
    /// # Panics
    ///
    /// Panics unless `bits` is a nonzero multiple of the limb width.
    pub fn resize(&self, bits: u64) -> BigInt {
        let cap = Self::capacity_limbs(bits);
        let data = self.magnitude_buf(cap);
        let len = self.len.min(cap);
        BigInt::from_parts(self.sign, data, len)
    }

    /// The value's sign; zero is always `Plus`.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Capacity in bits. Arithmetic wraps modulo `2^capacity`.
    #[inline]
    pub fn capacity(&self) -> u64 {
        self.data.len() as u64 * big_digit::BITS
    }

    /// Active limbs in use, always at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The active little-endian limbs.
    #[inline]
    pub fn digits(&self) -> &[BigDigit] {
        &self.data[..self.len]
    }

    /// Number of significant bits in the magnitude; zero for zero.
    #[inline]
    pub fn bits(&self) -> u64 {
        bit_length(self.digits())
    }

    /// Whether the magnitude bit at `bit` is set. Bits at or above the
    /// active length read as zero.
    #[inline]
    pub fn bit(&self, bit: u64) -> bool {
        let limb = (bit / big_digit::BITS) as usize;
        limb < self.len && self.data[limb] & (1 << (bit % big_digit::BITS)) != 0
    }

    /// Sets or clears the magnitude bit at `bit`.
    ///
    /// # Panics
    ///
    /// Panics when `bit` lies outside the capacity.
    pub fn set_bit(&mut self, bit: u64, value: bool) {
        assert!(bit < self.capacity(), "bit index out of capacity");
        let limb = (bit / big_digit::BITS) as usize;
        if value {
            algorithms::set_bit(&mut self.data, bit);
            if limb + 1 > self.len {
                self.len = limb + 1;
            }
        } else {
            self.data[limb] &= !(1 << (bit % big_digit::BITS));
            self.normalize();
        }
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        self.data[0] & 1 == 0
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Minus
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Plus && !self.is_zero()
    }

    /// The magnitude as a non-negative value of the same capacity.
    pub fn abs(&self) -> BigInt {
        let mut n = self.clone();
        n.sign = Plus;
        n
    }

    pub(crate) fn from_parts(sign: Sign, data: Vec<BigDigit>, len: usize) -> BigInt {
        let mut n = BigInt { sign, data, len };
        n.normalize();
        n
    }

    /// Halve the magnitude, keeping the sign.
    pub(crate) fn shr1(&self) -> BigInt {
        let mut data = self.data.clone();
        algorithms::shr1(&mut data);
        BigInt::from_parts(self.sign, data, self.len)
    }

    fn normalize(&mut self) {
        debug_assert!(self.len >= 1 && self.len <= self.data.len());
        while self.len > 1 && self.data[self.len - 1] == 0 {
            self.len -= 1;
        }
        if self.len == 1 && self.data[0] == 0 {
            self.sign = Plus;
        }
        debug_assert!(self.data[self.len..].iter().all(|&d| d == 0));
    }

    /// Buffer of `cap` limbs holding this value's magnitude, truncated
    /// when `cap` is smaller than the active length.
    fn magnitude_buf(&self, cap: usize) -> Vec<BigDigit> {
        let mut data = vec![0; cap];
        let n = self.len.min(cap);
        data[..n].copy_from_slice(&self.data[..n]);
        data
    }

    #[inline]
    fn common_limbs(&self, other: &BigInt) -> usize {
        self.data.len().max(other.data.len())
    }

    fn capacity_limbs(bits: u64) -> usize {
        assert!(
            bits > 0 && bits % big_digit::BITS == 0,
            "capacity must be a nonzero multiple of 32 bits"
        );
        (bits / big_digit::BITS) as usize
    }
}

impl PartialEq for BigInt {
    #[inline]
    fn eq(&self, other: &BigInt) -> bool {
        self.sign == other.sign && self.digits() == other.digits()
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    #[inline]
    fn cmp(&self, other: &BigInt) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => {
                let ord = cmp_slice(self.digits(), other.digits());
                if self.sign == Minus { ord.reverse() } else { ord }
            }
            ord => ord,
        }
    }
}

// Equality ignores capacity, so hashing only covers the active limbs.
impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.digits().hash(state);
    }
}

impl Default for BigInt {
    #[inline]
    fn default() -> BigInt {
        BigInt::zero()
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(mut self) -> BigInt {
        if !self.is_zero() {
            self.sign = -self.sign;
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        -self.clone()
    }
}

impl Zero for BigInt {
    #[inline]
    fn zero() -> BigInt {
        BigInt {
            sign: Plus,
            data: vec![0],
            len: 1,
        }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.len == 1 && self.data[0] == 0
    }

    // keeps the capacity, unlike assigning a fresh zero()
    #[inline]
    fn set_zero(&mut self) {
        self.data.fill(0);
        self.len = 1;
        self.sign = Plus;
    }
}

impl One for BigInt {
    #[inline]
    fn one() -> BigInt {
        BigInt {
            sign: Plus,
            data: vec![1],
            len: 1,
        }
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.sign == Plus && self.len == 1 && self.data[0] == 1
    }
}
