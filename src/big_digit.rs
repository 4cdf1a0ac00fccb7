//! The limb representation: digit types and split/join helpers.

/// A single limb of a big integer.
pub type BigDigit = u32;

/// Internal double-width type used for products and carry chains.
pub type DoubleBigDigit = u64;

/// Signed double-width type used where borrows go negative.
pub type SignedDoubleBigDigit = i64;

/// Bits per limb. Capacities are always whole multiples of this.
pub const BITS: u64 = 32;

const LO_MASK: DoubleBigDigit = (1 << BITS) - 1;

#[inline]
fn get_hi(n: DoubleBigDigit) -> BigDigit {
    (n >> BITS) as BigDigit
}

#[inline]
fn get_lo(n: DoubleBigDigit) -> BigDigit {
    (n & LO_MASK) as BigDigit
}

/// Split one `DoubleBigDigit` into its (hi, lo) halves.
#[inline]
pub fn from_doublebigdigit(n: DoubleBigDigit) -> (BigDigit, BigDigit) {
    (get_hi(n), get_lo(n))
}

/// Join two `BigDigit`s into one `DoubleBigDigit`.
#[inline]
pub fn to_doublebigdigit(hi: BigDigit, lo: BigDigit) -> DoubleBigDigit {
    DoubleBigDigit::from(lo) | (DoubleBigDigit::from(hi) << BITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_join() {
        assert_eq!(from_doublebigdigit(0x0123_4567_89ab_cdef), (0x0123_4567, 0x89ab_cdef));
        assert_eq!(to_doublebigdigit(0x0123_4567, 0x89ab_cdef), 0x0123_4567_89ab_cdef);
    }
}
