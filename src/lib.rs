//! Fixed-capacity big signed integers.
//!
//! A [`BigInt`] holds a sign and a fixed number of 32-bit limbs. The
//! limb count is chosen at construction and never grows afterwards:
//! arithmetic that overflows the capacity wraps modulo `2^capacity`,
//! the same way the machine integer types do. Binary operations on
//! operands of different capacities promote the result to the wider
//! one, and [`BigInt::resize`] converts explicitly.
//!
//! Values compare, hash, and print by numeric value alone, so two
//! integers of different capacities can still be equal.
//!
//! # Examples
//!
//! ```
//! use multiprec::BigInt;
//!
//! let a = BigInt::from_hex("ffffffffffffffff").unwrap();
//! let b = BigInt::from_hex("100").unwrap();
//! let (q, r) = a.div_rem(&b);
//! assert_eq!(q.to_hex(), "00ffffffffffffff");
//! assert_eq!(r.to_hex(), "00000000000000ff");
//! ```
//!
//! Division floors toward negative infinity and modular arithmetic
//! works on the same type:
//!
//! ```
//! use multiprec::BigInt;
//!
//! let (q, r) = BigInt::from(-17).div_rem(&BigInt::from(5));
//! assert_eq!((q, r), (BigInt::from(-4), BigInt::from(3)));
//!
//! let p = BigInt::from(497);
//! assert_eq!(
//!     BigInt::from(4).modpow(&BigInt::from(13), &p),
//!     BigInt::from(445)
//! );
//! ```
//!
//! # Features
//!
//! The `std` crate feature is enabled by default; disable default
//! features to build for `no_std` targets with `alloc`.
//!
//! * `rand`: sampling of random integers through the [`RandBigInt`]
//!   trait and rand's `Uniform` distribution.
//! * `prime`: Miller-Rabin primality testing in [`prime`] and random
//!   prime generation through [`RandPrime`]. Implies `rand` and `std`.
//! * `zeroize`: clearing of limb buffers through the `zeroize` crate.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

use core::fmt;

#[macro_use]
mod macros;

pub mod algorithms;
pub mod big_digit;

mod bigint;
pub mod bigrand;
mod power;
#[cfg(feature = "prime")]
#[cfg_attr(docsrs, doc(cfg(feature = "prime")))]
pub mod prime;
mod traits;

pub use crate::algorithms::{gcd, xgcd};
pub use crate::bigint::{BigInt, Sign};
pub use crate::power::modpow;
pub use crate::traits::{ExtendedGcd, ModInverse};

#[cfg(feature = "rand")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
pub use crate::bigrand::{RandBigInt, RandomBits, UniformBigInt};

#[cfg(feature = "prime")]
#[cfg_attr(docsrs, doc(cfg(feature = "prime")))]
pub use crate::bigrand::RandPrime;

/// An error which can be returned when parsing a [`BigInt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBigIntError {
    kind: BigIntErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum BigIntErrorKind {
    Empty,
    InvalidDigit,
}

impl ParseBigIntError {
    fn __description(&self) -> &str {
        match self.kind {
            BigIntErrorKind::Empty => "cannot parse integer from empty string",
            BigIntErrorKind::InvalidDigit => "invalid digit found in string",
        }
    }

    pub(crate) fn empty() -> Self {
        ParseBigIntError {
            kind: BigIntErrorKind::Empty,
        }
    }

    pub(crate) fn invalid() -> Self {
        ParseBigIntError {
            kind: BigIntErrorKind::InvalidDigit,
        }
    }
}

impl fmt::Display for ParseBigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.__description().fmt(f)
    }
}

impl core::error::Error for ParseBigIntError {}
