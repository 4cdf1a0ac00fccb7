//! Low-level arithmetic on little-endian limb slices, plus the
//! number-theoretic routines built directly on top.
//!
//! The slice primitives work on `&[u32]` magnitudes and are what the
//! [`BigInt`](crate::BigInt) operator impls are built from. Writes past
//! the end of a destination slice are dropped, which is how the
//! fixed-capacity truncation contract is carried through every level.

#![allow(clippy::many_single_char_names)]

mod add;
mod bits;
mod cmp;
mod div;
mod gcd;
mod mod_inverse;
mod mul;
mod sub;

pub use self::add::{__add2, adc, add2};
pub use self::bits::{bit_length, normalized_len, set_bit, shr1};
pub use self::cmp::cmp_slice;
pub use self::div::div_rem;
pub use self::gcd::{gcd, xgcd};
pub use self::mod_inverse::mod_inverse;
pub use self::mul::{KARATSUBA_THRESHOLD, mac3, mac_digit, mac_with_carry};
pub use self::sub::{sbb, sub2, sub2_abs};
