use alloc::borrow::Cow;

use num_traits::One;

use crate::algorithms::xgcd;
use crate::bigint::BigInt;

/// Calculate the modular multiplicative inverse of `g` modulo `n`.
///
/// The inverse exists exactly when `gcd(g, n) == 1`; `None` otherwise.
/// The result is reduced into `[0, |n|)`.
pub fn mod_inverse(g: Cow<'_, BigInt>, n: Cow<'_, BigInt>) -> Option<BigInt> {
    let n = n.as_ref().abs();
    let (d, x, _) = xgcd(g.as_ref(), &n);

    if !d.is_one() {
        return None;
    }

    // the Bezout cofactor is already below n in magnitude, so one
    // addition is enough to land in the residue range
    if x.is_negative() { Some(x + n) } else { Some(x) }
}
