use num_traits::{One, Zero};

use crate::bigint::BigInt;

/// Greatest common divisor by the Euclidean recursion.
///
/// Signs of the inputs are ignored and the result is never negative.
/// `gcd(0, 0)` is `0`.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    euclid(a.abs(), b.abs())
}

fn euclid(a: BigInt, b: BigInt) -> BigInt {
    if b.is_zero() {
        a
    } else {
        let r = &a % &b;
        euclid(b, r)
    }
}

/// Extended Euclidean algorithm: returns `(g, x, y)` such that
/// `a * x + b * y == g` with `g == gcd(a, b)` and `g >= 0`.
///
/// Negative inputs are fine; the cofactors absorb the signs. Both inputs
/// zero give `(0, 0, 0)`.
///
/// Recursion depth tracks the Euclid chain, about 1.44 bits of the
/// smaller operand in the worst (Fibonacci) case.
pub fn xgcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a.is_zero() && b.is_zero() {
        return (BigInt::zero(), BigInt::zero(), BigInt::zero());
    }
    let (g, x, y) = xgcd_inner(a.clone(), b.clone());
    // the chain can end on a negative residue; flip all three so g >= 0
    if g.is_negative() { (-g, -x, -y) } else { (g, x, y) }
}

fn xgcd_inner(a: BigInt, b: BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        return (a, BigInt::one(), BigInt::zero());
    }
    let (q, r) = a.div_rem(&b);
    let (g, x, y) = xgcd_inner(b, r);
    let t = &x - &(&q * &y);
    (g, y, t)
}
