use alloc::vec;

use crate::algorithms::{__add2, normalized_len, sub2};
use crate::big_digit::{self, BigDigit, DoubleBigDigit};

/// Operands whose shorter side is at most this many limbs multiply with
/// the schoolbook loop; larger ones recurse through Karatsuba.
pub const KARATSUBA_THRESHOLD: usize = 32;

/// Multiply-accumulate with carry: returns the low limb of
/// `a + b * c + *acc` and leaves the carry in `acc`.
#[inline]
pub fn mac_with_carry(a: BigDigit, b: BigDigit, c: BigDigit, acc: &mut DoubleBigDigit) -> BigDigit {
    *acc += DoubleBigDigit::from(a);
    *acc += DoubleBigDigit::from(b) * DoubleBigDigit::from(c);
    let lo = *acc as BigDigit;
    *acc >>= big_digit::BITS;
    lo
}

/// One row of the schoolbook grid: `acc += b * c`, truncated at the end
/// of `acc`.
pub fn mac_digit(acc: &mut [BigDigit], b: &[BigDigit], c: BigDigit) {
    if c == 0 {
        return;
    }
    let b = &b[..b.len().min(acc.len())];

    let mut carry = 0;
    let (a_lo, a_hi) = acc.split_at_mut(b.len());

    for (a, &b) in a_lo.iter_mut().zip(b) {
        *a = mac_with_carry(*a, b, c, &mut carry);
    }

    let (carry_hi, carry_lo) = big_digit::from_doublebigdigit(carry);
    let carry_digits = [carry_lo, carry_hi];
    let take = if carry_hi == 0 { 1 } else { 2 };
    // a carry that no longer fits the fixed width is dropped
    __add2(a_hi, &carry_digits[..take.min(a_hi.len())]);
}

fn long_mul(acc: &mut [BigDigit], x: &[BigDigit], y: &[BigDigit]) {
    for (i, xi) in x.iter().enumerate().take(acc.len()) {
        mac_digit(&mut acc[i..], y, *xi);
    }
}

// Karatsuba multiplication.
//
// Split both operands at m limbs, with B the limb base:
//
//     x = x1 * B^m + x0
//     y = y1 * B^m + y0
//
// so that
//
//     x * y = z2 * B^(2m) + z1 * B^m + z0
//
// takes only three half-size products:
//
//     z2 = x1 * y1
//     z0 = x0 * y0
//     z1 = (x1 + x0) * (y1 + y0) - z2 - z0
//
// The split is the largest power of two at most len - 1, which halves the
// work per level and keeps the recursion depth logarithmic in the limb
// count. Sub-products are taken at full width; only the final combine
// truncates at the end of `acc`, so the result agrees limb for limb with
// the schoolbook loop at any capacity.
fn karatsuba(acc: &mut [BigDigit], x: &[BigDigit], y: &[BigDigit]) {
    debug_assert!(x.len() <= y.len());

    let m = 1 << (usize::BITS - 1 - (y.len() - 1).leading_zeros());

    let (x0, x1) = x.split_at(x.len().min(m));
    let (y0, y1) = y.split_at(m);

    let mut z0 = vec![0; x0.len() + y0.len()];
    mac3(&mut z0, x0, y0);

    let mut z2 = vec![0; x1.len() + y1.len()];
    mac3(&mut z2, x1, y1);

    // x1 + x0 and y1 + y0; the high halves are at most m limbs, so each
    // sum fits m + 1
    let mut xs = vec![0; m + 1];
    xs[..x0.len()].copy_from_slice(x0);
    __add2(&mut xs, x1);

    let mut ys = vec![0; m + 1];
    ys[..y0.len()].copy_from_slice(y0);
    __add2(&mut ys, y1);

    // the sums may not fill their buffers; recursing on the padded
    // width would repeat the same split forever
    let mut z1 = vec![0; 2 * (m + 1)];
    mac3(&mut z1, &xs[..normalized_len(&xs)], &ys[..normalized_len(&ys)]);
    sub2(&mut z1, &z0);
    sub2(&mut z1, &z2);

    add_shifted(acc, &z0, 0);
    add_shifted(acc, &z1, m);
    add_shifted(acc, &z2, 2 * m);
}

// acc[shift..] += v, truncating past the end of acc
fn add_shifted(acc: &mut [BigDigit], v: &[BigDigit], shift: usize) {
    if shift >= acc.len() {
        return;
    }
    let acc = &mut acc[shift..];
    let n = v.len().min(acc.len());
    __add2(acc, &v[..n]);
}

/// Three argument multiply-accumulate: `acc += b * c`, truncated at the
/// end of `acc`.
pub fn mac3(mut acc: &mut [BigDigit], mut b: &[BigDigit], mut c: &[BigDigit]) {
    // least significant zero limbs only shift the accumulation window
    if let Some(&0) = b.first() {
        if let Some(nz) = b.iter().position(|&d| d != 0) {
            let cut = nz.min(acc.len());
            b = &b[nz..];
            acc = &mut acc[cut..];
        } else {
            return;
        }
    }
    if let Some(&0) = c.first() {
        if let Some(nz) = c.iter().position(|&d| d != 0) {
            let cut = nz.min(acc.len());
            c = &c[nz..];
            acc = &mut acc[cut..];
        } else {
            return;
        }
    }

    let (x, y) = if b.len() < c.len() { (b, c) } else { (c, b) };
    if x.is_empty() || acc.is_empty() {
        return;
    }

    if x.len() <= KARATSUBA_THRESHOLD {
        long_mul(acc, x, y);
    } else {
        karatsuba(acc, x, y);
    }
}
