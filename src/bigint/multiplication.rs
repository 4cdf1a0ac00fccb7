use core::ops::{Mul, MulAssign};

use alloc::vec;

use crate::algorithms::{mac3, normalized_len};
use crate::bigint::{BigInt, Sign};

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, other: &BigInt) -> BigInt {
        let cap = self.common_limbs(other);
        let mut data = vec![0; cap];
        mac3(&mut data, self.digits(), other.digits());
        let len = normalized_len(&data);
        let sign = if self.sign() == other.sign() {
            Sign::Plus
        } else {
            Sign::Minus
        };
        BigInt::from_parts(sign, data, len)
    }
}

forward_all_binop_to_ref_ref!(impl Mul for BigInt, mul);

impl MulAssign<&BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, other: &BigInt) {
        *self = &*self * other;
    }
}

forward_val_assign!(impl MulAssign for BigInt, mul_assign);
