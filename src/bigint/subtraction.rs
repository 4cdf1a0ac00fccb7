use core::cmp::Ordering;
use core::ops::{Sub, SubAssign};

use crate::algorithms::{add2, sub2_abs};
use crate::bigint::{BigInt, Sign};

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, other: &BigInt) -> BigInt {
        let cap = self.common_limbs(other);
        let mut data = self.magnitude_buf(cap);
        if self.sign() != other.sign() {
            // a - (-b) adds magnitudes and keeps a's sign
            let len = add2(&mut data, self.len(), other.digits());
            BigInt::from_parts(self.sign(), data, len)
        } else {
            let (len, ord) = sub2_abs(&mut data, self.len(), other.digits());
            let sign = match ord {
                Ordering::Less => -other.sign(),
                Ordering::Equal => Sign::Plus,
                Ordering::Greater => self.sign(),
            };
            BigInt::from_parts(sign, data, len)
        }
    }
}

forward_all_binop_to_ref_ref!(impl Sub for BigInt, sub);

impl SubAssign<&BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, other: &BigInt) {
        *self = &*self - other;
    }
}

forward_val_assign!(impl SubAssign for BigInt, sub_assign);
