use core::cmp::Ordering;
use core::ops::{Add, AddAssign};

use crate::algorithms::{add2, sub2_abs};
use crate::bigint::{BigInt, Sign};

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, other: &BigInt) -> BigInt {
        let cap = self.common_limbs(other);
        let mut data = self.magnitude_buf(cap);
        if self.sign() == other.sign() {
            let len = add2(&mut data, self.len(), other.digits());
            BigInt::from_parts(self.sign(), data, len)
        } else {
            // differing signs subtract magnitudes; the sign follows the
            // larger magnitude, not the left operand
            let (len, ord) = sub2_abs(&mut data, self.len(), other.digits());
            let sign = match ord {
                Ordering::Less => other.sign(),
                Ordering::Equal => Sign::Plus,
                Ordering::Greater => self.sign(),
            };
            BigInt::from_parts(sign, data, len)
        }
    }
}

forward_all_binop_to_ref_ref!(impl Add for BigInt, add);

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, other: &BigInt) {
        if self.sign() == other.sign() && self.data.len() >= other.data.len() {
            // same sign at sufficient capacity: accumulate in place
            self.len = add2(&mut self.data, self.len, other.digits());
            self.normalize();
        } else {
            *self = &*self + other;
        }
    }
}

forward_val_assign!(impl AddAssign for BigInt, add_assign);
