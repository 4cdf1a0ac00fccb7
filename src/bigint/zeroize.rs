#![cfg(feature = "zeroize")]
#![cfg_attr(docsrs, doc(cfg(feature = "zeroize")))]

use zeroize::Zeroize;

use crate::bigint::{BigInt, Sign};

impl Zeroize for BigInt {
    fn zeroize(&mut self) {
        // zeroize the slice, not the Vec: the backing length is the
        // capacity and must survive
        self.data.as_mut_slice().zeroize();
        self.len = 1;
        self.sign = Sign::Plus;
    }
}
