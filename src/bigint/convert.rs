use core::fmt;
use core::str::FromStr;

use alloc::string::String;
use alloc::vec;

use num_traits::{FromPrimitive, ToPrimitive};

use crate::ParseBigIntError;
use crate::algorithms::normalized_len;
use crate::big_digit;
use crate::bigint::{BigInt, Sign};

impl BigInt {
    /// Parses a hexadecimal numeral with optional leading `+` or `-`.
    /// The capacity is the digit count rounded up to a whole limb, so
    /// leading zeros are a way to ask for headroom.
    ///
    /// # Examples
    ///
    /// ```
    /// use multiprec::BigInt;
    ///
    /// let n = BigInt::from_hex("-00ff").unwrap();
    /// assert_eq!(n, BigInt::from(-255));
    /// assert_eq!(n.capacity(), 32);
    /// ```
    pub fn from_hex(s: &str) -> Result<BigInt, ParseBigIntError> {
        parse_hex(s, None)
    }

    /// Parses a hexadecimal numeral into a value of the given capacity.
    /// Digits beyond the capacity are dropped, consistent with the
    /// truncation contract, but the whole string is still validated.
    ///
    /// # Panics
    ///
    /// Panics unless `bits` is a nonzero multiple of the limb width.
    pub fn from_hex_with_capacity(s: &str, bits: u64) -> Result<BigInt, ParseBigIntError> {
        parse_hex(s, Some(BigInt::capacity_limbs(bits)))
    }

    /// Lowercase hexadecimal rendering of the active limbs, most
    /// significant first, eight digits per limb, with a leading `-` for
    /// negative values.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(self.len() * 8 + 1);
        if self.is_negative() {
            out.push('-');
        }
        out.push_str(&self.hex_digits());
        out
    }

    fn hex_digits(&self) -> String {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";
        let mut s = String::with_capacity(self.len() * 8);
        for &d in self.digits().iter().rev() {
            for shift in (0..8).rev() {
                s.push(DIGITS[((d >> (shift * 4)) & 0xf) as usize] as char);
            }
        }
        s
    }
}

fn parse_hex(s: &str, cap_limbs: Option<usize>) -> Result<BigInt, ParseBigIntError> {
    if s.is_empty() {
        return Err(ParseBigIntError::empty());
    }
    let (sign, digits) = match s.as_bytes()[0] {
        b'-' => (Sign::Minus, &s[1..]),
        b'+' => (Sign::Plus, &s[1..]),
        _ => (Sign::Plus, s),
    };
    if digits.is_empty() {
        return Err(ParseBigIntError::invalid());
    }

    let cap = cap_limbs.unwrap_or_else(|| digits.len().div_ceil(8));
    let mut data = vec![0u32; cap];

    // walk from the least significant digit, eight per limb; digits past
    // the capacity are still validated, only their value is dropped
    for (i, b) in digits.bytes().rev().enumerate() {
        let d = match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            b'A'..=b'F' => b - b'A' + 10,
            _ => return Err(ParseBigIntError::invalid()),
        };
        let limb = i / 8;
        if limb < cap {
            data[limb] |= u32::from(d) << ((i % 8) * 4);
        }
    }

    let len = normalized_len(&data);
    Ok(BigInt::from_parts(sign, data, len))
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    #[inline]
    fn from_str(s: &str) -> Result<BigInt, ParseBigIntError> {
        BigInt::from_hex(s)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.hex_digits())
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.hex_digits())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<u32> for BigInt {
    #[inline]
    fn from(n: u32) -> BigInt {
        BigInt::from_parts(Sign::Plus, vec![n], 1)
    }
}

impl From<u64> for BigInt {
    fn from(n: u64) -> BigInt {
        let (hi, lo) = big_digit::from_doublebigdigit(n);
        BigInt::from_parts(Sign::Plus, vec![lo, hi], 2)
    }
}

impl From<i32> for BigInt {
    fn from(n: i32) -> BigInt {
        let sign = if n < 0 { Sign::Minus } else { Sign::Plus };
        BigInt::from_parts(sign, vec![n.unsigned_abs()], 1)
    }
}

impl From<i64> for BigInt {
    fn from(n: i64) -> BigInt {
        let sign = if n < 0 { Sign::Minus } else { Sign::Plus };
        let (hi, lo) = big_digit::from_doublebigdigit(n.unsigned_abs());
        BigInt::from_parts(sign, vec![lo, hi], 2)
    }
}

impl BigInt {
    fn magnitude_u64(&self) -> Option<u64> {
        match self.len() {
            1 => Some(u64::from(self.digits()[0])),
            2 => Some(big_digit::to_doublebigdigit(
                self.digits()[1],
                self.digits()[0],
            )),
            _ => None,
        }
    }
}

impl ToPrimitive for BigInt {
    fn to_i64(&self) -> Option<i64> {
        let mag = self.magnitude_u64()?;
        match self.sign() {
            Sign::Plus => i64::try_from(mag).ok(),
            Sign::Minus => {
                // one more value fits on the negative side
                match mag.cmp(&(1u64 << 63)) {
                    core::cmp::Ordering::Less => Some(-(mag as i64)),
                    core::cmp::Ordering::Equal => Some(i64::MIN),
                    core::cmp::Ordering::Greater => None,
                }
            }
        }
    }

    fn to_u64(&self) -> Option<u64> {
        if self.is_negative() {
            return None;
        }
        self.magnitude_u64()
    }
}

impl FromPrimitive for BigInt {
    #[inline]
    fn from_i64(n: i64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::ToString;

    use num_traits::ToPrimitive;

    use crate::bigint::BigInt;

    #[test]
    fn test_hex_roundtrip() {
        for s in ["0", "1", "deadbeef", "-1", "00000001ffffffff", "+ff"] {
            let n = BigInt::from_hex(s).unwrap();
            assert_eq!(BigInt::from_hex(&n.to_hex()).unwrap(), n, "{s}");
        }
    }

    #[test]
    fn test_parse_case_and_capacity() {
        assert_eq!(
            BigInt::from_hex("DEADBEEF").unwrap(),
            BigInt::from_hex("deadbeef").unwrap()
        );
        assert_eq!(BigInt::from_hex("00000000000000ff").unwrap().capacity(), 64);
        assert_eq!(BigInt::from_hex("1ffffffff").unwrap().capacity(), 64);
    }

    #[test]
    fn test_to_hex_groups() {
        let n = BigInt::from_hex("1ffffffff").unwrap();
        assert_eq!(n.to_hex(), "00000001ffffffff");
        assert_eq!((-n).to_hex(), "-00000001ffffffff");
        assert_eq!(BigInt::from(0).to_hex(), "00000000");
    }

    #[test]
    fn test_parse_errors() {
        assert!(BigInt::from_hex("").is_err());
        assert!(BigInt::from_hex("-").is_err());
        assert!(BigInt::from_hex("12g4").is_err());
        assert_eq!(
            BigInt::from_hex("").unwrap_err().to_string(),
            "cannot parse integer from empty string"
        );
        assert_eq!(
            BigInt::from_hex("12g4").unwrap_err().to_string(),
            "invalid digit found in string"
        );
    }

    #[test]
    fn test_parse_truncates_to_capacity() {
        let n = BigInt::from_hex_with_capacity("123456789abcdef0", 32).unwrap();
        assert_eq!(n, BigInt::from_hex("9abcdef0").unwrap());
        assert_eq!(n.capacity(), 32);
    }

    #[test]
    fn test_parse_validates_past_capacity() {
        assert!(BigInt::from_hex_with_capacity("zz1234567890", 32).is_err());
    }

    #[test]
    fn test_display_format() {
        let n = BigInt::from_hex("-1ffffffff").unwrap();
        assert_eq!(format!("{n}"), "-00000001ffffffff");
        assert_eq!(format!("{n:x}"), "-00000001ffffffff");
        assert_eq!(format!("{n:#x}"), "-0x00000001ffffffff");

        let small = BigInt::from_hex("ff").unwrap();
        assert_eq!(format!("{small:>10}"), "  000000ff");
        assert_eq!(format!("{small:?}"), "000000ff");
    }

    #[test]
    fn test_from_str() {
        let n: BigInt = "-cafe".parse().unwrap();
        assert_eq!(n, BigInt::from(-0xcafe));
    }

    #[test]
    fn test_primitive_conversions() {
        assert_eq!(BigInt::from(-2i64).to_i64(), Some(-2));
        assert_eq!(BigInt::from(u64::MAX).to_u64(), Some(u64::MAX));
        assert_eq!(BigInt::from(u64::MAX).to_i64(), None);
        assert_eq!(BigInt::from(-1).to_u64(), None);
        assert_eq!(BigInt::from(i64::MIN).to_i64(), Some(i64::MIN));
        assert_eq!(
            BigInt::from_hex("100000000000000000000").unwrap().to_u64(),
            None
        );
    }
}
