use core::cmp::Ordering;

use crate::big_digit::BigDigit;

/// Compare two normalized magnitude slices. A longer slice is greater;
/// equal lengths compare limbwise from the most significant end.
pub fn cmp_slice(a: &[BigDigit], b: &[BigDigit]) -> Ordering {
    debug_assert!(a.len() == 1 || a.last() != Some(&0));
    debug_assert!(b.len() == 1 || b.last() != Some(&0));

    match a.len().cmp(&b.len()) {
        Ordering::Equal => Iterator::cmp(a.iter().rev(), b.iter().rev()),
        other => other,
    }
}
