//! Case-insensitive natural ordering of identifier strings
//!
//! Runs of ASCII digits are compared by numeric value, everything else byte by
//! byte after ASCII lower-casing. No locale is consulted, so the result is the
//! same on every host.

use std::cmp::Ordering;

/// Compares two strings in case-insensitive natural order.
///
/// - `"2" < "11"` (digit runs compare by value, not lexically)
/// - `"beta" == "BETA"`
/// - `"1" < "beta"` (a digit sorts before a letter)
/// - `"rc" < "rc1"` (a proper prefix sorts first)
///
/// Digit runs of equal value but different width order the wider one first,
/// so `"a01" < "a1"`. Two strings compare equal only when they are equal
/// ignoring ASCII case.
pub fn compare_natural(left: &str, right: &str) -> Ordering {
    let (a, b) = (left.as_bytes(), right.as_bytes());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let a_end = digit_run_end(a, i);
            let b_end = digit_run_end(b, j);

            match compare_digit_runs(&a[i..a_end], &b[j..b_end]) {
                Ordering::Equal => {
                    i = a_end;
                    j = b_end;
                }
                unequal => return unequal,
            }
        } else {
            match a[i].to_ascii_lowercase().cmp(&b[j].to_ascii_lowercase()) {
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
                unequal => return unequal,
            }
        }
    }

    // At least one side is exhausted; whatever is left over sorts last
    (a.len() - i).cmp(&(b.len() - j))
}

fn digit_run_end(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|b| !b.is_ascii_digit())
        .map_or(bytes.len(), |offset| start + offset)
}

/// Orders two runs of ASCII digits by value without parsing them, so runs of
/// any length are handled.
fn compare_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    let a_value = strip_leading_zeroes(a);
    let b_value = strip_leading_zeroes(b);

    a_value
        .len()
        .cmp(&b_value.len())
        .then_with(|| a_value.cmp(b_value))
        .then_with(|| b.len().cmp(&a.len()))
}

fn strip_leading_zeroes(digits: &[u8]) -> &[u8] {
    let first_significant = digits
        .iter()
        .position(|&d| d != b'0')
        .unwrap_or(digits.len());
    &digits[first_significant..]
}
