//! Uncategorized functions.

use crate::consts::FRACTION_EPSILON;

/// Returns the absolute value.
pub fn abs(x: f64) -> f64 {
    if x < 0.0 {
        -x
    } else {
        x
    }
}

/// Computes `n!` as an iterative product.
///
/// The accumulator is a 64-bit integer and wraps on overflow, which happens for `n > 20`.
pub fn factorial(n: u32) -> u64 {
    (2..=u64::from(n)).fold(1, |product, k| product.wrapping_mul(k))
}

/// Returns `true` if `x` has a fractional part.
///
/// Values within [`FRACTION_EPSILON`] of their truncated value count as integers, so
/// representation error such as `3.0000000001` does not make a number fractional.
pub fn has_fractional_part(x: f64) -> bool {
    abs(x - x.trunc()) > FRACTION_EPSILON
}
