//! Integer arithmetic helpers.

/// Raises `x` to the power of `n`.
///
/// Returns [`None`] when the result overflows.
#[inline]
pub fn pow_i(x: i64, n: u32) -> Option<i64> {
    x.checked_pow(n)
}
