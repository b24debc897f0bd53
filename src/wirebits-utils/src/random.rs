//! Random field values for exercising codecs.

use rand::Rng;
use thiserror::Error;

/// A field was too wide for the buffer meant to hold it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("field of {bit_len} bits does not fit into {byte_len} bytes")]
pub struct FieldTooLarge {
    pub bit_len: usize,
    pub byte_len: usize,
}

/// Picks a random value between `min` and `max`, both inclusive.
///
/// # Panics
///
/// Panics when `min > max`.
#[inline]
pub fn rand_in_range<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.gen_range(min..=max)
}

/// Fills the leading bytes of `buf` with a random field of `bit_len` bits
/// in network order.
///
/// The unused low bits of the last byte are cleared, matching what a
/// byte-array read hands back for the same field. Bytes past the field
/// are left untouched.
///
/// Returns the number of bytes covered by the field.
pub fn fill_field<R: Rng + ?Sized>(
    rng: &mut R,
    buf: &mut [u8],
    bit_len: usize,
) -> Result<usize, FieldTooLarge> {
    let len = bit_len.div_ceil(8);
    let byte_len = buf.len();
    let field = buf.get_mut(..len).ok_or(FieldTooLarge { bit_len, byte_len })?;

    rng.fill(field);

    let unused = len * 8 - bit_len;
    if let Some(last) = field.last_mut() {
        *last &= !((1u16 << unused) - 1) as u8;
    }

    Ok(len)
}
