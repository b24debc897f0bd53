//! Helpers for sizing message buffers and moving them to and from the
//! wire.

use crate::Word;

/// Gets the number of bits `words` message words can hold.
#[inline]
pub const fn capacity_bits<W: Word>(words: usize) -> usize {
    words * W::BITS as usize
}

/// Gets the number of words needed to hold `bits` bits.
#[inline]
pub const fn words_for_bits<W: Word>(bits: usize) -> usize {
    bits.div_ceil(W::BITS as usize)
}

/// Gets the number of bytes needed to hold `bits` bits.
#[inline]
pub const fn bytes_for_bits(bits: usize) -> usize {
    bits.div_ceil(u8::BITS as usize)
}

/// Copies a message into its wire representation.
///
/// Message words are already stored in network order, so this is an
/// exact image of the buffer's memory.
pub fn to_wire_bytes<W: Word>(message: &[W]) -> Vec<u8> {
    let mut out = vec![0; message.len() * W::BYTES];
    for (word, chunk) in message.iter().zip(out.chunks_exact_mut(W::BYTES)) {
        word.write_native(chunk);
    }

    out
}

/// Builds a message from its wire representation.
///
/// A trailing partial word is padded with zero bytes.
pub fn from_wire_bytes<W: Word>(bytes: &[u8]) -> Vec<W> {
    bytes
        .chunks(W::BYTES)
        .map(|chunk| {
            if chunk.len() == W::BYTES {
                W::read_native(chunk)
            } else {
                let mut raw = vec![0; W::BYTES];
                raw[..chunk.len()].copy_from_slice(chunk);
                W::read_native(&raw)
            }
        })
        .collect()
}
