use std::ops::{Deref, DerefMut};

use crate::{
    message::{bytes_for_bits, words_for_bits},
    word::MAX_WORD_BYTES,
    ErrorKind, Word,
};

/// A call-local, zero-initialized word buffer backing byte-array
/// operations.
///
/// Words are kept in host order. The memory is released when the
/// scratch buffer is dropped.
#[derive(Debug)]
pub(crate) struct Scratch<W> {
    words: Vec<W>,
}

impl<W: Word> Scratch<W> {
    /// Allocates enough zeroed words to hold `bit_len` bits.
    pub fn zeroed(bit_len: usize) -> Result<Self, ErrorKind> {
        let len = words_for_bits::<W>(bit_len);

        let mut words = Vec::new();
        words
            .try_reserve_exact(len)
            .map_err(|_| ErrorKind::AllocationFailure)?;
        words.resize(len, W::ZERO);

        Ok(Self { words })
    }

    /// Loads the leading `bit_len` bits of network-order `bytes`.
    ///
    /// Only the bytes covering the field are copied; the remainder of
    /// the last word stays zero.
    pub fn from_network_bytes(bytes: &[u8], bit_len: usize) -> Result<Self, ErrorKind> {
        let mut scratch = Self::zeroed(bit_len)?;
        let used = &bytes[..bytes_for_bits(bit_len)];

        for (word, chunk) in scratch.words.iter_mut().zip(used.chunks(W::BYTES)) {
            let mut raw = [0; MAX_WORD_BYTES];
            raw[..chunk.len()].copy_from_slice(chunk);

            *word = W::read_network(&raw[..W::BYTES]);
        }

        Ok(scratch)
    }

    /// Clears all bits of the last word beyond the first `bit_len` bits
    /// of the buffer.
    pub fn clear_tail(&mut self, bit_len: usize) {
        let used = (bit_len % W::BITS as usize) as u32;
        if used != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= W::high_mask(used);
            }
        }
    }

    /// Stores the leading `bit_len` bits as network-order bytes into
    /// `out`, writing exactly as many bytes as the bits cover.
    pub fn copy_network_bytes(&self, out: &mut [u8], bit_len: usize) {
        let used = &mut out[..bytes_for_bits(bit_len)];

        for (word, chunk) in self.words.iter().zip(used.chunks_mut(W::BYTES)) {
            let mut raw = [0; MAX_WORD_BYTES];
            word.write_network(&mut raw[..W::BYTES]);

            let len = chunk.len();
            chunk.copy_from_slice(&raw[..len]);
        }
    }
}

impl<W> Deref for Scratch<W> {
    type Target = [W];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

impl<W> DerefMut for Scratch<W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.words
    }
}
