use crate::{
    message::capacity_bits,
    trace::{NoTrace, Tracer},
    Codec, Error, FieldFlags, Word,
};

/// Sequentially packs fields into a message.
///
/// The writer keeps the bit cursor returned by each operation, so fields
/// are laid out back to back. A failed write leaves the cursor where it
/// was, although bits touched before the failure stay modified.
///
/// Fields are written with [`FieldFlags::ERASE`] unless disabled through
/// [`Self::set_erase`].
#[derive(Debug)]
pub struct MessageWriter<'a, W, T = NoTrace> {
    message: &'a mut [W],
    position: usize,
    flags: FieldFlags,
    codec: Codec<T>,
}

impl<'a, W: Word> MessageWriter<'a, W> {
    /// Creates a writer starting at the first bit of `message`.
    pub fn new(message: &'a mut [W]) -> Self {
        Self::with_codec(message, Codec::new())
    }
}

impl<'a, W: Word, T: Tracer<W>> MessageWriter<'a, W, T> {
    /// Creates a writer which runs its operations on `codec`.
    pub fn with_codec(message: &'a mut [W], codec: Codec<T>) -> Self {
        Self {
            message,
            position: 0,
            flags: FieldFlags::ERASE,
            codec,
        }
    }

    /// Gets the bit position the next field will be written at.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor to an absolute bit position.
    ///
    /// Positions are validated by the next write.
    #[inline]
    pub fn seek(&mut self, position: usize) {
        self.position = position;
    }

    /// Gets the number of bits left between the cursor and the end of
    /// the message.
    #[inline]
    pub fn remaining_bits(&self) -> usize {
        capacity_bits::<W>(self.message.len()).saturating_sub(self.position)
    }

    /// Controls whether destination bits are cleared before writing.
    #[inline]
    pub fn set_erase(&mut self, erase: bool) {
        self.flags.set(FieldFlags::ERASE, erase);
    }

    /// Gets a view of the message written so far.
    #[inline]
    pub fn view(&self) -> &[W] {
        self.message
    }

    /// Consumes the writer and returns the message.
    #[inline]
    pub fn into_inner(self) -> &'a mut [W] {
        self.message
    }

    /// Writes the low `bit_len` bits of `value`.
    pub fn write(&mut self, bit_len: u32, value: W) -> Result<usize, Error> {
        let flags = self.flags | FieldFlags::START_LOW;
        self.position = self
            .codec
            .write_bits(self.message, self.position, bit_len, value, flags)?;

        Ok(self.position)
    }

    /// Writes the high `bit_len` bits of `value`.
    pub fn write_aligned(&mut self, bit_len: u32, value: W) -> Result<usize, Error> {
        self.position =
            self.codec
                .write_bits(self.message, self.position, bit_len, value, self.flags)?;

        Ok(self.position)
    }

    /// Writes a field spread over MSB-aligned `values`.
    pub fn write_wide(&mut self, bit_len: usize, values: &[W]) -> Result<usize, Error> {
        self.position =
            self.codec
                .write_bits_wide(self.message, self.position, bit_len, values, self.flags)?;

        Ok(self.position)
    }

    /// Writes the leading `bit_len` bits of network-order `bytes`.
    pub fn write_bytes(&mut self, bit_len: usize, bytes: &[u8]) -> Result<usize, Error> {
        self.position =
            self.codec
                .write_bits_bytes(self.message, self.position, bit_len, bytes, self.flags)?;

        Ok(self.position)
    }
}

/// Sequentially unpacks fields from a message.
///
/// This is the reading counterpart of [`MessageWriter`].
#[derive(Debug)]
pub struct MessageReader<'a, W, T = NoTrace> {
    message: &'a [W],
    position: usize,
    codec: Codec<T>,
}

impl<'a, W: Word> MessageReader<'a, W> {
    /// Creates a reader starting at the first bit of `message`.
    pub fn new(message: &'a [W]) -> Self {
        Self::with_codec(message, Codec::new())
    }
}

impl<'a, W: Word, T: Tracer<W>> MessageReader<'a, W, T> {
    /// Creates a reader which runs its operations on `codec`.
    pub fn with_codec(message: &'a [W], codec: Codec<T>) -> Self {
        Self {
            message,
            position: 0,
            codec,
        }
    }

    /// Gets the bit position the next field will be read from.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor to an absolute bit position.
    #[inline]
    pub fn seek(&mut self, position: usize) {
        self.position = position;
    }

    /// Advances the cursor by `bits` without reading.
    #[inline]
    pub fn skip(&mut self, bits: usize) {
        self.position = self.position.saturating_add(bits);
    }

    /// Gets the number of bits left between the cursor and the end of
    /// the message.
    #[inline]
    pub fn remaining_bits(&self) -> usize {
        capacity_bits::<W>(self.message.len()).saturating_sub(self.position)
    }

    /// Reads `bit_len` bits as a right-aligned integer.
    pub fn read(&mut self, bit_len: u32) -> Result<W, Error> {
        let (value, next) =
            self.codec
                .read_bits(self.message, self.position, bit_len, FieldFlags::START_LOW)?;
        self.position = next;

        Ok(value)
    }

    /// Reads `bit_len` bits into the high end of a word.
    pub fn read_aligned(&mut self, bit_len: u32) -> Result<W, Error> {
        let (value, next) =
            self.codec
                .read_bits(self.message, self.position, bit_len, FieldFlags::empty())?;
        self.position = next;

        Ok(value)
    }

    /// Reads a field into MSB-aligned words.
    pub fn read_wide(&mut self, bit_len: usize, out: &mut [W]) -> Result<usize, Error> {
        self.position = self
            .codec
            .read_bits_wide(self.message, self.position, bit_len, out)?;

        Ok(self.position)
    }

    /// Reads a field into network-order bytes.
    pub fn read_bytes(&mut self, bit_len: usize, out: &mut [u8]) -> Result<usize, Error> {
        self.position = self
            .codec
            .read_bits_bytes(self.message, self.position, bit_len, out)?;

        Ok(self.position)
    }
}
