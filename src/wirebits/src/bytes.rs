use crate::{
    scratch::Scratch,
    trace::{Access, Event, Tracer},
    Codec, Error, ErrorKind, FieldFlags, Layer, Word,
};

// Checks that `bytes` bytes are enough to carry `bit_len` bits.
fn check_capacity(bytes: usize, bit_len: usize) -> Result<(), Error> {
    match bytes.checked_mul(u8::BITS as usize) {
        Some(bits) if bit_len <= bits => Ok(()),
        Some(_) => Err(Error::new(Layer::Bytes, ErrorKind::FieldTooWide)),
        // More bits than the address space can count always suffice.
        None => Ok(()),
    }
}

impl<T> Codec<T> {
    /// Writes a field of `bit_len` bits taken from network-order `bytes`.
    ///
    /// See [`write_bits_bytes`] for details.
    pub fn write_bits_bytes<W>(
        &self,
        message: &mut [W],
        start_bit: usize,
        bit_len: usize,
        bytes: &[u8],
        flags: FieldFlags,
    ) -> Result<usize, Error>
    where
        W: Word,
        T: Tracer<W>,
    {
        check_capacity(bytes.len(), bit_len)?;

        self.tracer().trace(&Event::Begin {
            layer: Layer::Bytes,
            access: Access::Write,
            start_bit,
            bit_len,
        });

        let scratch = Scratch::<W>::from_network_bytes(bytes, bit_len)
            .map_err(|kind| Error::new(Layer::Bytes, kind))?;
        self.tracer().trace(&Event::Scratch {
            words: scratch.len(),
        });

        let next_bit = self
            .write_bits_wide(message, start_bit, bit_len, &scratch, flags)
            .map_err(|e| e.through(Layer::Bytes))?;

        self.tracer().trace(&Event::End {
            layer: Layer::Bytes,
            next_bit,
        });

        Ok(next_bit)
    }

    /// Reads a field of `bit_len` bits into network-order bytes.
    ///
    /// See [`read_bits_bytes`] for details.
    pub fn read_bits_bytes<W>(
        &self,
        message: &[W],
        start_bit: usize,
        bit_len: usize,
        out: &mut [u8],
    ) -> Result<usize, Error>
    where
        W: Word,
        T: Tracer<W>,
    {
        if out.is_empty() && bit_len != 0 {
            return Err(Error::new(Layer::Bytes, ErrorKind::NullOutput));
        }
        check_capacity(out.len(), bit_len)?;

        self.tracer().trace(&Event::Begin {
            layer: Layer::Bytes,
            access: Access::Read,
            start_bit,
            bit_len,
        });

        let mut scratch =
            Scratch::<W>::zeroed(bit_len).map_err(|kind| Error::new(Layer::Bytes, kind))?;
        self.tracer().trace(&Event::Scratch {
            words: scratch.len(),
        });

        let next_bit = self
            .read_bits_wide(message, start_bit, bit_len, &mut scratch)
            .map_err(|e| e.through(Layer::Bytes))?;

        scratch.clear_tail(bit_len);
        scratch.copy_network_bytes(out, bit_len);

        self.tracer().trace(&Event::End {
            layer: Layer::Bytes,
            next_bit,
        });

        Ok(next_bit)
    }
}

/// Writes a field given as network-order bytes into `message` at
/// `start_bit`.
///
/// The field consists of the leading `bit_len` bits of `bytes`, i.e. the
/// most significant bits of the first byte come first. Trailing bits of
/// the last covered byte beyond `bit_len` are ignored.
///
/// With [`FieldFlags::ERASE`] the destination bits are cleared first.
///
/// Returns the bit position following the field.
///
/// # Errors
///
/// - [`ErrorKind::FieldTooWide`] when `bytes` holds fewer than `bit_len`
///   bits.
/// - [`ErrorKind::AllocationFailure`] when the scratch buffer cannot be
///   allocated.
/// - Any failure of [`write_bits_wide`](crate::write_bits_wide), reported
///   through [`Layer::Bytes`]. Words written by earlier steps remain
///   modified.
#[inline]
pub fn write_bits_bytes<W: Word>(
    message: &mut [W],
    start_bit: usize,
    bit_len: usize,
    bytes: &[u8],
    flags: FieldFlags,
) -> Result<usize, Error> {
    Codec::new().write_bits_bytes(message, start_bit, bit_len, bytes, flags)
}

/// Reads a field from `message` at `start_bit` into network-order bytes.
///
/// Exactly `ceil(bit_len / 8)` bytes of `out` are written. The unused low
/// bits of the last of them are zero; bytes past it are left untouched.
///
/// Returns the bit position following the field.
///
/// # Errors
///
/// - [`ErrorKind::NullOutput`] when `out` is empty.
/// - [`ErrorKind::FieldTooWide`] when `out` is too short for the field.
/// - [`ErrorKind::AllocationFailure`] when the scratch buffer cannot be
///   allocated.
/// - Any failure of [`read_bits_wide`](crate::read_bits_wide), reported
///   through [`Layer::Bytes`].
#[inline]
pub fn read_bits_bytes<W: Word>(
    message: &[W],
    start_bit: usize,
    bit_len: usize,
    out: &mut [u8],
) -> Result<usize, Error> {
    Codec::new().read_bits_bytes(message, start_bit, bit_len, out)
}
