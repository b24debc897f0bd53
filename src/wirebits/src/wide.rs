use crate::{
    message::words_for_bits,
    trace::{Access, Event, Tracer},
    Codec, Error, ErrorKind, FieldFlags, Layer, Word,
};

// Checks the start position of a wide field against the message.
fn check_start<W: Word>(words: usize, start_bit: usize) -> Result<(), Error> {
    if start_bit / W::BITS as usize >= words {
        Err(Error::new(Layer::Wide, ErrorKind::OutOfRange))
    } else {
        Ok(())
    }
}

// Checks that `values` words are enough to carry `bit_len` bits.
fn check_capacity<W: Word>(values: usize, bit_len: usize) -> Result<(), Error> {
    if words_for_bits::<W>(bit_len) > values {
        Err(Error::new(Layer::Wide, ErrorKind::FieldTooWide))
    } else {
        Ok(())
    }
}

impl<T> Codec<T> {
    /// Writes a field of `bit_len` bits taken from `values`.
    ///
    /// See [`write_bits_wide`] for details.
    pub fn write_bits_wide<W>(
        &self,
        message: &mut [W],
        start_bit: usize,
        bit_len: usize,
        values: &[W],
        flags: FieldFlags,
    ) -> Result<usize, Error>
    where
        W: Word,
        T: Tracer<W>,
    {
        check_start::<W>(message.len(), start_bit)?;
        check_capacity::<W>(values.len(), bit_len)?;

        self.tracer().trace(&Event::Begin {
            layer: Layer::Wide,
            access: Access::Write,
            start_bit,
            bit_len,
        });

        let flags = flags.difference(FieldFlags::START_LOW);
        let mut cursor = start_bit;
        let mut remaining = bit_len;

        for &value in values {
            if remaining == 0 {
                break;
            }

            let len = remaining.min(W::BITS as usize);
            let next = self
                .write_bits(message, cursor, len as u32, value, flags)
                .map_err(|e| e.through(Layer::Wide))?;

            remaining -= next - cursor;
            cursor = next;
        }
        debug_assert_eq!(remaining, 0);

        self.tracer().trace(&Event::End {
            layer: Layer::Wide,
            next_bit: cursor,
        });

        Ok(cursor)
    }

    /// Reads a field of `bit_len` bits into `out`.
    ///
    /// See [`read_bits_wide`] for details.
    pub fn read_bits_wide<W>(
        &self,
        message: &[W],
        start_bit: usize,
        bit_len: usize,
        out: &mut [W],
    ) -> Result<usize, Error>
    where
        W: Word,
        T: Tracer<W>,
    {
        check_start::<W>(message.len(), start_bit)?;
        if out.is_empty() && bit_len != 0 {
            return Err(Error::new(Layer::Wide, ErrorKind::NullOutput));
        }
        check_capacity::<W>(out.len(), bit_len)?;

        self.tracer().trace(&Event::Begin {
            layer: Layer::Wide,
            access: Access::Read,
            start_bit,
            bit_len,
        });

        let mut cursor = start_bit;
        let mut remaining = bit_len;

        for slot in out.iter_mut() {
            if remaining == 0 {
                break;
            }

            let len = remaining.min(W::BITS as usize);
            let (value, next) = self
                .read_bits(message, cursor, len as u32, FieldFlags::empty())
                .map_err(|e| e.through(Layer::Wide))?;
            *slot = value;

            remaining -= next - cursor;
            cursor = next;
        }
        debug_assert_eq!(remaining, 0);

        self.tracer().trace(&Event::End {
            layer: Layer::Wide,
            next_bit: cursor,
        });

        Ok(cursor)
    }
}

/// Writes a field of arbitrary width into `message` at `start_bit`.
///
/// The field is taken from `values` one word at a time, each word
/// contributing its most significant bits. All words but the last one
/// are consumed fully; the last one contributes the remaining
/// `bit_len % W::BITS` bits. Surplus words are ignored.
///
/// With [`FieldFlags::ERASE`] the destination bits are cleared first.
/// [`FieldFlags::START_LOW`] has no effect here.
///
/// Returns the bit position following the field.
///
/// # Errors
///
/// - [`ErrorKind::OutOfRange`] when `start_bit` lies outside the message.
/// - [`ErrorKind::FieldTooWide`] when `values` holds fewer than `bit_len`
///   bits. Nothing is written in that case.
/// - Any failure of [`write_bits`](crate::write_bits) on a constituent
///   word, reported through [`Layer::Wide`]. Words written by earlier
///   steps remain modified.
#[inline]
pub fn write_bits_wide<W: Word>(
    message: &mut [W],
    start_bit: usize,
    bit_len: usize,
    values: &[W],
    flags: FieldFlags,
) -> Result<usize, Error> {
    Codec::new().write_bits_wide(message, start_bit, bit_len, values, flags)
}

/// Reads a field of arbitrary width from `message` at `start_bit`.
///
/// The field is stored into `out` one word at a time, MSB-aligned, so the
/// unused low bits of the last word are zero. Elements of `out` beyond
/// the ones covering the field are left untouched.
///
/// Returns the bit position following the field.
///
/// # Errors
///
/// - [`ErrorKind::OutOfRange`] when `start_bit` lies outside the message.
/// - [`ErrorKind::NullOutput`] when `out` is empty.
/// - [`ErrorKind::FieldTooWide`] when `out` is too short for the field.
/// - Any failure of [`read_bits`](crate::read_bits) on a constituent word,
///   reported through [`Layer::Wide`].
#[inline]
pub fn read_bits_wide<W: Word>(
    message: &[W],
    start_bit: usize,
    bit_len: usize,
    out: &mut [W],
) -> Result<usize, Error> {
    Codec::new().read_bits_wide(message, start_bit, bit_len, out)
}
