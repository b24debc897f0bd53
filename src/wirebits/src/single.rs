use crate::{
    trace::{Access, Event, Tracer},
    Codec, Error, ErrorKind, FieldFlags, Layer, Word,
};

// The position of a field's first bit inside the message.
struct Locator {
    // Index of the word holding the first bit.
    index: usize,
    // Offset of the first bit inside that word, counted from the MSB.
    offset: u32,
}

// Validates a single-word field against the message bounds.
fn locate<W: Word>(words: usize, start_bit: usize, bit_len: u32) -> Result<Locator, Error> {
    let bits = W::BITS as usize;

    let index = start_bit / bits;
    if index >= words {
        return Err(Error::new(Layer::Word, ErrorKind::OutOfRange));
    }
    if bit_len > W::BITS {
        return Err(Error::new(Layer::Word, ErrorKind::FieldTooWide));
    }

    // Since a field is at most one word wide, it may only run past the
    // end of the message when it starts in the last word.
    let end = start_bit
        .checked_add(bit_len as usize)
        .ok_or(Error::new(Layer::Word, ErrorKind::SpanOverflow))?;
    if end > words * bits {
        return Err(Error::new(Layer::Word, ErrorKind::SpanOverflow));
    }

    Ok(Locator {
        index,
        offset: (start_bit % bits) as u32,
    })
}

impl<T> Codec<T> {
    /// Writes `bit_len` bits of `value` into `message` at `start_bit`.
    ///
    /// See [`write_bits`] for details.
    pub fn write_bits<W>(
        &self,
        message: &mut [W],
        start_bit: usize,
        bit_len: u32,
        value: W,
        flags: FieldFlags,
    ) -> Result<usize, Error>
    where
        W: Word,
        T: Tracer<W>,
    {
        let Locator { index, offset } = locate::<W>(message.len(), start_bit, bit_len)?;
        let tracer = self.tracer();

        tracer.trace(&Event::Begin {
            layer: Layer::Word,
            access: Access::Write,
            start_bit,
            bit_len: bit_len as usize,
        });

        if bit_len != 0 {
            // Move the field bits to the top of the word, with everything
            // below them cleared.
            let field = if flags.contains(FieldFlags::START_LOW) {
                value.shift_left(W::BITS - bit_len)
            } else {
                value & W::high_mask(bit_len)
            };
            let erase = flags.contains(FieldFlags::ERASE);

            merge(
                tracer,
                message,
                index,
                W::high_mask(bit_len).shift_right(offset),
                field.shift_right(offset),
                erase,
            );

            // Bits which did not fit into the first word continue at the
            // top of the next one.
            let head = W::BITS - offset;
            if bit_len > head {
                merge(
                    tracer,
                    message,
                    index + 1,
                    W::high_mask(bit_len - head),
                    field.shift_left(head),
                    erase,
                );
            }
        }

        let next_bit = start_bit + bit_len as usize;
        tracer.trace(&Event::End {
            layer: Layer::Word,
            next_bit,
        });

        Ok(next_bit)
    }

    /// Reads `bit_len` bits from `message` at `start_bit`.
    ///
    /// See [`read_bits`] for details.
    pub fn read_bits<W>(
        &self,
        message: &[W],
        start_bit: usize,
        bit_len: u32,
        flags: FieldFlags,
    ) -> Result<(W, usize), Error>
    where
        W: Word,
        T: Tracer<W>,
    {
        let Locator { index, offset } = locate::<W>(message.len(), start_bit, bit_len)?;
        let tracer = self.tracer();

        tracer.trace(&Event::Begin {
            layer: Layer::Word,
            access: Access::Read,
            start_bit,
            bit_len: bit_len as usize,
        });

        let mut value = W::ZERO;
        if bit_len != 0 {
            let word = message[index].from_network();
            value = word.shift_left(offset) & W::high_mask(bit_len);
            tracer.trace(&Event::Extract { index, word, value });

            let head = W::BITS - offset;
            if bit_len > head {
                let word = message[index + 1].from_network();
                let tail = word.shift_right(head) & W::high_mask(bit_len);
                tracer.trace(&Event::Extract {
                    index: index + 1,
                    word,
                    value: tail,
                });

                value |= tail;
            }

            if flags.contains(FieldFlags::START_LOW) {
                value = value.shift_right(W::BITS - bit_len);
            }
        }

        let next_bit = start_bit + bit_len as usize;
        tracer.trace(&Event::End {
            layer: Layer::Word,
            next_bit,
        });

        Ok((value, next_bit))
    }
}

// Merges `bits` into the message word at `index`, limited to `mask`.
fn merge<W, T>(tracer: &T, message: &mut [W], index: usize, mask: W, bits: W, erase: bool)
where
    W: Word,
    T: Tracer<W>,
{
    let before = message[index].from_network();

    let mut after = before;
    if erase {
        after &= !mask;
    }
    after |= bits & mask;

    tracer.trace(&Event::Merge {
        index,
        mask,
        before,
        after,
    });

    message[index] = after.to_network();
}

/// Writes `bit_len` bits of `value` into `message` at `start_bit`.
///
/// `bit_len` may be at most [`Word::BITS`]; the field may straddle the
/// boundary into the next word. By default the field is taken from the
/// most significant bits of `value`; with [`FieldFlags::START_LOW`] it is
/// taken from the least significant ones. With [`FieldFlags::ERASE`] the
/// destination bits are cleared first, otherwise the value is ORed over
/// the existing content.
///
/// Returns the bit position following the field.
///
/// # Errors
///
/// - [`ErrorKind::OutOfRange`] when `start_bit` lies outside the message.
/// - [`ErrorKind::FieldTooWide`] when `bit_len` exceeds one word.
/// - [`ErrorKind::SpanOverflow`] when the field runs past the end of the
///   message.
#[inline]
pub fn write_bits<W: Word>(
    message: &mut [W],
    start_bit: usize,
    bit_len: u32,
    value: W,
    flags: FieldFlags,
) -> Result<usize, Error> {
    Codec::new().write_bits(message, start_bit, bit_len, value, flags)
}

/// Reads `bit_len` bits from `message` at `start_bit`.
///
/// The field is returned in the most significant bits of the value, or
/// right-aligned with [`FieldFlags::START_LOW`]. All other bits of the
/// value are zero.
///
/// Returns the value and the bit position following the field. Fails
/// under the same conditions as [`write_bits`].
#[inline]
pub fn read_bits<W: Word>(
    message: &[W],
    start_bit: usize,
    bit_len: u32,
    flags: FieldFlags,
) -> Result<(W, usize), Error> {
    Codec::new().read_bits(message, start_bit, bit_len, flags)
}
