use std::{
    fmt,
    hash::Hash,
    mem::size_of,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not},
};

use byteorder::{ByteOrder, NativeEndian, NetworkEndian};

mod private {
    pub trait Sealed {}
}

/// The widest word any [`Word`] implementation may have, in bytes.
pub(crate) const MAX_WORD_BYTES: usize = size_of::<u128>();

/// An unsigned integer type usable as the unit of a message buffer.
///
/// This trait is sealed and implemented for [`u16`], [`u32`], [`u64`]
/// and [`u128`].
pub trait Word:
    private::Sealed
    + Copy
    + Default
    + Eq
    + Hash
    + fmt::Debug
    + fmt::LowerHex
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + BitAndAssign
    + BitOrAssign
    + Send
    + Sync
    + 'static
{
    /// The width of the word in bits.
    const BITS: u32;
    /// The width of the word in bytes.
    const BYTES: usize;
    /// The word with no bits set.
    const ZERO: Self;
    /// The word with all bits set.
    const ONES: Self;

    /// Converts a word stored in network byte order to host order.
    fn from_network(self) -> Self;

    /// Converts a host-order word to network byte order for storage.
    fn to_network(self) -> Self;

    /// Shifts left by `n` bits, producing zero once `n` reaches
    /// [`Self::BITS`].
    fn shift_left(self, n: u32) -> Self;

    /// Shifts right by `n` bits, producing zero once `n` reaches
    /// [`Self::BITS`].
    fn shift_right(self, n: u32) -> Self;

    /// Decodes a host-order word from the first [`Self::BYTES`] bytes of
    /// `bytes`, which are in network order.
    fn read_network(bytes: &[u8]) -> Self;

    /// Encodes the host-order word into the first [`Self::BYTES`] bytes of
    /// `out` in network order.
    fn write_network(self, out: &mut [u8]);

    /// Reinterprets raw memory as a stored word without any conversion.
    fn read_native(bytes: &[u8]) -> Self;

    /// Copies the raw memory of a stored word into `out`.
    fn write_native(self, out: &mut [u8]);

    /// Truncates `value` to the low [`Self::BITS`] bits.
    fn truncate_from(value: u128) -> Self;

    /// Zero-extends the word to [`u128`].
    fn widen(self) -> u128;

    /// A mask with the `n` most significant bits set.
    #[inline]
    fn high_mask(n: u32) -> Self {
        Self::ONES.shift_left(Self::BITS.saturating_sub(n))
    }

    /// A mask with the `n` least significant bits set.
    #[inline]
    fn low_mask(n: u32) -> Self {
        Self::ONES.shift_right(Self::BITS.saturating_sub(n))
    }
}

macro_rules! impl_word {
    ($($ty:ty => $read:ident, $write:ident);* $(;)?) => {
        $(
            impl private::Sealed for $ty {}

            impl Word for $ty {
                const BITS: u32 = <$ty>::BITS;
                const BYTES: usize = size_of::<$ty>();
                const ZERO: Self = 0;
                const ONES: Self = <$ty>::MAX;

                #[inline]
                fn from_network(self) -> Self {
                    <$ty>::from_be(self)
                }

                #[inline]
                fn to_network(self) -> Self {
                    self.to_be()
                }

                #[inline]
                fn shift_left(self, n: u32) -> Self {
                    self.checked_shl(n).unwrap_or(0)
                }

                #[inline]
                fn shift_right(self, n: u32) -> Self {
                    self.checked_shr(n).unwrap_or(0)
                }

                #[inline]
                fn read_network(bytes: &[u8]) -> Self {
                    NetworkEndian::$read(bytes)
                }

                #[inline]
                fn write_network(self, out: &mut [u8]) {
                    NetworkEndian::$write(out, self)
                }

                #[inline]
                fn read_native(bytes: &[u8]) -> Self {
                    NativeEndian::$read(bytes)
                }

                #[inline]
                fn write_native(self, out: &mut [u8]) {
                    NativeEndian::$write(out, self)
                }

                #[inline]
                fn truncate_from(value: u128) -> Self {
                    value as $ty
                }

                #[inline]
                fn widen(self) -> u128 {
                    self as u128
                }
            }
        )*
    };
}

impl_word! {
    u16 => read_u16, write_u16;
    u32 => read_u32, write_u32;
    u64 => read_u64, write_u64;
    u128 => read_u128, write_u128;
}
