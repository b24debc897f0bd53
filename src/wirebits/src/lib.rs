//! Reads and writes arbitrary-width bit fields in network-order messages.
//!
//! A message is a slice of fixed-width [`Word`]s, each stored in network
//! (big-endian) byte order. Bits are numbered MSB-first, so bit 0 is the
//! most significant bit of the first word. Fields may start at any bit
//! and may straddle word boundaries.
//!
//! The engine is layered:
//!
//! - [`write_bits`] and [`read_bits`] move up to one word's worth of bits.
//! - [`write_bits_wide`] and [`read_bits_wide`] move fields of any width
//!   given as a sequence of MSB-aligned words.
//! - [`write_bits_bytes`] and [`read_bits_bytes`] move fields given as
//!   network-order byte strings.
//!
//! Every operation returns the bit position following the field, so
//! fields can be chained without recomputing offsets. [`MessageWriter`]
//! and [`MessageReader`] wrap that pattern.
//!
//! # Failure semantics
//!
//! Failed operations never roll back. When a wide or byte operation fails
//! partway through, the words written by earlier steps stay modified.
//! Callers needing all-or-nothing encoding must validate field bounds up
//! front.
//!
//! ```
//! use wirebits::{read_bits, write_bits, FieldFlags};
//!
//! let mut message = [0u64; 2];
//! let flags = FieldFlags::ERASE | FieldFlags::START_LOW;
//!
//! let next = write_bits(&mut message, 60, 12, 0xabc, flags)?;
//! assert_eq!(next, 72);
//!
//! let (value, _) = read_bits(&message, 60, 12, FieldFlags::START_LOW)?;
//! assert_eq!(value, 0xabc);
//! # Ok::<(), wirebits::Error>(())
//! ```

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use bitflags::bitflags;

mod bytes;
pub use bytes::{read_bits_bytes, write_bits_bytes};

mod codec;
pub use codec::Codec;

mod cursor;
pub use cursor::{MessageReader, MessageWriter};

pub mod error;
pub use error::{Error, ErrorKind, Layer};

pub mod message;

mod scratch;

mod single;
pub use single::{read_bits, write_bits};

pub mod trace;

mod wide;
pub use wide::{read_bits_wide, write_bits_wide};

mod word;
pub use word::Word;

bitflags! {
    /// Per-call options controlling how a field is placed.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FieldFlags: u8 {
        /// Clears the destination bits before the value is merged.
        ///
        /// Without it, the value's 1-bits are ORed over the existing
        /// message content.
        ///
        /// Ignored by read operations.
        const ERASE = 1 << 0;
        /// The value's significant bits sit at its low end.
        ///
        /// Without it, the field is taken from the most significant
        /// bits of the value. Only honored by the single-word layer.
        const START_LOW = 1 << 1;
    }
}
