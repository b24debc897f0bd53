//! Hex dumps for inspecting binary buffers.
//!
//! Every line covers 16 bytes, split into two groups of eight:
//!
//! ```text
//! 00000 : 48 65 6c 6c 6f 20 57 6f -- 72 6c 64 21 0a 00 01 02  |  Hello World!....
//! ```
//!
//! The address column is optional. A short last line is padded so that
//! the ASCII column stays aligned.

use std::{fmt::Write as _, io, iter, slice};

/// The number of bytes presented per line.
pub const BYTES_PER_LINE: usize = 16;

// Width of the hex column on a full line: 16 bytes plus the group separator.
const HEX_WIDTH: usize = BYTES_PER_LINE * 3 + 3;

/// An iterator over the lines of a hex dump.
///
/// Created by [`hex_lines`].
#[derive(Clone, Debug)]
pub struct HexLines<'a> {
    chunks: slice::Chunks<'a, u8>,
    addr: usize,
    show_addr: bool,
}

impl Iterator for HexLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.chunks.next()?;
        let mut line = String::with_capacity(80);

        if self.show_addr {
            let _ = write!(line, "{:05x} : ", self.addr);
        }

        let hex_start = line.len();
        for (i, byte) in chunk.iter().enumerate() {
            if i == BYTES_PER_LINE / 2 {
                line.push_str("-- ");
            }
            let _ = write!(line, "{byte:02x} ");
        }

        let hex_len = line.len() - hex_start;
        line.extend(iter::repeat(' ').take(HEX_WIDTH - hex_len));

        line.push_str(" |  ");
        line.extend(chunk.iter().map(|&b| printable(b)));

        self.addr += chunk.len();
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for HexLines<'_> {}

#[inline]
fn printable(byte: u8) -> char {
    if byte.is_ascii_graphic() || byte == b' ' {
        byte as char
    } else {
        '.'
    }
}

/// Produces the lines of a hex dump over `data`.
pub fn hex_lines(data: &[u8], show_addr: bool) -> HexLines<'_> {
    HexLines {
        chunks: data.chunks(BYTES_PER_LINE),
        addr: 0,
        show_addr,
    }
}

/// Writes a hex dump of `data` to `out`, one line at a time.
pub fn dump_hex<W: io::Write>(out: &mut W, data: &[u8], show_addr: bool) -> io::Result<()> {
    for line in hex_lines(data, show_addr) {
        writeln!(out, "{line}")?;
    }

    Ok(())
}

/// Hands every line of a hex dump of `data` to `f`.
///
/// This is useful for routing dumps into a logger.
pub fn dump_hex_with<F>(data: &[u8], show_addr: bool, mut f: F)
where
    F: FnMut(&str),
{
    for line in hex_lines(data, show_addr) {
        f(&line);
    }
}
