use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use clap::Args;
use eyre::WrapErr;
use wirebits::{Codec, MessageWriter, Word, message, trace::LogTracer};
use wirebits_utils::hexdump::dump_hex;

use super::Command;
use crate::{
    cli::WordBits,
    field::{FieldSpec, parse_field},
};

/// Subcommand for packing fields into a binary message.
#[derive(Debug, Args)]
pub struct Pack {
    /// The fields to pack in order, each given as LEN:VALUE.
    ///
    /// A decimal VALUE is an integer whose low LEN bits are used. A
    /// 0x-prefixed VALUE is a hex bit string whose leading LEN bits are
    /// used. Neither depends on the word width.
    #[clap(required = true, value_parser = parse_field)]
    fields: Vec<FieldSpec>,

    /// The width of the message words.
    #[clap(long, value_enum, env = "WIREBITS_WORD_BITS", default_value_t = WordBits::W64)]
    word_bits: WordBits,

    /// The number of words in the message.
    #[clap(long, default_value_t = 24)]
    words: usize,

    /// The bit position of the first field.
    #[clap(long, default_value_t = 0)]
    start: usize,

    /// Writes the raw message to a file instead of dumping it to stdout.
    #[clap(short, long)]
    output: Option<PathBuf>,
}

impl Pack {
    fn run<W: Word>(self) -> eyre::Result<()> {
        let wire = pack_message::<W>(self.words, self.start, &self.fields)?;

        match self.output {
            Some(path) => fs::write(&path, &wire)
                .wrap_err_with(|| format!("failed to write message to '{}'", path.display())),

            None => {
                let mut stdout = io::stdout().lock();
                dump_hex(&mut stdout, &wire, true)?;
                stdout.flush()?;

                Ok(())
            }
        }
    }
}

/// Packs `fields` back to back into a zeroed message of `words` words,
/// starting at bit `start`, and returns its wire image.
fn pack_message<W: Word>(
    words: usize,
    start: usize,
    fields: &[FieldSpec],
) -> eyre::Result<Vec<u8>> {
    let mut message = vec![W::ZERO; words];

    let codec = Codec::with_tracer(LogTracer);
    let mut writer = MessageWriter::with_codec(message.as_mut_slice(), codec);
    writer.seek(start);

    for (i, field) in fields.iter().enumerate() {
        log::debug!("Packing field {i} ({field}) at bit {}", writer.position());
        if field.truncates() {
            log::warn!("Field {i} ({field}) is truncated to {} bits", field.len);
        }

        let bytes = field
            .to_bytes()
            .wrap_err_with(|| format!("invalid value for field {i} ({field})"))?;
        writer
            .write_bytes(field.len, &bytes)
            .wrap_err_with(|| format!("failed to pack field {i} ({field})"))?;
    }

    log::info!(
        "Packed {} fields into bits {start}..{} of {words} {}-bit words",
        fields.len(),
        writer.position(),
        W::BITS
    );

    Ok(message::to_wire_bytes(&message))
}

impl Command for Pack {
    fn handle(self) -> eyre::Result<()> {
        log::debug!("Using {}-bit message words", self.word_bits.bits());

        match self.word_bits {
            WordBits::W16 => self.run::<u16>(),
            WordBits::W32 => self.run::<u32>(),
            WordBits::W64 => self.run::<u64>(),
            WordBits::W128 => self.run::<u128>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAPACITY: usize = 256;

    fn parse_all(specs: &[&str]) -> eyre::Result<Vec<FieldSpec>> {
        specs
            .iter()
            .map(|s| parse_field(s).map_err(eyre::Report::msg))
            .collect()
    }

    fn pack_every_width(start: usize, fields: &[FieldSpec]) -> eyre::Result<[Vec<u8>; 4]> {
        Ok([
            pack_message::<u16>(CAPACITY / 16, start, fields)?,
            pack_message::<u32>(CAPACITY / 32, start, fields)?,
            pack_message::<u64>(CAPACITY / 64, start, fields)?,
            pack_message::<u128>(CAPACITY / 128, start, fields)?,
        ])
    }

    #[test]
    fn wire_image_is_independent_of_word_width() -> eyre::Result<()> {
        let fields = parse_all(&["20:0xabcde", "12:2748"])?;

        for wire in pack_every_width(0, &fields)? {
            assert_eq!(wire.len(), CAPACITY / 8);
            assert_eq!(wire[..4], [0xab, 0xcd, 0xea, 0xbc]);
            assert!(wire[4..].iter().all(|&b| b == 0));
        }

        Ok(())
    }

    #[test]
    fn mixed_fields_at_an_offset() -> eyre::Result<()> {
        let fields = parse_all(&[
            "3:5",
            "64:0xaaaaaaaacccccccc",
            "148:0x0102030405060708a0b0c0d0e0f0a1b2bb4210",
            "17:0x1ffff",
            "2:1",
        ])?;

        let [narrow, rest @ ..] = pack_every_width(11, &fields)?;
        for wire in rest {
            assert_eq!(wire, narrow);
        }

        Ok(())
    }

    #[test]
    fn failures_name_the_field() -> eyre::Result<()> {
        let fields = parse_all(&["200:0x00", "8:1"])?;

        let err = pack_message::<u64>(4, 0, &fields).unwrap_err();
        assert!(err.to_string().contains("field 0 (200:0x00)"));

        let fields = parse_all(&["64:1", "8:1"])?;
        let err = pack_message::<u64>(1, 0, &fields).unwrap_err();
        assert!(err.to_string().contains("field 1"));

        Ok(())
    }
}
