use std::{
    fs,
    io::{self, BufWriter, IsTerminal, Write},
    path::PathBuf,
};

use clap::Args;
use eyre::WrapErr;
use serde::Serialize;
use wirebits::{Codec, MessageReader, Word, message, trace::LogTracer};

use super::Command;
use crate::{
    cli::{WordBits, read_input},
    field::{field_int, hex_string},
};

/// Subcommand for decoding fields from a binary message into JSON.
#[derive(Debug, Args)]
pub struct Unpack {
    /// The message file to decode, or "-" to read from stdin.
    input: String,

    /// The lengths of the fields to decode in order, in bits.
    #[clap(long, required = true, value_delimiter = ',')]
    layout: Vec<usize>,

    /// The width of the message words.
    #[clap(long, value_enum, env = "WIREBITS_WORD_BITS", default_value_t = WordBits::W64)]
    word_bits: WordBits,

    /// The bit position of the first field.
    #[clap(long, default_value_t = 0)]
    start: usize,

    /// Writes the JSON records to a file instead of stdout.
    #[clap(short, long)]
    output: Option<PathBuf>,
}

/// A decoded field.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct Record {
    start: usize,
    len: usize,
    /// The field's bits as a hex string, padded with zero bits to a
    /// whole number of bytes.
    value: String,
    /// The field as an unsigned integer, for fields of up to 128 bits.
    #[serde(skip_serializing_if = "Option::is_none")]
    int: Option<u128>,
}

impl Unpack {
    fn run<W: Word>(self) -> eyre::Result<()> {
        let data = read_input(&self.input)?;
        let records = unpack_message::<W>(&data, self.start, &self.layout)?;

        write_records(self.output, &records)
    }
}

/// Decodes fields of the given lengths back to back from the wire image
/// `data`, starting at bit `start`.
fn unpack_message<W: Word>(
    data: &[u8],
    start: usize,
    layout: &[usize],
) -> eyre::Result<Vec<Record>> {
    let message: Vec<W> = message::from_wire_bytes(data);
    log::info!(
        "Decoding {} fields from {} {}-bit words",
        layout.len(),
        message.len(),
        W::BITS
    );

    let codec = Codec::with_tracer(LogTracer);
    let mut reader = MessageReader::with_codec(message.as_slice(), codec);
    reader.seek(start);

    let mut records = Vec::with_capacity(layout.len());
    for (i, &len) in layout.iter().enumerate() {
        let start = reader.position();

        let mut out = vec![0; message::bytes_for_bits(len)];
        reader.read_bytes(len, &mut out).wrap_err_with(|| {
            format!("failed to decode field {i} of {len} bits at {start}")
        })?;

        records.push(Record {
            start,
            len,
            value: hex_string(&out),
            int: field_int(&out, len),
        });
    }

    Ok(records)
}

// Emits the records as JSON, pretty-printed only when stdout is a terminal.
fn write_records(out: Option<PathBuf>, records: &[Record]) -> eyre::Result<()> {
    if let Some(path) = out {
        let file = fs::File::create(&path)
            .wrap_err_with(|| format!("failed to create '{}'", path.display()))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, records)?;
        writer.flush()?;
    } else {
        let mut stdout = io::stdout().lock();

        if stdout.is_terminal() {
            serde_json::to_writer_pretty(&mut stdout, records)?;
            writeln!(stdout)?;
        } else {
            serde_json::to_writer(&mut stdout, records)?;
        }
    }

    Ok(())
}

impl Command for Unpack {
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
