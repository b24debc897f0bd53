use std::io::{self, Write};

use clap::Args;
use wirebits_utils::hexdump::dump_hex;

use super::Command;
use crate::cli::read_input;

/// Subcommand for printing a hex dump of binary data.
#[derive(Debug, Args)]
pub struct Dump {
    /// The file to dump, or "-" to read from stdin.
    input: String,

    /// Omits the address column.
    #[clap(long)]
    no_addr: bool,
}

impl Command for Dump {
    fn handle(self) -> eyre::Result<()> {
        let data = read_input(&self.input)?;
        log::info!("Dumping {} bytes from '{}'", data.len(), self.input);

        let mut stdout = io::stdout().lock();
        dump_hex(&mut stdout, &data, !self.no_addr)?;
        stdout.flush()?;

        Ok(())
    }
}
