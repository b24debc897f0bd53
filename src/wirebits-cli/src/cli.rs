use clap::{Parser, Subcommand};

use crate::cmd::*;

mod args;
pub use args::WordBits;

mod io;
pub use io::*;

pub const HYPHEN: &str = "-";

/// The CLI interface for the wirebits application.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    /// The selected command.
    #[clap(subcommand)]
    pub command: WirebitsCommand,

    #[clap(flatten)]
    pub verbosity: args::Verbosity,
}

/// The top-level commands supported by wirebits.
#[derive(Debug, Subcommand)]
pub enum WirebitsCommand {
    Pack(pack::Pack),
    Unpack(unpack::Unpack),
    Dump(dump::Dump),
}

impl Command for WirebitsCommand {
    fn handle(self) -> eyre::Result<()> {
        match self {
            Self::Pack(pack) => pack.handle(),
            Self::Unpack(unpack) => unpack.handle(),
            Self::Dump(dump) => dump.handle(),
        }
    }
}
