use clap::{ArgAction, Args, ValueEnum};
use log::LevelFilter;

/// Configures the verbosity of the builtin logger.
#[derive(Clone, Copy, Debug, Args)]
pub struct Verbosity {
    /// Increases the log verbosity.
    ///
    /// `-v` is Info, `-vv` is Debug, `-vvv` traces every word access.
    #[clap(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Silences warnings, or all logging when given twice.
    #[clap(short, long, action = ArgAction::Count, global = true, conflicts_with = "verbose")]
    pub quiet: u8,
}

impl Verbosity {
    /// Configures the global logger based on the settings.
    pub fn setup(self) -> eyre::Result<()> {
        simple_logger::SimpleLogger::new()
            .with_level(self.level_filter())
            .init()?;

        Ok(())
    }

    fn level_filter(self) -> LevelFilter {
        match (self.quiet, self.verbose) {
            (0, 0) => LevelFilter::Warn,
            (0, 1) => LevelFilter::Info,
            (0, 2) => LevelFilter::Debug,
            (0, _) => LevelFilter::Trace,
            (1, _) => LevelFilter::Error,
            _ => LevelFilter::Off,
        }
    }
}

/// The width of a message word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum WordBits {
    #[value(name = "16")]
    W16,
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
    #[value(name = "128")]
    W128,
}

impl WordBits {
    /// Gets the word width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::W16 => u16::BITS,
            Self::W32 => u32::BITS,
            Self::W64 => u64::BITS,
            Self::W128 => u128::BITS,
        }
    }
}
