use std::{
    fs,
    io::{self, IsTerminal, Read},
    process,
};

use clap::CommandFactory;
use eyre::WrapErr;

use super::{Cli, HYPHEN};

/// Obtains a buffered reader over the contents of stdin.
///
/// This function will terminate the process and print the running
/// command's help if stdin is connected to a terminal.
pub fn stdin_reader() -> io::BufReader<io::StdinLock<'static>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        let _ = Cli::command().print_help();
        process::exit(2);
    }

    io::BufReader::new(stdin.lock())
}

/// Reads the whole input given on the command line.
///
/// A value of "-" reads from stdin, everything else is treated as a
/// file path.
pub fn read_input(input: &str) -> eyre::Result<Vec<u8>> {
    if input == HYPHEN {
        let mut data = Vec::new();
        stdin_reader()
            .read_to_end(&mut data)
            .wrap_err("failed to read message from stdin")?;

        Ok(data)
    } else {
        fs::read(input).wrap_err_with(|| format!("failed to read message from '{input}'"))
    }
}
