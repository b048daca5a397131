//! End-to-end processing for a single invocation.

use std::io::{self, Write};

use log::debug;

use yow_core::{pick_with_limit, scan_range, write_quotation, SeededRandom};

use crate::config::{CliConfig, DEFAULT_BUFFER_SIZE};
use crate::error::{Error, Result};
use crate::io::open_quotes;

/// Prints one random quotation from the configured file to `writer`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is malformed, if the
/// record picker fails, or if writing fails.
pub fn run<W>(config: &CliConfig, writer: W) -> Result<()>
where
    W: Write,
{
    let mut file = open_quotes(&config.file)?;
    let range = scan_range(&mut file)?;
    debug!(
        "{}: picking from bytes {}..{}",
        config.file.display(),
        range.start(),
        range.end()
    );

    let mut rng = SeededRandom::from_process();
    let quotation = pick_with_limit(&mut file, range, &mut rng, config.max_attempts)?;
    write_quotation(writer, &quotation).map_err(Error::Output)
}

/// Runs the CLI against standard output.
///
/// # Errors
///
/// See [`run`].
pub fn run_cli(config: &CliConfig) -> Result<()> {
    let stdout = io::stdout();
    let writer = io::BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, stdout.lock());
    run(config, writer)
}
