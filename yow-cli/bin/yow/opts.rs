//! Command line argument parsing for the yow utility.

use std::num::NonZeroU32;
use std::path::PathBuf;

use clap::Parser;

use yow_cli::{default_quotes_path, CliConfig};

/// Print a random quotation
///
/// yow picks a quotation at random from a file of quotations separated by NUL
/// bytes. Without -f it reads yow.lines from the directory of the program.
#[derive(Debug, Parser)]
#[command(
    name = "yow",
    version,
    about = "Print a random quotation",
    long_about = "yow picks a quotation at random from a file of quotations separated by NUL \
                  bytes. Without -f it reads yow.lines from the directory of the program."
)]
pub struct YowOpts {
    /// Quotations file to read instead of the default
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// Give up after this many offsets without a complete quotation
    #[arg(long = "max-attempts", value_name = "N")]
    max_attempts: Option<NonZeroU32>,

    /// Log what is being read (repeat for more detail)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl YowOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build CLI configuration from the parsed options
    pub fn config(&self) -> CliConfig {
        let file = self.file.clone().unwrap_or_else(default_quotes_path);
        CliConfig {
            file,
            max_attempts: self.max_attempts,
            verbose: self.verbose,
        }
    }
}
