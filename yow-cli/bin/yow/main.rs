//! Random quotation utility
//!
//! Prints one quotation chosen at random from a file of NUL-separated
//! quotations, by default `yow.lines` next to the program.

use std::process;

mod opts;

use env_logger::Env;
use opts::YowOpts;

use yow_cli::{format_error_for_stderr, run_cli};

const PROGRAM_NAME: &str = "yow";

fn main() {
    let opts = YowOpts::parse();
    let config = opts.config();

    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_filter()))
        .format_target(false)
        .format_timestamp(None)
        .init();

    if let Err(err) = run_cli(&config) {
        eprintln!("{}", format_error_for_stderr(PROGRAM_NAME, &err));
        process::exit(err.exit_code());
    }
}
