//! Configuration types and constants for the yow CLI.

use std::num::NonZeroU32;
use std::path::PathBuf;

/// Default buffer size for standard output
pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

/// Name of the quotations file looked up next to the program.
///
/// Can be overridden at build time through the `YOW_FILE` environment variable.
pub const DEFAULT_FILE_NAME: &str = match option_env!("YOW_FILE") {
    Some(name) => name,
    None => "yow.lines",
};

/// Configuration for a single invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Quotations file to read
    pub file: PathBuf,
    /// Give up after this many boundary misses (unbounded when `None`)
    pub max_attempts: Option<NonZeroU32>,
    /// Verbosity level, as counted by `-v` occurrences
    pub verbose: u8,
}

impl CliConfig {
    /// Creates a configuration reading `file` with default settings.
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            max_attempts: None,
            verbose: 0,
        }
    }

    /// Log filter matching the configured verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
