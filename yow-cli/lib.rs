//! Shared functionality for the `yow` command-line tool.
//!
//! This module resolves where the quotations file lives, opens it, runs the
//! range initializer and the record picker from `yow-core`, and maps their
//! failures to diagnostics and exit statuses.

mod config;
mod error;
mod io;
mod process;


pub use config::{CliConfig, DEFAULT_BUFFER_SIZE, DEFAULT_FILE_NAME};
pub use error::{format_error_for_stderr, Error, Result};
pub use io::{default_quotes_path, open_quotes, quotes_dir_from_invocation};
pub use process::{run, run_cli};
