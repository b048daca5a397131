//! Error types for yow CLI operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for yow CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to open the quotations file
    #[error("{}: {source}", path.display())]
    OpenInput {
        /// Path to the quotations file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Reading or picking from the quotations file failed
    #[error(transparent)]
    Core(#[from] yow_core::Error),

    /// Writing the quotation to standard output failed
    #[error("write error: {0}")]
    Output(#[source] io::Error),
}

impl Error {
    /// Process exit status for this error.
    ///
    /// `1` for access failures, `2` for a malformed file, `3` when memory is
    /// exhausted.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::OpenInput { .. } | Error::Output(_) => 1,
            Error::Core(err) => err.exit_code(),
        }
    }
}

/// Specialized `Result` type for yow CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Formats an error message for stderr, prefixed with the program name.
pub fn format_error_for_stderr(program: &str, err: &Error) -> String {
    format!("{program}: {err}")
}
