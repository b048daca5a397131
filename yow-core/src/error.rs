//! Error types and result handling for quotation file access.

use std::fmt;
use std::io::{self, SeekFrom};

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of the range initializer and the record picker.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while reading the quotation stream.
    Io(io::Error),

    /// Repositioning the quotation stream failed.
    Seek {
        /// Position that was requested
        position: SeekFrom,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The stream contains no separator byte at all.
    NoSeparators,

    /// The record buffer could not grow.
    AllocationFailed {
        /// Capacity in bytes that was requested
        capacity: usize,
    },

    /// No complete record could be recovered.
    ///
    /// Only returned when the caller bounds the number of attempts, or when the
    /// data range is empty.
    NoRecord {
        /// Number of offsets that were tried
        attempts: u32,
    },
}

impl Error {
    /// Process exit status conventionally associated with this error.
    ///
    /// `2` marks a malformed file, `3` memory exhaustion, `1` everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::NoSeparators => 2,
            Error::AllocationFailed { .. } => 3,
            Error::Io(_) | Error::Seek { .. } | Error::NoRecord { .. } => 1,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "{err}"),
            Error::Seek { source, .. } => write!(f, "{source}"),
            Error::NoSeparators => f.write_str("file contains no separators"),
            Error::AllocationFailed { .. } => f.write_str("virtual memory exhausted"),
            Error::NoRecord { attempts } => {
                write!(f, "no quotation found after {attempts} attempts")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) | Error::Seek { source: err, .. } => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
