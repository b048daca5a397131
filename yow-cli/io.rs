//! Quotations file lookup and opening.

use std::env;
use std::ffi::OsStr;
use std::fs::File;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::DEFAULT_FILE_NAME;
use crate::error::{Error, Result};

/// Environment variable holding the path of the invoked program.
const INVOCATION_VAR: &str = "_";

/// Derives the directory of the quotations file from the invocation path.
///
/// The directory is everything before the last `/` of `invoked`. When
/// `invoked` is absent or has no `/`, the current directory is used; when the
/// only `/` is the leading one, the root directory is used.
pub fn quotes_dir_from_invocation(invoked: Option<&OsStr>) -> PathBuf {
    let Some(invoked) = invoked.and_then(OsStr::to_str) else {
        return PathBuf::from(".");
    };

    match invoked.rfind('/') {
        Some(0) => PathBuf::from("/"),
        Some(index) => PathBuf::from(&invoked[..index]),
        None => PathBuf::from("."),
    }
}

/// Path of the quotations file used when none is given on the command line.
///
/// Looks for [`DEFAULT_FILE_NAME`] next to the invoked program, as reported by
/// the shell through the `_` environment variable.
pub fn default_quotes_path() -> PathBuf {
    let invoked = env::var_os(INVOCATION_VAR);
    let path = quotes_dir_from_invocation(invoked.as_deref()).join(DEFAULT_FILE_NAME);
    debug!("default quotations file: {}", path.display());
    path
}

/// Opens the quotations file for reading.
///
/// # Errors
///
/// Returns [`Error::OpenInput`] carrying the path and the OS error if the file
/// cannot be opened.
pub fn open_quotes(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| Error::OpenInput {
        path: path.to_path_buf(),
        source,
    })
}
