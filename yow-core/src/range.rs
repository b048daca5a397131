//! Range initializer: locates the part of a quotation file that holds records.

use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};

use log::debug;

use crate::config::{DataRange, AVG_LEN, READ_BUFFER_SIZE, SEPARATOR};
use crate::error::{Error, Result};

/// Computes the [`DataRange`] of a quotation stream.
///
/// Reads from the current position up to and including the first separator.
/// The position just past it is the header length; when that exceeds
/// [`AVG_LEN`] it is reduced by [`AVG_LEN`] so the first quotation stays
/// reachable. The range then runs from there to the end of the stream.
///
/// The stream is left positioned at its end.
///
/// # Errors
///
/// - [`Error::NoSeparators`] if the stream ends before any separator
/// - [`Error::Seek`] if the stream cannot be repositioned
/// - [`Error::Io`] if reading fails
pub fn scan_range<R>(reader: &mut R) -> Result<DataRange>
where
    R: Read + Seek,
{
    let origin = reader.stream_position().map_err(|source| Error::Seek {
        position: SeekFrom::Current(0),
        source,
    })?;

    let consumed = {
        let mut buffered = BufReader::with_capacity(READ_BUFFER_SIZE, &mut *reader);
        skip_past_separator(&mut buffered)?.ok_or(Error::NoSeparators)?
    };

    let mut header_len = origin + consumed;
    if header_len > AVG_LEN {
        header_len -= AVG_LEN;
    }

    let position = SeekFrom::End(0);
    let file_size = reader
        .seek(position)
        .map_err(|source| Error::Seek { position, source })?;

    let range = DataRange::new(header_len, file_size.saturating_sub(header_len));
    debug!(
        "data range starts at {} and spans {} of {file_size} bytes",
        range.start(),
        range.len()
    );
    Ok(range)
}

/// Consumes bytes up to and including the next separator.
///
/// Returns the number of bytes consumed, separator included, or `None` if the
/// stream ended first.
pub(crate) fn skip_past_separator<B>(reader: &mut B) -> Result<Option<u64>>
where
    B: BufRead,
{
    let mut consumed = 0u64;
    loop {
        let (used, found) = {
            let available = reader.fill_buf()?;
            if available.is_empty() {
                return Ok(None);
            }
            match available.iter().position(|&byte| byte == SEPARATOR) {
                Some(index) => (index + 1, true),
                None => (available.len(), false),
            }
        };

        reader.consume(used);
        consumed += used as u64;
        if found {
            return Ok(Some(consumed));
        }
    }
}
