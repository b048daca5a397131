//! Random record picker.
//!
//! A uniformly drawn offset almost always lands inside a record. The picker
//! skips forward to the next separator, so the record that follows is read from
//! its first byte, then collects bytes up to the separator after it (or the end
//! of the stream, which closes the final record).

use std::fmt;
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::num::NonZeroU32;

use log::{debug, trace};

use crate::config::{is_space, DataRange, INITIAL_CAPACITY, READ_BUFFER_SIZE, SEPARATOR};
use crate::error::{Error, Result};
use crate::random::RandomSource;
use crate::range::skip_past_separator;

/// A single record with its leading whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quotation(Vec<u8>);

impl Quotation {
    /// Raw bytes of the record.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the record in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the record holds no bytes. Never the case for records
    /// returned by [`pick`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the quotation and returns its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Display for Quotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// Picks one record at a uniformly random offset within `range`.
///
/// Offsets from which no complete record can be recovered (the stream ends
/// before the next separator, or only whitespace follows it) are discarded and
/// a fresh offset is drawn, for as long as it takes.
///
/// # Errors
///
/// - [`Error::Seek`] if the stream cannot be positioned at a drawn offset
/// - [`Error::Io`] if reading fails
/// - [`Error::AllocationFailed`] if the record buffer cannot grow
/// - [`Error::NoRecord`] if `range` is empty
pub fn pick<R, G>(reader: &mut R, range: DataRange, rng: &mut G) -> Result<Quotation>
where
    R: Read + Seek,
    G: RandomSource + ?Sized,
{
    pick_with_limit(reader, range, rng, None)
}

/// Same as [`pick`], but gives up after `max_attempts` offsets.
///
/// # Errors
///
/// Everything [`pick`] returns, plus [`Error::NoRecord`] once `max_attempts`
/// offsets have missed.
pub fn pick_with_limit<R, G>(
    reader: &mut R,
    range: DataRange,
    rng: &mut G,
    max_attempts: Option<NonZeroU32>,
) -> Result<Quotation>
where
    R: Read + Seek,
    G: RandomSource + ?Sized,
{
    let mut attempts = 0u32;

    loop {
        if max_attempts.is_some_and(|limit| attempts >= limit.get()) {
            return Err(Error::NoRecord { attempts });
        }

        let Some(offset) = range.offset_for(rng.next_u64()) else {
            return Err(Error::NoRecord { attempts });
        };
        attempts = attempts.saturating_add(1);

        let position = SeekFrom::Start(offset);
        reader
            .seek(position)
            .map_err(|source| Error::Seek { position, source })?;

        // A fresh buffer per attempt; nothing read on a miss is reused.
        let mut buffered = BufReader::with_capacity(READ_BUFFER_SIZE, &mut *reader);
        if let Some(quotation) = read_record(&mut buffered)? {
            trace!(
                "picked {} byte record at offset {offset} after {attempts} attempt(s)",
                quotation.len()
            );
            return Ok(quotation);
        }

        debug!("no complete record after offset {offset}, drawing again");
    }
}

/// Writes the quotation followed by a newline and flushes the writer.
///
/// # Errors
///
/// Returns any error produced by `writer`.
pub fn write_quotation<W>(mut writer: W, quotation: &Quotation) -> io::Result<()>
where
    W: Write,
{
    writer.write_all(quotation.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()
}

/// Reads the record that follows the next separator.
///
/// Returns `None` on a boundary miss.
fn read_record<B>(reader: &mut B) -> Result<Option<Quotation>>
where
    B: BufRead,
{
    if skip_past_separator(reader)?.is_none() {
        return Ok(None);
    }
    if !skip_whitespace(reader)? {
        return Ok(None);
    }

    let mut record = RecordBuffer::new()?;
    loop {
        let (used, terminated) = {
            let available = reader.fill_buf()?;
            if available.is_empty() {
                break;
            }
            match available.iter().position(|&byte| byte == SEPARATOR) {
                Some(index) => {
                    record.extend(&available[..index])?;
                    (index + 1, true)
                }
                None => {
                    record.extend(available)?;
                    (available.len(), false)
                }
            }
        };

        reader.consume(used);
        if terminated {
            break;
        }
    }

    Ok(Some(record.into_quotation()))
}

/// Consumes whitespace up to the first other byte, which is left unread.
///
/// Returns `false` if the stream ended first.
fn skip_whitespace<B>(reader: &mut B) -> Result<bool>
where
    B: BufRead,
{
    loop {
        let (used, found) = {
            let available = reader.fill_buf()?;
            if available.is_empty() {
                return Ok(false);
            }
            match available.iter().position(|&byte| !is_space(byte)) {
                Some(index) => (index, true),
                None => (available.len(), false),
            }
        };

        reader.consume(used);
        if found {
            return Ok(true);
        }
    }
}

/// Growable record storage that doubles its capacity when full.
struct RecordBuffer {
    bytes: Vec<u8>,
}

impl RecordBuffer {
    fn new() -> Result<Self> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(INITIAL_CAPACITY)
            .map_err(|_| Error::AllocationFailed {
                capacity: INITIAL_CAPACITY,
            })?;
        Ok(Self { bytes })
    }

    fn extend(&mut self, chunk: &[u8]) -> Result<()> {
        let required = self
            .bytes
            .len()
            .checked_add(chunk.len())
            .ok_or(Error::AllocationFailed {
                capacity: usize::MAX,
            })?;

        let mut capacity = self.bytes.capacity().max(INITIAL_CAPACITY);
        while capacity < required {
            capacity = capacity
                .checked_mul(2)
                .ok_or(Error::AllocationFailed {
                    capacity: usize::MAX,
                })?;
        }

        if capacity > self.bytes.capacity() {
            self.bytes
                .try_reserve_exact(capacity - self.bytes.len())
                .map_err(|_| Error::AllocationFailed { capacity })?;
        }

        self.bytes.extend_from_slice(chunk);
        Ok(())
    }

    fn into_quotation(self) -> Quotation {
        Quotation(self.bytes)
    }
}
